use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::pipeline::validate_assets;
use crate::validation::{print_diagnostics, summary};

/// Check assets without generating anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Assets directory (with `images/` and `fonts/`) or a flat image directory
    pub assets_dir: PathBuf,

    /// Manifest to read instead of `<assets-dir>/picon.yaml`
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(&args.assets_dir, args.manifest.as_deref())?;
    let result = validate_assets(&args.assets_dir, &manifest)?;

    print_diagnostics(&result, printer);
    printer.status(
        "Checked",
        &format!("{} ({})", display_path(&args.assets_dir), summary(&result)),
    );

    result.into_result().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use image::{GrayImage, Luma};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_out_of_bounds_glyph_is_only_a_warning() {
        let dir = tempdir().unwrap();
        let fonts = dir.path().join("fonts");
        fs::create_dir_all(&fonts).unwrap();
        GrayImage::from_pixel(4, 4, Luma([0]))
            .save(fonts.join("wide.png"))
            .unwrap();
        fs::write(
            fonts.join("wide.json"),
            r#"{"meta": {"image": "wide.png"}, "frames": [{"frame": {"x": 2, "y": 0, "w": 4, "h": 4}, "spriteSourceSize": {"y": 0}}]}"#,
        )
        .unwrap();

        let args = ValidateArgs {
            assets_dir: dir.path().to_path_buf(),
            manifest: None,
        };
        assert!(run(args, &Printer::quiet()).is_ok());
    }

    #[test]
    fn test_validate_fails_on_invalid_names() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        GrayImage::from_pixel(1, 1, Luma([0]))
            .save(images.join("bad name.png"))
            .unwrap();

        let args = ValidateArgs {
            assets_dir: dir.path().to_path_buf(),
            manifest: None,
        };
        assert!(matches!(
            run(args, &Printer::quiet()),
            Err(AssetError::Validation { .. })
        ));
    }
}
