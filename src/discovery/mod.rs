//! Asset discovery: directory listing and the optional `picon.yaml` manifest.

mod manifest;
mod scanner;

use std::path::Path;

use crate::error::Result;

pub use manifest::{Manifest, DEFAULT_IMAGES_NAMESPACE};
pub use scanner::{detect_asset_kind, list_assets, AssetKind};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "picon.yaml";

/// Subdirectory of an assets root holding images.
pub const IMAGES_DIR: &str = "images";

/// Subdirectory of an assets root holding font descriptors.
pub const FONTS_DIR: &str = "fonts";

/// Load the manifest for an input directory.
///
/// An explicit path must exist. Otherwise `picon.yaml` inside `dir` is used
/// when present, and the defaults when not.
pub fn load_manifest(dir: &Path, explicit: Option<&Path>) -> Result<Manifest> {
    if let Some(path) = explicit {
        return Manifest::load(path);
    }

    let path = dir.join(MANIFEST_FILENAME);
    if path.is_file() {
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_absent() {
        let dir = tempdir().unwrap();
        assert_eq!(load_manifest(dir.path(), None).unwrap(), Manifest::default());
    }

    #[test]
    fn test_load_manifest_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: GS4A1\n").unwrap();

        let manifest = load_manifest(dir.path(), None).unwrap();
        assert_eq!(manifest.format, Some(PixelFormat::Gs4A1));
    }

    #[test]
    fn test_load_manifest_explicit_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("other.yaml");
        assert!(load_manifest(dir.path(), Some(&missing)).is_err());
    }
}
