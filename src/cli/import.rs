//! Import command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::{AssetError, Result};
use crate::format::PixelFormat;
use crate::output::Printer;
use crate::pipeline::{self, ImportOptions};

/// Generate images in a chosen pixel format from a directory of PNGs
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Directory of PNG images
    #[arg(short = 'i', long)]
    pub input_dir: PathBuf,

    /// Directory receiving images.hpp and images.cpp
    #[arg(short = 'o', long)]
    pub output_dir: PathBuf,

    /// Pixel format of the generated data [default: GS4]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<PixelFormat>,

    /// Namespace wrapping the generated images [default: assets::images]
    #[arg(long)]
    pub images_namespace: Option<String>,

    /// Manifest to read instead of `<input-dir>/picon.yaml`
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ImportArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(&args.input_dir, args.manifest.as_deref())?;

    let options = ImportOptions::resolve(
        args.input_dir,
        args.output_dir,
        args.format,
        args.images_namespace.as_deref(),
        &manifest,
    );

    if options.images_namespace.trim().is_empty() {
        return Err(AssetError::Parse {
            message: "Images namespace must not be empty".to_string(),
            help: Some("Pass --images-namespace, e.g. assets::images".to_string()),
        });
    }

    let report = pipeline::import_images_with(&options, &manifest, printer)?;
    super::report_batch(&report, printer);

    Ok(())
}
