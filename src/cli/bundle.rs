//! Bundle command implementation.
//!
//! Converts `<assets>/images/*.png` and `<assets>/fonts/*.json` into GS4
//! `Image` and `Font` definitions.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::Result;
use crate::output::Printer;
use crate::pipeline;

/// Generate GS4 images and fonts from an assets directory
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Directory containing `images/` and `fonts/`
    pub assets_dir: PathBuf,

    /// Directory receiving `images/images.{hpp,cpp}` and `fonts/fonts.{hpp,cpp}`
    pub output_dir: PathBuf,
}

pub fn run(args: BundleArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(&args.assets_dir, None)?;
    let reports = pipeline::bundle(&args.assets_dir, &args.output_dir, &manifest, printer)?;

    for report in &reports {
        super::report_batch(report, printer);
    }

    Ok(())
}
