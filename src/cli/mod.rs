pub mod bundle;
pub mod completions;
pub mod import;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::output::Printer;
use crate::pipeline::BatchReport;
use crate::validation::print_diagnostics;

/// picon-assets - C++ asset source generator
#[derive(Parser, Debug)]
#[command(name = "picon-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate GS4 images and fonts from an assets directory
    Bundle(bundle::BundleArgs),

    /// Generate images in a chosen pixel format from a directory of PNGs
    Import(import::ImportArgs),

    /// Check assets for symbol clashes and out-of-bounds glyphs
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Print the per-batch diagnostics and the closing status line.
fn report_batch(report: &BatchReport, printer: &Printer) {
    print_diagnostics(&report.diagnostics, printer);
    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            crate::output::count(report.assets.len(), "asset"),
            report.describe()
        ),
    );
}
