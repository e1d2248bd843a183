//! Validation of generated symbols and font tables.
//!
//! Checks never change what gets generated. Batch runs report the
//! diagnostics; `picon-assets validate` fails when any error is found.

mod checks;
mod warning;

use std::path::{Path, PathBuf};

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::font::GlyphRect;
use crate::output::{count, Printer};

/// A C++ symbol produced from one asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub source: PathBuf,
    /// Built from another symbol's name (`<name>_data`, `<name>_image`).
    /// Only checked for clashes; its base name already carries the
    /// identifier check.
    pub derived: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, source: &Path) -> Self {
        Self {
            name: name.into(),
            source: source.to_path_buf(),
            derived: false,
        }
    }

    pub fn derived(name: impl Into<String>, source: &Path) -> Self {
        Self {
            derived: true,
            ..Self::new(name, source)
        }
    }
}

/// Check the symbols destined for one header/source pair.
pub fn validate_symbols(symbols: &[Symbol]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_identifiers(symbols));
    result.merge(checks::check_duplicate_identifiers(symbols));

    result
}

/// Check for names defined by more than one pair sharing a namespace.
///
/// Each group is assumed to be clash-free on its own already.
pub fn validate_shared_namespace(groups: &[&[Symbol]]) -> ValidationResult {
    checks::check_cross_group_duplicates(groups)
}

/// Check a font's glyph table against its atlas dimensions.
pub fn validate_font(font: &Symbol, glyphs: &[GlyphRect], width: u32, height: u32) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_font(font, glyphs));
    result.merge(checks::check_glyph_bounds(font, glyphs, width, height));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let mut line = format!("[{}] {}", d.code, d.message);
        if let Some(source) = &d.source {
            line.push_str(&format!(" ({})", printer.path(source)));
        }

        printer.diagnostic(d.severity, &line);

        if let Some(help) = &d.help {
            printer.help(help);
        }
    }
}

/// One-line summary, e.g. "1 error, 2 warnings".
pub fn summary(result: &ValidationResult) -> String {
    format!(
        "{}, {}",
        count(result.error_count(), "error"),
        count(result.warning_count(), "warning")
    )
}
