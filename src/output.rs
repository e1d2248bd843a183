//! Terminal output for the picon-assets CLI.
//!
//! Cargo-style status lines on stderr. Nothing is printed to stdout except
//! shell completions.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Status printer. Colour is enabled when stderr is a terminal; quiet mode
/// keeps diagnostics and drops progress lines.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet,
        }
    }

    pub fn quiet() -> Self {
        Self::new(true)
    }

    /// e.g. "  Generating logo (16x16)"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.line(GREEN, verb, message);
        }
    }

    /// A diagnostic, labelled and coloured by its severity.
    pub fn diagnostic(&self, severity: Severity, message: &str) {
        let color = match severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        self.line(color, &severity.to_string(), message);
    }

    pub fn help(&self, message: &str) {
        if !self.quiet {
            self.line(CYAN, "help", message);
        }
    }

    /// A path for display: relative to the working directory, cyan on a
    /// terminal.
    pub fn path(&self, path: &Path) -> String {
        let text = display_path(path);
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

/// `count(1, "asset")` is "1 asset", `count(2, "asset")` is "2 assets".
pub fn count(n: usize, noun: &str) -> String {
    let suffix = if n == 1 { "" } else { "s" };
    format!("{} {}{}", n, noun, suffix)
}

/// The path relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .map(|relative| {
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative.display().to_string()
            }
        })
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(1, "glyph"), "1 glyph");
        assert_eq!(count(0, "error"), "0 errors");
        assert_eq!(count(3, "asset"), "3 assets");
    }

    #[test]
    fn test_display_path() {
        let outside = Path::new("/nonexistent/assets/images");
        assert_eq!(display_path(outside), "/nonexistent/assets/images");

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(&cwd.join("out/images.hpp")), "out/images.hpp");
    }

    #[test]
    fn test_quiet_path_is_plain() {
        let printer = Printer::quiet();
        if !printer.color {
            assert_eq!(printer.path(Path::new("/nonexistent/x.png")), "/nonexistent/x.png");
        }
    }
}
