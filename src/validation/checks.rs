//! Validation checks over the symbols and fonts of one output pair.

use std::collections::HashMap;

use crate::codegen::is_valid_identifier;
use crate::font::GlyphRect;

use super::warning::{Diagnostic, ValidationResult};
use super::Symbol;

/// Check that every symbol name is a usable C++ identifier.
pub fn check_identifiers(symbols: &[Symbol]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for symbol in symbols.iter().filter(|s| !s.derived) {
        if !is_valid_identifier(&symbol.name) {
            result.push(
                Diagnostic::error(
                    "picon::validate::identifier",
                    format!("'{}' is not a valid C++ identifier", symbol.name),
                )
                .with_source(&symbol.source)
                .with_help("Rename the file to letters, digits and underscores, not starting with a digit"),
            );
        }
    }

    result
}

/// Check that no two assets generate the same symbol.
pub fn check_duplicate_identifiers(symbols: &[Symbol]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, &Symbol> = HashMap::new();

    for symbol in symbols {
        if let Some(first) = seen.get(symbol.name.as_str()) {
            result.push(
                Diagnostic::error(
                    "picon::validate::duplicate-symbol",
                    format!(
                        "Symbol '{}' is generated by both {} and {}",
                        symbol.name,
                        first.source.display(),
                        symbol.source.display()
                    ),
                )
                .with_source(&symbol.source),
            );
        } else {
            seen.insert(&symbol.name, symbol);
        }
    }

    result
}

/// Check that no name appears in more than one group.
pub fn check_cross_group_duplicates(groups: &[&[Symbol]]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut owners: HashMap<&str, (usize, &Symbol)> = HashMap::new();

    for (group, symbols) in groups.iter().enumerate() {
        for symbol in symbols.iter() {
            match owners.get(symbol.name.as_str()) {
                Some(&(owner, first)) if owner != group => {
                    result.push(
                        Diagnostic::error(
                            "picon::validate::duplicate-symbol",
                            format!(
                                "Symbol '{}' is generated by both {} and {} in the same namespace",
                                symbol.name,
                                first.source.display(),
                                symbol.source.display()
                            ),
                        )
                        .with_source(&symbol.source),
                    );
                }
                Some(_) => {}
                None => {
                    owners.insert(&symbol.name, (group, symbol));
                }
            }
        }
    }

    result
}

/// Warn about a font with no frames.
pub fn check_empty_font(symbol: &Symbol, glyphs: &[GlyphRect]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if glyphs.is_empty() {
        result.push(
            Diagnostic::warning(
                "picon::validate::empty-font",
                format!("Font '{}' has no glyphs", symbol.name),
            )
            .with_source(&symbol.source),
        );
    }

    result
}

/// Warn about glyph rectangles reaching outside the atlas image.
pub fn check_glyph_bounds(
    symbol: &Symbol,
    glyphs: &[GlyphRect],
    width: u32,
    height: u32,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, glyph) in glyphs.iter().enumerate() {
        if !glyph.fits_within(width, height) {
            result.push(
                Diagnostic::warning(
                    "picon::validate::glyph-bounds",
                    format!(
                        "Font '{}': glyph {} ({}x{} at {},{}) exceeds the {}x{} atlas",
                        symbol.name,
                        index,
                        glyph.width,
                        glyph.height,
                        glyph.x,
                        glyph.y,
                        width,
                        height
                    ),
                )
                .with_source(&symbol.source)
                .with_help("Re-export the sprite sheet so frames and image agree"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn symbol(name: &str) -> Symbol {
        Symbol::new(name, Path::new(&format!("{}.png", name)))
    }

    fn glyph(x: u32, y: u32, width: u32, height: u32) -> GlyphRect {
        GlyphRect {
            x,
            y,
            width,
            height,
            x_offset: 0,
            y_offset: 0,
        }
    }

    #[test]
    fn test_invalid_identifier() {
        let result = check_identifiers(&[symbol("ok_name"), symbol("9lives"), symbol("with-dash")]);
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_duplicate_identifiers() {
        let symbols = [
            Symbol::new("logo", Path::new("a/logo.png")),
            Symbol::new("logo", Path::new("a/logo.PNG")),
            Symbol::new("icon", Path::new("a/icon.png")),
        ];
        let result = check_duplicate_identifiers(&symbols);
        assert_eq!(result.error_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("logo"));
    }

    #[test]
    fn test_cross_group_duplicates_ignore_clashes_within_a_group() {
        let first = [symbol("logo"), symbol("logo")];
        let second = [symbol("icon"), symbol("logo")];
        let result = check_cross_group_duplicates(&[&first[..], &second[..]]);
        assert_eq!(result.error_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("'logo'"));
    }

    #[test]
    fn test_empty_font() {
        assert_eq!(check_empty_font(&symbol("tiny"), &[]).warning_count(), 1);
        assert!(check_empty_font(&symbol("tiny"), &[glyph(0, 0, 1, 1)]).is_ok());
    }

    #[test]
    fn test_glyph_bounds() {
        let glyphs = [glyph(0, 0, 4, 4), glyph(4, 0, 4, 4), glyph(6, 0, 4, 4)];
        let result = check_glyph_bounds(&symbol("font"), &glyphs, 8, 4);
        assert_eq!(result.warning_count(), 1);
        assert!(!result.has_errors());
        assert!(result.iter().next().unwrap().message.contains("glyph 2"));
    }
}
