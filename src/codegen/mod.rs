//! C++ source generation.
//!
//! Each emitter appends to a caller-owned header/source stream pair and
//! never opens or closes files itself.

mod bundle;
mod import;

use std::path::Path;

pub use bundle::{BundleWriter, BUNDLE_INCLUDE, BUNDLE_NAMESPACE};
pub use import::{ImportWriter, COLOR_NAMESPACE, DEFAULT_INCLUDES, IMAGE_NAMESPACE, IMPORT_HEADER_NAME};

/// Suffix for the atlas image embedded alongside a font.
pub const FONT_IMAGE_SUFFIX: &str = "_image";

/// Derive a C++ identifier from an asset path (its file stem).
pub fn identifier_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Identifier of the atlas image embedded for a font.
pub fn font_image_identifier(font_name: &str) -> String {
    format!("{}{}", font_name, FONT_IMAGE_SUFFIX)
}

/// Whether `name` can be used as a C++ identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
