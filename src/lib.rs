//! picon-assets - C++ asset source generator
//!
//! Converts PNG images and Aseprite font sheets into statically initialised
//! C++ headers and sources for the engine's `Image` and `Font` types.

pub mod bitmap;
pub mod cli;
pub mod codegen;
pub mod discovery;
pub mod error;
pub mod font;
pub mod format;
pub mod output;
pub mod pipeline;
pub mod validation;

pub use bitmap::Bitmap;
pub use codegen::{BundleWriter, ImportWriter};
pub use discovery::{list_assets, load_manifest, AssetKind, Manifest};
pub use error::{AssetError, Result};
pub use font::{FontDescriptor, GlyphRect};
pub use format::{Encoded, PixelFormat};
pub use pipeline::{bundle, import_images, validate_assets, BatchReport, ImportOptions};
pub use validation::{Diagnostic, Severity, ValidationResult};
