//! Directory listing for asset files.
//!
//! Only the immediate children of a directory are considered. Results are
//! sorted by file name so regenerated sources are byte-identical across
//! platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AssetError, Result};

use super::manifest::Manifest;

/// Kinds of asset file the tools consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// A PNG image.
    Image,
    /// An Aseprite JSON font descriptor.
    Font,
}

impl AssetKind {
    /// File extension (without the dot) for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Image => "png",
            AssetKind::Font => "json",
        }
    }
}

/// Detect the asset kind from a file path based on its extension.
pub fn detect_asset_kind(path: &Path) -> Option<AssetKind> {
    let ext = path.extension()?.to_str()?;

    [AssetKind::Image, AssetKind::Font]
        .into_iter()
        .find(|kind| ext.eq_ignore_ascii_case(kind.extension()))
}

/// List the files of one kind directly inside `dir`, sorted by name.
pub fn list_assets(dir: &Path, kind: AssetKind, manifest: &Manifest) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssetError::Io {
            path: dir.to_path_buf(),
            message: "Asset directory does not exist".to_string(),
        });
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| AssetError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to list directory: {}", e),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if manifest.is_excluded(path) {
            continue;
        }

        if detect_asset_kind(path) == Some(kind) {
            paths.push(path.to_path_buf());
        }
    }

    Ok(paths)
}
