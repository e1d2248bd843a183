//! Project manifest (picon.yaml) parsing.
//!
//! The manifest supplies defaults for the import tool and exclusion
//! patterns for directory listing. Command-line flags always win.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codegen::DEFAULT_INCLUDES;
use crate::error::{AssetError, Result};
use crate::format::PixelFormat;

/// Namespace used for imported images when none is configured.
pub const DEFAULT_IMAGES_NAMESPACE: &str = "assets::images";

/// Project manifest loaded from picon.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Pixel format for imported images.
    pub format: Option<PixelFormat>,

    /// Namespace wrapping imported images.
    pub images_namespace: Option<String>,

    /// Headers the generated image header includes.
    pub includes: Vec<String>,

    /// File name patterns to skip (`*` and `?` wildcards).
    pub excludes: Vec<String>,
}

impl Manifest {
    /// Load manifest from a picon.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AssetError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check picon.yaml syntax".to_string()),
        })
    }

    /// Check if a path's file name matches any exclude pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        self.excludes
            .iter()
            .any(|pattern| matches_pattern(name, pattern))
    }

    /// Format from the command line, else the manifest, else GS4.
    pub fn effective_format(&self, cli: Option<PixelFormat>) -> PixelFormat {
        cli.or(self.format).unwrap_or_default()
    }

    /// Namespace from the command line, else the manifest, else the default.
    pub fn effective_namespace(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.images_namespace.clone())
            .unwrap_or_else(|| DEFAULT_IMAGES_NAMESPACE.to_string())
    }

    /// Configured includes, or the engine's image header.
    pub fn effective_includes(&self) -> Vec<String> {
        if self.includes.is_empty() {
            DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect()
        } else {
            self.includes.clone()
        }
    }
}

/// Wildcard match: `*` matches any run of characters, `?` exactly one.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut n, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                n += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    n = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
format: R5G6B5
images_namespace: game::sprites
includes:
  - graphics/image.hpp
  - graphics/color.hpp
excludes:
  - "*.bak.png"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.format, Some(PixelFormat::R5G6B5));
        assert_eq!(manifest.images_namespace.as_deref(), Some("game::sprites"));
        assert_eq!(manifest.includes.len(), 2);
        assert_eq!(manifest.excludes, vec!["*.bak.png"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_invalid_format() {
        let err = Manifest::parse("format: RGB888");
        assert!(matches!(err, Err(AssetError::Parse { .. })));
    }

    #[test]
    fn test_effective_values_precedence() {
        let manifest = Manifest {
            format: Some(PixelFormat::Gs4A1),
            images_namespace: Some("game::sprites".to_string()),
            ..Default::default()
        };

        assert_eq!(manifest.effective_format(None), PixelFormat::Gs4A1);
        assert_eq!(
            manifest.effective_format(Some(PixelFormat::R5G5B5A1)),
            PixelFormat::R5G5B5A1
        );
        assert_eq!(manifest.effective_namespace(None), "game::sprites");
        assert_eq!(manifest.effective_namespace(Some("ui")), "ui");
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::default();
        assert_eq!(manifest.effective_format(None), PixelFormat::Gs4);
        assert_eq!(manifest.effective_namespace(None), "assets::images");
        assert_eq!(manifest.effective_includes(), vec!["graphics/image.hpp"]);
    }

    #[test]
    fn test_is_excluded() {
        let manifest = Manifest {
            excludes: vec!["*.bak.png".to_string(), "tmp?.png".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("logo.bak.png")));
        assert!(manifest.is_excluded(Path::new("images/tmp1.png")));
        assert!(!manifest.is_excluded(Path::new("tmp12.png")));
        assert!(!manifest.is_excluded(Path::new("logo.png")));
    }

    #[test]
    fn test_matches_pattern() {
        assert!(matches_pattern("anything", "*"));
        assert!(matches_pattern("draft-logo.png", "draft-*"));
        assert!(matches_pattern("a-b-c", "*-c"));
        assert!(!matches_pattern("logo.png", "*.json"));
        assert!(matches_pattern("", "*"));
        assert!(!matches_pattern("", "?"));
    }
}
