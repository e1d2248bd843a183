//! Font descriptors exported as Aseprite sprite sheets.
//!
//! A descriptor is the "array" flavour of the sprite sheet JSON: a `meta`
//! block naming the atlas image and an ordered list of `frames`. Frame order
//! is the glyph index, so it is preserved exactly.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AssetError, Result};

/// A rectangle inside the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Trim offsets relative to the untrimmed canvas. Missing fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

/// One frame of the sprite sheet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub filename: Option<String>,
    pub frame: Rect,
    #[serde(default)]
    pub rotated: bool,
    #[serde(default)]
    pub trimmed: bool,
    #[serde(default)]
    pub sprite_source_size: SourceRect,
    #[serde(default)]
    pub source_size: Option<Size>,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meta {
    /// Atlas image path, relative to the descriptor.
    pub image: String,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub size: Option<Size>,
}

/// A parsed font descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontDescriptor {
    pub meta: Meta,
    pub frames: Vec<Frame>,
    /// Where the descriptor was loaded from.
    #[serde(skip)]
    pub path: PathBuf,
}

impl FontDescriptor {
    /// Load a descriptor from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font descriptor: {}", e),
        })?;

        let mut descriptor = Self::parse(&source).map_err(|e| match e {
            AssetError::Parse { message, help } => AssetError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })?;
        descriptor.path = path.to_path_buf();
        Ok(descriptor)
    }

    /// Parse a descriptor from a JSON string.
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| AssetError::Parse {
            message: format!("Invalid font descriptor: {}", e),
            help: Some("Export the font from Aseprite with the JSON array layout".to_string()),
        })
    }

    /// The atlas image path, resolved against the descriptor's directory.
    pub fn image_path(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) => dir.join(&self.meta.image),
            None => PathBuf::from(&self.meta.image),
        }
    }

    /// Glyph rectangles in frame order.
    pub fn glyph_rects(&self) -> Vec<GlyphRect> {
        self.frames.iter().map(GlyphRect::from).collect()
    }
}

/// Location of one glyph in the atlas plus its draw offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl GlyphRect {
    /// Whether the rectangle lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }
}

impl From<&Frame> for GlyphRect {
    fn from(frame: &Frame) -> Self {
        Self {
            x: frame.frame.x,
            y: frame.frame.y,
            width: frame.frame.w,
            height: frame.frame.h,
            x_offset: 0,
            y_offset: frame.sprite_source_size.y,
        }
    }
}

impl fmt::Display for GlyphRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GlyphRect{{ {}, {}, {}, {}, {}, {} }}",
            self.x, self.y, self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tempfile::tempdir;

    const ASEPRITE_EXPORT: &str = r#"{
  "frames": [
    {
      "filename": "font 0.aseprite",
      "frame": { "x": 0, "y": 0, "w": 5, "h": 7 },
      "rotated": false,
      "trimmed": true,
      "spriteSourceSize": { "x": 0, "y": 2, "w": 5, "h": 7 },
      "sourceSize": { "w": 6, "h": 9 },
      "duration": 100
    },
    {
      "filename": "font 1.aseprite",
      "frame": { "x": 5, "y": 0, "w": 3, "h": 9 },
      "rotated": false,
      "trimmed": false,
      "spriteSourceSize": { "x": 0, "y": 0, "w": 3, "h": 9 },
      "sourceSize": { "w": 3, "h": 9 },
      "duration": 100
    }
  ],
  "meta": {
    "app": "https://www.aseprite.org/",
    "version": "1.3",
    "image": "font.png",
    "format": "I8",
    "size": { "w": 8, "h": 9 },
    "scale": "1",
    "layers": []
  }
}"#;

    #[test]
    fn test_parse_aseprite_export() {
        let font = FontDescriptor::parse(ASEPRITE_EXPORT).unwrap();
        assert_eq!(font.meta.image, "font.png");
        assert_eq!(font.meta.size, Some(Size { w: 8, h: 9 }));
        assert_eq!(font.frames.len(), 2);
        assert_eq!(font.frames[0].filename.as_deref(), Some("font 0.aseprite"));
        assert!(font.frames[0].trimmed);
    }

    #[test]
    fn test_glyph_rects_keep_frame_order() {
        let font = FontDescriptor::parse(ASEPRITE_EXPORT).unwrap();
        let rects = font.glyph_rects();
        assert_eq!(rects.len(), font.frames.len());
        assert_eq!(rects[0].y_offset, 2);
        assert_eq!(rects[1].x, 5);
        assert_eq!(rects[1].height, 9);
    }

    #[test]
    fn test_minimal_frame() {
        let font = FontDescriptor::parse(
            r#"{"meta": {"image": "a.png"}, "frames": [{"frame": {"x": 1, "y": 2, "w": 3, "h": 4}, "spriteSourceSize": {"y": 5}}]}"#,
        )
        .unwrap();
        assert_snapshot!(font.glyph_rects()[0].to_string(), @"GlyphRect{ 1, 2, 3, 4, 0, 5 }");
    }

    #[test]
    fn test_missing_frame_rect_is_parse_error() {
        let err = FontDescriptor::parse(r#"{"meta": {"image": "a.png"}, "frames": [{"spriteSourceSize": {"y": 0}}]}"#);
        assert!(matches!(err, Err(AssetError::Parse { .. })));
    }

    #[test]
    fn test_missing_meta_is_parse_error() {
        assert!(FontDescriptor::parse(r#"{"frames": []}"#).is_err());
        assert!(FontDescriptor::parse("not json").is_err());
    }

    #[test]
    fn test_image_path_relative_to_descriptor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.json");
        fs::write(&path, ASEPRITE_EXPORT).unwrap();

        let font = FontDescriptor::load(&path).unwrap();
        assert_eq!(font.image_path(), dir.path().join("font.png"));
    }

    #[test]
    fn test_fits_within() {
        let rect = GlyphRect {
            x: 5,
            y: 0,
            width: 3,
            height: 9,
            x_offset: 0,
            y_offset: 0,
        };
        assert!(rect.fits_within(8, 9));
        assert!(!rect.fits_within(7, 9));
        assert!(!rect.fits_within(8, 8));
    }
}
