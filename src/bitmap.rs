//! Decoded source images.
//!
//! Converts whatever the PNG holds into the channel layout a [`PixelFormat`]
//! expects: luminance, luminance + alpha, RGB or RGBA.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{AssetError, Result};
use crate::format::PixelFormat;

/// A decoded image with samples laid out for one pixel format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    samples: Vec<u8>,
}

impl Bitmap {
    /// Decode a PNG from disk for the given format.
    pub fn open(path: &Path, format: PixelFormat) -> Result<Self> {
        let img = image::open(path).map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self::from_image(&img, format))
    }

    /// Convert an already decoded image.
    pub fn from_image(img: &DynamicImage, format: PixelFormat) -> Self {
        let rgba = img.to_rgba8();
        Self::from_rgba(&rgba, format)
    }

    /// Convert an RGBA buffer.
    pub fn from_rgba(rgba: &RgbaImage, format: PixelFormat) -> Self {
        let mut samples = Vec::with_capacity(rgba.as_raw().len() / 4 * format.channels());

        for px in rgba.pixels() {
            let [r, g, b, a] = px.0;
            match format {
                PixelFormat::Gs4 => samples.push(luma(r, g, b)),
                PixelFormat::Gs4A1 => samples.extend_from_slice(&[luma(r, g, b), a]),
                PixelFormat::R5G6B5 => samples.extend_from_slice(&[r, g, b]),
                PixelFormat::R5G5B5A1 => samples.extend_from_slice(&[r, g, b, a]),
            }
        }

        Self {
            width: rgba.width(),
            height: rgba.height(),
            format,
            samples,
        }
    }

    /// Build a bitmap from raw samples already in the format's layout.
    pub fn from_samples(
        width: u32,
        height: u32,
        format: PixelFormat,
        samples: Vec<u8>,
    ) -> Result<Self> {
        let expected = width as usize * height as usize * format.channels();
        if samples.len() != expected {
            return Err(AssetError::Parse {
                message: format!(
                    "{}x{} {} bitmap needs {} samples, got {}",
                    width,
                    height,
                    format,
                    expected,
                    samples.len()
                ),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            format,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Number of pixels (width x height).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Samples of the pixel at (x, y), if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.format.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        self.samples.get(start..start + channels)
    }

    /// Iterate rows top to bottom; each row yields per-pixel sample slices.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &[u8]>> {
        let channels = self.format.channels();
        let row_len = (self.width as usize * channels).max(1);
        self.samples
            .chunks(row_len)
            .map(move |row| row.chunks(channels))
    }

    /// Iterate all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks(self.format.channels())
    }
}

/// ITU-R 601-2 luma transform in 16.16 fixed point.
///
/// Grey inputs (r == g == b) map to themselves.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}
