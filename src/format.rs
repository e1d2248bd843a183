//! Packed pixel formats and the per-pixel encoder.
//!
//! Every format reduces 8-bit samples with a plain truncating right shift.
//! There is no rounding or dithering, so existing assets keep rendering
//! exactly as they did before.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Target pixel encoding for generated image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 4-bit grayscale.
    #[default]
    #[value(name = "GS4")]
    #[serde(rename = "GS4")]
    Gs4,
    /// 4-bit grayscale with a 1-bit alpha.
    #[value(name = "GS4A1")]
    #[serde(rename = "GS4A1")]
    Gs4A1,
    /// 5-bit red, 6-bit green, 5-bit blue.
    #[value(name = "R5G6B5")]
    #[serde(rename = "R5G6B5")]
    R5G6B5,
    /// 5 bits per colour channel with a 1-bit alpha.
    #[value(name = "R5G5B5A1")]
    #[serde(rename = "R5G5B5A1")]
    R5G5B5A1,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [
        PixelFormat::Gs4,
        PixelFormat::Gs4A1,
        PixelFormat::R5G6B5,
        PixelFormat::R5G5B5A1,
    ];

    /// The name used both on the command line and in generated C++ types.
    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Gs4 => "GS4",
            PixelFormat::Gs4A1 => "GS4A1",
            PixelFormat::R5G6B5 => "R5G6B5",
            PixelFormat::R5G5B5A1 => "R5G5B5A1",
        }
    }

    /// Number of decoded channels the encoder expects per pixel.
    pub fn channels(self) -> usize {
        self.bits().len()
    }

    /// Bit depth of each output channel, in channel order.
    pub fn bits(self) -> &'static [u8] {
        match self {
            PixelFormat::Gs4 => &[4],
            PixelFormat::Gs4A1 => &[4, 1],
            PixelFormat::R5G6B5 => &[5, 6, 5],
            PixelFormat::R5G5B5A1 => &[5, 5, 5, 1],
        }
    }

    /// Right shift applied to each 8-bit sample, in channel order.
    pub fn shifts(self) -> &'static [u8] {
        match self {
            PixelFormat::Gs4 => &[4],
            PixelFormat::Gs4A1 => &[4, 7],
            PixelFormat::R5G6B5 => &[3, 2, 3],
            PixelFormat::R5G5B5A1 => &[3, 3, 3, 7],
        }
    }

    /// Whether the last channel is an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Gs4A1 | PixelFormat::R5G5B5A1)
    }

    /// Encode one pixel, or `None` if fewer samples than channels were given.
    ///
    /// Extra samples beyond the channel count are ignored.
    pub fn try_encode(self, samples: &[u8]) -> Option<Encoded> {
        let shifts = self.shifts();
        if samples.len() < shifts.len() {
            return None;
        }

        let mut values = [0u8; 4];
        for (value, (&sample, &shift)) in values.iter_mut().zip(samples.iter().zip(shifts)) {
            *value = sample >> shift;
        }

        Some(Encoded {
            values,
            len: shifts.len(),
        })
    }

    /// Encode one pixel whose samples are already laid out for this format.
    ///
    /// Missing trailing samples are treated as zero.
    pub fn encode(self, samples: &[u8]) -> Encoded {
        self.try_encode(samples).unwrap_or_else(|| {
            let mut padded = [0u8; 4];
            padded[..samples.len()].copy_from_slice(samples);
            self.try_encode(&padded).unwrap_or_default()
        })
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        PixelFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssetError::Parse {
                message: format!("Unknown pixel format: {}", s),
                help: Some("Use one of GS4, GS4A1, R5G6B5, R5G5B5A1".to_string()),
            })
    }
}

/// Reduced channel values for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoded {
    values: [u8; 4],
    len: usize,
}

impl Encoded {
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }
}

/// Renders as a brace initializer, e.g. `{31, 63, 31}`.
impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("}")
    }
}

/// Render a luminance sample as the byte literal used by the bundle tool.
pub fn gs4_byte_literal(luma: u8) -> String {
    format!("(uint8_t)(0x{:02X})", luma >> 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gs4_keeps_high_nibble() {
        for v in 0..=255u8 {
            assert_eq!(PixelFormat::Gs4.encode(&[v]).as_slice(), &[v >> 4]);
        }
    }

    #[test]
    fn test_r5g6b5_ranges() {
        for v in 0..=255u8 {
            let px = PixelFormat::R5G6B5.encode(&[v, v, v]);
            assert_eq!(px.as_slice(), &[v >> 3, v >> 2, v >> 3]);
            assert!(px.as_slice()[0] <= 31);
            assert!(px.as_slice()[1] <= 63);
        }
    }

    #[test]
    fn test_alpha_is_one_bit() {
        assert_eq!(PixelFormat::Gs4A1.encode(&[255, 127]).as_slice(), &[15, 0]);
        assert_eq!(PixelFormat::Gs4A1.encode(&[255, 128]).as_slice(), &[15, 1]);
        assert_eq!(
            PixelFormat::R5G5B5A1.encode(&[8, 16, 24, 200]).as_slice(),
            &[1, 2, 3, 1]
        );
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 0xF7 would round up to 31 but must stay 30
        assert_eq!(PixelFormat::R5G6B5.encode(&[0xF7, 0, 0]).as_slice(), &[30, 0, 0]);
    }

    #[test]
    fn test_white_r5g5b5a1_literal() {
        let px = PixelFormat::R5G5B5A1.encode(&[255, 255, 255, 255]);
        assert_eq!(px.to_string(), "{31, 31, 31, 1}");
    }

    #[test]
    fn test_black_gs4_literal() {
        assert_eq!(PixelFormat::Gs4.encode(&[0]).to_string(), "{0}");
    }

    #[test]
    fn test_try_encode_short_input() {
        assert!(PixelFormat::R5G6B5.try_encode(&[1, 2]).is_none());
        assert_eq!(PixelFormat::R5G6B5.encode(&[255, 255]).as_slice(), &[31, 63, 0]);
    }

    #[test]
    fn test_channels_and_bits() {
        assert_eq!(PixelFormat::Gs4.channels(), 1);
        assert_eq!(PixelFormat::Gs4A1.channels(), 2);
        assert_eq!(PixelFormat::R5G6B5.channels(), 3);
        assert_eq!(PixelFormat::R5G5B5A1.channels(), 4);
        assert_eq!(PixelFormat::R5G6B5.bits().iter().map(|&b| b as u32).sum::<u32>(), 16);
        assert_eq!(PixelFormat::R5G5B5A1.bits().iter().map(|&b| b as u32).sum::<u32>(), 16);
        assert!(PixelFormat::Gs4A1.has_alpha());
        assert!(!PixelFormat::R5G6B5.has_alpha());
    }

    #[test]
    fn test_shifts_leave_channel_depth() {
        assert_eq!(PixelFormat::Gs4A1.shifts(), &[4, 7]);
        assert_eq!(PixelFormat::R5G6B5.shifts(), &[3, 2, 3]);
        for format in PixelFormat::ALL {
            assert_eq!(format.shifts().len(), format.channels());
            for (&shift, &bits) in format.shifts().iter().zip(format.bits()) {
                assert_eq!(shift + bits, 8, "{}", format);
                assert_eq!(255u8 >> shift, (1u8 << bits) - 1);
            }
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("GS4".parse::<PixelFormat>().unwrap(), PixelFormat::Gs4);
        assert_eq!("r5g6b5".parse::<PixelFormat>().unwrap(), PixelFormat::R5G6B5);
        assert!("RGB888".parse::<PixelFormat>().is_err());
        for format in PixelFormat::ALL {
            assert_eq!(format.to_string().parse::<PixelFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_gs4_byte_literal() {
        assert_eq!(gs4_byte_literal(0), "(uint8_t)(0x00)");
        assert_eq!(gs4_byte_literal(255), "(uint8_t)(0x0F)");
        assert_eq!(gs4_byte_literal(0xA7), "(uint8_t)(0x0A)");
    }
}
