//! Emitter for the bundle tool: GS4 images and fonts in `pg::assets`.

use std::io::Write;

use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::font::GlyphRect;
use crate::format::gs4_byte_literal;

use super::font_image_identifier;

/// Header included by every bundle header.
pub const BUNDLE_INCLUDE: &str = "graphics/graphics.hpp";

/// Namespace wrapping every bundle symbol.
pub const BUNDLE_NAMESPACE: &str = "pg::assets";

/// Writes `Image` and `Font` declarations/definitions to a header/source pair.
///
/// Bitmaps are expected in GS4 layout (one luminance sample per pixel).
pub struct BundleWriter<W: Write> {
    header: W,
    source: W,
}

impl<W: Write> BundleWriter<W> {
    /// Start a bundle. `header_include` is the path the source file uses to
    /// include the header, written verbatim.
    pub fn begin(mut header: W, mut source: W, header_include: &str) -> Result<Self> {
        write!(header, "#pragma once\n\n")?;
        write!(header, "#include \"{}\"\n\n", BUNDLE_INCLUDE)?;
        write!(header, "namespace {}\n{{\n\n", BUNDLE_NAMESPACE)?;

        write!(source, "#include \"{}\"\n\n", header_include)?;
        write!(source, "namespace {}\n{{\n\n", BUNDLE_NAMESPACE)?;

        Ok(Self { header, source })
    }

    /// Emit one image.
    pub fn image(&mut self, name: &str, bitmap: &Bitmap) -> Result<()> {
        let ty = image_type(bitmap);
        writeln!(self.header, "extern const {} {};", ty, name)?;

        write!(self.source, "const {} {}{{{{", ty, name)?;
        for row in bitmap.rows() {
            write!(self.source, "\n    ")?;
            for px in row {
                write!(self.source, "{}, ", gs4_byte_literal(px[0]))?;
            }
        }
        write!(self.source, "\n}}}};\n")?;

        Ok(())
    }

    /// Emit a font together with its atlas image, named `<name>_image`.
    pub fn font(&mut self, name: &str, atlas: &Bitmap, glyphs: &[GlyphRect]) -> Result<()> {
        let image_name = font_image_identifier(name);
        self.image(&image_name, atlas)?;

        let ty = format!("Font<{}>", image_type(atlas));
        writeln!(self.header, "extern const {} {};", ty, name)?;

        writeln!(self.source, "const {} {} {{", ty, name)?;
        writeln!(self.source, "    .image = {},", image_name)?;
        writeln!(self.source, "    .glyph_rect_map = {{")?;
        for glyph in glyphs {
            writeln!(self.source, "        {},", glyph)?;
        }
        write!(self.source, "\n    }}}};\n")?;

        Ok(())
    }

    /// Close the namespaces, flush, and hand the streams back.
    pub fn finish(mut self) -> Result<(W, W)> {
        write!(self.header, "\n}}")?;
        write!(self.source, "\n}}")?;
        self.header.flush()?;
        self.source.flush()?;
        Ok((self.header, self.source))
    }
}

fn image_type(bitmap: &Bitmap) -> String {
    format!(
        "Image<ImageFormat::GS4, {}, {}>",
        bitmap.width(),
        bitmap.height()
    )
}
