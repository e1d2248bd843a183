//! Emitter for the import tool: `ImageData` arrays in any [`PixelFormat`].

use std::io::Write;

use crate::bitmap::Bitmap;
use crate::error::Result;

/// Namespace of the engine's image types.
pub const IMAGE_NAMESPACE: &str = "picon::graphics";

/// Namespace of the engine's colour types.
pub const COLOR_NAMESPACE: &str = "picon::graphics::color";

/// File name of the generated header, as included by the generated source.
pub const IMPORT_HEADER_NAME: &str = "images.hpp";

/// Headers included by the generated header unless configured otherwise.
pub const DEFAULT_INCLUDES: &[&str] = &["graphics/image.hpp"];

/// Writes `ImageData`/`Image` pairs into a header/source pair.
pub struct ImportWriter<W: Write> {
    header: W,
    source: W,
}

impl<W: Write> ImportWriter<W> {
    pub fn begin<S: AsRef<str>>(
        mut header: W,
        mut source: W,
        namespace: &str,
        includes: &[S],
    ) -> Result<Self> {
        writeln!(header, "#pragma once")?;
        writeln!(header)?;
        for include in includes {
            writeln!(header, "#include \"{}\"", include.as_ref())?;
        }
        writeln!(header)?;
        writeln!(header, "namespace {}", namespace)?;
        writeln!(header, "{{")?;

        writeln!(source, "#include \"{}\"", IMPORT_HEADER_NAME)?;
        writeln!(source)?;
        writeln!(source, "namespace {}", namespace)?;
        writeln!(source, "{{")?;

        Ok(Self { header, source })
    }

    /// Emit `<name>_data` and the `<name>` view over it.
    pub fn image(&mut self, name: &str, bitmap: &Bitmap) -> Result<()> {
        let color = format!("{}::{}", COLOR_NAMESPACE, bitmap.format());
        let data_decl = format!(
            "const {}::ImageData<const {}, {}, {}> {}_data",
            IMAGE_NAMESPACE,
            color,
            bitmap.width(),
            bitmap.height(),
            name
        );

        writeln!(self.header, "extern {};", data_decl)?;

        write!(
            self.source,
            "{} = {{ std::array<const {}, {}>{{ {{ ",
            data_decl,
            color,
            bitmap.pixel_count()
        )?;
        for row in bitmap.rows() {
            write!(self.source, "\n    ")?;
            for px in row {
                write!(self.source, "{}, ", bitmap.format().encode(px))?;
            }
        }
        writeln!(self.source, " }} }} }};")?;

        writeln!(
            self.header,
            "constexpr {}::Image<const {}> {} {{{}_data}};",
            IMAGE_NAMESPACE, color, name, name
        )?;

        Ok(())
    }

    /// Close the namespaces, flush, and hand the streams back.
    pub fn finish(mut self) -> Result<(W, W)> {
        writeln!(self.header, "}}")?;
        writeln!(self.source, "}}")?;
        self.header.flush()?;
        self.source.flush()?;
        Ok((self.header, self.source))
    }
}
