//! Batch drivers: list a directory, decode each asset, emit one
//! header/source pair per directory.
//!
//! A failure on any asset aborts the batch. Output files already opened
//! are left as they are; the tools are meant to be re-run on every build.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::bitmap::Bitmap;
use crate::codegen::{font_image_identifier, identifier_for, BundleWriter, ImportWriter, IMPORT_HEADER_NAME};
use crate::discovery::{list_assets, AssetKind, Manifest, FONTS_DIR, IMAGES_DIR};
use crate::error::{AssetError, Result};
use crate::font::FontDescriptor;
use crate::format::PixelFormat;
use crate::output::{display_path, Printer};
use crate::validation::{
    validate_font, validate_shared_namespace, validate_symbols, Symbol, ValidationResult,
};

/// What was generated for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSummary {
    pub name: String,
    pub kind: AssetKind,
    pub width: u32,
    pub height: u32,
    /// Number of glyphs, for fonts.
    pub glyphs: Option<usize>,
}

/// Outcome of one header/source pair.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub header: PathBuf,
    pub source: PathBuf,
    pub assets: Vec<AssetSummary>,
    /// Every C++ name the pair defines.
    pub symbols: Vec<Symbol>,
    pub diagnostics: ValidationResult,
}

/// Settings for the import tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub format: PixelFormat,
    pub images_namespace: String,
    pub includes: Vec<String>,
}

impl ImportOptions {
    /// Resolve options from command-line values and a manifest.
    pub fn resolve(
        input_dir: PathBuf,
        output_dir: PathBuf,
        format: Option<PixelFormat>,
        images_namespace: Option<&str>,
        manifest: &Manifest,
    ) -> Self {
        Self {
            input_dir,
            output_dir,
            format: manifest.effective_format(format),
            images_namespace: manifest.effective_namespace(images_namespace),
            includes: manifest.effective_includes(),
        }
    }
}

/// Run the bundle tool: `<assets>/images` and `<assets>/fonts` into
/// `<output>/images/images.{hpp,cpp}` and `<output>/fonts/fonts.{hpp,cpp}`.
pub fn bundle(
    assets_dir: &Path,
    output_dir: &Path,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<Vec<BatchReport>> {
    let images = bundle_images(
        &assets_dir.join(IMAGES_DIR),
        &output_dir.join(IMAGES_DIR).join("images.hpp"),
        &output_dir.join(IMAGES_DIR).join("images.cpp"),
        manifest,
        printer,
    )?;

    let mut fonts = bundle_fonts(
        &assets_dir.join(FONTS_DIR),
        &output_dir.join(FONTS_DIR).join("fonts.hpp"),
        &output_dir.join(FONTS_DIR).join("fonts.cpp"),
        manifest,
        printer,
    )?;

    // Both pairs define into the bundle namespace.
    let shared = validate_shared_namespace(&[&images.symbols[..], &fonts.symbols[..]]);
    fonts.diagnostics.merge(shared);

    Ok(vec![images, fonts])
}

/// Emit every PNG in `images_dir` as a GS4 `Image`.
pub fn bundle_images(
    images_dir: &Path,
    header_path: &Path,
    source_path: &Path,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<BatchReport> {
    let paths = list_assets(images_dir, AssetKind::Image, manifest)?;
    let (header, source) = create_pair(header_path, source_path)?;
    let mut writer = BundleWriter::begin(header, source, &include_path(header_path))?;

    let mut report = BatchReport::new(header_path, source_path);

    for path in &paths {
        let name = identifier_for(path);
        let bitmap = Bitmap::open(path, PixelFormat::Gs4)?;
        printer.status(
            "Generating",
            &format!("{} ({}x{})", name, bitmap.width(), bitmap.height()),
        );

        writer.image(&name, &bitmap)?;

        report.symbols.extend(bundle_image_symbols(&name, path));
        report.push_image(name, &bitmap);
    }

    writer.finish()?;
    report.check_symbols();
    Ok(report)
}

/// Emit every JSON font descriptor in `fonts_dir` as a GS4 `Font`.
pub fn bundle_fonts(
    fonts_dir: &Path,
    header_path: &Path,
    source_path: &Path,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<BatchReport> {
    let paths = list_assets(fonts_dir, AssetKind::Font, manifest)?;
    let (header, source) = create_pair(header_path, source_path)?;
    let mut writer = BundleWriter::begin(header, source, &include_path(header_path))?;

    let mut report = BatchReport::new(header_path, source_path);

    for path in &paths {
        let name = identifier_for(path);
        let descriptor = FontDescriptor::load(path)?;
        let atlas = Bitmap::open(&descriptor.image_path(), PixelFormat::Gs4)?;
        let glyphs = descriptor.glyph_rects();
        printer.status(
            "Generating",
            &format!(
                "{} ({} glyphs, {}x{} atlas)",
                name,
                glyphs.len(),
                atlas.width(),
                atlas.height()
            ),
        );

        writer.font(&name, &atlas, &glyphs)?;

        let [image_symbol, font_symbol] = font_symbols(&name, path);
        report
            .diagnostics
            .merge(validate_font(&font_symbol, &glyphs, atlas.width(), atlas.height()));
        report.symbols.extend([image_symbol, font_symbol]);
        report.assets.push(AssetSummary {
            name,
            kind: AssetKind::Font,
            width: atlas.width(),
            height: atlas.height(),
            glyphs: Some(glyphs.len()),
        });
    }

    writer.finish()?;
    report.check_symbols();
    Ok(report)
}

/// Run the import tool: every PNG in the input directory into
/// `<output>/images.{hpp,cpp}` using the configured pixel format.
pub fn import_images(options: &ImportOptions, printer: &Printer) -> Result<BatchReport> {
    let manifest = Manifest::default();
    import_images_with(options, &manifest, printer)
}

/// Like [`import_images`], honouring the manifest's exclusion patterns.
pub fn import_images_with(
    options: &ImportOptions,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<BatchReport> {
    let paths = list_assets(&options.input_dir, AssetKind::Image, manifest)?;

    let header_path = options.output_dir.join(IMPORT_HEADER_NAME);
    let source_path = options.output_dir.join("images.cpp");
    let (header, source) = create_pair(&header_path, &source_path)?;
    let mut writer = ImportWriter::begin(
        header,
        source,
        &options.images_namespace,
        &options.includes,
    )?;

    let mut report = BatchReport::new(&header_path, &source_path);

    for path in &paths {
        let name = identifier_for(path);
        let bitmap = Bitmap::open(path, options.format)?;
        printer.status(
            "Generating",
            &format!(
                "{} ({}x{} {})",
                name,
                bitmap.width(),
                bitmap.height(),
                options.format
            ),
        );

        writer.image(&name, &bitmap)?;

        report.symbols.extend(import_image_symbols(&name, path));
        report.push_image(name, &bitmap);
    }

    writer.finish()?;
    report.check_symbols();
    Ok(report)
}

/// Run all checks over an assets directory without writing anything.
///
/// Uses `images/` and `fonts/` subdirectories when present, checked as one
/// bundle namespace. Otherwise `dir` is checked as a flat import directory.
pub fn validate_assets(dir: &Path, manifest: &Manifest) -> Result<ValidationResult> {
    let images_dir = dir.join(IMAGES_DIR);
    let fonts_dir = dir.join(FONTS_DIR);
    let mut result = ValidationResult::new();

    if !images_dir.is_dir() && !fonts_dir.is_dir() {
        let mut symbols = Vec::new();
        for path in list_assets(dir, AssetKind::Image, manifest)? {
            symbols.extend(import_image_symbols(&identifier_for(&path), &path));
        }
        result.merge(validate_symbols(&symbols));
        return Ok(result);
    }

    let mut image_symbols = Vec::new();
    if images_dir.is_dir() {
        for path in list_assets(&images_dir, AssetKind::Image, manifest)? {
            image_symbols.extend(bundle_image_symbols(&identifier_for(&path), &path));
        }
        result.merge(validate_symbols(&image_symbols));
    }

    let mut all_font_symbols = Vec::new();
    if fonts_dir.is_dir() {
        for path in list_assets(&fonts_dir, AssetKind::Font, manifest)? {
            let name = identifier_for(&path);
            let descriptor = FontDescriptor::load(&path)?;
            let image_path = descriptor.image_path();
            let (width, height) =
                image::image_dimensions(&image_path).map_err(|e| AssetError::Decode {
                    path: image_path.clone(),
                    message: e.to_string(),
                })?;

            let [image_symbol, font_symbol] = font_symbols(&name, &path);
            result.merge(validate_font(&font_symbol, &descriptor.glyph_rects(), width, height));
            all_font_symbols.extend([image_symbol, font_symbol]);
        }
        result.merge(validate_symbols(&all_font_symbols));
    }

    result.merge(validate_shared_namespace(&[&image_symbols[..], &all_font_symbols[..]]));
    Ok(result)
}

/// Names a bundle image defines.
fn bundle_image_symbols(name: &str, path: &Path) -> [Symbol; 1] {
    [Symbol::new(name, path)]
}

/// Names an imported image defines: the view and its `<name>_data` array.
fn import_image_symbols(name: &str, path: &Path) -> [Symbol; 2] {
    [
        Symbol::new(name, path),
        Symbol::derived(format!("{}_data", name), path),
    ]
}

/// Names a bundle font defines: its atlas image, then the font itself.
fn font_symbols(name: &str, path: &Path) -> [Symbol; 2] {
    [
        Symbol::derived(font_image_identifier(name), path),
        Symbol::new(name, path),
    ]
}

impl BatchReport {
    fn new(header: &Path, source: &Path) -> Self {
        Self {
            header: header.to_path_buf(),
            source: source.to_path_buf(),
            ..Default::default()
        }
    }

    fn check_symbols(&mut self) {
        let result = validate_symbols(&self.symbols);
        self.diagnostics.merge(result);
    }

    fn push_image(&mut self, name: String, bitmap: &Bitmap) {
        self.assets.push(AssetSummary {
            name,
            kind: AssetKind::Image,
            width: bitmap.width(),
            height: bitmap.height(),
            glyphs: None,
        });
    }

    /// Short description for status output.
    pub fn describe(&self) -> String {
        format!(
            "{} and {}",
            display_path(&self.header),
            display_path(&self.source)
        )
    }
}

/// Create (truncating) both output files, making parent directories.
fn create_pair(header: &Path, source: &Path) -> Result<(BufWriter<File>, BufWriter<File>)> {
    Ok((create_output(header)?, create_output(source)?))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AssetError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let file = File::create(path).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output file: {}", e),
    })?;

    Ok(BufWriter::new(file))
}

/// The header path as the generated source includes it.
fn include_path(header: &Path) -> String {
    header.to_string_lossy().replace('\\', "/")
}
