//! Raster export: SVG document to a PNG file.
//!
//! The intermediate SVG is parsed by `usvg`, painted onto a `tiny-skia`
//! pixmap by `resvg` and encoded with the `png` crate, including a `pHYs`
//! chunk so viewers know the intended print resolution. The file is written
//! into a temporary sibling of the destination and renamed over it only once
//! it has been flushed and synced.

use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use log::{debug, error, info, warn};
use resvg::{tiny_skia, usvg};

use crate::{
    canvas::Canvas,
    export::{self, svg::render_document},
};

const METERS_PER_INCH: f64 = 0.0254;

/// Writes a canvas to a PNG file at a fixed resolution.
#[derive(Debug)]
pub struct Png {
    path: PathBuf,
    dpi: u32,
}

impl Png {
    pub fn new(path: impl Into<PathBuf>, dpi: u32) -> Self {
        Self {
            path: path.into(),
            dpi,
        }
    }

    /// Encodes `pixmap` and atomically replaces the destination file.
    fn write_pixmap(&self, pixmap: &tiny_skia::Pixmap) -> Result<(), export::Error> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = match tempfile::NamedTempFile::new_in(dir) {
            Ok(temp) => temp,
            Err(err) => {
                error!(path:? = self.path, err:err; "Failed to create temporary PNG file");
                return Err(export::Error::Io(err));
            }
        };

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            encode(pixmap, self.dpi, &mut writer)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        // Dropping `temp` on an earlier return removes the temporary file.
        if let Err(err) = temp.persist(&self.path) {
            error!(path:? = self.path, err:? = err.error; "Failed to move PNG into place");
            return Err(export::Error::Io(err.error));
        }

        Ok(())
    }
}

impl export::Exporter for Png {
    fn export_canvas(&mut self, canvas: &Canvas) -> Result<(), export::Error> {
        let pixmap = rasterize(canvas)?;
        debug!(width = pixmap.width(), height = pixmap.height(); "Canvas rasterized");

        self.write_pixmap(&pixmap)?;
        info!(path:? = self.path, dpi = self.dpi; "PNG written");
        Ok(())
    }
}

/// Paints the canvas onto a new pixmap sized by [`Canvas::pixel_size`].
fn rasterize(canvas: &Canvas) -> Result<tiny_skia::Pixmap, export::Error> {
    let svg = render_document(canvas).to_string();

    let mut options = usvg::Options::default();
    options.fontdb = font_database();

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|err| export::Error::Render(format!("failed to parse SVG: {err}")))?;

    let (width, height) = canvas.pixel_size();
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        export::Error::Render(format!("cannot allocate a {width}x{height} pixmap"))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Writes `pixmap` as an 8-bit RGBA PNG carrying the resolution in `pHYs`.
fn encode<W: Write>(pixmap: &tiny_skia::Pixmap, dpi: u32, writer: W) -> Result<(), export::Error> {
    let pixels_per_meter = (f64::from(dpi) / METERS_PER_INCH).round() as u32;

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));

    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let mut png_writer = encoder.write_header().map_err(encoding_error)?;
    png_writer.write_image_data(&data).map_err(encoding_error)?;
    png_writer.finish().map_err(encoding_error)?;
    Ok(())
}

fn encoding_error(err: png::EncodingError) -> export::Error {
    match err {
        png::EncodingError::IoError(err) => export::Error::Io(err),
        other => export::Error::Render(format!("failed to encode PNG: {other}")),
    }
}

/// Returns the process-wide font database, loading system fonts on first use.
fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONT_DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

    FONT_DB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            ensure_generic_families(&mut db);
            info!(faces = db.len(); "System fonts loaded");
            Arc::new(db)
        })
        .clone()
}

/// Points the generic `sans-serif` and `monospace` families at installed
/// faces when the platform defaults are missing.
fn ensure_generic_families(db: &mut usvg::fontdb::Database) {
    use usvg::fontdb::{Family, Query};

    let has_family = |db: &usvg::fontdb::Database, family: Family<'_>| {
        db.query(&Query {
            families: &[family],
            ..Query::default()
        })
        .is_some()
    };

    let first_family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
    let Some(first_family) = first_family else {
        warn!("No system fonts found; text will not be rendered");
        return;
    };

    if !has_family(db, Family::SansSerif) {
        debug!(family = first_family; "Using fallback sans-serif family");
        db.set_sans_serif_family(first_family.clone());
    }

    if !has_family(db, Family::Monospace) {
        let monospace = db
            .faces()
            .filter(|face| face.monospaced)
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or(first_family);
        debug!(family = monospace; "Using fallback monospace family");
        db.set_monospace_family(monospace);
    }
}
