//! Wordmark rendering.
//!
//! The brand name is drawn as a row of coloured text segments on a transparent
//! canvas. Each segment is measured on its own; segments are placed edge to edge by
//! ink width (no kerning across segment boundaries) on a shared baseline, and the
//! canvas gets a fixed padding on every side. The result is saved as a PNG.
//!
//! Measuring and drawing go through the [`GlyphSource`] trait, so the layout can be
//! exercised without a font file.

mod config;
mod error;
mod glyphs;
mod layout;
mod woff;

pub use config::{Segment, WordmarkConfig, WordmarkStats};
pub use error::WordmarkError;
pub use glyphs::{BrandFont, GlyphSource, TextBounds};
pub use layout::{draw, WordmarkLayout};
pub use woff::WoffError;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

impl WordmarkConfig {
    pub fn render(&self) -> Result<WordmarkStats> {
        let font = BrandFont::load(&self.font, self.font_size_px)
            .with_context(|| format!("Failed to load font '{}'", self.font.display()))?;
        let canvas = render_with(&font, &self.segments, self.padding())
            .with_context(|| "Failed to render wordmark")?;
        write_png(&canvas, &self.outfile)
            .with_context(|| format!("Failed to save '{}'", self.outfile.display()))?;

        log::info!(
            "wrote wordmark {} ({}x{})",
            self.outfile.display(),
            canvas.width(),
            canvas.height()
        );
        Ok(WordmarkStats {
            width: canvas.width(),
            height: canvas.height(),
        })
    }
}

/// Draw `segments` with any glyph source.
pub fn render_with<G: GlyphSource + ?Sized>(
    glyphs: &G,
    segments: &[Segment],
    padding: (u32, u32),
) -> Result<RgbaImage, WordmarkError> {
    if segments.is_empty() {
        return Err(WordmarkError::NoSegments);
    }
    let (_, canvas) = draw(glyphs, segments, padding);
    Ok(canvas)
}

/// Encode the image fully in memory before touching the output file, creating its
/// parent directory if needed.
pub fn write_png<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<(), WordmarkError> {
    let path = path.as_ref();
    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    let write_err = |source| WordmarkError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, png).map_err(write_err)?;
    Ok(())
}
