//! Text measurement and rasterisation.
//!
//! All coordinates are whole pixels with y pointing down. A run of text is
//! positioned by its *pen*: the point where the first glyph's origin meets the
//! font's ascender line, so a glyph reaching exactly to the ascender has a top
//! of `0`.

use super::{woff, WordmarkError};
use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use std::path::Path;

/// Ink bounds of a run of text, relative to its pen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Something that can measure and draw text at a fixed size.
pub trait GlyphSource {
    fn measure(&self, text: &str) -> TextBounds;

    /// Draw `text` with its pen at `origin`, calling `plot(x, y, coverage)` for
    /// every pixel the glyphs touch. Coverage is in `0.0..=1.0`.
    fn rasterize(&self, text: &str, origin: (i32, i32), plot: &mut dyn FnMut(i32, i32, f32));
}

/// A TrueType/OpenType font loaded from disk, set at a fixed pixel size.
pub struct BrandFont {
    font: FontVec,
    scale: PxScale,
}

impl BrandFont {
    /// Load a TrueType/OpenType or WOFF font, sized so that one em is `px_per_em`
    /// pixels.
    pub fn load<P: AsRef<Path>>(path: P, px_per_em: f32) -> Result<BrandFont, WordmarkError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| WordmarkError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let bytes = if woff::is_woff(&bytes) {
            woff::to_sfnt(&bytes).map_err(|source| WordmarkError::InvalidWoff {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            bytes
        };
        let font = FontVec::try_from_vec(bytes).map_err(|source| WordmarkError::InvalidFont {
            path: path.to_path_buf(),
            source,
        })?;
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| WordmarkError::MissingUnitsPerEm(path.to_path_buf()))?;

        // ab_glyph scales by ascent - descent, not by the em square
        let scale = PxScale::from(px_per_em * font.height_unscaled() / units_per_em);
        log::debug!(
            "loaded font {} at {px_per_em}px/em (scale {:.2})",
            path.display(),
            scale.y
        );
        Ok(BrandFont { font, scale })
    }

    fn outlines(&self, text: &str) -> Vec<ab_glyph::OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        let mut previous = None;
        let mut outlines = Vec::new();
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, ascent));
            caret += scaled.h_advance(id);
            previous = Some(id);
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }
        outlines
    }
}

impl GlyphSource for BrandFont {
    fn measure(&self, text: &str) -> TextBounds {
        self.outlines(text)
            .iter()
            .map(|glyph| {
                let bounds = glyph.px_bounds();
                TextBounds {
                    left: bounds.min.x.floor() as i32,
                    top: bounds.min.y.floor() as i32,
                    right: bounds.max.x.ceil() as i32,
                    bottom: bounds.max.y.ceil() as i32,
                }
            })
            .reduce(|a, b| TextBounds {
                left: a.left.min(b.left),
                top: a.top.min(b.top),
                right: a.right.max(b.right),
                bottom: a.bottom.max(b.bottom),
            })
            .unwrap_or_default()
    }

    fn rasterize(&self, text: &str, origin: (i32, i32), plot: &mut dyn FnMut(i32, i32, f32)) {
        for glyph in self.outlines(text) {
            let bounds = glyph.px_bounds();
            let x0 = origin.0 + bounds.min.x as i32;
            let y0 = origin.1 + bounds.min.y as i32;
            glyph.draw(|x, y, coverage| {
                plot(x0 + x as i32, y0 + y as i32, coverage.min(1.0));
            });
        }
    }
}
