use super::{GlyphSource, Segment, TextBounds};
use image::{Rgba, RgbaImage};

/// Canvas size and pen positions for a row of text segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordmarkLayout {
    pub width: u32,
    pub height: u32,
    /// pen position of each segment
    pub origins: Vec<(i32, i32)>,
}

impl WordmarkLayout {
    /// Lay segments out side by side, each one starting where the previous one's
    /// ink width ends, on a shared baseline, with `padding` pixels around them.
    pub fn compute(bounds: &[TextBounds], padding: (u32, u32)) -> WordmarkLayout {
        let (pad_x, pad_y) = (padding.0 as i32, padding.1 as i32);
        let min_top = bounds.iter().map(|b| b.top).min().unwrap_or(0);
        let max_bottom = bounds.iter().map(|b| b.bottom).max().unwrap_or(0);
        let total_width: i32 = bounds.iter().map(TextBounds::width).sum();

        let mut x = pad_x;
        let origins = bounds
            .iter()
            .map(|b| {
                let origin = (x, pad_y - min_top);
                x += b.width();
                origin
            })
            .collect();

        WordmarkLayout {
            width: (total_width + 2 * pad_x).max(1) as u32,
            height: (max_bottom - min_top + 2 * pad_y).max(1) as u32,
            origins,
        }
    }
}

/// Draw the segments onto a transparent canvas.
pub fn draw<G: GlyphSource + ?Sized>(
    glyphs: &G,
    segments: &[Segment],
    padding: (u32, u32),
) -> (WordmarkLayout, RgbaImage) {
    let bounds: Vec<TextBounds> = segments.iter().map(|s| glyphs.measure(&s.text)).collect();
    let layout = WordmarkLayout::compute(&bounds, padding);

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (segment, origin) in segments.iter().zip(layout.origins.iter()) {
        let colour = segment.colour;
        glyphs.rasterize(&segment.text, *origin, &mut |x, y, coverage| {
            if x < 0 || y < 0 || x >= layout.width as i32 || y >= layout.height as i32 {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            *pixel = blend(*pixel, Rgba(colour.to_rgba(alpha_of(coverage))));
        });
    }

    (layout, canvas)
}

fn alpha_of(coverage: f32) -> u8 {
    (coverage.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Source-over compositing of `src` onto `dst`, non-premultiplied.
fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let c = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
