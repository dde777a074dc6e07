//! The accent line and footer drawn on every syllabus page.

use super::styles::{GREEN, MID_GRAY};
use crate::pdf::{width_of_text, BuiltinFont, Mm, Page, PageDecoration, Pt, SpanFont, SpanLayout};
use pdf_writer::types::LineCapStyle;
use pdf_writer::Content;

pub const FOOTER_TEXT: &str = "gradtensor.com  |  wa.me/919108030542";

const SIDE_INSET: Mm = Mm(20.0);
const ACCENT_FROM_TOP: Mm = Mm(12.0);
const ACCENT_WIDTH: Pt = Pt(2.0);
const FOOTER_FROM_BOTTOM: Mm = Mm(10.0);
const FOOTER_SIZE: Pt = Pt(8.0);

#[derive(Copy, Clone, Debug, Default)]
pub struct SyllabusDecoration;

impl PageDecoration for SyllabusDecoration {
    fn decorate(&self, page: &mut Page, page_number: usize) {
        let (width, height) = page.size();
        let inset: Pt = SIDE_INSET.into();

        let accent_y = height - Pt::from(ACCENT_FROM_TOP);
        let (r, g, b) = GREEN.components();
        let mut content = Content::new();
        content
            .save_state()
            .set_stroke_rgb(r, g, b)
            .set_line_width(*ACCENT_WIDTH)
            .set_line_cap(LineCapStyle::ButtCap)
            .move_to(*inset, *accent_y)
            .line_to(*(width - inset), *accent_y)
            .stroke()
            .restore_state();
        page.add_content(content);

        let font = SpanFont {
            font: BuiltinFont::Helvetica,
            size: FOOTER_SIZE,
        };
        let footer_y: Pt = FOOTER_FROM_BOTTOM.into();

        let footer_width = width_of_text(FOOTER_TEXT, font.font, font.size);
        page.add_span(SpanLayout {
            text: FOOTER_TEXT.to_string(),
            font,
            colour: MID_GRAY,
            coords: ((width - footer_width) / 2.0, footer_y),
        });

        let number = format!("Page {page_number}");
        let number_width = width_of_text(&number, font.font, font.size);
        page.add_span(SpanLayout {
            text: number,
            font,
            colour: MID_GRAY,
            coords: (width - inset - number_width, footer_y),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::pagesize;

    #[test]
    fn can_decorate_page() {
        let mut page = Page::new(pagesize::A4, None);
        SyllabusDecoration.decorate(&mut page, 3);

        let spans: Vec<&SpanLayout> = page.spans().collect();
        assert_eq!(spans.len(), 2);

        let footer = spans[0];
        assert_eq!(footer.text, FOOTER_TEXT);
        assert_eq!(footer.colour, MID_GRAY);
        let centre = *footer.coords.0
            + *width_of_text(FOOTER_TEXT, BuiltinFont::Helvetica, Pt(8.0)) / 2.0;
        assert!((centre - *pagesize::A4.0 / 2.0).abs() < 0.001);
        assert!((*footer.coords.1 - 28.346).abs() < 0.001);

        let number = spans[1];
        assert_eq!(number.text, "Page 3");
        let right = *number.coords.0
            + *width_of_text("Page 3", BuiltinFont::Helvetica, Pt(8.0));
        assert!((right - (*pagesize::A4.0 - 56.693)).abs() < 0.001);

        let stream = String::from_utf8(page.render()).expect("stream is ascii");
        assert!(stream.contains("2 w"));
        assert!(stream.contains(" l\nS") || stream.contains(" l S"));
    }

    #[test]
    fn decoration_depends_only_on_page_number() {
        let mut a = Page::new(pagesize::A4, None);
        let mut b = Page::new(pagesize::A4, None);
        SyllabusDecoration.decorate(&mut a, 1);
        SyllabusDecoration.decorate(&mut b, 1);
        assert_eq!(a.render(), b.render());
    }
}
