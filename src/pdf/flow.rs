//! Page flow: turning a sequence of blocks into laid out pages.
//!
//! [`FlowRenderer::build`] walks a list of [`Flowable`]s top to bottom, placing each
//! one below the previous inside the page frame (the page minus its margins), and
//! starts a new page whenever the next block does not fit:
//!
//! - paragraphs split between lines, but never leave their first line alone at the
//!   bottom of a page
//! - space before a block is dropped when the block starts a page
//! - tables and rules are never split
//! - a spacer that does not fit ends the page and is discarded
//! - [`Flowable::PageBreak`] ends the page unless nothing has been placed on it yet
//!
//! Every page is handed to a [`PageDecoration`] as soon as it is started, so
//! headers and footers sit beneath the page content.

use super::{
    markup, Alignment, Document, Fragment, Margins, Page, ParagraphStyle,
    PdfResult, Pt, Rect, SpanFont, SpanLayout, TextLine,
};
use crate::colour::Colour;
use indicatif::ProgressBar;
use pdf_writer::Content;
use std::path::PathBuf;

/// Tolerance when comparing heights, so rounding never pushes a block to a new page.
const FUZZ: f32 = 1e-3;

/// Draws the furniture (rules, footers, page numbers) of each page.
pub trait PageDecoration {
    /// Called once per page, before any content is placed. `page_number` is 1-based.
    fn decorate(&self, page: &mut Page, page_number: usize);
}

/// A decoration that leaves pages blank.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDecoration;

impl PageDecoration for NoDecoration {
    fn decorate(&self, _page: &mut Page, _page_number: usize) {}
}

/// Where a paragraph appears in the document outline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutlineLevel {
    /// a top-level bookmark
    Section,
    /// a bookmark nested under the most recent section
    Entry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    /// inline markup, see [`markup`]
    pub markup: String,
    pub style: ParagraphStyle,
    pub outline: Option<OutlineLevel>,
}

impl Paragraph {
    pub fn new<S: Into<String>>(markup: S, style: &ParagraphStyle) -> Paragraph {
        Paragraph {
            markup: markup.into(),
            style: style.clone(),
            outline: None,
        }
    }

    pub fn with_outline(mut self, level: OutlineLevel) -> Paragraph {
        self.outline = Some(level);
        self
    }

    /// The paragraph's text with all markup removed.
    pub fn plain_text(&self) -> String {
        markup::parse(&self.markup)
            .into_iter()
            .map(|run| run.text)
            .collect()
    }

    fn fragments(&self) -> Vec<Fragment> {
        markup::parse(&self.markup)
            .into_iter()
            .map(|run| Fragment::new(run.text, self.style.font.with_style(run.bold, run.italic)))
            .collect()
    }

    /// Break the paragraph into lines for a box `width` wide (before indentation).
    pub fn wrap(&self, width: Pt) -> Vec<TextLine> {
        super::wrap_fragments(
            &self.fragments(),
            self.style.size,
            width - self.style.left_indent,
        )
    }
}

/// A horizontal line across some fraction of the frame, with a point of space on
/// either side unless told otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalRule {
    /// fraction of the frame width, `1.0` spans the frame
    pub width: f32,
    pub thickness: Pt,
    pub colour: Colour,
    pub space_before: Pt,
    pub space_after: Pt,
    pub alignment: Alignment,
}

impl HorizontalRule {
    pub fn new<T: Into<Pt>>(width: f32, thickness: T, colour: Colour) -> HorizontalRule {
        HorizontalRule {
            width,
            thickness: thickness.into(),
            colour,
            space_before: Pt(1.0),
            space_after: Pt(1.0),
            alignment: Alignment::Centre,
        }
    }

    pub fn space_before<T: Into<Pt>>(mut self, space: T) -> HorizontalRule {
        self.space_before = space.into();
        self
    }

    pub fn space_after<T: Into<Pt>>(mut self, space: T) -> HorizontalRule {
        self.space_after = space.into();
        self
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Paragraph(Paragraph),
    /// an image file, scaled to exactly `width` by `height`
    Image {
        path: PathBuf,
        width: Pt,
        height: Pt,
    },
    Empty,
}

/// A grid of cells with fixed column widths. Tables are placed whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
    pub col_widths: Vec<Pt>,
    pub valign: VerticalAlignment,
    pub padding: Margins,
    pub alignment: Alignment,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>, col_widths: Vec<Pt>) -> Table {
        Table {
            rows,
            col_widths,
            valign: VerticalAlignment::Top,
            padding: Margins::default(),
            alignment: Alignment::Centre,
        }
    }

    pub fn valign(mut self, valign: VerticalAlignment) -> Table {
        self.valign = valign;
        self
    }

    pub fn padding(mut self, padding: Margins) -> Table {
        self.padding = padding;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Table {
        self.alignment = alignment;
        self
    }

    pub fn width(&self) -> Pt {
        self.col_widths.iter().fold(Pt(0.0), |w, c| w + *c)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    Spacer(Pt),
    Rule(HorizontalRule),
    Table(Table),
    PageBreak,
}

impl Flowable {
    pub fn spacer<T: Into<Pt>>(height: T) -> Flowable {
        Flowable::Spacer(height.into())
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Flowable::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

impl From<Paragraph> for Flowable {
    fn from(paragraph: Paragraph) -> Self {
        Flowable::Paragraph(paragraph)
    }
}

impl From<HorizontalRule> for Flowable {
    fn from(rule: HorizontalRule) -> Self {
        Flowable::Rule(rule)
    }
}

impl From<Table> for Flowable {
    fn from(table: Table) -> Self {
        Flowable::Table(table)
    }
}

/// Lays out flowables onto pages of a fixed size and margins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowRenderer {
    pub page_size: (Pt, Pt),
    pub margins: Margins,
}

impl FlowRenderer {
    pub fn new(page_size: (Pt, Pt), margins: Margins) -> FlowRenderer {
        FlowRenderer { page_size, margins }
    }

    /// The usable area of every page.
    pub fn frame(&self) -> Rect {
        self.margins.content_box(self.page_size)
    }

    /// Lay out `flowables` onto new pages appended to `doc`, returning the number of
    /// pages added. At least one page is always added.
    pub fn build(
        &self,
        doc: &mut Document,
        flowables: Vec<Flowable>,
        decoration: &dyn PageDecoration,
        progress: &ProgressBar,
    ) -> PdfResult<usize> {
        let first_page = doc.pages.len();
        progress.set_length(flowables.len() as u64);

        let mut flow = Flow::new(self, doc, decoration);
        for flowable in flowables {
            flow.place(flowable)?;
            progress.inc(1);
        }
        flow.finish();

        let pages = doc.pages.len() - first_page;
        log::debug!("laid out {pages} page(s)");
        Ok(pages)
    }
}

/// A table cell after measuring.
enum MeasuredCell {
    Text {
        lines: Vec<TextLine>,
        style: ParagraphStyle,
        width: Pt,
    },
    Image {
        index: usize,
        width: Pt,
        height: Pt,
    },
    Empty,
}

impl MeasuredCell {
    fn height(&self) -> Pt {
        match self {
            MeasuredCell::Text { lines, style, .. } => style.leading * lines.len() as f32,
            MeasuredCell::Image { height, .. } => *height,
            MeasuredCell::Empty => Pt(0.0),
        }
    }
}

struct Flow<'a> {
    renderer: &'a FlowRenderer,
    doc: &'a mut Document,
    decoration: &'a dyn PageDecoration,
    page: Page,
    /// top of the free space on the current page
    cursor: Pt,
    /// nothing has been placed on the current page yet
    at_top: bool,
    /// the most recent top-level bookmark
    section: Option<usize>,
}

impl<'a> Flow<'a> {
    fn new(
        renderer: &'a FlowRenderer,
        doc: &'a mut Document,
        decoration: &'a dyn PageDecoration,
    ) -> Flow<'a> {
        let page = blank_page(renderer, decoration, doc.pages.len() + 1);
        let cursor = page.content_box.y2;
        Flow {
            renderer,
            doc,
            decoration,
            page,
            cursor,
            at_top: true,
            section: None,
        }
    }

    fn frame(&self) -> Rect {
        self.page.content_box
    }

    fn available(&self) -> Pt {
        self.cursor - self.frame().y1
    }

    /// Index the current page will have once it is added to the document.
    fn page_index(&self) -> usize {
        self.doc.pages.len()
    }

    fn new_page(&mut self) {
        let number = self.doc.pages.len() + 2;
        log::debug!("starting page {number}");
        let next = blank_page(self.renderer, self.decoration, number);
        let finished = std::mem::replace(&mut self.page, next);
        self.doc.add_page(finished);
        self.cursor = self.page.content_box.y2;
        self.at_top = true;
    }

    fn finish(self) {
        self.doc.add_page(self.page);
    }

    fn place(&mut self, flowable: Flowable) -> PdfResult<()> {
        match flowable {
            Flowable::Paragraph(paragraph) => self.place_paragraph(paragraph),
            Flowable::Spacer(height) => self.place_spacer(height),
            Flowable::Rule(rule) => self.place_rule(rule),
            Flowable::Table(table) => self.place_table(table)?,
            Flowable::PageBreak => {
                if !self.at_top {
                    self.new_page();
                }
            }
        }
        Ok(())
    }

    fn place_spacer(&mut self, height: Pt) {
        if height > self.available() + Pt(FUZZ) {
            log::debug!("spacer of {:.1}pt does not fit, ending page", *height);
            self.new_page();
            return;
        }
        self.cursor -= height;
        self.at_top = false;
    }

    fn place_paragraph(&mut self, paragraph: Paragraph) {
        let style = &paragraph.style;
        let width = self.frame().width();
        let mut lines = paragraph.wrap(width);
        let mut first_part = true;

        loop {
            let space_before = if self.at_top || !first_part {
                Pt(0.0)
            } else {
                style.space_before
            };
            let room = self.available() - space_before;
            let mut fit = ((*room + FUZZ) / *style.leading).floor().max(0.0) as usize;

            if fit < lines.len() {
                // don't strand a paragraph's first line at the bottom of a page
                if first_part && fit == 1 && lines.len() > 1 {
                    fit = 0;
                }
                if fit == 0 {
                    if !self.at_top {
                        self.new_page();
                        continue;
                    }
                    // not even one line fits on an empty page, overflow rather than loop
                    fit = 1;
                }
            }

            self.cursor -= space_before;
            if first_part {
                self.bookmark(&paragraph);
            }

            if fit >= lines.len() {
                self.draw_lines(&lines, style, self.frame().x1, width, self.cursor);
                self.cursor -= style.leading * lines.len() as f32 + style.space_after;
                self.at_top = false;
                return;
            }

            let rest = lines.split_off(fit);
            self.draw_lines(&lines, style, self.frame().x1, width, self.cursor);
            log::debug!("split paragraph after {fit} line(s)");
            lines = rest;
            first_part = false;
            self.new_page();
        }
    }

    fn place_rule(&mut self, rule: HorizontalRule) {
        let mut space_before = if self.at_top {
            Pt(0.0)
        } else {
            rule.space_before
        };
        if space_before + rule.thickness > self.available() + Pt(FUZZ) && !self.at_top {
            self.new_page();
            space_before = Pt(0.0);
        }

        let frame = self.frame();
        let width = frame.width() * rule.width;
        let x = frame.x1 + rule.alignment.offset(frame.width(), width);
        let y = self.cursor - space_before - rule.thickness / 2.0;
        let (r, g, b) = rule.colour.components();

        let mut content = Content::new();
        content
            .save_state()
            .set_stroke_rgb(r, g, b)
            .set_line_width(*rule.thickness)
            .move_to(*x, *y)
            .line_to(*(x + width), *y)
            .stroke()
            .restore_state();
        self.page.add_content(content);

        self.cursor -= space_before + rule.thickness + rule.space_after;
        self.at_top = false;
    }

    fn place_table(&mut self, table: Table) -> PdfResult<()> {
        let padding = table.padding;
        let mut rows: Vec<(Vec<MeasuredCell>, Pt)> = Vec::with_capacity(table.rows.len());
        for row in table.rows.iter() {
            let mut cells = Vec::with_capacity(row.len());
            let mut content_height = Pt(0.0);
            for (cell, col_width) in row.iter().zip(table.col_widths.iter()) {
                let measured = self.measure_cell(cell, *col_width - padding.left - padding.right)?;
                content_height = content_height.max(measured.height());
                cells.push(measured);
            }
            rows.push((cells, content_height + padding.top + padding.bottom));
        }

        let height = rows.iter().fold(Pt(0.0), |h, (_, row)| h + *row);
        if height > self.available() + Pt(FUZZ) && !self.at_top {
            self.new_page();
        }

        let frame = self.frame();
        let left = frame.x1 + table.alignment.offset(frame.width(), table.width());
        for (cells, row_height) in rows {
            let inner_top = self.cursor - padding.top;
            let inner_height = row_height - padding.top - padding.bottom;
            let mut cell_left = left;
            for (cell, col_width) in cells.iter().zip(table.col_widths.iter()) {
                let offset = match table.valign {
                    VerticalAlignment::Top => Pt(0.0),
                    VerticalAlignment::Middle => (inner_height - cell.height()) / 2.0,
                    VerticalAlignment::Bottom => inner_height - cell.height(),
                };
                let top = inner_top - offset;
                let x = cell_left + padding.left;
                match cell {
                    MeasuredCell::Text { lines, style, width } => {
                        self.draw_lines(lines, style, x, *width, top);
                    }
                    MeasuredCell::Image {
                        index,
                        width,
                        height,
                    } => {
                        self.page.add_image(super::ImageLayout {
                            image_index: *index,
                            position: Rect {
                                x1: x,
                                y1: top - *height,
                                x2: x + *width,
                                y2: top,
                            },
                        });
                    }
                    MeasuredCell::Empty => {}
                }
                cell_left += *col_width;
            }
            self.cursor -= row_height;
        }
        self.at_top = false;
        Ok(())
    }

    fn measure_cell(&mut self, cell: &Cell, width: Pt) -> PdfResult<MeasuredCell> {
        Ok(match cell {
            Cell::Paragraph(paragraph) => MeasuredCell::Text {
                lines: paragraph.wrap(width),
                style: paragraph.style.clone(),
                width,
            },
            Cell::Image {
                path,
                width,
                height,
            } => MeasuredCell::Image {
                index: self.doc.add_image_from_disk(path)?,
                width: *width,
                height: *height,
            },
            Cell::Empty => MeasuredCell::Empty,
        })
    }

    fn bookmark(&mut self, paragraph: &Paragraph) {
        let Some(level) = paragraph.outline else {
            return;
        };
        let title = paragraph.plain_text();
        let page_index = self.page_index();
        match level {
            OutlineLevel::Section => {
                self.section = Some(self.doc.add_bookmark(None, title, page_index, self.cursor));
            }
            OutlineLevel::Entry => {
                self.doc
                    .add_bookmark(self.section, title, page_index, self.cursor);
            }
        }
    }

    /// Draw wrapped lines into a box whose left edge is `left`, `width` wide, with its
    /// top at `top`.
    fn draw_lines(
        &mut self,
        lines: &[TextLine],
        style: &ParagraphStyle,
        left: Pt,
        width: Pt,
        top: Pt,
    ) {
        let left = left + style.left_indent;
        let width = width - style.left_indent;
        for (i, line) in lines.iter().enumerate() {
            let baseline = top - style.size - style.leading * i as f32;
            let mut x = left + style.alignment.offset(width, line.width);
            for fragment in line.fragments.iter() {
                self.page.add_span(SpanLayout {
                    text: fragment.text.clone(),
                    font: SpanFont {
                        font: fragment.font,
                        size: style.size,
                    },
                    colour: style.colour,
                    coords: (x, baseline),
                });
                x += fragment.font.width_of_text(&fragment.text, style.size);
            }
        }
    }
}

fn blank_page(renderer: &FlowRenderer, decoration: &dyn PageDecoration, number: usize) -> Page {
    let mut page = Page::new(renderer.page_size, Some(renderer.margins));
    decoration.decorate(&mut page, number);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{BuiltinFont, ParagraphStyleBuilder};
    use std::cell::RefCell;

    fn style(size: f32, leading: f32, before: f32, after: f32) -> ParagraphStyle {
        ParagraphStyleBuilder::default()
            .name("Test")
            .size(Pt(size))
            .leading(Pt(leading))
            .space_before(Pt(before))
            .space_after(Pt(after))
            .build()
            .expect("can build style")
    }

    /// 100pt wide, 100pt tall frame
    fn renderer() -> FlowRenderer {
        FlowRenderer::new((Pt(120.0), Pt(120.0)), Margins::all(Pt(10.0)))
    }

    fn build(flowables: Vec<Flowable>) -> Document {
        let mut doc = Document::default();
        renderer()
            .build(&mut doc, flowables, &NoDecoration, &ProgressBar::hidden())
            .expect("can lay out");
        doc
    }

    fn baselines(page: &Page) -> Vec<f32> {
        page.spans().map(|span| *span.coords.1).collect()
    }

    #[test]
    fn rules_keep_a_point_of_space_by_default() {
        let body = style(10.0, 16.0, 0.0, 0.0);
        let doc = build(vec![
            Paragraph::new("A", &body).into(),
            HorizontalRule::new(0.5, Pt(2.0), Colour::BLACK).into(),
            Paragraph::new("B", &body).into(),
        ]);
        let page = &doc.pages[0];
        // 1pt before, 2pt of rule, 1pt after
        assert_eq!(baselines(page), vec![100.0, 80.0]);
        let stream = String::from_utf8(page.render()).expect("stream is ascii");
        assert!(stream.contains("35 92 m\n85 92 l"), "{stream}");
    }

    #[test]
    fn can_place_paragraphs_in_order() {
        let body = style(10.0, 12.0, 0.0, 4.0);
        let doc = build(vec![
            Paragraph::new("one", &body).into(),
            Paragraph::new("two", &body).into(),
        ]);
        assert_eq!(doc.pages.len(), 1);
        // first baseline sits one font size below the frame top at 110
        assert_eq!(baselines(&doc.pages[0]), vec![100.0, 84.0]);
    }

    #[test]
    fn space_before_is_dropped_at_top_of_page() {
        let spaced = style(10.0, 12.0, 20.0, 0.0);
        let doc = build(vec![
            Paragraph::new("one", &spaced).into(),
            Paragraph::new("two", &spaced).into(),
        ]);
        assert_eq!(baselines(&doc.pages[0]), vec![100.0, 68.0]);
    }

    #[test]
    fn can_split_paragraphs_across_pages() {
        // 10 lines of 12pt leading in a 100pt frame: 8 lines fit on the first page
        let body = style(10.0, 12.0, 0.0, 0.0);
        let text = vec!["word"; 10].join("<br/>");
        let doc = build(vec![Paragraph::new(text, &body).into()]);
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].spans().count(), 8);
        assert_eq!(doc.pages[1].spans().count(), 2);
        assert_eq!(baselines(&doc.pages[1])[0], 100.0);
    }

    #[test]
    fn first_line_is_never_stranded() {
        let body = style(10.0, 12.0, 0.0, 0.0);
        let doc = build(vec![
            Flowable::spacer(Pt(80.0)),
            Paragraph::new("a<br/>b<br/>c", &body).into(),
        ]);
        // only one line would fit after the spacer, so the whole paragraph moves
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].spans().count(), 0);
        assert_eq!(doc.pages[1].spans().count(), 3);
    }

    #[test]
    fn oversized_spacer_ends_the_page() {
        let body = style(10.0, 12.0, 0.0, 0.0);
        let doc = build(vec![
            Paragraph::new("one", &body).into(),
            Flowable::spacer(Pt(99.0)),
            Paragraph::new("two", &body).into(),
        ]);
        assert_eq!(doc.pages.len(), 2);
        // the spacer is discarded rather than carried onto the next page
        assert_eq!(baselines(&doc.pages[1]), vec![100.0]);
    }

    #[test]
    fn page_break_is_ignored_on_empty_page() {
        let body = style(10.0, 12.0, 0.0, 0.0);
        let doc = build(vec![
            Flowable::PageBreak,
            Paragraph::new("one", &body).into(),
            Flowable::PageBreak,
            Paragraph::new("two", &body).into(),
        ]);
        assert_eq!(doc.pages.len(), 2);
    }

    #[test]
    fn empty_input_still_produces_a_page() {
        assert_eq!(build(Vec::new()).pages.len(), 1);
    }

    #[test]
    fn can_align_text() {
        let centred = ParagraphStyleBuilder::default()
            .name("Centred")
            .alignment(Alignment::Centre)
            .build()
            .expect("can build style");
        let doc = build(vec![Paragraph::new("ab", &centred).into()]);
        let span = doc.pages[0].spans().next().expect("span was placed");
        let width = BuiltinFont::Helvetica.width_of_text("ab", Pt(10.0));
        assert!((*span.coords.0 - (10.0 + (100.0 - *width) / 2.0)).abs() < 0.001);
    }

    #[test]
    fn can_lay_out_tables() {
        let body = style(10.0, 12.0, 0.0, 0.0);
        let table = Table::new(
            vec![vec![
                Cell::Paragraph(Paragraph::new("a<br/>b", &body)),
                Cell::Paragraph(Paragraph::new("c", &body)),
            ]],
            vec![Pt(60.0), Pt(40.0)],
        )
        .valign(VerticalAlignment::Middle)
        .padding(Margins::trbl(Pt(0.0), Pt(0.0), Pt(2.0), Pt(0.0)));
        let doc = build(vec![table.into(), Paragraph::new("after", &body).into()]);

        let spans: Vec<&SpanLayout> = doc.pages[0].spans().collect();
        assert_eq!(spans.len(), 4);
        assert_eq!(*spans[0].coords.0, 10.0);
        assert_eq!(*spans[2].coords.0, 70.0);
        // the single line cell is centred against the two line cell
        assert_eq!(*spans[2].coords.1, 94.0);
        // row height is 24pt of text plus 2pt of bottom padding
        assert_eq!(*spans[3].coords.1, 110.0 - 26.0 - 10.0);
    }

    #[test]
    fn decoration_sees_every_page_number() {
        struct Recorder(RefCell<Vec<usize>>);
        impl PageDecoration for Recorder {
            fn decorate(&self, _page: &mut Page, page_number: usize) {
                self.0.borrow_mut().push(page_number);
            }
        }

        let body = style(10.0, 12.0, 0.0, 0.0);
        let recorder = Recorder(RefCell::new(Vec::new()));
        let mut doc = Document::default();
        let pages = renderer()
            .build(
                &mut doc,
                vec![
                    Paragraph::new("one", &body).into(),
                    Flowable::PageBreak,
                    Paragraph::new("two", &body).into(),
                    Flowable::PageBreak,
                    Paragraph::new("three", &body).into(),
                ],
                &recorder,
                &ProgressBar::hidden(),
            )
            .expect("can lay out");
        assert_eq!(pages, 3);
        assert_eq!(*recorder.0.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn can_bookmark_sections_and_entries() {
        let body = style(10.0, 12.0, 0.0, 0.0);
        let doc = build(vec![
            Paragraph::new("WEEKLY CURRICULUM", &body)
                .with_outline(OutlineLevel::Section)
                .into(),
            Paragraph::new("WEEK 1: Q&amp;A", &body)
                .with_outline(OutlineLevel::Entry)
                .into(),
            Flowable::PageBreak,
            Paragraph::new("DEPLOYED PROJECTS", &body)
                .with_outline(OutlineLevel::Section)
                .into(),
        ]);
        let bookmarks = doc.bookmarks();
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].children[0].title, "WEEK 1: Q&A");
        assert_eq!(bookmarks[0].children[0].top, Pt(98.0));
        assert_eq!(bookmarks[1].page_index, 1);
    }
}
