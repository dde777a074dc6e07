//! Turning the curriculum into a sequence of layout blocks.

use super::curriculum::Syllabus;
use super::styles::{StyleName, StyleSheet, BORDER_GRAY, DIVIDER_GRAY, GREEN};
use crate::pdf::{
    markup, Alignment, Cell, Flowable, HorizontalRule, Margins, Mm, OutlineLevel, Paragraph, Pt,
    Table, VerticalAlignment,
};
use std::path::{Path, PathBuf};

pub const CURRICULUM_HEADER: &str = "WEEKLY CURRICULUM";
pub const PROJECTS_HEADER: &str = "DEPLOYED PROJECTS";
pub const DIFFERENTIATORS_HEADER: &str = "WHAT MAKES THIS DIFFERENT";
pub const AUDIENCE_HEADER: &str = "WHO IS THIS FOR";

const BULLET: &str = "\u{2022}  ";

/// The optional images shown side by side at the top of the first page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderAssets {
    pub logo: Option<PathBuf>,
    pub wordmark: Option<PathBuf>,
}

impl HeaderAssets {
    /// Keep only the images that exist on disk.
    pub fn discover<L: AsRef<Path>, W: AsRef<Path>>(logo: L, wordmark: W) -> HeaderAssets {
        HeaderAssets {
            logo: existing("logo", logo.as_ref()),
            wordmark: existing("wordmark", wordmark.as_ref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logo.is_none() && self.wordmark.is_none()
    }
}

fn existing(what: &str, path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        log::debug!("no {what} at {}, leaving it out of the header", path.display());
        None
    }
}

/// Accumulates blocks, resolving style names against a style sheet.
struct Blocks<'a> {
    styles: &'a StyleSheet,
    blocks: Vec<Flowable>,
}

impl Blocks<'_> {
    fn push<F: Into<Flowable>>(&mut self, block: F) {
        self.blocks.push(block.into());
    }

    fn spacer(&mut self, height: Mm) {
        self.blocks.push(Flowable::spacer(height));
    }

    fn paragraph(&self, style: StyleName, markup: String) -> Paragraph {
        Paragraph::new(markup, &self.styles[style])
    }

    /// A paragraph of plain text.
    fn text(&mut self, style: StyleName, text: &str) {
        let paragraph = self.paragraph(style, markup::escape(text));
        self.push(paragraph);
    }

    fn bullet(&mut self, style: StyleName, text: &str) {
        self.text(style, &format!("{BULLET}{text}"));
    }

    fn section(&mut self, title: &str) {
        let paragraph = self
            .paragraph(StyleName::Section, markup::escape(title))
            .with_outline(OutlineLevel::Section);
        self.push(paragraph);
    }
}

/// Lay out the whole syllabus, top to bottom.
pub fn assemble(syllabus: &Syllabus, styles: &StyleSheet, header: &HeaderAssets) -> Vec<Flowable> {
    let frame_width = super::page_layout().frame().width();
    let mut b = Blocks {
        styles,
        blocks: Vec::new(),
    };

    b.spacer(Mm(4.0));
    if let Some(table) = header_table(header) {
        b.push(table);
        b.spacer(Mm(6.0));
    }

    b.text(StyleName::Title, &syllabus.title);
    b.text(StyleName::Subtitle, &syllabus.subtitle);
    b.push(HorizontalRule::new(1.0, Pt(0.5), BORDER_GRAY).space_after(Mm(5.0)));

    for row in syllabus.meta.iter() {
        let left = b.paragraph(StyleName::Meta, row.left.clone());
        let right = b.paragraph(StyleName::Meta, row.right.clone());
        let table = Table::new(
            vec![vec![Cell::Paragraph(left), Cell::Paragraph(right)]],
            vec![frame_width * 0.55, frame_width * 0.45],
        )
        .valign(VerticalAlignment::Top)
        .padding(Margins::trbl(Pt(0.0), Pt(0.0), Pt(2.0), Pt(0.0)));
        b.push(table);
    }

    b.spacer(Mm(2.0));
    b.push(HorizontalRule::new(1.0, Pt(0.5), BORDER_GRAY).space_after(Mm(2.0)));

    b.section(CURRICULUM_HEADER);
    for week in syllabus.weeks.iter() {
        let title = b
            .paragraph(StyleName::WeekTitle, markup::escape(&week.title))
            .with_outline(OutlineLevel::Entry);
        b.push(title);
        b.text(StyleName::WeekSubtitle, &week.subtitle);

        b.text(StyleName::Subsection, "Live Session:");
        for item in week.live.iter() {
            b.bullet(StyleName::Bullet, item);
        }

        b.text(StyleName::Subsection, &week.project_label());
        for item in week.project.iter() {
            b.bullet(StyleName::Bullet, item);
        }

        b.text(StyleName::Portfolio, &week.portfolio_line());
        b.push(
            HorizontalRule::new(0.8, Pt(0.3), DIVIDER_GRAY)
                .space_before(Mm(2.0))
                .space_after(Mm(1.0)),
        );
    }

    b.section(PROJECTS_HEADER);
    b.text(StyleName::Body, &syllabus.projects.intro);
    b.spacer(Mm(2.0));
    for project in syllabus.projects.projects.iter() {
        b.text(StyleName::Subsection, &project.title);
        b.text(StyleName::Bullet, &project.description);
        b.spacer(Mm(1.0));
    }

    b.section(DIFFERENTIATORS_HEADER);
    for differentiator in syllabus.differentiators.iter() {
        b.bullet(StyleName::DiffTitle, &differentiator.title);
        b.text(StyleName::DiffBody, &differentiator.description);
    }

    b.section(AUDIENCE_HEADER);
    for item in syllabus.audience.iter() {
        b.bullet(StyleName::Bullet, item);
    }

    b.spacer(Mm(8.0));
    b.push(HorizontalRule::new(1.0, Pt(0.5), GREEN).space_after(Mm(5.0)));
    b.text(StyleName::Cta, &syllabus.next_batch);
    b.text(StyleName::Cta, &syllabus.contact);

    b.blocks
}

/// Logo and wordmark side by side, or nothing when neither image exists.
fn header_table(header: &HeaderAssets) -> Option<Table> {
    let mut cells = Vec::new();
    let mut widths = Vec::new();
    if let Some(logo) = &header.logo {
        cells.push(Cell::Image {
            path: logo.clone(),
            width: Mm(28.0).into(),
            height: Mm(28.0).into(),
        });
        widths.push(Mm(32.0).into());
    }
    if let Some(wordmark) = &header.wordmark {
        cells.push(Cell::Image {
            path: wordmark.clone(),
            width: Mm(72.0).into(),
            height: Mm(12.6).into(),
        });
        widths.push(Mm(76.0).into());
    }
    if cells.is_empty() {
        return None;
    }

    Some(
        Table::new(vec![cells], widths)
            .valign(VerticalAlignment::Middle)
            .padding(Margins::all(Pt(0.0)))
            .alignment(Alignment::Left),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(header: &HeaderAssets) -> Vec<Flowable> {
        let styles = StyleSheet::new().expect("can build style sheet");
        assemble(&Syllabus::default(), &styles, header)
    }

    fn paragraphs_in(blocks: &[Flowable], style: StyleName) -> Vec<String> {
        blocks
            .iter()
            .filter_map(Flowable::as_paragraph)
            .filter(|p| p.style.name == style.name())
            .map(Paragraph::plain_text)
            .collect()
    }

    fn tables(blocks: &[Flowable]) -> Vec<&Table> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Flowable::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn can_assemble_document_skeleton() {
        let blocks = build(&HeaderAssets::default());

        assert_eq!(
            paragraphs_in(&blocks, StyleName::Title),
            vec!["AI Engineering & Agentic Foundations"]
        );
        assert_eq!(paragraphs_in(&blocks, StyleName::WeekTitle).len(), 6);
        assert_eq!(
            paragraphs_in(&blocks, StyleName::Section),
            vec![
                CURRICULUM_HEADER,
                PROJECTS_HEADER,
                DIFFERENTIATORS_HEADER,
                AUDIENCE_HEADER
            ]
        );
        // one table per metadata row, no header table
        assert_eq!(tables(&blocks).len(), 3);
        assert_eq!(
            paragraphs_in(&blocks, StyleName::Cta),
            vec!["Next Batch: April 2026", "gradtensor.com  |  wa.me/919108030542"]
        );
    }

    #[test]
    fn portfolio_pieces_come_from_weeks_four_and_six() {
        let blocks = build(&HeaderAssets::default());
        let callouts = paragraphs_in(&blocks, StyleName::Portfolio);
        assert_eq!(callouts.len(), 6);

        let pieces: Vec<usize> = callouts
            .iter()
            .enumerate()
            .filter(|(_, text)| text.contains("Portfolio piece"))
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(pieces, vec![4, 6]);
        assert!(callouts[3].contains("deployed"));
    }

    #[test]
    fn weeks_follow_a_fixed_shape() {
        let blocks = build(&HeaderAssets::default());
        let syllabus = Syllabus::default();
        let subsections = paragraphs_in(&blocks, StyleName::Subsection);
        assert_eq!(subsections[0], "Live Session:");
        assert_eq!(subsections[1], "Project:");
        assert_eq!(subsections[11], "Project (Choose one:)");

        let bullets = paragraphs_in(&blocks, StyleName::Bullet);
        let week_bullets: usize = syllabus
            .weeks
            .iter()
            .map(|w| w.live.len() + w.project.len())
            .sum();
        // week bullets, project descriptions and audience bullets
        assert_eq!(bullets.len(), week_bullets + 2 + 3);
        assert!(bullets[0].starts_with("\u{2022}  Transformers"));
    }

    #[test]
    fn week_titles_are_nested_bookmarks() {
        let blocks = build(&HeaderAssets::default());
        let entries = blocks
            .iter()
            .filter_map(Flowable::as_paragraph)
            .filter(|p| p.outline == Some(OutlineLevel::Entry))
            .count();
        assert_eq!(entries, 6);
    }

    #[test]
    fn missing_header_images_are_skipped() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let logo = dir.path().join("logo.png");
        std::fs::write(&logo, b"png").expect("can write logo");

        let only_logo = HeaderAssets::discover(&logo, dir.path().join("missing.png"));
        assert_eq!(only_logo.logo.as_deref(), Some(logo.as_path()));
        assert!(only_logo.wordmark.is_none());

        let without = build(&HeaderAssets::default());
        let with_logo = build(&only_logo);

        // the header table and its spacer are the only difference
        assert_eq!(with_logo.len(), without.len() + 2);
        assert_eq!(with_logo[0], without[0]);
        assert_eq!(&with_logo[3..], &without[1..]);
        let header = tables(&with_logo)[0];
        assert_eq!(header.rows[0].len(), 1);
        assert_eq!(header.col_widths, vec![Pt::from(Mm(32.0))]);
        assert_eq!(header.alignment, Alignment::Left);
    }

    #[test]
    fn no_header_images_means_no_header_table() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let header = HeaderAssets::discover(dir.path().join("a.png"), dir.path().join("b.png"));
        assert!(header.is_empty());
        assert!(header_table(&header).is_none());
    }
}
