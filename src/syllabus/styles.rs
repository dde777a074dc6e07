//! Brand palette and the paragraph styles of the syllabus.

use crate::colour::Colour;
use crate::pdf::{Alignment, BuiltinFont, Mm, ParagraphStyle, ParagraphStyleBuilder, Pt};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

pub const GREEN: Colour = Colour::from_hex(0x4CAF50);
pub const DARK_GREEN: Colour = Colour::from_hex(0x388E3C);
pub const LIGHT_GRAY: Colour = Colour::from_hex(0x666666);
pub const MID_GRAY: Colour = Colour::from_hex(0x999999);
pub const BORDER_GRAY: Colour = Colour::from_hex(0x333333);
pub const DIVIDER_GRAY: Colour = Colour::from_hex(0xE0E0E0);
pub const TEXT_DARK: Colour = Colour::from_hex(0x1A1A1A);
pub const TEXT_BODY: Colour = Colour::from_hex(0x333333);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleName {
    Title,
    Subtitle,
    Section,
    WeekTitle,
    WeekSubtitle,
    Subsection,
    Body,
    Bullet,
    Portfolio,
    Footer,
    Meta,
    Cta,
    DiffTitle,
    DiffBody,
}

impl StyleName {
    pub fn all() -> &'static [StyleName] {
        &[
            StyleName::Title,
            StyleName::Subtitle,
            StyleName::Section,
            StyleName::WeekTitle,
            StyleName::WeekSubtitle,
            StyleName::Subsection,
            StyleName::Body,
            StyleName::Bullet,
            StyleName::Portfolio,
            StyleName::Footer,
            StyleName::Meta,
            StyleName::Cta,
            StyleName::DiffTitle,
            StyleName::DiffBody,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StyleName::Title => "Title",
            StyleName::Subtitle => "Subtitle",
            StyleName::Section => "Section",
            StyleName::WeekTitle => "WeekTitle",
            StyleName::WeekSubtitle => "WeekSubtitle",
            StyleName::Subsection => "Subsection",
            StyleName::Body => "Body",
            StyleName::Bullet => "Bullet",
            StyleName::Portfolio => "Portfolio",
            StyleName::Footer => "Footer",
            StyleName::Meta => "Meta",
            StyleName::Cta => "CTA",
            StyleName::DiffTitle => "DiffTitle",
            StyleName::DiffBody => "DiffBody",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only lookup from [`StyleName`] to its paragraph style.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    styles: BTreeMap<StyleName, ParagraphStyle>,
}

impl StyleSheet {
    pub fn new() -> Result<StyleSheet> {
        let styles = StyleName::all()
            .iter()
            .map(|&name| Ok((name, build_style(name)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(StyleSheet { styles })
    }

    pub fn get(&self, name: StyleName) -> Option<&ParagraphStyle> {
        self.styles.get(&name)
    }
}

impl Index<StyleName> for StyleSheet {
    type Output = ParagraphStyle;

    fn index(&self, name: StyleName) -> &ParagraphStyle {
        // every name is inserted by StyleSheet::new
        &self.styles[&name]
    }
}

fn build_style(name: StyleName) -> Result<ParagraphStyle> {
    let mut builder = ParagraphStyleBuilder::default();
    builder.name(name.name());
    match name {
        StyleName::Title => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(24.0))
            .leading(Pt(30.0))
            .colour(TEXT_DARK)
            .space_after(Mm(4.0)),
        StyleName::Subtitle => builder
            .size(Pt(13.0))
            .leading(Pt(18.0))
            .colour(LIGHT_GRAY)
            .space_after(Mm(6.0)),
        StyleName::Section => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(16.0))
            .leading(Pt(22.0))
            .colour(DARK_GREEN)
            .space_before(Mm(8.0))
            .space_after(Mm(4.0)),
        StyleName::WeekTitle => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(13.0))
            .leading(Pt(18.0))
            .colour(TEXT_DARK)
            .space_before(Mm(6.0))
            .space_after(Mm(1.0)),
        StyleName::WeekSubtitle => builder
            .font(BuiltinFont::HelveticaOblique)
            .size(Pt(10.0))
            .leading(Pt(14.0))
            .colour(GREEN)
            .space_after(Mm(3.0)),
        StyleName::Subsection => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(10.0))
            .leading(Pt(14.0))
            .colour(TEXT_DARK)
            .space_before(Mm(3.0))
            .space_after(Mm(1.5)),
        StyleName::Body => builder
            .size(Pt(10.0))
            .leading(Pt(15.0))
            .colour(TEXT_BODY)
            .space_after(Mm(1.5)),
        StyleName::Bullet => builder
            .size(Pt(10.0))
            .leading(Pt(15.0))
            .colour(TEXT_BODY)
            .left_indent(Pt(12.0))
            .space_after(Mm(1.0)),
        StyleName::Portfolio => builder
            .font(BuiltinFont::HelveticaOblique)
            .size(Pt(9.5))
            .leading(Pt(14.0))
            .colour(DARK_GREEN)
            .space_before(Mm(2.0))
            .space_after(Mm(2.0))
            .left_indent(Pt(12.0)),
        StyleName::Footer => builder
            .size(Pt(8.0))
            .leading(Pt(12.0))
            .colour(MID_GRAY)
            .alignment(Alignment::Centre),
        StyleName::Meta => builder
            .size(Pt(10.0))
            .leading(Pt(15.0))
            .colour(TEXT_BODY)
            .space_after(Mm(1.5)),
        StyleName::Cta => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(11.0))
            .leading(Pt(16.0))
            .colour(DARK_GREEN)
            .alignment(Alignment::Centre)
            .space_before(Mm(4.0))
            .space_after(Mm(2.0)),
        StyleName::DiffTitle => builder
            .font(BuiltinFont::HelveticaBold)
            .size(Pt(10.0))
            .leading(Pt(15.0))
            .colour(TEXT_DARK)
            .space_after(Mm(1.0))
            .left_indent(Pt(12.0)),
        StyleName::DiffBody => builder
            .size(Pt(9.5))
            .leading(Pt(14.0))
            .colour(TEXT_BODY)
            .space_after(Mm(3.0))
            .left_indent(Pt(12.0)),
    };
    builder
        .build()
        .with_context(|| format!("Failed to build paragraph style {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_build_every_style() {
        let styles = StyleSheet::new().expect("can build style sheet");
        for &name in StyleName::all() {
            let style = styles.get(name).expect("style exists");
            assert_eq!(style.name, name.name());
        }
    }

    #[test]
    fn title_matches_brand() {
        let styles = StyleSheet::new().expect("can build style sheet");
        let title = &styles[StyleName::Title];
        assert_eq!(title.font, BuiltinFont::HelveticaBold);
        assert_eq!(title.size, Pt(24.0));
        assert_eq!(title.leading, Pt(30.0));
        assert_eq!(title.colour, TEXT_DARK);
        assert_eq!(title.space_after, Pt::from(Mm(4.0)));
    }

    #[test]
    fn bullets_are_indented() {
        let styles = StyleSheet::new().expect("can build style sheet");
        assert_eq!(styles[StyleName::Bullet].left_indent, Pt(12.0));
        assert_eq!(styles[StyleName::Cta].alignment, Alignment::Centre);
        assert_eq!(styles[StyleName::WeekSubtitle].colour, GREEN);
    }
}
