use super::{BuiltinFont, Pt};
use crate::colour::Colour;
use derive_builder::Builder;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Centre,
    Right,
}

impl Alignment {
    /// Horizontal offset of an item `width` wide inside a box `available` wide.
    pub fn offset(&self, available: Pt, width: Pt) -> Pt {
        match self {
            Alignment::Left => Pt(0.0),
            Alignment::Centre => (available - width) / 2.0,
            Alignment::Right => available - width,
        }
    }
}

/// The visual attributes of a paragraph.
///
/// Space before a paragraph is dropped when the paragraph starts a page; space after
/// is always kept (it simply pushes the next block down or off the page).
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into))]
pub struct ParagraphStyle {
    pub name: String,
    #[builder(default = "BuiltinFont::Helvetica")]
    pub font: BuiltinFont,
    #[builder(default = "Pt(10.0)")]
    pub size: Pt,
    #[builder(default = "Pt(12.0)")]
    pub leading: Pt,
    #[builder(default = "Colour::BLACK")]
    pub colour: Colour,
    #[builder(default)]
    pub space_before: Pt,
    #[builder(default)]
    pub space_after: Pt,
    #[builder(default)]
    pub left_indent: Pt,
    #[builder(default)]
    pub alignment: Alignment,
}
