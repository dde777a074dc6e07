//! The standard Helvetica font family.
//!
//! PDF viewers ship the "standard 14" fonts, so documents can reference Helvetica
//! by name without embedding any font program. Text is encoded with
//! `WinAnsiEncoding` and measured with the Adobe font metrics (AFM) advance widths,
//! which are expressed in thousandths of an em.
//!
//! The oblique faces share the advance widths of their upright counterparts.

use super::Pt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

/// AFM ascender of the Helvetica family.
const ASCENT: f32 = 718.0;
/// AFM descender of the Helvetica family, as a positive distance below the baseline.
const DESCENT: f32 = 207.0;
/// Width used for any WinAnsi code point without an entry in the tables below.
const FALLBACK_WIDTH: u16 = 556;

/// Advance widths for the printable ASCII range `0x20..=0x7E`.
#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl BuiltinFont {
    pub fn all() -> &'static [BuiltinFont] {
        &[
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            BuiltinFont::HelveticaOblique,
            BuiltinFont::HelveticaBoldOblique,
        ]
    }

    /// The PostScript name viewers resolve the font by.
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// The name the font is registered under in a page's resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
            BuiltinFont::HelveticaBoldOblique => "F4",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique
        )
    }

    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaOblique | BuiltinFont::HelveticaBoldOblique
        )
    }

    /// The face of this family with bold and/or italic added on top of this face.
    pub fn with_style(self, bold: bool, italic: bool) -> BuiltinFont {
        match (self.is_bold() || bold, self.is_italic() || italic) {
            (false, false) => BuiltinFont::Helvetica,
            (true, false) => BuiltinFont::HelveticaBold,
            (false, true) => BuiltinFont::HelveticaOblique,
            (true, true) => BuiltinFont::HelveticaBoldOblique,
        }
    }

    /// Advance width of a WinAnsi code in thousandths of an em.
    fn code_width(&self, code: u8) -> u16 {
        let bold = self.is_bold();
        match code {
            0x20..=0x7E => {
                let table = if bold { &BOLD_WIDTHS } else { &REGULAR_WIDTHS };
                table[(code - 0x20) as usize]
            }
            // quoteleft, quoteright
            0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            // quotedblleft, quotedblright
            0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0x95 => 350,
            0x96 => 556,
            0x85 | 0x97 => 1000,
            0xA0 => 278,
            _ => FALLBACK_WIDTH,
        }
    }

    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|c| self.code_width(win_ansi_code(c)) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }

    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENT / 1000.0)
    }

    pub fn descent(&self, size: Pt) -> Pt {
        size * (DESCENT / 1000.0)
    }
}

/// Map a character to its `WinAnsiEncoding` code, substituting `?` for anything the
/// encoding cannot represent.
pub fn win_ansi_code(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
        _ => b'?',
    }
}

/// Encode a string for a `Tj` operator against a WinAnsi-encoded font.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_code).collect()
}
