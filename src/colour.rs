//! RGB colours shared by the wordmark rasteriser and the PDF renderer.
//!
//! Colours are stored as 8-bit channels so the brand palette can be declared as
//! constants and written to the configuration file in the familiar `#RRGGBB` form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour `{0}`, expected the form `#RRGGBB`")]
pub struct ParseColourError(String);

impl Colour {
    pub const BLACK: Colour = Colour::new_rgb_bytes(0, 0, 0);

    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Build a colour from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Colour {
        Colour {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Channels scaled to `0.0..=1.0`, as PDF colour operators expect them.
    pub fn components(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    pub fn to_rgba(&self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColourError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Colour::from_hex)
            .map_err(|_| ParseColourError(s.to_string()))
    }
}

impl TryFrom<String> for Colour {
    type Error = ParseColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_hex_colours() {
        assert_eq!(
            "#4CAF50".parse::<Colour>(),
            Ok(Colour::new_rgb_bytes(76, 175, 80))
        );
        assert_eq!("388e3c".parse::<Colour>(), Ok(Colour::from_hex(0x388E3C)));
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!("#4CAF5".parse::<Colour>().is_err());
        assert!("#GGGGGG".parse::<Colour>().is_err());
        assert!("".parse::<Colour>().is_err());
    }

    #[test]
    fn can_display_as_hex() {
        assert_eq!(Colour::from_hex(0x0A0A0A).to_string(), "#0A0A0A");
        assert_eq!(String::from(Colour::from_hex(0xFFFFFF)), "#FFFFFF");
    }

    #[test]
    fn can_scale_components() {
        let (r, g, b) = Colour::from_hex(0xFFFFFF).components();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        let (r, _, _) = Colour::BLACK.components();
        assert_eq!(r, 0.0);
    }
}
