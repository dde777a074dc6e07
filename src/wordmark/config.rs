use crate::colour::Colour;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A run of wordmark text drawn in a single colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub colour: Colour,
}

impl Segment {
    pub fn new<S: Into<String>>(text: S, colour: Colour) -> Segment {
        Segment {
            text: text.into(),
            colour,
        }
    }
}

/// Wordmark output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordmarkConfig {
    /// TrueType/OpenType or WOFF font the wordmark is set in
    #[serde(default = "default_font")]
    pub font: PathBuf,
    /// Output PNG file path
    #[serde(default = "default_outfile")]
    pub outfile: PathBuf,
    /// Font size in pixels per em
    #[serde(default = "default_font_size")]
    pub font_size_px: f32,
    #[serde(default = "default_padding")]
    pub padding_x_px: u32,
    #[serde(default = "default_padding")]
    pub padding_y_px: u32,
    /// Text segments, drawn left to right
    #[serde(default = "default_segments")]
    pub segments: Vec<Segment>,
}

fn default_font() -> PathBuf {
    PathBuf::from("scripts/fonts/PlusJakartaSans-Bold.woff")
}
fn default_outfile() -> PathBuf {
    PathBuf::from("public/gradtensor-brandname.png")
}
fn default_font_size() -> f32 {
    300.0
}
fn default_padding() -> u32 {
    40
}
fn default_segments() -> Vec<Segment> {
    vec![
        Segment::new("Grad", Colour::from_hex(0x4CAF50)),
        Segment::new("Tensor", Colour::BLACK),
    ]
}

impl Default for WordmarkConfig {
    fn default() -> Self {
        WordmarkConfig {
            font: default_font(),
            outfile: default_outfile(),
            font_size_px: default_font_size(),
            padding_x_px: default_padding(),
            padding_y_px: default_padding(),
            segments: default_segments(),
        }
    }
}

impl WordmarkConfig {
    pub fn padding(&self) -> (u32, u32) {
        (self.padding_x_px, self.padding_y_px)
    }
}

/// Result of rendering the wordmark, used for user feedback.
pub struct WordmarkStats {
    pub width: u32,
    pub height: u32,
}

impl WordmarkStats {
    /// The lines printed once the PNG has been written to `outfile`.
    pub fn report(&self, outfile: &Path) -> String {
        format!(
            "Brand name PNG generated: {}\nSize: {}x{}px",
            outfile.display(),
            self.width,
            self.height
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_serialize_wordmark() {
        let config = WordmarkConfig::default();
        let toml = toml::to_string(&config).expect("can serialize wordmark to TOML");
        assert!(toml.contains("colour = \"#4CAF50\""));
    }

    #[test]
    fn can_fill_in_missing_fields() {
        let config: WordmarkConfig =
            toml::from_str("font_size_px = 150.0").expect("can parse partial config");
        assert_eq!(config.font_size_px, 150.0);
        assert_eq!(config.padding(), (40, 40));
        assert_eq!(config.segments, default_segments());
        assert!(config.font.ends_with("PlusJakartaSans-Bold.woff"));
    }

    #[test]
    fn can_report_generated_png() {
        let stats = WordmarkStats {
            width: 610,
            height: 186,
        };
        assert_eq!(
            stats.report(Path::new("public/gradtensor-brandname.png")),
            "Brand name PNG generated: public/gradtensor-brandname.png\nSize: 610x186px"
        );
    }
}
