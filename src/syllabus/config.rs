use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Syllabus PDF output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusConfig {
    /// Output PDF file path
    #[serde(default = "default_outfile")]
    pub outfile: PathBuf,
    /// Square logo shown in the page header, skipped if missing
    #[serde(default = "default_logo")]
    pub logo: PathBuf,
    /// Wordmark image shown next to the logo, skipped if missing
    #[serde(default = "default_wordmark")]
    pub wordmark: PathBuf,
    /// Optional TOML file replacing the built-in course content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<PathBuf>,
}

fn default_outfile() -> PathBuf {
    PathBuf::from("public/syllabus-ai-engineering-6-week.pdf")
}
fn default_logo() -> PathBuf {
    PathBuf::from("src/assets/logo.png")
}
fn default_wordmark() -> PathBuf {
    PathBuf::from("public/gradtensor-brandname.png")
}

impl Default for SyllabusConfig {
    fn default() -> Self {
        SyllabusConfig {
            outfile: default_outfile(),
            logo: default_logo(),
            wordmark: default_wordmark(),
            curriculum: None,
        }
    }
}

/// Statistics about a rendered syllabus, used for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub page_count: usize,
    /// size of the written file in bytes
    pub file_size: u64,
}
