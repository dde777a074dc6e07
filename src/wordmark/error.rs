use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum WordmarkError {
    #[error("failed to read font {path}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid TrueType/OpenType font")]
    InvalidFont {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    #[error("{path} is not a valid WOFF font")]
    InvalidWoff {
        path: PathBuf,
        #[source]
        source: super::woff::WoffError,
    },

    #[error("font {0} does not define units per em")]
    MissingUnitsPerEm(PathBuf),

    #[error("wordmark has no segments to draw")]
    NoSegments,

    #[error("failed to encode PNG")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
