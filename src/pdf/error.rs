use std::path::PathBuf;

pub type PdfResult<T> = Result<T, PdfError>;

#[derive(thiserror::Error, Debug)]
pub enum PdfError {
    #[error("failed to read image {path}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write PDF")]
    Write(#[from] std::io::Error),
}
