//! Raster images embedded as PDF image XObjects.
//!
//! Images are decoded with the `image` crate and stored as zlib-compressed 8-bit RGB
//! samples. An alpha channel, if the image actually uses one, becomes a separate
//! greyscale soft mask.

use super::{PdfError, PdfResult};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    /// zlib-compressed RGB samples
    pub(crate) rgb: Vec<u8>,
    /// zlib-compressed alpha samples, if any pixel is not fully opaque
    pub(crate) alpha: Option<Vec<u8>>,
}

const COMPRESSION_LEVEL: u8 = 6;

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> PdfResult<Image> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PdfError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded =
            image::load_from_memory(&bytes).map_err(|source| PdfError::ImageDecode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Image::from_rgba(&decoded.to_rgba8()))
    }

    pub fn from_rgba(image: &image::RgbaImage) -> Image {
        let (width, height) = image.dimensions();
        let pixel_count = (width * height) as usize;
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(pixel_count);
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }

        let alpha = if alpha.iter().all(|&a| a == u8::MAX) {
            None
        } else {
            Some(miniz_oxide::deflate::compress_to_vec_zlib(
                &alpha,
                COMPRESSION_LEVEL,
            ))
        };

        Image {
            width,
            height,
            rgb: miniz_oxide::deflate::compress_to_vec_zlib(&rgb, COMPRESSION_LEVEL),
            alpha,
        }
    }
}
