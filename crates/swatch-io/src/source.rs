//! Source logo reading.
//!
//! The logo is an existing raster (WebP or PNG) whose alpha channel defines
//! the shape. Only its dimensions and alpha plane are used; color samples
//! are replaced by the HDR white value. The file is never written to.

use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::{IoError, IoResult};

/// Dimensions and 8-bit alpha plane of a decoded source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// One alpha sample per pixel, row-major. 255 everywhere for opaque
    /// sources.
    pub alpha: Vec<u8>,
}

impl SourceImage {
    /// Builds a source from an RGBA8 buffer, keeping only its alpha.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> IoResult<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(IoError::DecodeError(format!(
                "expected {} RGBA bytes for {}x{}, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            alpha: rgba.chunks_exact(4).map(|px| px[3]).collect(),
        })
    }

    /// True if any pixel is not fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.alpha.iter().any(|&a| a != 255)
    }
}

/// Reads a source image, detecting the format from its contents.
///
/// # Errors
///
/// [`IoError::MissingSource`] if the file does not exist,
/// [`IoError::DecodeError`] if it cannot be decoded.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<SourceImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IoError::MissingSource(path.to_path_buf()));
    }

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let rgba = img.to_rgba8();
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        rgba.width(),
        rgba.height(),
        img.color()
    );
    SourceImage::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw())
}
