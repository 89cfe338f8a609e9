//! Error types for swatch-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers failures while building the inputs of the
//! pipeline:
//! - Color specifications with out-of-domain values
//! - Palette lookups and palette file parsing
//! - Raster construction (dimensions, channel layout)
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{ColorSpec, Error};
//!
//! let err = ColorSpec::new(0.5, -0.1, 30.0, 2.0).unwrap_err();
//! assert!(matches!(err, Error::InvalidColor { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building swatch inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// A color component is outside its domain.
    ///
    /// Raised by [`crate::ColorSpec::new`] for non-finite values, lightness
    /// outside [0, 1], negative chroma or negative boost.
    #[error("invalid {field} {value}: {reason}")]
    InvalidColor {
        /// Component name (`lightness`, `chroma`, `hue`, `boost`)
        field: &'static str,
        /// Offending value
        value: f64,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Requested color name is not in the palette.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Palette definition is malformed.
    #[error("palette error: {0}")]
    Palette(String),

    /// Invalid raster dimensions.
    ///
    /// Returned when width or height is zero, or the sample buffer length
    /// does not match the dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Unsupported output bit depth.
    #[error("unsupported bit depth: {0} (expected 8, 10 or 12)")]
    UnsupportedBitDepth(u8),

    /// I/O error (palette files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidColor { field, value, reason }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Palette`] error.
    #[inline]
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Palette(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message() {
        let err = Error::invalid_color("chroma", -0.2, "must be >= 0");
        let msg = err.to_string();
        assert!(msg.contains("chroma"));
        assert!(msg.contains("-0.2"));
    }

    #[test]
    fn test_dimensions_message() {
        let err = Error::invalid_dimensions(0, 8, "zero width");
        assert!(err.to_string().contains("0x8"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
