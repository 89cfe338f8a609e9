//! Error types for raster I/O, encoding and batch generation.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure of the external image encoder.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The encoder program could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The encoder exited unsuccessfully. `stderr` is kept verbatim.
    #[error("encoder exited with {status}:\n{stderr}")]
    Failed {
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The encoder did not finish in time and was killed.
    #[error("encoder timed out after {0:?}")]
    Timeout(Duration),

    /// Staging or output file I/O.
    #[error("encoder I/O error: {0}")]
    Io(#[from] io::Error),
}

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// A source asset (the logo) does not exist.
    #[error("source not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// External encoder failure.
    #[error(transparent)]
    Encoder(#[from] EncoderError),

    /// Invalid input (color, raster dimensions).
    #[error(transparent)]
    Core(#[from] swatch_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
