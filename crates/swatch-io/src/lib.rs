//! # swatch-io
//!
//! Everything between a computed pixel value and an image file on disk:
//!
//! - [`raster`] - solid swatch fills and the HDR logo composite
//! - [`png`] - 16-bit PNG staging of a raster
//! - [`source`] - decoding the source logo (WebP, PNG)
//! - [`encoder`] - the [`Encoder`] capability and the `avifenc` backend
//! - [`batch`] - name selection and parallel batch generation
//!
//! # Example
//!
//! ```rust,no_run
//! use swatch_core::Palette;
//! use swatch_io::{AvifEnc, Generator, GeneratorConfig};
//!
//! let palette = Palette::builtin();
//! let config = GeneratorConfig::default();
//! let encoder = AvifEnc::new();
//!
//! let report = Generator::new(&palette, &config, &encoder)
//!     .run(&["brand-500-red".to_string()])?;
//! println!("{}", report.summary());
//! # Ok::<(), swatch_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod batch;
pub mod config;
pub mod encoder;
pub mod png;
pub mod raster;
pub mod source;

pub use batch::{
    BatchReport, Generator, ImageDetail, ImageFailure, ImageOutcome, ImageRequest, Selection,
    select,
};
pub use config::GeneratorConfig;
pub use encoder::{AvifEnc, DEFAULT_TIMEOUT, EncodeSettings, Encoder};
pub use error::{EncoderError, IoError, IoResult};
pub use source::SourceImage;
