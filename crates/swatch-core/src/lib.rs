//! # swatch-core
//!
//! Core types shared by the HDR swatch crates.
//!
//! - [`ColorSpec`] - One OKLCH color plus its HDR boost factor
//! - [`Palette`] - Immutable name -> [`ColorSpec`] table
//! - [`Cicp`], [`Colorimetry`] - Colorimetry tags handed to the encoder
//! - [`BitDepth`] - Output sample depth
//! - [`Raster`] - RGB(+alpha) sample buffer produced for the encoder
//!
//! ## Crate Structure
//!
//! ```text
//! swatch-core (this crate)
//!    ^
//!    |
//!    +-- swatch-primaries (CICP primaries -> chromaticities)
//!    +-- swatch-color (ColorSpec -> pixel values)
//!    +-- swatch-io (rasters, encoder, batch)
//!    +-- swatch-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cicp;
pub mod color_spec;
pub mod error;
pub mod format;
pub mod palette;
pub mod raster;

pub use cicp::*;
pub use color_spec::*;
pub use error::*;
pub use format::*;
pub use palette::*;
pub use raster::*;
