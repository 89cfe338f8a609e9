//! # swatch-color
//!
//! Turns an OKLCH [`ColorSpec`](swatch_core::ColorSpec) into PQ-encoded
//! BT.2020 pixel values.
//!
//! # Stages
//!
//! 1. [`oklab`] - OKLCH -> OKLab -> CIE XYZ (D65)
//! 2. [`gamut`] - XYZ -> gamma sRGB -> linear BT.2020, negatives clamped
//! 3. [`hdr`] - linear x 203 cd/m2 x boost, then PQ encode
//! 4. [`quantize`] - PQ signal -> integer code values
//!
//! Every stage is a pure function; there is no state and no I/O.
//!
//! # Architecture
//!
//! ```text
//!                  swatch-color
//!                       |
//!     +-----------------+------------------+
//!     |                 |                  |
//! swatch-transfer  swatch-primaries   swatch-core
//!     |                 |
//!     +--------+--------+
//!              |
//!         swatch-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_core::{BitDepth, Palette};
//! use swatch_color::evaluate;
//!
//! let palette = Palette::builtin();
//! let hdr = evaluate(palette.lookup("white").unwrap());
//!
//! assert!((hdr.nits.y - 507.5).abs() < 0.5);
//! assert_eq!(hdr.pixels(BitDepth::U10).to_array(), [694, 694, 694]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamut;
pub mod hdr;
pub mod oklab;
mod pipeline;
pub mod quantize;

pub use hdr::{HdrColor, SDR_WHITE_NITS, evaluate, scale_to_nits, sdr_white_signal};
pub use oklab::{Oklab, Oklch};
pub use pipeline::{Pipeline, TransferFn, TransformOp};
pub use quantize::{PixelTriple, quantize, quantize_rgb};

// Re-export sub-crates for convenience
pub use swatch_math as math;
pub use swatch_primaries as primaries;
pub use swatch_transfer as transfer;
