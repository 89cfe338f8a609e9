//! # swatch-math
//!
//! Small fixed-size math for color transforms.
//!
//! - [`Mat3`] - 3x3 matrices for XYZ/RGB/LMS conversions
//! - [`Vec3`] - 3-component triples (XYZ, RGB, OKLab, nits, PQ signal)
//!
//! # Design
//!
//! All matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`. The PQ curve amplifies relative error by roughly
//! two orders of magnitude between signal and nits, so single precision
//! cannot hold a 1e-6 round-trip.
//!
//! # Usage
//!
//! ```rust
//! use swatch_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.y > 0.0);
//! ```
//!
//! # Used By
//!
//! - `swatch-primaries` - RGB/XYZ matrix derivation
//! - `swatch-color` - OKLab decode and gamut conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
