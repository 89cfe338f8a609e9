//! # swatch-transfer
//!
//! Transfer functions (OETF/EOTF) used by the HDR swatch pipeline.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Linear range |
//! |----------|----------|-------|
//! | [`srgb`] | Reference gamut encoding | [0, 1] relative |
//! | [`pq`] | HDR output (BT.2100 PQ) | [0, 10000] cd/m2 |
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::{srgb, pq};
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! // HDR: absolute luminance in, PQ signal out
//! let signal = pq::oetf(203.0);
//! assert!(signal > 0.5 && signal < 0.6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pq;
pub mod srgb;

pub use pq::{eotf as pq_eotf, oetf as pq_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
