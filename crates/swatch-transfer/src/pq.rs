//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ encodes absolute luminance up to 10,000 cd/m2 in a perceptually
//! uniform way. It is the transfer characteristic tagged as CICP 16.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 10000] cd/m2 (nits)
//!
//! # Reference
//!
//! SMPTE ST 2084:2014, ITU-R BT.2100-2 Table 4.
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::pq;
//!
//! let signal = pq::oetf(1000.0);
//! let nits = pq::eotf(signal);
//! assert!((nits - 1000.0).abs() < 1e-6);
//! ```

use swatch_math::Vec3;

/// Peak luminance of the PQ curve in cd/m2 (nits).
pub const L_MAX: f64 = 10000.0;

/// m1 = 2610 / 16384
pub const M1: f64 = 2610.0 / 16384.0;
/// m2 = 2523 / 4096 * 128
pub const M2: f64 = 2523.0 / 4096.0 * 128.0;
/// c1 = 3424 / 4096 (= c3 - c2 + 1)
pub const C1: f64 = 3424.0 / 4096.0;
/// c2 = 2413 / 4096 * 32
pub const C2: f64 = 2413.0 / 4096.0 * 32.0;
/// c3 = 2392 / 4096 * 32
pub const C3: f64 = 2392.0 / 4096.0 * 32.0;

/// PQ EOTF: Decodes a PQ signal to absolute luminance (cd/m2).
///
/// # Arguments
///
/// * `v` - PQ encoded value [0, 1]
///
/// # Returns
///
/// Absolute luminance in cd/m2 [0, 10000].
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.0 {
        return 0.0;
    }

    let vp = v.min(1.0).powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;

    L_MAX * (num / den).powf(1.0 / M1)
}

/// PQ inverse EOTF: Encodes absolute luminance to a PQ signal.
///
/// Values at or below 0 map to 0. Values at or above [`L_MAX`] saturate
/// to 1.0.
///
/// # Arguments
///
/// * `l` - Luminance in cd/m2
///
/// # Returns
///
/// PQ encoded value [0, 1].
///
/// # Example
///
/// ```rust
/// use swatch_transfer::pq::oetf;
///
/// // 100 nits is about half the code range
/// assert!((oetf(100.0) - 0.508).abs() < 0.001);
/// assert_eq!(oetf(20000.0), 1.0);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0 {
        return 0.0;
    }
    if l >= L_MAX {
        return 1.0;
    }

    let yp = (l / L_MAX).powf(M1);
    let num = C1 + C2 * yp;
    let den = 1.0 + C3 * yp;

    (num / den).powf(M2)
}

/// Applies the PQ EOTF to each channel, returning luminance in nits.
#[inline]
pub fn eotf_rgb(signal: Vec3) -> Vec3 {
    signal.map(eotf)
}

/// Applies the PQ inverse EOTF to per-channel luminance in nits.
#[inline]
pub fn oetf_rgb(nits: Vec3) -> Vec3 {
    nits.map(oetf)
}
