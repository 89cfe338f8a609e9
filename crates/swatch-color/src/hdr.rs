//! Luminance scaling and PQ encode.
//!
//! Relative linear light is anchored to SDR reference white (ITU-R BT.2408:
//! 203 cd/m2 at 1.0) and multiplied by the color's boost, so a boost of 2.5
//! puts white at 507.5 cd/m2. The result is PQ encoded per channel.

use swatch_core::{BitDepth, ColorSpec};
use swatch_math::Vec3;
use swatch_transfer::pq;

use crate::{Oklch, Pipeline, PixelTriple, gamut, quantize_rgb};

/// Luminance of SDR reference white, cd/m2 (BT.2408).
pub const SDR_WHITE_NITS: f64 = 203.0;

/// PQ signal of SDR reference white.
///
/// ```rust
/// let s = swatch_color::sdr_white_signal();
/// assert!((s - 0.580689).abs() < 1e-6);
/// ```
#[inline]
pub fn sdr_white_signal() -> f64 {
    pq::oetf(SDR_WHITE_NITS)
}

/// `linear * SDR_WHITE_NITS * boost`, componentwise. Not clamped.
#[inline]
pub fn scale_to_nits(linear: Vec3, boost: f64) -> Vec3 {
    linear * (SDR_WHITE_NITS * boost)
}

/// Pipeline for linear BT.2020 -> PQ signal at the given boost.
pub fn encode_pipeline(boost: f64) -> Pipeline {
    Pipeline::new()
        .scale(SDR_WHITE_NITS * boost)
        .transfer_out(pq::oetf)
}

/// Every intermediate of one color's trip through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HdrColor {
    /// CIE XYZ (D65).
    pub xyz: Vec3,
    /// Gamma-encoded sRGB (may leave [0, 1]).
    pub srgb: Vec3,
    /// Linear BT.2020, >= 0.
    pub linear: Vec3,
    /// Absolute luminance per channel, cd/m2.
    pub nits: Vec3,
    /// PQ signal per channel, [0, 1].
    pub signal: Vec3,
    /// Boost the color was evaluated at.
    pub boost: f64,
}

impl HdrColor {
    /// Quantizes the signal to code values at `depth`.
    #[inline]
    pub fn pixels(&self, depth: BitDepth) -> PixelTriple {
        quantize_rgb(self.signal, depth)
    }

    /// Index of the brightest channel (0 = R, 1 = G, 2 = B).
    #[inline]
    pub fn dominant_channel(&self) -> usize {
        self.signal.max_index()
    }

    /// True if the brightest channel is above SDR reference white.
    pub fn exceeds_sdr_white(&self) -> bool {
        self.signal.max_element() > sdr_white_signal()
    }
}

/// Runs a color through the full pipeline.
///
/// Total for every valid [`ColorSpec`]: boost 0 gives an all-zero signal,
/// anything past 10,000 cd/m2 saturates at 1.0.
pub fn evaluate(spec: &ColorSpec) -> HdrColor {
    let xyz = Oklch::from(spec).to_xyz();
    let srgb = gamut::xyz_to_srgb_pipeline().apply(xyz);
    let linear = gamut::srgb_to_rec2020_pipeline().apply(srgb);
    let nits = scale_to_nits(linear, spec.boost());
    let signal = pq::oetf_rgb(nits);

    HdrColor {
        xyz,
        srgb,
        linear,
        nits,
        signal,
        boost: spec.boost(),
    }
}
