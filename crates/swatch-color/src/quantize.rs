//! Signal quantization.
//!
//! `code = round(clamp(signal, 0, 1) * (2^n - 1))`, full range. Ties round
//! away from zero.

use std::fmt;

use swatch_core::BitDepth;
use swatch_math::Vec3;

/// Integer code values for R, G, B at one bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelTriple {
    rgb: [u16; 3],
    depth: BitDepth,
}

impl PixelTriple {
    /// Red code value.
    #[inline]
    pub fn r(&self) -> u16 {
        self.rgb[0]
    }

    /// Green code value.
    #[inline]
    pub fn g(&self) -> u16 {
        self.rgb[1]
    }

    /// Blue code value.
    #[inline]
    pub fn b(&self) -> u16 {
        self.rgb[2]
    }

    /// `[R, G, B]`.
    #[inline]
    pub fn to_array(&self) -> [u16; 3] {
        self.rgb
    }

    /// Depth the values were quantized at.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }
}

impl fmt::Display for PixelTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Quantizes one signal value. NaN maps to 0.
///
/// ```rust
/// use swatch_core::BitDepth;
/// use swatch_color::quantize;
///
/// assert_eq!(quantize(1.0, BitDepth::U10), 1023);
/// assert_eq!(quantize(0.5, BitDepth::U8), 128);
/// assert_eq!(quantize(-3.0, BitDepth::U12), 0);
/// ```
#[inline]
pub fn quantize(signal: f64, depth: BitDepth) -> u16 {
    let max = depth.max_value();
    let v = if signal.is_nan() { 0.0 } else { signal.clamp(0.0, 1.0) };
    (v * max as f64).round() as u16
}

/// Quantizes a signal triple.
pub fn quantize_rgb(signal: Vec3, depth: BitDepth) -> PixelTriple {
    PixelTriple {
        rgb: [
            quantize(signal.x, depth),
            quantize(signal.y, depth),
            quantize(signal.z, depth),
        ],
        depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for depth in [BitDepth::U8, BitDepth::U10, BitDepth::U12] {
            assert_eq!(quantize(0.0, depth), 0);
            assert_eq!(quantize(1.0, depth), depth.max_value());
            assert_eq!(quantize(2.0, depth), depth.max_value());
            assert_eq!(quantize(-0.5, depth), 0);
        }
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 0.5 * 1023 = 511.5
        assert_eq!(quantize(0.5, BitDepth::U10), 512);
        assert_eq!(quantize(100.4 / 1023.0, BitDepth::U10), 100);
        assert_eq!(quantize(100.6 / 1023.0, BitDepth::U10), 101);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(quantize(f64::NAN, BitDepth::U10), 0);
    }

    #[test]
    fn test_deterministic() {
        let s = Vec3::new(0.6339512872674812, 0.37777389340666606, 0.3131552003788967);
        let a = quantize_rgb(s, BitDepth::U10);
        let b = quantize_rgb(s, BitDepth::U10);
        assert_eq!(a, b);
        assert_eq!(a.to_array(), [649, 386, 320]);
        assert_eq!(a.to_string(), "(649, 386, 320)");
    }

    #[test]
    fn test_every_code_is_reachable() {
        let depth = BitDepth::U10;
        let max = depth.max_value();
        for code in 0..=max {
            let signal = code as f64 / max as f64;
            assert_eq!(quantize(signal, depth), code);
        }
    }
}
