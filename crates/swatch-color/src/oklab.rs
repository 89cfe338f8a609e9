//! OKLCH / OKLab perceptual decode.
//!
//! OKLab (Björn Ottosson, 2020) is defined by two published forward
//! matrices: `M1` takes CIE XYZ (D65) to a cone-like LMS space and `M2`
//! takes the cube-rooted LMS' values to `L, a, b`. OKLCH is its polar form.
//!
//! Decoding runs the forward path backwards:
//!
//! ```text
//! (L, C, h) -> (L, a, b) -> M2^-1 -> LMS' -> cube -> LMS -> M1^-1 -> XYZ
//! ```
//!
//! Both inverses are computed from the forward matrices once, on first use.
//!
//! # Example
//!
//! ```rust
//! use swatch_color::Oklch;
//!
//! let xyz = Oklch::new(1.0, 0.0, 0.0).to_xyz();
//! // OKLab white is D65 white with Y = 1
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```

use std::sync::LazyLock;

use swatch_core::ColorSpec;
use swatch_math::{Mat3, Vec3};

/// XYZ (D65) -> LMS.
pub const M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Cube-rooted LMS' -> OKLab.
pub const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

static LMS_TO_XYZ: LazyLock<Mat3> = LazyLock::new(|| M1.inverse().unwrap_or(Mat3::IDENTITY));
static LAB_TO_LMS: LazyLock<Mat3> = LazyLock::new(|| M2.inverse().unwrap_or(Mat3::IDENTITY));

/// Polar OKLab color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, 0 (black) to 1 (white).
    pub l: f64,
    /// Chroma, >= 0.
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

/// Rectangular OKLab color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Oklch {
    /// Creates an OKLCH triple.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Polar to rectangular: `a = C cos h`, `b = C sin h`.
    pub fn to_oklab(self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    /// Decodes straight to CIE XYZ (D65, Y = 1 at white).
    #[inline]
    pub fn to_xyz(self) -> Vec3 {
        self.to_oklab().to_xyz()
    }
}

impl From<&ColorSpec> for Oklch {
    fn from(spec: &ColorSpec) -> Self {
        let (l, c, h) = spec.oklch();
        Self::new(l, c, h)
    }
}

impl Oklab {
    /// Creates an OKLab triple.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Decodes to CIE XYZ (D65).
    pub fn to_xyz(self) -> Vec3 {
        let lms_prime = *LAB_TO_LMS * Vec3::new(self.l, self.a, self.b);
        *LMS_TO_XYZ * lms_prime.cube()
    }

    /// Encodes CIE XYZ (D65) to OKLab.
    pub fn from_xyz(xyz: Vec3) -> Self {
        let lms = M1 * xyz;
        let lab = M2 * lms.map(f64::cbrt);
        Self::new(lab.x, lab.y, lab.z)
    }

    /// Rectangular to polar. Hue lands in [0, 360).
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        Oklch::new(self.l, c, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar_components() {
        let lab = Oklch::new(0.5, 0.2, 90.0).to_oklab();
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(lab.b, 0.2, epsilon = 1e-15);

        let lab = Oklch::new(0.5, 0.2, 180.0).to_oklab();
        assert_abs_diff_eq!(lab.a, -0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_white_is_d65() {
        let xyz = Oklch::new(1.0, 0.0, 0.0).to_xyz();
        assert_abs_diff_eq!(xyz.x, 0.95047, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(xyz.z, 1.08883, epsilon = 1e-3);
    }

    #[test]
    fn test_black_is_zero() {
        let xyz = Oklch::new(0.0, 0.0, 123.0).to_xyz();
        assert_abs_diff_eq!(xyz.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(xyz.y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(xyz.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let lch = Oklch::new(0.537, 0.237, 25.3);
        let back = Oklab::from_xyz(lch.to_xyz()).to_oklch();
        assert_abs_diff_eq!(back.l, lch.l, epsilon = 1e-9);
        assert_abs_diff_eq!(back.c, lch.c, epsilon = 1e-9);
        assert_abs_diff_eq!(back.h, lch.h, epsilon = 1e-7);
    }

    #[test]
    fn test_brand_red_xyz() {
        let xyz = Oklch::new(0.537, 0.237, 25.3).to_xyz();
        assert_abs_diff_eq!(xyz.x, 0.270603, epsilon = 1e-5);
        assert_abs_diff_eq!(xyz.y, 0.130757, epsilon = 1e-5);
        assert_abs_diff_eq!(xyz.z, 0.016343, epsilon = 1e-5);
    }

    #[test]
    fn test_from_color_spec() {
        let spec = ColorSpec::new(0.5, 0.1, -30.0, 2.0).unwrap();
        let lch = Oklch::from(&spec);
        assert_eq!(lch, Oklch::new(0.5, 0.1, 330.0));
    }
}
