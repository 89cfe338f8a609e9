//! # swatch-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! The swatch pipeline only ever touches two gamuts: sRGB (the reference
//! gamut every palette color is first mapped into) and BT.2020 (the output
//! container). Both share the D65 white point, so converting between them is
//! a pure primaries change with no chromatic adaptation.
//!
//! # Usage
//!
//! ```rust
//! use swatch_primaries::{SRGB, REC2020, rgb_to_rgb_matrix};
//! use swatch_math::Vec3;
//!
//! let m = rgb_to_rgb_matrix(&SRGB, &REC2020);
//!
//! // White stays white between D65 spaces
//! let w = m * Vec3::ONE;
//! assert!((w.x - 1.0).abs() < 1e-12);
//! ```
//!
//! # Integration with swatch-core
//!
//! [`Primaries::from_cicp`] maps the CICP primaries code point declared on a
//! raster to its chromaticities.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use swatch_core::ColorPrimaries;
use swatch_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }

    /// Primaries for a CICP color primaries code point.
    ///
    /// ```rust
    /// use swatch_core::ColorPrimaries;
    /// use swatch_primaries::Primaries;
    ///
    /// assert_eq!(Primaries::from_cicp(ColorPrimaries::Bt2020).name, "Rec.2020");
    /// ```
    pub const fn from_cicp(cp: ColorPrimaries) -> Self {
        match cp {
            ColorPrimaries::Bt709 => SRGB,
            ColorPrimaries::Bt2020 => REC2020,
        }
    }
}

impl From<ColorPrimaries> for Primaries {
    fn from(cp: ColorPrimaries) -> Self {
        Self::from_cicp(cp)
    }
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Rec.2020 / BT.2100 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// ```rust
/// use swatch_primaries::{SRGB, rgb_to_xyz_matrix};
/// use swatch_math::Vec3;
///
/// let white = rgb_to_xyz_matrix(&SRGB) * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse().unwrap_or(Mat3::IDENTITY)
}

/// Computes a matrix to convert from one RGB color space to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. No
/// chromatic adaptation is applied; both spaces used here are D65.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}
