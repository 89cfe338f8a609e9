//! Gamut remap from CIE XYZ into the BT.2020 output container.
//!
//! The reference path goes through gamma-encoded sRGB:
//!
//! ```text
//! XYZ -> sRGB linear -> sRGB OETF -> sRGB EOTF -> BT.2020 linear -> max(0)
//! ```
//!
//! The OETF/EOTF pair is an identity up to rounding (the sRGB curve is
//! extended through its linear segment below zero and its power segment
//! above one), so the result equals the single fused matrix
//! `XYZ -> BT.2020` followed by the clamp. Both paths are exposed; the
//! gamma path is what [`crate::evaluate`] records in its trace.
//!
//! Negative channels after the primaries change are out-of-gamut energy and
//! are clamped to zero. This is lossy but not an error.

use std::sync::LazyLock;

use swatch_math::{Mat3, Vec3};
use swatch_primaries::{REC2020, SRGB, rgb_to_rgb_matrix, xyz_to_rgb_matrix};
use swatch_transfer::srgb;

use crate::Pipeline;

/// XYZ (D65) -> linear sRGB.
pub static XYZ_TO_SRGB: LazyLock<Mat3> = LazyLock::new(|| xyz_to_rgb_matrix(&SRGB));

/// Linear sRGB -> linear BT.2020 (shared D65 white, no adaptation).
pub static SRGB_TO_REC2020: LazyLock<Mat3> =
    LazyLock::new(|| rgb_to_rgb_matrix(&SRGB, &REC2020));

/// XYZ (D65) -> linear BT.2020 in one step.
pub static XYZ_TO_REC2020: LazyLock<Mat3> = LazyLock::new(|| xyz_to_rgb_matrix(&REC2020));

/// Pipeline for XYZ -> gamma-encoded sRGB.
pub fn xyz_to_srgb_pipeline() -> Pipeline {
    Pipeline::new()
        .matrix(*XYZ_TO_SRGB)
        .transfer_out(srgb::oetf)
}

/// Pipeline for gamma sRGB -> linear BT.2020, negatives clamped.
pub fn srgb_to_rec2020_pipeline() -> Pipeline {
    Pipeline::new()
        .transfer_in(srgb::eotf)
        .matrix(*SRGB_TO_REC2020)
        .clamp_min(0.0)
}

/// Fused pipeline for XYZ -> linear BT.2020, negatives clamped.
pub fn fused_pipeline() -> Pipeline {
    Pipeline::new()
        .matrix(*XYZ_TO_REC2020)
        .clamp_min(0.0)
}

/// XYZ -> gamma-encoded sRGB. Values may leave [0, 1] for colors outside
/// the sRGB gamut.
#[inline]
pub fn xyz_to_srgb(xyz: Vec3) -> Vec3 {
    srgb::oetf_rgb(*XYZ_TO_SRGB * xyz)
}

/// Gamma sRGB -> linear BT.2020, negatives clamped to 0.
#[inline]
pub fn srgb_to_rec2020_linear(gamma: Vec3) -> Vec3 {
    clamp_negative(*SRGB_TO_REC2020 * srgb::eotf_rgb(gamma))
}

/// XYZ -> linear BT.2020 through the gamma-encoded sRGB intermediate.
pub fn xyz_to_rec2020_linear(xyz: Vec3) -> Vec3 {
    srgb_to_rec2020_linear(xyz_to_srgb(xyz))
}

/// XYZ -> linear BT.2020 with the fused matrix.
pub fn xyz_to_rec2020_linear_fused(xyz: Vec3) -> Vec3 {
    clamp_negative(*XYZ_TO_REC2020 * xyz)
}

/// Clamps every channel to >= 0. A no-op on non-negative triples.
#[inline]
pub fn clamp_negative(rgb: Vec3) -> Vec3 {
    rgb.clamp_min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Oklch;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3, eps: f64) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_white_maps_to_unit() {
        let lin = xyz_to_rec2020_linear(Oklch::new(1.0, 0.0, 0.0).to_xyz());
        assert_vec_eq(lin, Vec3::ONE, 1e-3);
    }

    #[test]
    fn test_fused_matches_gamma_path() {
        let samples = [
            (0.604, 0.191, 22.2),
            (0.537, 0.237, 25.3),
            (0.477, 0.245, 27.3),
            (0.521, 0.12, 235.0),
            (0.442, 0.11, 237.0),
            (0.9, 0.3, 140.0),
            (0.2, 0.05, 300.0),
        ];
        for (l, c, h) in samples {
            let xyz = Oklch::new(l, c, h).to_xyz();
            assert_vec_eq(xyz_to_rec2020_linear(xyz), xyz_to_rec2020_linear_fused(xyz), 1e-12);
        }
    }

    #[test]
    fn test_pipelines_match_functions() {
        let xyz = Oklch::new(0.521, 0.12, 235.0).to_xyz();
        let gamma = xyz_to_srgb_pipeline().apply(xyz);
        assert_vec_eq(gamma, xyz_to_srgb(xyz), 1e-15);

        let lin = srgb_to_rec2020_pipeline().apply(gamma);
        assert_vec_eq(lin, srgb_to_rec2020_linear(gamma), 1e-15);
        assert_vec_eq(fused_pipeline().apply(xyz), lin, 1e-12);
    }

    #[test]
    fn test_out_of_srgb_gamut_survives_gamma() {
        // Saturated blue has a negative sRGB red channel
        let gamma = xyz_to_srgb(Oklch::new(0.521, 0.12, 235.0).to_xyz());
        assert!(gamma.x < 0.0);
    }

    #[test]
    fn test_negative_channels_clamped() {
        // Deep red leaves BT.2020 on the blue side
        let lin = xyz_to_rec2020_linear(Oklch::new(0.477, 0.245, 27.3).to_xyz());
        assert_eq!(lin.z, 0.0);
        assert!(lin.x > 0.3);
    }

    #[test]
    fn test_clamp_idempotent() {
        let v = Vec3::new(0.0, 0.25, 3.5);
        assert_eq!(clamp_negative(v), v);
        let once = clamp_negative(Vec3::new(-0.1, 0.2, -5.0));
        assert_eq!(clamp_negative(once), once);
    }
}
