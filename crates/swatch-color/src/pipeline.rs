//! Color transformation pipeline.
//!
//! A pipeline is an ordered list of per-triple operations. The swatch stages
//! in [`crate::gamut`] and [`crate::hdr`] are each built as one of these, so
//! the full path from XYZ to PQ signal can be inspected op by op.
//!
//! # Example
//!
//! ```rust
//! use swatch_color::Pipeline;
//! use swatch_color::transfer::srgb;
//! use swatch_color::primaries::{SRGB, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
//! use swatch_math::Vec3;
//!
//! // gamma sRGB -> linear -> XYZ -> linear sRGB -> gamma sRGB
//! let pipeline = Pipeline::new()
//!     .transfer_in(srgb::eotf)
//!     .matrix(rgb_to_xyz_matrix(&SRGB))
//!     .matrix(xyz_to_rgb_matrix(&SRGB))
//!     .transfer_out(srgb::oetf);
//!
//! let out = pipeline.apply(Vec3::new(0.5, 0.3, 0.2));
//! assert!((out.x - 0.5).abs() < 1e-12);
//! ```

use swatch_math::{Mat3, Vec3};

/// Transfer function type (scalar to scalar).
pub type TransferFn = fn(f64) -> f64;

/// A single operation in the color pipeline.
#[derive(Clone)]
pub enum TransformOp {
    /// Input transfer function (EOTF - decode to linear).
    ///
    /// Applied to each channel independently.
    TransferIn(TransferFn),

    /// Output transfer function (OETF - encode from linear).
    ///
    /// Applied to each channel independently.
    TransferOut(TransferFn),

    /// 3x3 matrix transform.
    ///
    /// Applied as: `[R', G', B'] = M * [R, G, B]`
    Matrix(Mat3),

    /// Uniform scale: `[R', G', B'] = s * [R, G, B]`
    Scale(f64),

    /// Clamp every channel to at least `min`. No upper bound.
    ClampMin(f64),
}

impl std::fmt::Debug for TransformOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransferIn(_) => f.write_str("TransferIn(fn)"),
            Self::TransferOut(_) => f.write_str("TransferOut(fn)"),
            Self::Matrix(m) => f.debug_tuple("Matrix").field(m).finish(),
            Self::Scale(s) => f.debug_tuple("Scale").field(s).finish(),
            Self::ClampMin(v) => f.debug_tuple("ClampMin").field(v).finish(),
        }
    }
}

/// A color transformation pipeline.
///
/// Operations are applied in order, left to right.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ops: Vec<TransformOp>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Adds an operation to the pipeline.
    pub fn push(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Adds an input transfer function (EOTF).
    pub fn transfer_in(self, f: TransferFn) -> Self {
        self.push(TransformOp::TransferIn(f))
    }

    /// Adds an output transfer function (OETF).
    pub fn transfer_out(self, f: TransferFn) -> Self {
        self.push(TransformOp::TransferOut(f))
    }

    /// Adds a matrix transform.
    pub fn matrix(self, m: Mat3) -> Self {
        self.push(TransformOp::Matrix(m))
    }

    /// Adds a uniform scale.
    pub fn scale(self, s: f64) -> Self {
        self.push(TransformOp::Scale(s))
    }

    /// Adds a lower clamp.
    pub fn clamp_min(self, min: f64) -> Self {
        self.push(TransformOp::ClampMin(min))
    }

    /// Returns the number of operations in the pipeline.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies the pipeline to an RGB (or XYZ) triple.
    pub fn apply(&self, mut v: Vec3) -> Vec3 {
        for op in &self.ops {
            v = match op {
                TransformOp::TransferIn(f) | TransformOp::TransferOut(f) => v.map(f),
                TransformOp::Matrix(m) => m.transform(v),
                TransformOp::Scale(s) => v * *s,
                TransformOp::ClampMin(min) => v.clamp_min(*min),
            };
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use swatch_primaries::{SRGB, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
    use swatch_transfer::srgb;

    #[test]
    fn test_empty_pipeline() {
        let v = Vec3::new(0.5, 0.3, 0.2);
        assert_eq!(Pipeline::new().apply(v), v);
        assert!(Pipeline::new().is_empty());
    }

    #[test]
    fn test_transfer_roundtrip() {
        let pipeline = Pipeline::new()
            .transfer_in(srgb::eotf)
            .transfer_out(srgb::oetf);

        let v = Vec3::new(0.5, -0.02, 1.3);
        let out = pipeline.apply(v);
        assert_abs_diff_eq!(out.x, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(out.y, v.y, epsilon = 1e-12);
        assert_abs_diff_eq!(out.z, v.z, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let pipeline = Pipeline::new()
            .matrix(rgb_to_xyz_matrix(&SRGB))
            .matrix(xyz_to_rgb_matrix(&SRGB));

        let v = Vec3::new(0.5, 0.3, 0.2);
        let out = pipeline.apply(v);
        assert_abs_diff_eq!(out.x, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(out.z, v.z, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_then_clamp_min() {
        let pipeline = Pipeline::new().scale(2.0).clamp_min(0.0);
        assert_eq!(pipeline.len(), 2);
        let out = pipeline.apply(Vec3::new(0.7, 0.3, -0.2));
        assert_abs_diff_eq!(out.x, 1.4, epsilon = 1e-12);
        assert_abs_diff_eq!(out.y, 0.6, epsilon = 1e-12);
        assert_eq!(out.z, 0.0);
    }

    #[test]
    fn test_clamp_min_has_no_ceiling() {
        let out = Pipeline::new().clamp_min(0.0).apply(Vec3::new(-1.0, 0.5, 40.0));
        assert_eq!(out, Vec3::new(0.0, 0.5, 40.0));
    }
}
