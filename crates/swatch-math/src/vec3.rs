//! 3D vector type for color triplets.
//!
//! [`Vec3`] holds XYZ, RGB, OKLab or per-channel luminance values.
//!
//! ```rust
//! use swatch_math::Vec3;
//!
//! let rgb = Vec3::new(0.8, -0.02, 0.1);
//! let clipped = rgb.clamp_min(0.0);
//! assert_eq!(clipped.y, 0.0);
//! ```

use std::ops::{Index, Mul};

/// A 3D vector for color triplets (RGB, XYZ, etc.).
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ, L for Lab)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ, a for Lab)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ, b for Lab)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// ```rust
    /// use swatch_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Raises every component below `floor` up to `floor`.
    ///
    /// A vector already at or above `floor` is returned unchanged.
    #[inline]
    pub fn clamp_min(self, floor: f64) -> Self {
        self.max(Self::splat(floor))
    }

    /// Component-wise cube.
    #[inline]
    pub fn cube(self) -> Self {
        self.map(|v| v * v * v)
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Index of the largest component (first wins on ties).
    #[inline]
    pub fn max_index(self) -> usize {
        let mut idx = 0;
        for i in 1..3 {
            if self[i] > self[idx] {
                idx = i;
            }
        }
        idx
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_min_lifts_negatives() {
        let v = Vec3::new(-0.25, 0.5, -1e-9);
        assert_eq!(v.clamp_min(0.0), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_clamp_min_is_noop_when_non_negative() {
        let v = Vec3::new(0.0, 0.31, 7.5);
        assert_eq!(v.clamp_min(0.0), v);
        assert_eq!(v.clamp_min(0.0).clamp_min(0.0), v);
    }

    #[test]
    fn test_max_index() {
        assert_eq!(Vec3::new(0.9, 0.1, 0.2).max_index(), 0);
        assert_eq!(Vec3::new(0.1, 0.2, 0.7).max_index(), 2);
        assert_eq!(Vec3::splat(1.0).max_index(), 0);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::new(2.0, -1.0, 0.5).cube(), Vec3::new(8.0, -1.0, 0.125));
    }

    #[test]
    fn test_vec3_index() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
    }
}
