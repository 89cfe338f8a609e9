//! OKLCH color specification with an HDR boost factor.

use crate::{Error, Result};

/// One perceptual color plus its HDR luminance boost.
///
/// Immutable once built. [`ColorSpec::new`] validates the input instead of
/// computing on out-of-domain values:
///
/// - every component must be finite
/// - lightness in [0, 1]
/// - chroma >= 0
/// - boost >= 0 (0 yields black)
/// - hue is wrapped into [0, 360)
///
/// # Example
///
/// ```rust
/// use swatch_core::ColorSpec;
///
/// let red = ColorSpec::new(0.537, 0.237, 25.3, 4.0).unwrap();
/// assert_eq!(red.boost(), 4.0);
///
/// let wrapped = ColorSpec::new(0.5, 0.1, -30.0, 1.0).unwrap();
/// assert_eq!(wrapped.hue(), 330.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec {
    l: f64,
    c: f64,
    h: f64,
    boost: f64,
}

impl ColorSpec {
    /// Creates a validated color specification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when a component is outside its domain.
    pub fn new(l: f64, c: f64, h: f64, boost: f64) -> Result<Self> {
        for (field, value) in [("lightness", l), ("chroma", c), ("hue", h), ("boost", boost)] {
            if !value.is_finite() {
                return Err(Error::invalid_color(field, value, "must be finite"));
            }
        }
        if !(0.0..=1.0).contains(&l) {
            return Err(Error::invalid_color("lightness", l, "must be within [0, 1]"));
        }
        if c < 0.0 {
            return Err(Error::invalid_color("chroma", c, "must be >= 0"));
        }
        if boost < 0.0 {
            return Err(Error::invalid_color("boost", boost, "must be >= 0"));
        }

        // rem_euclid rounds tiny negative hues up to exactly 360
        let h = h.rem_euclid(360.0);
        let h = if h >= 360.0 { 0.0 } else { h };

        Ok(Self { l, c, h, boost })
    }

    /// Builds a spec from trusted constants (the built-in palette).
    pub(crate) const fn from_trusted(l: f64, c: f64, h: f64, boost: f64) -> Self {
        Self { l, c, h, boost }
    }

    /// Achromatic white (L=1, C=0) at the given boost.
    ///
    /// # Errors
    ///
    /// Fails only for a negative or non-finite boost.
    pub fn white(boost: f64) -> Result<Self> {
        Self::new(1.0, 0.0, 0.0, boost)
    }

    /// OKLCH lightness.
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.l
    }

    /// OKLCH chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.c
    }

    /// OKLCH hue in degrees, [0, 360).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.h
    }

    /// Luminance multiplier over SDR reference white.
    #[inline]
    pub fn boost(&self) -> f64 {
        self.boost
    }

    /// Returns `(L, C, h)`.
    #[inline]
    pub fn oklch(&self) -> (f64, f64, f64) {
        (self.l, self.c, self.h)
    }

    /// Same color at a different boost.
    ///
    /// # Errors
    ///
    /// Fails for a negative or non-finite boost.
    pub fn with_boost(&self, boost: f64) -> Result<Self> {
        Self::new(self.l, self.c, self.h, boost)
    }
}
