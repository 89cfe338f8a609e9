//! Sample buffer handed to the encoder.
//!
//! A [`Raster`] stores interleaved RGB code values at its output
//! [`BitDepth`] (in `u16` storage) and an optional separate 8-bit alpha
//! plane. Alpha is kept exactly as it came from the source image; it is
//! never requantized in memory.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{Colorimetry, Raster};
//!
//! let r = Raster::filled(8, 8, [600, 420, 380], Colorimetry::default()).unwrap();
//! assert_eq!(r.pixel(3, 5), [600, 420, 380]);
//! assert!(!r.has_alpha());
//! ```

use crate::{BitDepth, Colorimetry, Error, Result};

/// RGB(+alpha) raster at a fixed output depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    colorimetry: Colorimetry,
    rgb: Vec<u16>,
    alpha: Option<Vec<u8>>,
}

impl Raster {
    /// Creates a raster with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] for a zero side or a code value above the
    /// colorimetry depth's maximum.
    pub fn filled(width: u32, height: u32, pixel: [u16; 3], colorimetry: Colorimetry) -> Result<Self> {
        check_dims(width, height)?;
        check_codes(&pixel, colorimetry.depth, width, height)?;

        let count = width as usize * height as usize;
        let mut rgb = Vec::with_capacity(count * 3);
        for _ in 0..count {
            rgb.extend_from_slice(&pixel);
        }
        Ok(Self {
            width,
            height,
            colorimetry,
            rgb,
            alpha: None,
        })
    }

    /// Creates a raster from interleaved RGB samples and an optional alpha
    /// plane.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if a buffer length does not match
    /// `width * height`, or a sample exceeds the depth's maximum.
    pub fn from_data(
        width: u32,
        height: u32,
        rgb: Vec<u16>,
        alpha: Option<Vec<u8>>,
        colorimetry: Colorimetry,
    ) -> Result<Self> {
        check_dims(width, height)?;
        let count = width as usize * height as usize;
        if rgb.len() != count * 3 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} RGB samples, got {}", count * 3, rgb.len()),
            ));
        }
        if let Some(a) = &alpha {
            if a.len() != count {
                return Err(Error::invalid_dimensions(
                    width,
                    height,
                    format!("expected {} alpha samples, got {}", count, a.len()),
                ));
            }
        }
        check_codes(&rgb, colorimetry.depth, width, height)?;

        Ok(Self {
            width,
            height,
            colorimetry,
            rgb,
            alpha,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Colorimetry declared for this raster.
    #[inline]
    pub fn colorimetry(&self) -> &Colorimetry {
        &self.colorimetry
    }

    /// Depth of the RGB samples.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.colorimetry.depth
    }

    /// 3 for RGB, 4 with alpha.
    #[inline]
    pub fn channels(&self) -> u8 {
        if self.alpha.is_some() { 4 } else { 3 }
    }

    /// True if the raster carries an alpha plane.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Interleaved RGB code values.
    #[inline]
    pub fn rgb(&self) -> &[u16] {
        &self.rgb
    }

    /// 8-bit alpha plane, one sample per pixel.
    #[inline]
    pub fn alpha(&self) -> Option<&[u8]> {
        self.alpha.as_deref()
    }

    /// RGB code values at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u16; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]]
    }
}

fn check_dims(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "zero-sized raster"));
    }
    Ok(())
}

fn check_codes(samples: &[u16], depth: BitDepth, width: u32, height: u32) -> Result<()> {
    let max = depth.max_value();
    if let Some(&bad) = samples.iter().find(|&&v| v > max) {
        return Err(Error::invalid_dimensions(
            width,
            height,
            format!("code value {} exceeds {} maximum {}", bad, depth, max),
        ));
    }
    Ok(())
}
