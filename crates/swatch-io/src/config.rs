//! Generator settings.

use std::path::PathBuf;
use std::time::Duration;

use swatch_core::{BitDepth, ColorSpec};

use crate::encoder::{DEFAULT_TIMEOUT, EncodeSettings};
use crate::IoResult;

/// Everything a batch run needs besides the palette and the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the `.avif` files are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Source logo (WebP or PNG with alpha).
    pub logo_path: PathBuf,
    /// Side length of solid swatches, in pixels.
    pub size: u32,
    /// Output sample depth.
    pub depth: BitDepth,
    /// Encoder quality for solid swatches.
    pub quality: u8,
    /// Encoder quality for the logo.
    pub logo_quality: u8,
    /// HDR boost of the logo's white.
    pub logo_boost: f64,
    /// Wall-clock limit per encoder run.
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/hdr"),
            logo_path: PathBuf::from("assets/logo.webp"),
            size: 8,
            depth: BitDepth::U10,
            quality: 100,
            logo_quality: 90,
            logo_boost: 2.5,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeneratorConfig {
    /// Encoder settings for solid swatches.
    pub fn fill_settings(&self) -> EncodeSettings {
        EncodeSettings {
            timeout: self.timeout,
            ..EncodeSettings::with_quality(self.quality)
        }
    }

    /// Encoder settings for the logo.
    pub fn logo_settings(&self) -> EncodeSettings {
        EncodeSettings {
            timeout: self.timeout,
            ..EncodeSettings::with_quality(self.logo_quality)
        }
    }

    /// The logo color: white at the logo boost.
    pub fn logo_color(&self) -> IoResult<ColorSpec> {
        Ok(ColorSpec::white(self.logo_boost)?)
    }

    /// Output path for an image name.
    pub fn output_path(&self, name: &str, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", name, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GeneratorConfig::default();
        assert_eq!(c.size, 8);
        assert_eq!(c.depth, BitDepth::U10);
        assert_eq!(c.fill_settings().quality, 100);
        assert_eq!(c.logo_settings().quality, 90);
        assert_eq!(c.logo_color().unwrap().boost(), 2.5);
        assert_eq!(c.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_output_path() {
        let c = GeneratorConfig::default();
        assert_eq!(
            c.output_path("brand-500-red", "avif"),
            PathBuf::from("assets/hdr/brand-500-red.avif")
        );
    }

    #[test]
    fn test_negative_logo_boost_rejected() {
        let c = GeneratorConfig {
            logo_boost: -1.0,
            ..Default::default()
        };
        assert!(c.logo_color().is_err());
    }
}
