//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod list;

use anyhow::{Context, Result};
use std::path::Path;
use swatch_core::{BitDepth, Palette};
use tracing::debug;

/// Loads the palette file, or the built-in palette when none is given.
pub fn load_palette(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(path) => {
            let palette = Palette::load(path)
                .with_context(|| format!("Failed to load palette: {}", path.display()))?;
            debug!("Loaded {} colors from {}", palette.len(), path.display());
            Ok(palette)
        }
        None => Ok(Palette::builtin()),
    }
}

/// Parses a `--bit-depth` value.
pub fn bit_depth(bits: u8) -> Result<BitDepth> {
    BitDepth::try_from(bits).context("Invalid --bit-depth")
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;

    if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_path() {
        assert_eq!(load_palette(None).unwrap(), Palette::builtin());
    }

    #[test]
    fn test_missing_palette_file() {
        let err = load_palette(Some(Path::new("/nonexistent/palette.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load palette"));
    }

    #[test]
    fn test_palette_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.yaml");
        std::fs::write(
            &path,
            "colors:\n  - name: teal\n    oklch: [0.7, 0.12, 190]\n    boost: 3.0\n",
        )
        .unwrap();

        let palette = load_palette(Some(&path)).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.lookup("teal").unwrap().boost(), 3.0);
    }

    #[test]
    fn test_bit_depth() {
        assert_eq!(bit_depth(12).unwrap(), BitDepth::U12);
        assert!(bit_depth(16).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
    }
}
