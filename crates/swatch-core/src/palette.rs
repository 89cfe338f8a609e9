//! Named color table.
//!
//! A [`Palette`] is an ordered, immutable mapping from color name to
//! [`ColorSpec`]. It is built once (from the built-in brand table or a YAML
//! file) and passed by reference into the generator; nothing mutates it
//! afterwards.
//!
//! # Palette files
//!
//! ```yaml
//! colors:
//!   - name: brand-500-red
//!     oklch: [0.537, 0.237, 25.3]
//!     boost: 4.0
//!   - name: white
//!     oklch: [1.0, 0.0, 0.0]
//!     boost: 2.5
//! ```
//!
//! Every entry goes through [`ColorSpec::new`], so a file cannot smuggle in
//! negative chroma or NaN.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ColorSpec, Error, Result};

/// Reserved name for the composited logo image. Never a palette entry.
pub const LOGO_NAME: &str = "logo";

/// Built-in brand colors: (name, L, C, h, boost).
///
/// Boost 3-4x pushes the dominant channel past SDR white for a visible
/// glow; the 600 shades stay closer to SDR.
const BUILTIN: &[(&str, f64, f64, f64, f64)] = &[
    ("brand-400-red", 0.604, 0.191, 22.2, 3.0),
    ("brand-500-red", 0.537, 0.237, 25.3, 4.0),
    ("brand-600-red", 0.477, 0.245, 27.3, 1.8),
    ("brand-400-blue", 0.585, 0.1, 230.0, 3.0),
    ("brand-500-blue", 0.521, 0.12, 235.0, 4.0),
    ("brand-600-blue", 0.442, 0.11, 237.0, 1.8),
    ("white", 1.0, 0.0, 0.0, 2.5),
];

/// Ordered table of named colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(String, ColorSpec)>,
}

/// On-disk palette layout.
#[derive(Debug, Serialize, Deserialize)]
struct PaletteFile {
    colors: Vec<PaletteEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PaletteEntry {
    name: String,
    oklch: [f64; 3],
    boost: f64,
}

impl Palette {
    /// The built-in brand palette.
    ///
    /// ```rust
    /// use swatch_core::Palette;
    ///
    /// let p = Palette::builtin();
    /// assert_eq!(p.len(), 7);
    /// assert!(p.get("brand-500-red").is_some());
    /// ```
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(name, l, c, h, boost)| {
                (name.to_string(), ColorSpec::from_trusted(l, c, h, boost))
            })
            .collect();
        Self { entries }
    }

    /// Builds a palette from `(name, spec)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Rejects empty names, duplicates and the reserved [`LOGO_NAME`].
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColorSpec)>,
        S: Into<String>,
    {
        let mut out: Vec<(String, ColorSpec)> = Vec::new();
        for (name, spec) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(Error::palette("empty color name"));
            }
            if name == LOGO_NAME {
                return Err(Error::palette(format!("'{}' is reserved", LOGO_NAME)));
            }
            if out.iter().any(|(n, _)| *n == name) {
                return Err(Error::palette(format!("duplicate color '{}'", name)));
            }
            out.push((name, spec));
        }
        Ok(Self { entries: out })
    }

    /// Parses a YAML palette document.
    ///
    /// # Errors
    ///
    /// [`Error::Palette`] for malformed YAML or duplicate names,
    /// [`Error::InvalidColor`] for out-of-domain values.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let file: PaletteFile = serde_yaml::from_str(s)?;
        let mut entries = Vec::with_capacity(file.colors.len());
        for e in file.colors {
            let [l, c, h] = e.oklch;
            entries.push((e.name, ColorSpec::new(l, c, h, e.boost)?));
        }
        Self::from_entries(entries)
    }

    /// Loads a YAML palette file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Serializes the palette back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let file = PaletteFile {
            colors: self
                .entries
                .iter()
                .map(|(name, spec)| PaletteEntry {
                    name: name.clone(),
                    oklch: [spec.lightness(), spec.chroma(), spec.hue()],
                    boost: spec.boost(),
                })
                .collect(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Looks up a color by name.
    pub fn get(&self, name: &str) -> Option<&ColorSpec> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Looks up a color by name, failing with [`Error::UnknownColor`].
    pub fn lookup(&self, name: &str) -> Result<&ColorSpec> {
        self.get(name).ok_or_else(|| Error::UnknownColor(name.to_string()))
    }

    /// True if `name` is a palette entry.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Color names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, spec)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
colors:
  - name: teal
    oklch: [0.7, 0.12, 190]
    boost: 3.0
  - name: gray
    oklch: [0.5, 0.0, 0.0]
    boost: 1.0
";

    #[test]
    fn test_builtin_order_and_values() {
        let p = Palette::builtin();
        let names: Vec<&str> = p.names().collect();
        assert_eq!(names.first(), Some(&"brand-400-red"));
        assert_eq!(names.last(), Some(&"white"));

        let white = p.lookup("white").unwrap();
        assert_eq!(white.oklch(), (1.0, 0.0, 0.0));
        assert_eq!(white.boost(), 2.5);
    }

    #[test]
    fn test_builtin_entries_pass_validation() {
        for (name, spec) in Palette::builtin().iter() {
            let (l, c, h) = spec.oklch();
            assert!(ColorSpec::new(l, c, h, spec.boost()).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_logo_is_not_a_color() {
        let p = Palette::builtin();
        assert!(!p.contains(LOGO_NAME));
        assert!(matches!(p.lookup(LOGO_NAME), Err(Error::UnknownColor(_))));
    }

    #[test]
    fn test_unknown_lookup() {
        let err = Palette::builtin().lookup("brand-999-green").unwrap_err();
        assert!(err.to_string().contains("brand-999-green"));
    }

    #[test]
    fn test_yaml_parse() {
        let p = Palette::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.lookup("teal").unwrap().hue(), 190.0);
        assert_eq!(p.names().collect::<Vec<_>>(), vec!["teal", "gray"]);
    }

    #[test]
    fn test_yaml_rejects_bad_values() {
        let bad = "colors:\n  - name: x\n    oklch: [0.5, -0.1, 0]\n    boost: 1\n";
        assert!(matches!(
            Palette::from_yaml_str(bad),
            Err(Error::InvalidColor { .. })
        ));

        let dup = "colors:\n  - name: x\n    oklch: [0.5, 0.1, 0]\n    boost: 1\n  - name: x\n    oklch: [0.5, 0.1, 0]\n    boost: 1\n";
        assert!(matches!(Palette::from_yaml_str(dup), Err(Error::Palette(_))));

        assert!(matches!(
            Palette::from_yaml_str("colors: 3"),
            Err(Error::Palette(_))
        ));
    }

    #[test]
    fn test_reserved_name_rejected() {
        let spec = ColorSpec::white(1.0).unwrap();
        assert!(Palette::from_entries([("logo", spec)]).is_err());
        assert!(Palette::from_entries([("  ", spec)]).is_err());
    }

    #[test]
    fn test_yaml_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.yaml");
        std::fs::write(&path, Palette::builtin().to_yaml().unwrap()).unwrap();

        let loaded = Palette::load(&path).unwrap();
        assert_eq!(loaded, Palette::builtin());
    }
}
