//! Colorimetry tags attached to every raster handed to the encoder.
//!
//! CICP (coding-independent code points, ITU-T H.273) is the compact
//! `primaries / transfer / matrix` triple plus the full-range flag. Only the
//! code points this tool emits or reads are modelled.
//!
//! ```rust
//! use swatch_core::Cicp;
//!
//! assert_eq!(Cicp::BT2100_PQ.to_string(), "9/16/9");
//! ```

use std::fmt;

use crate::BitDepth;

/// Color primaries, H.273 Table 2.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPrimaries {
    /// ITU-R BT.709-6 / sRGB
    Bt709 = 1,
    /// ITU-R BT.2020-2 / BT.2100-2
    Bt2020 = 9,
}

/// Transfer characteristics, H.273 Table 3.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferCharacteristics {
    /// IEC 61966-2-1 sRGB
    Srgb = 13,
    /// SMPTE ST 2084 perceptual quantizer
    Pq = 16,
}

/// Matrix coefficients, H.273 Table 4.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixCoefficients {
    /// ITU-R BT.709-6
    Bt709 = 1,
    /// ITU-R BT.2020-2 non-constant luminance
    Bt2020Ncl = 9,
}

/// Chroma subsampling requested from the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChromaSubsampling {
    /// No subsampling. Required for flat color fills to stay exact.
    #[default]
    Yuv444,
    /// Horizontal subsampling.
    Yuv422,
    /// Horizontal and vertical subsampling.
    Yuv420,
}

impl ChromaSubsampling {
    /// Short form used by encoder command lines (`444`, `422`, `420`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yuv444 => "444",
            Self::Yuv422 => "422",
            Self::Yuv420 => "420",
        }
    }
}

/// Coding-independent code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cicp {
    /// Exact color of the red, green and blue primaries.
    pub primaries: ColorPrimaries,
    /// Transfer function between signal and linear light.
    pub transfer: TransferCharacteristics,
    /// Matrix between RGB and the coded YCbCr representation.
    pub matrix: MatrixCoefficients,
    /// True if samples use the whole code range (no headroom).
    pub full_range: bool,
}

impl Cicp {
    /// BT.2100 PQ: BT.2020 primaries, PQ transfer, BT.2020 NCL matrix,
    /// full range.
    pub const BT2100_PQ: Self = Self {
        primaries: ColorPrimaries::Bt2020,
        transfer: TransferCharacteristics::Pq,
        matrix: MatrixCoefficients::Bt2020Ncl,
        full_range: true,
    };

    /// Numeric `(primaries, transfer, matrix)` triple.
    #[inline]
    pub const fn code_points(&self) -> (u8, u8, u8) {
        (self.primaries as u8, self.transfer as u8, self.matrix as u8)
    }
}

impl fmt::Display for Cicp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, t, m) = self.code_points();
        write!(f, "{}/{}/{}", p, t, m)
    }
}

/// Everything the encoder must declare about a raster.
///
/// ICC embedding is never requested: the CICP tag is the only color
/// description written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colorimetry {
    /// CICP triple and range flag.
    pub cicp: Cicp,
    /// Output sample depth.
    pub depth: BitDepth,
    /// Chroma subsampling.
    pub chroma: ChromaSubsampling,
}

impl Colorimetry {
    /// BT.2100 PQ, 4:4:4, at the given depth.
    pub const fn hdr10(depth: BitDepth) -> Self {
        Self {
            cicp: Cicp::BT2100_PQ,
            depth,
            chroma: ChromaSubsampling::Yuv444,
        }
    }
}

impl Default for Colorimetry {
    fn default() -> Self {
        Self::hdr10(BitDepth::U10)
    }
}
