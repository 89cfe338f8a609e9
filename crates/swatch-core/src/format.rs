//! Output sample depth.
//!
//! ```rust
//! use swatch_core::BitDepth;
//!
//! let d = BitDepth::try_from(10u8).unwrap();
//! assert_eq!(d.max_value(), 1023);
//! ```

use std::fmt;

use crate::{Error, Result};

/// Integer sample depth of an encoded swatch.
///
/// - `U8` - 8-bit [0, 255]
/// - `U10` - 10-bit [0, 1023] (HDR10 default)
/// - `U12` - 12-bit [0, 4095]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 10-bit unsigned integer.
    #[default]
    U10,
    /// 12-bit unsigned integer.
    U12,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U10 => 10,
            Self::U12 => 12,
        }
    }

    /// Maximum representable code value, `2^bits - 1`.
    #[inline]
    pub const fn max_value(&self) -> u16 {
        match self {
            Self::U8 => 255,
            Self::U10 => 1023,
            Self::U12 => 4095,
        }
    }

    /// Expands a code value at this depth to 16 bits by bit replication.
    ///
    /// The result divided back down (`v16 * max / 65535`, rounded) yields
    /// the original code value, so an encoder reading 16-bit input and
    /// writing at this depth reproduces it exactly.
    ///
    /// ```rust
    /// use swatch_core::BitDepth;
    ///
    /// assert_eq!(BitDepth::U8.expand_to_u16(255), 65535);
    /// assert_eq!(BitDepth::U10.expand_to_u16(1023), 65535);
    /// assert_eq!(BitDepth::U10.expand_to_u16(0), 0);
    /// ```
    #[inline]
    pub const fn expand_to_u16(&self, v: u16) -> u16 {
        let bits = self.bits();
        let shift = 16 - bits;
        (v << shift) | (v >> (bits - shift))
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            8 => Ok(Self::U8),
            10 => Ok(Self::U10),
            12 => Ok(Self::U12),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
