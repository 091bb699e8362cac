//! Bit depth of raw PCM input.
//!
//! Only 8-bit and 16-bit samples are handled. Both widen into an `i16`
//! native sample; see [`BitDepth::B8`] for the 8-bit contract.

use std::fmt;

use crate::error::{PcmError, Result};

/// Runtime bit-depth descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// One unsigned byte per sample. The byte value is stored as is in the
    /// native `i16` (0..=255), without re-centering around zero.
    B8,
    /// Two bytes per sample, signed, byte order given separately.
    B16,
}

impl BitDepth {
    /// Returns the number of bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            BitDepth::B8 => 8,
            BitDepth::B16 => 16,
        }
    }

    /// Bytes consumed per sample.
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        match self {
            BitDepth::B8 => 1,
            BitDepth::B16 => 2,
        }
    }

    /// Create from bit count, returning `None` if unsupported.
    #[inline(always)]
    pub const fn from_u32(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::B8),
            16 => Some(Self::B16),
            _ => None,
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = PcmError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_u32(bits).ok_or(PcmError::bits_per_sample(bits))
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl PartialOrd for BitDepth {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitDepth {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bits().cmp(&other.bits())
    }
}
