use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte order of multi-byte samples in a raw buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first (WAV).
    #[default]
    Little,
    /// Most significant byte first (AIFF).
    Big,
}

impl ByteOrder {
    #[inline(always)]
    pub const fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    #[inline(always)]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, ByteOrder::Big)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Big => write!(f, "big-endian"),
        }
    }
}
