//! Declarative description of a raw PCM stream.
//!
//! A [`PcmFormat`] is what the surrounding pipeline negotiates with its
//! input device or file reader. It can be built in code or read from YAML:
//!
//! ```yaml
//! bits_per_sample: 16
//! channels: 2
//! byte_order: big   # optional, defaults to little
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bit_depth::BitDepth;
use crate::byte_order::ByteOrder;
use crate::error::{PcmError, Result};

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("invalid PCM format description: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Unsupported(#[from] PcmError),
}

/// Raw PCM stream properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PcmFormat {
    pub bits_per_sample: u32,
    pub channels: u32,
    #[serde(default)]
    pub byte_order: ByteOrder,
}

impl PcmFormat {
    pub fn new(bits_per_sample: u32, channels: u32, byte_order: ByteOrder) -> Self {
        Self {
            bits_per_sample,
            channels,
            byte_order,
        }
    }

    /// Parses and validates a YAML description.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, FormatError> {
        let format: PcmFormat = serde_yaml::from_str(text)?;
        format.validate()?;
        debug!(
            bits = format.bits_per_sample,
            channels = format.channels,
            byte_order = %format.byte_order,
            "Loaded PCM format"
        );
        Ok(format)
    }

    /// Checks the bit depth and that there is at least one channel.
    ///
    /// Stereo-or-mono is not required here: float normalization accepts any
    /// channel count. [`crate::PcmConverter`] enforces the narrower rule.
    pub fn validate(&self) -> Result<()> {
        self.bit_depth()?;
        if self.channels == 0 {
            return Err(PcmError::channels(self.channels));
        }
        Ok(())
    }

    pub fn bit_depth(&self) -> Result<BitDepth> {
        BitDepth::try_from(self.bits_per_sample)
    }

    /// Bytes per sample, 0 for an unsupported bit depth.
    pub fn bytes_per_sample(&self) -> usize {
        self.bit_depth().map(BitDepth::bytes).unwrap_or(0)
    }

    /// Bytes per interleaved frame, 0 for an unsupported format.
    pub fn frame_bytes(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Whole frames contained in `raw_len` bytes.
    pub fn frames_in(&self, raw_len: usize) -> usize {
        match self.frame_bytes() {
            0 => 0,
            n => raw_len / n,
        }
    }

    /// Interleaved native samples produced from `raw_len` bytes.
    pub fn native_len(&self, raw_len: usize) -> usize {
        match self.bytes_per_sample() {
            0 => 0,
            n => raw_len / n,
        }
    }
}
