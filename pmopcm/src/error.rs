use std::fmt;

/// Result type alias for PCM conversions.
pub type Result<T> = std::result::Result<T, PcmError>;

/// Which format parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatParam {
    BitsPerSample,
    Channels,
}

impl fmt::Display for FormatParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatParam::BitsPerSample => write!(f, "bits per sample"),
            FormatParam::Channels => write!(f, "channel count"),
        }
    }
}

/// Errors raised by the conversion routines.
///
/// Format errors are deterministic: retrying the same call with the same
/// parameters fails the same way, so callers should reject or renegotiate
/// the stream instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcmError {
    #[error("unsupported {param}: {value}")]
    UnsupportedFormat { param: FormatParam, value: u32 },
}

impl PcmError {
    /// Unsupported bit depth.
    pub fn bits_per_sample(value: u32) -> Self {
        PcmError::UnsupportedFormat {
            param: FormatParam::BitsPerSample,
            value,
        }
    }

    /// Unsupported channel count.
    pub fn channels(value: u32) -> Self {
        PcmError::UnsupportedFormat {
            param: FormatParam::Channels,
            value,
        }
    }

    /// The rejected parameter.
    pub fn param(&self) -> FormatParam {
        match self {
            PcmError::UnsupportedFormat { param, .. } => *param,
        }
    }

    /// The offending value carried by the error.
    pub fn value(&self) -> u32 {
        match self {
            PcmError::UnsupportedFormat { value, .. } => *value,
        }
    }
}
