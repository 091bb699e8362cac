//! A validated format bound to the conversion routines.
//!
//! Building a [`PcmConverter`] is the format-negotiation step: the bit depth
//! and channel layout are checked once, so the per-block calls only fail if
//! the caller bypasses the converter.

use tracing::{debug, trace, warn};

use crate::bit_depth::BitDepth;
use crate::error::Result;
use crate::format::PcmFormat;
use crate::normalize::to_planar_f32;
use crate::split::{ChannelLayout, split_channels};
use crate::widen::widen_interleaved;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmConverter {
    format: PcmFormat,
    depth: BitDepth,
    layout: ChannelLayout,
}

impl PcmConverter {
    /// Accepts 8/16-bit, mono or stereo formats.
    pub fn new(format: PcmFormat) -> Result<Self> {
        let checked = format.bit_depth().and_then(|depth| {
            ChannelLayout::try_from(format.channels).map(|layout| (depth, layout))
        });

        match checked {
            Ok((depth, layout)) => {
                debug!(%depth, %layout, byte_order = %format.byte_order, "PCM converter ready");
                Ok(Self {
                    format,
                    depth,
                    layout,
                })
            }
            Err(e) => {
                warn!(
                    bits = format.bits_per_sample,
                    channels = format.channels,
                    "Rejecting PCM format: {}",
                    e
                );
                Err(e)
            }
        }
    }

    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Widens `raw` into interleaved native samples.
    /// See [`widen_interleaved`].
    pub fn to_native(&self, raw: &[u8], out: &mut [i16]) -> Result<usize> {
        let written = widen_interleaved(
            self.depth.bits(),
            raw,
            out,
            self.format.byte_order.is_big_endian(),
        )?;
        trace!(bytes = raw.len(), samples = written, "to_native");
        Ok(written)
    }

    /// Widens and de-interleaves `raw` in one pass. For mono input `right`
    /// is not touched. See [`split_channels`].
    pub fn split(&self, raw: &[u8], left: &mut [i16], right: &mut [i16]) -> Result<usize> {
        let frames = split_channels(&self.format, raw, left, right)?;
        trace!(bytes = raw.len(), frames, "split");
        Ok(frames)
    }

    /// Normalizes interleaved native samples into `left` (and `right` for
    /// stereo). See [`to_planar_f32`].
    pub fn to_float(&self, native: &[i16], left: &mut [f32], right: &mut [f32]) -> usize {
        let frames = match self.layout {
            ChannelLayout::Mono => to_planar_f32(native, &mut [left]),
            ChannelLayout::Stereo => to_planar_f32(native, &mut [left, right]),
        };
        trace!(samples = native.len(), frames, "to_float");
        frames
    }
}
