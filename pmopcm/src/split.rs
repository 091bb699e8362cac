//! Fused widening and de-interleaving.
//!
//! These paths decode raw bytes straight into one buffer per channel, so the
//! interleaved native buffer produced by [`crate::widen`] never has to exist.
//! Every (bit depth, byte order, layout) combination resolves through
//! a small strategy table to one of two generic loops.

use std::fmt;

use crate::bit_depth::BitDepth;
use crate::byte_order::ByteOrder;
use crate::error::{PcmError, Result};
use crate::format::PcmFormat;
use crate::raw_sample::{I16Be, I16Le, RawSample, U8};

/// Channel layouts supported by the fused paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    #[inline(always)]
    pub const fn channels(self) -> u32 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }
}

impl TryFrom<u32> for ChannelLayout {
    type Error = PcmError;

    fn try_from(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(ChannelLayout::Mono),
            2 => Ok(ChannelLayout::Stereo),
            other => Err(PcmError::channels(other)),
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Mono => write!(f, "mono"),
            ChannelLayout::Stereo => write!(f, "stereo"),
        }
    }
}

type SplitFn = fn(&[u8], &mut [i16], &mut [i16]) -> usize;

/// Strategy table. Byte order is ignored for 8-bit input.
#[inline]
fn strategy(depth: BitDepth, order: ByteOrder, layout: ChannelLayout) -> SplitFn {
    use ChannelLayout::*;
    match (depth, order, layout) {
        (BitDepth::B8, _, Mono) => split_mono::<U8>,
        (BitDepth::B8, _, Stereo) => split_stereo::<U8>,
        (BitDepth::B16, ByteOrder::Big, Mono) => split_mono::<I16Be>,
        (BitDepth::B16, ByteOrder::Big, Stereo) => split_stereo::<I16Be>,
        (BitDepth::B16, ByteOrder::Little, Mono) => split_mono::<I16Le>,
        (BitDepth::B16, ByteOrder::Little, Stereo) => split_stereo::<I16Le>,
    }
}

#[inline(always)]
fn split_mono<R: RawSample>(raw: &[u8], left: &mut [i16], _right: &mut [i16]) -> usize {
    let mut frames = 0;
    for (l, src) in left.iter_mut().zip(raw.chunks_exact(R::WIDTH)) {
        *l = R::read(src);
        frames += 1;
    }
    frames
}

#[inline(always)]
fn split_stereo<R: RawSample>(raw: &[u8], left: &mut [i16], right: &mut [i16]) -> usize {
    let mut frames = 0;
    for ((frame, l), r) in raw
        .chunks_exact(2 * R::WIDTH)
        .zip(left.iter_mut())
        .zip(right.iter_mut())
    {
        let (lb, rb) = frame.split_at(R::WIDTH);
        *l = R::read(lb);
        *r = R::read(rb);
        frames += 1;
    }
    frames
}

/// Splits interleaved 8-bit bytes into per-channel native buffers.
///
/// With one channel every byte goes to `left` and `right` is left untouched
/// (it may be empty). With two channels bytes alternate left/right.
///
/// Returns the number of frames written. Decoding stops at the first of: end
/// of whole frames in `raw`, end of `left`, end of `right` (stereo only).
///
/// # Errors
///
/// `UnsupportedFormat` carrying `channels` when it is not 1 or 2, before any
/// write.
pub fn split_8bit(
    raw: &[u8],
    left: &mut [i16],
    right: &mut [i16],
    channels: u32,
) -> Result<usize> {
    let layout = ChannelLayout::try_from(channels)?;
    Ok(strategy(BitDepth::B8, ByteOrder::Little, layout)(raw, left, right))
}

/// Splits interleaved 16-bit bytes into per-channel native buffers.
///
/// Stereo frames are 4 bytes, left sample first. Same return value and
/// channel rules as [`split_8bit`].
///
/// ```
/// use pmopcm::split_16bit;
///
/// let raw = [0x00, 0x01, 0x00, 0x02, 0xFF, 0xFE, 0x00, 0x03];
/// let (mut left, mut right) = ([0i16; 2], [0i16; 2]);
/// assert_eq!(split_16bit(&raw, &mut left, &mut right, 2, true)?, 2);
/// assert_eq!(left, [1, -2]);
/// assert_eq!(right, [2, 3]);
/// # Ok::<(), pmopcm::PcmError>(())
/// ```
pub fn split_16bit(
    raw: &[u8],
    left: &mut [i16],
    right: &mut [i16],
    channels: u32,
    big_endian: bool,
) -> Result<usize> {
    let layout = ChannelLayout::try_from(channels)?;
    let split = strategy(BitDepth::B16, ByteOrder::from_big_endian(big_endian), layout);
    Ok(split(raw, left, right))
}

/// Fused split driven by a full format description.
///
/// Unlike [`split_8bit`] and [`split_16bit`] the bit depth is validated too.
pub fn split_channels(
    format: &PcmFormat,
    raw: &[u8],
    left: &mut [i16],
    right: &mut [i16],
) -> Result<usize> {
    let depth = format.bit_depth()?;
    let layout = ChannelLayout::try_from(format.channels)?;
    Ok(strategy(depth, format.byte_order, layout)(raw, left, right))
}

/// Frames that fit both the interleaved input and every output buffer.
#[inline]
pub(crate) fn planar_frames<T>(interleaved_len: usize, outputs: &[&mut [T]]) -> usize {
    let channels = outputs.len();
    if channels == 0 {
        return 0;
    }
    let capacity = outputs.iter().map(|o| o.len()).min().unwrap_or(0);
    capacity.min(interleaved_len / channels)
}

/// Generic de-interleave of native samples, one output per channel.
///
/// The channel count is `outputs.len()`. Returns the number of frames
/// written; a trailing partial frame is dropped.
pub fn deinterleave(samples: &[i16], outputs: &mut [&mut [i16]]) -> usize {
    let frames = planar_frames(samples.len(), outputs);
    if frames == 0 {
        return 0;
    }

    let channels = outputs.len();
    for (f, frame) in samples.chunks_exact(channels).take(frames).enumerate() {
        for (out, &sample) in outputs.iter_mut().zip(frame) {
            out[f] = sample;
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_channels() {
        assert_eq!(ChannelLayout::try_from(1u32), Ok(ChannelLayout::Mono));
        assert_eq!(ChannelLayout::try_from(2u32), Ok(ChannelLayout::Stereo));
        assert_eq!(ChannelLayout::try_from(0u32), Err(PcmError::channels(0)));
        assert_eq!(ChannelLayout::Stereo.channels(), 2);
    }

    #[test]
    fn planar_frames_uses_shortest_output() {
        let mut a = [0i16; 4];
        let mut b = [0i16; 2];
        let outputs: [&mut [i16]; 2] = [&mut a, &mut b];
        assert_eq!(planar_frames(10, &outputs), 2);
        assert_eq!(planar_frames(3, &outputs), 1);

        let none: [&mut [i16]; 0] = [];
        assert_eq!(planar_frames(10, &none), 0);
    }
}
