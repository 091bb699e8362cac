//! Bit-depth widening of interleaved raw bytes into native `i16` samples.
//!
//! Channels are not considered here: the input is treated as one flat
//! interleaved stream and the output keeps the same interleaving.

use crate::bit_depth::BitDepth;
use crate::byte_order::ByteOrder;
use crate::error::Result;
use crate::raw_sample::{I16Be, I16Le, RawSample, U8};

type WidenFn = fn(&[u8], &mut [i16]) -> usize;

/// Picks the extraction strategy for a bit depth and byte order.
/// Byte order is irrelevant for 8-bit input.
#[inline]
fn strategy(depth: BitDepth, order: ByteOrder) -> WidenFn {
    match (depth, order) {
        (BitDepth::B8, _) => widen_with::<U8>,
        (BitDepth::B16, ByteOrder::Big) => widen_with::<I16Be>,
        (BitDepth::B16, ByteOrder::Little) => widen_with::<I16Le>,
    }
}

#[inline(always)]
fn widen_with<R: RawSample>(raw: &[u8], out: &mut [i16]) -> usize {
    let mut written = 0;
    for (dst, src) in out.iter_mut().zip(raw.chunks_exact(R::WIDTH)) {
        *dst = R::read(src);
        written += 1;
    }
    written
}

/// Widens an interleaved 8- or 16-bit raw buffer into native samples.
///
/// For 16-bit input `big_endian` selects whether the first byte of each
/// sample is the high or the low byte. 8-bit bytes are copied as unsigned
/// values (0..=255) into the `i16` container.
///
/// Returns the number of samples written, which is the smaller of the whole
/// samples in `raw` and `out.len()`. A trailing partial sample is ignored.
///
/// # Errors
///
/// [`PcmError::UnsupportedFormat`](crate::PcmError::UnsupportedFormat) when
/// `bits_per_sample` is neither 8 nor 16. Nothing is written in that case.
///
/// ```
/// use pmopcm::widen_interleaved;
///
/// let mut out = [0i16; 2];
/// let n = widen_interleaved(16, &[0x01, 0x00, 0xFF, 0xFF], &mut out, false)?;
/// assert_eq!(n, 2);
/// assert_eq!(out, [1, -1]);
/// # Ok::<(), pmopcm::PcmError>(())
/// ```
pub fn widen_interleaved(
    bits_per_sample: u32,
    raw: &[u8],
    out: &mut [i16],
    big_endian: bool,
) -> Result<usize> {
    let depth = BitDepth::try_from(bits_per_sample)?;
    let widen = strategy(depth, ByteOrder::from_big_endian(big_endian));
    Ok(widen(raw, out))
}
