//! Native `i16` to normalized `f32`, de-interleaved per channel.
//!
//! Each sample is divided by [`FULL_SCALE`], giving values in
//! [-1.0, 0.999969]. No clamping is applied. Any channel count is accepted;
//! mono and stereo get dedicated loops, with an optional SIMD path for mono
//! when the `simd` feature is enabled.

use bytemuck::cast_slice;

#[cfg(feature = "simd")]
use std::simd::Simd;
#[cfg(feature = "simd")]
use std::simd::num::SimdInt;

use crate::split::planar_frames;

/// Signed 16-bit full-scale magnitude.
pub const FULL_SCALE: f32 = 32_768.0;

/// Normalizes one native sample.
#[inline(always)]
pub fn sample_to_f32(sample: i16) -> f32 {
    sample as f32 / FULL_SCALE
}

/// De-interleaves `samples` into one normalized buffer per channel.
///
/// The channel count is `outputs.len()`. Returns the number of frames
/// written: the smaller of the whole frames in `samples` and the shortest
/// output buffer. With no outputs nothing is written and 0 is returned.
///
/// ```
/// use pmopcm::to_planar_f32;
///
/// let mut mono = [0.0f32; 2];
/// assert_eq!(to_planar_f32(&[16384, -16384], &mut [&mut mono[..]]), 2);
/// assert_eq!(mono, [0.5, -0.5]);
/// ```
pub fn to_planar_f32(samples: &[i16], outputs: &mut [&mut [f32]]) -> usize {
    let frames = planar_frames(samples.len(), outputs);
    if frames == 0 {
        return 0;
    }

    match outputs {
        [mono] => scale_mono(&samples[..frames], &mut mono[..frames]),
        [left, right] => {
            let pairs: &[[i16; 2]] = cast_slice(&samples[..frames * 2]);
            scale_stereo(pairs, &mut left[..frames], &mut right[..frames]);
        }
        _ => scale_planar(samples, outputs, frames),
    }
    frames
}

#[cfg(feature = "simd")]
fn scale_mono(samples: &[i16], out: &mut [f32]) {
    const LANES: usize = 8;
    // power of two: multiplying is exact, same result as dividing
    let scale = Simd::<f32, LANES>::splat(1.0 / FULL_SCALE);

    let mut src = samples.chunks_exact(LANES);
    let mut dst = out.chunks_exact_mut(LANES);
    for (s, d) in (&mut src).zip(&mut dst) {
        (Simd::<i16, LANES>::from_slice(s).cast::<f32>() * scale).copy_to_slice(d);
    }

    for (s, d) in src.remainder().iter().zip(dst.into_remainder()) {
        *d = sample_to_f32(*s);
    }
}

#[cfg(not(feature = "simd"))]
fn scale_mono(samples: &[i16], out: &mut [f32]) {
    for (d, &s) in out.iter_mut().zip(samples) {
        *d = sample_to_f32(s);
    }
}

fn scale_stereo(pairs: &[[i16; 2]], left: &mut [f32], right: &mut [f32]) {
    for ((pair, l), r) in pairs.iter().zip(left.iter_mut()).zip(right.iter_mut()) {
        *l = sample_to_f32(pair[0]);
        *r = sample_to_f32(pair[1]);
    }
}

fn scale_planar(samples: &[i16], outputs: &mut [&mut [f32]], frames: usize) {
    let channels = outputs.len();
    for (f, frame) in samples.chunks_exact(channels).take(frames).enumerate() {
        for (out, &s) in outputs.iter_mut().zip(frame) {
            out[f] = sample_to_f32(s);
        }
    }
}
