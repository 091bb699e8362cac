//! Converts one synthetic 16-bit big-endian stereo block the way an encoder
//! thread would: negotiate the format once, then reuse caller-owned buffers.
//!
//! Run with `RUST_LOG=pmopcm=trace` to see the converter events.

use pmopcm::{PcmConverter, PcmFormat};
use tracing_subscriber::EnvFilter;

const FRAMES: usize = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let format = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 2\nbyte_order: big\n")?;
    let converter = PcmConverter::new(format)?;

    // 440 Hz on the left, silence on the right, at 48 kHz
    let mut raw = Vec::with_capacity(FRAMES * format.frame_bytes());
    for i in 0..FRAMES {
        let phase = i as f32 * 440.0 * std::f32::consts::TAU / 48_000.0;
        let left = (phase.sin() * 16_000.0) as i16;
        raw.extend_from_slice(&left.to_be_bytes());
        raw.extend_from_slice(&0i16.to_be_bytes());
    }

    let mut native = vec![0i16; format.native_len(raw.len())];
    converter.to_native(&raw, &mut native)?;

    let mut left = vec![0.0f32; format.frames_in(raw.len())];
    let mut right = vec![0.0f32; left.len()];
    let frames = converter.to_float(&native, &mut left, &mut right);

    let peak = left.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    println!("{frames} frames, left peak {peak:.3}");
    Ok(())
}
