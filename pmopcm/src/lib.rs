#![cfg_attr(feature = "simd", feature(portable_simd))]
//! # pmopcm
//!
//! Allocation-free conversion of raw PCM byte buffers, as delivered by a
//! capture device or file reader, into native samples ready for encoding.
//!
//! Three independent entry points cover the same transform:
//!
//! - [`widen_interleaved`]: 8/16-bit bytes to interleaved `i16`, resolving
//!   byte order for 16-bit input.
//! - [`split_8bit`], [`split_16bit`], [`split_channels`]: the same widening
//!   fused with de-interleaving into one buffer per channel (mono/stereo).
//! - [`to_planar_f32`]: interleaved `i16` to one normalized `f32` buffer per
//!   channel (`sample / 32768.0`).
//!
//! All buffers belong to the caller. Every call is a single pass over its
//! input, writes as many whole samples or frames as fit and returns that
//! count; a trailing partial frame is dropped.
//!
//! 8-bit samples are stored as their unsigned byte value (0..=255) in the
//! `i16` container, without centering or scaling. Downstream encoders rely on
//! this exact behavior.
//!
//! ## Example
//!
//! ```
//! use pmopcm::{ByteOrder, PcmConverter, PcmFormat};
//!
//! let format = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 2\nbyte_order: big")?;
//! let converter = PcmConverter::new(format)?;
//!
//! let raw = [0x00, 0x01, 0x00, 0x02, 0xFF, 0xFE, 0x00, 0x03];
//! let mut left = [0i16; 2];
//! let mut right = [0i16; 2];
//! let frames = converter.split(&raw, &mut left, &mut right)?;
//!
//! assert_eq!(frames, 2);
//! assert_eq!(left, [1, -2]);
//! assert_eq!(right, [2, 3]);
//! assert_eq!(converter.format().byte_order, ByteOrder::Big);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bit_depth;
pub mod byte_order;
pub mod converter;
pub mod error;
pub mod format;
pub mod normalize;
pub mod raw_sample;
pub mod split;
pub mod widen;

pub use bit_depth::BitDepth;
pub use byte_order::ByteOrder;
pub use converter::PcmConverter;
pub use error::{FormatParam, PcmError, Result};
pub use format::{FormatError, PcmFormat};
pub use normalize::{FULL_SCALE, sample_to_f32, to_planar_f32};
pub use split::{ChannelLayout, deinterleave, split_8bit, split_16bit, split_channels};
pub use widen::widen_interleaved;
