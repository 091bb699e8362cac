//! Sample extraction strategies.
//!
//! Each strategy knows how many bytes one raw sample occupies and how to
//! assemble those bytes into a native `i16`. The conversion loops in
//! [`crate::widen`] and [`crate::split`] are generic over this trait, so the
//! bit depth x byte order combinations share one loop body each.

/// Reads one raw sample into the native representation.
pub trait RawSample {
    /// Bytes per sample.
    const WIDTH: usize;

    /// `bytes` holds exactly [`Self::WIDTH`] bytes.
    fn read(bytes: &[u8]) -> i16;
}

/// 8-bit unsigned byte, stored unchanged (0..=255) in the `i16`.
pub struct U8;

impl RawSample for U8 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn read(bytes: &[u8]) -> i16 {
        i16::from(bytes[0])
    }
}

/// Generates a 16-bit strategy for a given byte order.
/// ```ignore
/// raw_i16!(Be, from_be_bytes, "..."); // defines `I16Be`
/// ```
macro_rules! raw_i16 {
    ($order:ident, $from_bytes:ident, $doc:literal) => {
        paste::paste! {
            #[doc = $doc]
            pub struct [<I16 $order>];

            impl RawSample for [<I16 $order>] {
                const WIDTH: usize = 2;

                #[inline(always)]
                fn read(bytes: &[u8]) -> i16 {
                    i16::$from_bytes([bytes[0], bytes[1]])
                }
            }
        }
    };
}

raw_i16!(Be, from_be_bytes, "16-bit signed, high byte first.");
raw_i16!(Le, from_le_bytes, "16-bit signed, low byte first.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_is_not_centered() {
        assert_eq!(U8::read(&[0x00]), 0);
        assert_eq!(U8::read(&[0x80]), 128);
        assert_eq!(U8::read(&[0xFF]), 255);
    }

    #[test]
    fn i16_byte_orders() {
        assert_eq!(I16Be::read(&[0x01, 0x02]), 0x0102);
        assert_eq!(I16Le::read(&[0x01, 0x02]), 0x0201);
        assert_eq!(I16Be::read(&[0xFF, 0xFE]), -2);
        assert_eq!(I16Le::read(&[0x00, 0x80]), i16::MIN);
    }
}
