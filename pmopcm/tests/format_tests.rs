use pmopcm::{BitDepth, ByteOrder, ChannelLayout, FormatError, PcmConverter, PcmError, PcmFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn yaml_with_explicit_byte_order() {
    init_tracing();
    let format = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 2\nbyte_order: big\n").unwrap();
    assert_eq!(format, PcmFormat::new(16, 2, ByteOrder::Big));
    assert_eq!(format.bit_depth(), Ok(BitDepth::B16));
}

#[test]
fn yaml_byte_order_defaults_to_little() {
    let format = PcmFormat::from_yaml("bits_per_sample: 8\nchannels: 1\n").unwrap();
    assert_eq!(format.byte_order, ByteOrder::Little);
    assert_eq!(format.frame_bytes(), 1);
}

#[test]
fn yaml_rejects_unknown_byte_order() {
    let err = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 2\nbyte_order: middle\n")
        .unwrap_err();
    assert!(matches!(err, FormatError::Yaml(_)));
}

#[test]
fn yaml_rejects_unsupported_values() {
    let err = PcmFormat::from_yaml("bits_per_sample: 24\nchannels: 2\n").unwrap_err();
    assert!(matches!(
        err,
        FormatError::Unsupported(e) if e == PcmError::bits_per_sample(24)
    ));

    let err = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 0\n").unwrap_err();
    assert!(matches!(
        err,
        FormatError::Unsupported(e) if e == PcmError::channels(0)
    ));
}

#[test]
fn format_allows_many_channels_but_converter_does_not() {
    init_tracing();
    let format = PcmFormat::from_yaml("bits_per_sample: 16\nchannels: 6\n").unwrap();
    assert_eq!(format.validate(), Ok(()));
    assert_eq!(PcmConverter::new(format), Err(PcmError::channels(6)));
}

#[test]
fn converter_mono_eight_bit() {
    init_tracing();
    let conv = PcmConverter::new(PcmFormat::new(8, 1, ByteOrder::Little)).unwrap();
    assert_eq!(conv.bit_depth(), BitDepth::B8);
    assert_eq!(conv.layout(), ChannelLayout::Mono);

    let raw = [0x00, 0x80, 0xFF];
    let mut native = [0i16; 3];
    assert_eq!(conv.to_native(&raw, &mut native).unwrap(), 3);
    assert_eq!(native, [0, 128, 255]);

    let mut left = [0i16; 3];
    assert_eq!(conv.split(&raw, &mut left, &mut []).unwrap(), 3);
    assert_eq!(left, native);

    let mut float = [0.0f32; 3];
    assert_eq!(conv.to_float(&native, &mut float, &mut []), 3);
    assert_eq!(float, [0.0, 128.0 / 32768.0, 255.0 / 32768.0]);
}

#[test]
fn format_serializes_back_to_yaml() {
    let format = PcmFormat::new(16, 1, ByteOrder::Big);
    let text = serde_yaml::to_string(&format).unwrap();
    assert!(text.contains("byte_order: big"));
    assert_eq!(PcmFormat::from_yaml(&text).unwrap(), format);
}
