#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use b64stream::{DecodeMode, STANDARD_NO_PAD};

fuzz_target!(|data: &[u8]| {
    let config = STANDARD_NO_PAD.with_decode_mode(DecodeMode::Strict);

    let encoded = b64stream::encode_config(data, &config);
    assert!(!encoded.ends_with('='));
    let decoded = b64stream::decode_config(&encoded, &config).unwrap();
    assert_eq!(data, decoded.as_slice());
});
