#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use b64stream::*;

mod utils;

fuzz_target!(|data: &[u8]| {
    let config = utils::random_config(data);

    // The data probably isn't valid base64 input, but as long as it returns an error instead
    // of crashing, that's correct behavior.
    let result = decode_config(data, &config);
    if let Ok(decoded) = result {
        assert!(decoded.len() <= decoded_len_estimate(data.len()));
    }

    // lenient decoding never fails
    let lenient = config.with_decode_mode(DecodeMode::Lenient);
    assert!(decode_config(data, &lenient).is_ok());
});
