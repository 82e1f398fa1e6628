#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use b64stream::*;

mod utils;

fuzz_target!(|data: &[u8]| {
    let config = utils::random_config(data);

    let encoded = encode_config(data, &config);
    assert_eq!(Some(encoded.len()), encoded_len(data.len(), &config));
    let decoded = decode_config(&encoded, &config).unwrap();
    assert_eq!(data, decoded.as_slice());
});
