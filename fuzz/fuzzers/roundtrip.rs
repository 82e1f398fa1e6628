#![no_main]
#[macro_use] extern crate libfuzzer_sys;

fuzz_target!(|data: &[u8]| {
    let encoded = b64stream::encode(data);
    let decoded = b64stream::decode(&encoded);
    assert_eq!(data, decoded.as_slice());
});
