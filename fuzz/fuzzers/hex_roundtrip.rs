#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use b64stream::hex;

fuzz_target!(|data: &[u8]| {
    let encoded = hex::encode(data);
    assert_eq!(Ok(data.to_vec()), hex::decode(&encoded));
    assert_eq!(Ok(data.to_vec()), hex::decode(encoded.to_lowercase()));

    // arbitrary text either decodes or names a real offending byte
    if let Err(hex::HexError::InvalidDigit { offset, byte }) = hex::decode(data) {
        assert_eq!(data[offset], byte);
    }
});
