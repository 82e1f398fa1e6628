#![no_main]
#[macro_use] extern crate libfuzzer_sys;

use b64stream::*;

mod utils;

fuzz_target!(|data: &[u8]| {
    let config = utils::random_config(data);
    let expected = encode_config(data, &config);

    // split points taken from the data itself
    let step = data.first().map_or(1, |&b| usize::from(b % 7) + 1);

    let mut encoder = Encoder::with_config(config);
    for chunk in data.chunks(step) {
        encoder.update(chunk);
    }
    let encoded = encoder.finish();
    assert_eq!(expected, encoded);

    let mut decoder = Decoder::with_config(config);
    for chunk in encoded.as_bytes().chunks(step + 1) {
        decoder.update(chunk).unwrap();
    }
    assert_eq!(data, decoder.finish().unwrap().as_slice());
});
