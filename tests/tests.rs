use rand::{rngs::SmallRng, Rng, SeedableRng};

use b64stream::display::Base64Display;
use b64stream::*;

// generate random contents of the specified length and test encode/decode roundtrip
fn roundtrip_random(
    byte_buf: &mut Vec<u8>,
    str_buf: &mut String,
    config: &Config,
    byte_len: usize,
    approx_values_per_byte: u8,
    max_rounds: u64,
) {
    // let the short ones be short but don't let it get too crazy large
    let num_rounds = calculate_number_of_rounds(byte_len, approx_values_per_byte, max_rounds);
    let mut r = SmallRng::seed_from_u64(byte_len as u64);
    let mut decode_buf = Vec::new();

    for _ in 0..num_rounds {
        byte_buf.clear();
        str_buf.clear();
        decode_buf.clear();
        while byte_buf.len() < byte_len {
            byte_buf.push(r.gen::<u8>());
        }

        encode_config_buf(&byte_buf[..], config, str_buf);
        decode_config_buf(str_buf.as_str(), config, &mut decode_buf).unwrap();

        assert_eq!(&byte_buf[..], &decode_buf[..]);
    }
}

fn calculate_number_of_rounds(byte_len: usize, approx_values_per_byte: u8, max: u64) -> u64 {
    // don't overflow
    let mut prod = approx_values_per_byte as u64;

    for _ in 0..byte_len {
        if prod > max {
            return max;
        }

        prod = prod.saturating_mul(prod);
    }

    prod
}

fn all_configs() -> Vec<Config> {
    let strict = |c: Config| c.with_decode_mode(DecodeMode::Strict);
    vec![
        STANDARD,
        STANDARD_NO_PAD,
        URL_SAFE,
        URL_SAFE_NO_PAD,
        MIME,
        strict(STANDARD_NO_PAD),
        strict(URL_SAFE),
        strict(MIME.with_line_wrap(LineWrap::Wrap(5, LineEnding::LF))),
    ]
}

#[test]
fn roundtrip_random_short() {
    let mut byte_buf: Vec<u8> = Vec::new();
    let mut str_buf = String::new();

    for config in all_configs() {
        for input_len in 0..40 {
            roundtrip_random(&mut byte_buf, &mut str_buf, &config, input_len, 4, 1000);
        }
    }
}

#[test]
fn roundtrip_random_with_fast_loop() {
    let mut byte_buf: Vec<u8> = Vec::new();
    let mut str_buf = String::new();

    for config in all_configs() {
        for input_len in 40..100 {
            roundtrip_random(&mut byte_buf, &mut str_buf, &config, input_len, 4, 100);
        }
    }
}

#[test]
fn encoded_length_and_padding_laws() {
    let mut rng = SmallRng::seed_from_u64(0x1a5);

    for len in 0..200 {
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let padded = encode(&bytes);
        assert_eq!((len + 2) / 3 * 4, padded.len());
        assert_eq!(Some(padded.len()), encoded_len(len, &STANDARD));
        let padding = padded.bytes().rev().take_while(|&b| b == b'=').count();
        assert_eq!((3 - len % 3) % 3, padding);

        let unpadded = encode_config(&bytes, &STANDARD_NO_PAD);
        assert_eq!(padded.trim_end_matches('='), unpadded);
        assert_eq!(Some(unpadded.len()), encoded_len(len, &STANDARD_NO_PAD));

        let wrapped = encode_config(&bytes, &MIME);
        assert_eq!(Some(wrapped.len()), encoded_len(len, &MIME));
        assert!(wrapped.split("\r\n").all(|line| line.len() <= 76));
        assert!(!wrapped.ends_with("\r\n"));
        assert_eq!(padded, wrapped.replace("\r\n", ""));
    }
}

#[test]
fn known_vectors() {
    assert_eq!("TWFu", encode(b"Man"));
    assert_eq!("TWE=", encode(b"Ma"));
    assert_eq!("TQ==", encode(b"M"));
    assert_eq!("TWE", encode_config(b"Ma", &STANDARD_NO_PAD));

    assert_eq!(b"Man".to_vec(), decode("TWFu"));
    assert_eq!(b"Ma".to_vec(), decode("TWE="));
    assert_eq!(b"M".to_vec(), decode("TQ=="));
}

#[test]
fn incremental_matches_one_shot() {
    let mut rng = SmallRng::seed_from_u64(0x5717);

    for _ in 0..500 {
        let len = rng.gen_range(0..300);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let config = all_configs()[rng.gen_range(0..all_configs().len())];
        let expected = encode_config(&bytes, &config);

        let mut encoder = Encoder::with_config(config);
        let mut encoded = String::new();
        let mut rest = &bytes[..];
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(rng.gen_range(0..=rest.len()));
            encoder.update(chunk);
            if rng.gen() {
                encoded.push_str(&encoder.drain());
            }
            rest = tail;
        }
        encoded.push_str(&encoder.finish());
        assert_eq!(expected, encoded);

        let mut decoder = Decoder::with_config(config);
        let mut decoded = Vec::new();
        let mut rest = encoded.as_bytes();
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(rng.gen_range(0..=rest.len()));
            decoder.update(chunk).unwrap();
            if rng.gen() {
                decoded.extend(decoder.drain());
            }
            rest = tail;
        }
        decoded.extend(decoder.finish().unwrap());
        assert_eq!(bytes, decoded);
    }
}

#[test]
fn display_wrapper_matches_normal_encode() {
    let mut bytes = Vec::<u8>::with_capacity(256);

    for i in 0..255 {
        bytes.push(i);
    }
    bytes.push(255);

    assert_eq!(
        encode(&bytes),
        format!("{}", Base64Display::with_config(&bytes, STANDARD))
    );
}

#[test]
fn hex_roundtrip_with_base64() {
    let bytes = decode("3q2+7w==");
    assert_eq!("DEADBEEF", hex::encode(&bytes));
    assert_eq!("DE AD BE EF", hex::encode_with_separator(&bytes, ' '));
    assert_eq!(Ok(bytes), hex::decode("deadbeef"));
}

#[test]
fn because_we_can() {
    compare_roundtrip("alice", "YWxpY2U=");
    compare_roundtrip("YWxpY2U=", "WVd4cFkyVT0=");
}

fn compare_roundtrip(plain: &str, encoded: &str) {
    assert_eq!(encoded, encode(plain));
    assert_eq!(plain.as_bytes(), &decode(encoded)[..]);
    assert_eq!(plain.as_bytes(), &decode(decode(encode(encode(plain))))[..]);
}
