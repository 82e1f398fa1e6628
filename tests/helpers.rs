use b64stream::*;

pub fn compare_decode(expected: &str, target: &str) {
    assert_eq!(
        expected,
        String::from_utf8(decode(target)).unwrap()
    );
    assert_eq!(
        expected,
        String::from_utf8(decode(target.as_bytes())).unwrap()
    );

    let strict = STANDARD.with_decode_mode(DecodeMode::Strict);
    assert_eq!(
        expected,
        String::from_utf8(decode_config(target, &strict).unwrap()).unwrap()
    );
}
