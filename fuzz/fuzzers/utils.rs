use b64stream::{alphabet, Config, DecodeMode, LineEnding, LineWrap};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use sha2::{Digest, Sha256};

pub fn random_config(data: &[u8]) -> Config {
    // use sha256 of data as rng seed so it's repeatable
    let sha = Sha256::digest(data);

    let mut seed: [u8; 16] = [0; 16];
    seed.copy_from_slice(&sha[0..16]);

    let mut rng = Pcg32::from_seed(seed);

    let alphabet = if rng.gen() {
        alphabet::URL_SAFE
    } else {
        alphabet::STANDARD
    };

    let line_wrap = if rng.gen() {
        let ending = if rng.gen() {
            LineEnding::CRLF
        } else {
            LineEnding::LF
        };
        LineWrap::Wrap(rng.gen_range(0, 100), ending)
    } else {
        LineWrap::NoWrap
    };

    let decode_mode = if rng.gen() {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };

    Config::new()
        .with_alphabet(alphabet)
        .with_encode_padding(rng.gen())
        .with_line_wrap(line_wrap)
        .with_decode_mode(decode_mode)
}
