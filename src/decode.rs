use crate::alphabet::Symbol;
use crate::config::{Config, DecodeMode, STANDARD};
use std::{error, fmt, mem};

/// Bit offsets of the four sextets in the 24-bit group buffer, most significant first.
const SEXTET_SHIFTS: [u32; 4] = [18, 12, 6, 0];
/// Bit offsets of the three decoded octets in the 24-bit group buffer.
const OCTET_SHIFTS: [u32; 3] = [16, 8, 0];

/// Errors that can occur while decoding in [DecodeMode::Strict].
///
/// Lenient decoding, the default, never produces these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that is neither whitespace, padding nor part of the alphabet was found. The offset
    /// and offending byte are provided.
    InvalidByte(usize, u8),
    /// The input ended (or reached padding) with a single leftover symbol, which can't encode a
    /// whole byte.
    InvalidLength,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::InvalidByte(index, byte) => {
                write!(f, "Invalid byte {}, offset {}.", byte, index)
            }
            DecodeError::InvalidLength => {
                write!(f, "Encoded text cannot have a 6-bit remainder.")
            }
        }
    }
}

impl error::Error for DecodeError {}

///Decode base64 using the [STANDARD] config.
///
///Whitespace and any other bytes outside the alphabet are skipped, and decoding stops at the
///first `=`. A trailing 6-bit remainder, which can't make up a byte, is dropped.
///
///# Example
///
///```rust
///assert_eq!(b"Man".to_vec(), b64stream::decode("TW Fu\n"));
///assert_eq!(b"Man".to_vec(), b64stream::decode("TWFu====extra"));
///```
pub fn decode<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    // STANDARD decodes leniently, which cannot fail
    decode_config(input, &STANDARD).unwrap_or_default()
}

///Decode base64 using the provided config.
///
///# Errors
///
///Only configs using [DecodeMode::Strict] can fail.
///
///# Example
///
///```rust
///use b64stream::{DecodeError, DecodeMode, STANDARD};
///
///let strict = STANDARD.with_decode_mode(DecodeMode::Strict);
///assert_eq!(
///    Err(DecodeError::InvalidByte(2, b'*')),
///    b64stream::decode_config("TW*Fu", &strict)
///);
///```
pub fn decode_config<T: AsRef<[u8]>>(input: T, config: &Config) -> Result<Vec<u8>, DecodeError> {
    let mut buffer = Vec::new();
    decode_config_buf(input, config, &mut buffer).map(|_| buffer)
}

///Decode base64 using the provided config, appending the decoded bytes to `buffer`.
///
///On error, `buffer` is left as it was before the call.
///
///# Example
///
///```rust
///let mut buffer = b"raw: ".to_vec();
///b64stream::decode_config_buf("TWFu", &b64stream::STANDARD, &mut buffer).unwrap();
///assert_eq!(b"raw: Man".to_vec(), buffer);
///```
pub fn decode_config_buf<T: AsRef<[u8]>>(
    input: T,
    config: &Config,
    buffer: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    let input = input.as_ref();
    let starting_len = buffer.len();

    let mut decoder = Decoder::with_output(*config, mem::take(buffer));
    let result = decoder.update(input).and_then(|_| decoder.flush());
    *buffer = decoder.output;

    if result.is_err() {
        buffer.truncate(starting_len);
    }

    result
}

/// Returns a conservative estimate of the decoded size of `encoded_len` bytes of base64.
///
/// Skipped whitespace and early padding only ever make the real output smaller.
pub fn decoded_len_estimate(encoded_len: usize) -> usize {
    (encoded_len / 4 + 1) * 3
}

/// An incremental base64 decoder.
///
/// Text can be fed in arbitrary chunks via [Decoder::update]; the result is identical to decoding
/// the concatenation in one call. Up to three symbols are held back until a group of four is
/// complete.
///
/// The first padding byte halts the decoder: the partial group is flushed and every later byte,
/// in the same update or in later ones, is ignored.
///
/// # Examples
///
/// ```
/// let mut decoder = b64stream::Decoder::new();
/// decoder.update("TW").unwrap();
/// decoder.update("Fu TQ").unwrap();
/// decoder.update("==ignored").unwrap();
///
/// assert!(decoder.is_halted());
/// assert_eq!(b"ManM".to_vec(), decoder.finish().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Decoder {
    config: Config,
    /// Holds up to 4 sextets, the first at bits 18..24.
    buffer: u32,
    /// How many sextets are in `buffer`. Always 0 to 3 between calls.
    pending: usize,
    /// Set once padding has been seen.
    halted: bool,
    /// Input bytes examined so far, for error offsets.
    consumed: usize,
    output: Vec<u8>,
}

impl Decoder {
    /// Create a decoder with the [STANDARD] config.
    pub fn new() -> Decoder {
        Decoder::with_config(STANDARD)
    }

    /// Create a decoder with the provided config.
    pub fn with_config(config: Config) -> Decoder {
        Decoder::with_output(config, Vec::new())
    }

    fn with_output(config: Config, output: Vec<u8>) -> Decoder {
        Decoder {
            config,
            buffer: 0,
            pending: 0,
            halted: false,
            consumed: 0,
            output,
        }
    }

    /// Decode `input`, appending complete groups to the accumulated output.
    ///
    /// # Errors
    ///
    /// In [DecodeMode::Strict], returns [DecodeError::InvalidByte] for the first byte outside the
    /// alphabet that isn't ASCII whitespace, with its offset counted from the first byte ever
    /// passed to this decoder. Everything before it has been decoded; the offending byte is
    /// skipped. Reaching padding with a single leftover symbol returns
    /// [DecodeError::InvalidLength].
    pub fn update<T: AsRef<[u8]>>(&mut self, input: T) -> Result<(), DecodeError> {
        if self.halted {
            return Ok(());
        }

        let input = input.as_ref();
        self.output.reserve(decoded_len_estimate(input.len()));
        let strict = self.config.decode_mode() == DecodeMode::Strict;

        for (index, &byte) in input.iter().enumerate() {
            match self.config.alphabet().symbol(byte) {
                Symbol::Sextet(value) => {
                    self.buffer |= u32::from(value) << SEXTET_SHIFTS[self.pending];
                    self.pending += 1;

                    if self.pending == 4 {
                        self.push_octets(3);
                        self.buffer = 0;
                        self.pending = 0;
                    }
                }
                Symbol::Whitespace => {
                    if strict && !byte.is_ascii_whitespace() {
                        let offset = self.consumed + index;
                        self.consumed = offset + 1;
                        tracing::debug!(offset, byte, "rejected byte outside the alphabet");
                        return Err(DecodeError::InvalidByte(offset, byte));
                    }
                }
                Symbol::Padding => {
                    let offset = self.consumed + index;
                    self.consumed = offset + 1;
                    self.halted = true;
                    tracing::trace!(
                        offset,
                        ignored = input.len() - index - 1,
                        "padding reached, decoder halted"
                    );
                    return self.flush();
                }
            }
        }

        self.consumed += input.len();
        Ok(())
    }

    /// Take the bytes decoded so far, leaving the decoder ready for more input.
    pub fn drain(&mut self) -> Vec<u8> {
        mem::take(&mut self.output)
    }

    /// Decode any trailing partial group and return all bytes not already taken with
    /// [Decoder::drain].
    ///
    /// Two leftover symbols make one byte and three make two. A single leftover symbol is dropped,
    /// or is an error in [DecodeMode::Strict].
    pub fn finish(mut self) -> Result<Vec<u8>, DecodeError> {
        self.flush()?;
        Ok(self.output)
    }

    /// Whether padding has been seen. A halted decoder ignores all further input.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// How many symbols are buffered waiting for a complete group.
    pub fn pending_len(&self) -> usize {
        self.pending
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit the bytes fully covered by the pending symbols and reset the group.
    fn flush(&mut self) -> Result<(), DecodeError> {
        let pending = mem::replace(&mut self.pending, 0);
        match pending {
            0 => {}
            1 => {
                if self.config.decode_mode() == DecodeMode::Strict {
                    self.buffer = 0;
                    tracing::debug!("rejected a dangling 6-bit remainder");
                    return Err(DecodeError::InvalidLength);
                }
            }
            2 => self.push_octets(1),
            3 => self.push_octets(2),
            _ => unreachable!("a complete group is always emitted immediately"),
        }

        self.buffer = 0;
        Ok(())
    }

    fn push_octets(&mut self, count: usize) {
        for &shift in &OCTET_SHIFTS[..count] {
            // `as` truncates to the selected octet
            self.output.push((self.buffer >> shift) as u8);
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::URL_SAFE;
    use crate::encode::encode_config;
    use crate::tests::random_config;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn strict() -> Config {
        STANDARD.with_decode_mode(DecodeMode::Strict)
    }

    #[test]
    fn decode_known_vectors() {
        assert_eq!(b"".to_vec(), decode(""));
        assert_eq!(b"M".to_vec(), decode("TQ=="));
        assert_eq!(b"Ma".to_vec(), decode("TWE="));
        assert_eq!(b"Man".to_vec(), decode("TWFu"));
        assert_eq!(b"foobar".to_vec(), decode("Zm9vYmFy"));
    }

    #[test]
    fn decode_without_padding_flushes_partial_group() {
        assert_eq!(b"M".to_vec(), decode("TQ"));
        assert_eq!(b"Ma".to_vec(), decode("TWE"));
        assert_eq!(b"ManM".to_vec(), decode("TWFuTQ"));
    }

    #[test]
    fn decode_single_leftover_symbol_is_dropped() {
        assert_eq!(b"".to_vec(), decode("T"));
        assert_eq!(b"Man".to_vec(), decode("TWFuT"));
        assert_eq!(b"Man".to_vec(), decode("TWFuT="));
    }

    #[test]
    fn decode_skips_whitespace_and_garbage() {
        assert_eq!(b"Man".to_vec(), decode("TW Fu\n"));
        assert_eq!(b"Man".to_vec(), decode("\r\n\tT W\x0bF u "));
        assert_eq!(b"Man".to_vec(), decode("T*W!F\u{e9}u-_"));
    }

    #[test]
    fn decode_stops_at_first_padding() {
        assert_eq!(decode("TWFu"), decode("TWFu====extra"));
        assert_eq!(b"M".to_vec(), decode("TQ=TWFu"));
        assert_eq!(b"".to_vec(), decode("=TWFu"));
        assert_eq!(b"".to_vec(), decode("===="));
    }

    #[test]
    fn decode_url_safe_symbols() {
        assert_eq!(vec![0xff, 0xef], decode_config("_-8=", &URL_SAFE).unwrap());
        // '+' and '/' are not part of the url safe alphabet
        assert_eq!(Vec::<u8>::new(), decode_config("+/", &URL_SAFE).unwrap());
    }

    #[test]
    fn strict_rejects_garbage_with_offset() {
        assert_eq!(
            Err(DecodeError::InvalidByte(3, b'*')),
            decode_config("TW *Fu", &strict())
        );
        assert_eq!(b"Man".to_vec(), decode_config("TW\r\nFu ", &strict()).unwrap());
    }

    #[test]
    fn strict_ignores_garbage_after_padding() {
        assert_eq!(b"M".to_vec(), decode_config("TQ==*!", &strict()).unwrap());
    }

    #[test]
    fn strict_rejects_dangling_symbol() {
        assert_eq!(Err(DecodeError::InvalidLength), decode_config("TWFuT", &strict()));
        assert_eq!(Err(DecodeError::InvalidLength), decode_config("T=", &strict()));
        assert_eq!(b"".to_vec(), decode_config("=", &strict()).unwrap());
    }

    #[test]
    fn strict_offsets_span_updates() {
        let mut decoder = Decoder::with_config(strict());
        decoder.update("TWFu").unwrap();
        decoder.update(" ").unwrap();
        assert_eq!(Err(DecodeError::InvalidByte(6, b'.')), decoder.update("T."));
    }

    #[test]
    fn decode_config_buf_restores_buffer_on_error() {
        let mut buffer = b"keep".to_vec();
        assert_eq!(
            Err(DecodeError::InvalidLength),
            decode_config_buf("TWFuTWFuT", &strict(), &mut buffer)
        );
        assert_eq!(b"keep".to_vec(), buffer);
    }

    #[test]
    fn halted_decoder_ignores_later_updates() {
        let mut decoder = Decoder::new();
        decoder.update("TWE=").unwrap();
        assert!(decoder.is_halted());
        assert_eq!(0, decoder.pending_len());
        assert_eq!(b"Ma".to_vec(), decoder.drain());

        decoder.update("TWFu").unwrap();
        assert_eq!(Vec::<u8>::new(), decoder.finish().unwrap());
    }

    #[test]
    fn drain_holds_back_partial_group() {
        let mut decoder = Decoder::new();
        decoder.update("TWF").unwrap();
        assert_eq!(3, decoder.pending_len());
        assert_eq!(Vec::<u8>::new(), decoder.drain());

        decoder.update("uTW").unwrap();
        assert_eq!(b"Man".to_vec(), decoder.drain());
        assert_eq!(b"M".to_vec(), decoder.finish().unwrap());
    }

    #[test]
    fn decoded_len_estimate_is_upper_bound() {
        let mut rng = SmallRng::seed_from_u64(7);

        for len in 0..200 {
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let encoded = encode_config(&input, &STANDARD);
            assert!(decoded_len_estimate(encoded.len()) >= input.len());
        }
    }

    #[test]
    fn every_split_matches_single_update() {
        let mut rng = SmallRng::seed_from_u64(0xdec0de);

        for _ in 0..200 {
            let len = rng.gen_range(0..60);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let config = random_config(&mut rng);
            let encoded = encode_config(&input, &config);

            for split in 0..=encoded.len() {
                let mut decoder = Decoder::with_config(config);
                decoder.update(&encoded.as_bytes()[..split]).unwrap();
                let mut decoded = decoder.drain();
                decoder.update(&encoded.as_bytes()[split..]).unwrap();
                decoded.extend(decoder.finish().unwrap());

                assert_eq!(input, decoded);
            }
        }
    }
}
