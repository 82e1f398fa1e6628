use crate::alphabet::PAD_BYTE;
use crate::config::{Config, STANDARD};
use std::mem;

/// Bit offsets of the four sextets in the 24-bit group buffer, most significant first.
const SEXTET_SHIFTS: [u32; 4] = [18, 12, 6, 0];

///Encode arbitrary octets as base64 using the [STANDARD] config.
///Returns a String.
///
///# Example
///
///```rust
///let b64 = b64stream::encode(b"hello world");
///assert_eq!("aGVsbG8gd29ybGQ=", b64);
///```
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    encode_config(input, &STANDARD)
}

///Encode arbitrary octets as base64.
///Returns a String.
///
///# Example
///
///```rust
///let b64_url = b64stream::encode_config(b"hello internet~", &b64stream::URL_SAFE);
///assert_eq!("aGVsbG8gaW50ZXJuZXR-", b64_url);
///```
pub fn encode_config<T: AsRef<[u8]>>(input: T, config: &Config) -> String {
    let input = input.as_ref();
    let mut buf = String::new();
    encode_config_buf(input, config, &mut buf);
    buf
}

///Encode arbitrary octets as base64.
///Writes into the supplied String, which may have preexisting contents.
///
///# Example
///
///```rust
///let mut buf = String::from("b64: ");
///b64stream::encode_config_buf(b"Man", &b64stream::STANDARD, &mut buf);
///assert_eq!("b64: TWFu", buf);
///```
pub fn encode_config_buf<T: AsRef<[u8]>>(input: T, config: &Config, buf: &mut String) {
    let input = input.as_ref();
    if let Some(len) = encoded_len(input.len(), config) {
        buf.reserve(len);
    }

    let mut encoder = Encoder::with_output(*config, mem::take(buf));
    encoder.update(input);
    *buf = encoder.finish();
}

/// Calculate the base64 encoded length for a given input length, including padding and line
/// endings as configured.
///
/// Returns `None` if the encoded length can't be represented in `usize`.
pub fn encoded_len(bytes_len: usize, config: &Config) -> Option<usize> {
    let rem = bytes_len % 3;

    let complete_input_chunks = bytes_len / 3;
    let complete_chunk_output = complete_input_chunks.checked_mul(4)?;

    let symbols_len = if rem > 0 {
        if config.encode_padding() {
            complete_chunk_output.checked_add(4)?
        } else {
            // 1 byte => 2 symbols, 2 bytes => 3 symbols
            complete_chunk_output.checked_add(rem + 1)?
        }
    } else {
        complete_chunk_output
    };

    match config.wrap_width() {
        Some((width, ending)) if symbols_len > 0 => {
            let line_breaks = (symbols_len - 1) / width;
            line_breaks
                .checked_mul(ending.len())?
                .checked_add(symbols_len)
        }
        _ => Some(symbols_len),
    }
}

/// An incremental base64 encoder.
///
/// Input can be fed in arbitrary chunks via [Encoder::update]; the result is identical to
/// encoding the concatenation in one call. Up to two trailing bytes are held back until the next
/// update completes their group, or until [Encoder::finish] pads them out.
///
/// # Examples
///
/// ```
/// let mut encoder = b64stream::Encoder::new();
/// encoder.update(b"M");
/// encoder.update(b"an");
/// encoder.update(b"M");
///
/// assert_eq!("TWFuTQ==", encoder.finish());
/// ```
#[derive(Clone, Debug)]
pub struct Encoder {
    config: Config,
    /// Holds up to 3 octets, the first at bits 16..24.
    buffer: u32,
    /// How many octets are in `buffer`. Always 0, 1 or 2 between calls.
    pending: usize,
    /// Symbols written on the current line, when wrapping.
    line_len: usize,
    output: String,
}

impl Encoder {
    /// Create an encoder with the [STANDARD] config.
    pub fn new() -> Encoder {
        Encoder::with_config(STANDARD)
    }

    /// Create an encoder with the provided config.
    pub fn with_config(config: Config) -> Encoder {
        Encoder::with_output(config, String::new())
    }

    /// Encoded text is appended to `output`. Line wrapping starts counting from zero regardless of
    /// what `output` already contains.
    pub(crate) fn with_output(config: Config, output: String) -> Encoder {
        Encoder {
            config,
            buffer: 0,
            pending: 0,
            line_len: 0,
            output,
        }
    }

    /// Encode `input`, appending complete groups to the accumulated output.
    pub fn update<T: AsRef<[u8]>>(&mut self, input: T) {
        let input = input.as_ref();
        self.output.reserve((self.pending + input.len()) / 3 * 4);

        for &byte in input {
            self.buffer |= u32::from(byte) << (16 - 8 * self.pending);
            self.pending += 1;

            if self.pending == 3 {
                self.push_symbols(4);
                self.buffer = 0;
                self.pending = 0;
            }
        }
    }

    /// Take the text encoded so far, leaving the encoder ready for more input.
    ///
    /// Pending bytes of an incomplete group stay buffered; they are not reflected in the returned
    /// text until a later update or [Encoder::finish].
    pub fn drain(&mut self) -> String {
        mem::take(&mut self.output)
    }

    /// Encode any trailing incomplete group, adding padding if configured, and return all text not
    /// already taken with [Encoder::drain].
    pub fn finish(mut self) -> String {
        match self.pending {
            0 => {}
            1 => {
                self.push_symbols(2);
                self.push_padding(2);
            }
            2 => {
                self.push_symbols(3);
                self.push_padding(1);
            }
            _ => unreachable!("a complete group is always emitted immediately"),
        }

        self.output
    }

    /// How many input bytes are buffered waiting for a complete group.
    pub fn pending_len(&self) -> usize {
        self.pending
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn push_symbols(&mut self, count: usize) {
        for &shift in &SEXTET_SHIFTS[..count] {
            let symbol = self.config.alphabet().encode_sextet(self.buffer >> shift);
            self.push_byte(symbol);
        }
    }

    fn push_padding(&mut self, count: usize) {
        if self.config.encode_padding() {
            for _ in 0..count {
                self.push_byte(PAD_BYTE);
            }
        }
    }

    fn push_byte(&mut self, byte: u8) {
        if let Some((width, ending)) = self.config.wrap_width() {
            if self.line_len == width {
                self.output.push_str(ending.as_str());
                self.line_len = 0;
            }
            self.line_len += 1;
        }

        // alphabets are validated to be printable ascii
        debug_assert!(byte.is_ascii());
        self.output.push(char::from(byte));
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}
