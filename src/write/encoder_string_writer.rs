use crate::config::Config;
use crate::encode::Encoder;
use std::io;

/// A `Write` implementation that base64-encodes data using the provided config and accumulates the
/// resulting base64 in memory, which is then exposed as a String via `into_inner()`.
///
/// # Examples
///
/// Buffer base64 in a new String:
///
/// ```
/// use std::io::Write;
///
/// let mut enc = b64stream::write::EncoderStringWriter::new(b64stream::STANDARD);
///
/// enc.write_all(b"asdf").unwrap();
///
/// // get the resulting String
/// let b64_string = enc.into_inner();
///
/// assert_eq!("YXNkZg==", &b64_string);
/// ```
///
/// Or, append to an existing String:
///
/// ```
/// use std::io::Write;
///
/// let mut buf = String::from("base64: ");
///
/// let mut enc = b64stream::write::EncoderStringWriter::from(buf, b64stream::STANDARD);
///
/// enc.write_all(b"asdf").unwrap();
///
/// // get the resulting String
/// buf = enc.into_inner();
///
/// assert_eq!("base64: YXNkZg==", &buf);
/// ```
///
/// # Performance
///
/// Because it has to buffer everything in memory, this is only suitable for data that fits in a
/// String. Use [crate::write::EncoderWriter] to stream into a file or socket instead.
#[derive(Debug)]
pub struct EncoderStringWriter {
    encoder: Encoder,
}

impl EncoderStringWriter {
    /// Create a EncoderStringWriter that will append to the provided String.
    pub fn from(str: String, config: Config) -> Self {
        EncoderStringWriter {
            encoder: Encoder::with_output(config, str),
        }
    }

    /// Create a EncoderStringWriter that will encode into a new String with the provided config.
    pub fn new(config: Config) -> Self {
        EncoderStringWriter::from(String::new(), config)
    }

    /// Encode all remaining buffered data, including any trailing incomplete input triples and
    /// associated padding.
    ///
    /// Returns the base64-encoded form of the accumulated written data.
    pub fn into_inner(self) -> String {
        self.encoder.finish()
    }
}

impl io::Write for EncoderStringWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.encoder.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
