use crate::config::Config;
use crate::decode::{DecodeError, Decoder};
use std::{cmp, fmt, io};

pub(crate) const BUF_SIZE: usize = 1024;

/// A `Read` implementation that decodes base64 data read from an underlying reader.
///
/// Decoding follows the configured [crate::DecodeMode]: whitespace is skipped, and once padding
/// is reached the underlying reader is not read from any further.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use std::io::Cursor;
///
/// // use a cursor as the simplest possible `Read` -- in real code this is probably a file, etc.
/// let mut wrapped_reader = Cursor::new(b"YXNk\nZg==");
/// let mut decoder = b64stream::read::DecoderReader::new(
///     &mut wrapped_reader, b64stream::STANDARD);
///
/// // handle errors as you normally would
/// let mut result = Vec::new();
/// decoder.read_to_end(&mut result).unwrap();
///
/// assert_eq!(b"asdf", &result[..]);
/// ```
pub struct DecoderReader<R: io::Read> {
    /// `None` once the final partial group has been decoded.
    decoder: Option<Decoder>,
    /// Where b64 data is read from
    inner: R,

    b64_buffer: [u8; BUF_SIZE],
    /// Decoded bytes not yet handed out.
    decoded: Vec<u8>,
    /// index of start of undelivered data in `decoded`
    decoded_offset: usize,
}

impl<R: io::Read> fmt::Debug for DecoderReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DecoderReader")
            .field("finished", &self.decoder.is_none())
            .field("decoded_len", &self.decoded.len())
            .field("decoded_offset", &self.decoded_offset)
            .finish()
    }
}

impl<R: io::Read> DecoderReader<R> {
    /// Create a new decoder that will read from the provided reader `r`.
    pub fn new(r: R, config: Config) -> Self {
        DecoderReader {
            decoder: Some(Decoder::with_config(config)),
            inner: r,
            b64_buffer: [0; BUF_SIZE],
            decoded: Vec::new(),
            decoded_offset: 0,
        }
    }

    /// Unwraps this `DecoderReader`, returning the base reader which it reads base64 encoded
    /// input from.
    ///
    /// Because `DecoderReader` performs internal buffering, the state of the inner reader is
    /// unspecified. This function is mainly provided because the inner reader type may provide
    /// additional functionality beyond the `Read` implementation which may still be useful.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read and decode until there is something to deliver or the input is exhausted.
    fn fill_decoded(&mut self) -> io::Result<()> {
        while self.decoded_offset == self.decoded.len() {
            let decoder = match self.decoder.as_mut() {
                Some(decoder) => decoder,
                None => return Ok(()),
            };

            let input_done = if decoder.is_halted() {
                true
            } else {
                let read_len = match self.inner.read(&mut self.b64_buffer[..]) {
                    Ok(len) => len,
                    Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                    Err(error) => return Err(error),
                };

                if read_len > 0 {
                    decoder
                        .update(&self.b64_buffer[..read_len])
                        .map_err(invalid_data)?;
                    self.decoded = decoder.drain();
                    self.decoded_offset = 0;
                }

                read_len == 0
            };

            if input_done {
                if let Some(decoder) = self.decoder.take() {
                    self.decoded = decoder.finish().map_err(invalid_data)?;
                    self.decoded_offset = 0;
                }
            }
        }

        Ok(())
    }
}

fn invalid_data(error: DecodeError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, error)
}

impl<R: io::Read> io::Read for DecoderReader<R> {
    /// Decode input from the wrapped reader.
    ///
    /// Under non-error circumstances, this returns `Ok` with the value being the number of bytes
    /// written in `buf`.
    ///
    /// Where possible, this function buffers base64 to minimize the number of read() calls to the
    /// delegate reader.
    ///
    /// # Errors
    ///
    /// Any errors emitted by the delegate reader are returned. Decoding errors, which only occur in
    /// [crate::DecodeMode::Strict], will have `io::ErrorKind::InvalidData`; the reader should not
    /// be used after one.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.fill_decoded()?;

        let available = &self.decoded[self.decoded_offset..];
        let copy_len = cmp::min(available.len(), buf.len());
        buf[..copy_len].copy_from_slice(&available[..copy_len]);
        self.decoded_offset += copy_len;

        Ok(copy_len)
    }
}
