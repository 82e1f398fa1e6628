use crate::config::Config;
use crate::encode::Encoder;
use std::{fmt, io};

/// A `Write` implementation that base64 encodes data before delegating to the wrapped writer.
///
/// Because base64 has special handling for the end of the input data (padding, etc), there's a
/// `finish()` method on this type that encodes any leftover input bytes and adds padding if
/// appropriate. It's called automatically when deallocated (see the `Drop` implementation), but
/// any error that occurs when invoking the underlying writer will be suppressed. If you want to
/// handle such errors, call `finish()` yourself.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// // use a vec as the simplest possible `Write` -- in real code this is probably a file, etc.
/// let mut enc = b64stream::write::EncoderWriter::new(Vec::new(), b64stream::STANDARD);
///
/// // handle errors as you normally would
/// enc.write_all(b"asdf").unwrap();
///
/// // could leave this out to be called by Drop, if you don't care
/// // about handling errors or getting the delegate writer back
/// let delegate = enc.finish().unwrap();
///
/// // base64 was written to the writer
/// assert_eq!(b"YXNkZg==", &delegate[..]);
/// ```
///
/// # Panics
///
/// Calling `write()` (or related methods) or `finish()` after `finish()` has completed without
/// error is invalid and will panic.
///
/// # Errors
///
/// Base64 encoding itself does not generate errors, but errors from the wrapped writer will be
/// returned as per the contract of `Write`. Encoded text the delegate has not yet accepted is kept
/// and retried before any new input is taken.
pub struct EncoderWriter<W: io::Write> {
    /// `None` once the trailing group and padding have been produced.
    encoder: Option<Encoder>,
    /// Where encoded data is written to. It's an Option as it's None immediately before Drop is
    /// called so that finish() can return the underlying writer. None implies that finish() has
    /// been called successfully.
    delegate: Option<W>,
    /// Encoded text not yet accepted by the delegate.
    output: Vec<u8>,
    /// How much of `output` has already been written.
    output_written: usize,
    /// True iff we're in the middle of writing to the delegate, so that a panicking delegate
    /// isn't called again from Drop.
    panicked: bool,
}

impl<W: io::Write> fmt::Debug for EncoderWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "pending_len:{:?} output_len:{:?} output_written:{:?}",
            self.encoder.as_ref().map(Encoder::pending_len),
            self.output.len(),
            self.output_written
        )
    }
}

impl<W: io::Write> EncoderWriter<W> {
    /// Create a new encoder that will write to the provided delegate writer.
    pub fn new(delegate: W, config: Config) -> EncoderWriter<W> {
        EncoderWriter {
            encoder: Some(Encoder::with_config(config)),
            delegate: Some(delegate),
            output: Vec::new(),
            output_written: 0,
            panicked: false,
        }
    }

    /// Encode all remaining buffered data and write it, including any trailing incomplete input
    /// triples and associated padding.
    ///
    /// Once this succeeds, no further writes or calls to this method are allowed.
    ///
    /// This may write to the delegate writer multiple times if the delegate writer does not accept
    /// all input provided to its `write` each invocation.
    ///
    /// If you don't care about error handling, it is not necessary to call this function, as the
    /// equivalent finalization is done by the Drop impl.
    ///
    /// Returns the writer that this was constructed around.
    ///
    /// # Errors
    ///
    /// The first error that is not of `ErrorKind::Interrupted` will be returned.
    pub fn finish(&mut self) -> io::Result<W> {
        // If we could consume self in finish(), we wouldn't have to worry about this case, but
        // finish() is retryable in the face of I/O errors, so we can't consume here.
        if self.delegate.is_none() {
            panic!("Encoder has already had finish() called");
        };

        self.write_final()?;

        match self.delegate.take() {
            Some(delegate) => Ok(delegate),
            None => unreachable!("delegate presence checked above"),
        }
    }

    /// Encode the trailing group, if not done already, and write out everything buffered.
    fn write_final(&mut self) -> io::Result<()> {
        if let Some(encoder) = self.encoder.take() {
            let tail = encoder.finish();
            tracing::trace!(tail_len = tail.len(), "encoder writer finished");
            self.output.extend_from_slice(tail.as_bytes());
        }

        self.write_output()
    }

    /// Write all buffered output to the delegate, retrying on `Interrupted`.
    fn write_output(&mut self) -> io::Result<()> {
        let delegate = match self.delegate.as_mut() {
            Some(delegate) => delegate,
            None => return Ok(()),
        };

        while self.output_written < self.output.len() {
            self.panicked = true;
            let res = delegate.write(&self.output[self.output_written..]);
            self.panicked = false;

            match res {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write encoded data",
                    ))
                }
                Ok(written) => self.output_written += written,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }

        self.output.clear();
        self.output_written = 0;
        Ok(())
    }
}

impl<W: io::Write> io::Write for EncoderWriter<W> {
    /// Encode input and then write to the delegate writer.
    ///
    /// Under non-error circumstances, this returns `Ok` with the value being the number of bytes
    /// of `input` consumed, which is always all of it. Up to 2 bytes may be buffered internally
    /// until enough input arrives to complete a group.
    ///
    /// # Errors
    ///
    /// Errors from the delegate writer while writing previously encoded output are returned
    /// before any of `input` is consumed.
    fn write(&mut self, input: &[u8]) -> io::Result<usize> {
        // don't take new input until the delegate has caught up
        self.write_output()?;

        match self.encoder.as_mut() {
            Some(encoder) if self.delegate.is_some() => {
                encoder.update(input);
                self.output = encoder.drain().into_bytes();
            }
            _ => panic!("Cannot write more after calling finish()"),
        }

        // Input is consumed at this point. If the delegate fails, the output stays buffered and
        // the error surfaces on the next call.
        let _ = self.write_output();
        Ok(input.len())
    }

    /// Because this is usually treated as OK to call multiple times, it will *not* flush any
    /// incomplete chunks of input or write padding.
    fn flush(&mut self) -> io::Result<()> {
        self.write_output()?;

        match self.delegate.as_mut() {
            Some(delegate) => delegate.flush(),
            None => Ok(()),
        }
    }
}

impl<W: io::Write> Drop for EncoderWriter<W> {
    fn drop(&mut self) {
        if !self.panicked {
            // like `BufWriter`, ignore errors during drop
            let _ = self.write_final();
        }
    }
}
