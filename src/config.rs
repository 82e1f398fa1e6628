//! Provides [Config], which controls the alphabet, padding, line wrapping and decoding strictness
//! used by every encoder and decoder in the crate.

use crate::alphabet::{self, Alphabet};

/// Line ending inserted between lines of wrapped output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    LF,
    /// `\r\n`
    CRLF,
}

impl LineEnding {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            LineEnding::LF => "\n",
            LineEnding::CRLF => "\r\n",
        }
    }

    pub(crate) const fn len(self) -> usize {
        self.as_str().len()
    }
}

/// Whether encoded output is broken into lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineWrap {
    /// All output on a single line.
    NoWrap,
    /// Insert the line ending after every `width` symbols. No line ending follows the last line.
    ///
    /// A width of 0 behaves like [LineWrap::NoWrap].
    Wrap(usize, LineEnding),
}

/// How strictly base64 text is validated while decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMode {
    /// Bytes outside the alphabet are skipped just like whitespace, and a dangling 6-bit remainder
    /// is silently dropped. Decoding never fails.
    Lenient,
    /// ASCII whitespace is skipped, but any other byte outside the alphabet is an error, as is a
    /// dangling 6-bit remainder.
    Strict,
}

/// Contains configuration parameters for base64 encoding and decoding.
///
/// Built with const methods, so custom configs can live in a `const`:
///
/// ```
/// use b64stream::{alphabet, Config, DecodeMode};
///
/// const CUSTOM: Config = Config::new()
///     .with_alphabet(alphabet::URL_SAFE)
///     .with_encode_padding(false)
///     .with_decode_mode(DecodeMode::Strict);
///
/// assert_eq!("_-8", b64stream::encode_config([0xff_u8, 0xef], &CUSTOM));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    alphabet: Alphabet,
    encode_padding: bool,
    line_wrap: LineWrap,
    decode_mode: DecodeMode,
}

impl Config {
    /// Create a new config with the standard alphabet, padding, no line wrapping and lenient
    /// decoding.
    pub const fn new() -> Self {
        Config {
            alphabet: alphabet::STANDARD,
            encode_padding: true,
            line_wrap: LineWrap::NoWrap,
            decode_mode: DecodeMode::Lenient,
        }
    }

    /// Use a different alphabet for both encoding and decoding.
    pub const fn with_alphabet(self, alphabet: Alphabet) -> Self {
        Config { alphabet, ..self }
    }

    /// Create a new config based on `self` with an updated `padding` setting.
    ///
    /// If `padding` is `true`, encoding will append either 1 or 2 `=` padding characters as needed
    /// to produce an output whose length is a multiple of 4. Decoding always accepts (and stops at)
    /// padding regardless of this setting.
    pub const fn with_encode_padding(self, padding: bool) -> Self {
        Config {
            encode_padding: padding,
            ..self
        }
    }

    /// Create a new config based on `self` with an updated line wrapping setting.
    pub const fn with_line_wrap(self, line_wrap: LineWrap) -> Self {
        Config { line_wrap, ..self }
    }

    /// Create a new config based on `self` with an updated decode mode.
    pub const fn with_decode_mode(self, decode_mode: DecodeMode) -> Self {
        Config {
            decode_mode,
            ..self
        }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub const fn encode_padding(&self) -> bool {
        self.encode_padding
    }

    pub const fn line_wrap(&self) -> LineWrap {
        self.line_wrap
    }

    pub const fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// The effective line width, if output is wrapped.
    pub(crate) const fn wrap_width(&self) -> Option<(usize, LineEnding)> {
        match self.line_wrap {
            LineWrap::Wrap(width, ending) if width > 0 => Some((width, ending)),
            _ => None,
        }
    }
}

impl Default for Config {
    /// Delegates to [Config::new].
    fn default() -> Self {
        Config::new()
    }
}

/// Standard character set with padding.
pub const STANDARD: Config = Config::new();

/// Standard character set without padding.
pub const STANDARD_NO_PAD: Config = Config::new().with_encode_padding(false);

/// URL-safe character set with padding
pub const URL_SAFE: Config = Config::new().with_alphabet(alphabet::URL_SAFE);

/// URL-safe character set without padding
pub const URL_SAFE_NO_PAD: Config = URL_SAFE.with_encode_padding(false);

/// As per MIME: standard character set, padded, wrapped at 76 columns with CRLF.
pub const MIME: Config = Config::new().with_line_wrap(LineWrap::Wrap(76, LineEnding::CRLF));
