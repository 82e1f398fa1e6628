//! Provides [Alphabet], the byte classification used when decoding, and constants for alphabets
//! commonly used in the wild.

use std::{error, fmt};

const ALPHABET_SIZE: usize = 64;

/// The byte used for padding. Never part of an alphabet.
pub(crate) const PAD_BYTE: u8 = b'=';

/// What one byte of base64 text means to a decoder.
///
/// Every possible byte value maps to exactly one of these, so lookups never need an in-band
/// "invalid" marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// A symbol of the alphabet, carrying its 6-bit value.
    Sextet(u8),
    /// Whitespace, or any other byte that is not part of the alphabet.
    Whitespace,
    /// The `=` padding byte.
    Padding,
}

/// An alphabet defines the 64 ASCII characters (symbols) used for base64.
///
/// Common alphabets are provided as constants, and custom alphabets
/// can be made via [Alphabet::new].
///
/// ```
/// let custom = b64stream::alphabet::Alphabet::new(
///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
/// )
/// .unwrap();
///
/// let config = b64stream::Config::new().with_alphabet(custom);
/// assert_eq!("TWFu", b64stream::encode_config(b"Man", &config));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_SIZE],
    decode_table: [Symbol; 256],
}

impl Alphabet {
    /// Performs no checks so that it can be const.
    /// Used only for known-valid strings.
    const fn from_str_unchecked(alphabet: &str) -> Self {
        let mut symbols = [0_u8; ALPHABET_SIZE];
        let source_bytes = alphabet.as_bytes();

        // a way to copy that's allowed in const fn
        let mut index = 0;
        while index < ALPHABET_SIZE {
            symbols[index] = source_bytes[index];
            index += 1;
        }

        let mut decode_table = [Symbol::Whitespace; 256];
        decode_table[PAD_BYTE as usize] = Symbol::Padding;

        let mut index = 0;
        while index < ALPHABET_SIZE {
            decode_table[symbols[index] as usize] = Symbol::Sextet(index as u8);
            index += 1;
        }

        Alphabet {
            symbols,
            decode_table,
        }
    }

    /// Create an `Alphabet` from a string of 64 unique printable ASCII bytes.
    ///
    /// The `=` byte is not allowed as it is used for padding.
    pub const fn new(alphabet: &str) -> Result<Self, ParseAlphabetError> {
        let bytes = alphabet.as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            return Err(ParseAlphabetError::InvalidLength);
        }

        {
            let mut index = 0;
            while index < ALPHABET_SIZE {
                let byte = bytes[index];

                // must be ascii printable. 127 (DEL) is commonly considered printable
                // for some reason but clearly unsuitable for base64.
                if !(byte >= 32_u8 && byte <= 126_u8) {
                    return Err(ParseAlphabetError::UnprintableByte(byte));
                }
                // = is assumed to be padding, so cannot be used as a symbol
                if byte == PAD_BYTE {
                    return Err(ParseAlphabetError::ReservedByte(byte));
                }

                // Check for duplicates while staying const (and therefore no hashing or sorting).
                let mut probe_index = 0;
                while probe_index < ALPHABET_SIZE {
                    if probe_index != index && byte == bytes[probe_index] {
                        return Err(ParseAlphabetError::DuplicatedByte(byte));
                    }
                    probe_index += 1;
                }

                index += 1;
            }
        }

        Ok(Self::from_str_unchecked(alphabet))
    }

    /// Classify one byte of base64 text.
    ///
    /// Bytes outside the alphabet are reported as [Symbol::Whitespace] so that lenient decoding
    /// skips them.
    #[inline]
    pub const fn symbol(&self, byte: u8) -> Symbol {
        self.decode_table[byte as usize]
    }

    /// The ASCII symbol for a 6-bit value. Only the low 6 bits of `sextet` are used.
    #[inline]
    pub(crate) const fn encode_sextet(&self, sextet: u32) -> u8 {
        self.symbols[(sextet & 0x3F) as usize]
    }

    /// The 64 symbols, ordered by value.
    pub const fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = ParseAlphabetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Possible errors when constructing an [Alphabet] from a `str`.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseAlphabetError {
    /// Alphabets must be 64 ASCII bytes
    InvalidLength,
    /// All bytes must be unique
    DuplicatedByte(u8),
    /// All bytes must be printable (in the range `[32, 126]`).
    UnprintableByte(u8),
    /// `=` cannot be used
    ReservedByte(u8),
}

impl fmt::Display for ParseAlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "Invalid length - must be 64 bytes"),
            Self::DuplicatedByte(b) => write!(f, "Duplicated byte: {:#04x}", b),
            Self::UnprintableByte(b) => write!(f, "Unprintable byte: {:#04x}", b),
            Self::ReservedByte(b) => write!(f, "Reserved byte: {:#04x}", b),
        }
    }
}

impl error::Error for ParseAlphabetError {}

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 3548](https://tools.ietf.org/html/rfc3548#section-3).
pub const STANDARD: Alphabet = Alphabet::from_str_unchecked(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
);

/// The URL safe alphabet (uses `-` and `_`).
///
/// See [RFC 3548](https://tools.ietf.org/html/rfc3548#section-4).
pub const URL_SAFE: Alphabet = Alphabet::from_str_unchecked(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
);
