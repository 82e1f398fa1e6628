//! Hexadecimal encoding: two uppercase digits per byte, optionally separated.
//!
//! ```
//! assert_eq!("CAFE01", b64stream::hex::encode([0xca_u8, 0xfe, 0x01]));
//! assert_eq!("CA:FE:01", b64stream::hex::encode_with_separator([0xca_u8, 0xfe, 0x01], ':'));
//! assert_eq!(Ok(vec![0xca, 0xfe, 0x01]), b64stream::hex::decode("cafe01"));
//! ```

use std::{error, fmt};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Errors that can occur while decoding hex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// Hex text must have two digits per byte. The offending length is provided.
    OddLength(usize),
    /// A byte that isn't a hex digit was found. The offset and offending byte are provided.
    InvalidDigit { offset: usize, byte: u8 },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HexError::OddLength(len) => write!(f, "Hex text has odd length {}.", len),
            HexError::InvalidDigit { offset, byte } => {
                write!(f, "Invalid hex digit {:?}, offset {}.", char::from(byte), offset)
            }
        }
    }
}

impl error::Error for HexError {}

/// The two uppercase hex digits for `byte`, high nibble first.
pub const fn encode_byte(byte: u8) -> [char; 2] {
    [
        DIGITS[(byte >> 4) as usize] as char,
        DIGITS[(byte & 0xF) as usize] as char,
    ]
}

/// Encode bytes as uppercase hex.
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for &byte in input {
        output.extend(encode_byte(byte));
    }
    output
}

/// Encode bytes as uppercase hex with `separator` between bytes. No separator follows the last
/// byte.
pub fn encode_with_separator<T: AsRef<[u8]>>(input: T, separator: char) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * (2 + separator.len_utf8()));
    for (index, &byte) in input.iter().enumerate() {
        if index > 0 {
            output.push(separator);
        }
        output.extend(encode_byte(byte));
    }
    output
}

/// Decode hex text. Upper and lower case digits are both accepted; nothing else is.
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, HexError> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(HexError::OddLength(input.len()));
    }

    let mut output = Vec::with_capacity(input.len() / 2);
    for (pair_index, pair) in input.chunks_exact(2).enumerate() {
        let offset = pair_index * 2;
        let high = decode_digit(pair[0]).ok_or(HexError::InvalidDigit {
            offset,
            byte: pair[0],
        })?;
        let low = decode_digit(pair[1]).ok_or(HexError::InvalidDigit {
            offset: offset + 1,
            byte: pair[1],
        })?;
        output.push(high << 4 | low);
    }

    Ok(output)
}

fn decode_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}
