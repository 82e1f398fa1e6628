//! Incremental base64 and hex codecs.
//!
//! # Base64
//!
//! The base64 [Encoder] and [Decoder] are small state machines that accept input in chunks of
//! any size and produce exactly the same output as a single call over the concatenated input.
//! [encode] and [decode] are the one-shot conveniences.
//!
//! ```
//! assert_eq!("TWFu", b64stream::encode(b"Man"));
//! assert_eq!(b"Man".to_vec(), b64stream::decode("TWFu"));
//! ```
//!
//! Decoding is lenient by default: whitespace, and any other byte that isn't part of the alphabet,
//! is skipped, and the first `=` ends the data. Anything after it is ignored.
//!
//! ```
//! assert_eq!(b"Man".to_vec(), b64stream::decode("TW Fu\n"));
//! assert_eq!(b"Man".to_vec(), b64stream::decode("TWFu====extra"));
//! ```
//!
//! Use a [Config] with [DecodeMode::Strict] to have bytes outside the alphabet reported as
//! [DecodeError]s instead.
//!
//! # Configs
//!
//! The alphabet, padding and line wrapping are controlled by [Config]. Common ones are provided as
//! constants:
//!
//! | Config            | Alphabet | Padding | Line wrap         |
//! |-------------------|----------|---------|-------------------|
//! | [STANDARD]        | `+`, `/` | yes     | none              |
//! | [STANDARD_NO_PAD] | `+`, `/` | no      | none              |
//! | [URL_SAFE]        | `-`, `_` | yes     | none              |
//! | [URL_SAFE_NO_PAD] | `-`, `_` | no      | none              |
//! | [MIME]            | `+`, `/` | yes     | 76 columns, CRLF  |
//!
//! # Streams
//!
//! [write::EncoderWriter] and [read::DecoderReader] wrap `io::Write` and `io::Read`
//! implementations, and [display::Base64Display] encodes straight into a format string.
//!
//! # Hex
//!
//! The [hex] module provides uppercase hexadecimal encoding and case-insensitive decoding.

#![forbid(unsafe_code)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]

pub mod alphabet;
mod config;
mod decode;
pub mod display;
mod encode;
pub mod hex;
pub mod read;
#[cfg(feature = "serde")]
pub mod serde;
pub mod write;


pub use crate::config::{
    Config, DecodeMode, LineEnding, LineWrap, MIME, STANDARD, STANDARD_NO_PAD, URL_SAFE,
    URL_SAFE_NO_PAD,
};
pub use crate::decode::{
    decode, decode_config, decode_config_buf, decoded_len_estimate, DecodeError, Decoder,
};
pub use crate::encode::{encode, encode_config, encode_config_buf, encoded_len, Encoder};
