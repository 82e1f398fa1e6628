//! Enables base64'd output anywhere you might use a `Display` implementation, like a format string.
//!
//! ```
//! use b64stream::display::Base64Display;
//!
//! let data = vec![0x0_u8, 0x1, 0x2, 0x3];
//! let wrapper = Base64Display::new(&data);
//!
//! assert_eq!("base64: AAECAw==", format!("base64: {}", wrapper));
//! ```

use crate::config::{Config, STANDARD};
use crate::encode::Encoder;
use std::fmt::{self, Display, Formatter};

/// Input bytes encoded per write to the formatter; a multiple of 3 so only the last chunk is
/// partial.
const CHUNK_SIZE: usize = 768;

/// A convenience wrapper for base64'ing bytes into a format string without encoding the whole
/// input up front.
pub struct Base64Display<'a> {
    bytes: &'a [u8],
    config: Config,
}

impl<'a> Base64Display<'a> {
    /// Create a `Base64Display` with the [STANDARD] config.
    pub fn new(bytes: &'a [u8]) -> Base64Display<'a> {
        Base64Display::with_config(bytes, STANDARD)
    }

    /// Create a `Base64Display` with the provided config.
    pub fn with_config(bytes: &'a [u8], config: Config) -> Base64Display<'a> {
        Base64Display { bytes, config }
    }
}

impl<'a> Display for Base64Display<'a> {
    fn fmt(&self, formatter: &mut Formatter) -> Result<(), fmt::Error> {
        let mut encoder = Encoder::with_config(self.config);

        for chunk in self.bytes.chunks(CHUNK_SIZE) {
            encoder.update(chunk);
            formatter.write_str(&encoder.drain())?;
        }

        formatter.write_str(&encoder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIME;
    use crate::encode_config;
    use crate::tests::random_config;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    #[test]
    fn basic_display() {
        assert_eq!(
            "~$Zm9vYmFy#*",
            format!("~${}#*", Base64Display::new(b"foobar"))
        );
        assert_eq!(
            "~$Zm9vYmFyZg==#*",
            format!("~${}#*", Base64Display::new(b"foobarf"))
        );
    }

    #[test]
    fn display_wraps_across_chunks() {
        let bytes = vec![0xA5_u8; 3 * CHUNK_SIZE + 1];
        assert_eq!(
            encode_config(&bytes, &MIME),
            Base64Display::with_config(&bytes, MIME).to_string()
        );
    }

    #[test]
    fn display_encode_matches_normal_encode() {
        let mut rng = SmallRng::seed_from_u64(0xd15);

        for _ in 0..100 {
            let len = rng.gen_range(0..4 * CHUNK_SIZE);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let config = random_config(&mut rng);

            assert_eq!(
                encode_config(&bytes, &config),
                format!("{}", Base64Display::with_config(&bytes, config))
            );
        }
    }
}
