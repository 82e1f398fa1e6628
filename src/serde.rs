//! Helpers for (de)serializing byte fields as base64 strings with `#[serde(with = "...")]`.
//!
//! Deserializing uses strict decoding, so that garbage in a document is reported rather than
//! silently skipped.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Attachment {
//!     #[serde(with = "b64stream::serde::standard")]
//!     bytes: Vec<u8>,
//! }
//! ```

macro_rules! config_module {
    ($name:ident, $config:expr, $doc:expr) => {
        #[doc = $doc]
        pub mod $name {
            use crate::config::{Config, DecodeMode};
            use serde::{de, Deserialize, Deserializer, Serializer};

            const CONFIG: Config = $config.with_decode_mode(DecodeMode::Strict);

            pub fn serialize<S, T>(bytes: T, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
                T: AsRef<[u8]>,
            {
                serializer.serialize_str(&crate::encode_config(bytes, &CONFIG))
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                crate::decode_config(s, &CONFIG).map_err(de::Error::custom)
            }
        }
    };
}

config_module!(
    standard,
    crate::config::STANDARD,
    "Standard alphabet with padding."
);
config_module!(
    url_safe,
    crate::config::URL_SAFE_NO_PAD,
    "URL-safe alphabet without padding, as commonly used in tokens."
);
