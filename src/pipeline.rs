//! End-to-end encrypt and decrypt paths.

use crate::codec::{decode_text, decode_text_strict, encode_text, parse_ciphertext};
use crate::config::{BarFraming, BencConfig};
use crate::crypto::{decrypt, encrypt, KeyPattern};
use crate::encoding::{encode_bars_with, BarSequence};
use crate::error::Result;
use serde::Serialize;

/// Every intermediate value of the encrypt path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encrypted {
    /// Alphabet codes of the plaintext.
    pub codes: Vec<i64>,
    /// Shifted codes.
    pub cipher: Vec<i64>,
    /// Bar encoding of `cipher`.
    pub bars: BarSequence,
}

/// Every intermediate value of the decrypt path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decrypted {
    /// Codes after reversing the shift.
    pub codes: Vec<i64>,
    /// Decoded text.
    pub plaintext: String,
}

/// Cipher pipeline bound to one key.
///
/// The key is carried explicitly by the pipeline; nothing is shared
/// between instances.
#[derive(Debug, Clone)]
pub struct Pipeline {
    key: KeyPattern,
    framing: BarFraming,
    strict: bool,
}

impl Pipeline {
    /// Create a pipeline with default framing and lossy decoding.
    pub fn new(key: KeyPattern) -> Self {
        Self {
            key,
            framing: BarFraming::default(),
            strict: false,
        }
    }

    /// Create a pipeline from a validated configuration.
    pub fn from_config(config: &BencConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            key: KeyPattern::parse(&config.key),
            framing: config.framing,
            strict: config.strict_decode,
        })
    }

    /// Switch between strict and lossy decoding.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The key used by this pipeline.
    pub fn key(&self) -> &KeyPattern {
        &self.key
    }

    /// Text to shifted codes, without bar encoding.
    pub fn cipher_text(&self, text: &str) -> Vec<i64> {
        encrypt(&encode_text(text), &self.key)
    }

    /// Text to codes, shifted codes, and bars.
    ///
    /// Fails when a shifted code does not fit the bar framing.
    pub fn encrypt_text(&self, text: &str) -> Result<Encrypted> {
        let codes = encode_text(text);
        let cipher = encrypt(&codes, &self.key);
        let bars = encode_bars_with(&cipher, &self.framing)?;
        Ok(Encrypted {
            codes,
            cipher,
            bars,
        })
    }

    /// Ciphertext string to decrypted codes and plaintext.
    pub fn decrypt_str(&self, ciphertext: &str) -> Result<Decrypted> {
        let cipher = parse_ciphertext(ciphertext)?;
        self.decrypt_codes(&cipher)
    }

    /// Shifted codes to decrypted codes and plaintext.
    pub fn decrypt_codes(&self, cipher: &[i64]) -> Result<Decrypted> {
        let codes = decrypt(cipher, &self.key);
        let plaintext = if self.strict {
            decode_text_strict(&codes)?
        } else {
            decode_text(&codes)
        };
        Ok(Decrypted { codes, plaintext })
    }
}
