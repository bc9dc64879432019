//! Binary key pattern.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single key bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBit {
    Zero,
    One,
}

impl KeyBit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(KeyBit::Zero),
            '1' => Some(KeyBit::One),
            _ => None,
        }
    }
}

/// Ordered sequence of key bits.
///
/// Built from user input by keeping only `'0'` and `'1'`, in order.
/// An empty pattern is valid and makes the transform the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    bits: String,
}

impl KeyPattern {
    /// Parse a key from free-form input, dropping every non-binary character.
    ///
    /// ```
    /// use b_enc::crypto::KeyPattern;
    ///
    /// let key = KeyPattern::parse("10-10 11x");
    /// assert_eq!(key.as_str(), "101011");
    /// ```
    pub fn parse(input: &str) -> Self {
        let bits: String = input.chars().filter(|c| matches!(c, '0' | '1')).collect();
        tracing::trace!(
            dropped = input.chars().count() - bits.len(),
            len = bits.len(),
            "parsed key pattern"
        );
        Self { bits }
    }

    /// The filtered key as a string of `'0'`/`'1'`.
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pattern has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate over the bits left to right.
    pub fn bits(&self) -> impl Iterator<Item = KeyBit> + '_ {
        self.bits.chars().filter_map(KeyBit::from_char)
    }

    /// Count of `1` bits.
    pub fn ones(&self) -> usize {
        self.bits().filter(|b| *b == KeyBit::One).count()
    }

    /// Count of `0` bits.
    pub fn zeros(&self) -> usize {
        self.len() - self.ones()
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl FromStr for KeyPattern {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for KeyPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.bits)
    }
}

impl<'de> Deserialize<'de> for KeyPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
