//! Error types for B-ENC.

use thiserror::Error;

/// Result type alias for B-ENC operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in B-ENC operations.
///
/// Malformed keys and unsupported plaintext characters are not errors:
/// both are filtered where they enter the system.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input or writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value does not fit in the fixed bar field width.
    #[error("Value {value} at index {index} does not fit in the bar field (allowed 0..={max})")]
    BarOutOfRange { value: i64, index: usize, max: u64 },

    /// A ciphertext token is not an integer.
    #[error("Invalid ciphertext token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    /// A code has no letter or space mapping (strict decoding only).
    #[error("Code {value} at index {index} is outside the alphabet (0..=26)")]
    OutOfAlphabet { value: i64, index: usize },

    /// Image drawing or encoding failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Render(e.to_string())
    }
}
