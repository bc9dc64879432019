//! B-ENC: barcode-style substitution cipher
//!
//! Maps lowercase text to integer codes, shifts them with a binary key, and
//! encodes the result as black and white bars for a barcode-like image.
//!
//! # Features
//!
//! - **Alphabet codec**: space is 0, `a..z` are 1..26, everything else is dropped
//! - **Key-driven shift**: each `1` key bit adds 3, each `0` subtracts 1
//! - **Bar encoding**: 7-bit fields, MSB first, each followed by a `0` separator
//! - **Renderers**: PNG image or terminal text, chosen by configuration
//!
//! The shift is a constant offset and offers no cryptographic security.
//!
//! # Architecture
//!
//! ```text
//! Text → Codes → Shift (key) → Bars → Renderer
//! Ciphertext → Unshift (key) → Text
//! ```
//!
//! # Example
//!
//! ```rust
//! use b_enc::crypto::KeyPattern;
//! use b_enc::Pipeline;
//!
//! let pipeline = Pipeline::new(KeyPattern::parse("101011"));
//!
//! let encrypted = pipeline.encrypt_text("hi").unwrap();
//! assert_eq!(encrypted.cipher, vec![18, 19]);
//! assert_eq!(encrypted.bars.to_string(), "0010010000100110");
//!
//! let decrypted = pipeline.decrypt_str("18 19").unwrap();
//! assert_eq!(decrypted.plaintext, "hi");
//! ```

pub mod codec;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod pipeline;
pub mod render;

pub use config::BencConfig;
pub use error::{Error, Result};
pub use pipeline::{Decrypted, Encrypted, Pipeline};
