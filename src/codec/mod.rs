//! Conversions at the text boundary.
//!
//! `alphabet` maps plaintext to integer codes and back. `ciphertext` reads
//! and writes the space-separated integer form exchanged with users.

mod alphabet;
mod ciphertext;

pub use alphabet::{decode_text, decode_text_strict, encode_text, LETTER_COUNT, SPACE_CODE};
pub use ciphertext::{format_ciphertext, parse_ciphertext};
