//! Lossy alphabet codec: space is 0, `a..z` are 1..26.

use crate::error::{Error, Result};

/// Code emitted for a space.
pub const SPACE_CODE: i64 = 0;

/// Number of letter codes (`a` = 1 through `z` = 26).
pub const LETTER_COUNT: i64 = 26;

/// Convert text to codes.
///
/// Input is lowercased first. Characters other than space and `a..z` are
/// dropped without error.
///
/// ```
/// use b_enc::codec::encode_text;
///
/// assert_eq!(encode_text("Ab, z!"), vec![1, 2, 0, 26]);
/// ```
pub fn encode_text(text: &str) -> Vec<i64> {
    let codes: Vec<i64> = text
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some(SPACE_CODE),
            'a'..='z' => Some(c as i64 - 'a' as i64 + 1),
            _ => None,
        })
        .collect();
    tracing::debug!(chars = text.chars().count(), codes = codes.len(), "encoded text");
    codes
}

fn code_to_char(value: i64) -> Option<char> {
    match value {
        SPACE_CODE => Some(' '),
        1..=LETTER_COUNT => char::from_u32(('a' as i64 + value - 1) as u32),
        _ => None,
    }
}

/// Convert codes back to text.
///
/// Codes outside 0..=26 are dropped. Composed with an arbitrary transform
/// this is therefore not an inverse of [`encode_text`]; use
/// [`decode_text_strict`] to detect that case.
pub fn decode_text(codes: &[i64]) -> String {
    let text: String = codes.iter().filter_map(|&v| code_to_char(v)).collect();
    let dropped = codes.len() - text.chars().count();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped codes outside the alphabet");
    }
    text
}

/// Convert codes back to text, failing on the first code outside 0..=26.
pub fn decode_text_strict(codes: &[i64]) -> Result<String> {
    codes
        .iter()
        .enumerate()
        .map(|(index, &value)| code_to_char(value).ok_or(Error::OutOfAlphabet { value, index }))
        .collect()
}
