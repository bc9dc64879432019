//! Space-separated integer ciphertext.

use crate::error::{Error, Result};

/// Parse whitespace-separated integers.
///
/// Empty or whitespace-only input gives an empty sequence. The first token
/// that is not a signed integer fails the whole parse.
///
/// ```
/// use b_enc::codec::parse_ciphertext;
///
/// assert_eq!(parse_ciphertext(" 20  -3\n27 ").unwrap(), vec![20, -3, 27]);
/// assert!(parse_ciphertext("20 x7").is_err());
/// ```
pub fn parse_ciphertext(input: &str) -> Result<Vec<i64>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| Error::InvalidToken {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Format codes as space-separated integers.
pub fn format_ciphertext(codes: &[i64]) -> String {
    codes
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
