//! Bar encoder.

use crate::config::BarFraming;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single bar: black for `One`, white for `Zero`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bar {
    #[serde(rename = "0", alias = "zero")]
    Zero,
    #[serde(rename = "1", alias = "one")]
    One,
}

impl Bar {
    /// Whether this bar is drawn black.
    pub fn is_black(self) -> bool {
        self == Bar::One
    }

    /// The `'0'` / `'1'` symbol for this bar.
    pub fn symbol(self) -> char {
        match self {
            Bar::Zero => '0',
            Bar::One => '1',
        }
    }
}

/// Ordered bars produced by the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarSequence {
    bars: Vec<Bar>,
}

impl BarSequence {
    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether there are no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Iterate over the bars in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// The bars as a slice.
    pub fn as_slice(&self) -> &[Bar] {
        &self.bars
    }
}

impl fmt::Display for BarSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bar in &self.bars {
            write!(f, "{}", bar.symbol())?;
        }
        Ok(())
    }
}

impl FromIterator<Bar> for BarSequence {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BarSequence {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

impl Serialize for BarSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Encode codes with the default framing: 7 bits plus a `0` separator.
///
/// # Example
///
/// ```
/// use b_enc::encoding::encode_bars;
///
/// let bars = encode_bars(&[0, 5]).unwrap();
/// assert_eq!(bars.to_string(), "0000000000001010");
///
/// // 128 needs an eighth bit
/// assert!(encode_bars(&[128]).is_err());
/// ```
pub fn encode_bars(codes: &[i64]) -> Result<BarSequence> {
    encode_bars_with(codes, &BarFraming::default())
}

/// Encode codes with a custom framing.
///
/// Fails with [`Error::BarOutOfRange`] on the first value that is negative
/// or does not fit in `field_width` bits. Nothing is truncated.
pub fn encode_bars_with(codes: &[i64], framing: &BarFraming) -> Result<BarSequence> {
    framing.validate()?;
    let width = framing.field_width;
    let max = framing.max_value();

    let mut bars = Vec::with_capacity(codes.len() * (width as usize + 1));
    for (index, &value) in codes.iter().enumerate() {
        let field = u64::try_from(value)
            .ok()
            .filter(|v| *v <= max)
            .ok_or(Error::BarOutOfRange { value, index, max })?;

        for shift in (0..width).rev() {
            bars.push(if (field >> shift) & 1 == 1 {
                Bar::One
            } else {
                Bar::Zero
            });
        }
        bars.push(framing.separator);
    }

    tracing::debug!(codes = codes.len(), bars = bars.len(), width, "encoded bars");
    Ok(BarSequence { bars })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_eight_white_bars() {
        let bars = encode_bars(&[0]).unwrap();
        assert_eq!(bars.len(), 8);
        assert_eq!(bars.to_string(), "00000000");
    }

    #[test]
    fn test_msb_first_with_separator() {
        assert_eq!(encode_bars(&[1]).unwrap().to_string(), "00000010");
        assert_eq!(encode_bars(&[64]).unwrap().to_string(), "10000000");
        assert_eq!(encode_bars(&[127]).unwrap().to_string(), "11111110");
    }

    #[test]
    fn test_groups_concatenate_in_order() {
        let bars = encode_bars(&[21, 10]).unwrap();
        assert_eq!(bars.to_string(), "0010101000010100");
        assert_eq!(bars.len(), 16);
    }

    #[test]
    fn test_empty_input() {
        let bars = encode_bars(&[]).unwrap();
        assert!(bars.is_empty());
        assert_eq!(bars.to_string(), "");
    }

    #[test]
    fn test_rejects_128() {
        match encode_bars(&[5, 128]) {
            Err(Error::BarOutOfRange { value, index, max }) => {
                assert_eq!(value, 128);
                assert_eq!(index, 1);
                assert_eq!(max, 127);
            }
            other => panic!("expected BarOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative() {
        match encode_bars(&[3, 4, -1]) {
            Err(Error::BarOutOfRange { value, index, .. }) => {
                assert_eq!(value, -1);
                assert_eq!(index, 2);
            }
            other => panic!("expected BarOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_framing() {
        let framing = BarFraming::new(3, Bar::One);
        let bars = encode_bars_with(&[5, 0], &framing).unwrap();
        assert_eq!(bars.to_string(), "10110001");
        assert!(encode_bars_with(&[8], &framing).is_err());
    }

    #[test]
    fn test_invalid_framing_rejected_even_for_empty_input() {
        let framing = BarFraming::new(0, Bar::Zero);
        assert!(matches!(
            encode_bars_with(&[], &framing),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_as_slice_matches_symbols() {
        let bars = encode_bars(&[64]).unwrap();
        let slice = bars.as_slice();
        assert_eq!(slice.len(), 8);
        assert_eq!(slice[0], Bar::One);
        assert!(slice[1..].iter().all(|b| *b == Bar::Zero));
    }

    #[test]
    fn test_bar_colors() {
        assert!(Bar::One.is_black());
        assert!(!Bar::Zero.is_black());
    }

    #[test]
    fn test_serialize_as_string() {
        let bars = encode_bars(&[3]).unwrap();
        assert_eq!(serde_json::to_string(&bars).unwrap(), "\"00000110\"");
    }
}
