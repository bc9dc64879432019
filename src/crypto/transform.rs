//! Additive shift folded over the key pattern.

use crate::config::shift_params::{ONE_STEP, ZERO_STEP};
use crate::crypto::key::{KeyBit, KeyPattern};

/// Net shift a key applies to every value: `3 * ones - zeros`.
///
/// Computed modulo 2^64 like the folds, so `encrypt(&[v], key)` always
/// equals `v.wrapping_add(net_offset(key))`.
pub fn net_offset(key: &KeyPattern) -> i64 {
    ONE_STEP
        .wrapping_mul(key.ones() as i64)
        .wrapping_sub(ZERO_STEP.wrapping_mul(key.zeros() as i64))
}

/// Encrypt a code sequence.
///
/// Every value is folded across the key bits left to right: a `1` adds 3,
/// a `0` subtracts 1. Results may leave the alphabet range and are kept
/// as-is. Arithmetic wraps at the `i64` bounds, which keeps every value
/// reversible by [`decrypt`].
///
/// # Example
///
/// ```
/// use b_enc::crypto::{encrypt, KeyPattern};
///
/// let key = KeyPattern::parse("101011");
/// assert_eq!(encrypt(&[11, 0], &key), vec![21, 10]);
/// ```
pub fn encrypt(codes: &[i64], key: &KeyPattern) -> Vec<i64> {
    tracing::debug!(codes = codes.len(), key_len = key.len(), "encrypting");
    codes
        .iter()
        .map(|&value| {
            key.bits().fold(value, |acc, bit| match bit {
                KeyBit::One => acc.wrapping_add(ONE_STEP),
                KeyBit::Zero => acc.wrapping_sub(ZERO_STEP),
            })
        })
        .collect()
}

/// Decrypt a code sequence. Exact inverse of [`encrypt`] for the same key.
pub fn decrypt(codes: &[i64], key: &KeyPattern) -> Vec<i64> {
    tracing::debug!(codes = codes.len(), key_len = key.len(), "decrypting");
    codes
        .iter()
        .map(|&value| {
            key.bits().fold(value, |acc, bit| match bit {
                KeyBit::One => acc.wrapping_sub(ONE_STEP),
                KeyBit::Zero => acc.wrapping_add(ZERO_STEP),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const PLAIN_CODES: [i64; 24] = [
        11, 18, 9, 16, 20, 15, 7, 18, 1, 6, 9, 0, 13, 5, 14, 25, 5, 14, 1, 14, 7, 11, 1, 14,
    ];
    const SHIFTED_CODES: [i64; 24] = [
        21, 28, 19, 26, 30, 25, 17, 28, 11, 16, 19, 10, 23, 15, 24, 35, 15, 24, 11, 24, 17, 21,
        11, 24,
    ];

    #[test]
    fn test_default_key_shifts_by_ten() {
        let key = KeyPattern::parse("101011");
        assert_eq!(net_offset(&key), 10);
        assert_eq!(encrypt(&PLAIN_CODES, &key), SHIFTED_CODES.to_vec());
        assert_eq!(decrypt(&SHIFTED_CODES, &key), PLAIN_CODES.to_vec());
    }

    #[test]
    fn test_empty_key_is_identity() {
        let key = KeyPattern::default();
        let codes = vec![0, 5, 26, -4, 1000];
        assert_eq!(encrypt(&codes, &key), codes);
        assert_eq!(decrypt(&codes, &key), codes);
    }

    #[test]
    fn test_empty_codes() {
        let key = KeyPattern::parse("1101");
        assert!(encrypt(&[], &key).is_empty());
        assert!(decrypt(&[], &key).is_empty());
    }

    #[test]
    fn test_values_leave_alphabet_range() {
        let key = KeyPattern::parse("0000");
        assert_eq!(encrypt(&[0, 2], &key), vec![-4, -2]);

        let key = KeyPattern::parse("1111111111");
        assert_eq!(encrypt(&[26], &key), vec![56]);
    }

    #[test]
    fn test_roundtrip_at_integer_bounds() {
        let bounds = [i64::MIN, i64::MIN + 1, -1, 0, i64::MAX - 1, i64::MAX];
        for raw in ["1", "0", "101011", "0000", "111111"] {
            let key = KeyPattern::parse(raw);
            let cipher = encrypt(&bounds, &key);
            assert_eq!(decrypt(&cipher, &key), bounds.to_vec(), "key {:?}", raw);

            let plain = decrypt(&bounds, &key);
            assert_eq!(encrypt(&plain, &key), bounds.to_vec(), "key {:?}", raw);
        }
    }

    #[test]
    fn test_shift_wraps_at_bounds() {
        assert_eq!(encrypt(&[i64::MAX], &KeyPattern::parse("1")), vec![i64::MIN + 2]);
        assert_eq!(encrypt(&[i64::MIN], &KeyPattern::parse("0")), vec![i64::MAX]);
        assert_eq!(decrypt(&[i64::MIN], &KeyPattern::parse("101011")), vec![i64::MAX - 9]);
    }

    #[test]
    fn test_closed_form_holds_at_bounds() {
        let key = KeyPattern::parse("1101");
        for v in [i64::MIN, i64::MAX] {
            assert_eq!(encrypt(&[v], &key), vec![v.wrapping_add(net_offset(&key))]);
        }
    }

    #[test]
    fn test_roundtrip_random_keys() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..40);
            let raw: String = (0..len)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect();
            let key = KeyPattern::parse(&raw);
            let codes: Vec<i64> = (0..16).map(|_| rng.gen_range(-500..500)).collect();

            assert_eq!(decrypt(&encrypt(&codes, &key), &key), codes);
        }
    }

    #[test]
    fn test_fold_matches_closed_form() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..40);
            let raw: String = (0..len)
                .map(|_| if rng.gen_bool(0.3) { '1' } else { '0' })
                .collect();
            let key = KeyPattern::parse(&raw);
            let v: i64 = rng.gen_range(-1000..1000);
            let expected = v + 3 * key.ones() as i64 - key.zeros() as i64;

            assert_eq!(encrypt(&[v], &key), vec![expected]);
            assert_eq!(encrypt(&[v], &key), vec![v + net_offset(&key)]);
        }
    }
}
