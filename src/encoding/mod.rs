//! Fixed-width binary bar encoding.
//!
//! Each code becomes a field of bits, most significant first, followed by
//! a separator bar. The result feeds a renderer; there is no decoder.

mod bars;

pub use bars::{encode_bars, encode_bars_with, Bar, BarSequence};
