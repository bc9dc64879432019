//! Key-driven additive shift transform.
//!
//! This module provides:
//! - Key pattern parsing (binary digits filtered from free-form input)
//! - The `encrypt` / `decrypt` folds and their closed-form offset
//!
//! The transform is a constant, fully reversible shift. It offers no
//! cryptographic security.

mod key;
mod transform;

pub use key::{KeyBit, KeyPattern};
pub use transform::{decrypt, encrypt, net_offset};
