//! Hamming(16,11) SECDED codec.
//!
//! See [`ecc::hamming`] for the bit layout and decoding rules.

pub mod ecc;
pub mod error;

pub use ecc::hamming::{decode, encode, encode_checked, DecodeStatus};
pub use error::{Error, Result};
