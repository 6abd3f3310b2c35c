//! Error correction code implementations.
//!
//! This module provides the Hamming(16,11) SECDED codec: 11 message bits are
//! protected by four positional parity bits and one total parity bit, which is
//! enough to correct any single flipped bit in a 16-bit word and to detect any
//! two flipped bits.
//!
//! # Examples
//!
//! ```rust
//! use secded::ecc::hamming::{decode, encode, flip_bit, DecodeStatus};
//!
//! let codeword = encode(0b101_0101_0101);
//! let noisy = flip_bit(codeword, 7).unwrap();
//!
//! assert_eq!(decode(noisy), (0b101_0101_0101, DecodeStatus::CorrectedSingleError));
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hamming(16,11) single-error-correcting, double-error-detecting code
pub mod hamming;
pub use hamming::{
    bit_at, decode, encode, encode_checked, flip_bit, is_valid_codeword, syndrome, DecodeStatus,
};
