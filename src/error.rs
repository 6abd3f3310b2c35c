//! Error type shared by the codec helpers.
//!
//! Decoding outcomes (intact, corrected, unreadable) are reported through
//! [`DecodeStatus`](crate::ecc::hamming::DecodeStatus), not through this type.
//! `Error` only covers caller misuse: values that do not fit the 16/11 layout.

use thiserror::Error;

/// Errors raised by the checked codec entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A message had more significant bits than a codeword can carry.
    #[error("input too large: message has {bits} significant bits, at most {max_bits} can be encoded")]
    InputTooLarge { bits: u32, max_bits: u32 },

    /// An argument was outside its accepted range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InputTooLarge {
            bits: 12,
            max_bits: 11,
        };
        assert_eq!(
            err.to_string(),
            "input too large: message has 12 significant bits, at most 11 can be encoded"
        );

        let err = Error::invalid_input("bit position 0 is outside 1..=16");
        assert_eq!(
            err.to_string(),
            "invalid input: bit position 0 is outside 1..=16"
        );
    }
}
