//! Hamming(16,11) SECDED error correction code.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Adding one overall parity bit to a Hamming code gives a SECDED code (single error correction,
//! double error detection). This module implements the 16-bit variant: 11 message bits, 4 positional
//! parity bits and 1 total parity bit.
//!
//! # Bit layout
//!
//! Codeword positions are numbered 1..=16 starting from the most significant bit:
//!
//! ```text
//!  1  2  3  4  5  6  7  8  9  10 11 12 13 14 15 16
//!  P  P  D  P  D  D  D  P  D  D  D  D  D  D  D  T
//! ```
//!
//! - `P` at positions 1, 2, 4 and 8: parity over every position whose index has that bit set.
//! - `D`: the 11 message bits, most significant message bit in position 3, in order.
//! - `T` at position 16: parity of positions 1..=15.
//!
//! Messages are right-justified in a `u16`; only the low [`MESSAGE_BITS`] bits are used.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Short control words on noisy buses and radio links
//!
//! # Examples
//!
//! ```
//! use secded::ecc::hamming::{decode, encode, DecodeStatus};
//!
//! assert_eq!(encode(0x7FF), 0xFFFF);
//! assert_eq!(decode(0xFFFF), (0x7FF, DecodeStatus::Ok));
//!
//! // Two flipped bits cannot be corrected, only detected.
//! let (_, status) = decode(0xFFFF ^ 0b11);
//! assert_eq!(status, DecodeStatus::Unreadable);
//! ```

use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use log::{debug, trace};
use std::fmt;

/// Number of message bits carried by a codeword
pub const MESSAGE_BITS: u32 = 11;

/// Width of a codeword in bits
pub const CODEWORD_BITS: u32 = 16;

/// Selects the message bits of a right-justified message
pub const MESSAGE_MASK: u16 = 0x07FF;

/// Position of the total parity bit (the least significant bit)
pub const TOTAL_PARITY_POSITION: u8 = 16;

/// Codeword bits that carry message bits.
///
/// Encoding shifts the message left by one before applying each mask in turn, so the low seven
/// message bits land under the first mask, the next three under the second and the top bit under
/// the last.
pub const DATA_BITS_MASKS: [u16; 3] = [
    0x00FE, // 0000 0000 1111 1110  positions 9..=15
    0x0E00, // 0000 1110 0000 0000  positions 5..=7
    0x2000, // 0010 0000 0000 0000  position 3
];

/// Parity-check masks: entry `i` selects the positions whose index has bit `i` set, and covers the
/// parity bit at position `2^i`.
pub const PARITY_CHECK_MASKS: [u16; 4] = [
    0xAAAA, // 1010 1010 1010 1010  positions 1, 3, 5, ..., 15
    0x6666, // 0110 0110 0110 0110  positions 2, 3, 6, 7, 10, 11, 14, 15
    0x1E1E, // 0001 1110 0001 1110  positions 4..=7, 12..=15
    0x01FE, // 0000 0001 1111 1110  positions 8..=15
];

/// Outcome of decoding a codeword.
///
/// The discriminants are stable and can be exchanged with other implementations through
/// [`DecodeStatus::code`] and `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DecodeStatus {
    /// The codeword was received intact.
    Ok = 0,
    /// Exactly one bit was flipped and has been repaired.
    CorrectedSingleError = 1,
    /// Two or more bits were flipped. The decoded message is not meaningful.
    Unreadable = 2,
}

impl DecodeStatus {
    /// Numeric status code: 0 for no errors, 1 for one corrected error, 2 for unreadable.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the decoded message can be trusted.
    pub fn is_readable(self) -> bool {
        self != DecodeStatus::Unreadable
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeStatus::Ok => "no errors",
            DecodeStatus::CorrectedSingleError => "one error corrected",
            DecodeStatus::Unreadable => "unreadable",
        };
        f.write_str(name)
    }
}

impl TryFrom<u8> for DecodeStatus {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(DecodeStatus::Ok),
            1 => Ok(DecodeStatus::CorrectedSingleError),
            2 => Ok(DecodeStatus::Unreadable),
            other => Err(Error::invalid_input(format!(
                "unknown decode status code {}",
                other
            ))),
        }
    }
}

#[inline]
fn parity_is_odd(word: u16) -> bool {
    word.count_ones() & 1 == 1
}

/// Single-bit mask for a 1-based position counted from the most significant bit.
#[inline]
const fn position_mask(position: u8) -> u16 {
    1 << (CODEWORD_BITS - position as u32)
}

/// Validates a 1-based position and turns it into an `Msb0` bit index.
fn bit_index(position: u8) -> Result<usize> {
    if position == 0 || u32::from(position) > CODEWORD_BITS {
        return Err(Error::invalid_input(format!(
            "bit position {} is outside 1..={}",
            position, CODEWORD_BITS
        )));
    }
    Ok(usize::from(position - 1))
}

/// Encodes the low 11 bits of `message` into a 16-bit codeword.
///
/// The upper five bits of `message` are ignored; use [`encode_checked`] to reject them instead.
pub fn encode(message: u16) -> u16 {
    let mut shifted = message;
    let mut codeword = 0;

    for mask in DATA_BITS_MASKS {
        shifted <<= 1;
        codeword |= shifted & mask;
    }

    // No parity-check mask covers another mask's parity position.
    for (i, mask) in PARITY_CHECK_MASKS.iter().enumerate() {
        if parity_is_odd(codeword & mask) {
            codeword |= position_mask(1 << i);
        }
    }

    if parity_is_odd(codeword) {
        codeword |= position_mask(TOTAL_PARITY_POSITION);
    }

    codeword
}

/// Encodes `message`, failing if it has more than [`MESSAGE_BITS`] significant bits.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] if any of the upper five bits is set.
pub fn encode_checked(message: u16) -> Result<u16> {
    if message & !MESSAGE_MASK != 0 {
        return Err(Error::InputTooLarge {
            bits: u16::BITS - message.leading_zeros(),
            max_bits: MESSAGE_BITS,
        });
    }
    Ok(encode(message))
}

/// Computes the positional syndrome of a received codeword.
///
/// The result is in `0..=15`. For a codeword with a single flipped bit among positions 1..=15 it
/// is the position of that bit; it is 0 when every parity check passes.
pub fn syndrome(codeword: u16) -> u8 {
    PARITY_CHECK_MASKS
        .iter()
        .enumerate()
        .filter(|&(_, &mask)| parity_is_odd(codeword & mask))
        .fold(0, |acc, (i, _)| acc | (1 << i))
}

/// Whether `codeword` passes every parity check, including the total parity.
pub fn is_valid_codeword(codeword: u16) -> bool {
    syndrome(codeword) == 0 && !parity_is_odd(codeword)
}

/// Decodes a received codeword, correcting a single flipped bit if there is one.
///
/// Returns the 11-bit message and the decoding status. When the status is
/// [`DecodeStatus::Unreadable`] the message is whatever the uncorrected data positions hold and
/// must not be relied upon.
///
/// A word whose only inconsistency is the total parity bit is reported as
/// [`DecodeStatus::CorrectedSingleError`]: the flipped bit is position 16 itself.
pub fn decode(codeword: u16) -> (u16, DecodeStatus) {
    let mut error_position = syndrome(codeword);
    let total_parity_is_even = !parity_is_odd(codeword);

    if error_position != 0 && total_parity_is_even {
        debug!(
            "codeword {:#06x} is unreadable: syndrome {} with even total parity",
            codeword, error_position
        );
        return (extract_message(codeword), DecodeStatus::Unreadable);
    }

    if error_position == 0 {
        if total_parity_is_even {
            return (extract_message(codeword), DecodeStatus::Ok);
        }
        error_position = TOTAL_PARITY_POSITION;
    }

    trace!(
        "correcting bit {} of codeword {:#06x}",
        error_position,
        codeword
    );
    let corrected = codeword ^ position_mask(error_position);

    (
        extract_message(corrected),
        DecodeStatus::CorrectedSingleError,
    )
}

/// Gathers the data positions back into a right-justified 11-bit message.
fn extract_message(codeword: u16) -> u16 {
    DATA_BITS_MASKS
        .iter()
        .rev()
        .fold(0, |message, mask| (message | (codeword & mask)) >> 1)
}

/// Reads the bit at a 1-based position counted from the most significant bit.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `position` is not in `1..=16`.
pub fn bit_at(codeword: u16, position: u8) -> Result<bool> {
    let index = bit_index(position)?;
    Ok(codeword.view_bits::<Msb0>()[index])
}

/// Returns `codeword` with the bit at a 1-based position (from the most significant bit) inverted.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `position` is not in `1..=16`.
pub fn flip_bit(codeword: u16, position: u8) -> Result<u16> {
    let index = bit_index(position)?;
    let mut word = codeword;
    let bits = word.view_bits_mut::<Msb0>();
    let current = bits[index];
    bits.set(index, !current);
    Ok(word)
}
