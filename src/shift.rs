//! Signed shifts along the enumeration.
//!
//! Compressing subtracts from the encoded value, decompressing adds to it.
//! The only thing that can go wrong is driving the value below zero, which
//! is rejected here before any file is rewritten.

use crate::errors::{ParseShiftError, ShiftError};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Apply a signed shift to an encoded value.
///
/// A positive shift compresses, a negative shift decompresses. Compressing
/// the empty file is rejected outright, and a positive shift larger than
/// `current` is rejected with the largest safe count (which is `current`
/// itself). Negative shifts cannot fail: the enumeration has no upper bound.
pub fn apply_shift(current: &BigUint, shift: &BigInt) -> Result<BigUint, ShiftError> {
    match shift.sign() {
        Sign::NoSign => Ok(current.clone()),
        Sign::Minus => Ok(current + shift.magnitude()),
        Sign::Plus => {
            if current.is_zero() {
                return Err(ShiftError::EmptyFile);
            }
            let magnitude = shift.magnitude();
            if current < magnitude {
                return Err(ShiftError::ExceedsValue {
                    max: current.clone(),
                });
            }
            Ok(current - magnitude)
        }
    }
}

/// Parse a `-C`/`-D` argument as a signed arbitrary-precision integer.
///
/// Accepts an optional `+`/`-` sign followed by a decimal literal or a
/// `0x`/`0o`/`0b` prefixed one, matching the prefix auto-detection the
/// numeric flags have always had.
pub fn parse_shift(literal: &str) -> Result<BigInt, ParseShiftError> {
    let trimmed = literal.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &trimmed[1..]),
        Some(b'+') => (Sign::Plus, &trimmed[1..]),
        _ => (Sign::Plus, trimmed),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x") | Some("0X") => (16, &digits[2..]),
        Some("0o") | Some("0O") => (8, &digits[2..]),
        Some("0b") | Some("0B") => (2, &digits[2..]),
        _ => (10, digits),
    };

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| ParseShiftError::new(literal))?;

    // from_biguint normalizes the sign of zero
    Ok(BigInt::from_biguint(sign, magnitude))
}
