//! Bijection between byte sequences and natural numbers.
//!
//! Every finite byte sequence maps to exactly one natural number and back.
//! The empty sequence maps to 0, the 256 one-byte sequences map to 1..=256,
//! the 65536 two-byte sequences map to 257..=65792, and so on. Within one
//! size class the little-endian value of the contents decides the order.
//!
//! The first number of the size class for length `n` is the geometric sum
//! `1 + 256 + ... + 256^(n-1) = (256^n - 1) / 255`, which is always an exact
//! division.

use num_bigint::BigUint;
use num_traits::One;

/// First number of the size class for sequences of length `len`.
///
/// Equivalently, the count of byte sequences strictly shorter than `len`.
pub fn size_class_start(len: usize) -> BigUint {
    ((BigUint::one() << (8 * len)) - BigUint::one()) / 255u32
}

/// Map a byte sequence to its natural number.
///
/// The empty slice encodes to 0. Longer sequences always encode to larger
/// numbers than shorter ones; within one length, the little-endian value of
/// the contents orders them.
pub fn encode(bytes: &[u8]) -> BigUint {
    size_class_start(bytes.len()) + BigUint::from_bytes_le(bytes)
}

/// Map a natural number back to its byte sequence.
///
/// Inverse of [`encode`] for every input: the length is recovered from the
/// bit length of `255 * number + 1` (a power of 256 occupies `8n + 1` bits,
/// so the class boundary lands exactly on a bit-length step), then the
/// offset into the class is rendered little-endian, zero-padded up to that
/// length. The padding matters: the first sequence of each class has offset
/// 0 but must still come back as `len` zero bytes.
pub fn decode(number: &BigUint) -> Vec<u8> {
    let marker = number * 255u32 + 1u32;
    let len = ((marker.bits() - 1) / 8) as usize;

    let offset = number - size_class_start(len);
    let mut bytes = offset.to_bytes_le();
    bytes.resize(len, 0);
    bytes
}
