//! Scalars as unbounded non-negative integers.
//!
//! Scalars double as raw exponents for `scalar_mul` (never reduced) and as
//! signature components (reduced modulo the group order l).

use num_bigint::BigUint;

use crate::constants::{ENCODED_LENGTH, GROUP_ORDER};

/// An arbitrary-precision non-negative integer.
pub type Scalar = BigUint;

/// Interprets `bytes` as a little-endian integer of any length.
#[inline]
pub fn from_bytes_le(bytes: &[u8]) -> Scalar {
    BigUint::from_bytes_le(bytes)
}

/// Reduces `value` modulo the group order l.
#[inline]
pub fn reduce(value: &Scalar) -> Scalar {
    value % &*GROUP_ORDER
}

/// Encodes `value mod l` as 32 little-endian bytes.
pub fn to_canonical_bytes(value: &Scalar) -> [u8; 32] {
    let mut out = [0u8; ENCODED_LENGTH];
    let bytes = reduce(value).to_bytes_le();
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}
