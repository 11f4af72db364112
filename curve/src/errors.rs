//! Error types for field and curve arithmetic.

use thiserror::Error;

/// Errors raised by field arithmetic, point construction and point decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The value shares a factor with the modulus and has no inverse.
    ///
    /// Over the prime field this only happens for zero, which shows up when a
    /// birational map is asked to convert a point with no affine image.
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,

    /// The value is a quadratic non-residue modulo q.
    #[error("value has no square root modulo 2^255 - 19")]
    NotSquare,

    /// The coordinates do not satisfy the curve equation, or are not reduced.
    #[error("coordinates do not describe a point on the curve")]
    InvalidPoint,

    /// A 32-byte encoding does not describe any curve point.
    #[error("invalid compressed point encoding")]
    InvalidEncoding,
}
