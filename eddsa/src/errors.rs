//! Error types for the Ed25519 signature scheme.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during key derivation, signing and verification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A signature or public key does not have its fixed length.
    ///
    /// Checked before any arithmetic takes place.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The R component of the signature or the public key is not a valid
    /// compressed point.
    #[error("invalid compressed point")]
    InvalidEncoding,

    /// The verification equation `R + A*k == B*s` does not hold.
    ///
    /// This is the only error that describes a well-formed but wrong input.
    #[error("signature verification failed")]
    InvalidSignature,

    /// An arithmetic failure inside the curve layer.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
