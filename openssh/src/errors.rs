//! Error types for OpenSSH key parsing.

use curve::CurveError;
use eddsa::SignatureError;
use thiserror::Error;

/// Errors raised while reading OpenSSH public key lines and private key
/// containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The input is not a PEM-armored `openssh-key-v1` container, or a public
    /// key line is missing its base64 field.
    #[error("unsupported key format")]
    UnsupportedFormat,

    /// The container announces a key count other than one.
    #[error("containers with {0} keys are not supported")]
    UnsupportedMultiKey(u32),

    /// A structural check failed: a read ran past the end of a field, the
    /// checkints differ, the padding is wrong, or the embedded copies of the
    /// public key disagree.
    #[error("corrupt key container: {0}")]
    CorruptContainer(&'static str),

    /// The key is not `ssh-ed25519`.
    #[error("unsupported key algorithm {0:?}")]
    UnsupportedAlgorithm(String),

    /// The private section is encrypted with the named cipher.
    #[error("private key is encrypted with {0}")]
    Encrypted(String),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The public point does not decode.
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
