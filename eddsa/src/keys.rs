//! Key derivation, signing keys and verifying keys.

use core::fmt;

use curve::{EdwardsPoint, Group, Scalar, scalar};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::errors::SignatureError;
use crate::signatures::{Signature, hash, sign, verify_decoded};

/// Clamps 32 little-endian bytes into an X25519/Ed25519 scalar (RFC 7748).
///
/// Bits 0, 1, 2 and 255 are cleared and bit 254 is set, so the result is a
/// multiple of the cofactor 8 in `[2^254, 2^255)`.
pub fn decode_scalar(bytes: &[u8; 32]) -> Scalar {
    let mut clamped = *bytes;
    clamped[0] &= 248;
    clamped[31] &= 127;
    clamped[31] |= 64;
    scalar::from_bytes_le(&clamped)
}

/// The two halves of `SHA-512(secret)`: the clamped signing scalar and the
/// prefix that seeds nonce generation.
pub(crate) struct ExpandedSecret {
    pub(crate) scalar: Scalar,
    pub(crate) prefix: [u8; 32],
}

impl ExpandedSecret {
    pub(crate) fn from_secret(secret: &[u8; SECRET_KEY_LENGTH]) -> Self {
        let digest = hash(secret);
        let mut scalar_bytes = [0u8; 32];
        let mut prefix = [0u8; 32];
        scalar_bytes.copy_from_slice(&digest[..32]);
        prefix.copy_from_slice(&digest[32..]);

        Self {
            scalar: decode_scalar(&scalar_bytes),
            prefix,
        }
    }
}

/// The clamped scalar derived from `secret`.
pub fn private_key(secret: &[u8; SECRET_KEY_LENGTH]) -> Scalar {
    ExpandedSecret::from_secret(secret).scalar
}

/// The compressed public key `encode(B * private_key(secret))`.
pub fn public_key(secret: &[u8; SECRET_KEY_LENGTH]) -> Result<[u8; PUBLIC_KEY_LENGTH], SignatureError> {
    public_key_from_scalar(&private_key(secret))
}

pub(crate) fn public_key_from_scalar(
    private_scalar: &Scalar,
) -> Result<[u8; PUBLIC_KEY_LENGTH], SignatureError> {
    let point = EdwardsPoint::generator().scalar_mul(private_scalar)?;
    Ok(point.encode())
}

/// A secret signing key for creating Ed25519 signatures.
///
/// Only the 32-byte secret is stored; the scalar, nonce prefix and public key
/// are derived from it on every call.
///
/// # Example
///
/// ```
/// use eddsa::SigningKey;
///
/// let signing_key = SigningKey::from_bytes(&[7u8; 32]);
/// let signature = signing_key.sign(b"hello").expect("signing failed");
/// signing_key
///     .verifying_key()
///     .expect("derivation failed")
///     .verify(b"hello", &signature)
///     .expect("verification failed");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    secret: [u8; SECRET_KEY_LENGTH],
}

/// A public verifying key for checking Ed25519 signatures.
///
/// Holds both the 32-byte encoding and the decoded Edwards point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct VerifyingKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
    point: EdwardsPoint,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            secret: rng.random(),
        }
    }

    pub fn from_bytes(secret: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self { secret: *secret }
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.secret
    }

    /// The clamped scalar `a` with `A = B * a`.
    pub fn private_scalar(&self) -> Scalar {
        private_key(&self.secret)
    }

    /// Derives the public verifying key from this signing key.
    pub fn verifying_key(&self) -> Result<VerifyingKey, SignatureError> {
        let bytes = public_key(&self.secret)?;
        VerifyingKey::from_bytes(&bytes)
    }

    /// Signs a message using this signing key.
    ///
    /// Signing is deterministic: the nonce is derived from the secret and the
    /// message, so the same inputs always produce the same signature.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, SignatureError> {
        sign(msg, &self.secret, None)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl VerifyingKey {
    /// Decodes a compressed public key.
    ///
    /// Fails with [`SignatureError::InvalidLength`] if `bytes` is not 32 bytes
    /// long and [`SignatureError::InvalidEncoding`] if it is not a point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| SignatureError::InvalidLength {
                what: "public key",
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })?;
        let point = EdwardsPoint::decode(&bytes).map_err(|_| SignatureError::InvalidEncoding)?;
        Ok(Self { bytes, point })
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    pub fn point(&self) -> &EdwardsPoint {
        &self.point
    }

    /// Verifies a signature on a message using this verifying key.
    ///
    /// Returns `Ok(())` if `B * s == R + A * k` with `k = H(R || A || msg) mod l`.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<(), SignatureError> {
        verify_decoded(msg, sig, &self.bytes, &self.point)
    }
}

impl TryFrom<&SigningKey> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(sk: &SigningKey) -> Result<Self, Self::Error> {
        sk.verifying_key()
    }
}

impl TryFrom<[u8; 32]> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        VerifyingKey::from_bytes(&bytes)
    }
}

impl From<VerifyingKey> for [u8; 32] {
    fn from(vk: VerifyingKey) -> Self {
        vk.bytes
    }
}
