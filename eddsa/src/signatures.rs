//! Signature type, hashing, and the sign/verify protocol.

use curve::{EdwardsPoint, Group, Scalar, scalar};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use tracing::debug;

use crate::constants::{HASH_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::errors::SignatureError;
use crate::keys::{ExpandedSecret, public_key_from_scalar};

/// An Ed25519 signature: the compressed commitment `R` followed by the
/// little-endian scalar `s`.
///
/// The signature satisfies `B * s == R + A * k` where
/// `k = H(R || A || msg) mod l`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    /// Splits a 64-byte signature, failing with [`SignatureError::InvalidLength`]
    /// for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength {
                what: "signature",
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(Self { r, s })
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Compressed commitment point R.
    pub fn r_bytes(&self) -> &[u8; 32] {
        &self.r
    }

    /// Response scalar s, little-endian.
    pub fn s_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Signature::from_bytes(bytes)
    }
}

/// SHA-512 of `message`.
pub fn hash(message: &[u8]) -> [u8; HASH_LENGTH] {
    let digest = Sha512::digest(message);
    let mut out = [0u8; HASH_LENGTH];
    out.copy_from_slice(&digest);
    out
}

/// SHA-512 over the concatenation of `parts`, read as a little-endian integer.
pub fn hash_int(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    scalar::from_bytes_le(&hasher.finalize())
}

/// Signs `message` with the key derived from `secret`.
///
/// The nonce `r = H(prefix || message)` is used unreduced as the multiplier
/// of the base point; `k` and `s` are reduced modulo the group order. When
/// `public_key` is `None` it is recomputed from the secret.
pub fn sign(
    message: &[u8],
    secret: &[u8; SECRET_KEY_LENGTH],
    public_key: Option<&[u8; PUBLIC_KEY_LENGTH]>,
) -> Result<Signature, SignatureError> {
    let expanded = ExpandedSecret::from_secret(secret);
    let public_key = match public_key {
        Some(bytes) => *bytes,
        None => public_key_from_scalar(&expanded.scalar)?,
    };

    let r = hash_int(&[&expanded.prefix[..], message]);
    let r_point = EdwardsPoint::generator().scalar_mul(&r)?.encode();
    let k = scalar::reduce(&hash_int(&[&r_point[..], &public_key[..], message]));
    let s = scalar::reduce(&(r + &expanded.scalar * k));

    Ok(Signature {
        r: r_point,
        s: scalar::to_canonical_bytes(&s),
    })
}

/// Verifies `signature` over `message` against the compressed `public_key`.
///
/// Lengths are checked first, then both points are decoded, then the
/// verification equation is evaluated. Any failure is final.
pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignatureError> {
    let signature = Signature::from_bytes(signature)?;
    let public_key: [u8; PUBLIC_KEY_LENGTH] =
        public_key
            .try_into()
            .map_err(|_| SignatureError::InvalidLength {
                what: "public key",
                expected: PUBLIC_KEY_LENGTH,
                actual: public_key.len(),
            })?;

    let pk_point = EdwardsPoint::decode(&public_key).map_err(|err| {
        debug!(%err, "rejecting public key");
        SignatureError::InvalidEncoding
    })?;
    verify_decoded(message, &signature, &public_key, &pk_point)
}

pub(crate) fn verify_decoded(
    message: &[u8],
    signature: &Signature,
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    pk_point: &EdwardsPoint,
) -> Result<(), SignatureError> {
    let r_point = EdwardsPoint::decode(&signature.r).map_err(|err| {
        debug!(%err, "rejecting signature commitment R");
        SignatureError::InvalidEncoding
    })?;

    let k = scalar::reduce(&hash_int(&[&signature.r[..], &public_key[..], message]));
    let s = scalar::from_bytes_le(&signature.s);

    let lhs = r_point.add(&pk_point.scalar_mul(&k)?)?;
    let rhs = EdwardsPoint::generator().scalar_mul(&s)?;
    if lhs != rhs {
        debug!("verification equation does not hold");
        return Err(SignatureError::InvalidSignature);
    }

    Ok(())
}
