//! The `ssh-ed25519` public key blob and the one-line `.pub` format.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD as BASE64, STANDARD_NO_PAD};
use curve::EdwardsPoint;
use eddsa::VerifyingKey;
use eddsa::constants::PUBLIC_KEY_LENGTH;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::errors::KeyError;
use crate::reader::Reader;

/// Key type name used in blobs and key lines.
pub const ALGORITHM: &str = "ssh-ed25519";

/// An Ed25519 public key in OpenSSH form.
///
/// Keeps the raw blob so that fingerprints and container comparisons use the
/// exact bytes that were read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSshPublicKey {
    blob: Vec<u8>,
    key_bytes: [u8; PUBLIC_KEY_LENGTH],
    point: EdwardsPoint,
    comment: Option<String>,
}

impl OpenSshPublicKey {
    /// Decodes a public key blob: the algorithm string followed by the
    /// 32-byte compressed point, with nothing after it.
    pub fn from_blob(blob: &[u8]) -> Result<Self, KeyError> {
        let mut reader = Reader::new(blob);

        let algorithm = reader.read_string("public key algorithm")?;
        check_algorithm(algorithm)?;

        let key = reader.read_string("public key point")?;
        let key_bytes: [u8; PUBLIC_KEY_LENGTH] = key
            .try_into()
            .map_err(|_| KeyError::CorruptContainer("public key point length"))?;
        reader.finish("trailing bytes after public key")?;

        let point = EdwardsPoint::decode(&key_bytes)?;
        trace!(point = %point, "decoded public key blob");

        Ok(Self {
            blob: blob.to_vec(),
            key_bytes,
            point,
            comment: None,
        })
    }

    /// Parses a line of the form `ssh-ed25519 <base64 blob> [comment]`.
    pub fn from_line(line: &str) -> Result<Self, KeyError> {
        let mut fields = line.trim().splitn(3, ' ');
        let algorithm = fields.next().unwrap_or_default();
        if algorithm != ALGORITHM {
            return Err(KeyError::UnsupportedAlgorithm(algorithm.to_owned()));
        }
        let encoded = fields
            .next()
            .filter(|field| !field.is_empty())
            .ok_or(KeyError::UnsupportedFormat)?;
        let comment = fields
            .next()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
            .map(str::to_owned);

        let blob = BASE64.decode(encoded)?;
        let mut key = Self::from_blob(&blob)?;
        key.comment = comment;
        Ok(key)
    }

    /// Renders the key back into `.pub` line form.
    pub fn to_line(&self) -> String {
        let encoded = BASE64.encode(&self.blob);
        match &self.comment {
            Some(comment) => format!("{ALGORITHM} {encoded} {comment}"),
            None => format!("{ALGORITHM} {encoded}"),
        }
    }

    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// The compressed point, as used by [`eddsa::verify`].
    pub fn key_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.key_bytes
    }

    pub fn point(&self) -> &EdwardsPoint {
        &self.point
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// `SHA256:` followed by the unpadded base64 SHA-256 of the blob, as
    /// printed by `ssh-keygen -l`.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.blob);
        format!("SHA256:{}", STANDARD_NO_PAD.encode(digest))
    }

    pub fn verifying_key(&self) -> Result<VerifyingKey, KeyError> {
        Ok(VerifyingKey::from_bytes(&self.key_bytes)?)
    }
}

pub(crate) fn check_algorithm(algorithm: &[u8]) -> Result<(), KeyError> {
    if algorithm != ALGORITHM.as_bytes() {
        return Err(KeyError::UnsupportedAlgorithm(
            String::from_utf8_lossy(algorithm).into_owned(),
        ));
    }
    Ok(())
}
