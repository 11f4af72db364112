//! The `openssh-key-v1` private key container.
//!
//! Layout after the magic header:
//!
//! ```text
//! string  ciphername
//! string  kdfname
//! string  kdfoptions
//! uint32  number of keys (big-endian)
//! string  public key blob
//! string  private section
//! ```
//!
//! and, when `ciphername` is `none`, the private section reads:
//!
//! ```text
//! uint32  checkint (little-endian)
//! uint32  checkint (repeated)
//! string  "ssh-ed25519"
//! string  public point (32 bytes)
//! string  secret || public point (64 bytes)
//! string  comment
//! byte[]  padding 1, 2, 3, ...
//! ```

use core::fmt;

use curve::{EdwardsPoint, Group};
use eddsa::constants::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use eddsa::{SigningKey, private_key, public_key};
use tracing::debug;

use crate::armor;
use crate::errors::KeyError;
use crate::public::{OpenSshPublicKey, check_algorithm};
use crate::reader::Reader;

/// Magic bytes opening every container.
pub const MAGIC: &[u8] = b"openssh-key-v1\0";

/// Cipher and KDF name of an unencrypted container.
pub const NONE: &str = "none";

/// A parsed `openssh-key-v1` container holding one Ed25519 key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSshPrivateKey {
    cipher_name: String,
    kdf_name: String,
    kdf_options: Vec<u8>,
    public_key: OpenSshPublicKey,
    section: Section,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Section {
    Plain(Ed25519Keypair),
    Encrypted(Vec<u8>),
}

/// The decoded private section of an unencrypted container.
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519Keypair {
    checkint: u32,
    secret: [u8; SECRET_KEY_LENGTH],
    public_bytes: [u8; PUBLIC_KEY_LENGTH],
    comment: String,
    padding_len: usize,
}

impl OpenSshPrivateKey {
    /// Parses a PEM-armored container as written by `ssh-keygen`.
    pub fn from_pem(text: &str) -> Result<Self, KeyError> {
        Self::from_bytes(&armor::decode_pem(text)?)
    }

    /// Parses the binary container, i.e. the base64-decoded PEM body.
    pub fn from_bytes(data: &[u8]) -> Result<Self, KeyError> {
        let mut reader = Reader::new(data);
        if !reader.read_literal(MAGIC) {
            return Err(KeyError::UnsupportedFormat);
        }

        let cipher_name = text_field(reader.read_string("ciphername")?, "ciphername")?;
        let kdf_name = text_field(reader.read_string("kdfname")?, "kdfname")?;
        let kdf_options = reader.read_string("kdfoptions")?.to_vec();
        debug!(cipher = %cipher_name, kdf = %kdf_name, "reading openssh-key-v1 container");

        // Any count but one is rejected; only counts above one name a format
        // this reader does not support.
        match reader.read_u32_be("number of keys")? {
            1 => {}
            0 => return Err(KeyError::CorruptContainer("container holds no keys")),
            n => return Err(KeyError::UnsupportedMultiKey(n)),
        }

        let public_key = OpenSshPublicKey::from_blob(reader.read_string("public key blob")?)?;
        let private_blob = reader.read_string("private section")?;
        reader.finish("trailing bytes after private section")?;

        let section = if cipher_name == NONE {
            if kdf_name != NONE || !kdf_options.is_empty() {
                return Err(KeyError::CorruptContainer(
                    "key derivation set on an unencrypted container",
                ));
            }
            Section::Plain(Ed25519Keypair::parse(private_blob, &public_key)?)
        } else {
            debug!(len = private_blob.len(), "keeping encrypted private section opaque");
            Section::Encrypted(private_blob.to_vec())
        };

        Ok(Self {
            cipher_name,
            kdf_name,
            kdf_options,
            public_key,
            section,
        })
    }

    pub fn cipher_name(&self) -> &str {
        &self.cipher_name
    }

    pub fn kdf_name(&self) -> &str {
        &self.kdf_name
    }

    pub fn kdf_options(&self) -> &[u8] {
        &self.kdf_options
    }

    pub fn public_key(&self) -> &OpenSshPublicKey {
        &self.public_key
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self.section, Section::Encrypted(_))
    }

    /// The still-encrypted private section, if the container is encrypted.
    pub fn encrypted_section(&self) -> Option<&[u8]> {
        match &self.section {
            Section::Encrypted(blob) => Some(blob),
            Section::Plain(_) => None,
        }
    }

    /// The decoded private section, or [`KeyError::Encrypted`].
    pub fn keypair(&self) -> Result<&Ed25519Keypair, KeyError> {
        match &self.section {
            Section::Plain(keypair) => Ok(keypair),
            Section::Encrypted(_) => Err(KeyError::Encrypted(self.cipher_name.clone())),
        }
    }

    /// Recomputes the public key from the stored secret and compares it with
    /// the container, both as bytes and as a point.
    pub fn check_derivation(&self) -> Result<(), KeyError> {
        let keypair = self.keypair()?;

        let derived = public_key(&keypair.secret)?;
        if &derived != self.public_key.key_bytes() {
            return Err(KeyError::CorruptContainer(
                "secret does not derive the stored public key",
            ));
        }

        let point = EdwardsPoint::generator().scalar_mul(&private_key(&keypair.secret))?;
        if &point != self.public_key.point() {
            return Err(KeyError::CorruptContainer(
                "private scalar does not match the public point",
            ));
        }
        Ok(())
    }

    /// A signing key for the stored secret.
    pub fn signing_key(&self) -> Result<SigningKey, KeyError> {
        Ok(SigningKey::from_bytes(&self.keypair()?.secret))
    }
}

impl Ed25519Keypair {
    fn parse(blob: &[u8], public_key: &OpenSshPublicKey) -> Result<Self, KeyError> {
        let mut reader = Reader::new(blob);

        let checkint = reader.read_u32_le("checkint")?;
        if reader.read_u32_le("checkint")? != checkint {
            return Err(KeyError::CorruptContainer("checkint mismatch"));
        }

        check_algorithm(reader.read_string("private key algorithm")?)?;

        let public_bytes: [u8; PUBLIC_KEY_LENGTH] = reader
            .read_string("embedded public key")?
            .try_into()
            .map_err(|_| KeyError::CorruptContainer("embedded public key length"))?;
        if &public_bytes != public_key.key_bytes() {
            return Err(KeyError::CorruptContainer(
                "embedded public key differs from the public key blob",
            ));
        }

        let keypair = reader.read_string("private key")?;
        if keypair.len() != SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH {
            return Err(KeyError::CorruptContainer("private key length"));
        }
        let (secret_half, public_half) = keypair.split_at(SECRET_KEY_LENGTH);
        if public_half != &public_bytes[..] {
            return Err(KeyError::CorruptContainer(
                "private key carries a different public key",
            ));
        }
        let mut secret = [0u8; SECRET_KEY_LENGTH];
        secret.copy_from_slice(secret_half);

        let comment = String::from_utf8_lossy(reader.read_string("comment")?).into_owned();

        let padding = reader.rest();
        let in_sequence = padding
            .iter()
            .enumerate()
            .all(|(i, &byte)| usize::from(byte) == i + 1);
        if !in_sequence {
            return Err(KeyError::CorruptContainer("padding"));
        }
        debug!(checkint, padding = padding.len(), "decoded private section");

        Ok(Self {
            checkint,
            secret,
            public_bytes,
            comment,
            padding_len: padding.len(),
        })
    }

    pub fn checkint(&self) -> u32 {
        self.checkint
    }

    pub fn secret(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.secret
    }

    pub fn public_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_bytes
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn padding_len(&self) -> usize {
        self.padding_len
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("checkint", &format_args!("{:#010x}", self.checkint))
            .field("comment", &self.comment)
            .finish_non_exhaustive()
    }
}

fn text_field(bytes: &[u8], what: &'static str) -> Result<String, KeyError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| KeyError::CorruptContainer(what))
}
