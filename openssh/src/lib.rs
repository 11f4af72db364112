//! Reader for Ed25519 keys in OpenSSH formats.
//!
//! Two inputs are understood:
//! - public key lines, `ssh-ed25519 <base64 blob> [comment]`
//! - PEM-armored `openssh-key-v1` private key containers
//!
//! Every field is read through a bounds-checked cursor, and the redundant
//! copies the format carries (the checkint pair, the public key stored three
//! times, the padding sequence) are cross-checked. Unencrypted containers can
//! be verified against the `eddsa` key derivation with
//! [`OpenSshPrivateKey::check_derivation`].
//!
//! # Example
//!
//! ```
//! use openssh::OpenSshPublicKey;
//!
//! let line = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIFFaaCX6tPM0VRiaR2KoRgOewxfbMDMHuMB/Oom6bYMt me@host";
//! let key = OpenSshPublicKey::from_line(line).expect("parse");
//! assert_eq!(key.comment(), Some("me@host"));
//! assert_eq!(key.fingerprint(), "SHA256:jzc+/WQkR9rBzje1yDJijIkpm8RGoEBNYrdL1RfVYws");
//! ```
//!
//! Encrypted containers are parsed but their private section is kept opaque.

mod armor;
mod errors;
mod private;
mod public;
mod reader;

pub use armor::{BEGIN_MARKER, END_MARKER, decode_pem, encode_pem};
pub use errors::KeyError;
pub use private::{Ed25519Keypair, MAGIC, NONE, OpenSshPrivateKey};
pub use public::{ALGORITHM, OpenSshPublicKey};
