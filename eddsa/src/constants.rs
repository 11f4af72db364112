//! Sizes used by the Ed25519 signature scheme.

/// Size of the caller-supplied secret in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Size of a compressed public key in bytes.
///
/// A public key is an Edwards point: y in little-endian with the parity of x
/// stored in bit 255.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Size of a signature in bytes.
///
/// A signature consists of:
/// - A compressed point R (32 bytes)
/// - A little-endian scalar s (32 bytes)
/// Total: 64 bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// Size of a SHA-512 digest in bytes.
pub const HASH_LENGTH: usize = 64;
