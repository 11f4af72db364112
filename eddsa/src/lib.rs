//! Ed25519 signatures over the twisted Edwards form of Curve25519.
//!
//! This library implements the EdDSA signature scheme using:
//! - The Edwards curve `-x^2 + y^2 = 1 + d*x^2*y^2` over `GF(2^255 - 19)`
//! - SHA-512 for key expansion, nonce derivation and the challenge hash
//! - Plain byte slices as messages
//!
//! # Overview
//!
//! Keys are 32-byte secrets. `SHA-512(secret)` is split in two: the first half
//! is clamped into the signing scalar `a`, the second half seeds the nonce.
//! Signing is deterministic and needs no random number generator.
//!
//! # Example
//!
//! ```
//! use eddsa::{SigningKey, verify};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Generate a signing key
//! let mut rng = StdRng::seed_from_u64(7);
//! let signing_key = SigningKey::random(&mut rng);
//!
//! // Derive the corresponding verifying key
//! let verifying_key = signing_key.verifying_key().expect("derivation failed");
//!
//! // Sign the message
//! let message = b"attack at dawn";
//! let signature = signing_key.sign(message).expect("signing failed");
//!
//! // Verify through the key type or through the byte-level function
//! verifying_key.verify(message, &signature).expect("verification failed");
//! verify(message, &signature.to_bytes(), verifying_key.as_bytes()).expect("verification failed");
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is big-integer based and not constant time
//! - Protect the 32-byte secret; every derived value follows from it
//! - Verification does not range-check `s` and does not reject small-order keys

pub mod constants;
mod errors;
mod keys;
mod signatures;


pub use errors::SignatureError;
pub use keys::{SigningKey, VerifyingKey, decode_scalar, private_key, public_key};
pub use signatures::{Signature, hash, hash_int, sign, verify};
