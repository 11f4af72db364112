//! Arithmetic for Curve25519 in its twisted Edwards and Montgomery forms.
//!
//! This crate provides the prime field GF(2^255 - 19), affine points on both
//! curve models with their group laws and compressed encodings, the
//! birational maps between the models, and helpers for scalars and random
//! sampling. The curve parameters are fixed to the values in `constants`.
//!
//! Arithmetic is variable-time and built on arbitrary-precision integers.

pub mod constants;
mod edwards;
mod errors;
mod field;
mod group;
mod montgomery;
mod random;
pub mod scalar;

pub use edwards::EdwardsPoint;
pub use errors::CurveError;
pub use field::{extended_gcd, modinv, modsqrt, FieldElement};
pub use group::Group;
pub use montgomery::{AffineCoordinates, MontgomeryPoint};
pub use random::RandomField;
pub use scalar::Scalar;
