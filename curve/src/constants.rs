//! Fixed parameters of Curve25519 and its twisted Edwards form.
//!
//! Multi-word values are stored as little-endian `u64` limbs and lifted into
//! big integers once, on first use.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::field::FieldElement;

/// Size in bits of every encoded field element and scalar.
pub const BITS: usize = 256;

/// Size in bytes of every encoded field element, point and scalar.
pub const ENCODED_LENGTH: usize = BITS / 8;

/// Coefficient `A` of the Montgomery curve `y^2 = x^3 + A*x^2 + x`.
pub const MONTGOMERY_A: u64 = 486662;

/// x-coordinate of the Montgomery base point.
pub const MONTGOMERY_BASE_X: u64 = 9;

// q = 2^255 - 19
const FIELD_PRIME_LIMBS: [u64; 4] = [
    0xffffffffffffffed,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7fffffffffffffff,
];

// l = 2^252 + 27742317777372353535851937790883648493
const GROUP_ORDER_LIMBS: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];

// d = -121665 / 121666 mod q
const EDWARDS_D_LIMBS: [u64; 4] = [
    0x75eb4dca135978a3,
    0x00700a4d4141d8ab,
    0x8cc740797779e898,
    0x52036cee2b6ffe73,
];

// i = 2^((q - 1) / 4) mod q, so that i^2 = -1
const SQRT_M1_LIMBS: [u64; 4] = [
    0xc4ee1b274a0ea0b0,
    0x2f431806ad2fe478,
    0x2b4d00993dfbd7a7,
    0x2b8324804fc1df0b,
];

// Even square root of -486664 mod q, the scale factor of the birational maps
const SQRT_NEG_486664_LIMBS: [u64; 4] = [
    0xcc6e04aaff457e06,
    0xc5a1d3d14b7d1a82,
    0xd27b08dc03fc4f7e,
    0x0f26edf460a006bb,
];

// Edwards base point B, with y = 4/5 and the even x
const EDWARDS_BASE_X_LIMBS: [u64; 4] = [
    0xc9562d608f25d51a,
    0x692cc7609525a7b2,
    0xc0a4e231fdd6dc5c,
    0x216936d3cd6e53fe,
];
const EDWARDS_BASE_Y_LIMBS: [u64; 4] = [
    0x6666666666666658,
    0x6666666666666666,
    0x6666666666666666,
    0x6666666666666666,
];

// Even y-coordinate of the Montgomery base point u = 9
const MONTGOMERY_BASE_Y_LIMBS: [u64; 4] = [
    0xd6163a5d81312c14,
    0x6dc2b28192839e4d,
    0x1fe122d388b72eb3,
    0x5f51e65e475f794b,
];

/// The field prime q = 2^255 - 19.
pub static FIELD_PRIME: Lazy<BigUint> = Lazy::new(|| from_limbs(FIELD_PRIME_LIMBS));

/// Order l of the base point on both curve models.
pub static GROUP_ORDER: Lazy<BigUint> = Lazy::new(|| from_limbs(GROUP_ORDER_LIMBS));

pub(crate) static EDWARDS_D: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(EDWARDS_D_LIMBS)));

pub(crate) static SQRT_M1: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(SQRT_M1_LIMBS)));

pub(crate) static SQRT_NEG_486664: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(SQRT_NEG_486664_LIMBS)));

pub(crate) static EDWARDS_BASE_X: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(EDWARDS_BASE_X_LIMBS)));

pub(crate) static EDWARDS_BASE_Y: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(EDWARDS_BASE_Y_LIMBS)));

pub(crate) static MONTGOMERY_BASE_Y: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from_biguint(from_limbs(MONTGOMERY_BASE_Y_LIMBS)));

fn from_limbs(limbs: [u64; 4]) -> BigUint {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_field_prime() {
        let expected = (BigUint::one() << 255u32) - 19u32;
        assert_eq!(*FIELD_PRIME, expected);
    }

    #[test]
    fn test_group_order() {
        let tail: BigUint = "27742317777372353535851937790883648493"
            .parse()
            .expect("decimal literal");
        let expected = (BigUint::one() << 252u32) + tail;
        assert_eq!(*GROUP_ORDER, expected);
    }

    #[test]
    fn test_edwards_d() {
        // d * 121666 == -121665
        let lhs = EDWARDS_D.clone() * FieldElement::from_u64(121666);
        assert_eq!(lhs, -FieldElement::from_u64(121665));
    }

    #[test]
    fn test_sqrt_m1() {
        let i = SQRT_M1.clone();
        assert_eq!(i.square(), -FieldElement::one());
    }

    #[test]
    fn test_sqrt_neg_486664() {
        let s = SQRT_NEG_486664.clone();
        assert!(!s.is_odd());
        assert_eq!(s.square(), -FieldElement::from_u64(486664));
    }

    #[test]
    fn test_edwards_base_y_is_four_fifths() {
        let y = EDWARDS_BASE_Y.clone();
        assert_eq!(y * FieldElement::from_u64(5), FieldElement::from_u64(4));
    }
}
