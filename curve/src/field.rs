//! Arithmetic in GF(q), q = 2^255 - 19.
//!
//! Elements are kept fully reduced in `[0, q)`. Inversion uses the extended
//! Euclidean algorithm and square roots use the closed form available for
//! primes with q = 5 (mod 8).

use core::fmt::{self, Display, Formatter, LowerHex};
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{ENCODED_LENGTH, FIELD_PRIME, SQRT_M1};
use crate::errors::CurveError;

// (q + 3) / 8
static SQRT_EXPONENT: Lazy<BigUint> = Lazy::new(|| (&*FIELD_PRIME + 3u32) >> 3);

/// An element of the prime field GF(2^255 - 19).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    pub fn one() -> Self {
        FieldElement(BigUint::one())
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_biguint(BigUint::from(value))
    }

    /// Reduces an arbitrary non-negative integer modulo q.
    pub fn from_biguint(value: BigUint) -> Self {
        if value < *FIELD_PRIME {
            FieldElement(value)
        } else {
            FieldElement(value % &*FIELD_PRIME)
        }
    }

    /// Decodes a little-endian integer, rejecting values that are not below q.
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        let value = BigUint::from_bytes_le(bytes);
        if value >= *FIELD_PRIME {
            return Err(CurveError::InvalidEncoding);
        }
        Ok(FieldElement(value))
    }

    /// Little-endian encoding, zero-padded to 32 bytes.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        let mut out = [0u8; ENCODED_LENGTH];
        let bytes = self.0.to_bytes_le();
        out[..bytes.len()].copy_from_slice(&bytes);
        out
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parity of the canonical representative, used as the sign bit of encodings.
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        FieldElement(self.0.modpow(exponent, &FIELD_PRIME))
    }

    /// Multiplicative inverse; zero has none.
    pub fn invert(&self) -> Result<Self, CurveError> {
        modinv(&BigInt::from(self.0.clone()), &FIELD_PRIME).map(FieldElement)
    }

    /// Even square root, see [`modsqrt`].
    pub fn sqrt(&self) -> Result<Self, CurveError> {
        modsqrt(self)
    }
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(|a|, |b|)` and `a*x + b*y = g`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut last_remainder, mut remainder) = (a.abs(), b.abs());
    let (mut x, mut last_x) = (BigInt::zero(), BigInt::one());
    let (mut y, mut last_y) = (BigInt::one(), BigInt::zero());

    while !remainder.is_zero() {
        let quotient = &last_remainder / &remainder;
        let next_remainder = &last_remainder % &remainder;
        last_remainder = core::mem::replace(&mut remainder, next_remainder);

        let next_x = &last_x - &quotient * &x;
        last_x = core::mem::replace(&mut x, next_x);
        let next_y = &last_y - &quotient * &y;
        last_y = core::mem::replace(&mut y, next_y);
    }

    if a.is_negative() {
        last_x = -last_x;
    }
    if b.is_negative() {
        last_y = -last_y;
    }
    (last_remainder, last_x, last_y)
}

/// Inverse of `a` modulo `m`, as the representative in `[0, m)`.
///
/// Fails with [`CurveError::NotInvertible`] when `gcd(a, m) != 1`.
pub fn modinv(a: &BigInt, m: &BigUint) -> Result<BigUint, CurveError> {
    if m.is_zero() {
        return Err(CurveError::NotInvertible);
    }
    let modulus = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(a, &modulus);
    if !g.is_one() {
        return Err(CurveError::NotInvertible);
    }
    let reduced = ((x % &modulus) + &modulus) % &modulus;
    Ok(reduced.magnitude().clone())
}

/// Square root modulo q = 2^255 - 19.
///
/// As q = 5 (mod 8), a root of `x2` is either `x2^((q+3)/8)` or that value
/// times `sqrt(-1)`. The even one of the two roots is returned.
pub fn modsqrt(x2: &FieldElement) -> Result<FieldElement, CurveError> {
    let mut x = x2.pow(&SQRT_EXPONENT);
    if x.square() != *x2 {
        x = x * &*SQRT_M1;
        if x.square() != *x2 {
            return Err(CurveError::NotSquare);
        }
    }
    if x.is_odd() {
        x = -x;
    }
    Ok(x)
}

impl<'a> Add<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::from_biguint(&self.0 + &rhs.0)
    }
}

impl<'a> Sub<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::from_biguint(&self.0 + &*FIELD_PRIME - &rhs.0)
    }
}

impl<'a> Mul<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::from_biguint(&self.0 * &rhs.0)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.0.is_zero() {
            return FieldElement::zero();
        }
        FieldElement(&*FIELD_PRIME - &self.0)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

// Pass-by-value variants of the reference implementations above.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, rhs: FieldElement) -> FieldElement {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $imp<&'a FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, rhs: &'a FieldElement) -> FieldElement {
                (&self).$method(rhs)
            }
        }

        impl $imp<FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, rhs: FieldElement) -> FieldElement {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl TryFrom<[u8; 32]> for FieldElement {
    type Error = CurveError;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        FieldElement::from_bytes_le(&bytes)
    }
}

impl From<FieldElement> for [u8; 32] {
    fn from(element: FieldElement) -> Self {
        element.to_bytes_le()
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_extended_gcd_identity() {
        let (g, x, y) = extended_gcd(&int(240), &int(46));
        assert_eq!(g, int(2));
        assert_eq!(int(240) * x + int(46) * y, g);
    }

    #[test]
    fn test_modinv_small() {
        assert_eq!(modinv(&int(3), &BigUint::from(7u32)), Ok(BigUint::from(5u32)));
        assert_eq!(modinv(&int(-3), &BigUint::from(7u32)), Ok(BigUint::from(2u32)));
    }

    #[test]
    fn test_modinv_not_coprime() {
        assert_eq!(
            modinv(&int(6), &BigUint::from(9u32)),
            Err(CurveError::NotInvertible)
        );
        assert_eq!(
            modinv(&int(0), &FIELD_PRIME),
            Err(CurveError::NotInvertible)
        );
    }

    #[test]
    fn test_invert_roundtrip() {
        let a = FieldElement::from_u64(121666);
        let inv = a.invert().expect("nonzero");
        assert_eq!(a * inv, FieldElement::one());
        assert_eq!(FieldElement::zero().invert(), Err(CurveError::NotInvertible));
    }

    #[test]
    fn test_sub_wraps() {
        let a = FieldElement::from_u64(3);
        let b = FieldElement::from_u64(5);
        assert_eq!(&a - &b, -FieldElement::from_u64(2));
    }

    #[test]
    fn test_modsqrt_returns_even_root() {
        for v in [4u64, 9, 16, 25, 486662, 1 << 40] {
            let square = FieldElement::from_u64(v).square();
            let root = modsqrt(&square).expect("square");
            assert!(!root.is_odd());
            assert_eq!(root.square(), square);
        }
    }

    #[test]
    fn test_modsqrt_uses_sqrt_m1_branch() {
        // -1 is a square because q = 1 (mod 4); its root needs the i branch.
        let minus_one = -FieldElement::one();
        let root = modsqrt(&minus_one).expect("square");
        assert_eq!(root.square(), minus_one);
        assert!(!root.is_odd());
    }

    #[test]
    fn test_modsqrt_non_residue() {
        // 2 is a non-residue since q = 5 (mod 8).
        assert_eq!(
            modsqrt(&FieldElement::from_u64(2)),
            Err(CurveError::NotSquare)
        );
    }

    #[test]
    fn test_bytes_roundtrip_and_canonical() {
        let a = FieldElement::from_u64(0x0102_0304);
        let bytes = a.to_bytes_le();
        assert_eq!(&bytes[..4], &[4, 3, 2, 1]);
        assert_eq!(FieldElement::from_bytes_le(&bytes), Ok(a));

        let q_bytes = {
            let mut out = [0u8; 32];
            out.copy_from_slice(&FIELD_PRIME.to_bytes_le());
            out
        };
        assert_eq!(
            FieldElement::from_bytes_le(&q_bytes),
            Err(CurveError::InvalidEncoding)
        );
    }

    #[test]
    fn test_try_from_rejects_unreduced() {
        assert_eq!(
            FieldElement::try_from([0xffu8; 32]),
            Err(CurveError::InvalidEncoding)
        );
        let bytes: [u8; 32] = FieldElement::from_u64(9).into();
        assert_eq!(bytes[0], 9);
    }
}
