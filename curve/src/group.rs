use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::CurveError;

/// Group law shared by the Edwards and Montgomery models.
///
/// Every operation that divides returns a `Result`: results are rebuilt
/// through the validating constructors, so a wrong intermediate value
/// surfaces as an error instead of an off-curve point.
pub trait Group: Sized + Clone + PartialEq {
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Result<Self, CurveError>;
    fn add(&self, other: &Self) -> Result<Self, CurveError>;
    fn negate(&self) -> Self;

    /// Left-to-right double-and-add, starting below the most significant bit.
    ///
    /// `scalar` is not reduced: any non-negative integer is accepted.
    fn scalar_mul(&self, scalar: &BigUint) -> Result<Self, CurveError> {
        if scalar.is_zero() {
            return Ok(Self::identity());
        }

        let mut result = self.clone();
        for bit in (0..scalar.bits() - 1).rev() {
            result = result.double()?;
            if scalar.bit(bit) {
                result = result.add(self)?;
            }
        }

        Ok(result)
    }

    fn mul_u64(&self, n: u64) -> Result<Self, CurveError> {
        self.scalar_mul(&BigUint::from(n))
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[BigUint]) -> Result<Self, CurveError> {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result.add(&point.scalar_mul(scalar)?)?;
        }
        Ok(result)
    }
}
