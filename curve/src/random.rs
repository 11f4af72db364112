use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::FieldElement;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Distribution<FieldElement> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        loop {
            let mut bytes: [u8; 32] = rng.random();
            bytes[31] &= 0x7f;

            // Rejects the 19 values in [q, 2^255).
            if let Ok(element) = FieldElement::from_bytes_le(&bytes) {
                return element;
            }
        }
    }
}

impl RandomField for FieldElement {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_elements_invert() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let a = FieldElement::random(&mut rng);
            match a.invert() {
                Ok(inv) => assert_eq!(a * inv, FieldElement::one()),
                Err(err) => {
                    assert!(a.is_zero());
                    assert_eq!(err, CurveError::NotInvertible);
                }
            }
        }
    }

    #[test]
    fn test_random_squares_have_roots() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            let a = FieldElement::random(&mut rng);
            let root = a.square().sqrt().expect("square");
            assert!(root == a || root == -&a);
        }
    }
}
