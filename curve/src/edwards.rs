// Ed25519: -x^2 + y^2 = 1 + d*x^2*y^2 over GF(2^255 - 19), d = -121665/121666
// Base point B: y = 4/5, x even
// Order of B: l = 2^252 + 27742317777372353535851937790883648493, l*B = (0, 1)
// Cofactor: 8

use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::{EDWARDS_BASE_X, EDWARDS_BASE_Y, EDWARDS_D, SQRT_NEG_486664};
use crate::errors::CurveError;
use crate::field::{modsqrt, FieldElement};
use crate::group::Group;
use crate::montgomery::MontgomeryPoint;

/// Affine point on the twisted Edwards curve.
///
/// The curve equation is checked whenever a point is built, so every value
/// of this type lies on the curve. The identity is `(0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct EdwardsPoint {
    x: FieldElement,
    y: FieldElement,
}

impl EdwardsPoint {
    /// Create a point, failing with [`CurveError::InvalidPoint`] if it is off the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, CurveError> {
        if !Self::has_point(&x, &y) {
            return Err(CurveError::InvalidPoint);
        }
        Ok(EdwardsPoint { x, y })
    }

    /// Check `-x^2 + y^2 = 1 + d*x^2*y^2`.
    pub fn has_point(x: &FieldElement, y: &FieldElement) -> bool {
        let x2 = x.square();
        let y2 = y.square();
        let lhs = &y2 - &x2;
        let rhs = FieldElement::one() + &*EDWARDS_D * &x2 * &y2;
        lhs == rhs
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Recover the point with the given y and an even x.
    ///
    /// `x^2 = (y^2 - 1) / (d*y^2 + 1)`
    pub fn from_y(y: FieldElement) -> Result<Self, CurveError> {
        let y2 = y.square();
        let numerator = &y2 - FieldElement::one();
        let denominator = &*EDWARDS_D * &y2 + FieldElement::one();
        let x = modsqrt(&(numerator * denominator.invert()?))?;
        Self::new(x, y)
    }

    /// Compressed form: y in little-endian with bit 255 holding the parity of x.
    pub fn encode(&self) -> [u8; 32] {
        let mut bytes = self.y.to_bytes_le();
        if self.x.is_odd() {
            bytes[31] |= 0x80;
        } else {
            bytes[31] &= 0x7f;
        }
        bytes
    }

    /// Inverse of [`encode`](Self::encode).
    ///
    /// Rejects y values that are not reduced, y values with no matching x,
    /// and the odd sign bit on a point whose x is zero.
    pub fn decode(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        let parity = bytes[31] >> 7 == 1;
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes_le(&y_bytes)?;
        let point = Self::from_y(y).map_err(|_| CurveError::InvalidEncoding)?;
        if point.x.is_odd() == parity {
            return Ok(point);
        }
        if point.x.is_zero() {
            return Err(CurveError::InvalidEncoding);
        }
        Ok(point.negate())
    }

    /// Birational map to the Montgomery model.
    ///
    /// `u = (1 + y) / (1 - y)`, `v = u / x * sqrt(-486664)`. The identity maps
    /// to infinity and the 2-torsion point `(0, -1)` maps to `(0, 0)`.
    pub fn to_montgomery(&self) -> Result<MontgomeryPoint, CurveError> {
        if self.is_identity() {
            return Ok(MontgomeryPoint::Infinity);
        }
        if self.x.is_zero() {
            return MontgomeryPoint::new(FieldElement::zero(), FieldElement::zero());
        }

        let one = FieldElement::one();
        let u = (&one + &self.y) * (&one - &self.y).invert()?;
        let v = &u * self.x.invert()? * &*SQRT_NEG_486664;
        MontgomeryPoint::new(u, v)
    }
}

impl Group for EdwardsPoint {
    #[inline]
    fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
        }
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == FieldElement::one()
    }

    fn generator() -> Self {
        EdwardsPoint {
            x: EDWARDS_BASE_X.clone(),
            y: EDWARDS_BASE_Y.clone(),
        }
    }

    #[inline]
    fn double(&self) -> Result<Self, CurveError> {
        self.add(self)
    }

    /// Unified addition; complete on this curve, so no special cases.
    ///
    /// `x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)`
    /// `y3 = (y1*y2 + x1*x2) / (1 - d*x1*x2*y1*y2)`
    fn add(&self, other: &Self) -> Result<Self, CurveError> {
        let dxxyy = &*EDWARDS_D * &self.x * &other.x * &self.y * &other.y;
        let one = FieldElement::one();

        let x3 = (&self.x * &other.y + &self.y * &other.x) * (&one + &dxxyy).invert()?;
        let y3 = (&self.y * &other.y + &self.x * &other.x) * (&one - &dxxyy).invert()?;
        Self::new(x3, y3)
    }

    fn negate(&self) -> Self {
        EdwardsPoint {
            x: -&self.x,
            y: self.y.clone(),
        }
    }
}

impl TryFrom<[u8; 32]> for EdwardsPoint {
    type Error = CurveError;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        EdwardsPoint::decode(&bytes)
    }
}

impl From<EdwardsPoint> for [u8; 32] {
    fn from(point: EdwardsPoint) -> Self {
        point.encode()
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
