// Curve25519: y^2 = x^3 + 486662*x^2 + x over GF(2^255 - 19)
// Base point: x = 9, y even
// Birationally equivalent to Ed25519 through
//   x_ed = u / v * sqrt(-486664),  y_ed = (u - 1) / (u + 1)

use core::fmt::{self, Display, Formatter};

use crate::constants::{MONTGOMERY_A, MONTGOMERY_BASE_X, MONTGOMERY_BASE_Y, SQRT_NEG_486664};
use crate::edwards::EdwardsPoint;
use crate::errors::CurveError;
use crate::field::{modsqrt, FieldElement};
use crate::group::Group;

/// Point on the Montgomery curve, or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MontgomeryPoint {
    /// The identity element; it has no coordinates.
    Infinity,
    /// A finite point whose coordinates satisfy the curve equation.
    Affine(AffineCoordinates),
}

/// Coordinates of a finite Montgomery point. Only built by
/// [`MontgomeryPoint::new`], which checks the curve equation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineCoordinates {
    x: FieldElement,
    y: FieldElement,
}

impl AffineCoordinates {
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }
}

fn curve_a() -> FieldElement {
    FieldElement::from_u64(MONTGOMERY_A)
}

// x^3 + A*x^2 + x
fn curve_rhs(x: &FieldElement) -> FieldElement {
    let x2 = x.square();
    &x2 * x + curve_a() * &x2 + x
}

impl MontgomeryPoint {
    /// Create a finite point, failing with [`CurveError::InvalidPoint`] if it is off the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, CurveError> {
        if !Self::has_point(&x, &y) {
            return Err(CurveError::InvalidPoint);
        }
        Ok(MontgomeryPoint::Affine(AffineCoordinates { x, y }))
    }

    /// Check `y^2 = x^3 + 486662*x^2 + x`.
    pub fn has_point(x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == curve_rhs(x)
    }

    /// Recover the point with the given x and an even y.
    pub fn from_x(x: FieldElement) -> Result<Self, CurveError> {
        let y = modsqrt(&curve_rhs(&x))?;
        Self::new(x, y)
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, MontgomeryPoint::Infinity)
    }

    pub fn coordinates(&self) -> Option<&AffineCoordinates> {
        match self {
            MontgomeryPoint::Infinity => None,
            MontgomeryPoint::Affine(coords) => Some(coords),
        }
    }

    /// X25519 encoding: x in little-endian, 32 bytes.
    ///
    /// Infinity encodes as u = 0, as in RFC 7748.
    pub fn encode_x(&self) -> [u8; 32] {
        match self {
            MontgomeryPoint::Infinity => [0u8; 32],
            MontgomeryPoint::Affine(coords) => coords.x.to_bytes_le(),
        }
    }

    /// Decode an x-coordinate, with bit 255 selecting the parity of y.
    pub fn decode(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        let parity = bytes[31] >> 7 == 1;
        let mut x_bytes = *bytes;
        x_bytes[31] &= 0x7f;

        let x = FieldElement::from_bytes_le(&x_bytes)?;
        let point = Self::from_x(x).map_err(|_| CurveError::InvalidEncoding)?;
        let MontgomeryPoint::Affine(coords) = &point else {
            return Err(CurveError::InvalidEncoding);
        };
        if coords.y.is_odd() == parity {
            return Ok(point);
        }
        if coords.y.is_zero() {
            return Err(CurveError::InvalidEncoding);
        }
        Ok(point.negate())
    }

    /// Birational map to the twisted Edwards model.
    ///
    /// Infinity maps to the identity `(0, 1)` and `(0, 0)` maps to `(0, -1)`.
    /// Points with u = -1 have no affine image and fail with
    /// [`CurveError::NotInvertible`].
    pub fn to_edwards(&self) -> Result<EdwardsPoint, CurveError> {
        let MontgomeryPoint::Affine(AffineCoordinates { x: u, y: v }) = self else {
            return Ok(EdwardsPoint::identity());
        };
        if u.is_zero() {
            return EdwardsPoint::new(FieldElement::zero(), -FieldElement::one());
        }

        let one = FieldElement::one();
        let x = u * v.invert()? * &*SQRT_NEG_486664;
        let y = (u - &one) * (u + &one).invert()?;
        EdwardsPoint::new(x, y)
    }
}

impl Group for MontgomeryPoint {
    #[inline]
    fn identity() -> Self {
        MontgomeryPoint::Infinity
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    fn generator() -> Self {
        MontgomeryPoint::Affine(AffineCoordinates {
            x: FieldElement::from_u64(MONTGOMERY_BASE_X),
            y: MONTGOMERY_BASE_Y.clone(),
        })
    }

    /// Tangent-line doubling.
    ///
    /// The tangent at (x, y) has slope `l = (3x^2 + 2Ax + 1) / 2y`, and the
    /// third intersection gives `x3 = l^2 - 2x - A`.
    fn double(&self) -> Result<Self, CurveError> {
        let MontgomeryPoint::Affine(AffineCoordinates { x, y }) = self else {
            return Ok(MontgomeryPoint::Infinity);
        };

        // If y = 0, then 2P = O
        if y.is_zero() {
            return Ok(MontgomeryPoint::Infinity);
        }

        let a = curve_a();
        let three_x2 = FieldElement::from_u64(3) * x.square();
        let two_a_x = FieldElement::from_u64(2) * &a * x;
        let numerator = three_x2 + two_a_x + FieldElement::one();
        let slope = numerator * (y + y).invert()?;

        let x3 = slope.square() - x - x - &a;
        let y3 = slope * (x - &x3) - y;
        Self::new(x3, y3)
    }

    /// Secant-line addition: `x3 = l^2 - x1 - x2 - A` with `l = (y2 - y1) / (x2 - x1)`.
    fn add(&self, other: &Self) -> Result<Self, CurveError> {
        let (p, q) = match (self, other) {
            (MontgomeryPoint::Infinity, _) => return Ok(other.clone()),
            (_, MontgomeryPoint::Infinity) => return Ok(self.clone()),
            (MontgomeryPoint::Affine(p), MontgomeryPoint::Affine(q)) => (p, q),
        };

        if p.x == q.x {
            if (&p.y + &q.y).is_zero() {
                // opposite points
                return Ok(MontgomeryPoint::Infinity);
            }
            return self.double();
        }

        let slope = (&q.y - &p.y) * (&q.x - &p.x).invert()?;
        let x3 = slope.square() - &p.x - &q.x - curve_a();
        let y3 = slope * (&p.x - &x3) - &p.y;
        Self::new(x3, y3)
    }

    fn negate(&self) -> Self {
        match self {
            MontgomeryPoint::Infinity => MontgomeryPoint::Infinity,
            MontgomeryPoint::Affine(coords) => MontgomeryPoint::Affine(AffineCoordinates {
                x: coords.x.clone(),
                y: -&coords.y,
            }),
        }
    }
}

impl Display for MontgomeryPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MontgomeryPoint::Infinity => f.write_str("INFINITY"),
            MontgomeryPoint::Affine(coords) => write!(f, "({},{})", coords.x, coords.y),
        }
    }
}
