// secp256k1: y^2 = x^3 + 7 over GF(p)
// p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
// n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Curve cofactor: 1
// p = 3 mod 4, so square roots are a single exponentiation.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::field::PrimeField;

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// The point at infinity carries `x = y = 0`; `(0, 0)` does not satisfy the
/// curve equation, so it cannot collide with a real point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BigUint::ZERO,
        y: BigUint::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point.
    ///
    /// No curve membership check is performed; see
    /// [`CurveContext::is_on_curve`](crate::CurveContext::is_on_curve).
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Returns `true` when the y-coordinate is odd.
    #[inline]
    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }

    /// The curve constant `b` in `y^2 = x^3 + b`.
    #[inline]
    pub(crate) fn curve_b() -> BigUint {
        BigUint::from(7u8)
    }

    /// Right-hand side of the curve equation: `x^3 + 7 mod p`.
    pub(crate) fn curve_rhs(fp: &PrimeField, x: &BigUint) -> BigUint {
        let x3 = fp.mul(&fp.square(x), x);
        fp.add(&x3, &Self::curve_b())
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7, with both
    /// coordinates canonical.
    pub(crate) fn is_on_curve(&self, fp: &PrimeField) -> bool {
        if self.is_infinity {
            return true;
        }
        if !fp.contains(&self.x) || !fp.contains(&self.y) {
            return false;
        }

        fp.square(&self.y) == Self::curve_rhs(fp, &self.x)
    }

    /// Negate a point.
    pub(crate) fn negate(&self, fp: &PrimeField) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), fp.neg(&self.y))
    }

    /// Returns `true` if both coordinates are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::INFINITY
    }
}
