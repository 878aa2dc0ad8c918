use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::Affine;
use crate::field::PrimeField;

/// Projective point on the elliptic curve in Jacobian coordinates.
/// Represents a point (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented as (0:1:0).
///
/// Addition and doubling avoid field inversions; only
/// [`Projective::to_affine`] pays for one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projective {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl Projective {
    /// The point at infinity (identity element): (0:1:0)
    pub fn infinity() -> Self {
        Projective {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }

        Projective {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self, fp: &PrimeField) -> Affine {
        let Some(z_inv) = fp.inverse(&self.z) else {
            return Affine::INFINITY;
        };

        let z_inv2 = fp.square(&z_inv);
        let z_inv3 = fp.mul(&z_inv2, &z_inv);
        Affine::new(fp.mul(&self.x, &z_inv2), fp.mul(&self.y, &z_inv3))
    }

    /// Point doubling for `a = 0` curves.
    ///
    /// S = 4XY^2, M = 3X^2, X' = M^2 - 2S, Y' = M(S - X') - 8Y^4, Z' = 2YZ
    pub fn double(&self, fp: &PrimeField) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity();
        }

        let yy = fp.square(&self.y);
        let s = fp.mul(&BigUint::from(4u8), &fp.mul(&self.x, &yy));
        let m = fp.mul(&BigUint::from(3u8), &fp.square(&self.x));

        let x3 = fp.sub(&fp.square(&m), &fp.add(&s, &s));
        let yyyy8 = fp.mul(&BigUint::from(8u8), &fp.square(&yy));
        let y3 = fp.sub(&fp.mul(&m, &fp.sub(&s, &x3)), &yyyy8);
        let z3 = fp.mul(&BigUint::from(2u8), &fp.mul(&self.y, &self.z));

        Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// General point addition.
    ///
    /// Falls back to doubling when both inputs are the same point and returns
    /// the identity when they are inverses of each other.
    pub fn add(&self, other: &Self, fp: &PrimeField) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1z1 = fp.square(&self.z);
        let z2z2 = fp.square(&other.z);
        let u1 = fp.mul(&self.x, &z2z2);
        let u2 = fp.mul(&other.x, &z1z1);
        let s1 = fp.mul(&self.y, &fp.mul(&other.z, &z2z2));
        let s2 = fp.mul(&other.y, &fp.mul(&self.z, &z1z1));

        let h = fp.sub(&u2, &u1);
        let r = fp.sub(&s2, &s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(fp);
            }
            return Self::infinity();
        }

        let hh = fp.square(&h);
        let hhh = fp.mul(&h, &hh);
        let v = fp.mul(&u1, &hh);

        let x3 = fp.sub(&fp.sub(&fp.square(&r), &hhh), &fp.add(&v, &v));
        let y3 = fp.sub(&fp.mul(&r, &fp.sub(&v, &x3)), &fp.mul(&s1, &hhh));
        let z3 = fp.mul(&fp.mul(&self.z, &other.z), &h);

        Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Build the window table `[O, P, 2P, ..., 15P]` used by
    /// [`Projective::mul_windowed`].
    pub fn window_table(&self, fp: &PrimeField) -> Vec<Self> {
        let mut table = Vec::with_capacity(16);
        table.push(Self::infinity());
        table.push(self.clone());

        for i in 2..16 {
            let next = if i % 2 == 0 {
                table[i / 2].double(fp)
            } else {
                table[i - 1].add(&table[1], fp)
            };
            table.push(next);
        }

        table
    }

    /// Fixed 4-bit window scalar multiplication against a prepared table.
    ///
    /// The scalar is consumed most significant nibble first.
    pub fn mul_windowed(table: &[Self], scalar: &BigUint, fp: &PrimeField) -> Self {
        debug_assert_eq!(table.len(), 16);

        let mut result = Self::infinity();
        let bytes = scalar.to_bytes_be();

        for byte in bytes {
            for window in [byte >> 4, byte & 0x0f] {
                result = result.double(fp).double(fp).double(fp).double(fp);
                if window != 0 {
                    result = result.add(&table[window as usize], fp);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveContext;

    #[test]
    fn test_affine_roundtrip() {
        let ctx = CurveContext::secp256k1();
        let g = ctx.generator();
        let p = Projective::from_affine(g);
        assert_eq!(&p.to_affine(ctx.base_field()), g);
        assert_eq!(
            Projective::infinity().to_affine(ctx.base_field()),
            Affine::INFINITY
        );
    }

    #[test]
    fn test_double_matches_add() {
        let ctx = CurveContext::secp256k1();
        let fp = ctx.base_field();
        let g = Projective::from_affine(ctx.generator());

        let doubled = g.double(fp).to_affine(fp);
        let added = g.add(&g, fp).to_affine(fp);
        assert_eq!(doubled, added);
        assert!(ctx.is_on_curve(&doubled));
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let ctx = CurveContext::secp256k1();
        let fp = ctx.base_field();
        let g = ctx.generator();
        let neg = Projective::from_affine(&ctx.negate(g));

        assert!(Projective::from_affine(g).add(&neg, fp).is_infinity());
    }

    #[test]
    fn test_window_table() {
        let ctx = CurveContext::secp256k1();
        let fp = ctx.base_field();
        let g = Projective::from_affine(ctx.generator());
        let table = g.window_table(fp);

        let mut acc = Projective::infinity();
        for entry in &table {
            assert_eq!(entry.to_affine(fp), acc.to_affine(fp));
            acc = acc.add(&g, fp);
        }
    }

    #[test]
    fn test_windowed_mul_small() {
        let ctx = CurveContext::secp256k1();
        let fp = ctx.base_field();
        let g = Projective::from_affine(ctx.generator());
        let table = g.window_table(fp);

        // 5*G = G + G + G + G + G
        let expected = (0..5)
            .fold(Projective::infinity(), |acc, _| acc.add(&g, fp))
            .to_affine(fp);
        let result = Projective::mul_windowed(&table, &BigUint::from(5u8), fp).to_affine(fp);
        assert_eq!(result, expected);

        let zero = Projective::mul_windowed(&table, &BigUint::zero(), fp);
        assert!(zero.is_infinity());
    }
}
