//! The secp256k1 group, bundled as an immutable context value.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::affine::Affine;
use crate::field::{jacobi, PrimeField};
use crate::projective::Projective;

// p = 2^256 - 2^32 - 977
#[rustfmt::skip]
const FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

#[rustfmt::skip]
const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

#[rustfmt::skip]
const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac,
    0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9,
    0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

#[rustfmt::skip]
const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65,
    0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19,
    0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Curve parameters and group operations for secp256k1.
///
/// Build it once with [`CurveContext::secp256k1`] and pass it by reference;
/// it is never mutated, so a single context can be shared across threads.
/// The generator's window table is precomputed at construction.
#[derive(Clone, Debug)]
pub struct CurveContext {
    base: PrimeField,
    scalar: PrimeField,
    generator: Affine,
    generator_table: Vec<Projective>,
}

impl CurveContext {
    /// The secp256k1 parameters.
    pub fn secp256k1() -> Self {
        let base = PrimeField::new(BigUint::from_bytes_be(&FIELD_PRIME));
        let scalar = PrimeField::new(BigUint::from_bytes_be(&GROUP_ORDER));
        let generator = Affine::new(
            BigUint::from_bytes_be(&GENERATOR_X),
            BigUint::from_bytes_be(&GENERATOR_Y),
        );
        let generator_table = Projective::from_affine(&generator).window_table(&base);

        Self {
            base,
            scalar,
            generator,
            generator_table,
        }
    }

    /// Field prime `P`.
    #[inline]
    pub fn p(&self) -> &BigUint {
        self.base.modulus()
    }

    /// Group order `N`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        self.scalar.modulus()
    }

    #[inline]
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// Arithmetic modulo `P`.
    #[inline]
    pub fn base_field(&self) -> &PrimeField {
        &self.base
    }

    /// Arithmetic modulo `N`.
    #[inline]
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalar
    }

    /// Returns `true` if the point is the identity or satisfies
    /// `y^2 = x^3 + 7` with both coordinates below `P`.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        point.is_on_curve(&self.base)
    }

    pub fn add(&self, a: &Affine, b: &Affine) -> Affine {
        Projective::from_affine(a)
            .add(&Projective::from_affine(b), &self.base)
            .to_affine(&self.base)
    }

    pub fn negate(&self, point: &Affine) -> Affine {
        point.negate(&self.base)
    }

    /// Computes `k * point`. The scalar is reduced modulo `N` first.
    pub fn scalar_mult(&self, point: &Affine, k: &BigUint) -> Affine {
        if point.is_infinity() {
            return Affine::INFINITY;
        }
        let k = self.scalar.reduce(k);
        if k.is_zero() {
            return Affine::INFINITY;
        }

        let table = Projective::from_affine(point).window_table(&self.base);
        Projective::mul_windowed(&table, &k, &self.base).to_affine(&self.base)
    }

    /// Computes `k * G` using the precomputed generator table.
    pub fn scalar_base_mult(&self, k: &BigUint) -> Affine {
        let k = self.scalar.reduce(k);
        Projective::mul_windowed(&self.generator_table, &k, &self.base).to_affine(&self.base)
    }

    /// Jacobi symbol of `a` with respect to the field prime `P`.
    #[inline]
    pub fn jacobi(&self, a: &BigUint) -> i8 {
        jacobi(a, self.p())
    }

    /// Samples a scalar uniformly from `[1, N-1]`.
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        loop {
            let bytes: [u8; 32] = rng.random();
            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && self.scalar.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for CurveContext {
    fn default() -> Self {
        Self::secp256k1()
    }
}
