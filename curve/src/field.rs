//! Prime-field arithmetic over arbitrary-precision integers.
//!
//! Both the secp256k1 base field (modulus `P`) and its scalar field (modulus
//! `N`) are expressed as a [`PrimeField`]. Elements are plain [`BigUint`]
//! values kept in canonical form, i.e. strictly below the modulus.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A prime field `Z/pZ` described by its modulus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Creates a field with the given prime modulus.
    ///
    /// Primality is not checked; [`PrimeField::inverse`] relies on it.
    pub fn new(modulus: BigUint) -> Self {
        Self { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns `true` if `a` is a canonical element of the field.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Computes `a - b`, wrapping around the modulus.
    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.modulus;
        (a + (&self.modulus - b)) % &self.modulus
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Additive inverse. Zero maps to zero.
    #[inline]
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.modulus)
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^{p-2}`.
    ///
    /// Returns `None` for zero.
    pub fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        let a = a % &self.modulus;
        if a.is_zero() {
            return None;
        }
        let exp = &self.modulus - BigUint::from(2u8);
        Some(self.pow(&a, &exp))
    }

    /// Square root for moduli congruent to 3 mod 4: `a^{(p+1)/4}`.
    ///
    /// Returns `None` when `a` is not a quadratic residue or the modulus is
    /// not of the required form.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        if low_u64(&self.modulus) & 3 != 3 {
            return None;
        }
        let a = a % &self.modulus;
        let exp = (&self.modulus + BigUint::one()) >> 2;
        let root = self.pow(&a, &exp);
        (self.square(&root) == a).then_some(root)
    }
}

/// Jacobi symbol `(a/n)` for odd positive `n`.
///
/// Returns `1`, `-1`, or `0` (when `gcd(a, n) != 1`). For prime `n` this is
/// the Legendre symbol, i.e. `1` exactly when `a` is a non-zero square.
pub fn jacobi(a: &BigUint, n: &BigUint) -> i8 {
    debug_assert!(low_u64(n) & 1 == 1, "jacobi symbol needs an odd modulus");

    let mut a = a % n;
    let mut n = n.clone();
    let mut t = 1i8;

    while !a.is_zero() {
        while !a.bit(0) {
            a >>= 1;
            let r = low_u64(&n) & 7;
            if r == 3 || r == 5 {
                t = -t;
            }
        }
        core::mem::swap(&mut a, &mut n);
        if low_u64(&a) & 3 == 3 && low_u64(&n) & 3 == 3 {
            t = -t;
        }
        a %= &n;
    }

    if n.is_one() {
        t
    } else {
        0
    }
}

/// Least significant 64 bits of `a`.
#[inline]
fn low_u64(a: &BigUint) -> u64 {
    a.iter_u64_digits().next().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> PrimeField {
        // 1019 = 3 mod 4
        PrimeField::new(BigUint::from(1019u32))
    }

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_add_sub_wrap() {
        let f = small_field();
        assert_eq!(f.add(&big(1000), &big(30)), big(11));
        assert_eq!(f.sub(&big(5), &big(7)), big(1017));
        assert_eq!(f.sub(&big(7), &big(5)), big(2));
    }

    #[test]
    fn test_negation() {
        let f = small_field();
        assert_eq!(f.neg(&BigUint::zero()), BigUint::zero());
        assert_eq!(f.add(&f.neg(&big(77)), &big(77)), BigUint::zero());
    }

    #[test]
    fn test_inverse() {
        let f = small_field();
        for a in [1u64, 2, 3, 500, 1018] {
            let inv = f.inverse(&big(a)).expect("non-zero has an inverse");
            assert_eq!(f.mul(&inv, &big(a)), BigUint::one());
        }
        assert!(f.inverse(&BigUint::zero()).is_none());
    }

    #[test]
    fn test_sqrt() {
        let f = small_field();
        for a in 1u64..50 {
            let sq = f.square(&big(a));
            let root = f.sqrt(&sq).expect("square has a root");
            assert_eq!(f.square(&root), sq);
        }
        // -1 is a non-residue when p = 3 mod 4
        assert!(f.sqrt(&big(1018)).is_none());
    }

    #[test]
    fn test_sqrt_rejects_unsupported_modulus() {
        // 13 = 1 mod 4
        let f = PrimeField::new(big(13));
        assert!(f.sqrt(&big(4)).is_none());
    }

    #[test]
    fn test_jacobi_matches_euler_criterion() {
        let f = small_field();
        let half = (f.modulus() - BigUint::one()) >> 1;
        for a in 0u64..200 {
            let euler = f.pow(&big(a), &half);
            let expected = if a % 1019 == 0 {
                0
            } else if euler.is_one() {
                1
            } else {
                -1
            };
            assert_eq!(jacobi(&big(a), f.modulus()), expected, "a = {a}");
        }
    }

    #[test]
    fn test_jacobi_composite() {
        // (2/15) = (2/3)(2/5) = (-1)(-1) = 1, (3/15) = 0
        assert_eq!(jacobi(&big(2), &big(15)), 1);
        assert_eq!(jacobi(&big(3), &big(15)), 0);
        assert_eq!(jacobi(&big(7), &big(15)), -1);
    }
}
