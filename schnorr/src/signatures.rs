//! Signature types and challenge hashing for the Schnorr signature scheme.

use core::fmt;

use curve::{Affine, COORDINATE_SIZE, CurveContext, marshal_compressed, to_fixed_bytes};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::{MSG_SIZE, SIG_SIZE};
use crate::errors::SchnorrError;
use crate::hash::hash_to_scalar;

/// A Schnorr signature consisting of a nonce x-coordinate and a scalar.
///
/// The signature is a pair `(r, s)` where:
/// - `r` is the x-coordinate of the nonce point R (must be below `P`)
/// - `s` is the response scalar (must be below `N`)
///
/// # Structure
///
/// The signature satisfies `R = s*G - e*Q`, where `e = H(r || Q || msg)` is
/// the Fiat-Shamir challenge and R's y-coordinate is a quadratic residue.
///
/// Parsing only checks the length; range checks happen during verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub(crate) r: BigUint,
    pub(crate) s: BigUint,
}

impl Signature {
    /// The nonce point's x-coordinate.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The response scalar.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Serializes the signature as `r || s`, each 32 bytes big-endian.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..COORDINATE_SIZE].copy_from_slice(&to_fixed_bytes(&self.r));
        out[COORDINATE_SIZE..].copy_from_slice(&to_fixed_bytes(&self.s));
        out
    }

    /// Parses a 64-byte `r || s` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SIG_SIZE {
            return Err(SchnorrError::InvalidLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            r: BigUint::from_bytes_be(&bytes[..COORDINATE_SIZE]),
            s: BigUint::from_bytes_be(&bytes[COORDINATE_SIZE..]),
        })
    }

    /// Parses a hex-encoded signature.
    pub fn from_hex(hex: &str) -> Result<Self, SchnorrError> {
        Self::from_bytes(&hex::decode(hex)?)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl From<[u8; SIG_SIZE]> for Signature {
    fn from(bytes: [u8; SIG_SIZE]) -> Self {
        Self {
            r: BigUint::from_bytes_be(&bytes[..COORDINATE_SIZE]),
            s: BigUint::from_bytes_be(&bytes[COORDINATE_SIZE..]),
        }
    }
}

/// Computes the Fiat-Shamir challenge `e = H(rx || compress(pk) || msg) mod N`.
///
/// `rx` is the 32-byte encoding of the nonce point's x-coordinate and `pk` the
/// (possibly aggregate) public point. Plain SHA-256 is used, without a
/// domain-separation tag.
pub(crate) fn hash_challenge(
    ctx: &CurveContext,
    rx: &[u8; COORDINATE_SIZE],
    pk: &Affine,
    message: &[u8; MSG_SIZE],
) -> BigUint {
    let pk = marshal_compressed(pk);
    hash_to_scalar(&[rx.as_slice(), pk.as_slice(), message.as_slice()], ctx.n())
}
