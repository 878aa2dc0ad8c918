//! Signing and verifying keys for the Schnorr signature scheme.

use core::fmt;

use curve::{Affine, CurveContext, marshal_compressed, to_fixed_bytes, unmarshal_compressed};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{MSG_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::nonce::{derive_nonce, normalize_nonce};
use crate::signatures::{Signature, hash_challenge};

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a scalar `d` with `1 <= d <= N-1`. It must be kept
/// secret; its `Debug` output is redacted.
///
/// # Example
///
/// ```
/// use curve::CurveContext;
/// use schnorr::SigningKey;
///
/// let ctx = CurveContext::secp256k1();
/// let signing_key = SigningKey::random(&ctx, &mut rand::rng());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// The verifying key is the point `d*G`, exchanged as a 33-byte compressed
/// encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Wraps a private scalar, checking that it lies in `[1, N-1]`.
    pub fn from_scalar(ctx: &CurveContext, scalar: BigUint) -> Result<Self, SchnorrError> {
        if !is_valid_scalar(ctx, &scalar) {
            return Err(SchnorrError::InvalidKeyRange);
        }
        Ok(Self { scalar })
    }

    /// Parses a 32-byte big-endian private key.
    pub fn from_bytes(ctx: &CurveContext, bytes: &[u8]) -> Result<Self, SchnorrError> {
        if bytes.len() != SK_SIZE {
            return Err(SchnorrError::InvalidLength {
                expected: SK_SIZE,
                actual: bytes.len(),
            });
        }
        Self::from_scalar(ctx, BigUint::from_bytes_be(bytes))
    }

    /// Parses a hex-encoded 32-byte private key.
    pub fn from_hex(ctx: &CurveContext, hex: &str) -> Result<Self, SchnorrError> {
        Self::from_bytes(ctx, &hex::decode(hex)?)
    }

    /// Generates a random signing key using the provided random number generator.
    pub fn random<R: Rng + ?Sized>(ctx: &CurveContext, rng: &mut R) -> Self {
        Self {
            scalar: ctx.random_scalar(rng),
        }
    }

    /// The private scalar `d`.
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Serializes the key as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        to_fixed_bytes(&self.scalar)
    }

    /// Derives the public verifying key `d*G`.
    pub fn verifying_key(&self, ctx: &CurveContext) -> VerifyingKey {
        VerifyingKey {
            point: ctx.scalar_base_mult(&self.scalar),
        }
    }

    /// Signs a 32-byte message digest.
    ///
    /// 1. Derive the nonce `k0 = H(d || msg) mod N` and `R = k0*G`
    /// 2. Use `k = k0` if R's y is a quadratic residue, `k = N - k0` otherwise
    /// 3. Compute the challenge `e = H(Rx || compress(d*G) || msg) mod N`
    /// 4. Return `(Rx, s = k + e*d mod N)`
    ///
    /// Signing is deterministic: the same key and message always give the
    /// same signature.
    pub fn sign(
        &self,
        ctx: &CurveContext,
        message: &[u8; MSG_SIZE],
    ) -> Result<Signature, SchnorrError> {
        if !is_valid_scalar(ctx, &self.scalar) {
            return Err(SchnorrError::InvalidKeyRange);
        }

        let k0 = derive_nonce(ctx, &self.to_bytes(), message)?;
        let nonce_point = ctx.scalar_base_mult(&k0);
        let k = normalize_nonce(ctx, &k0, &nonce_point.y);

        let pk = ctx.scalar_base_mult(&self.scalar);
        let rx = to_fixed_bytes(&nonce_point.x);
        let e = hash_challenge(ctx, &rx, &pk, message);
        trace!(rx = %hex::encode(rx), e = %e, "computed challenge");

        let order = ctx.scalar_field();
        let s = order.add(&k, &order.mul(&e, &self.scalar));

        Ok(Signature {
            r: nonce_point.x,
            s,
        })
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

impl VerifyingKey {
    /// Wraps a curve point, checking that it lies on the curve.
    pub fn from_point(ctx: &CurveContext, point: Affine) -> Result<Self, SchnorrError> {
        if point.is_infinity() || !ctx.is_on_curve(&point) {
            return Err(SchnorrError::NotOnCurve);
        }
        Ok(Self { point })
    }

    /// Decodes a 33-byte compressed public key.
    pub fn from_bytes(ctx: &CurveContext, bytes: &[u8]) -> Result<Self, SchnorrError> {
        let point = unmarshal_compressed(ctx, bytes)?;
        Self::from_point(ctx, point)
    }

    /// Decodes a hex-encoded compressed public key.
    pub fn from_hex(ctx: &CurveContext, hex: &str) -> Result<Self, SchnorrError> {
        Self::from_bytes(ctx, &hex::decode(hex)?)
    }

    /// The public point.
    pub fn point(&self) -> &Affine {
        &self.point
    }

    /// Serializes the key in compressed form.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        marshal_compressed(&self.point)
    }

    /// Verifies a signature on a 32-byte message digest.
    ///
    /// Reconstructs `R = s*G - e*Q` with `e = H(r || compress(Q) || msg)` and
    /// accepts only if R is not the identity, R's y-coordinate is a quadratic
    /// residue, and R's x-coordinate equals `r`.
    ///
    /// Returns `Ok(())` for a valid signature; every rejection is an `Err`
    /// naming the check that failed.
    pub fn verify(
        &self,
        ctx: &CurveContext,
        message: &[u8; MSG_SIZE],
        signature: &Signature,
    ) -> Result<(), SchnorrError> {
        let result = self.check(ctx, message, signature);
        if let Err(err) = &result {
            debug!(reason = %err, "signature rejected");
        }
        result
    }

    fn check(
        &self,
        ctx: &CurveContext,
        message: &[u8; MSG_SIZE],
        signature: &Signature,
    ) -> Result<(), SchnorrError> {
        if self.point.is_infinity() || !ctx.is_on_curve(&self.point) {
            return Err(SchnorrError::NotOnCurve);
        }
        if &signature.r >= ctx.p() {
            return Err(SchnorrError::ROutOfRange);
        }
        if &signature.s >= ctx.n() {
            return Err(SchnorrError::SOutOfRange);
        }

        let rx = to_fixed_bytes(&signature.r);
        let e = hash_challenge(ctx, &rx, &self.point, message);

        let sg = ctx.scalar_base_mult(&signature.s);
        let neg_eq = ctx.negate(&ctx.scalar_mult(&self.point, &e));
        let nonce_point = ctx.add(&sg, &neg_eq);

        if nonce_point.is_zero() {
            return Err(SchnorrError::ZeroPoint);
        }
        if ctx.jacobi(&nonce_point.y) != 1 {
            return Err(SchnorrError::JacobiMismatch);
        }
        if nonce_point.x != signature.r {
            return Err(SchnorrError::RValueMismatch);
        }

        Ok(())
    }
}

/// Signs `message` with the raw private scalar `privatekey`.
///
/// Fails with [`SchnorrError::InvalidKeyRange`] unless `1 <= privatekey <= N-1`.
pub fn sign(
    ctx: &CurveContext,
    privatekey: &BigUint,
    message: &[u8; MSG_SIZE],
) -> Result<Signature, SchnorrError> {
    SigningKey::from_scalar(ctx, privatekey.clone())?.sign(ctx, message)
}

/// Verifies a 64-byte signature against a 33-byte compressed public key.
pub fn verify(
    ctx: &CurveContext,
    publickey: &[u8; PK_SIZE],
    message: &[u8; MSG_SIZE],
    signature: &[u8; SIG_SIZE],
) -> Result<(), SchnorrError> {
    let key = VerifyingKey::from_bytes(ctx, publickey).inspect_err(|err| {
        debug!(reason = %err, "public key rejected");
    })?;
    key.verify(ctx, message, &Signature::from(*signature))
}

#[inline]
pub(crate) fn is_valid_scalar(ctx: &CurveContext, scalar: &BigUint) -> bool {
    !scalar.is_zero() && scalar < ctx.n()
}
