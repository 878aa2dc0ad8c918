//! Deterministic nonce derivation.
//!
//! The nonce is `SHA-256(d || m) mod N`. There is no tag and no public key in
//! the hash input, so this is not the BIP-340 nonce function.

use curve::CurveContext;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::{MSG_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::hash::hash_to_scalar;

/// Derives the per-message nonce `k0` for private key bytes `d`.
///
/// Fails with [`SchnorrError::ZeroNonce`] in the (negligible) case where the
/// digest reduces to zero.
pub fn derive_nonce(
    ctx: &CurveContext,
    d: &[u8; SK_SIZE],
    message: &[u8; MSG_SIZE],
) -> Result<BigUint, SchnorrError> {
    let k0 = hash_to_scalar(&[d.as_slice(), message.as_slice()], ctx.n());
    if k0.is_zero() {
        return Err(SchnorrError::ZeroNonce);
    }
    Ok(k0)
}

/// Applies the parity convention to a nonce: keeps `k0` when `ry` is a
/// quadratic residue modulo `P`, otherwise returns `N - k0` so that the
/// effective nonce point has a residue y-coordinate.
pub(crate) fn normalize_nonce(ctx: &CurveContext, k0: &BigUint, ry: &BigUint) -> BigUint {
    if ctx.jacobi(ry) == 1 {
        k0.clone()
    } else {
        ctx.scalar_field().neg(k0)
    }
}
