//! Naive multi-party signature aggregation.
//!
//! N private keys jointly produce one signature that verifies, with the
//! ordinary single-signer [`verify`](crate::verify), against the sum of their
//! public keys. Each participant contributes `k_i + e*d_i`, where the nonce
//! points and public points are summed before the shared challenge is
//! computed.
//!
//! # Security
//!
//! This is a plain linear combination, not MuSig. There is no nonce
//! commitment round and no key-aggregation coefficient, so it offers no
//! protection against rogue-key or key-cancellation attacks, and every
//! private key has to be present in one place. The parity of every
//! participant's nonce is corrected against the *aggregate* nonce point, not
//! the participant's own; this is what makes the sum verify, and it must not
//! be changed without changing the signature format.

use curve::{Affine, CurveContext, to_fixed_bytes};
use num_bigint::BigUint;
use tracing::debug;

use crate::constants::MSG_SIZE;
use crate::errors::SchnorrError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::nonce::{derive_nonce, normalize_nonce};
use crate::signatures::{Signature, hash_challenge};

/// One participant's share of an aggregate signature, before the challenge
/// is known.
struct Contribution<'a> {
    secret: &'a BigUint,
    k0: BigUint,
    nonce_point: Affine,
    public_point: Affine,
}

impl<'a> Contribution<'a> {
    fn new(
        ctx: &CurveContext,
        key: &'a SigningKey,
        message: &[u8; MSG_SIZE],
    ) -> Result<Self, SchnorrError> {
        let k0 = derive_nonce(ctx, &key.to_bytes(), message)?;
        Ok(Self {
            secret: key.scalar(),
            nonce_point: ctx.scalar_base_mult(&k0),
            public_point: ctx.scalar_base_mult(key.scalar()),
            k0,
        })
    }
}

/// Produces one signature from several signing keys over the same message.
///
/// Fails with [`SchnorrError::EmptyKeySet`] when `keys` is empty.
pub fn aggregate_signing_keys(
    ctx: &CurveContext,
    keys: &[SigningKey],
    message: &[u8; MSG_SIZE],
) -> Result<Signature, SchnorrError> {
    if keys.is_empty() {
        return Err(SchnorrError::EmptyKeySet);
    }

    let contributions = keys
        .iter()
        .map(|key| Contribution::new(ctx, key, message))
        .collect::<Result<Vec<_>, _>>()?;

    let (nonce_point, public_point) = contributions.iter().fold(
        (Affine::INFINITY, Affine::INFINITY),
        |(r, p), c| (ctx.add(&r, &c.nonce_point), ctx.add(&p, &c.public_point)),
    );

    let rx = to_fixed_bytes(&nonce_point.x);
    let e = hash_challenge(ctx, &rx, &public_point, message);

    let order = ctx.scalar_field();
    let s = contributions
        .iter()
        .map(|c| {
            let k = normalize_nonce(ctx, &c.k0, &nonce_point.y);
            order.add(&k, &order.mul(&e, c.secret))
        })
        .fold(BigUint::ZERO, |acc, share| order.add(&acc, &share));

    debug!(participants = keys.len(), "aggregated signature");

    Ok(Signature {
        r: nonce_point.x,
        s,
    })
}

/// Produces one signature from several raw private scalars over the same
/// message.
///
/// Every scalar is range checked as in [`sign`](crate::sign); the first
/// out-of-range key fails the whole aggregation with
/// [`SchnorrError::InvalidKeyRange`].
pub fn aggregate_signatures(
    ctx: &CurveContext,
    privatekeys: &[BigUint],
    message: &[u8; MSG_SIZE],
) -> Result<Signature, SchnorrError> {
    if privatekeys.is_empty() {
        return Err(SchnorrError::EmptyKeySet);
    }

    let keys = privatekeys
        .iter()
        .map(|d| SigningKey::from_scalar(ctx, d.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    aggregate_signing_keys(ctx, &keys, message)
}

/// Sums public keys into the aggregate key that an aggregate signature
/// verifies against.
///
/// Fails with [`SchnorrError::EmptyKeySet`] when `keys` is empty, and with
/// [`SchnorrError::NotOnCurve`] if the keys cancel out to the identity.
pub fn aggregate_verifying_keys(
    ctx: &CurveContext,
    keys: &[VerifyingKey],
) -> Result<VerifyingKey, SchnorrError> {
    if keys.is_empty() {
        return Err(SchnorrError::EmptyKeySet);
    }

    let point = keys
        .iter()
        .fold(Affine::INFINITY, |acc, key| ctx.add(&acc, key.point()));
    VerifyingKey::from_point(ctx, point)
}
