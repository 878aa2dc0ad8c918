//! Schnorr signatures over the secp256k1 elliptic curve.
//!
//! This library implements a Schnorr signature scheme using:
//! - The secp256k1 curve from the [`curve`] crate
//! - SHA-256 for nonce derivation and the Fiat-Shamir challenge
//! - 32-byte message digests, 33-byte compressed public keys, and 64-byte
//!   `r || s` signatures
//!
//! # Overview
//!
//! A signature on digest `m` under key `d` is `(r, s)` where `r` is the
//! x-coordinate of the nonce point `R = k*G` and `s = k + e*d mod N` with
//! `e = H(r || compress(d*G) || m)`. The nonce is derived deterministically
//! from `d` and `m`, and negated when needed so that R's y-coordinate is a
//! quadratic residue modulo `P`.
//!
//! Several keys can also produce one naive aggregate signature; see
//! [`aggregate_signatures`].
//!
//! # Example
//!
//! ```
//! use curve::CurveContext;
//! use schnorr::{SigningKey, hash_message};
//!
//! let ctx = CurveContext::secp256k1();
//! let signing_key = SigningKey::random(&ctx, &mut rand::rng());
//! let verifying_key = signing_key.verifying_key(&ctx);
//!
//! let message = hash_message(b"hello schnorr");
//! let signature = signing_key.sign(&ctx, &message).expect("signing failed");
//!
//! assert!(verifying_key.verify(&ctx, &message, &signature).is_ok());
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is variable-time; do not use where timing side channels matter
//! - Nonce derivation and the challenge use untagged SHA-256, unlike BIP-340
//! - Aggregation is not a secure multi-signature protocol

mod aggregate;
mod constants;
mod errors;
mod hash;
mod keys;
mod nonce;
mod signatures;


pub use aggregate::{aggregate_signatures, aggregate_signing_keys, aggregate_verifying_keys};
pub use constants::{MSG_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::SchnorrError;
pub use hash::hash_message;
pub use keys::{SigningKey, VerifyingKey, sign, verify};
pub use nonce::derive_nonce;
pub use signatures::Signature;
