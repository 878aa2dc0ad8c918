//! SHA-256 helpers shared by nonce derivation, the Fiat-Shamir challenge, and
//! message digests.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::constants::MSG_SIZE;

/// Hashes an arbitrary-length message down to the 32-byte digest that
/// [`sign`](crate::sign) and [`verify`](crate::verify) operate on.
pub fn hash_message(message: &[u8]) -> [u8; MSG_SIZE] {
    Sha256::digest(message).into()
}

/// `SHA-256(parts[0] || parts[1] || ...) mod modulus`.
pub(crate) fn hash_to_scalar(parts: &[&[u8]], modulus: &BigUint) -> BigUint {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    BigUint::from_bytes_be(&hasher.finalize()) % modulus
}
