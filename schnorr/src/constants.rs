//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is a compressed secp256k1 point: one parity prefix byte
/// followed by the 32-byte x-coordinate.
pub const PK_SIZE: usize = curve::COMPRESSED_POINT_SIZE;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The x-coordinate of the nonce point R (32 bytes)
/// - A scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Size of a message digest in bytes.
///
/// Messages are signed as 32-byte digests; see [`hash_message`](crate::hash_message).
pub const MSG_SIZE: usize = 32;
