//! Error types for the Schnorr signature scheme.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during key parsing, signing, aggregation, and
/// verification.
///
/// Verification reports every rejection through this type, so a caller can
/// always tell why a signature did not check out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchnorrError {
    /// The private key is not in `[1, N-1]`.
    #[error("private key must be an integer between 1 and N-1")]
    InvalidKeyRange,
    /// The deterministic nonce reduced to zero modulo `N`.
    #[error("derived nonce is zero")]
    ZeroNonce,
    /// The public key bytes are not a valid compressed point.
    #[error("failed to decode public key: {0}")]
    PointDecode(#[from] CurveError),
    /// The public key decodes, but the point is not on the curve.
    #[error("public key is not on the curve")]
    NotOnCurve,
    /// The signature's `r` is not below the field prime `P`.
    #[error("signature r is larger than or equal to the field size")]
    ROutOfRange,
    /// The signature's `s` is not below the group order `N`.
    #[error("signature s is larger than or equal to the curve order")]
    SOutOfRange,
    /// `s*G - e*Q` is the point at infinity.
    #[error("reconstructed nonce point is the point at infinity")]
    ZeroPoint,
    /// The reconstructed nonce point's y-coordinate is not a quadratic residue.
    #[error("reconstructed nonce point failed the jacobi symbol check")]
    JacobiMismatch,
    /// The reconstructed nonce point's x-coordinate differs from `r`.
    #[error("signature r does not match the reconstructed nonce point")]
    RValueMismatch,
    /// Aggregation was asked to combine zero keys.
    #[error("no keys supplied for aggregation")]
    EmptyKeySet,
    /// A fixed-width encoding had the wrong number of bytes.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A hex string could not be decoded.
    #[error("invalid hex encoding: {0}")]
    Encoding(#[from] hex::FromHexError),
}
