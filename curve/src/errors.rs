//! Error types for decoding curve points.

use thiserror::Error;

/// Errors that can occur while decoding a compressed point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The encoding is not exactly one prefix byte plus a 32-byte coordinate.
    #[error("invalid compressed point length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The prefix byte is neither `0x02` nor `0x03`.
    #[error("unrecognized compressed point prefix: {0:#04x}")]
    InvalidPrefix(u8),
    /// `x^3 + 7` has no square root modulo `P`, so no point has this x.
    #[error("x coordinate does not correspond to a curve point")]
    NoSquareRoot,
}
