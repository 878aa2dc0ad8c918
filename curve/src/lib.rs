//! The secp256k1 elliptic curve group.
//!
//! This crate provides prime-field arithmetic, affine and Jacobian curve
//! points, the Jacobi symbol, and the SEC 1 compressed point codec. All
//! operations run against an explicit [`CurveContext`] that holds the curve
//! parameters; there is no global curve state.

mod affine;
mod context;
mod encoding;
mod errors;
mod field;
mod projective;

pub use affine::Affine;
pub use context::CurveContext;
pub use encoding::{
    marshal_compressed, to_fixed_bytes, unmarshal_compressed, COMPRESSED_POINT_SIZE,
    COORDINATE_SIZE,
};
pub use errors::CurveError;
pub use field::{jacobi, PrimeField};
pub use projective::Projective;
