//! SEC 1 compressed point encoding (section 2.3.3).
//!
//! A compressed point is one prefix byte (`0x02` for even y, `0x03` for odd
//! y) followed by the 32-byte big-endian x-coordinate.

use num_bigint::BigUint;

use crate::affine::Affine;
use crate::context::CurveContext;
use crate::errors::CurveError;

/// Width of a serialized field element or scalar.
pub const COORDINATE_SIZE: usize = 32;

/// Width of a compressed point.
pub const COMPRESSED_POINT_SIZE: usize = COORDINATE_SIZE + 1;

const PREFIX_EVEN: u8 = 0x02;
const PREFIX_ODD: u8 = 0x03;

/// Serializes `value` as a 32-byte big-endian integer, left-padded with zeros.
///
/// Values wider than 256 bits keep their low-order 32 bytes; every field
/// element and scalar of the curve fits.
pub fn to_fixed_bytes(value: &BigUint) -> [u8; COORDINATE_SIZE] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; COORDINATE_SIZE];
    if bytes.len() >= COORDINATE_SIZE {
        out.copy_from_slice(&bytes[bytes.len() - COORDINATE_SIZE..]);
    } else {
        out[COORDINATE_SIZE - bytes.len()..].copy_from_slice(&bytes);
    }
    out
}

/// Encodes a point in compressed form.
///
/// The point at infinity has no compressed encoding; it serializes as its
/// zero coordinates with an even prefix.
pub fn marshal_compressed(point: &Affine) -> [u8; COMPRESSED_POINT_SIZE] {
    let mut out = [0u8; COMPRESSED_POINT_SIZE];
    out[0] = if point.y_is_odd() {
        PREFIX_ODD
    } else {
        PREFIX_EVEN
    };
    out[1..].copy_from_slice(&to_fixed_bytes(&point.x));
    out
}

/// Decodes a compressed point, recovering y as `(x^3 + 7)^((P+1)/4)` and
/// choosing the root whose parity matches the prefix.
///
/// The x-coordinate is not range checked here; pair this with
/// [`CurveContext::is_on_curve`] before trusting the point.
pub fn unmarshal_compressed(ctx: &CurveContext, data: &[u8]) -> Result<Affine, CurveError> {
    if data.len() != COMPRESSED_POINT_SIZE {
        return Err(CurveError::InvalidLength {
            expected: COMPRESSED_POINT_SIZE,
            actual: data.len(),
        });
    }
    let prefix = data[0];
    if prefix & !1 != PREFIX_EVEN {
        return Err(CurveError::InvalidPrefix(prefix));
    }

    let fp = ctx.base_field();
    let x = BigUint::from_bytes_be(&data[1..]);
    let y_squared = Affine::curve_rhs(fp, &x);
    let mut y = fp.sqrt(&y_squared).ok_or(CurveError::NoSquareRoot)?;

    if y.bit(0) != (prefix & 1 == 1) {
        y = fp.neg(&y);
    }

    Ok(Affine::new(x, y))
}
