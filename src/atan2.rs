/* embmath | atan2.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Integer atan2 by octant reduction and error compensation */

/******************************************************************************/

use crate::error::MathError;

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/atan2_tables.rs"));

/// Largest coordinate magnitude accepted by [`try_atan2`]
///
/// [`atan2`] itself accepts any `i32`; the ±1 degree accuracy is guaranteed up to this bound.
pub const ATAN2_COORD_MAX: i32 = 1456;

/// Fractional bits of the intermediate octant angle
const FRAC_BITS: u32 = 4;

/// Largest magnitude for which `small * 45 << FRAC_BITS` fits in a `u32`
const MAX_BITS: u32 = 22;

/******************************************************************************/

/// Angle of an octant, from 0 to 45 degrees, for `small <= large` and `large > 0`
///
/// `45 * small / large` is a linear estimate of `atan(small / large)`. It is computed with 4
/// fractional bits, then corrected with the error of the estimate sampled at each degree.
fn octant_angle(mut small: u32, mut large: u32) -> u32 {
    let shift = (u32::BITS - large.leading_zeros()).saturating_sub(MAX_BITS);
    small >>= shift;
    large >>= shift;

    let linear = ((small * 45) << FRAC_BITS) / large;
    let comp = u32::from(ATAN_COMP_TABLE[(linear >> FRAC_BITS) as usize]);
    (linear + comp + (1 << (FRAC_BITS - 1))) >> FRAC_BITS
}

/// Angle of the vector (x, y) in degrees
///
/// The result is in `[0, 360)`, counter-clockwise from the +X axis, and within ±1 degree of
/// the exact value while both magnitudes stay within [`ATAN2_COORD_MAX`]. Larger magnitudes
/// are scaled down internally and never overflow.
///
/// The zero vector has no direction: by convention it returns 0. Use [`try_atan2`] to have it
/// reported instead.
/// ```
/// assert_eq!(embmath::atan2(1, 0), 0);
/// assert_eq!(embmath::atan2(0, 1), 90);
/// assert_eq!(embmath::atan2(-1, 0), 180);
/// assert_eq!(embmath::atan2(0, -1), 270);
/// ```
pub fn atan2(x: i32, y: i32) -> u16 {
    let ux = x.unsigned_abs();
    let uy = y.unsigned_abs();

    if ux == 0 && uy == 0 {
        contract_trace!("atan2 of the zero vector, returning 0");
        return 0;
    }

    // Angle within the first quadrant
    let degree = if ux > uy {
        octant_angle(uy, ux)
    } else {
        90 - octant_angle(ux, uy)
    };

    let degree = match (x < 0, y < 0) {
        (false, false) => degree,
        (false, true) => 360 - degree,
        (true, false) => 180 - degree,
        (true, true) => 180 + degree
    };

    (degree % 360) as u16
}

/// Angle of the vector (x, y) in degrees, with the input contract checked
///
/// Fails with [`MathError::ZeroVector`] for (0, 0), and with
/// [`MathError::CoordinateOutOfRange`] when a magnitude exceeds [`ATAN2_COORD_MAX`].
pub fn try_atan2(x: i32, y: i32) -> Result<u16, MathError> {
    if x == 0 && y == 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!("rejecting atan2 of the zero vector");
        return Err(MathError::ZeroVector);
    }
    if x.unsigned_abs() > ATAN2_COORD_MAX as u32 || y.unsigned_abs() > ATAN2_COORD_MAX as u32 {
        #[cfg(feature = "tracing")]
        tracing::debug!(x, y, "rejecting atan2 vector out of range");
        return Err(MathError::CoordinateOutOfRange { x, y });
    }
    Ok(atan2(x, y))
}

/******************************************************************************/
