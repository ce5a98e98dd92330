/* embmath | bezier.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Cubic Bezier evaluation on 10-bit fixed-point parameters */

/******************************************************************************/

use crate::error::MathError;

/******************************************************************************/

/// Number of fractional bits of the Bezier parameter
pub const BEZIER_VAL_SHIFT: u32 = 10;

/// Bezier parameter value representing t = 1.0
pub const BEZIER_VAL_MAX: u32 = 1 << BEZIER_VAL_SHIFT;

/******************************************************************************/

/// Evaluates a cubic Bezier function
///
/// `t` runs from 0 to [`BEZIER_VAL_MAX`]; `u0` and `u3` are the values at both ends, `u1` and
/// `u2` the control values. Typical animation paths keep all four in `[0, BEZIER_VAL_MAX]`,
/// but any `i32` is accepted.
///
/// `t` is not clamped: values above [`BEZIER_VAL_MAX`] extrapolate the curve. The 64-bit
/// intermediates wrap instead of overflowing, so any `t` returns a value, but once
/// `3 * t^3 * u` leaves the `i64` range the result is meaningless. Use [`try_bezier3`] to have
/// the range checked.
/// ```
/// use embmath::{bezier3, BEZIER_VAL_MAX};
/// // ease-in-out
/// assert_eq!(bezier3(0, 0, 0, 1024, 1024), 0);
/// assert_eq!(bezier3(BEZIER_VAL_MAX / 2, 0, 0, 1024, 1024), 512);
/// assert_eq!(bezier3(BEZIER_VAL_MAX, 0, 0, 1024, 1024), 1024);
/// ```
pub fn bezier3(t: u32, u0: i32, u1: i32, u2: i32, u3: i32) -> i32 {
    if t > BEZIER_VAL_MAX {
        contract_trace!(t, "Bezier parameter out of range, extrapolating");
    }

    const SHIFT: u32 = BEZIER_VAL_SHIFT;
    let t = i64::from(t);
    let t_rem = i64::from(BEZIER_VAL_MAX).wrapping_sub(t);
    let t_rem2 = t_rem.wrapping_mul(t_rem) >> SHIFT;
    let t_rem3 = t_rem2.wrapping_mul(t_rem) >> SHIFT;
    let t2 = t.wrapping_mul(t) >> SHIFT;
    let t3 = t2.wrapping_mul(t) >> SHIFT;

    let v1 = t_rem3.wrapping_mul(i64::from(u0)) >> SHIFT;
    let v2 = t_rem2.wrapping_mul(3).wrapping_mul(t).wrapping_mul(i64::from(u1)) >> (2 * SHIFT);
    let v3 = t_rem.wrapping_mul(3).wrapping_mul(t2).wrapping_mul(i64::from(u2)) >> (2 * SHIFT);
    let v4 = t3.wrapping_mul(i64::from(u3)) >> SHIFT;

    v1.wrapping_add(v2).wrapping_add(v3).wrapping_add(v4) as i32
}

/// Evaluates a cubic Bezier function, rejecting `t` above [`BEZIER_VAL_MAX`]
pub fn try_bezier3(t: u32, u0: i32, u1: i32, u2: i32, u3: i32) -> Result<i32, MathError> {
    if t > BEZIER_VAL_MAX {
        #[cfg(feature = "tracing")]
        tracing::debug!(t, "rejecting Bezier parameter");
        return Err(MathError::ParameterOutOfRange(t));
    }
    Ok(bezier3(t, u0, u1, u2, u3))
}

/******************************************************************************/
