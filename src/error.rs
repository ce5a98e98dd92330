/* embmath | error.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use thiserror::Error;

/******************************************************************************/

/// Contract violations reported by the checked `try_*` functions
///
/// The unchecked primitives never fail; these errors only exist for callers that want the
/// input contract verified at runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Both components of an atan2 vector are zero, so it has no direction
    #[error("the zero vector has no angle")]
    ZeroVector,

    /// An atan2 component exceeds [`crate::ATAN2_COORD_MAX`] in magnitude
    #[error("vector ({x}, {y}) exceeds the supported coordinate range")]
    CoordinateOutOfRange {
        /// X component of the rejected vector
        x: i32,
        /// Y component of the rejected vector
        y: i32
    },

    /// A Bezier parameter is above [`crate::BEZIER_VAL_MAX`]
    #[error("Bezier parameter {0} is out of range")]
    ParameterOutOfRange(u32)
}

/******************************************************************************/
