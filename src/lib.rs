/* embmath | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point math primitives for embedded graphics */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

/******************************************************************************/

/// Emits a trace event when the `tracing` feature is enabled, expands to nothing otherwise
macro_rules! contract_trace {
    ($($arg: tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }}
}

mod atan2;
mod bezier;
mod error;
mod sqrt;
mod trigo;

pub use atan2::{atan2, try_atan2, ATAN2_COORD_MAX};
pub use bezier::{bezier3, try_bezier3, BEZIER_VAL_MAX, BEZIER_VAL_SHIFT};
pub use error::MathError;
pub use sqrt::{sqrt, SqrtRes, SQRT_TABLE_LEN};
pub use trigo::{cos, polar, sin, TRIGO_MAX, TRIGO_SHIFT};
