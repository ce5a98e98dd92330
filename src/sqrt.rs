/* embmath | sqrt.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Integer square root with an 8-bit fractional part */

/******************************************************************************/

// Generated by build.rs: SQRT_TABLE_LEN, SQRT_INT_TABLE and SQRT_FRAC_TABLE
include!(concat!(env!("OUT_DIR"), "/sqrt_tables.rs"));

const _: () = assert!(SQRT_INT_TABLE.len() == SQRT_TABLE_LEN as usize);
const _: () = assert!(SQRT_FRAC_TABLE.len() == SQRT_TABLE_LEN as usize);

/// Bits of the input word
const BITS: u32 = u32::BITS;

/// Extra iterations producing the fractional bits
const FRAC_BITS: u32 = 8;

/******************************************************************************/

/// Result of [`sqrt`]: `i + f / 256` approximates the square root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SqrtRes {
    /// Integer part
    pub i: u16,
    /// Fractional part, in 1/256 units
    pub f: u8
}

impl SqrtRes {
    /// The root as a single fixed-point value with 8 fractional bits
    pub const fn to_q8(self) -> u32 {
        ((self.i as u32) << FRAC_BITS) | self.f as u32
    }
}

/// Square root of an unsigned integer
///
/// Inputs up to [`SQRT_TABLE_LEN`] are looked up (rounded to the nearest 1/256), larger ones
/// are computed bit by bit (truncated to 1/256). Only shifts, additions and comparisons are
/// used.
/// ```
/// let r = embmath::sqrt(200);
/// assert_eq!((r.i, r.f), (14, 36)); // 14.14
/// ```
pub fn sqrt(x: u32) -> SqrtRes {
    if x == 0 {
        return SqrtRes::default();
    }

    if x <= SQRT_TABLE_LEN {
        let idx = x as usize - 1;
        return SqrtRes { i: u16::from(SQRT_INT_TABLE[idx]), f: SQRT_FRAC_TABLE[idx] };
    }

    let mut x = x;
    let mut acc: u32 = 0;
    let mut rem: u32 = 0;

    for _ in 0..(BITS / 2 + FRAC_BITS) {
        rem = (rem << 2) | (x >> (BITS - 2));
        x <<= 2;
        acc <<= 1;
        let trial = (acc << 1) + 1;
        if rem >= trial {
            rem -= trial;
            acc += 1;
        }
    }

    // acc < 2^24, so the integer part always fits 16 bits
    SqrtRes { i: (acc >> FRAC_BITS) as u16, f: (acc & 0xFF) as u8 }
}

/******************************************************************************/
