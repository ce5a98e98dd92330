/* embmath | trigo.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Table based sine and cosine on integer degrees */

/******************************************************************************/

/// Number of fractional bits of the values returned by [`sin`] and [`cos`]
pub const TRIGO_SHIFT: u32 = 15;

/// Scaled value of 1.0 (`sin(90)`)
pub const TRIGO_MAX: i16 = 32767;

/// sin(0..=90 degrees) scaled by [`TRIGO_MAX`]
///
/// Kept as literal data: sin(30) lands within 1e-12 of a rounding tie, so generating it with
/// floats is not reproducible across libm implementations.
static SIN_0_90_TABLE: [i16; 91] = [
        0,   572,  1144,  1715,  2286,  2856,  3425,  3993,  4560,  5126,  5690,  6252,  6813,  7371,  7927,  8481,
     9032,  9580, 10126, 10668, 11207, 11743, 12275, 12803, 13328, 13848, 14364, 14876, 15383, 15886, 16383, 16876,
    17364, 17846, 18323, 18794, 19260, 19720, 20173, 20621, 21062, 21497, 21925, 22347, 22762, 23170, 23571, 23964,
    24351, 24730, 25101, 25465, 25821, 26169, 26509, 26841, 27165, 27481, 27788, 28087, 28377, 28659, 28932, 29196,
    29451, 29697, 29934, 30162, 30381, 30591, 30791, 30982, 31163, 31335, 31498, 31650, 31794, 31927, 32051, 32165,
    32269, 32364, 32448, 32523, 32587, 32642, 32687, 32722, 32747, 32762, 32767
];

/******************************************************************************/

/// Sine of an angle in degrees
///
/// Any angle is accepted, it is wrapped into `[0, 360)` first. The result is scaled by
/// [`TRIGO_MAX`], with a resolution of one degree (no interpolation).
/// ```
/// assert_eq!(embmath::sin(90), 32767);
/// assert_eq!(embmath::sin(-90), -32767);
/// assert_eq!(embmath::sin(390), embmath::sin(30));
/// ```
pub fn sin(angle: i32) -> i16 {
    let angle = angle.rem_euclid(360) as usize;

    if angle < 90 {
        SIN_0_90_TABLE[angle]
    } else if angle < 180 {
        SIN_0_90_TABLE[180 - angle]
    } else if angle < 270 {
        -SIN_0_90_TABLE[angle - 180]
    } else {
        -SIN_0_90_TABLE[360 - angle]
    }
}

/// Cosine of an angle in degrees
///
/// Same scaling and resolution as [`sin`].
pub fn cos(angle: i32) -> i16 {
    // Wrap before shifting by 90 so that i32::MAX does not overflow
    sin(angle.rem_euclid(360) + 90)
}

/// Rounds a value carrying 8 fractional bits to whole pixels
const fn round_px(v: i32) -> i32 {
    if v <= 0 {
        (v + 127) >> 8
    } else {
        (v - 127) >> 8
    }
}

/// Converts a polar coordinate to a pixel offset `(x, y)` from the center
///
/// The angle is in degrees, counter-clockwise from the +X axis in a Y-up frame (in screen
/// coordinates, where Y grows downwards, it turns clockwise). Each component keeps 8 extra
/// fractional bits before being rounded towards the center, which places points on the same
/// pixels as the scale lines of a gauge.
///
/// `radius` must stay within `[-32767, 32767]`.
/// ```
/// assert_eq!(embmath::polar(180, 100), (-100, 0));
/// assert_eq!(embmath::polar(45, 100), (70, 70));
/// ```
pub fn polar(angle: i32, radius: i32) -> (i32, i32) {
    let x = (i32::from(cos(angle)) * radius) >> (TRIGO_SHIFT - 8);
    let y = (i32::from(sin(angle)) * radius) >> (TRIGO_SHIFT - 8);
    (round_px(x), round_px(y))
}

/******************************************************************************/
