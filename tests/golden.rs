//! Golden values for the embedded rendering pipeline
//!
//! Rendering output must stay pixel-identical across releases, so these tests pin the exact
//! results of the table based paths.

use embmath::{atan2, sqrt, SqrtRes, ATAN2_COORD_MAX, SQRT_TABLE_LEN};

/// Integer parts of sqrt(1..=64), from the reference tables of the original C implementation
const SQRT_INT_GOLDEN: [u16; 64] = [
    1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 8
];

/// Fractional parts of sqrt(1..=64), in 1/256 units, from the same reference tables
const SQRT_FRAC_GOLDEN: [u8; 64] = [
      0, 106, 187,   0,  60, 115, 165, 212,   0,  42,  81, 119, 155, 190, 223,   0,
     32,  62,  92, 121, 149, 177, 204, 230,   0,  25,  50,  75,  99, 122, 145, 168,
    191, 213, 235,   0,  21,  42,  63,  83, 103, 123, 143, 162, 181, 200, 219, 238,
      0,  18,  36,  54,  72,  89, 107, 124, 141, 158, 174, 191, 207, 224, 240,   0
];

#[test]
fn sqrt_small_inputs_match_golden_tables() {
    for x in 1..=SQRT_TABLE_LEN {
        let idx = x as usize - 1;
        assert_eq!(
            sqrt(x),
            SqrtRes { i: SQRT_INT_GOLDEN[idx], f: SQRT_FRAC_GOLDEN[idx] },
            "sqrt({})",
            x
        );
    }
}

#[test]
fn sqrt_large_inputs_truncate_to_q8() {
    let inputs = (65..20_000u32).chain([1 << 16, 1 << 24, 0x8000_0000, 0xDEAD_BEEF, u32::MAX]);
    for x in inputs {
        // floor(sqrt(x) * 256) == floor(sqrt(x << 16))
        let expected = (((x as u64) << 16) as f64).sqrt().floor() as u64;
        let expected = if expected * expected > (x as u64) << 16 { expected - 1 } else { expected };
        assert_eq!(u64::from(sqrt(x).to_q8()), expected, "sqrt({})", x);
    }
}

#[test]
fn atan2_within_one_degree_over_whole_range() {
    let mut worst = 0.0f64;
    for x in -ATAN2_COORD_MAX..=ATAN2_COORD_MAX {
        for y in -ATAN2_COORD_MAX..=ATAN2_COORD_MAX {
            if x == 0 && y == 0 {
                continue;
            }
            let actual = atan2(x, y);
            assert!(actual < 360);
            let exact = f64::from(y).atan2(f64::from(x)).to_degrees().rem_euclid(360.0);
            let diff = (f64::from(actual) - exact).abs();
            worst = worst.max(diff.min(360.0 - diff));
        }
    }
    assert!(worst <= 1.0, "worst atan2 error: {} degrees", worst);
}
