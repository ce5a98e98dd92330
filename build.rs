use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of small inputs served by the square root lookup tables, also emitted for the crate
const SQRT_TABLE_LEN: u32 = 64;

/// Exact integer square root (floor)
fn isqrt(x: u64) -> u64 {
    if x < 2 {
        return x;
    }
    let mut r = (x as f64).sqrt() as u64;
    while r * r > x {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= x {
        r += 1;
    }
    r
}

/// round(sqrt(x) * 256), split into integer and 8-bit fractional parts
fn compute_sqrt_tables() -> ([u8; SQRT_TABLE_LEN as usize], [u8; SQRT_TABLE_LEN as usize]) {
    let mut int_table = [0; SQRT_TABLE_LEN as usize];
    let mut frac_table = [0; SQRT_TABLE_LEN as usize];
    for x in 1..=SQRT_TABLE_LEN {
        // floor((floor(sqrt(x * 2^18)) + 1) / 2) == round(sqrt(x) * 2^8)
        let q8 = (isqrt((x as u64) << 18) + 1) >> 1;
        int_table[x as usize - 1] = (q8 >> 8) as u8;
        frac_table[x as usize - 1] = (q8 & 0xFF) as u8;
    }
    (int_table, frac_table)
}

/// Error of the linear 45 * min / max estimate, in 1/16 degree, sampled at
/// the middle of each one degree bucket of the estimate
fn compute_atan_comp_table() -> [u8; 46] {
    (0..46)
        .map(|k| {
            let linear = if k == 45 { 45.0 } else { (16.0 * k as f64 + 7.5) / 16.0 };
            let ratio = f64::min(linear / 45.0, 1.0);
            (16.0 * (f64::atan(ratio).to_degrees() - linear)).round() as u8
        })
        .collect::<Vec<u8>>()
        .try_into()
        .unwrap()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();

    let dest_path = Path::new(&out_dir).join("sqrt_tables.rs");
    let mut f = File::create(dest_path).unwrap();
    let (int_table, frac_table) = compute_sqrt_tables();
    writeln!(&mut f, "/// Number of small inputs (`1..=SQRT_TABLE_LEN`) answered from the lookup tables").unwrap();
    writeln!(&mut f, "pub const SQRT_TABLE_LEN: u32 = {};", SQRT_TABLE_LEN).unwrap();
    writeln!(&mut f, "const SQRT_INT_TABLE: [u8; {}] = {:?};", int_table.len(), int_table).unwrap();
    writeln!(&mut f, "const SQRT_FRAC_TABLE: [u8; {}] = {:?};", frac_table.len(), frac_table).unwrap();

    let dest_path = Path::new(&out_dir).join("atan2_tables.rs");
    let mut f = File::create(dest_path).unwrap();
    let comp_table = compute_atan_comp_table();
    writeln!(&mut f, "const ATAN_COMP_TABLE: [u8; {}] = {:?};", comp_table.len(), comp_table).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
