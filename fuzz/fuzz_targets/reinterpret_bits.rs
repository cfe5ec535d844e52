// SPDX-License-Identifier: CC0-1.0

#![cfg_attr(fuzzing, no_main)]
#![cfg_attr(not(fuzzing), allow(unused))]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use numutil::bits::FromBits;

#[cfg(not(fuzzing))]
fn main() {}

fn do_test(data: &[u8]) {
    let mut u = Unstructured::new(data);

    if let Ok(n) = u.arbitrary::<u32>() {
        // Bit casting is its own inverse when applied symmetrically.
        assert_eq!(u32::from_bits(f32::from_bits(n)), n);
        assert_eq!(u32::from_bits(i32::from_bits(n)), n);
        assert_eq!(u32::from_bits(<[u8; 4]>::from_bits(n)), n);
    }

    if let Ok(n) = u.arbitrary::<u64>() {
        assert_eq!(u64::from_bits(f64::from_bits(n)), n);
        assert_eq!(u64::from_bits(i64::from_bits(n)), n);
    }
}

fuzz_target!(|data: &[u8]| {
    do_test(data);
});
