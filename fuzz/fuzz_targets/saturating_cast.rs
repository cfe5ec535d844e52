// SPDX-License-Identifier: CC0-1.0

#![cfg_attr(fuzzing, no_main)]
#![cfg_attr(not(fuzzing), allow(unused))]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use numutil::cast::SaturatingFrom;

#[cfg(not(fuzzing))]
fn main() {}

fn do_test(data: &[u8]) {
    let mut u = Unstructured::new(data);

    if let Ok(n) = u.arbitrary::<i64>() {
        let got = i16::saturating_from(n);
        assert!(i64::from(got) >= i64::from(i16::MIN));
        assert!(i64::from(got) <= i64::from(i16::MAX));
        if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&n) {
            assert_eq!(i64::from(got), n);
        }

        let got = u32::saturating_from(n);
        if n < 0 {
            assert_eq!(got, 0);
        }
    }

    if let Ok(n) = u.arbitrary::<u128>() {
        let got = u8::saturating_from(n);
        assert!(u128::from(got) <= u128::from(u8::MAX));
        if n <= u128::from(u8::MAX) {
            assert_eq!(u128::from(got), n);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    do_test(data);
});
