// SPDX-License-Identifier: CC0-1.0

#![cfg_attr(fuzzing, no_main)]
#![cfg_attr(not(fuzzing), allow(unused))]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use numutil::parse;

#[cfg(not(fuzzing))]
fn main() {}

fn do_test(data: &[u8]) {
    let mut u = Unstructured::new(data);

    if let Ok(s) = u.arbitrary::<&str>() {
        let _ = parse::int::<i8, _>(s);
        let _ = parse::int::<i16, _>(s);
        let _ = parse::int::<i32, _>(s);
        let _ = parse::int::<i64, _>(s);
        let _ = parse::int::<i128, _>(s);

        let _ = parse::int::<u8, _>(s);
        let _ = parse::int::<u16, _>(s);
        let _ = parse::int::<u32, _>(s);
        let _ = parse::int::<u64, _>(s);
        let _ = parse::int::<u128, _>(s);

        let _ = parse::hex::<u8, _>(s);
        let _ = parse::hex::<u16, _>(s);
        let _ = parse::hex::<u64, _>(s);
        let _ = parse::hex::<u128, _>(s);

        if let Ok(n) = parse::hex::<u32, _>(s) {
            // A successful parse must be prefix-insensitive.
            let mut prefixed = String::from("0x");
            prefixed.push_str(s.trim_start_matches("0X").trim_start_matches("0x"));
            assert_eq!(parse::hex::<u32, _>(prefixed.as_str()), Ok(n));
        }
    }

    if let Ok(s) = u.arbitrary::<String>() {
        let _ = parse::int::<i64, _>(s.clone());
        let _ = parse::int::<u64, _>(s.clone());
        let _ = parse::hex::<u64, _>(s);
    }
}

fuzz_target!(|data: &[u8]| {
    do_test(data);
});
