// SPDX-License-Identifier: CC0-1.0

//! Parsing utilities.
//!
//! Integer parsing in base 10 ([`int`]) and base 16 ([`hex`]). Both functions take the
//! input by read-only view and return errors that carry the offending input together
//! with the width and signedness of the requested target type.

use core::fmt;
use core::str::FromStr;

use internals::error::InputString;
use internals::{impl_std_error, write_err};

/// Error with rich context returned when a string can't be parsed as an integer.
///
/// This is an extension of [`core::num::ParseIntError`], which carries the input that failed to
/// parse as well as type information. As a result it provides very informative error messages
/// that make it easier to understand the problem and correct mistakes.
///
/// Note that this is larger than the type from `core` so if it's passed through a deep call
/// stack in a performance-critical application you may want to box it or throw away the context
/// by converting to the `core` type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseIntError {
    input: InputString,
    // for displaying - see Display impl with nice error message below
    bits: u8,
    is_signed: bool,
    source: core::num::ParseIntError,
}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let subject = Subject { bits: self.bits, is_signed: self.is_signed };
        write_err!(f, "{}", self.input.display_cannot_parse(&subject); self.source)
    }
}

impl_std_error!(ParseIntError, source);

impl From<ParseIntError> for core::num::ParseIntError {
    fn from(value: ParseIntError) -> Self { value.source }
}

impl AsRef<core::num::ParseIntError> for ParseIntError {
    fn as_ref(&self) -> &core::num::ParseIntError { &self.source }
}

// Describes the requested target type in error messages, e.g. "a 32-bit unsigned integer".
struct Subject {
    bits: u8,
    is_signed: bool,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let signed = if self.is_signed { "signed" } else { "unsigned" };
        let n = if self.bits == 8 { "n" } else { "" };
        write!(f, "a{} {}-bit {} integer", n, self.bits, signed)
    }
}

/// Not strictly necessary but serves as a lint - avoids weird behavior if someone accidentally
/// passes a non-integer to the parsing functions.
pub trait Integer: FromStr<Err = core::num::ParseIntError> + TryFrom<i8> + Sized {}

macro_rules! impl_integer {
    ($($type:ty),* $(,)?) => {
        $(
        impl Integer for $type {}
        )*
    }
}

impl_integer!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

/// Integer types that [`hex`] can parse into.
///
/// Only the unsigned primitive integers implement this, so instantiating the base-16 parser
/// with a signed target type is rejected at compile time rather than at runtime.
pub trait Unsigned: Integer {
    /// Converts a string of base-16 digits (no prefix, no sign) into an integer.
    #[doc(hidden)]
    fn from_hex_str(s: &str) -> Result<Self, core::num::ParseIntError>;
}

macro_rules! impl_unsigned {
    ($($type:ty),* $(,)?) => {
        $(
        impl Unsigned for $type {
            fn from_hex_str(s: &str) -> Result<Self, core::num::ParseIntError> {
                <$type>::from_str_radix(s, 16)
            }
        }
        )*
    }
}

impl_unsigned!(u8, u16, u32, u64, u128);

/// Parses the input string as a base-10 integer, returning an error carrying rich context.
///
/// A leading `-` is accepted for signed target types. An empty input, a lone sign or any
/// character outside `0-9` is a parse error, as is a digit sequence denoting a value outside
/// the target type's range.
///
/// If the caller owns a `String` or `Box<str>` which is not used later it's better to pass it
/// as owned since it avoids allocation in the error case.
///
/// # Examples
///
/// ```
/// # use numutil::parse;
/// assert_eq!(parse::int::<i32, _>("-42"), Ok(-42));
/// assert!(parse::int::<i32, _>("12a").is_err());
/// ```
pub fn int<T: Integer, S: AsRef<str> + Into<InputString>>(s: S) -> Result<T, ParseIntError> {
    s.as_ref().parse().map_err(|error| {
        ParseIntError {
            input: s.into(),
            bits: bit_width::<T>(),
            // We detect if the type is signed by checking if -1 can be represented by it
            // this way we don't have to implement special traits and optimizer will get rid of
            // the computation.
            is_signed: T::try_from(-1i8).is_ok(),
            source: error,
        }
    })
}

/// Parses the input string as a base-16 integer, returning an error carrying rich context.
///
/// Input string may or may not contain a `0x`/`0X` prefix. Digits are case-insensitive. An
/// empty input, any character outside `0-9a-fA-F` or a digit sequence denoting a value outside
/// the target type's range is a parse error.
///
/// The target type must be unsigned; requesting a signed target does not compile:
///
/// ```compile_fail
/// let _ = numutil::parse::hex::<i32, _>("0x1f");
/// ```
///
/// # Examples
///
/// ```
/// # use numutil::parse;
/// assert_eq!(parse::hex::<u32, _>("0x1F"), Ok(31));
/// assert_eq!(parse::hex::<u32, _>("ff"), Ok(255));
/// ```
pub fn hex<T: Unsigned, S: AsRef<str> + Into<InputString>>(s: S) -> Result<T, ParseIntError> {
    let stripped = strip_hex_prefix(s.as_ref());
    T::from_hex_str(stripped).map_err(|error| ParseIntError {
        input: s.into(),
        bits: bit_width::<T>(),
        is_signed: false,
        source: error,
    })
}

/// Strips the hex prefix off `s` if one is present.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

fn bit_width<T>() -> u8 {
    u8::try_from(core::mem::size_of::<T>() * 8).expect("integers are at most 128 bits wide")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_decimal() {
        let want = 123_i32;
        let got = int::<i32, _>("123").expect("failed to parse decimal");
        assert_eq!(got, want);
    }

    #[test]
    fn parse_int_negative() {
        let want = -42_i32;
        let got = int::<i32, _>("-42").expect("failed to parse negative decimal");
        assert_eq!(got, want);
    }

    #[test]
    fn parse_int_rejects_non_digit() {
        assert!(int::<i32, _>("12a").is_err());
    }

    #[test]
    fn parse_int_rejects_empty_and_lone_sign() {
        assert!(int::<i32, _>("").is_err());
        assert!(int::<i32, _>("-").is_err());
    }

    #[test]
    fn parse_int_rejects_sign_for_unsigned() {
        assert!(int::<u32, _>("-5").is_err());
    }

    #[test]
    fn parse_int_detects_overflow() {
        assert_eq!(int::<u32, _>("4294967295"), Ok(u32::MAX));
        assert!(int::<u32, _>("4294967296").is_err());

        assert_eq!(int::<i32, _>("2147483647"), Ok(i32::MAX));
        assert!(int::<i32, _>("2147483648").is_err());

        assert_eq!(int::<i32, _>("-2147483648"), Ok(i32::MIN));
        assert!(int::<i32, _>("-2147483649").is_err());
    }

    #[test]
    fn parse_hex_prefixed() {
        let want = 31_u32;
        let got = hex::<u32, _>("0x1F").expect("failed to parse prefixed hex");
        assert_eq!(got, want);
    }

    #[test]
    fn parse_hex_no_prefix() {
        let want = 255_u32;
        let got = hex::<u32, _>("ff").expect("failed to parse non-prefixed hex");
        assert_eq!(got, want);
    }

    #[test]
    fn parse_hex_capital_prefix_and_digits() {
        let want = 0xDEAD_BEEF_u32;
        let got = hex::<u32, _>("0XDeadBeef").expect("failed to parse mixed-case hex");
        assert_eq!(got, want);
    }

    #[test]
    fn parse_hex_rejects_empty_and_bare_prefix() {
        assert!(hex::<u32, _>("").is_err());
        assert!(hex::<u32, _>("0x").is_err());
    }

    #[test]
    fn parse_hex_rejects_non_digit() {
        assert!(hex::<u32, _>("fg").is_err());
    }

    #[test]
    fn parse_hex_detects_overflow() {
        assert_eq!(hex::<u8, _>("0xff"), Ok(u8::MAX));
        assert!(hex::<u8, _>("0x100").is_err());
    }

    #[test]
    fn strip_prefix_lower_and_upper() {
        assert_eq!(strip_hex_prefix("0xab"), "ab");
        assert_eq!(strip_hex_prefix("0Xab"), "ab");
        assert_eq!(strip_hex_prefix("ab"), "ab");
    }

    #[test]
    fn error_converts_to_core_error() {
        let err = int::<u8, _>("256").unwrap_err();
        let source = err.as_ref().clone();
        assert_eq!(source, core::num::ParseIntError::from(err));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn error_display_names_the_target_type() {
        use alloc::string::ToString;

        let err = int::<u32, _>("12a").unwrap_err();
        let got = err.to_string();
        assert!(got.contains("'12a'"), "unexpected message: {}", got);
        assert!(got.contains("32-bit unsigned integer"), "unexpected message: {}", got);

        let err = int::<i8, _>("1234").unwrap_err();
        let got = err.to_string();
        assert!(got.contains("an 8-bit signed integer"), "unexpected message: {}", got);
    }
}
