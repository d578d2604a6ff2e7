//! Permissive numeric parsing.
//!
//! Attribute values are read as the longest numeric prefix; text with no
//! numeric prefix reads as zero. Neither function can fail.
//!
//! Only decimal forms are recognized. Hexadecimal text such as `0x10` reads
//! as `0`, where C's `atof` would give 16.

use atoi_simd::AtoiSimdError;

#[inline]
fn skip_space(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(s.len());
    &s[start..]
}

/// Parses an optionally signed decimal integer prefix. Saturates at the
/// `i32` bounds.
pub fn parse_int(s: &[u8]) -> i32 {
    let s = skip_space(s);
    let negative = s.first() == Some(&b'-');
    let s = s.strip_prefix(b"+").unwrap_or(s);

    match atoi_simd::parse_prefix::<i32, false, true>(s) {
        Ok((value, _)) => value,
        Err(AtoiSimdError::Overflow(..)) if negative => i32::MIN,
        Err(AtoiSimdError::Overflow(..)) => i32::MAX,
        Err(_) => 0,
    }
}

/// Parses a decimal floating-point prefix (sign, fraction, exponent,
/// `inf`, `nan`).
pub fn parse_float(s: &[u8]) -> f64 {
    match fast_float2::parse_partial::<f64, _>(skip_space(s)) {
        Ok((value, _)) => value,
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_plain_and_signed() {
        assert_eq!(parse_int(b"42"), 42);
        assert_eq!(parse_int(b"-17"), -17);
        assert_eq!(parse_int(b"+5"), 5);
        assert_eq!(parse_int(b"  \t8"), 8);
    }

    #[test]
    fn int_takes_prefix() {
        assert_eq!(parse_int(b"12abc"), 12);
        assert_eq!(parse_int(b"3.9"), 3);
        assert_eq!(parse_int(b"1e3"), 1);
    }

    #[test]
    fn int_without_digits_is_zero() {
        assert_eq!(parse_int(b""), 0);
        assert_eq!(parse_int(b"abc"), 0);
        assert_eq!(parse_int(b"-"), 0);
    }

    #[test]
    fn int_saturates() {
        assert_eq!(parse_int(b"99999999999999999999"), i32::MAX);
        assert_eq!(parse_int(b"-99999999999999999999"), i32::MIN);
        assert_eq!(parse_int(b"-2147483648"), i32::MIN);
    }

    #[test]
    fn float_forms() {
        assert_eq!(parse_float(b"2.5"), 2.5);
        assert_eq!(parse_float(b"-0.125"), -0.125);
        assert_eq!(parse_float(b"1e-2"), 0.01);
        assert_eq!(parse_float(b" 7"), 7.0);
        assert_eq!(parse_float(b".5"), 0.5);
    }

    #[test]
    fn float_takes_prefix() {
        assert_eq!(parse_float(b"3.25px"), 3.25);
        assert_eq!(parse_float(b"4/>"), 4.0);
    }

    #[test]
    fn float_without_number_is_zero() {
        assert_eq!(parse_float(b""), 0.0);
        assert_eq!(parse_float(b"x"), 0.0);
    }

    #[test]
    fn hex_is_not_a_number() {
        assert_eq!(parse_float(b"0x10"), 0.0);
        assert_eq!(parse_int(b"0x10"), 0);
    }
}
