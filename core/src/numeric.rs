//! `SQL_NUMERIC_STRUCT` round-tripping. This is a fresh implementation
//! rather than an adaptation of a Decimal128-bit-layout decoder: ODBC's
//! `SQL_NUMERIC_STRUCT` is a plain sign byte plus a 16-byte little-endian
//! unsigned integer (`definitions::Numeric`), unrelated to IEEE-754
//! decimal128's biased-exponent/declet encoding. What carries over is the
//! overall shape -- format a big integer plus sign/scale into a canonical
//! decimal string, and special-case zero.

use crate::err::Error;
use definitions::{Numeric, MAX_NUMERIC_LEN};

/// Renders a `SQL_NUMERIC_STRUCT` as the decimal string the wire protocol
/// expects for `NUMERIC`/`DECIMAL` parameters and result columns.
pub fn numeric_from_sql_numeric_struct(n: &Numeric) -> Result<String, Error> {
    let magnitude = val_to_u128(&n.val);
    if magnitude == 0 {
        return Ok("0".to_string());
    }
    let digits = magnitude.to_string();
    let scale = n.scale as i32;
    let mut out = String::new();
    if n.sign == 0 {
        out.push('-');
    }
    if scale <= 0 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((-scale) as usize));
    } else if (scale as usize) >= digits.len() {
        out.push_str("0.");
        out.push_str(&"0".repeat(scale as usize - digits.len()));
        out.push_str(&digits);
    } else {
        let split = digits.len() - scale as usize;
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
    }
    Ok(out)
}

/// Parses a decimal string into a `SQL_NUMERIC_STRUCT`, failing with
/// `22003` (surfaced by the caller) if the unscaled magnitude does not fit
/// in the 16-byte integer.
pub fn sql_numeric_struct_from_str(s: &str) -> Result<Numeric, Error> {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (0u8, rest),
        None => (1u8, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(Error::InvalidCharacterValue("Numeric"));
    }
    let digits: String = int_part.chars().chain(frac_part.chars()).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidCharacterValue("Numeric"));
    }
    let scale = frac_part.len() as i8;
    let precision = digits.trim_start_matches('0').len().max(1) as u8;
    let magnitude: u128 = digits.parse().map_err(|_| Error::IntegralTruncation(s.to_string()))?;
    Ok(Numeric {
        precision,
        scale,
        sign,
        val: u128_to_val(magnitude),
    })
}

fn val_to_u128(val: &[u8; MAX_NUMERIC_LEN]) -> u128 {
    let mut magnitude: u128 = 0;
    for (i, byte) in val.iter().enumerate() {
        magnitude |= (*byte as u128) << (8 * i);
    }
    magnitude
}

fn u128_to_val(magnitude: u128) -> [u8; MAX_NUMERIC_LEN] {
    let mut val = [0u8; MAX_NUMERIC_LEN];
    for (i, byte) in val.iter_mut().enumerate() {
        *byte = ((magnitude >> (8 * i)) & 0xFF) as u8;
    }
    val
}

#[cfg(test)]
mod unit {
    use super::*;

    fn numeric(sign: u8, scale: i8, magnitude: u128) -> Numeric {
        Numeric {
            precision: 0,
            scale,
            sign,
            val: u128_to_val(magnitude),
        }
    }

    #[test]
    fn zero_formats_without_sign() {
        let n = numeric(1, 2, 0);
        assert_eq!(numeric_from_sql_numeric_struct(&n).unwrap(), "0");
    }

    #[test]
    fn positive_with_scale_places_decimal_point() {
        let n = numeric(1, 2, 12345);
        assert_eq!(numeric_from_sql_numeric_struct(&n).unwrap(), "123.45");
    }

    #[test]
    fn negative_pads_leading_zero_after_point() {
        let n = numeric(0, 5, 12);
        assert_eq!(numeric_from_sql_numeric_struct(&n).unwrap(), "-0.00012");
    }

    #[test]
    fn integer_scale_zero_has_no_point() {
        let n = numeric(1, 0, 42);
        assert_eq!(numeric_from_sql_numeric_struct(&n).unwrap(), "42");
    }

    #[test]
    fn round_trips_through_parse() {
        let parsed = sql_numeric_struct_from_str("-123.45").unwrap();
        assert_eq!(parsed.sign, 0);
        assert_eq!(parsed.scale, 2);
        assert_eq!(numeric_from_sql_numeric_struct(&parsed).unwrap(), "-123.45");
    }

    #[test]
    fn rejects_non_numeric_string() {
        assert!(sql_numeric_struct_from_str("abc").is_err());
    }
}
