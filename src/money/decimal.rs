//! Plain decimal literals
//!
//! The wire form of a magnitude is a plain literal: an optional sign, digits
//! and at most one decimal point, with digits on at least one side of it.
//! Exponents, whitespace, grouping characters and underscores are rejected
//! even where `rust_decimal` itself would accept them.

use rust_decimal::Decimal;

use crate::money::{MoneyError, MoneyResult};

/// Parse a plain decimal literal such as `"19.99"`, `"-0.5"` or `"+12."`
///
/// The scale written in the literal is kept, so `"12.340"` parses to a value
/// that displays as `12.340` and compares equal to `12.34`.
pub fn parse_decimal_literal(text: &str) -> MoneyResult<Decimal> {
    let invalid = || MoneyError::InvalidDecimal(text.to_string());

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    // A second point lands in `fraction` and fails the digit check
    if !all_digits(integer) || !all_digits(fraction) {
        return Err(invalid());
    }

    let canonical = match (integer.is_empty(), fraction.is_empty()) {
        (true, _) => format!("0.{fraction}"),
        (false, true) => integer.to_string(),
        (false, false) => format!("{integer}.{fraction}"),
    };

    // Literals that need more than 28 digits of scale or 96 bits of mantissa
    // are refused rather than rounded
    let magnitude = Decimal::from_str_exact(&canonical).map_err(|_| invalid())?;
    if magnitude.scale() as usize != fraction.len() {
        return Err(invalid());
    }
    Ok(if negative { -magnitude } else { magnitude })
}

/// Render a decimal as a plain literal with its scale preserved
pub fn format_decimal_literal(value: &Decimal) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(parse_decimal_literal("19.99").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_decimal_literal("-0.5").unwrap(), Decimal::new(-5, 1));
        assert_eq!(parse_decimal_literal("+7").unwrap(), Decimal::new(7, 0));
        assert_eq!(parse_decimal_literal(".25").unwrap(), Decimal::new(25, 2));
        assert_eq!(parse_decimal_literal("12.").unwrap(), Decimal::new(12, 0));
        assert_eq!(parse_decimal_literal("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_keeps_scale() {
        let value = parse_decimal_literal("12.340").unwrap();
        assert_eq!(value.scale(), 3);
        assert_eq!(value.to_string(), "12.340");
        assert_eq!(value, parse_decimal_literal("12.34").unwrap());
    }

    #[test]
    fn test_parse_rejects_non_plain_literals() {
        for text in [
            "", "-", "+", ".", "-.", "1e5", "1E5", "1.5e-3", " 1.00", "1.00 ", "1_000",
            "1,000.00", "1.2.3", "--1", "+-1", "0x10", "NaN", "inf", "١٢",
        ] {
            assert_eq!(
                parse_decimal_literal(text),
                Err(MoneyError::InvalidDecimal(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let too_big = "9".repeat(40);
        assert!(parse_decimal_literal(&too_big).is_err());
    }

    #[test]
    fn test_parse_refuses_to_round() {
        for text in [
            "0.00000000000000000000000000001",
            "1234567890123456789012345678.95",
            "0.123456789012345678901234567891",
            "-0.00000000000000000000000000001",
        ] {
            assert_eq!(
                parse_decimal_literal(text),
                Err(MoneyError::InvalidDecimal(text.to_string())),
                "{text:?} cannot be held exactly and should be rejected"
            );
        }

        let widest = "0.0000000000000000000000000001";
        assert_eq!(parse_decimal_literal(widest).unwrap().to_string(), widest);
    }

    #[test]
    fn test_format_has_no_exponent() {
        let value = parse_decimal_literal("0.0000001").unwrap();
        assert_eq!(format_decimal_literal(&value), "0.0000001");
        let value = parse_decimal_literal("100000000000000000000").unwrap();
        assert_eq!(format_decimal_literal(&value), "100000000000000000000");
    }
}
