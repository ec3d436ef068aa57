//! Numeric field parsing and cent rendering, backed by rust_decimal.

use crate::domain::primitives::clean_field;
use crate::error::FieldError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a numeric field. Blank text yields zero.
///
/// # Errors
/// Returns `FieldError::InvalidNumber` if non-blank text is not a decimal literal.
pub fn parse_amount(raw: &str) -> Result<Decimal, FieldError> {
    let text = clean_field(raw);
    if text.is_empty() {
        return Ok(Decimal::ZERO);
    }
    // rust_decimal accepts `_` digit separators; a ledger amount never has them.
    if text.contains('_') {
        return Err(FieldError::InvalidNumber(text.to_string()));
    }
    let unsigned = text.strip_prefix('+').unwrap_or(text);

    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .map_err(|_| FieldError::InvalidNumber(text.to_string()))
}

/// Round to cents, midpoint away from zero. A rounded zero is always unsigned.
pub fn round_cents(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Render with exactly two fractional digits.
pub fn format_cents(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// Collapse values within `epsilon` of zero (inclusive) to exactly zero.
pub fn snap_to_zero(value: Decimal, epsilon: Decimal) -> Decimal {
    if value.abs() <= epsilon {
        Decimal::ZERO
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_plain_and_quoted() {
        assert_eq!(parse_amount("10.50").unwrap(), d("10.50"));
        assert_eq!(parse_amount("  \"12.25\" ").unwrap(), d("12.25"));
        assert_eq!(parse_amount("-3").unwrap(), d("-3"));
        assert_eq!(parse_amount("+3").unwrap(), d("3"));
        assert_eq!(parse_amount("1.5e2").unwrap(), d("150"));
    }

    #[test]
    fn test_parse_amount_blank_is_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("\"\"").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(
            parse_amount("12abc"),
            Err(FieldError::InvalidNumber("12abc".to_string()))
        );
        assert!(parse_amount("N/A").is_err());
        assert!(parse_amount("1_0").is_err());
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(d("150")), "150.00");
        assert_eq!(format_cents(d("4")), "4.00");
        assert_eq!(format_cents(d("-2.5")), "-2.50");
        assert_eq!(format_cents(d("1.005")), "1.01");
        assert_eq!(format_cents(d("-1.005")), "-1.01");
        assert_eq!(format_cents(d("1.0049")), "1.00");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(format_cents(d("-0.001")), "0.00");
    }

    #[test]
    fn test_snap_to_zero() {
        let eps = Decimal::new(1, 8);
        assert_eq!(snap_to_zero(d("0.000000001"), eps), Decimal::ZERO);
        assert_eq!(snap_to_zero(d("-0.000000001"), eps), Decimal::ZERO);
        assert_eq!(snap_to_zero(d("-0.00000001"), eps), Decimal::ZERO);
        assert_eq!(snap_to_zero(d("0.0001"), eps), d("0.0001"));
    }
}
