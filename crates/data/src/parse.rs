//! Lenient numeric coercion for provider payloads.
//!
//! Several feeds encode numbers as JSON strings. A value that cannot be
//! coerced yields `None` rather than an error.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parses a finite f64 from a JSON number or numeric string.
#[must_use]
pub fn parse_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Parses an integer timestamp from a JSON number or numeric string.
#[must_use]
pub fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Parses a Decimal from a JSON value (handles both string and number formats).
#[must_use]
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .ok(),
        Value::Number(n) => {
            // Convert number to string first to preserve precision
            Decimal::from_str(&n.to_string())
                .ok()
                .or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(&json!(1.25)), Some(1.25));
        assert_eq!(parse_f64(&json!("0.00010000")), Some(0.0001));
        assert_eq!(parse_f64(&json!(" 42 ")), Some(42.0));
        assert_eq!(parse_f64(&json!("NaN")), None);
        assert_eq!(parse_f64(&json!("abc")), None);
        assert_eq!(parse_f64(&json!(null)), None);
        assert_eq!(parse_f64(&json!(true)), None);
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(&json!(1_706_616_000_000i64)), Some(1_706_616_000_000));
        assert_eq!(parse_i64(&json!("1706616000")), Some(1_706_616_000));
        assert_eq!(parse_i64(&json!(1.7e12)), Some(1_700_000_000_000));
        assert_eq!(parse_i64(&json!(1.5)), None);
        assert_eq!(parse_i64(&json!("soon")), None);
        assert_eq!(parse_i64(&json!(null)), None);
    }

    #[test]
    fn test_parse_decimal_from_string() {
        assert_eq!(parse_decimal(&json!("50000.12345678")), Some(dec!(50000.12345678)));
        assert_eq!(parse_decimal(&json!("1e3")), Some(dec!(1000)));
    }

    #[test]
    fn test_parse_decimal_from_number() {
        assert_eq!(parse_decimal(&json!(142.5)), Some(dec!(142.5)));
        assert_eq!(parse_decimal(&json!(28_000_000_000u64)), Some(dec!(28000000000)));
        // serde_json renders very large/small floats in exponent form
        assert!(parse_decimal(&json!(1.5e-8)).is_some());
    }

    #[test]
    fn test_parse_decimal_invalid() {
        assert_eq!(parse_decimal(&json!(null)), None);
        assert_eq!(parse_decimal(&json!("n/a")), None);
        assert_eq!(parse_decimal(&json!([1])), None);
    }
}
