//! Transaction validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence of `p1`, `p2`, `t`, `a`; non-empty names; distinct names;
//! parseable timestamp; numeric amount; positive amount.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::time::parse_timestamp;

const REQUIRED_FIELDS: [&str; 4] = ["p1", "p2", "t", "a"];

/// Validate a decoded request body, rewriting `a` as a JSON float on success
///
/// Fields outside the required set are left as they are.
pub fn validate_transaction(data: &mut Map<String, Value>) -> Result<(), ValidationError> {
    let amount = check_fields(data)?;
    data.insert("a".to_string(), Value::from(amount));
    Ok(())
}

/// Run every check in order, returning the coerced amount
fn check_fields(data: &Map<String, Value>) -> Result<f64, ValidationError> {
    for field in REQUIRED_FIELDS {
        if !data.contains_key(field) {
            return Err(ValidationError::missing(field));
        }
    }

    let p1 = non_empty_str(&data["p1"])
        .ok_or_else(|| ValidationError::invalid("p1 must be a non-empty string"))?;
    let p2 = non_empty_str(&data["p2"])
        .ok_or_else(|| ValidationError::invalid("p2 must be a non-empty string"))?;
    if p1 == p2 {
        return Err(ValidationError::invalid("p1 and p2 must be different"));
    }

    data["t"]
        .as_str()
        .filter(|t| parse_timestamp(t).is_ok())
        .ok_or_else(|| ValidationError::invalid("t must be a valid ISO-8601 timestamp string"))?;

    let amount = coerce_amount(&data["a"])
        .ok_or_else(|| ValidationError::invalid("a must be a number"))?;
    if amount <= 0.0 {
        return Err(ValidationError::invalid("a must be > 0"));
    }

    Ok(amount)
}

/// The string itself when it has content besides whitespace
fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

/// Numeric value of an amount given as a number, boolean or numeric string
fn coerce_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric_literal(s),
        _ => None,
    }?;

    // NaN and infinities have no JSON representation
    amount.is_finite().then_some(amount)
}

/// Parse a float literal, allowing `_` between two digits (`1_000.5`)
fn parse_numeric_literal(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut cleaned = String::with_capacity(text.len());

    for (i, c) in text.char_indices() {
        if c != '_' {
            cleaned.push(c);
            continue;
        }
        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).map_or(false, |b| b.is_ascii_digit());
        if !(after_digit && before_digit) {
            return None;
        }
    }

    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Map<String, Value> {
        match json!({"p1": "alice", "p2": "bob", "t": "2024-01-01T00:00:00Z", "a": 10}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn with(field: &str, value: Value) -> Map<String, Value> {
        let mut data = valid();
        data.insert(field.to_string(), value);
        data
    }

    fn error_of(mut data: Map<String, Value>) -> String {
        validate_transaction(&mut data).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_record_is_coerced() {
        let mut data = valid();
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(10.0));
        assert!(data["a"].is_f64());
        assert_eq!(data["p1"], json!("alice"));
    }

    #[test]
    fn test_missing_fields_named() {
        for field in REQUIRED_FIELDS {
            let mut data = valid();
            data.remove(field);
            assert_eq!(error_of(data), format!("Missing field: {}", field));
        }
    }

    #[test]
    fn test_missing_checked_before_types() {
        let mut data = with("p1", json!(42));
        data.remove("a");
        assert_eq!(error_of(data), "Missing field: a");
    }

    #[test]
    fn test_names_must_be_non_empty_strings() {
        assert_eq!(error_of(with("p1", json!("   "))), "p1 must be a non-empty string");
        assert_eq!(error_of(with("p1", json!(7))), "p1 must be a non-empty string");
        assert_eq!(error_of(with("p2", json!(""))), "p2 must be a non-empty string");
        assert_eq!(error_of(with("p2", Value::Null)), "p2 must be a non-empty string");
    }

    #[test]
    fn test_self_transaction_rejected() {
        assert_eq!(error_of(with("p2", json!("alice"))), "p1 and p2 must be different");

        // Other fields invalid too: the name check still comes first
        let mut data = with("p2", json!("alice"));
        data.insert("a".to_string(), json!(-1));
        assert_eq!(error_of(data), "p1 and p2 must be different");
    }

    #[test]
    fn test_names_compared_untrimmed() {
        let mut data = with("p2", json!("alice "));
        assert!(validate_transaction(&mut data).is_ok());
    }

    #[test]
    fn test_timestamp_must_parse() {
        let message = "t must be a valid ISO-8601 timestamp string";
        assert_eq!(error_of(with("t", json!("not a date"))), message);
        assert_eq!(error_of(with("t", json!(1704067200))), message);
    }

    #[test]
    fn test_amount_must_be_numeric() {
        assert_eq!(error_of(with("a", json!("ten"))), "a must be a number");
        assert_eq!(error_of(with("a", Value::Null)), "a must be a number");
        assert_eq!(error_of(with("a", json!([1]))), "a must be a number");
        assert_eq!(error_of(with("a", json!("nan"))), "a must be a number");
        assert_eq!(error_of(with("a", json!("inf"))), "a must be a number");
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(error_of(with("a", json!(0))), "a must be > 0");
        assert_eq!(error_of(with("a", json!(-5))), "a must be > 0");
        assert_eq!(error_of(with("a", json!("-0.5"))), "a must be > 0");
        assert_eq!(error_of(with("a", json!(false))), "a must be > 0");
    }

    #[test]
    fn test_amount_coercion() {
        let mut data = with("a", json!(0.01));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(0.01));

        let mut data = with("a", json!(" 42.5 "));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(42.5));

        let mut data = with("a", json!(true));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(1.0));
    }

    #[test]
    fn test_amount_digit_separators() {
        let mut data = with("a", json!("1_000"));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(1000.0));

        let mut data = with("a", json!("1_000.2_5"));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["a"], json!(1000.25));

        for bad in ["_1000", "1000_", "1__000", "1_.5", "1._5"] {
            assert_eq!(error_of(with("a", json!(bad))), "a must be a number", "{bad}");
        }
    }

    #[test]
    fn test_extra_fields_untouched() {
        let mut data = with("memo", json!({"k": [1, 2]}));
        validate_transaction(&mut data).unwrap();
        assert_eq!(data["memo"], json!({"k": [1, 2]}));
        assert_eq!(data.len(), 5);
    }
}
