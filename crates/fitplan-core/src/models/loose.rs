// ABOUTME: Lenient readers for loosely typed JSON values coming from forms and remote services
// ABOUTME: Integer parsing follows leading-digit semantics so "12 reps" reads as 12
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

/// Read an integer from a JSON number or a string with a leading integer.
///
/// Fractional numbers are truncated toward zero. Strings are read up to the
/// first non-digit after an optional sign, so `"12 reps"` yields `12` and
/// `"abc"` yields `None`.
#[must_use]
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        Value::String(text) => leading_integer(text),
        _ => None,
    }
}

/// Read a finite number from a JSON number or a numeric string.
///
/// Strings that are not a complete number fall back to their leading integer.
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .or_else(|| leading_integer(text).map(|v| v as f64)),
        _ => None,
    }
}

/// Read free text; numbers and booleans are rendered, everything else is absent.
#[must_use]
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_reads_numbers_and_prefixes() {
        assert_eq!(integer(&json!(12)), Some(12));
        assert_eq!(integer(&json!(3.9)), Some(3));
        assert_eq!(integer(&json!("15")), Some(15));
        assert_eq!(integer(&json!("  8 reps")), Some(8));
        assert_eq!(integer(&json!("-4")), Some(-4));
        assert_eq!(integer(&json!("to failure")), None);
        assert_eq!(integer(&json!("")), None);
        assert_eq!(integer(&json!(null)), None);
        assert_eq!(integer(&json!([3])), None);
    }

    #[test]
    fn test_number_prefers_full_parse() {
        assert_eq!(number(&json!(70.5)), Some(70.5));
        assert_eq!(number(&json!("72.5")), Some(72.5));
        assert_eq!(number(&json!("180cm")), Some(180.0));
        assert_eq!(number(&json!("tall")), None);
        assert_eq!(number(&json!(true)), None);
    }

    #[test]
    fn test_text_renders_scalars_only() {
        assert_eq!(text(&json!("knee pain")), Some("knee pain".to_owned()));
        assert_eq!(text(&json!(42)), Some("42".to_owned()));
        assert_eq!(text(&json!(null)), None);
        assert_eq!(text(&json!({"a": 1})), None);
    }
}
