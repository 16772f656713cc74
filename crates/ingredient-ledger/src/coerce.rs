//! Lenient Number Coercion
//!
//! Ingredient payloads are produced by a generative model, so numeric fields
//! arrive as numbers, numeric strings, nulls or prose ("to taste").
//! Nothing here ever fails: unreadable values become NaN and callers pick a default.

use serde_json::Value;

/// Numeric reading of a JSON value.
///
/// `null` and `false` read as 0, `true` as 1, strings are trimmed and parsed
/// (an empty string reads as 0). Arrays, objects and unparseable strings are NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Numeric reading of `value`, or `default` when it reads as 0, NaN or infinity.
pub fn number_or(value: &Value, default: f64) -> f64 {
    let n = to_number(value);
    if n == 0.0 || !n.is_finite() {
        default
    } else {
        n
    }
}

/// Parse text typed into a quantity field.
///
/// Reads the longest leading decimal (`"2.5kg"` is 2.5), so stray unit
/// suffixes survive. Anything without a leading number is 0.
pub fn parse_typed_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return n;
        }
    }

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    trimmed[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
