//! Defaulting field readers over untyped Matomo rows.
//!
//! Matomo's JSON varies between versions and plugins: numbers sometimes
//! arrive as strings, keys go missing for empty periods, and a report that
//! normally returns a list may return a record. Every reader here is total:
//! anything it cannot read becomes the field's default.

use serde_json::Value;

/// Rows of a list report; a non-list body has no rows.
pub fn rows(raw: &Value) -> &[Value] {
    raw.as_array().map(Vec::as_slice).unwrap_or_default()
}

/// First row of a list report, if any.
pub fn first_row(raw: &Value) -> Option<&Value> {
    rows(raw).first()
}

/// A non-negative count. Floats are rounded, numeric strings are parsed.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count(row: &Value, key: &str) -> u64 {
    let value = decimal(row, key);
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// A decimal number, or 0.
pub fn decimal(row: &Value, key: &str) -> f64 {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// A percentage such as `12.5`, `"12.5"` or `"12.5%"`, or 0.
pub fn percentage(row: &Value, key: &str) -> f64 {
    match row.get(key) {
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        _ => decimal(row, key),
    }
}

/// A string field. Numbers are rendered; anything else is `default`.
pub fn text(row: &Value, key: &str, default: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// A row label, or an empty string.
pub fn label(row: &Value) -> String {
    text(row, "label", "")
}

/// A Matomo-formatted rate, or `"0%"`.
pub fn rate(row: &Value, key: &str) -> String {
    text(row, key, "0%")
}
