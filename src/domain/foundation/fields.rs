//! Helpers for reading loosely-typed request fields.
//!
//! The dashboard sends partially-filled objects. A field counts as missing when
//! it is absent, null, blank, or (for ids and totals) zero.

use chrono::{DateTime, NaiveDate};

use super::ValidationError;

/// Returns the trimmed-non-empty text value, or `None` when missing.
pub fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Returns the id when present and non-zero.
pub fn present_id<T: From<i64>>(value: Option<i64>) -> Option<T> {
    value.filter(|v| *v != 0).map(T::from)
}

/// Returns the amount when present and non-zero.
pub fn present_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

/// Parses a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}
