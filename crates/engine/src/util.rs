//! Internal helpers for input validation and normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so wallet and transaction writes enforce the same rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{EngineError, ResultEngine};

pub(crate) const DEFAULT_WALLET_COLOR: &str = "#000000";
const MAX_WALLET_NAME_LEN: usize = 100;

/// Naive formats accepted after RFC 3339, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`Z` or numeric offset), naive date-times and plain dates
/// (midnight UTC).
pub(crate) fn parse_datetime(raw: &str) -> ResultEngine<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }
    Err(EngineError::Validation(
        "Invalid date format. Use ISO format (YYYY-MM-DDTHH:MM:SS)".to_string(),
    ))
}

pub(crate) fn normalize_wallet_name(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "Field nama_dompet is required".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_WALLET_NAME_LEN {
        return Err(EngineError::Validation(format!(
            "wallet name must be at most {MAX_WALLET_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// `None` keeps the stored value; an empty string clears it.
pub(crate) fn apply_optional_text_patch(
    existing: Option<String>,
    patch: Option<&str>,
) -> Option<String> {
    match patch {
        None => existing,
        Some(value) => normalize_optional_text(Some(value)),
    }
}

/// Validate a `#RGB`/`#RRGGBB` color. The trimmed value is kept as typed.
pub(crate) fn validate_color(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    let valid = trimmed
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(EngineError::Validation(format!(
            "invalid color '{trimmed}': expected a hex code like #1a2b3c"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_rfc3339_with_z_and_offset() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime("2024-05-01T10:30:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2024-05-01T17:30:00+07:00").unwrap(), expected);
    }

    #[test]
    fn parses_naive_forms_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime("2024-05-01T10:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-05-01 10:30:00").unwrap(), expected);
        assert_eq!(
            parse_datetime("2024-05-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_datetime("2024-13-01").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn wallet_name_is_trimmed_and_required() {
        assert_eq!(normalize_wallet_name("  Cash ").unwrap(), "Cash");
        assert!(normalize_wallet_name("   ").is_err());
        assert!(normalize_wallet_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn text_patch_semantics() {
        let existing = Some("lunch".to_string());
        assert_eq!(apply_optional_text_patch(existing.clone(), None), existing);
        assert_eq!(apply_optional_text_patch(existing.clone(), Some("  ")), None);
        assert_eq!(
            apply_optional_text_patch(existing, Some("dinner")),
            Some("dinner".to_string())
        );
    }

    #[test]
    fn colors() {
        assert_eq!(validate_color("#1A2b3c").unwrap(), "#1A2b3c");
        assert_eq!(validate_color("#fff").unwrap(), "#fff");
        assert!(validate_color("1a2b3c").is_err());
        assert!(validate_color("#12345g").is_err());
        assert!(validate_color("#1234").is_err());
    }
}
