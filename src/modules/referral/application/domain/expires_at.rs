use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpiresAtError {
    #[error("expires_at is required")]
    Missing,

    #[error("expires_at is not a valid ISO-8601 date-time: {0}")]
    Invalid(String),
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, naive date-times (`T` or space separator,
/// optional fraction) read as UTC, and bare dates read as midnight UTC.
/// Blank input counts as missing.
pub fn parse_expires_at(raw: Option<&str>) -> Result<DateTime<Utc>, ExpiresAtError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ExpiresAtError::Missing);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(ExpiresAtError::Invalid(value.to_string()))
}
