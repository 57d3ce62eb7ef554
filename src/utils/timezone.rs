use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Convert a UTC instant to wall-clock time in `timezone`
pub fn to_local(instant: DateTime<Utc>, timezone: &Tz) -> NaiveDateTime {
    instant.with_timezone(timezone).naive_local()
}

/// Current wall-clock time in `timezone`
pub fn local_now(timezone: &Tz) -> NaiveDateTime {
    to_local(Utc::now(), timezone)
}
