/// Pure minutes-since-midnight conversions (storage uses minutes, display uses HH:MM)
use crate::constants::{MINUTES_PER_DAY, NOT_AVAILABLE};

/// Error types for clock parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid time format: expected HH:MM, got '{0}'")]
    InvalidTime(String),
    #[error("Time out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },
}

/// Convert an hour and minute to minutes since midnight, saturating at `u32::MAX`
pub fn to_minutes(hour: u32, minute: u32) -> u32 {
    hour.saturating_mul(60).saturating_add(minute)
}

/// Parse a time string in HH:MM format into minutes since midnight.
///
/// `24:00` is accepted as the end of the day (1440).
pub fn parse_clock(time_str: &str) -> Result<u32, ClockError> {
    let (hour, minute) = time_str
        .trim()
        .split_once(':')
        .ok_or_else(|| ClockError::InvalidTime(time_str.to_string()))?;

    let hour: u32 = hour
        .trim()
        .parse()
        .map_err(|_| ClockError::InvalidTime(time_str.to_string()))?;
    let minute: u32 = minute
        .trim()
        .parse()
        .map_err(|_| ClockError::InvalidTime(time_str.to_string()))?;

    if hour > 24 || minute > 59 || to_minutes(hour, minute) > MINUTES_PER_DAY {
        return Err(ClockError::OutOfRange { hour, minute });
    }

    Ok(to_minutes(hour, minute))
}

/// Parse a time string, treating anything unparseable as unset.
///
/// `None` means "no time configured" and is distinct from `Some(0)` (midnight).
pub fn parse_clock_lenient(time_str: &str) -> Option<u32> {
    if time_str.trim().is_empty() {
        return None;
    }
    parse_clock(time_str).ok()
}

/// Format minutes since midnight as zero-padded HH:MM.
///
/// Unset or negative values render as "N/A" so display code never fails on dirty data.
pub fn to_clock_string(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m >= 0 => format!("{:02}:{:02}", m / 60, m % 60),
        _ => NOT_AVAILABLE.to_string(),
    }
}
