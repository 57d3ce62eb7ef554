/// Pure calendar helpers (no clock reads, no timezone handling)
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Weekday index of a date, Monday = 0
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Minutes since midnight of a local date-time
pub fn minutes_of_day(now: NaiveDateTime) -> u32 {
    now.hour() * 60 + now.minute()
}

/// Check if a date matches month and day (ignoring year)
pub fn matches_month_day(date: NaiveDate, month: u32, day: u32) -> bool {
    date.month() == month && date.day() == day
}

/// Validate if a month/day combination can occur in some year
pub fn is_valid_date(month: u32, day: u32) -> bool {
    let max_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29, // Allow Feb 29 for leap years
        _ => return false,
    };

    (1..=max_day).contains(&day)
}

/// Build a date, returning None when it doesn't exist in that year (e.g. Feb 29)
pub fn date_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a month/day pair as "M/D" (e.g., "6/15")
pub fn format_month_day(month: u32, day: u32) -> String {
    format!("{}/{}", month, day)
}

/// Format a date as "Day MonthName" (e.g., "15 March")
pub fn format_date_display(month: u32, day: u32) -> String {
    format!("{} {}", day, get_month_name(month))
}

/// Get month name from month number (1-12)
pub fn get_month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Get weekday name from a Monday-based index (0-6)
pub fn get_weekday_name(index: u32) -> &'static str {
    match index {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "Unknown",
    }
}
