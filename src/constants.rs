/// Minutes in a day; also the largest valid minutes-since-midnight value (24:00)
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Placeholder shown for unset or malformed clock times
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when no end can be derived for a schedule
pub const UNKNOWN_TIME: &str = "unknown time";

/// Title of the built-in fallback schedule
pub const DEFAULT_SCHEDULE_TITLE: &str = "Default";

/// Default interval between monitor passes
pub const DEFAULT_POLL_SECS: u64 = 60;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "tagesform_rs=info";
