use tracing::debug;

use super::types::ScheduleDefinition;
use crate::constants::MINUTES_PER_DAY;

/// How a schedule's time window relates to the current time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Past the start and before the end
    FullyApplicable,
    /// Only one side of the window holds (or one side is unset)
    PartiallyApplicable,
    /// No time window configured at all
    NoSpecificTime,
    NotApplicable,
}

/// Classify `now_minutes` against a definition's start/end window.
///
/// Only meaningful for definitions whose recurrence already matched today.
/// Bounds beyond 24:00 are treated as malformed and never apply.
pub fn classify(definition: &ScheduleDefinition, now_minutes: u32) -> Applicability {
    let start = definition.start_minutes;
    let end = definition.end_minutes;

    if start.is_some_and(|s| s > MINUTES_PER_DAY) || end.is_some_and(|e| e > MINUTES_PER_DAY) {
        debug!("Schedule {} has out of range times, ignoring", definition);
        return Applicability::NotApplicable;
    }

    let end_ahead = end.is_some_and(|e| e > now_minutes);

    if start.is_some_and(|s| s < now_minutes) {
        if end_ahead {
            Applicability::FullyApplicable
        } else {
            Applicability::PartiallyApplicable
        }
    } else if end_ahead {
        Applicability::PartiallyApplicable
    } else if definition.has_no_specific_time() {
        Applicability::NoSpecificTime
    } else {
        Applicability::NotApplicable
    }
}
