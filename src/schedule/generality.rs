use super::types::{Recurrence, ScheduleDefinition};
use crate::constants::MINUTES_PER_DAY;

/// Specificity of a schedule's time window, lower is narrower.
///
/// Untimed schedules score 1.0 (daily) or 0.5 (any other recurrence). Overnight
/// windows (end before start) produce a negative score; callers accept that.
pub fn score(definition: &ScheduleDefinition) -> f64 {
    let day = f64::from(MINUTES_PER_DAY);
    let start = definition.start_minutes.filter(|&s| s != 0);
    let end = definition.end_minutes.filter(|&e| e != 0);

    match (start, end) {
        (None, None) => match definition.recurrence {
            Recurrence::Daily => 1.0,
            _ => 0.5,
        },
        (None, Some(end)) => f64::from(end) / day,
        (Some(start), None) => (day - f64::from(start)) / day,
        (Some(start), Some(end)) => (f64::from(end) - f64::from(start)) / day,
    }
}
