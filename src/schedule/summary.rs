use chrono::NaiveDateTime;
use serde::Serialize;

use super::occurrence::next_end;
use super::resolver::{Resolution, Tier, resolve_with_tier};
use super::types::{OwnerId, ScheduleDefinition};
use crate::utils::clock::to_clock_string;

/// Display-ready view of the active schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub title: String,
    pub recurrence: &'static str,
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub next_end: String,
    pub tier: Option<Tier>,
    pub is_default: bool,
}

impl ScheduleSummary {
    /// Build the summary of a resolved schedule as seen at `now`
    pub fn from_resolution(resolution: &Resolution<'_>, now: NaiveDateTime) -> Self {
        let schedule = resolution.schedule;
        Self {
            tier: resolution.tier,
            ..Self::describe(schedule, now)
        }
    }

    fn describe(schedule: &ScheduleDefinition, now: NaiveDateTime) -> Self {
        Self {
            title: schedule.title.clone(),
            recurrence: schedule.recurrence.kind(),
            days: schedule.recurrence.label(),
            start_time: to_clock_string(schedule.start_minutes.map(i64::from)),
            end_time: to_clock_string(schedule.end_minutes.map(i64::from)),
            next_end: next_end(schedule, now.date()),
            tier: None,
            is_default: schedule.is_default(),
        }
    }
}

/// Resolve and summarize the owner's active schedule in one step
pub fn current_summary(
    definitions: &[ScheduleDefinition],
    owner: OwnerId,
    now: NaiveDateTime,
) -> ScheduleSummary {
    let resolution = resolve_with_tier(definitions, owner, now);
    ScheduleSummary::from_resolution(&resolution, now)
}
