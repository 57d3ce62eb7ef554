use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use super::generality::score;
use super::matcher::matches;
use super::types::{DEFAULT_SCHEDULE, OwnerId, ScheduleDefinition};
use super::window::{Applicability, classify};
use crate::utils::datetime::minutes_of_day;

/// Error types for schedule lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No schedule found with name: {title} (owner {owner})")]
    NotFound { title: String, owner: OwnerId },
}

/// Priority class a resolved schedule was selected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    FullyApplicable,
    PartiallyApplicable,
    NoSpecificTime,
}

/// The winning schedule and the tier it came from (None for the default)
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub schedule: &'a ScheduleDefinition,
    pub tier: Option<Tier>,
}

/// Find the schedule that is active for `owner` at the local time `now`.
///
/// Falls back to the built-in default schedule when nothing applies.
pub fn resolve(
    definitions: &[ScheduleDefinition],
    owner: OwnerId,
    now: NaiveDateTime,
) -> &ScheduleDefinition {
    resolve_with_tier(definitions, owner, now).schedule
}

/// Like [`resolve`], also reporting which tier produced the winner.
///
/// The first fully applicable definition in input order wins outright. Only
/// partially applicable and untimed candidates are ranked by generality.
pub fn resolve_with_tier(
    definitions: &[ScheduleDefinition],
    owner: OwnerId,
    now: NaiveDateTime,
) -> Resolution<'_> {
    let today = now.date();
    let current_time = minutes_of_day(now);
    let mut partially_applicable = Vec::new();
    let mut no_specific_times = Vec::new();

    debug!("Finding active schedule for owner {} at {}", owner, now);

    let candidates = definitions
        .iter()
        .filter(|d| d.enabled && d.owner == owner)
        .filter(|d| matches(d, today));

    for schedule in candidates {
        match classify(schedule, current_time) {
            Applicability::FullyApplicable => {
                info!("Schedule {} is applicable", schedule);
                return Resolution {
                    schedule,
                    tier: Some(Tier::FullyApplicable),
                };
            }
            Applicability::PartiallyApplicable => {
                debug!("Schedule {} is partially applicable", schedule);
                partially_applicable.push(schedule);
            }
            Applicability::NoSpecificTime => {
                debug!("Schedule {} has no specific times", schedule);
                no_specific_times.push(schedule);
            }
            Applicability::NotApplicable => {
                debug!("Schedule {} is not applicable at this time", schedule);
            }
        }
    }

    if let Some(schedule) = most_specific(partially_applicable) {
        info!("Schedule {} is the most specific partially applicable", schedule);
        return Resolution {
            schedule,
            tier: Some(Tier::PartiallyApplicable),
        };
    }

    if let Some(schedule) = most_specific(no_specific_times) {
        info!("Schedule {} applies today but has no specific times", schedule);
        return Resolution {
            schedule,
            tier: Some(Tier::NoSpecificTime),
        };
    }

    warn!("No applicable schedule found for owner {}, using default schedule", owner);
    Resolution {
        schedule: &DEFAULT_SCHEDULE,
        tier: None,
    }
}

/// Lowest generality score wins; the sort is stable so ties keep input order
fn most_specific(mut candidates: Vec<&ScheduleDefinition>) -> Option<&ScheduleDefinition> {
    candidates.sort_by(|a, b| score(a).total_cmp(&score(b)));
    candidates.first().copied()
}

/// Look up one of the owner's schedules by its title
pub fn find_by_title<'a>(
    definitions: &'a [ScheduleDefinition],
    owner: OwnerId,
    title: &str,
) -> Result<&'a ScheduleDefinition, ResolveError> {
    definitions
        .iter()
        .find(|d| d.owner == owner && d.title == title)
        .ok_or_else(|| ResolveError::NotFound {
            title: title.to_string(),
            owner,
        })
}
