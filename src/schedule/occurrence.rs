use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::types::{AnnualDate, OwnerId, Recurrence, ScheduleAttribute, ScheduleDefinition};
use crate::constants::UNKNOWN_TIME;
use crate::utils::clock::to_clock_string;
use crate::utils::datetime::{date_in_year, format_month_day, get_weekday_name, weekday_index};

/// Longest gap between two occurrences of Feb 29
const LEAP_CYCLE_YEARS: i32 = 8;

/// Error types for next-occurrence calculations.
///
/// These indicate a definition that should never have matched in the first place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OccurrenceError {
    #[error("Schedule {title} has no weekday options")]
    NoWeekdayOptions { title: String },
    #[error("Schedule {title} has no annual dates defined")]
    NoAnnualDates { title: String },
    #[error("Schedule {title} has no valid annual dates")]
    NoValidAnnualDate { title: String },
}

/// Describe when a schedule next ends, for display.
///
/// Annual schedules report their next date ("6/15", or "6/15 (next year)" once
/// this year's dates have passed). Timed schedules report their end time.
/// Otherwise the first upcoming day the schedule doesn't cover is named.
pub fn next_end(definition: &ScheduleDefinition, today: NaiveDate) -> String {
    if let Recurrence::Annual { annual_dates } = &definition.recurrence {
        if let Some(text) = next_annual_date_text(annual_dates, today) {
            return text;
        }
    }

    if let Some(end) = definition.end_minutes {
        return to_clock_string(Some(i64::from(end)));
    }

    next_uncovered_day_text(&definition.recurrence, today)
}

fn next_annual_date_text(annual_dates: &[AnnualDate], today: NaiveDate) -> Option<String> {
    let mut sorted = annual_dates.to_vec();
    sorted.sort();

    let current = AnnualDate::new(today.month(), today.day());
    if let Some(next) = sorted.iter().find(|d| **d > current) {
        return Some(format_month_day(next.month, next.day));
    }

    sorted
        .first()
        .map(|first| format!("{} (next year)", format_month_day(first.month, first.day)))
}

fn next_uncovered_day_text(recurrence: &Recurrence, today: NaiveDate) -> String {
    // A set covering no day never started, so it has no upcoming end
    if (0..7).all(|index| recurrence.applies_on_weekday(index) == Some(false)) {
        return UNKNOWN_TIME.to_string();
    }

    let today_index = weekday_index(today);

    for offset in 1..=7 {
        let index = (today_index + offset) % 7;
        match recurrence.applies_on_weekday(index) {
            Some(true) => continue,
            Some(false) if offset == 1 => return "Tomorrow".to_string(),
            Some(false) => return get_weekday_name(index).to_string(),
            None => break,
        }
    }

    UNKNOWN_TIME.to_string()
}

/// Weekday index (Monday = 0) at which a schedule next applies, from `today`.
///
/// With `total_days`, wrapped weekly results are pushed into next week (+7),
/// and annual results become the number of days until the next date.
pub fn closest_weekday_index(
    definition: &ScheduleDefinition,
    today: NaiveDate,
    total_days: bool,
) -> Result<u32, OccurrenceError> {
    let today_index = weekday_index(today);

    match &definition.recurrence {
        Recurrence::Daily => Ok(today_index),
        Recurrence::Weekdays => {
            if today_index < 5 {
                Ok(today_index)
            } else if total_days {
                Ok(7) // Next Monday
            } else {
                Ok(0)
            }
        }
        Recurrence::Weekly { weekday_options } => {
            // Indices past Sunday name no real day
            let mut valid = weekday_options.iter().copied().filter(|&i| i < 7);
            if let Some(index) = valid.clone().find(|&i| i >= today_index) {
                return Ok(index);
            }
            let first = valid.next().ok_or_else(|| {
                OccurrenceError::NoWeekdayOptions {
                    title: definition.title.clone(),
                }
            })?;
            Ok(if total_days { first + 7 } else { first })
        }
        Recurrence::Annual { annual_dates } => {
            if annual_dates.is_empty() {
                return Err(OccurrenceError::NoAnnualDates {
                    title: definition.title.clone(),
                });
            }
            let next = next_annual_occurrence(annual_dates, today).ok_or_else(|| {
                OccurrenceError::NoValidAnnualDate {
                    title: definition.title.clone(),
                }
            })?;
            if total_days {
                Ok((next - today).num_days() as u32)
            } else {
                Ok(weekday_index(next))
            }
        }
    }
}

/// Earliest calendar date strictly after `today` that matches any annual date
pub fn next_annual_occurrence(annual_dates: &[AnnualDate], today: NaiveDate) -> Option<NaiveDate> {
    annual_dates
        .iter()
        .filter_map(|date| {
            (today.year()..=today.year() + LEAP_CYCLE_YEARS)
                .filter_map(|year| date_in_year(year, date.month, date.day))
                .find(|candidate| *candidate > today)
        })
        .min()
}

/// Find the owner's enabled schedule with `attribute == value` that comes up
/// soonest, with its closest weekday index.
///
/// Candidates are ranked by `start * (1 + days until next occurrence)`; an
/// unset start counts as midnight.
pub fn soonest_by_attribute<'a>(
    definitions: &'a [ScheduleDefinition],
    owner: OwnerId,
    attribute: ScheduleAttribute,
    value: &str,
    today: NaiveDate,
) -> Result<Option<(&'a ScheduleDefinition, u32)>, OccurrenceError> {
    let mut ranked = definitions
        .iter()
        .filter(|d| d.enabled && d.owner == owner)
        .filter(|d| attribute.value_of(d) == Some(value))
        .map(|d| -> Result<(u64, &'a ScheduleDefinition), OccurrenceError> {
            let days = closest_weekday_index(d, today, true)?;
            let start = u64::from(d.start_minutes.unwrap_or(0));
            Ok((start * (1 + u64::from(days)), d))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ranked.is_empty() {
        debug!("No schedules with {:?} = {} for owner {}", attribute, value, owner);
        return Ok(None);
    }

    ranked.sort_by_key(|(key, _)| *key);
    let (_, schedule) = ranked[0];
    let index = closest_weekday_index(schedule, today, false)?;
    Ok(Some((schedule, index)))
}
