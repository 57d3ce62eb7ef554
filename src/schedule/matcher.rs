use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use super::types::{Recurrence, ScheduleDefinition};
use crate::utils::datetime::{matches_month_day, weekday_index};

/// Check whether a definition's recurrence pattern applies to a date.
///
/// Weekly definitions without weekday options and annual definitions without
/// dates never match; they are skipped rather than treated as errors.
pub fn matches(definition: &ScheduleDefinition, date: NaiveDate) -> bool {
    let day_index = weekday_index(date);

    match &definition.recurrence {
        Recurrence::Daily => true,
        Recurrence::Weekdays => {
            if day_index >= 5 {
                debug!("Skipping schedule {} - today is weekend", definition);
                return false;
            }
            true
        }
        Recurrence::Weekly { weekday_options } => {
            if weekday_options.is_empty() {
                warn!("Skipping schedule {} - no weekday options defined", definition);
                return false;
            }
            if !weekday_options.contains(&day_index) {
                debug!(
                    "Skipping schedule {} - today is index {} - weekday options {:?}",
                    definition, day_index, weekday_options
                );
                return false;
            }
            true
        }
        Recurrence::Annual { annual_dates } => {
            let is_match = annual_dates
                .iter()
                .any(|d| matches_month_day(date, d.month, d.day));
            if !is_match {
                debug!(
                    "Skipping annual schedule {} - no match for date {}/{}",
                    definition,
                    date.month(),
                    date.day()
                );
            }
            is_match
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::OwnerId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(recurrence: Recurrence) -> ScheduleDefinition {
        ScheduleDefinition::new("test", OwnerId(1), recurrence)
    }

    #[test]
    fn test_daily_always_matches() {
        let daily = schedule(Recurrence::Daily);
        for day in 1..=7 {
            assert!(matches(&daily, date(2024, 1, day)));
        }
    }

    #[test]
    fn test_weekdays() {
        let weekdays = schedule(Recurrence::Weekdays);
        assert!(matches(&weekdays, date(2024, 1, 1))); // Monday
        assert!(matches(&weekdays, date(2024, 1, 5))); // Friday
        assert!(!matches(&weekdays, date(2024, 1, 6))); // Saturday
        assert!(!matches(&weekdays, date(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_weekly_options() {
        let weekly = schedule(Recurrence::weekly([0, 2, 4]));
        assert!(matches(&weekly, date(2024, 1, 1))); // Monday
        assert!(!matches(&weekly, date(2024, 1, 2))); // Tuesday
        assert!(matches(&weekly, date(2024, 1, 3))); // Wednesday
        assert!(!matches(&weekly, date(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_weekly_without_options_never_matches() {
        let weekly = schedule(Recurrence::weekly([]));
        for day in 1..=7 {
            assert!(!matches(&weekly, date(2024, 1, day)));
        }
    }

    #[test]
    fn test_annual_dates() {
        let annual = schedule(Recurrence::annual([(12, 25), (1, 1)]));
        assert!(matches(&annual, date(2024, 12, 25)));
        assert!(matches(&annual, date(2031, 1, 1)));
        assert!(!matches(&annual, date(2024, 12, 24)));
        assert!(!matches(&annual, date(2024, 1, 25)));
    }

    #[test]
    fn test_annual_without_dates_never_matches() {
        let annual = schedule(Recurrence::annual([]));
        assert!(!matches(&annual, date(2024, 1, 1)));
    }
}
