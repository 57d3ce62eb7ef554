use crate::constants::MINUTES_PER_DAY;
use crate::schedule::{Recurrence, ScheduleDefinition};
use crate::utils::datetime::is_valid_date;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Please select at least one day of the week for weekly schedules")]
    NoWeekdayOptions,
    #[error("Invalid weekday index {0}, expected 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday(u32),
    #[error("At least one annual date is required for annual schedules")]
    NoAnnualDates,
    #[error("Invalid date: {month}/{day}")]
    InvalidAnnualDate { month: u32, day: u32 },
    #[error("Time {0} is outside 00:00-24:00")]
    TimeOutOfRange(u32),
    #[error("End time {end} is before start time {start}")]
    EndBeforeStart { start: u32, end: u32 },
}

/// Collect every problem with a definition.
///
/// The resolver tolerates all of these; this is for surfacing dirty data.
pub fn validation_errors(definition: &ScheduleDefinition) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if definition.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    match &definition.recurrence {
        Recurrence::Daily | Recurrence::Weekdays => {}
        Recurrence::Weekly { weekday_options } => {
            if weekday_options.is_empty() {
                errors.push(ValidationError::NoWeekdayOptions);
            }
            errors.extend(
                weekday_options
                    .iter()
                    .filter(|&&i| i > 6)
                    .map(|&i| ValidationError::InvalidWeekday(i)),
            );
        }
        Recurrence::Annual { annual_dates } => {
            if annual_dates.is_empty() {
                errors.push(ValidationError::NoAnnualDates);
            }
            errors.extend(
                annual_dates
                    .iter()
                    .filter(|d| !is_valid_date(d.month, d.day))
                    .map(|d| ValidationError::InvalidAnnualDate {
                        month: d.month,
                        day: d.day,
                    }),
            );
        }
    }

    for minutes in [definition.start_minutes, definition.end_minutes]
        .into_iter()
        .flatten()
    {
        if minutes > MINUTES_PER_DAY {
            errors.push(ValidationError::TimeOutOfRange(minutes));
        }
    }

    if let (Some(start), Some(end)) = (definition.start_minutes, definition.end_minutes) {
        if end < start {
            errors.push(ValidationError::EndBeforeStart { start, end });
        }
    }

    errors
}

/// Validate a definition, reporting the first problem found
pub fn validate_definition(definition: &ScheduleDefinition) -> Result<(), ValidationError> {
    match validation_errors(definition).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::OwnerId;

    fn schedule(recurrence: Recurrence) -> ScheduleDefinition {
        ScheduleDefinition::new("test", OwnerId(1), recurrence)
    }

    #[test]
    fn test_valid_definitions() {
        assert!(validate_definition(&schedule(Recurrence::Daily).with_window(540, 1020)).is_ok());
        assert!(validate_definition(&schedule(Recurrence::weekly([0, 6]))).is_ok());
        assert!(validate_definition(&schedule(Recurrence::annual([(2, 29)]))).is_ok());
        assert!(validate_definition(&schedule(Recurrence::Weekdays).with_window(0, 1440)).is_ok());
    }

    #[test]
    fn test_empty_title() {
        let untitled = ScheduleDefinition::new("  ", OwnerId(1), Recurrence::Daily);
        assert_eq!(validate_definition(&untitled), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_weekly_checks() {
        assert_eq!(
            validate_definition(&schedule(Recurrence::weekly([]))),
            Err(ValidationError::NoWeekdayOptions)
        );
        assert_eq!(
            validation_errors(&schedule(Recurrence::weekly([1, 7, 9]))),
            vec![ValidationError::InvalidWeekday(7), ValidationError::InvalidWeekday(9)]
        );
    }

    #[test]
    fn test_annual_checks() {
        assert_eq!(
            validate_definition(&schedule(Recurrence::annual([]))),
            Err(ValidationError::NoAnnualDates)
        );
        assert_eq!(
            validation_errors(&schedule(Recurrence::annual([(4, 31), (2, 30), (13, 1), (5, 5)]))),
            vec![
                ValidationError::InvalidAnnualDate { month: 4, day: 31 },
                ValidationError::InvalidAnnualDate { month: 2, day: 30 },
                ValidationError::InvalidAnnualDate { month: 13, day: 1 },
            ]
        );
    }

    #[test]
    fn test_time_checks() {
        assert_eq!(
            validation_errors(&schedule(Recurrence::Daily).with_window(1320, 120)),
            vec![ValidationError::EndBeforeStart { start: 1320, end: 120 }]
        );
        assert_eq!(
            validation_errors(&schedule(Recurrence::Daily).with_end(1500)),
            vec![ValidationError::TimeOutOfRange(1500)]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidAnnualDate { month: 4, day: 31 }.to_string(),
            "Invalid date: 4/31"
        );
        assert_eq!(
            ValidationError::EndBeforeStart { start: 600, end: 60 }.to_string(),
            "End time 60 is before start time 600"
        );
    }
}
