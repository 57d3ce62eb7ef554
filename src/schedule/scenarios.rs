/// End-to-end resolution scenarios
#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::schedule::{
        DEFAULT_SCHEDULE, OwnerId, Recurrence, ScheduleDefinition, Tier, resolve, resolve_with_tier,
    };
    use crate::utils::clock::to_minutes;

    const OWNER: OwnerId = OwnerId(42);

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_weekday_window_beats_finished_daily_window() {
        let definitions = vec![
            ScheduleDefinition::new("Morning", OWNER, Recurrence::Daily)
                .with_window(to_minutes(6, 0), to_minutes(7, 0)),
            ScheduleDefinition::new("Work", OWNER, Recurrence::Weekdays)
                .with_window(to_minutes(9, 0), to_minutes(17, 0)),
        ];

        // Tuesday 10:00
        let resolution = resolve_with_tier(&definitions, OWNER, at(2024, 1, 2, 10, 0));
        assert_eq!(resolution.schedule.title, "Work");
        assert_eq!(resolution.tier, Some(Tier::FullyApplicable));
    }

    #[test]
    fn test_weekly_window_after_it_ended() {
        let definitions = vec![
            ScheduleDefinition::new("Choir", OWNER, Recurrence::weekly([0, 2, 4]))
                .with_window(to_minutes(18, 0), to_minutes(19, 0)),
        ];

        // Monday 20:00: past the start, so it's still partially applicable
        let resolution = resolve_with_tier(&definitions, OWNER, at(2024, 1, 1, 20, 0));
        assert_eq!(resolution.schedule.title, "Choir");
        assert_eq!(resolution.tier, Some(Tier::PartiallyApplicable));

        // Tuesday 20:00: not a choir day
        let resolution = resolve_with_tier(&definitions, OWNER, at(2024, 1, 2, 20, 0));
        assert!(resolution.schedule.is_default());
        assert_eq!(resolution.tier, None);
    }

    #[test]
    fn test_weekly_without_days_never_resolves() {
        let definitions = vec![
            ScheduleDefinition::new("Nothing", OWNER, Recurrence::weekly([]))
                .with_window(0, 1440),
        ];
        for day in 1..=7 {
            assert!(resolve(&definitions, OWNER, at(2024, 1, day, 12, 0)).is_default());
        }
    }

    #[test]
    fn test_no_enabled_definitions_gives_default() {
        let definitions = vec![
            ScheduleDefinition::new("Off", OWNER, Recurrence::Daily)
                .with_window(0, 1440)
                .disabled(),
        ];
        let schedule = resolve(&definitions, OWNER, at(2024, 1, 2, 12, 0));
        assert!(std::ptr::eq(schedule, &*DEFAULT_SCHEDULE));
        assert_eq!(schedule.recurrence, Recurrence::Daily);
        assert_eq!(schedule.start_minutes, Some(0));
        assert_eq!(schedule.end_minutes, Some(1440));

        assert!(resolve(&[], OWNER, at(2024, 1, 2, 12, 0)).is_default());
    }

    #[test]
    fn test_annual_schedule_takes_over_on_its_date() {
        let definitions = vec![
            ScheduleDefinition::new("Routine", OWNER, Recurrence::Daily),
            ScheduleDefinition::new("Holiday", OWNER, Recurrence::annual([(12, 25), (1, 1)])),
        ];

        // Untimed: the annual schedule is narrower than the daily one
        assert_eq!(resolve(&definitions, OWNER, at(2024, 12, 25, 9, 0)).title, "Holiday");
        assert_eq!(resolve(&definitions, OWNER, at(2024, 12, 26, 9, 0)).title, "Routine");
    }

    #[test]
    fn test_owners_are_isolated() {
        let definitions = vec![
            ScheduleDefinition::new("Mine", OWNER, Recurrence::Daily).with_window(0, 1440),
            ScheduleDefinition::new("Theirs", OwnerId(7), Recurrence::Daily).with_window(0, 1440),
        ];
        assert_eq!(resolve(&definitions, OWNER, at(2024, 1, 2, 12, 0)).title, "Mine");
        assert_eq!(resolve(&definitions, OwnerId(7), at(2024, 1, 2, 12, 0)).title, "Theirs");
        assert!(resolve(&definitions, OwnerId(8), at(2024, 1, 2, 12, 0)).is_default());
    }
}
