use std::sync::Arc;

use chrono::NaiveDateTime;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use super::summary::{ScheduleSummary, current_summary};
use super::types::{OwnerId, ScheduleDefinition};
use crate::models::MonitorState;
use crate::store::owners;
use crate::utils::timezone::local_now;

/// Start the schedule manager that tracks each owner's active schedule
pub fn start_schedule_manager(state: Arc<MonitorState>, poll_interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Schedule manager started");

        let mut reload_rx = state.schedule_reload_tx.subscribe();

        loop {
            match state.store.load_all().await {
                Ok(definitions) => {
                    let now = local_now(&state.timezone);
                    let watched = match state.owner_filter {
                        Some(owner) => vec![owner],
                        None => owners(&definitions).into_iter().collect(),
                    };

                    if watched.is_empty() {
                        info!("No schedules configured, waiting for schedules to be added...");
                    }

                    for (owner, summary) in record_transitions(
                        &state.active_schedules,
                        &definitions,
                        &watched,
                        now,
                    ) {
                        info!(
                            "Owner {} is now on '{}' ({}, {}-{}), ends {}",
                            owner,
                            summary.title,
                            summary.days,
                            summary.start_time,
                            summary.end_time,
                            summary.next_end
                        );
                    }
                }
                Err(e) => {
                    error!("Failed to load schedules: {}", e);
                }
            }

            // Wait for the next pass OR until we get a reload signal
            tokio::select! {
                _ = sleep(poll_interval) => {}
                changed = reload_rx.changed() => {
                    if changed.is_err() {
                        // Channel closed, exit
                        break;
                    }
                    info!("Schedule reload signal received, reloading schedules");
                }
            }
        }

        info!("Schedule manager stopped");
    })
}

/// Resolve each owner's schedule at `now` and record it in `active`.
///
/// Returns the owners whose active schedule changed since the last pass.
pub fn record_transitions(
    active: &DashMap<OwnerId, String>,
    definitions: &[ScheduleDefinition],
    watched: &[OwnerId],
    now: NaiveDateTime,
) -> Vec<(OwnerId, ScheduleSummary)> {
    watched
        .iter()
        .filter_map(|&owner| {
            let summary = current_summary(definitions, owner, now);
            let previous = active.insert(owner, summary.title.clone());
            match previous {
                Some(title) if title == summary.title => None,
                _ => Some((owner, summary)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::Recurrence;
    use chrono::NaiveDate;

    fn tuesday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn definitions() -> Vec<ScheduleDefinition> {
        vec![
            ScheduleDefinition::new("Work", OwnerId(1), Recurrence::Weekdays).with_window(540, 1020),
            ScheduleDefinition::new("Evening", OwnerId(1), Recurrence::Daily).with_start(1020),
        ]
    }

    #[test]
    fn test_first_pass_reports_every_owner() {
        let active = DashMap::new();
        let changes = record_transitions(
            &active,
            &definitions(),
            &[OwnerId(1), OwnerId(2)],
            tuesday_at(10, 0),
        );

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].1.title, "Work");
        assert!(changes[1].1.is_default);
        assert_eq!(active.get(&OwnerId(1)).unwrap().as_str(), "Work");
    }

    #[test]
    fn test_unchanged_schedule_is_not_reported_again() {
        let active = DashMap::new();
        let definitions = definitions();
        record_transitions(&active, &definitions, &[OwnerId(1)], tuesday_at(10, 0));

        let changes = record_transitions(&active, &definitions, &[OwnerId(1)], tuesday_at(11, 0));
        assert!(changes.is_empty());

        let changes = record_transitions(&active, &definitions, &[OwnerId(1)], tuesday_at(18, 0));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].1.title, "Evening");
    }
}
