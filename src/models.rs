use chrono_tz::Tz;
use dashmap::DashMap;
use tokio::sync::watch;

use crate::schedule::OwnerId;
use crate::store::ScheduleStore;

/// Monitor state shared between the schedule manager and signal handlers
pub struct MonitorState {
    /// Where schedule definitions are loaded from
    pub store: ScheduleStore,
    /// Timezone the owners' schedules are written in
    pub timezone: Tz,
    /// Only monitor this owner, if set
    pub owner_filter: Option<OwnerId>,
    /// Maps owners to the title of their currently active schedule
    pub active_schedules: DashMap<OwnerId, String>,
    /// Signals the schedule manager to reload definitions immediately
    pub schedule_reload_tx: watch::Sender<()>,
}

impl MonitorState {
    pub fn new(store: ScheduleStore, timezone: Tz, owner_filter: Option<OwnerId>) -> Self {
        let (schedule_reload_tx, _) = watch::channel(());
        Self {
            store,
            timezone,
            owner_filter,
            active_schedules: DashMap::new(),
            schedule_reload_tx,
        }
    }

    /// Ask the schedule manager to reload definitions now
    pub fn request_reload(&self) {
        // send_replace never fails, even without subscribers
        self.schedule_reload_tx.send_replace(());
    }

    /// Title of the schedule last seen active for `owner`
    pub fn active_title(&self, owner: OwnerId) -> Option<String> {
        self.active_schedules.get(&owner).map(|title| title.clone())
    }
}
