/// Schedule resolution modules
mod generality;
mod manager;
mod matcher;
mod occurrence;
mod resolver;
mod scenarios;
mod summary;
mod types;
mod window;

// Re-export public types and functions
pub use generality::score;
pub use manager::{record_transitions, start_schedule_manager};
pub use matcher::matches;
pub use occurrence::{
    OccurrenceError, closest_weekday_index, next_annual_occurrence, next_end, soonest_by_attribute,
};
pub use resolver::{Resolution, ResolveError, Tier, find_by_title, resolve, resolve_with_tier};
pub use summary::{ScheduleSummary, current_summary};
pub use types::{
    AnnualDate, DEFAULT_SCHEDULE, OwnerId, Recurrence, ScheduleAttribute, ScheduleDefinition,
};
pub use window::{Applicability, classify};
