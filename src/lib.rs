//! Works out which of a user's recurring schedules is active at a given
//! moment, and when it (or the next one) ends.
//!
//! The engine in [`schedule`] is synchronous and pure: callers pass a
//! snapshot of definitions and an already-localized time. [`store`] and the
//! schedule manager exist for the `tagesform-monitor` binary.

pub mod constants;
pub mod models;
pub mod schedule;
pub mod store;
pub mod utils;
