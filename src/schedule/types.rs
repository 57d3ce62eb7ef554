use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCHEDULE_TITLE, MINUTES_PER_DAY};
use crate::utils::clock::to_clock_string;
use crate::utils::datetime::{format_date_display, get_weekday_name};

/// Identifies the user a set of schedule definitions belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub i64);

impl OwnerId {
    /// Owner of the built-in default schedule; never matches a real user
    pub const UNOWNED: OwnerId = OwnerId(0);
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A yearly recurring calendar date (no year component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnualDate {
    pub month: u32,
    pub day: u32,
}

impl AnnualDate {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Which calendar dates a schedule applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "recurrence", rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    /// Monday to Friday
    Weekdays,
    /// Custom weekday set, Monday = 0
    Weekly {
        #[serde(default)]
        weekday_options: BTreeSet<u32>,
    },
    /// Fixed month/day pairs that recur every year
    Annual {
        #[serde(default)]
        annual_dates: Vec<AnnualDate>,
    },
}

impl Recurrence {
    /// Build a weekly recurrence from Monday-based weekday indices
    pub fn weekly(days: impl IntoIterator<Item = u32>) -> Self {
        Recurrence::Weekly {
            weekday_options: days.into_iter().collect(),
        }
    }

    /// Build an annual recurrence from (month, day) pairs
    pub fn annual(dates: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Recurrence::Annual {
            annual_dates: dates
                .into_iter()
                .map(|(month, day)| AnnualDate::new(month, day))
                .collect(),
        }
    }

    /// Whether the recurrence applies on a weekday index.
    ///
    /// Returns None for annual recurrences, which aren't tied to weekdays.
    pub fn applies_on_weekday(&self, index: u32) -> Option<bool> {
        match self {
            Recurrence::Daily => Some(true),
            Recurrence::Weekdays => Some(index < 5),
            Recurrence::Weekly { weekday_options } => Some(weekday_options.contains(&index)),
            Recurrence::Annual { .. } => None,
        }
    }

    /// Short lowercase name, matching the serialized tag
    pub fn kind(&self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekdays => "weekdays",
            Recurrence::Weekly { .. } => "weekly",
            Recurrence::Annual { .. } => "annual",
        }
    }

    /// Human readable description of the days covered
    pub fn label(&self) -> String {
        match self {
            Recurrence::Daily => "Every day".to_string(),
            Recurrence::Weekdays => "Weekdays".to_string(),
            Recurrence::Weekly { weekday_options } if weekday_options.is_empty() => {
                "No days".to_string()
            }
            Recurrence::Weekly { weekday_options } if weekday_options.len() == 7 => {
                "Every day".to_string()
            }
            Recurrence::Weekly { weekday_options } => weekday_options
                .iter()
                .map(|&i| get_weekday_name(i))
                .collect::<Vec<_>>()
                .join(", "),
            Recurrence::Annual { annual_dates } if annual_dates.is_empty() => {
                "No dates".to_string()
            }
            Recurrence::Annual { annual_dates } => annual_dates
                .iter()
                .map(|d| format_date_display(d.month, d.day))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// A user's recurring schedule, as loaded from storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDefinition {
    pub title: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub owner: OwnerId,
    #[serde(flatten)]
    pub recurrence: Recurrence,
    /// Minutes since midnight; None means unbounded on this side
    #[serde(default)]
    pub start_minutes: Option<u32>,
    #[serde(default)]
    pub end_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl ScheduleDefinition {
    /// Create an enabled definition with no time window
    pub fn new(title: impl Into<String>, owner: OwnerId, recurrence: Recurrence) -> Self {
        Self {
            title: title.into(),
            enabled: true,
            owner,
            recurrence,
            start_minutes: None,
            end_minutes: None,
            category: None,
            location: None,
            description: None,
        }
    }

    /// Set both ends of the time window
    pub fn with_window(mut self, start_minutes: u32, end_minutes: u32) -> Self {
        self.start_minutes = Some(start_minutes);
        self.end_minutes = Some(end_minutes);
        self
    }

    pub fn with_start(mut self, start_minutes: u32) -> Self {
        self.start_minutes = Some(start_minutes);
        self
    }

    pub fn with_end(mut self, end_minutes: u32) -> Self {
        self.end_minutes = Some(end_minutes);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// True when neither bound is configured (unset or both zero)
    pub fn has_no_specific_time(&self) -> bool {
        matches!(
            (self.start_minutes, self.end_minutes),
            (None, None) | (Some(0), Some(0))
        )
    }

    /// Whether this is the built-in default schedule itself, not a lookalike
    pub fn is_default(&self) -> bool {
        std::ptr::eq(self, &*DEFAULT_SCHEDULE)
    }
}

impl fmt::Display for ScheduleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Days: {} - Times: {}-{}",
            self.title,
            self.recurrence.label(),
            to_clock_string(self.start_minutes.map(i64::from)),
            to_clock_string(self.end_minutes.map(i64::from)),
        )
    }
}

/// Attributes a schedule can be looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAttribute {
    Title,
    Category,
    Location,
}

impl ScheduleAttribute {
    /// Read this attribute from a definition
    pub fn value_of<'a>(&self, definition: &'a ScheduleDefinition) -> Option<&'a str> {
        match self {
            ScheduleAttribute::Title => Some(definition.title.as_str()),
            ScheduleAttribute::Category => definition.category.as_deref(),
            ScheduleAttribute::Location => definition.location.as_deref(),
        }
    }
}

/// Fallback returned when no user schedule applies: all day, every day
pub static DEFAULT_SCHEDULE: LazyLock<ScheduleDefinition> = LazyLock::new(|| {
    ScheduleDefinition::new(DEFAULT_SCHEDULE_TITLE, OwnerId::UNOWNED, Recurrence::Daily)
        .with_window(0, MINUTES_PER_DAY)
});
