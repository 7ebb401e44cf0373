//! DayPlan domain type

use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::id::generate_day_id;

/// One day of the trip: a title and an ordered list of activities.
///
/// The id is assigned at creation and never changes; reordering moves the
/// whole day, id included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    /// Opaque unique token, stable for the day's lifetime
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Ordered activities; order is manual, never sorted by time
    pub activities: Vec<Activity>,
}

impl DayPlan {
    /// Create an empty day with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_day_id(),
            title: title.into(),
            activities: Vec::new(),
        }
    }

    /// Create a day with a fresh id and the given activities
    pub fn with_activities(title: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            id: generate_day_id(),
            title: title.into(),
            activities,
        }
    }

    /// Deep copy with a fresh id and " (Copy)" appended to the title
    pub fn duplicated(&self) -> Self {
        Self {
            id: generate_day_id(),
            title: format!("{} (Copy)", self.title),
            activities: self.activities.clone(),
        }
    }
}
