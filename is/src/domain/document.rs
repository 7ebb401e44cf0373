//! Itinerary document and its mutation operations
//!
//! The document is the single unit of state: an ordered list of days plus a
//! pointer to the active day. All mutations go through the methods here so
//! the active-pointer invariant holds after every operation:
//!
//! - when `days` is non-empty, the pointer is within `[0, days.len() - 1]`
//! - when `days` is empty, no day is active

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::activity::Activity;
use super::day::DayPlan;

/// Errors from document mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("activity title must not be empty")]
    EmptyTitle,

    #[error("no day is active")]
    NoActiveDay,
}

/// Direction for day reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl std::str::FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("Unknown direction: {}. Use: up or down", s)),
        }
    }
}

impl std::fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// The full itinerary state: ordered days plus the active-day pointer.
///
/// Fields are private; consumers read through the accessors and mutate
/// through the operations, which keep the pointer clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    days: Vec<DayPlan>,

    #[serde(rename = "activeDayIndex", default)]
    active_day_index: usize,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a document from loaded parts, clamping the active pointer
    pub fn from_parts(days: Vec<DayPlan>, active_day_index: usize) -> Self {
        let mut document = Self {
            days,
            active_day_index,
        };
        document.clamp_active();
        document
    }

    /// The built-in sample itinerary
    pub fn sample() -> Self {
        Self::from_parts(crate::sample::sample_days(), 0)
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index of the active day; None when there are no days
    pub fn active_day_index(&self) -> Option<usize> {
        if self.days.is_empty() {
            None
        } else {
            Some(self.active_day_index)
        }
    }

    /// The active day; None when there are no days
    pub fn active_day(&self) -> Option<&DayPlan> {
        self.days.get(self.active_day_index)
    }

    fn active_day_mut(&mut self) -> Result<&mut DayPlan, DocumentError> {
        self.days
            .get_mut(self.active_day_index)
            .ok_or(DocumentError::NoActiveDay)
    }

    fn clamp_active(&mut self) {
        if self.days.is_empty() {
            self.active_day_index = 0;
        } else if self.active_day_index >= self.days.len() {
            self.active_day_index = self.days.len() - 1;
        }
    }

    // ------------------------------------------------------------------
    // Day operations
    // ------------------------------------------------------------------

    /// Append a new empty day with a position-derived title and make it active
    pub fn add_day(&mut self) -> &DayPlan {
        let title = format!("Day {} \u{2013} Untitled", self.days.len() + 1);
        self.days.push(DayPlan::new(title));
        self.active_day_index = self.days.len() - 1;
        &self.days[self.active_day_index]
    }

    /// Remove the active day; no-op when there are no days.
    ///
    /// Afterward the pointer moves to the previous day (or stays at 0).
    pub fn delete_active_day(&mut self) -> Option<DayPlan> {
        if self.days.is_empty() {
            return None;
        }
        let removed = self.days.remove(self.active_day_index);
        self.active_day_index = self.active_day_index.saturating_sub(1);
        self.clamp_active();
        Some(removed)
    }

    /// Deep-copy the active day, insert the copy right after it, make it active
    pub fn duplicate_active_day(&mut self) -> Result<&DayPlan, DocumentError> {
        if self.days.is_empty() {
            return Err(DocumentError::NoActiveDay);
        }
        let copy = self.days[self.active_day_index].duplicated();
        let at = self.active_day_index + 1;
        self.days.insert(at, copy);
        self.active_day_index = at;
        Ok(&self.days[at])
    }

    /// Swap the day at `index` with its neighbor.
    ///
    /// Returns false (no mutation) at sequence boundaries. The active pointer
    /// follows whichever of the two days it referred to.
    pub fn move_day(&mut self, index: usize, direction: MoveDirection) -> Result<bool, DocumentError> {
        let len = self.days.len();
        if index >= len {
            return Err(DocumentError::OutOfRange { index, len });
        }
        let neighbor = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return Ok(false);
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= len {
                    return Ok(false);
                }
                index + 1
            }
        };
        self.days.swap(index, neighbor);
        if self.active_day_index == index {
            self.active_day_index = neighbor;
        } else if self.active_day_index == neighbor {
            self.active_day_index = index;
        }
        Ok(true)
    }

    /// Set the active day's title verbatim (no trimming or validation)
    pub fn rename_active_day(&mut self, title: impl Into<String>) -> Result<(), DocumentError> {
        self.active_day_mut()?.title = title.into();
        Ok(())
    }

    /// Select the day at `index` as active
    pub fn set_active_day(&mut self, index: usize) -> Result<(), DocumentError> {
        if index >= self.days.len() {
            return Err(DocumentError::OutOfRange {
                index,
                len: self.days.len(),
            });
        }
        self.active_day_index = index;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Activity operations (all address the active day)
    // ------------------------------------------------------------------

    /// Append an activity to the active day.
    ///
    /// Rejects without mutating when the trimmed title is empty.
    pub fn add_activity(&mut self, time: &str, title: &str, category: &str) -> Result<&Activity, DocumentError> {
        if title.trim().is_empty() {
            return Err(DocumentError::EmptyTitle);
        }
        let day = self.active_day_mut()?;
        day.activities.push(Activity::new(time, title, category));
        let index = day.activities.len() - 1;
        Ok(&day.activities[index])
    }

    /// Replace the activity at `index` wholesale with all four fields
    pub fn update_activity(&mut self, index: usize, activity: Activity) -> Result<(), DocumentError> {
        let day = self.active_day_mut()?;
        let len = day.activities.len();
        let slot = day
            .activities
            .get_mut(index)
            .ok_or(DocumentError::OutOfRange { index, len })?;
        *slot = activity;
        Ok(())
    }

    /// Deep-copy the activity at `index`, inserted immediately after it
    pub fn duplicate_activity(&mut self, index: usize) -> Result<&Activity, DocumentError> {
        let day = self.active_day_mut()?;
        let len = day.activities.len();
        if index >= len {
            return Err(DocumentError::OutOfRange { index, len });
        }
        let copy = day.activities[index].clone();
        day.activities.insert(index + 1, copy);
        Ok(&day.activities[index + 1])
    }

    /// Remove the activity at `index`
    pub fn delete_activity(&mut self, index: usize) -> Result<Activity, DocumentError> {
        let day = self.active_day_mut()?;
        let len = day.activities.len();
        if index >= len {
            return Err(DocumentError::OutOfRange { index, len });
        }
        Ok(day.activities.remove(index))
    }

    /// Remove the activity at `from` and reinsert it at `to`.
    ///
    /// Returns false (no mutation) when the indices are equal.
    pub fn move_activity(&mut self, from: usize, to: usize) -> Result<bool, DocumentError> {
        let day = self.active_day_mut()?;
        let len = day.activities.len();
        if from >= len {
            return Err(DocumentError::OutOfRange { index: from, len });
        }
        if to >= len {
            return Err(DocumentError::OutOfRange { index: to, len });
        }
        if from == to {
            return Ok(false);
        }
        let moved = day.activities.remove(from);
        day.activities.insert(to, moved);
        Ok(true)
    }

    /// Drop duplicate activities from the active day, keeping the first
    /// occurrence per key. Stable and order-preserving; returns the number
    /// removed.
    pub fn dedupe_active_day_activities(&mut self) -> Result<usize, DocumentError> {
        let day = self.active_day_mut()?;
        let before = day.activities.len();
        let mut seen = HashSet::new();
        day.activities.retain(|a| seen.insert(a.dedupe_key()));
        Ok(before - day.activities.len())
    }

    // ------------------------------------------------------------------
    // Wholesale replacement
    // ------------------------------------------------------------------

    /// Replace all days (the import path); the first day becomes active
    pub fn replace_days(&mut self, days: Vec<DayPlan>) {
        self.days = days;
        self.active_day_index = 0;
        self.clamp_active();
    }

    /// Replace the whole document with the sample itinerary
    pub fn reset_to_sample(&mut self) {
        *self = Self::sample();
    }
}
