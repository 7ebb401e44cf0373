//! Activity domain type

use serde::{Deserialize, Serialize};

/// A single timed item within a day.
///
/// Activities carry no identity of their own; they are addressed by position
/// within their day's sequence. `time` is a free-form label, never validated
/// or sorted on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Free-form time label
    pub time: String,

    /// What the activity is; must be non-empty (trimmed) on admission
    pub title: String,

    /// Free-form category label, may be empty
    pub category: String,

    /// Free-form notes
    pub notes: String,
}

impl Activity {
    /// Create a new activity with trimmed inputs and empty notes
    pub fn new(time: &str, title: &str, category: &str) -> Self {
        Self {
            time: time.trim().to_string(),
            title: title.trim().to_string(),
            category: category.trim().to_string(),
            notes: String::new(),
        }
    }

    /// Key used for duplicate detection: trimmed time and lowercase-trimmed title
    pub(crate) fn dedupe_key(&self) -> String {
        format!("{}|{}", self.time.trim(), self.title.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let act = Activity::new("  09:00 ", " Colosseum ", " Sight ");
        assert_eq!(act.time, "09:00");
        assert_eq!(act.title, "Colosseum");
        assert_eq!(act.category, "Sight");
        assert_eq!(act.notes, "");
    }

    #[test]
    fn test_dedupe_key_case_insensitive_title() {
        let a = Activity::new("09:00", "Colosseum", "Sight");
        let b = Activity::new("09:00", "COLOSSEUM", "Walk");
        assert_eq!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn test_dedupe_key_distinguishes_time() {
        let a = Activity::new("09:00", "Colosseum", "Sight");
        let b = Activity::new("10:00", "Colosseum", "Sight");
        assert_ne!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn test_deserialize_tolerates_missing_and_unknown_fields() {
        // Legacy exports carry a `location` field and may omit `notes`
        let json = r#"{"time":"09:00","title":"Pantheon","location":"Pantheon"}"#;
        let act: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(act.title, "Pantheon");
        assert_eq!(act.category, "");
        assert_eq!(act.notes, "");
    }
}
