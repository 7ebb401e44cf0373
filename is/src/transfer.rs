//! Import/export gateway
//!
//! Export writes `{ "days": [...] }` as pretty-printed JSON; the active
//! pointer is intentionally left out. Import replaces the document's days
//! wholesale when the input carries an array-typed `days` field, and is
//! otherwise ignored without error.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{DayPlan, Document};

/// Whether an import replaced the document's days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Replaced,
    Ignored,
}

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    days: &'a [DayPlan],
}

/// Serialize the document's days as a pretty-printed export
pub fn export_json(document: &Document) -> Result<String> {
    let json = serde_json::to_string_pretty(&ExportEnvelope {
        days: document.days(),
    })?;
    Ok(json)
}

/// Write the export to a file
pub fn export_to_file(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let json = export_json(document)?;
    fs::write(&path, json).context(format!(
        "Failed to write export file: {}",
        path.as_ref().display()
    ))?;
    info!(path = %path.as_ref().display(), "Exported itinerary");
    Ok(())
}

/// Replace the document's days from exported JSON text.
///
/// Any parse failure or shape mismatch leaves the document untouched.
pub fn import_json(document: &mut Document, text: &str) -> ImportOutcome {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        warn!("Import ignored: input is not valid JSON");
        return ImportOutcome::Ignored;
    };

    let Some(days_value) = value.get("days").filter(|d| d.is_array()) else {
        warn!("Import ignored: no array-typed days field");
        return ImportOutcome::Ignored;
    };

    match serde_json::from_value::<Vec<DayPlan>>(days_value.clone()) {
        Ok(days) => {
            let count = days.len();
            document.replace_days(days);
            info!(days = count, "Imported itinerary");
            ImportOutcome::Replaced
        }
        Err(e) => {
            warn!(error = %e, "Import ignored: days failed to decode");
            ImportOutcome::Ignored
        }
    }
}

/// Read a file and import its contents.
///
/// File-system errors propagate; content problems degrade to `Ignored`.
pub fn import_from_file(document: &mut Document, path: impl AsRef<Path>) -> Result<ImportOutcome> {
    let text = fs::read_to_string(&path).context(format!(
        "Failed to read import file: {}",
        path.as_ref().display()
    ))?;
    Ok(import_json(document, &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_omits_active_index() {
        let mut document = Document::sample();
        document.set_active_day(2).unwrap();

        let json = export_json(&document).unwrap();
        assert!(json.contains("\"days\""));
        assert!(!json.contains("activeDayIndex"));
    }

    #[test]
    fn test_round_trip_preserves_days_resets_index() {
        let mut original = Document::sample();
        original.set_active_day(3).unwrap();
        let exported = export_json(&original).unwrap();

        let mut imported = Document::new();
        let outcome = import_json(&mut imported, &exported);
        assert_eq!(outcome, ImportOutcome::Replaced);
        assert_eq!(imported.days(), original.days());
        assert_eq!(imported.active_day_index(), Some(0));
    }

    #[test]
    fn test_import_invalid_json_is_ignored() {
        let mut document = Document::sample();
        let before = document.clone();

        let outcome = import_json(&mut document, "{{{ nope");
        assert_eq!(outcome, ImportOutcome::Ignored);
        assert_eq!(document, before);
    }

    #[test]
    fn test_import_without_days_is_ignored() {
        let mut document = Document::sample();
        let before = document.clone();

        assert_eq!(import_json(&mut document, r#"{"foo": 1}"#), ImportOutcome::Ignored);
        assert_eq!(import_json(&mut document, r#"{"days": 42}"#), ImportOutcome::Ignored);
        assert_eq!(document, before);
    }

    #[test]
    fn test_import_tolerates_sparse_day_objects() {
        let mut document = Document::new();
        let outcome = import_json(&mut document, r#"{"days": [{"title": "Loose day"}]}"#);
        assert_eq!(outcome, ImportOutcome::Replaced);
        assert_eq!(document.len(), 1);
        assert_eq!(document.days()[0].title, "Loose day");
    }

    #[test]
    fn test_import_from_file_missing_is_an_error() {
        let mut document = Document::new();
        let result = import_from_file(&mut document, "/nonexistent/path/itinerary.json");
        assert!(result.is_err());
    }
}
