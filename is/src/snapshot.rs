//! Snapshot persistence for the itinerary document
//!
//! The whole document lives in a single JSON file inside the store
//! directory. Loading is total: a missing file, unreadable bytes, or
//! malformed JSON all degrade to the built-in sample rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::domain::{DayPlan, Document};

/// Snapshot file name within the store directory
pub const SNAPSHOT_FILE: &str = "itinerary.json";

/// File-backed store for the itinerary snapshot
pub struct SnapshotStore {
    base_path: PathBuf,
}

impl SnapshotStore {
    /// Open or create a snapshot store at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened snapshot store");
        Ok(Self { base_path })
    }

    /// Path of the snapshot file
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_path.join(SNAPSHOT_FILE)
    }

    /// Whether a snapshot has been written
    pub fn exists(&self) -> bool {
        self.snapshot_file().exists()
    }

    /// Write the document's snapshot
    pub fn save(&self, document: &Document) -> Result<()> {
        let json = serde_json::to_string(document)?;
        fs::write(self.snapshot_file(), json).context("Failed to write snapshot")?;
        debug!(days = document.len(), "Snapshot saved");
        Ok(())
    }

    /// Load the document, substituting the sample for anything unusable
    pub fn load(&self) -> Document {
        match fs::read_to_string(self.snapshot_file()) {
            Ok(raw) => decode_snapshot(&raw),
            Err(_) => Document::sample(),
        }
    }

    /// Load the document, seeding the store with the sample on first run
    pub fn load_or_init(&self) -> Result<Document> {
        if self.exists() {
            return Ok(self.load());
        }
        let document = Document::sample();
        self.save(&document)?;
        info!("Seeded store with the sample itinerary");
        Ok(document)
    }

    /// Remove the snapshot file if present
    pub fn delete(&self) -> Result<()> {
        let file = self.snapshot_file();
        if file.exists() {
            fs::remove_file(&file).context("Failed to delete snapshot")?;
            info!("Deleted snapshot");
        }
        Ok(())
    }
}

/// Decode a raw snapshot, recovering field by field.
///
/// `days` must be an array that decodes as day plans, otherwise the sample
/// days are substituted. A malformed `activeDayIndex` resets to 0; the
/// assembled document clamps it.
fn decode_snapshot(raw: &str) -> Document {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
        warn!("Snapshot is not valid JSON, falling back to sample");
        return Document::sample();
    };

    let days = match value.get("days") {
        Some(d) if d.is_array() => serde_json::from_value::<Vec<DayPlan>>(d.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "Snapshot days failed to decode, falling back to sample days");
            crate::sample::sample_days()
        }),
        _ => {
            warn!("Snapshot has no array-typed days field, falling back to sample days");
            crate::sample::sample_days()
        }
    };

    let active = value
        .get("activeDayIndex")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as usize;

    Document::from_parts(days, active)
}
