//! ItinStore - itinerary document store
//!
//! Holds an ordered list of day plans, each with ordered timed activities,
//! plus a pointer to the active day. Consumers mutate the document through
//! its operations and persist it as a single JSON snapshot.
//!
//! # Architecture
//!
//! ```text
//! {store_path}/
//! └── itinerary.json   # document snapshot: { days, activeDayIndex }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use itinstore::{Document, SnapshotStore};
//!
//! let store = SnapshotStore::open(".itinstore")?;
//! let mut document = store.load_or_init()?;
//! document.add_day();
//! document.add_activity("09:00", "Colosseum", "Sight")?;
//! store.save(&document)?;
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod sample;
pub mod snapshot;
pub mod transfer;

pub use domain::{Activity, DayPlan, Document, DocumentError, MoveDirection};
pub use snapshot::{SNAPSHOT_FILE, SnapshotStore};
pub use transfer::{ImportOutcome, export_json, export_to_file, import_from_file, import_json};
