//! TripPlanner - local-first itinerary planner
//!
//! Organizes trip days and timed activities on top of the itinstore
//! document store, with JSON import/export and optional route resolution
//! through an external geocoding service.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration types and loading
//! - [`geo`] - Geocoding client and route planning
//! - [`prefs`] - Persisted presentation preferences
//! - [`render`] - Text projection of document state

pub mod cli;
pub mod config;
pub mod geo;
pub mod prefs;
pub mod render;

// Re-export commonly used types
pub use config::{Config, ExportConfig, GeoConfig, StorageConfig};
pub use geo::{Coordinate, GeoError, Geocoder, NominatimClient, Route, RoutePlanner, RouteStop};
pub use prefs::{Layout, Prefs, Theme};
