//! Geocoding and route planning
//!
//! The [`Geocoder`] trait is the seam between route planning and the
//! network; [`NominatimClient`] is the production implementation.
//! [`RoutePlanner`] resolves a day's activities to ordered coordinates,
//! memoizing lookups by exact query string.

mod error;
mod nominatim;
mod route;

pub use error::GeoError;
pub use nominatim::NominatimClient;
pub use route::{Route, RoutePlanner, RouteStop};

use async_trait::async_trait;

/// A resolved geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves free-form place queries to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a query to a coordinate; Ok(None) when nothing matches
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeoError>;
}
