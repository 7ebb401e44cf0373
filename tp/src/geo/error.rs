//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding lookups
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
