//! Nominatim geocoding client
//!
//! Thin client over the Nominatim search API: one query, first result only.
//! Coordinates come back as strings and are parsed here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Coordinate, GeoError, Geocoder};
use crate::config::GeoConfig;

/// Nominatim search API client
pub struct NominatimClient {
    base_url: String,
    http: Client,
}

impl NominatimClient {
    /// Create a new client from configuration
    pub fn from_config(config: &GeoConfig) -> Result<Self, GeoError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn parse_place(place: &NominatimPlace) -> Result<Coordinate, GeoError> {
    let lat = place
        .lat
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad latitude: {}", place.lat)))?;
    let lon = place
        .lon
        .parse()
        .map_err(|_| GeoError::InvalidResponse(format!("bad longitude: {}", place.lon)))?;
    Ok(Coordinate { lat, lon })
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeoError> {
        let url = format!("{}/search", self.base_url);
        debug!(%query, "geocode: requesting");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("limit", "1"), ("q", query)])
            .header("Accept-Language", "en")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::InvalidResponse(format!("status {}", status.as_u16())));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        debug!(%query, results = places.len(), "geocode: response received");

        match places.first() {
            Some(place) => Ok(Some(parse_place(place)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let place = NominatimPlace {
            lat: "41.9028".to_string(),
            lon: "12.4964".to_string(),
        };
        let coord = parse_place(&place).unwrap();
        assert!((coord.lat - 41.9028).abs() < f64::EPSILON);
        assert!((coord.lon - 12.4964).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_place_bad_latitude() {
        let place = NominatimPlace {
            lat: "north".to_string(),
            lon: "12.4964".to_string(),
        };
        assert!(matches!(parse_place(&place), Err(GeoError::InvalidResponse(_))));
    }

    #[test]
    fn test_deserialize_search_response() {
        // Responses carry many more fields; only lat/lon are consumed
        let json = r#"[{"place_id":1234,"display_name":"Colosseo, Roma","lat":"41.8902","lon":"12.4922"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "41.8902");
    }

    #[test]
    fn test_deserialize_empty_response() {
        let places: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }
}
