//! TripPlanner configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main TripPlanner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot storage configuration
    pub storage: StorageConfig,

    /// Geocoding service configuration
    pub geocoder: GeoConfig,

    /// Export defaults
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripplanner.yml
        let local_config = PathBuf::from(".tripplanner.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripplanner/tripplanner.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplanner").join("tripplanner.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the snapshot and preferences files
    #[serde(rename = "store-dir")]
    pub store_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/tripplanner on Linux)
        let store_dir = dirs::data_dir()
            .map(|d| d.join("tripplanner"))
            .unwrap_or_else(|| PathBuf::from(".tripplanner"))
            .to_string_lossy()
            .into_owned();

        Self { store_dir }
    }
}

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Service base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User-Agent header sent with lookups
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Suffix appended to every place query
    #[serde(rename = "query-suffix")]
    pub query_suffix: String,

    /// Fallback map center latitude
    #[serde(rename = "fallback-lat")]
    pub fallback_lat: f64,

    /// Fallback map center longitude
    #[serde(rename = "fallback-lon")]
    pub fallback_lon: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "tripplanner/0.1".to_string(),
            timeout_ms: 10_000,
            query_suffix: "Rome, Italy".to_string(),
            // Rome center
            fallback_lat: 41.9028,
            fallback_lon: 12.4964,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export file name
    #[serde(rename = "file-name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "rome-itinerary.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.geocoder.base_url.contains("nominatim"));
        assert_eq!(config.geocoder.query_suffix, "Rome, Italy");
        assert_eq!(config.export.file_name, "rome-itinerary.json");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
storage:
  store-dir: /tmp/trips

geocoder:
  base-url: https://geo.example.com
  user-agent: test-agent
  timeout-ms: 2500
  query-suffix: "Florence, Italy"
  fallback-lat: 43.7696
  fallback-lon: 11.2558

export:
  file-name: florence.json
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.storage.store_dir, "/tmp/trips");
        assert_eq!(config.geocoder.base_url, "https://geo.example.com");
        assert_eq!(config.geocoder.timeout_ms, 2500);
        assert_eq!(config.geocoder.query_suffix, "Florence, Italy");
        assert_eq!(config.export.file_name, "florence.json");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
geocoder:
  query-suffix: "Milan, Italy"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.geocoder.query_suffix, "Milan, Italy");

        // Defaults for unspecified
        assert!(config.geocoder.base_url.contains("nominatim"));
        assert_eq!(config.export.file_name, "rome-itinerary.json");
    }
}
