//! Configuration for embedding callers and the CLI.
//!
//! Values come from defaults, an optional JSON file, and `GEO_RANGES_*`
//! environment variables, applied in that order.

use crate::error::{Error, Result};
use crate::geospatial::geohash::{validate_precision, DEFAULT_PRECISION};
use crate::logging::parse_level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

pub const ENV_FIELD: &str = "GEO_RANGES_FIELD";
pub const ENV_KEY_PRECISION: &str = "GEO_RANGES_KEY_PRECISION";
pub const ENV_LOG_LEVEL: &str = "GEO_RANGES_LOG_LEVEL";
pub const ENV_JSON_LOGS: &str = "GEO_RANGES_JSON_LOGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoRangesConfig {
    /// Name of the geohash field range scans run over
    pub geohash_field: String,
    /// Geohash length stored for each record location
    pub key_precision: usize,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for GeoRangesConfig {
    fn default() -> Self {
        Self {
            geohash_field: "g".to_string(),
            key_precision: DEFAULT_PRECISION,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl GeoRangesConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Apply `GEO_RANGES_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(field) = lookup(ENV_FIELD) {
            self.geohash_field = field;
        }
        if let Some(precision) = lookup(ENV_KEY_PRECISION) {
            self.key_precision = precision.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be an integer, got '{}'", ENV_KEY_PRECISION, precision))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(json) = lookup(ENV_JSON_LOGS) {
            self.json_logs = matches!(json.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.geohash_field.trim().is_empty() {
            return Err(Error::Config("geohash_field must not be empty".to_string()));
        }
        validate_precision(self.key_precision)
            .map_err(|_| Error::Config(format!("key_precision {} is outside 1..=22", self.key_precision)))?;
        if parse_level(&self.log_level).is_none() {
            return Err(Error::Config(format!("unknown log level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn tracing_level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::INFO)
    }
}
