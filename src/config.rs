//! Configuration management and validation.
//!
//! Provides layered configuration (TOML file with CLI overrides) for fetch
//! behavior, output formatting, and Zooniverse project selection.

use crate::constants::{
    DEFAULT_DELIMITER, DEFAULT_RADIUS_ARCMIN, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    PHT_TALK_SECTION,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Fetch behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Search radius around each target coordinate, in arcminutes
    pub radius_arcmin: f64,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent to upstream catalogs
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            radius_arcmin: DEFAULT_RADIUS_ARCMIN,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Field delimiter for CSV output and target-list input
    pub delimiter: char,

    /// Emit a CSV header row before the data rows
    pub header_row: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header_row: false,
        }
    }
}

/// Zooniverse project selection for tag statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooniverseConfig {
    /// Talk section identifier (e.g. "project-7929" for Planet Hunters TESS)
    pub section: String,
}

impl Default for ZooniverseConfig {
    fn default() -> Self {
        Self {
            section: PHT_TALK_SECTION.to_string(),
        }
    }
}

/// Complete harvester configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub zooniverse: ZooniverseConfig,
}

impl Config {
    /// Load configuration from an optional TOML file, falling back to defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::io(format!("Failed to read config file {}", path.display()), e)
                })?;
                toml::from_str(&content).map_err(|e| {
                    Error::configuration(format!(
                        "Invalid config file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.fetch.radius_arcmin <= 0.0 {
            return Err(Error::configuration(
                "Search radius must be greater than 0 arcminutes".to_string(),
            ));
        }

        if self.fetch.radius_arcmin > 60.0 {
            return Err(Error::configuration(
                "Search radius cannot exceed 60 arcminutes".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if !self.output.delimiter.is_ascii() {
            return Err(Error::configuration(
                "Output delimiter must be an ASCII character".to_string(),
            ));
        }

        if self.zooniverse.section.is_empty() {
            return Err(Error::configuration(
                "Zooniverse section cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
