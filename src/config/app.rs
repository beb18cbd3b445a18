//! Main application configuration
//!
//! This module defines the primary configuration structures for the swiss-room
//! tournament tool, including environment variable and TOML file loading and
//! validation.

use crate::types::UnplayedPolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub store: StoreSettings,
    pub standings: StandingsSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Which persistence backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local, discarded on exit
    Memory,
    /// JSON snapshot file on disk
    #[default]
    Json,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "json" => Ok(StoreBackend::Json),
            other => Err(anyhow!("Invalid store backend: {}", other)),
        }
    }
}

/// Persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// Snapshot file for the JSON backend
    pub path: PathBuf,
}

/// Standings settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsSettings {
    /// Whether players with no matches stay in standings once play has begun
    pub unplayed_policy: UnplayedPolicy,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "swiss-room".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Json,
            path: PathBuf::from("tournament.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Point the configuration at a JSON snapshot file, switching away from
    /// the memory backend if it was selected
    pub fn use_store_file(&mut self, path: impl Into<PathBuf>) {
        self.store.backend = StoreBackend::Json;
        self.store.path = path.into();
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Store settings
        if let Ok(backend) = env::var("STORE_BACKEND") {
            self.store.backend = backend.parse()?;
        }
        if let Ok(path) = env::var("STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }

        // Standings settings
        if let Ok(policy) = env::var("UNPLAYED_POLICY") {
            self.standings.unplayed_policy = policy
                .parse()
                .map_err(|_| anyhow!("Invalid UNPLAYED_POLICY value: {}", policy))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.store.backend == StoreBackend::Json && config.store.path.as_os_str().is_empty() {
        return Err(anyhow!("Store path cannot be empty for the json backend"));
    }

    Ok(())
}
