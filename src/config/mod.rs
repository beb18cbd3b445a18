//! Configuration management for the swiss-room tool
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{
    validate_config, AppConfig, ServiceSettings, StandingsSettings, StoreBackend, StoreSettings,
};
