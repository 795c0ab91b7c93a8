//! Configuration module
//!
//! Handles user settings: data locations, scoring constants and report
//! preferences.

pub mod settings;

pub use settings::{default_data_dir, ReportSettings, Settings};

/// Settings file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access settings {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
