//! Error types for settings and scene assets.
//!
//! Focus, pick, fade and countdown operations never fail; only the few
//! things that touch the filesystem or the asset server do.

use std::path::PathBuf;

/// Errors that can occur while loading [`GazeSettings`](crate::config::GazeSettings).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for the settings schema
    #[error("Failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings parsed but a value is out of range
    #[error("Invalid settings in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Errors raised while preparing the gallery scene.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A panel texture failed to load
    #[error("Failed to load gallery asset: {path}")]
    AssetLoad { path: String },
}

/// Result type alias for settings loading
pub type ConfigResult<T> = Result<T, ConfigError>;
