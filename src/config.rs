use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "GAZEKIT_SETTINGS";

/// Settings file looked up in the working directory when no override is set.
pub const DEFAULT_SETTINGS_FILE: &str = "gazekit.json";

/// Largest accepted `countdown_max`.
pub const COUNTDOWN_MAX_LIMIT: i32 = 3600;

/// Largest accepted `countdown_interval_ms` (one hour).
pub const COUNTDOWN_INTERVAL_LIMIT_MS: u64 = 3_600_000;

/// Tunables for gaze picking, fading and countdowns.
///
/// Every field is optional in the JSON file; missing ones keep their default.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GazeSettings {
    /// Length of a show/hide opacity fade.
    pub fade_duration_secs: f32,
    /// Value the countdown starts from.
    pub countdown_max: i32,
    /// Delay between countdown ticks.
    pub countdown_interval_ms: u64,
    /// Maximum distance along the gaze ray that can be picked.
    pub interaction_distance: f32,
    /// Radius used for pickables that don't set their own.
    pub pick_radius: f32,
    pub cursor_size_px: f32,
    pub highlight_cursor_size_px: f32,
    pub mouse_sensitivity: f32,
    /// Optional textures for the gallery panels, relative to the asset folder.
    pub panel_textures: Vec<String>,
}

impl Default for GazeSettings {
    fn default() -> Self {
        Self {
            fade_duration_secs: 0.2,
            countdown_max: 5,
            countdown_interval_ms: 1000,
            interaction_distance: 4.0,
            pick_radius: 0.4,
            cursor_size_px: 4.0,
            highlight_cursor_size_px: 8.0,
            mouse_sensitivity: 0.003,
            panel_textures: Vec::new(),
        }
    }
}

impl GazeSettings {
    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    /// Parse settings from a JSON string and check that every value is usable.
    pub fn from_json(path: &Path, json: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), String> {
        if !(0..=COUNTDOWN_MAX_LIMIT).contains(&self.countdown_max) {
            return Err(format!(
                "countdown_max must be within 0..={COUNTDOWN_MAX_LIMIT}, got {}",
                self.countdown_max
            ));
        }
        if !(1..=COUNTDOWN_INTERVAL_LIMIT_MS).contains(&self.countdown_interval_ms) {
            return Err(format!(
                "countdown_interval_ms must be within 1..={COUNTDOWN_INTERVAL_LIMIT_MS}, got {}",
                self.countdown_interval_ms
            ));
        }

        let non_negative = [
            ("fade_duration_secs", self.fade_duration_secs),
            ("interaction_distance", self.interaction_distance),
            ("pick_radius", self.pick_radius),
            ("cursor_size_px", self.cursor_size_px),
            ("highlight_cursor_size_px", self.highlight_cursor_size_px),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite non-negative number, got {value}"));
            }
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err("mouse_sensitivity must be finite".to_string());
        }
        Ok(())
    }

    /// Load settings from `path`. A missing file is not an error and yields defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(path, &json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Resolve the settings path from the environment and load it, falling back
    /// to defaults with a warning if the file is unreadable, malformed or out of range.
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("{err}; falling back to default settings");
                Self::default()
            }
        }
    }
}
