use bevy::prelude::*;

/// Application states controlling scene flow.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for optional scene assets.
    #[default]
    Loading,
    /// The gaze scene is live and interactive.
    InScene,
}
