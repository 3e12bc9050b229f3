pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use crate::pick::GazeSet;
use systems::{center_cursor, grab_cursor, head_look, release_cursor, toggle_cursor_grab};

/// Height of the viewer's eyes above the floor.
pub const EYE_HEIGHT: f32 = 1.6;

/// Just under 90 degrees so the view never flips.
pub const PITCH_LIMIT: f32 = 1.5;

/// Yaw/pitch of the head-mounted camera; its forward axis is the gaze ray.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HeadController {
    pub pitch: f32,
    pub yaw: f32,
}

impl HeadController {
    /// Turn by a mouse delta scaled by `sensitivity`.
    pub fn turn(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

pub struct HeadPlugin;

impl Plugin for HeadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InScene), grab_cursor)
            .add_systems(OnExit(AppState::InScene), release_cursor)
            .add_systems(
                Update,
                (head_look, center_cursor, toggle_cursor_grab)
                    .before(GazeSet::Pick)
                    .run_if(in_state(AppState::InScene)),
            );
    }
}
