//! Gaze-driven interaction for Bevy scenes.
//!
//! A ray cast from the viewer's head picks one entity at a time; the pick
//! dispatcher turns enter/inside/exit transitions into focus changes on
//! [`focus::Focusable`] components. Fading panels and countdown timers
//! round out the pieces needed for head-tracked menus.

pub mod config;
pub mod countdown;
pub mod cursor;
pub mod error;
pub mod fade;
pub mod focus;
pub mod game_state;
pub mod gallery;
pub mod head;
pub mod pick;

use bevy::prelude::*;

/// Picking, focus, cursor, fading, countdowns and head look.
///
/// Expects [`config::GazeSettings`] and the [`game_state::AppState`] state to be present.
pub struct GazePlugin;

impl Plugin for GazePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            pick::PickPlugin,
            focus::FocusPlugin,
            cursor::CursorPlugin,
            fade::FadePlugin,
            countdown::CountdownPlugin,
            head::HeadPlugin,
        ));
    }
}
