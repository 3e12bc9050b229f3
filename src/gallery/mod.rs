pub mod components;
pub mod interaction;
pub mod loading;
pub mod setup;
pub mod toast;


use bevy::prelude::*;

pub use components::{CountdownLabel, GalleryPanel, Highlight, PlayNextDialog, UpNext};
pub use toast::{Toast, ToastEvent, MAX_TOASTS};

use crate::game_state::AppState;
use crate::pick::GazeSet;
use interaction::{
    cycle_up_next_on_swipe, follow_countdown, highlight_focused, open_dialog_on_panel_click,
    resolve_dialog_clicks,
};
use loading::{check_textures_loaded, start_loading_textures};
use setup::{cleanup_gallery, setup_dialog, setup_panels, setup_room};
use toast::{cleanup_toasts, display_toasts, fade_toasts, setup_toasts};

pub const ROOM_WIDTH: f32 = 10.0;
pub const ROOM_DEPTH: f32 = 10.0;
pub const ROOM_HEIGHT: f32 = 4.0;
pub const WALL_THICKNESS: f32 = 0.2;

pub const PANEL_COUNT: usize = 3;

/// The demo scene: a row of photo panels and a "play next" dialog driven by gaze.
pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UpNext>()
            .add_event::<ToastEvent>()
            .add_systems(Startup, start_loading_textures)
            .add_systems(
                Update,
                check_textures_loaded.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                OnEnter(AppState::InScene),
                (setup_room, setup_panels, setup_dialog, setup_toasts),
            )
            .add_systems(
                OnExit(AppState::InScene),
                (cleanup_gallery, cleanup_toasts, reset_up_next),
            )
            .add_systems(
                Update,
                (
                    (
                        highlight_focused,
                        open_dialog_on_panel_click,
                        cycle_up_next_on_swipe,
                        resolve_dialog_clicks,
                        follow_countdown,
                    )
                        .chain()
                        .in_set(GazeSet::React),
                    (display_toasts, fade_toasts).chain().after(GazeSet::React),
                )
                    .run_if(in_state(AppState::InScene)),
            );
    }
}

fn reset_up_next(mut up_next: ResMut<UpNext>) {
    up_next.0 = None;
}
