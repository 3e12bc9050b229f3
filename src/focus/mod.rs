pub mod components;
pub mod controller;
pub mod events;


use bevy::prelude::*;

pub use components::{FocusChange, FocusListeners, Focusable, Swipe};
pub use controller::{resolve_click, ClickTarget};
pub use events::{ClickOutEvent, FocusEvent, FocusEventKind};

use crate::game_state::AppState;
use crate::pick::GazeSet;
use controller::{process_clicks, process_swipes};

pub struct FocusPlugin;

impl Plugin for FocusPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FocusEvent>()
            .add_event::<ClickOutEvent>()
            .add_systems(
                Update,
                (process_clicks, process_swipes)
                    .in_set(GazeSet::React)
                    .run_if(in_state(AppState::InScene)),
            );
    }
}
