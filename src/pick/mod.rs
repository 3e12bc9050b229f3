pub mod dispatcher;
pub mod picker;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use dispatcher::{FocusableLookup, PickDispatcher};
pub use picker::{closest_hit, GazePicker, PickEvent, PickHit, Pickable};

use crate::game_state::AppState;
use dispatcher::dispatch_pick_events;
use picker::update_gaze_pick;

/// Frame ordering for gaze interaction: pick, then dispatch focus, then react.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GazeSet {
    Pick,
    Dispatch,
    React,
}

pub struct PickPlugin;

impl Plugin for PickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GazePicker>()
            .init_resource::<PickDispatcher>()
            .add_event::<PickEvent>()
            .configure_sets(
                Update,
                (GazeSet::Pick, GazeSet::Dispatch, GazeSet::React).chain(),
            )
            .add_systems(
                Update,
                (
                    update_gaze_pick.in_set(GazeSet::Pick),
                    dispatch_pick_events.in_set(GazeSet::Dispatch),
                )
                    .run_if(in_state(AppState::InScene)),
            )
            .add_systems(OnExit(AppState::InScene), reset_pick_state);
    }
}

fn reset_pick_state(mut picker: ResMut<GazePicker>, mut dispatcher: ResMut<PickDispatcher>) {
    picker.clear();
    dispatcher.clear();
}
