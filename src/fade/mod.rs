pub mod animation;
pub mod components;
pub mod systems;


use bevy::prelude::*;

pub use animation::OpacityAnimation;
pub use components::{FadeCallback, FadeFinished, FadeState, Fadeable, Fader, FADE_DURATION};

use crate::pick::GazeSet;
use systems::animate_fadeables;

pub struct FadePlugin;

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        // Runs in every state.
        app.add_event::<FadeFinished>()
            .add_systems(Update, animate_fadeables.after(GazeSet::React));
    }
}
