pub mod timer;


use bevy::prelude::*;

use crate::pick::GazeSet;

pub use timer::{format_clock, CountdownStep, CountdownTimer, MAX_COUNT, TICK_INTERVAL};

/// A countdown attached to a scene entity.
#[derive(Component, Debug, Default)]
pub struct Countdown(pub CountdownTimer);

/// A countdown on `entity` produced `step`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownEvent {
    pub entity: Entity,
    pub step: CountdownStep,
}

pub struct CountdownPlugin;

impl Plugin for CountdownPlugin {
    fn build(&self, app: &mut App) {
        // A countdown started by a reaction must not lose the current frame delta.
        app.add_event::<CountdownEvent>()
            .add_systems(Update, tick_countdowns.before(GazeSet::React));
    }
}

pub fn tick_countdowns(
    time: Res<Time>,
    mut countdowns: Query<(Entity, &mut Countdown)>,
    mut events: EventWriter<CountdownEvent>,
) {
    for (entity, mut countdown) in countdowns.iter_mut() {
        if !countdown.0.is_running() {
            continue;
        }
        for step in countdown.0.advance(time.delta()) {
            if step == CountdownStep::TimesUp {
                info!("Countdown on {entity} timed out");
            }
            events.send(CountdownEvent { entity, step });
        }
    }
}
