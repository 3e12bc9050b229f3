use bevy::prelude::*;

use super::components::{FocusChange, Swipe};

/// What happened to a focusable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEventKind {
    Gained,
    Lost,
    /// The gaze is still resting on the entity.
    InFocus,
    Click,
    Gesture(Swipe),
}

impl From<FocusChange> for FocusEventKind {
    fn from(change: FocusChange) -> Self {
        match change {
            FocusChange::Gained => FocusEventKind::Gained,
            FocusChange::Lost => FocusEventKind::Lost,
        }
    }
}

/// Broadcast alongside the per-entity listeners so any number of systems can react.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub entity: Entity,
    pub kind: FocusEventKind,
}

impl FocusEvent {
    pub fn new(entity: Entity, kind: FocusEventKind) -> Self {
        Self { entity, kind }
    }
}

/// A click landed while no visible focusable was under the gaze.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickOutEvent;
