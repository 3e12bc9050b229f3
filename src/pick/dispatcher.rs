use std::collections::HashMap;

use bevy::prelude::*;

use super::picker::PickEvent;
use crate::focus::{FocusEvent, FocusEventKind, Focusable};

/// Capability query: does this entity opt into focus?
pub trait FocusableLookup {
    fn focusable(&mut self, entity: Entity) -> Option<&mut Focusable>;
}

impl FocusableLookup for Query<'_, '_, &mut Focusable> {
    fn focusable(&mut self, entity: Entity) -> Option<&mut Focusable> {
        self.get_mut(entity).ok().map(Mut::into_inner)
    }
}

impl FocusableLookup for HashMap<Entity, Focusable> {
    fn focusable(&mut self, entity: Entity) -> Option<&mut Focusable> {
        self.get_mut(&entity)
    }
}

/// Routes picker notifications to the single entity currently under the gaze.
///
/// Only one entity can be current at a time. A new enter while another
/// entity is current releases the old one first, so the last pick wins.
#[derive(Resource, Default, Debug)]
pub struct PickDispatcher {
    current: Option<Entity>,
}

impl PickDispatcher {
    pub fn current(&self) -> Option<Entity> {
        self.current
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn dispatch(
        &mut self,
        event: &PickEvent,
        lookup: &mut impl FocusableLookup,
    ) -> Vec<FocusEvent> {
        match *event {
            PickEvent::Enter { entity, hit } => self.on_enter(entity, hit, lookup),
            PickEvent::Inside { entity, hit } => self.on_inside(entity, hit, lookup),
            PickEvent::Exit { entity } => self.on_exit(entity, lookup),
            PickEvent::NoPick => self.on_no_pick(lookup),
        }
    }

    pub fn on_enter(
        &mut self,
        entity: Entity,
        hit: Vec3,
        lookup: &mut impl FocusableLookup,
    ) -> Vec<FocusEvent> {
        let mut events = Vec::new();

        if let Some(previous) = self.current.filter(|&previous| previous != entity) {
            events.extend(self.release(previous, lookup));
        }

        let Some(focusable) = lookup.focusable(entity) else {
            self.current = None;
            return events;
        };

        self.current = Some(entity);
        debug!("{} entered pick", focusable.label(entity));
        if let Some(change) = focusable.set_focus(entity, true) {
            events.push(FocusEvent::new(entity, change.into()));
        }
        focusable.dispatch_in_focus(entity);
        focusable.hit_location = Some(hit);
        events.push(FocusEvent::new(entity, FocusEventKind::InFocus));

        events
    }

    pub fn on_inside(
        &mut self,
        entity: Entity,
        hit: Vec3,
        lookup: &mut impl FocusableLookup,
    ) -> Vec<FocusEvent> {
        let Some(focusable) = lookup.focusable(entity) else {
            return Vec::new();
        };

        focusable.dispatch_in_focus(entity);
        focusable.hit_location = Some(hit);
        vec![FocusEvent::new(entity, FocusEventKind::InFocus)]
    }

    pub fn on_exit(&mut self, entity: Entity, lookup: &mut impl FocusableLookup) -> Vec<FocusEvent> {
        if self.current != Some(entity) {
            return Vec::new();
        }
        self.release(entity, lookup)
    }

    pub fn on_no_pick(&mut self, lookup: &mut impl FocusableLookup) -> Vec<FocusEvent> {
        match self.current {
            Some(current) => self.release(current, lookup),
            None => Vec::new(),
        }
    }

    fn release(&mut self, entity: Entity, lookup: &mut impl FocusableLookup) -> Vec<FocusEvent> {
        self.current = None;

        let Some(focusable) = lookup.focusable(entity) else {
            return Vec::new();
        };

        debug!("{} lost pick", focusable.label(entity));
        focusable
            .set_focus(entity, false)
            .map(|change| vec![FocusEvent::new(entity, change.into())])
            .unwrap_or_default()
    }

    /// Drop the current entity without notifying it.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Apply this frame's pick notifications to focusables and republish them as focus events.
pub fn dispatch_pick_events(
    mut dispatcher: ResMut<PickDispatcher>,
    mut pick_events: EventReader<PickEvent>,
    mut focusables: Query<&mut Focusable>,
    mut focus_events: EventWriter<FocusEvent>,
) {
    for event in pick_events.read() {
        let produced = dispatcher.dispatch(event, &mut focusables);
        focus_events.send_batch(produced);
    }
}
