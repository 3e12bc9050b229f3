//! Picker and pick dispatcher tests
//!
//! The dispatcher is exercised through a plain `HashMap` lookup so the
//! focus transitions can be checked without a running schedule. The
//! dispatch and raycast systems also run inside a headless `App`, with
//! global transforms and inherited visibility set by hand.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use super::dispatcher::dispatch_pick_events;
use super::picker::update_gaze_pick;
use super::*;
use crate::config::GazeSettings;
use crate::focus::{FocusEvent, FocusEventKind, Focusable};

fn entity(index: u32) -> Entity {
    Entity::from_raw(index)
}

/// A focusable that records its gained/lost callbacks into a shared log.
fn recording(log: &Arc<Mutex<Vec<(Entity, bool)>>>) -> Focusable {
    let gained = log.clone();
    let lost = log.clone();
    Focusable::new()
        .on_gained_focus(move |e| gained.lock().unwrap().push((e, true)))
        .on_lost_focus(move |e| lost.lock().unwrap().push((e, false)))
}

// ============================================================================
// Ray test
// ============================================================================

#[test]
fn test_closest_hit_prefers_nearest_along_ray() {
    let far = (entity(1), Vec3::new(0.0, 0.0, -3.0), 0.4);
    let near = (entity(2), Vec3::new(0.1, 0.0, -1.5), 0.4);

    let hit = closest_hit(Vec3::ZERO, Vec3::NEG_Z, 4.0, [far, near]).unwrap();
    assert_eq!(hit.entity, entity(2));
    assert!((hit.distance - 1.5).abs() < 1e-5);
    assert_eq!(hit.point, Vec3::new(0.0, 0.0, -1.5));
}

#[test]
fn test_closest_hit_rejects_behind_beyond_and_off_axis() {
    let behind = (entity(1), Vec3::new(0.0, 0.0, 2.0), 0.4);
    let beyond = (entity(2), Vec3::new(0.0, 0.0, -10.0), 0.4);
    let off_axis = (entity(3), Vec3::new(1.0, 0.0, -2.0), 0.4);

    assert!(closest_hit(Vec3::ZERO, Vec3::NEG_Z, 4.0, [behind, beyond, off_axis]).is_none());
}

// ============================================================================
// Picker transitions
// ============================================================================

fn hit_on(index: u32) -> PickHit {
    PickHit {
        entity: entity(index),
        distance: 1.0,
        point: Vec3::new(0.0, 0.0, -1.0),
    }
}

#[test]
fn test_picker_emits_enter_inside_exit_nopick() {
    let mut picker = GazePicker::default();
    let point = Vec3::new(0.0, 0.0, -1.0);

    assert!(picker.update(None).is_empty());
    assert_eq!(
        picker.update(Some(hit_on(1))),
        vec![PickEvent::Enter { entity: entity(1), hit: point }]
    );
    assert_eq!(
        picker.update(Some(hit_on(1))),
        vec![PickEvent::Inside { entity: entity(1), hit: point }]
    );
    assert_eq!(
        picker.update(None),
        vec![PickEvent::Exit { entity: entity(1) }, PickEvent::NoPick]
    );
    assert!(picker.current().is_none());
}

#[test]
fn test_picker_swap_exits_before_entering() {
    let mut picker = GazePicker::default();
    picker.update(Some(hit_on(1)));

    let events = picker.update(Some(hit_on(2)));
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], PickEvent::Exit { entity: entity(1) });
    assert!(matches!(events[1], PickEvent::Enter { entity: e, .. } if e == entity(2)));
}

// ============================================================================
// Dispatcher state machine
// ============================================================================

#[test]
fn test_enter_then_exit_focuses_then_unfocuses() {
    //! Enter(A) followed by Exit(A) leaves no current entity
    //!
    //! A must see set_focus(true) and then set_focus(false), in that order.

    let log = Arc::new(Mutex::new(Vec::new()));
    let a = entity(1);
    let mut lookup = HashMap::from([(a, recording(&log))]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(a, Vec3::ONE, &mut lookup);
    assert_eq!(dispatcher.current(), Some(a));
    assert_eq!(lookup[&a].hit_location, Some(Vec3::ONE));

    dispatcher.on_exit(a, &mut lookup);
    assert!(dispatcher.is_idle());
    assert_eq!(*log.lock().unwrap(), vec![(a, true), (a, false)]);
}

#[test]
fn test_enter_reports_gained_and_in_focus() {
    let a = entity(1);
    let mut lookup = HashMap::from([(a, Focusable::new())]);
    let mut dispatcher = PickDispatcher::default();

    let events = dispatcher.on_enter(a, Vec3::ZERO, &mut lookup);
    assert_eq!(
        events,
        vec![
            FocusEvent::new(a, FocusEventKind::Gained),
            FocusEvent::new(a, FocusEventKind::InFocus),
        ]
    );
}

#[test]
fn test_no_pick_clears_current() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let a = entity(1);
    let mut lookup = HashMap::from([(a, recording(&log))]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(a, Vec3::ZERO, &mut lookup);
    let events = dispatcher.on_no_pick(&mut lookup);

    assert!(dispatcher.is_idle());
    assert_eq!(events, vec![FocusEvent::new(a, FocusEventKind::Lost)]);
    assert!(dispatcher.on_no_pick(&mut lookup).is_empty());
}

#[test]
fn test_non_focusable_enter_is_ignored() {
    let mut lookup: HashMap<Entity, Focusable> = HashMap::new();
    let mut dispatcher = PickDispatcher::default();

    let events = dispatcher.on_enter(entity(9), Vec3::ZERO, &mut lookup);
    assert!(events.is_empty());
    assert!(dispatcher.is_idle());
}

#[test]
fn test_last_pick_wins_on_overlapping_enter() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (entity(1), entity(2));
    let mut lookup = HashMap::from([(a, recording(&log)), (b, recording(&log))]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(a, Vec3::ZERO, &mut lookup);
    dispatcher.on_enter(b, Vec3::ZERO, &mut lookup);

    assert_eq!(dispatcher.current(), Some(b));
    assert!(!lookup[&a].is_focused());
    assert!(lookup[&b].is_focused());
    assert_eq!(*log.lock().unwrap(), vec![(a, true), (a, false), (b, true)]);
}

#[test]
fn test_stale_exit_is_ignored() {
    let (a, b) = (entity(1), entity(2));
    let mut lookup = HashMap::from([(a, Focusable::new()), (b, Focusable::new())]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(b, Vec3::ZERO, &mut lookup);
    assert!(dispatcher.on_exit(a, &mut lookup).is_empty());
    assert_eq!(dispatcher.current(), Some(b));
    assert!(lookup[&b].is_focused());
}

#[test]
fn test_despawned_current_is_cleared_silently() {
    let a = entity(1);
    let mut lookup = HashMap::from([(a, Focusable::new())]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(a, Vec3::ZERO, &mut lookup);
    lookup.clear();

    assert!(dispatcher.on_no_pick(&mut lookup).is_empty());
    assert!(dispatcher.is_idle());
}

#[test]
fn test_inside_refreshes_hit_without_refocusing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let a = entity(1);
    let mut lookup = HashMap::from([(a, recording(&log))]);
    let mut dispatcher = PickDispatcher::default();

    dispatcher.on_enter(a, Vec3::ZERO, &mut lookup);
    let events = dispatcher.on_inside(a, Vec3::X, &mut lookup);

    assert_eq!(events, vec![FocusEvent::new(a, FocusEventKind::InFocus)]);
    assert_eq!(lookup[&a].hit_location, Some(Vec3::X));
    assert_eq!(log.lock().unwrap().len(), 1);
}

// ============================================================================
// ECS wiring
// ============================================================================

#[test]
fn test_dispatch_system_updates_components_and_publishes_events() {
    let mut app = App::new();
    app.add_event::<PickEvent>()
        .add_event::<FocusEvent>()
        .init_resource::<PickDispatcher>()
        .add_systems(Update, dispatch_pick_events);

    let panel = app.world_mut().spawn(Focusable::new().with_tag("panel")).id();
    let wall = app.world_mut().spawn_empty().id();

    app.world_mut().send_event(PickEvent::Enter {
        entity: panel,
        hit: Vec3::Y,
    });
    app.update();

    assert!(app.world().get::<Focusable>(panel).unwrap().is_focused());
    assert_eq!(app.world().resource::<PickDispatcher>().current(), Some(panel));
    let kinds: Vec<_> = app
        .world()
        .resource::<Events<FocusEvent>>()
        .iter_current_update_events()
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec![FocusEventKind::Gained, FocusEventKind::InFocus]);

    app.world_mut().send_event(PickEvent::Exit { entity: panel });
    app.world_mut().send_event(PickEvent::Enter {
        entity: wall,
        hit: Vec3::Y,
    });
    app.update();

    assert!(!app.world().get::<Focusable>(panel).unwrap().is_focused());
    assert!(app.world().resource::<PickDispatcher>().is_idle());
}

fn gaze_app() -> App {
    let mut app = App::new();
    app.insert_resource(GazeSettings::default())
        .init_resource::<GazePicker>()
        .add_event::<PickEvent>()
        .add_systems(Update, update_gaze_pick);
    // Looks down -Z from the origin
    app.world_mut()
        .spawn((Camera3d::default(), GlobalTransform::IDENTITY));
    app
}

fn spawn_pickable(app: &mut App, z: f32, visibility: InheritedVisibility) -> Entity {
    app.world_mut()
        .spawn((
            Pickable::with_radius(0.5),
            GlobalTransform::from_translation(Vec3::new(0.0, 0.0, z)),
            visibility,
        ))
        .id()
}

fn pick_events(app: &App) -> Vec<PickEvent> {
    app.world()
        .resource::<Events<PickEvent>>()
        .iter_current_update_events()
        .copied()
        .collect()
}

#[test]
fn test_gaze_ray_skips_hidden_pickables() {
    let mut app = gaze_app();
    spawn_pickable(&mut app, -1.0, InheritedVisibility::HIDDEN);
    let behind = spawn_pickable(&mut app, -3.0, InheritedVisibility::VISIBLE);

    app.update();

    assert_eq!(
        pick_events(&app),
        vec![PickEvent::Enter {
            entity: behind,
            hit: Vec3::new(0.0, 0.0, -3.0),
        }]
    );
}

#[test]
fn test_hidden_pickable_alone_produces_no_enter() {
    let mut app = gaze_app();
    spawn_pickable(&mut app, -2.0, InheritedVisibility::HIDDEN);

    app.update();

    assert!(pick_events(&app).is_empty());
    assert!(app.world().resource::<GazePicker>().current().is_none());
}

#[test]
fn test_pickable_hidden_mid_gaze_exits() {
    let mut app = gaze_app();
    let dialog = spawn_pickable(&mut app, -2.0, InheritedVisibility::VISIBLE);
    app.update();
    assert!(matches!(
        pick_events(&app).as_slice(),
        [PickEvent::Enter { entity, .. }] if *entity == dialog
    ));

    *app.world_mut()
        .get_mut::<InheritedVisibility>(dialog)
        .unwrap() = InheritedVisibility::HIDDEN;
    app.update();

    assert_eq!(
        pick_events(&app),
        vec![PickEvent::Exit { entity: dialog }, PickEvent::NoPick]
    );
}
