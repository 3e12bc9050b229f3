use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::components::{Focusable, Swipe};
use super::events::{ClickOutEvent, FocusEvent, FocusEventKind};
use crate::fade::Fadeable;
use crate::pick::PickDispatcher;

/// Where a click should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Focused(Entity),
    Outside,
}

/// A click reaches the picked entity only if it can actually be seen.
pub fn resolve_click(current: Option<Entity>, is_seen: impl Fn(Entity) -> bool) -> ClickTarget {
    match current {
        Some(entity) if is_seen(entity) => ClickTarget::Focused(entity),
        _ => ClickTarget::Outside,
    }
}

/// Arrow keys stand in for touchpad swipes.
pub fn swipe_from_keys(keys: &ButtonInput<KeyCode>) -> Option<Swipe> {
    if keys.just_pressed(KeyCode::ArrowUp) {
        Some(Swipe::Up)
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        Some(Swipe::Down)
    } else if keys.just_pressed(KeyCode::ArrowRight) {
        Some(Swipe::Forward)
    } else if keys.just_pressed(KeyCode::ArrowLeft) {
        Some(Swipe::Backward)
    } else {
        None
    }
}

pub fn swipe_from_wheel(delta_y: f32) -> Swipe {
    if delta_y > 0.0 {
        Swipe::Up
    } else if delta_y < 0.0 {
        Swipe::Down
    } else {
        Swipe::Ignore
    }
}

type SeenQuery<'w, 's> = Query<'w, 's, (Option<&'static Visibility>, Option<&'static Fadeable>)>;

fn is_seen(seen: &SeenQuery, entity: Entity) -> bool {
    let Ok((visibility, fadeable)) = seen.get(entity) else {
        return false;
    };
    visibility != Some(&Visibility::Hidden)
        && fadeable.map_or(true, |f| f.fader.opacity() > 0.0)
}

fn cursor_grabbed(windows: &Query<&Window, With<PrimaryWindow>>) -> bool {
    windows
        .get_single()
        .map(|window| window.cursor_options.grab_mode != CursorGrabMode::None)
        .unwrap_or(false)
}

/// Route the primary click to the focused entity, or report a click outside.
pub fn process_clicks(
    mouse_input: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    dispatcher: Res<PickDispatcher>,
    seen: SeenQuery,
    mut focusables: Query<&mut Focusable>,
    mut focus_events: EventWriter<FocusEvent>,
    mut click_out: EventWriter<ClickOutEvent>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) || !cursor_grabbed(&windows) {
        return;
    }

    match resolve_click(dispatcher.current(), |entity| is_seen(&seen, entity)) {
        ClickTarget::Focused(entity) => {
            if let Ok(mut focusable) = focusables.get_mut(entity) {
                focusable.dispatch_click();
                info!("Clicked {}", focusable.label(entity));
                focus_events.send(FocusEvent::new(entity, FocusEventKind::Click));
            }
        }
        ClickTarget::Outside => {
            debug!("Click outside any focusable");
            click_out.send(ClickOutEvent);
        }
    }
}

/// Route swipe gestures to the focused entity.
pub fn process_swipes(
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    dispatcher: Res<PickDispatcher>,
    seen: SeenQuery,
    mut focusables: Query<&mut Focusable>,
    mut focus_events: EventWriter<FocusEvent>,
) {
    let from_wheel = wheel
        .read()
        .map(|event| swipe_from_wheel(event.y))
        .filter(|swipe| *swipe != Swipe::Ignore)
        .last();
    let Some(swipe) = swipe_from_keys(&keys).or(from_wheel) else {
        return;
    };

    let ClickTarget::Focused(entity) =
        resolve_click(dispatcher.current(), |entity| is_seen(&seen, entity))
    else {
        return;
    };

    if let Ok(mut focusable) = focusables.get_mut(entity) {
        focusable.dispatch_gesture(swipe);
        debug!("Swipe {:?} on {}", swipe, focusable.label(entity));
        focus_events.send(FocusEvent::new(entity, FocusEventKind::Gesture(swipe)));
    }
}
