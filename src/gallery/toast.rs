use std::time::Duration;

use bevy::color::Alpha;
use bevy::prelude::*;

use super::components::ToastRoot;
use crate::fade::{FadeState, Fader};

/// Event to display a toast message.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent(pub String);

impl ToastEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// How long a toast stays fully opaque.
pub const TOAST_HOLD: Duration = Duration::from_millis(2500);

pub const TOAST_FADE_SECS: f32 = 0.5;

/// Toasts visible at once; the oldest are faded out early to make room.
pub const MAX_TOASTS: usize = 3;

const TOAST_TEXT: Color = Color::srgb(0.95, 0.95, 1.0);
const TOAST_BACKGROUND: Color = Color::srgba(0.08, 0.18, 0.35, 0.8);

/// A live toast: held on a timer, then faded out through a [`Fader`].
#[derive(Component, Debug)]
pub struct Toast {
    pub message: String,
    /// Spawn order; lower is older.
    pub serial: u64,
    hold: Timer,
    fader: Fader,
}

impl Toast {
    pub fn new(message: impl Into<String>, serial: u64) -> Self {
        Self {
            message: message.into(),
            serial,
            hold: Timer::new(TOAST_HOLD, TimerMode::Once),
            fader: Fader::shown(TOAST_FADE_SECS),
        }
    }

    pub fn opacity(&self) -> f32 {
        self.fader.opacity()
    }

    pub fn is_fading(&self) -> bool {
        self.fader.state() == FadeState::FadingOut
    }

    /// Restart the hold and pull the toast back up if it was fading.
    pub fn refresh(&mut self) {
        self.hold.reset();
        self.fader.show(None);
    }

    /// Start fading out now.
    pub fn dismiss(&mut self) {
        self.fader.hide(None);
    }

    /// Returns `true` once the toast has fully faded out.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let fade_started = self.hold.tick(delta).just_finished() && self.fader.hide(None);
        if !fade_started {
            self.fader.advance(delta.as_secs_f32());
        }
        self.fader.state() == FadeState::Hidden
    }
}

/// Serials of the toasts to dismiss so that `incoming` new ones fit under [`MAX_TOASTS`].
///
/// `live` holds `(serial, fading)` pairs; toasts already fading don't count.
pub fn toasts_to_retire(live: &[(u64, bool)], incoming: usize) -> Vec<u64> {
    let mut visible: Vec<u64> = live
        .iter()
        .filter(|(_, fading)| !fading)
        .map(|(serial, _)| *serial)
        .collect();
    let excess = (visible.len() + incoming).saturating_sub(MAX_TOASTS);
    visible.sort_unstable();
    visible.truncate(excess);
    visible
}

pub fn setup_toasts(mut commands: Commands) {
    commands.spawn((
        ToastRoot,
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(6.0),
            ..default()
        },
    ));
}

pub fn cleanup_toasts(mut commands: Commands, root_query: Query<Entity, With<ToastRoot>>) {
    for entity in root_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Spawn toasts for this frame's messages. A repeat of the newest toast refreshes it
/// instead of stacking a copy.
pub fn display_toasts(
    mut commands: Commands,
    mut events: EventReader<ToastEvent>,
    root_query: Query<Entity, With<ToastRoot>>,
    mut toasts: Query<&mut Toast>,
    mut next_serial: Local<u64>,
) {
    let Ok(root) = root_query.get_single() else {
        events.clear();
        return;
    };

    let mut messages: Vec<String> = events
        .read()
        .map(|event| {
            info!("{}", event.0);
            event.0.clone()
        })
        .collect();
    messages.dedup();
    if messages.len() > MAX_TOASTS {
        messages.drain(..messages.len() - MAX_TOASTS);
    }

    let newest = toasts
        .iter_mut()
        .filter(|toast| !toast.is_fading())
        .max_by_key(|toast| toast.serial);
    if let Some(mut newest) = newest {
        if messages.first() == Some(&newest.message) {
            newest.refresh();
            messages.remove(0);
        }
    }
    if messages.is_empty() {
        return;
    }

    let live: Vec<(u64, bool)> = toasts
        .iter()
        .map(|toast| (toast.serial, toast.is_fading()))
        .collect();
    let retire = toasts_to_retire(&live, messages.len());
    for mut toast in toasts.iter_mut() {
        if retire.contains(&toast.serial) {
            toast.dismiss();
        }
    }

    commands.entity(root).with_children(|parent| {
        for message in messages {
            *next_serial += 1;
            parent.spawn((
                Text::new(message.clone()),
                Toast::new(message, *next_serial),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TOAST_TEXT),
                BackgroundColor(TOAST_BACKGROUND),
                BorderRadius::all(Val::Px(6.0)),
                Node {
                    padding: UiRect::all(Val::Px(8.0)),
                    ..default()
                },
            ));
        }
    });
}

/// Age toasts, mirror their opacity into the text and background, and drop finished ones.
pub fn fade_toasts(
    mut commands: Commands,
    time: Res<Time>,
    mut toasts: Query<(Entity, &mut Toast, &mut TextColor, &mut BackgroundColor)>,
) {
    for (entity, mut toast, mut text, mut background) in toasts.iter_mut() {
        if toast.advance(time.delta()) {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        let opacity = toast.opacity();
        text.0.set_alpha(TOAST_TEXT.alpha() * opacity);
        background.0.set_alpha(TOAST_BACKGROUND.alpha() * opacity);
    }
}
