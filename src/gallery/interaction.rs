use bevy::prelude::*;

use super::components::{CountdownLabel, GalleryPanel, Highlight, PlayNextDialog, UpNext};
use super::toast::ToastEvent;
use crate::countdown::{Countdown, CountdownEvent, CountdownStep};
use crate::fade::Fadeable;
use crate::focus::{ClickOutEvent, FocusEvent, FocusEventKind, Swipe};

type DialogQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static mut Fadeable, &'static mut Countdown), With<PlayNextDialog>>;

fn set_label(labels: &mut Query<&mut Text, With<CountdownLabel>>, value: String) {
    for mut text in labels.iter_mut() {
        text.0.clone_from(&value);
    }
}

/// Swap panel colors as focus comes and goes.
pub fn highlight_focused(
    mut events: EventReader<FocusEvent>,
    highlights: Query<(&Highlight, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        let Ok((highlight, material_handle)) = highlights.get(event.entity) else {
            continue;
        };
        let color = match event.kind {
            FocusEventKind::Gained => highlight.hover_color,
            FocusEventKind::Lost => highlight.normal_color,
            _ => continue,
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = color;
        }
    }
}

/// Clicking a panel queues it and opens the "play next" dialog with a fresh countdown.
pub fn open_dialog_on_panel_click(
    mut events: EventReader<FocusEvent>,
    panels: Query<&GalleryPanel>,
    mut dialog: DialogQuery,
    mut up_next: ResMut<UpNext>,
    mut countdown_events: EventWriter<CountdownEvent>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for event in events.read() {
        if event.kind != FocusEventKind::Click {
            continue;
        }
        let Ok(panel) = panels.get(event.entity) else {
            continue;
        };
        let Ok((dialog_entity, mut fadeable, mut countdown)) = dialog.get_single_mut() else {
            continue;
        };

        up_next.0 = Some(panel.0);
        fadeable.show();
        let step = countdown.0.start();
        countdown_events.send(CountdownEvent {
            entity: dialog_entity,
            step,
        });
        toasts.send(ToastEvent::new(format!("Up next: photo {}", panel.0 + 1)));
    }
}

/// Swiping over a panel moves the queued photo.
pub fn cycle_up_next_on_swipe(
    mut events: EventReader<FocusEvent>,
    panels: Query<&GalleryPanel>,
    mut up_next: ResMut<UpNext>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for event in events.read() {
        let FocusEventKind::Gesture(swipe) = event.kind else {
            continue;
        };
        let Ok(panel) = panels.get(event.entity) else {
            continue;
        };

        let queued = up_next.0.unwrap_or(panel.0);
        let next = match swipe {
            Swipe::Forward | Swipe::Up => (queued + 1) % super::PANEL_COUNT,
            Swipe::Backward | Swipe::Down => (queued + super::PANEL_COUNT - 1) % super::PANEL_COUNT,
            Swipe::Ignore => continue,
        };
        up_next.0 = Some(next);
        toasts.send(ToastEvent::new(format!("Queued photo {}", next + 1)));
    }
}

/// Clicking the dialog plays right away; clicking elsewhere dismisses it.
pub fn resolve_dialog_clicks(
    mut focus_events: EventReader<FocusEvent>,
    mut click_out: EventReader<ClickOutEvent>,
    mut dialog: DialogQuery,
    mut up_next: ResMut<UpNext>,
    mut labels: Query<&mut Text, With<CountdownLabel>>,
    mut toasts: EventWriter<ToastEvent>,
) {
    let Ok((dialog_entity, mut fadeable, mut countdown)) = dialog.get_single_mut() else {
        focus_events.clear();
        click_out.clear();
        return;
    };

    let played = focus_events
        .read()
        .any(|e| e.entity == dialog_entity && e.kind == FocusEventKind::Click);
    let dismissed = click_out.read().count() > 0;

    if played {
        if let Some(index) = up_next.0.take() {
            toasts.send(ToastEvent::new(format!("Playing photo {}", index + 1)));
        }
    } else if dismissed && fadeable.fader.is_enabled() {
        up_next.0 = None;
        toasts.send(ToastEvent::new("Dismissed"));
    } else {
        return;
    }

    fadeable.hide();
    countdown.0.cancel();
    set_label(&mut labels, String::new());
}

/// Mirror the countdown into the label; on timeout play the queued photo and close.
pub fn follow_countdown(
    mut events: EventReader<CountdownEvent>,
    mut dialog: DialogQuery,
    mut up_next: ResMut<UpNext>,
    mut labels: Query<&mut Text, With<CountdownLabel>>,
    mut toasts: EventWriter<ToastEvent>,
) {
    for event in events.read() {
        let Ok((_, mut fadeable, _)) = dialog.get_mut(event.entity) else {
            continue;
        };

        match event.step {
            CountdownStep::Tick(count) => {
                set_label(&mut labels, format!("Playing next in {count}"));
            }
            CountdownStep::TimesUp => {
                fadeable.hide();
                set_label(&mut labels, String::new());
                if let Some(index) = up_next.0.take() {
                    toasts.send(ToastEvent::new(format!(
                        "Time's up, playing photo {}",
                        index + 1
                    )));
                }
            }
        }
    }
}
