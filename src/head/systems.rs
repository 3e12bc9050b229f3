use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use super::HeadController;
use crate::config::GazeSettings;

fn set_grab(window: &mut Window, grabbed: bool) {
    if grabbed {
        window.cursor_options.grab_mode = CursorGrabMode::Confined;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        set_grab(&mut window, true);
    }
}

pub fn release_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        set_grab(&mut window, false);
    }
}

pub fn toggle_cursor_grab(keyboard_input: Res<ButtonInput<KeyCode>>, mut windows: Query<&mut Window>) {
    if !keyboard_input.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    let grabbed = window.cursor_options.grab_mode != CursorGrabMode::None;
    set_grab(&mut window, !grabbed);
}

pub fn head_look(
    settings: Res<GazeSettings>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut query: Query<(&mut Transform, &mut HeadController)>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Only turn the head while the cursor is grabbed
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, mut head)) = query.get_single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        head.turn(event.delta, settings.mouse_sensitivity);
    }
    transform.rotation = head.rotation();
}

pub fn center_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    if window.cursor_options.grab_mode != CursorGrabMode::None && window.focused {
        let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
        window.set_cursor_position(Some(center));
    }
}
