use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use gazekit::config::GazeSettings;
use gazekit::game_state::AppState;
use gazekit::gallery::GalleryPlugin;
use gazekit::GazePlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Gazekit".to_string(),
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .insert_resource(GazeSettings::load_or_default())
        .init_state::<AppState>()
        .add_plugins((GazePlugin, GalleryPlugin))
        .run();
}
