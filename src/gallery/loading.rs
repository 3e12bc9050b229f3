use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::config::GazeSettings;
use crate::error::GalleryError;
use crate::game_state::AppState;

/// Optional panel textures requested by the settings, in panel order.
#[derive(Resource, Default)]
pub struct PanelTextures {
    pub paths: Vec<String>,
    pub handles: Vec<Handle<Image>>,
}

pub fn start_loading_textures(
    mut commands: Commands,
    settings: Res<GazeSettings>,
    asset_server: Res<AssetServer>,
) {
    let paths = settings.panel_textures.clone();
    let handles = paths
        .iter()
        .map(|path| asset_server.load::<Image>(path.clone()))
        .collect::<Vec<_>>();
    if !handles.is_empty() {
        info!("Loading {} panel textures", handles.len());
    }
    commands.insert_resource(PanelTextures { paths, handles });
}

/// Where the panel textures stand as a whole.
#[derive(Debug)]
pub enum TextureProgress {
    Pending,
    Ready,
    Failed(GalleryError),
}

/// Fold per-texture load states into one verdict; the first failure wins.
pub fn texture_progress<'a>(
    states: impl IntoIterator<Item = (&'a str, LoadState)>,
) -> TextureProgress {
    let mut progress = TextureProgress::Ready;
    for (path, state) in states {
        match state {
            LoadState::Loaded => {}
            LoadState::Failed(_) => {
                return TextureProgress::Failed(GalleryError::AssetLoad {
                    path: path.to_string(),
                })
            }
            _ => progress = TextureProgress::Pending,
        }
    }
    progress
}

/// Enter the scene once textures are in; abort the app if any fails.
pub fn check_textures_loaded(
    textures: Option<Res<PanelTextures>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(textures) = textures else {
        return;
    };

    let states = textures
        .paths
        .iter()
        .zip(&textures.handles)
        .map(|(path, handle)| (path.as_str(), asset_server.load_state(handle.id())));

    apply_texture_progress(texture_progress(states), &mut next_state, &mut exit);
}

/// Log-and-abort on failure, enter the scene when ready.
pub fn apply_texture_progress(
    progress: TextureProgress,
    next_state: &mut NextState<AppState>,
    exit: &mut EventWriter<AppExit>,
) {
    match progress {
        TextureProgress::Pending => {}
        TextureProgress::Ready => next_state.set(AppState::InScene),
        TextureProgress::Failed(err) => {
            error!("{err}");
            exit.send(AppExit::error());
        }
    }
}
