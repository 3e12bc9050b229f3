use bevy::prelude::*;

/// Everything spawned for the gallery scene, despawned when it ends.
#[derive(Component)]
pub struct GalleryEntity;

/// A photo panel; the index orders panels left to right.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryPanel(pub usize);

/// Material colors swapped while an entity holds focus.
#[derive(Component, Debug, Clone, Copy)]
pub struct Highlight {
    pub hover_color: Color,
    pub normal_color: Color,
}

/// The "play next" dialog root.
#[derive(Component)]
pub struct PlayNextDialog;

/// UI text showing the dialog countdown.
#[derive(Component)]
pub struct CountdownLabel;

/// Panel queued to play when the dialog times out or is clicked.
#[derive(Resource, Default, Debug)]
pub struct UpNext(pub Option<usize>);

/// Marker for the toast container in the top-left.
#[derive(Component)]
pub struct ToastRoot;
