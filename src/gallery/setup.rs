use bevy::prelude::*;

use super::components::{CountdownLabel, GalleryEntity, GalleryPanel, Highlight, PlayNextDialog};
use super::loading::PanelTextures;
use super::{PANEL_COUNT, ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH, WALL_THICKNESS};
use crate::config::GazeSettings;
use crate::countdown::{Countdown, CountdownTimer};
use crate::fade::Fadeable;
use crate::focus::Focusable;
use crate::head::{HeadController, EYE_HEIGHT};
use crate::pick::Pickable;

const PANEL_WIDTH: f32 = 1.4;
const PANEL_HEIGHT: f32 = 0.9;
const PANEL_SPACING: f32 = 1.7;
const PANEL_DEPTH: f32 = -2.5;

const PANEL_NORMAL: Color = Color::srgb(0.55, 0.55, 0.6);
const PANEL_HOVER: Color = Color::srgb(0.85, 0.85, 1.0);

pub fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.24, 0.26),
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.12, 0.12, 0.14),
        ..default()
    });

    // Floor
    commands.spawn((
        GalleryEntity,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Back wall (negative Z)
    commands.spawn((
        GalleryEntity,
        Mesh3d(meshes.add(Cuboid::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS))),
        MeshMaterial3d(wall_material.clone()),
        Transform::from_xyz(0.0, ROOM_HEIGHT / 2.0, -ROOM_DEPTH / 2.0),
    ));

    // Side walls
    for side in [-1.0, 1.0] {
        commands.spawn((
            GalleryEntity,
            Mesh3d(meshes.add(Cuboid::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_xyz(side * ROOM_WIDTH / 2.0, ROOM_HEIGHT / 2.0, 0.0),
        ));
    }

    commands.spawn((
        GalleryEntity,
        PointLight {
            shadows_enabled: false,
            intensity: 1_500_000.0,
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(0.0, ROOM_HEIGHT - 0.5, 0.0),
    ));

    // Viewer
    commands.spawn((
        GalleryEntity,
        HeadController::default(),
        Camera3d::default(),
        Transform::from_xyz(0.0, EYE_HEIGHT, 1.0),
    ));
}

pub fn setup_panels(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Option<Res<PanelTextures>>,
) {
    let quad = meshes.add(Rectangle::new(PANEL_WIDTH, PANEL_HEIGHT));
    let first_x = -PANEL_SPACING * (PANEL_COUNT as f32 - 1.0) / 2.0;

    for index in 0..PANEL_COUNT {
        let texture = textures
            .as_ref()
            .and_then(|t| t.handles.get(index))
            .cloned();
        // Each panel gets its own material so highlights stay independent
        let material = materials.add(StandardMaterial {
            base_color: PANEL_NORMAL,
            base_color_texture: texture,
            unlit: true,
            ..default()
        });

        let tag = format!("photo {}", index + 1);
        commands.spawn((
            GalleryEntity,
            GalleryPanel(index),
            Highlight {
                hover_color: PANEL_HOVER,
                normal_color: PANEL_NORMAL,
            },
            Pickable::with_radius(PANEL_HEIGHT / 2.0),
            Focusable::new()
                .with_tag(tag)
                .on_gained_focus(|entity| debug!("Panel {entity} gained focus"))
                .on_lost_focus(|entity| debug!("Panel {entity} lost focus")),
            Mesh3d(quad.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(first_x + index as f32 * PANEL_SPACING, EYE_HEIGHT, PANEL_DEPTH),
        ));
    }
}

pub fn setup_dialog(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GazeSettings>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.1, 0.3, 0.6, 0.0),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let dialog = commands
        .spawn((
            GalleryEntity,
            PlayNextDialog,
            Pickable::with_radius(0.45),
            Focusable::new().with_tag("play next"),
            Countdown(CountdownTimer::new(
                settings.countdown_max,
                settings.countdown_interval(),
            )),
            Transform::from_xyz(0.0, EYE_HEIGHT - 0.35, -1.6),
            Visibility::Hidden,
        ))
        .id();

    let face = commands
        .spawn((
            Mesh3d(meshes.add(Rectangle::new(1.0, 0.6))),
            MeshMaterial3d(material),
            Transform::default(),
        ))
        .set_parent(dialog)
        .id();

    commands
        .entity(dialog)
        .insert(Fadeable::hidden(face, settings.fade_duration_secs));

    // Countdown readout
    commands.spawn((
        GalleryEntity,
        CountdownLabel,
        Text::new(""),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(40.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
    ));
}

pub fn cleanup_gallery(mut commands: Commands, query: Query<Entity, With<GalleryEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
