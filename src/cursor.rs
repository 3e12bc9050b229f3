use bevy::prelude::*;

use crate::config::GazeSettings;
use crate::focus::{FocusEvent, FocusEventKind, Focusable};
use crate::game_state::AppState;
use crate::pick::{GazeSet, PickDispatcher};

/// Gaze cursor state, owned by the scene while it is live.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GazeCursor {
    pub enabled: bool,
    /// Highlight look shown while resting on an interactive focusable.
    pub interactive: bool,
}

impl Default for GazeCursor {
    fn default() -> Self {
        Self {
            enabled: true,
            interactive: false,
        }
    }
}

impl GazeCursor {
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable_interactive(&mut self) {
        self.interactive = true;
    }

    pub fn disable_interactive(&mut self) {
        self.interactive = false;
    }

    /// Apply a focus event for an entity that does or doesn't want the highlight cursor.
    pub fn apply(&mut self, kind: FocusEventKind, wants_highlight: bool) {
        match kind {
            FocusEventKind::Gained | FocusEventKind::InFocus if wants_highlight => {
                self.enable_interactive()
            }
            FocusEventKind::Lost if wants_highlight => self.disable_interactive(),
            _ => {}
        }
    }
}

/// Root of the crosshair UI.
#[derive(Component)]
pub struct Crosshair;

/// Which crosshair dot an entity is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrosshairDot {
    Normal,
    Highlight,
}

pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InScene), setup_crosshair)
            .add_systems(OnExit(AppState::InScene), cleanup_crosshair)
            .add_systems(
                Update,
                (track_focus, sync_crosshair)
                    .chain()
                    .in_set(GazeSet::React)
                    .run_if(in_state(AppState::InScene)),
            );
    }
}

fn dot(size: f32, color: Color) -> (Node, BackgroundColor, BorderRadius) {
    (
        Node {
            width: Val::Px(size),
            height: Val::Px(size),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(color),
        BorderRadius::MAX,
    )
}

pub fn setup_crosshair(mut commands: Commands, settings: Res<GazeSettings>) {
    commands.insert_resource(GazeCursor::default());

    // Crosshair container (centered on screen)
    commands
        .spawn((
            Crosshair,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                CrosshairDot::Normal,
                dot(settings.cursor_size_px, Color::srgba(1.0, 1.0, 1.0, 0.7)),
            ));
            parent.spawn((
                CrosshairDot::Highlight,
                dot(
                    settings.highlight_cursor_size_px,
                    Color::srgba(0.4, 0.8, 1.0, 0.9),
                ),
                Visibility::Hidden,
            ));
        });
}

pub fn cleanup_crosshair(mut commands: Commands, query: Query<Entity, With<Crosshair>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<GazeCursor>();
}

fn track_focus(
    mut cursor: ResMut<GazeCursor>,
    mut events: EventReader<FocusEvent>,
    dispatcher: Res<PickDispatcher>,
    focusables: Query<&Focusable>,
) {
    for event in events.read() {
        let wants_highlight = focusables
            .get(event.entity)
            .map(|f| f.show_interactive_cursor)
            .unwrap_or(false);
        cursor.apply(event.kind, wants_highlight);
    }

    // A despawned pick is released without a Lost event.
    if dispatcher.is_idle() && cursor.interactive {
        cursor.disable_interactive();
    }
}

fn sync_crosshair(cursor: Res<GazeCursor>, mut dots: Query<(&CrosshairDot, &mut Visibility)>) {
    if !cursor.is_changed() {
        return;
    }

    for (dot, mut visibility) in dots.iter_mut() {
        let shown = cursor.enabled
            && match dot {
                CrosshairDot::Normal => !cursor.interactive,
                CrosshairDot::Highlight => cursor.interactive,
            };
        *visibility = if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::dispatcher::dispatch_pick_events;
    use crate::pick::PickEvent;

    #[test]
    fn test_gain_switches_to_highlight_only_when_wanted() {
        let mut cursor = GazeCursor::default();
        cursor.apply(FocusEventKind::Gained, false);
        assert!(!cursor.interactive);

        cursor.apply(FocusEventKind::Gained, true);
        assert!(cursor.interactive);
    }

    #[test]
    fn test_lost_restores_normal_cursor() {
        let mut cursor = GazeCursor::default();
        cursor.apply(FocusEventKind::InFocus, true);
        cursor.apply(FocusEventKind::Click, true);
        assert!(cursor.interactive);

        cursor.apply(FocusEventKind::Lost, true);
        assert!(!cursor.interactive);
    }

    #[test]
    fn test_lost_from_opted_out_focusable_keeps_highlight() {
        let mut cursor = GazeCursor::default();
        cursor.apply(FocusEventKind::Gained, true);
        cursor.apply(FocusEventKind::Lost, false);
        assert!(cursor.interactive);
    }

    #[test]
    fn test_enable_disable() {
        let mut cursor = GazeCursor::default();
        cursor.disable();
        assert!(!cursor.enabled);
        cursor.enable();
        assert!(cursor.enabled);
    }

    fn cursor_app() -> App {
        let mut app = App::new();
        app.init_resource::<GazeCursor>()
            .init_resource::<PickDispatcher>()
            .add_event::<PickEvent>()
            .add_event::<FocusEvent>()
            .add_systems(
                Update,
                (dispatch_pick_events, track_focus, sync_crosshair).chain(),
            );
        app.world_mut()
            .spawn((CrosshairDot::Normal, Visibility::Inherited));
        app.world_mut()
            .spawn((CrosshairDot::Highlight, Visibility::Hidden));
        app
    }

    fn shown_dot(app: &mut App) -> CrosshairDot {
        let mut query = app.world_mut().query::<(&CrosshairDot, &Visibility)>();
        let shown: Vec<_> = query
            .iter(app.world())
            .filter(|(_, visibility)| **visibility != Visibility::Hidden)
            .map(|(dot, _)| *dot)
            .collect();
        assert_eq!(shown.len(), 1);
        shown[0]
    }

    #[test]
    fn test_crosshair_follows_interactive_focus() {
        let mut app = cursor_app();
        let panel = app.world_mut().spawn(Focusable::new()).id();

        app.world_mut().send_event(PickEvent::Enter {
            entity: panel,
            hit: Vec3::ZERO,
        });
        app.update();
        assert!(app.world().resource::<GazeCursor>().interactive);
        assert_eq!(shown_dot(&mut app), CrosshairDot::Highlight);

        app.world_mut().send_event(PickEvent::Exit { entity: panel });
        app.update();
        assert!(!app.world().resource::<GazeCursor>().interactive);
        assert_eq!(shown_dot(&mut app), CrosshairDot::Normal);
    }

    #[test]
    fn test_opted_out_focusable_keeps_normal_crosshair() {
        let mut app = cursor_app();
        let label = app
            .world_mut()
            .spawn(Focusable::new().without_interactive_cursor())
            .id();

        app.world_mut().send_event(PickEvent::Enter {
            entity: label,
            hit: Vec3::ZERO,
        });
        app.update();
        assert!(!app.world().resource::<GazeCursor>().interactive);
        assert_eq!(shown_dot(&mut app), CrosshairDot::Normal);
    }

    #[test]
    fn test_despawned_pick_resets_crosshair() {
        let mut app = cursor_app();
        let panel = app.world_mut().spawn(Focusable::new()).id();

        app.world_mut().send_event(PickEvent::Enter {
            entity: panel,
            hit: Vec3::ZERO,
        });
        app.update();
        assert_eq!(shown_dot(&mut app), CrosshairDot::Highlight);

        app.world_mut().despawn(panel);
        app.world_mut().send_event(PickEvent::Exit { entity: panel });
        app.update();

        assert!(app.world().resource::<PickDispatcher>().is_idle());
        assert!(!app.world().resource::<GazeCursor>().interactive);
        assert_eq!(shown_dot(&mut app), CrosshairDot::Normal);
    }

    #[test]
    fn test_disabled_cursor_hides_both_dots() {
        let mut app = cursor_app();
        app.world_mut().resource_mut::<GazeCursor>().disable();
        app.update();

        let mut query = app.world_mut().query::<&Visibility>();
        assert!(query
            .iter(app.world())
            .all(|visibility| *visibility == Visibility::Hidden));
    }
}
