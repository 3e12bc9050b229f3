use bevy::prelude::*;

use crate::config::GazeSettings;

/// Marks an entity the gaze ray can hit, approximated as a sphere.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Pickable {
    /// Hit radius; `None` uses the configured default.
    pub radius: Option<f32>,
}

impl Pickable {
    pub fn with_radius(radius: f32) -> Self {
        Self {
            radius: Some(radius),
        }
    }
}

/// Closest intersection of the gaze ray with a pickable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    /// Distance along the ray.
    pub distance: f32,
    /// Point on the ray nearest the pickable's centre.
    pub point: Vec3,
}

/// Notifications produced by the picker, in delivery order.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PickEvent {
    Enter { entity: Entity, hit: Vec3 },
    Inside { entity: Entity, hit: Vec3 },
    Exit { entity: Entity },
    NoPick,
}

/// Test the gaze ray against spheres and return the closest hit.
///
/// `direction` must be normalized.
pub fn closest_hit(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<PickHit> {
    let mut closest: Option<PickHit> = None;

    for (entity, center, radius) in candidates {
        let distance_along_ray = (center - origin).dot(direction);
        if !(0.0..=max_distance).contains(&distance_along_ray) {
            continue;
        }

        let point = origin + direction * distance_along_ray;
        if (center - point).length() >= radius {
            continue;
        }

        if closest.map_or(true, |c| distance_along_ray < c.distance) {
            closest = Some(PickHit {
                entity,
                distance: distance_along_ray,
                point,
            });
        }
    }

    closest
}

/// Tracks the previous hit so each frame can be turned into enter/inside/exit events.
#[derive(Resource, Default, Debug)]
pub struct GazePicker {
    current: Option<PickHit>,
}

impl GazePicker {
    pub fn current(&self) -> Option<PickHit> {
        self.current
    }

    pub fn update(&mut self, hit: Option<PickHit>) -> Vec<PickEvent> {
        let previous = self.current.map(|h| h.entity);
        self.current = hit;

        match (previous, hit) {
            (None, None) => Vec::new(),
            (Some(old), None) => vec![PickEvent::Exit { entity: old }, PickEvent::NoPick],
            (None, Some(new)) => vec![PickEvent::Enter {
                entity: new.entity,
                hit: new.point,
            }],
            (Some(old), Some(new)) if old == new.entity => vec![PickEvent::Inside {
                entity: new.entity,
                hit: new.point,
            }],
            (Some(old), Some(new)) => vec![
                PickEvent::Exit { entity: old },
                PickEvent::Enter {
                    entity: new.entity,
                    hit: new.point,
                },
            ],
        }
    }

    /// Forget the current hit without emitting events.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Raycast from the gaze camera and publish pick notifications.
pub fn update_gaze_pick(
    settings: Res<GazeSettings>,
    mut picker: ResMut<GazePicker>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    pickables: Query<(Entity, &GlobalTransform, &Pickable, &InheritedVisibility)>,
    mut events: EventWriter<PickEvent>,
) {
    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };

    let origin = camera_transform.translation();
    let direction = camera_transform.forward().as_vec3();

    let candidates = pickables
        .iter()
        .filter(|(_, _, _, visibility)| visibility.get())
        .map(|(entity, transform, pickable, _)| {
            (
                entity,
                transform.translation(),
                pickable.radius.unwrap_or(settings.pick_radius),
            )
        });

    let hit = closest_hit(origin, direction, settings.interaction_distance, candidates);
    events.send_batch(picker.update(hit));
}
