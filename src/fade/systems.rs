use bevy::color::Alpha;
use bevy::prelude::*;

use super::components::{FadeFinished, Fadeable};

/// Advance every fade, push its opacity into the target material and keep
/// visibility in line with the enabled flag.
pub fn animate_fadeables(
    time: Res<Time>,
    mut fadeables: Query<(Entity, &mut Fadeable, &mut Visibility)>,
    targets: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut finished: EventWriter<FadeFinished>,
) {
    let dt = time.delta_secs();

    for (entity, mut fadeable, mut visibility) in fadeables.iter_mut() {
        let animating = fadeable.fader.is_animating();
        let settled = fadeable.fader.advance(dt);

        let wanted = if fadeable.fader.is_enabled() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }

        if animating {
            if let Ok(material_handle) = targets.get(fadeable.target) {
                if let Some(material) = materials.get_mut(&material_handle.0) {
                    material.base_color.set_alpha(fadeable.fader.opacity());
                }
            }
        }

        if let Some(state) = settled {
            debug!("Fade on {entity} settled in {state:?}");
            finished.send(FadeFinished { entity, state });
        }
    }
}
