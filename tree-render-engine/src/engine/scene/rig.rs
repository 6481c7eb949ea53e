use bevy::prelude::*;
use constants::render_settings::{RIG_EASE_FACTOR, RIG_TILT_RANGE, TURNTABLE_RATE};

use crate::engine::vision::classifier::GestureState;

/// Root of the rotating scene graph. Everything that morphs hangs off this
/// entity; the camera stays outside it.
#[derive(Component, Default)]
pub struct SceneRig {
    pitch: f32,
    yaw: f32,
    turntable_yaw: f32,
}

/// Ease the rig toward the pointing vector on top of a slow turntable spin.
pub fn steer_scene_rig(
    time: Res<Time>,
    gesture: Res<GestureState>,
    mut query: Query<(&mut SceneRig, &mut Transform)>,
) {
    let Ok((mut rig, mut transform)) = query.single_mut() else {
        return;
    };

    rig.turntable_yaw += TURNTABLE_RATE * time.delta_secs();
    let target_pitch = gesture.point.y * RIG_TILT_RANGE;
    let target_yaw = rig.turntable_yaw + gesture.point.x * RIG_TILT_RANGE;

    rig.pitch = rig.pitch.lerp(target_pitch, RIG_EASE_FACTOR);
    rig.yaw = rig.yaw.lerp(target_yaw, RIG_EASE_FACTOR);
    transform.rotation = Quat::from_rotation_y(rig.yaw) * Quat::from_rotation_x(rig.pitch);
}
