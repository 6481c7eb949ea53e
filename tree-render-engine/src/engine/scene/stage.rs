use bevy::prelude::*;
use constants::render_settings::{CAMERA_POSITION, GROUND_RGB, TRUNK_RGB};

use super::rig::SceneRig;

/// Spawn the static scene: camera, lighting, the rotating rig, and the
/// trunk/ground dressing that never morphs.
pub fn spawn_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    let rig = commands
        .spawn((SceneRig::default(), Transform::default(), Visibility::default()))
        .id();

    // Warm key light at the crown and a front spot, turning with the tree.
    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.843, 0.0),
            intensity: 200_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 5.0, 0.0),
        ChildOf(rig),
    ));
    commands.spawn((
        SpotLight {
            color: Color::srgb(0.831, 0.686, 0.216),
            intensity: 800_000.0,
            outer_angle: 0.3,
            ..default()
        },
        Transform::from_xyz(0.0, 15.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ChildOf(rig),
    ));

    commands.spawn((
        Mesh3d(meshes.add(ConicalFrustum {
            radius_top: 0.5,
            radius_bottom: 0.8,
            height: 4.0,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(TRUNK_RGB[0], TRUNK_RGB[1], TRUNK_RGB[2]),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_xyz(0.0, -5.5, 0.0),
        ChildOf(rig),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(100.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(GROUND_RGB[0], GROUND_RGB[1], GROUND_RGB[2]),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -7.5, 0.0),
        ChildOf(rig),
    ));
}
