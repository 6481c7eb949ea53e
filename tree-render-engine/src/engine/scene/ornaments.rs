use bevy::prelude::*;
use constants::palette::{ORNAMENT_PALETTE, light_color, palette_color};

use crate::engine::morph::population::{EntityDescriptor, TreePopulations};
use crate::engine::morph::solver::{SolveContext, solve};
use crate::engine::morph::transition::Formedness;
use crate::engine::vision::classifier::GestureState;

use super::rig::SceneRig;

/// Which descriptor array an ornament entity indexes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentGroup {
    Balls,
    Gifts,
    Lights,
}

#[derive(Component)]
pub struct OrnamentInstance {
    pub group: OrnamentGroup,
    pub index: usize,
}

/// Spawn every rigid ornament as one entity. Meshes and materials are shared
/// per kind (and per palette slot), so the renderer batches the lot.
pub fn spawn_ornaments(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    populations: Res<TreePopulations>,
    rig: Query<Entity, With<SceneRig>>,
) {
    let Ok(rig) = rig.single() else {
        return;
    };

    let ball_mesh = meshes.add(Sphere::new(1.0));
    let gift_mesh = meshes.add(Cuboid::from_length(1.0));
    let light_mesh = meshes.add(Sphere::new(1.0));

    let ball_materials: Vec<Handle<StandardMaterial>> = (0..ORNAMENT_PALETTE.len())
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: palette_color(i),
                metallic: 0.9,
                perceptual_roughness: 0.1,
                ..default()
            })
        })
        .collect();
    let gift_materials: Vec<Handle<StandardMaterial>> = (0..ORNAMENT_PALETTE.len())
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: palette_color(i),
                metallic: 0.5,
                perceptual_roughness: 0.5,
                ..default()
            })
        })
        .collect();
    let light_material = materials.add(StandardMaterial {
        base_color: light_color(),
        unlit: true,
        ..default()
    });

    let mut spawn_group = |descriptors: &[EntityDescriptor],
                           group: OrnamentGroup,
                           mesh: &Handle<Mesh>,
                           material_for: &dyn Fn(&EntityDescriptor) -> Handle<StandardMaterial>| {
        for (index, descriptor) in descriptors.iter().enumerate() {
            commands.spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material_for(descriptor)),
                Transform::from_translation(descriptor.chaos_position)
                    .with_scale(Vec3::splat(descriptor.scale)),
                OrnamentInstance { group, index },
                ChildOf(rig),
            ));
        }
    };

    spawn_group(&populations.balls, OrnamentGroup::Balls, &ball_mesh, &|d| {
        ball_materials[d.palette_index as usize].clone()
    });
    spawn_group(&populations.gifts, OrnamentGroup::Gifts, &gift_mesh, &|d| {
        gift_materials[d.palette_index as usize].clone()
    });
    spawn_group(&populations.lights, OrnamentGroup::Lights, &light_mesh, &|_| {
        light_material.clone()
    });

    info!(
        "spawned {} balls, {} gifts, {} lights",
        populations.balls.len(),
        populations.gifts.len(),
        populations.lights.len()
    );
}

/// Drive every ornament transform from the solver. Entities are independent;
/// the descriptor arrays are never written after generation.
pub fn update_ornament_transforms(
    time: Res<Time>,
    formedness: Res<Formedness>,
    gesture: Res<GestureState>,
    populations: Res<TreePopulations>,
    mut query: Query<(&OrnamentInstance, &mut Transform)>,
) {
    let ctx = SolveContext {
        level: formedness.ornaments,
        formed_target: gesture.formed,
        elapsed: time.elapsed_secs(),
    };

    for (instance, mut transform) in &mut query {
        let descriptors = match instance.group {
            OrnamentGroup::Balls => &populations.balls,
            OrnamentGroup::Gifts => &populations.gifts,
            OrnamentGroup::Lights => &populations.lights,
        };
        let Some(descriptor) = descriptors.get(instance.index) else {
            continue;
        };
        let solved = solve(descriptor, instance.index, &ctx);
        transform.translation = solved.translation;
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            solved.rotation.x,
            solved.rotation.y,
            solved.rotation.z,
        );
        transform.scale = solved.scale;
    }
}
