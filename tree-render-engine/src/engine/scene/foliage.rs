use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::view::NoFrustumCulling;
use constants::render_settings::{FOLIAGE_BODY_RGB, FOLIAGE_HIGHLIGHT_RGB};

use crate::engine::morph::population::TreePopulations;
use crate::engine::morph::solver::{SolveContext, solve};
use crate::engine::morph::transition::Formedness;
use crate::engine::vision::classifier::GestureState;

use super::rig::SceneRig;

#[derive(Component)]
pub struct FoliageCloud;

/// Build the foliage cloud as a single point-list mesh: one vertex per
/// particle, colours baked once from the target silhouette, positions
/// rewritten in place every tick.
pub fn spawn_foliage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    populations: Res<TreePopulations>,
    rig: Query<Entity, With<SceneRig>>,
) {
    let Ok(rig) = rig.single() else {
        return;
    };

    let positions: Vec<[f32; 3]> = populations
        .foliage
        .iter()
        .map(|d| d.chaos_position.to_array())
        .collect();
    let colors: Vec<[f32; 4]> = populations
        .foliage
        .iter()
        .map(|d| {
            // Gold highlight banding over the pine body, keyed off the
            // assembled silhouette so the pattern survives the morph.
            let band = 0.2 + 0.3 * (d.target_position.length() * 0.5).sin();
            let mix = |a: f32, b: f32| a + (b - a) * band;
            [
                mix(FOLIAGE_BODY_RGB[0], FOLIAGE_HIGHLIGHT_RGB[0]),
                mix(FOLIAGE_BODY_RGB[1], FOLIAGE_HIGHLIGHT_RGB[1]),
                mix(FOLIAGE_BODY_RGB[2], FOLIAGE_HIGHLIGHT_RGB[2]),
                1.0,
            ]
        })
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        FoliageCloud,
        // The cloud's bounds swing wildly mid-morph; culling is wrong here.
        NoFrustumCulling,
        ChildOf(rig),
    ));
}

/// Re-solve every particle and write the mesh positions in place. The
/// descriptor array is read-only and each vertex is independent, a tight
/// batch loop over contiguous storage.
pub fn update_foliage_cloud(
    time: Res<Time>,
    formedness: Res<Formedness>,
    gesture: Res<GestureState>,
    populations: Res<TreePopulations>,
    cloud: Query<&Mesh3d, With<FoliageCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok(mesh3d) = cloud.single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh3d.0) else {
        return;
    };
    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    else {
        return;
    };

    let ctx = SolveContext {
        level: formedness.foliage,
        formed_target: gesture.formed,
        elapsed: time.elapsed_secs(),
    };
    for (slot, descriptor) in positions.iter_mut().zip(&populations.foliage) {
        *slot = solve(descriptor, 0, &ctx).translation.to_array();
    }
}
