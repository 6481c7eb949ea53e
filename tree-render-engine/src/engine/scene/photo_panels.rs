use bevy::prelude::*;
use constants::render_settings::{PHOTO_CARD_SIZE, PHOTO_IMAGE_INSET, PHOTO_IMAGE_SIZE};

use crate::engine::morph::population::TreePopulations;
use crate::engine::morph::solver::{SolveContext, solve};
use crate::engine::morph::transition::Formedness;
use crate::engine::photos::provisioning::PhotoLibrary;
use crate::engine::vision::classifier::GestureState;

use super::rig::SceneRig;

#[derive(Component)]
pub struct PhotoPanel {
    pub index: usize,
}

/// Shared meshes for the backing card and the inset image plane, built lazily
/// on the first panel rebuild.
#[derive(Default)]
pub struct PanelMeshes {
    card: Option<Handle<Mesh>>,
    image: Option<Handle<Mesh>>,
}

/// Rebuild panel entities whenever the provisioned photo list changed. Each
/// panel is a white card with an inset textured plane, both double-sided.
pub fn sync_photo_panels(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut panel_meshes: Local<PanelMeshes>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<PhotoLibrary>,
    populations: Res<TreePopulations>,
    rig: Query<Entity, With<SceneRig>>,
    existing: Query<Entity, With<PhotoPanel>>,
) {
    if !library.dirty {
        return;
    }
    let Ok(rig) = rig.single() else {
        return;
    };
    library.dirty = false;

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let card_mesh = panel_meshes
        .card
        .get_or_insert_with(|| {
            meshes.add(Plane3d::new(Vec3::Z, PHOTO_CARD_SIZE * 0.5))
        })
        .clone();
    let image_mesh = panel_meshes
        .image
        .get_or_insert_with(|| {
            meshes.add(Plane3d::new(Vec3::Z, PHOTO_IMAGE_SIZE * 0.5))
        })
        .clone();

    let card_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (index, (entry, descriptor)) in
        library.entries.iter().zip(&populations.photos).enumerate()
    {
        let panel = commands
            .spawn((
                Mesh3d(card_mesh.clone()),
                MeshMaterial3d(card_material.clone()),
                Transform::from_translation(descriptor.chaos_position),
                PhotoPanel { index },
                ChildOf(rig),
            ))
            .id();
        commands.spawn((
            Mesh3d(image_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(entry.path.clone())),
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(PHOTO_IMAGE_INSET),
            ChildOf(panel),
        ));
    }
}

/// Drive panel transforms from the solver on the photo group's level.
pub fn update_photo_panel_transforms(
    time: Res<Time>,
    formedness: Res<Formedness>,
    gesture: Res<GestureState>,
    populations: Res<TreePopulations>,
    mut query: Query<(&PhotoPanel, &mut Transform)>,
) {
    let ctx = SolveContext {
        level: formedness.photos,
        formed_target: gesture.formed,
        elapsed: time.elapsed_secs(),
    };

    for (panel, mut transform) in &mut query {
        let Some(descriptor) = populations.photos.get(panel.index) else {
            continue;
        };
        let solved = solve(descriptor, panel.index, &ctx);
        transform.translation = solved.translation;
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            solved.rotation.x,
            solved.rotation.y,
            solved.rotation.z,
        );
    }
}
