// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::morph::population::TreePopulations;
use crate::engine::morph::transition::{Formedness, advance_formedness};
use crate::engine::photos::manifest::PhotoManifest;
use crate::engine::photos::provisioning::{PhotoLibrary, start_photo_loading, sync_photo_manifest};
use crate::engine::scene::{
    foliage::{spawn_foliage, update_foliage_cloud},
    ornaments::{spawn_ornaments, update_ornament_transforms},
    photo_panels::{sync_photo_panels, update_photo_panel_transforms},
    rig::steer_scene_rig,
    stage::spawn_stage,
};
use crate::engine::systems::hud::{
    fps_text_update_system, formedness_text_update_system, spawn_hud,
};
use crate::engine::vision::classifier::{
    GestureSampleTimer, GestureState, sample_gesture_system,
};
use crate::engine::vision::frame::{CameraFeed, SyntheticFrameSource};

use crate::engine::core::window_config::create_window_config;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PhotoManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PhotoManifest>::new(&["json"]));

    // Hosts with a real capture backend overwrite this resource; the
    // synthetic source keeps the engine driveable without a camera.
    app.insert_resource(CameraFeed::new(Box::new(SyntheticFrameSource::default())));

    app.init_resource::<GestureState>()
        .init_resource::<GestureSampleTimer>()
        .init_resource::<Formedness>()
        .init_resource::<TreePopulations>()
        .init_resource::<PhotoLibrary>()
        .add_systems(
            Startup,
            (spawn_stage, spawn_foliage, spawn_ornaments, spawn_hud, start_photo_loading).chain(),
        )
        .add_systems(
            Update,
            (
                sample_gesture_system,
                advance_formedness,
                sync_photo_manifest,
                sync_photo_panels,
                update_foliage_cloud,
                update_ornament_transforms,
                update_photo_panel_transforms,
                steer_scene_rig,
                fps_text_update_system,
                formedness_text_update_system,
            )
                .chain(),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
