use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::morph::population::TreePopulations;

use super::manifest::{PHOTO_MANIFEST_PATH, PhotoEntry, PhotoManifest};

/// Applied copy of the photo manifest plus panel bookkeeping. `dirty` tells
/// the scene layer to rebuild its panel entities.
#[derive(Resource, Default)]
pub struct PhotoLibrary {
    handle: Option<Handle<PhotoManifest>>,
    missing_logged: bool,
    pub entries: Vec<PhotoEntry>,
    pub dirty: bool,
}

pub fn start_photo_loading(mut library: ResMut<PhotoLibrary>, asset_server: Res<AssetServer>) {
    library.handle = Some(asset_server.load(PHOTO_MANIFEST_PATH));
}

/// Poll the manifest asset and fold changes into the photo population.
/// Covers first load and hot reloads alike; a missing manifest just means an
/// empty photo ring.
pub fn sync_photo_manifest(
    mut library: ResMut<PhotoLibrary>,
    mut populations: ResMut<TreePopulations>,
    manifests: Res<Assets<PhotoManifest>>,
    asset_server: Res<AssetServer>,
) {
    let Some(handle) = library.handle.clone() else {
        return;
    };

    if let Some(LoadState::Failed(_)) = asset_server.get_load_state(handle.id()) {
        if !library.missing_logged {
            library.missing_logged = true;
            let template =
                serde_json::to_string_pretty(&PhotoManifest::template()).unwrap_or_default();
            info!("no photo manifest at {PHOTO_MANIFEST_PATH}; expected shape:\n{template}");
        }
        return;
    }

    let Some(manifest) = manifests.get(&handle) else {
        return;
    };
    if manifest.photos == library.entries {
        return;
    }

    library.entries = manifest.photos.clone();
    populations.regenerate_photos(library.entries.len());
    library.dirty = true;
    info!("photo manifest applied: {} panels", library.entries.len());
}
