use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset path of the photo manifest, relative to the asset root
pub const PHOTO_MANIFEST_PATH: &str = "photos/manifest.json";

/// Ordered list of provisioned photos as a Bevy asset. Mirrors the JSON
/// structure exactly; item identity is the index, so insertion or removal
/// reflows the angular layout deterministically.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct PhotoManifest {
    pub photos: Vec<PhotoEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    /// Image path relative to the asset root
    pub path: String,
}

impl PhotoManifest {
    /// Minimal manifest shape, logged when the real file is missing
    pub fn template() -> Self {
        Self {
            photos: vec![PhotoEntry {
                path: "photos/example.jpg".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let json = r#"{ "photos": [ { "path": "photos/a.png" }, { "path": "photos/b.jpg" } ] }"#;
        let manifest: PhotoManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.photos.len(), 2);
        assert_eq!(manifest.photos[0].path, "photos/a.png");

        let back = serde_json::to_string(&manifest).unwrap();
        let again: PhotoManifest = serde_json::from_str(&back).unwrap();
        assert_eq!(again.photos, manifest.photos);
    }
}
