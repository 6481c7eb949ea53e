pub mod core;
pub mod morph;
pub mod photos;
pub mod scene;
pub mod systems;
pub mod vision;
