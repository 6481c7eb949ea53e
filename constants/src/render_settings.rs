use bevy::prelude::*;

/// Initial camera placement, framing the whole tree
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 4.0, 18.0);

/// Smoothing factor easing the scene rig toward the pointing vector
pub const RIG_EASE_FACTOR: f32 = 0.05;

/// Radians of rig tilt at full pointer deflection
pub const RIG_TILT_RANGE: f32 = 0.4;

/// Continuous turntable yaw rate (radians per second)
pub const TURNTABLE_RATE: f32 = 0.12;

/// Foliage point colours: deep pine body shifted toward gold highlights
pub const FOLIAGE_BODY_RGB: [f32; 3] = [0.016, 0.224, 0.153];
pub const FOLIAGE_HIGHLIGHT_RGB: [f32; 3] = [0.831, 0.686, 0.216];

/// Trunk and ground plane colours
pub const TRUNK_RGB: [f32; 3] = [0.239, 0.169, 0.122];
pub const GROUND_RGB: [f32; 3] = [0.004, 0.039, 0.027];

/// Photo panel card dimensions (backing card and inset image plane)
pub const PHOTO_CARD_SIZE: Vec2 = Vec2::new(1.2, 1.4);
pub const PHOTO_IMAGE_SIZE: Vec2 = Vec2::new(1.0, 1.0);
pub const PHOTO_IMAGE_INSET: Vec3 = Vec3::new(0.0, 0.1, 0.01);
