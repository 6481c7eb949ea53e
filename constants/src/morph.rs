/// Smoothing rate (per second) for the foliage particle cloud
pub const FOLIAGE_RATE: f32 = 1.5;

/// Smoothing rate (per second) for the rigid ornament groups
pub const ORNAMENT_RATE: f32 = 1.5;

/// Smoothing rate (per second) for photo panels; slower for a layered reveal
pub const PHOTO_RATE: f32 = 1.2;

/// Weight gain applied to the smoothed level before clamping.
/// Held equal to `WEIGHT_LAG` so heavier entities lag at every level yet
/// still land exactly on target at level 1.
pub const WEIGHT_GAIN: f32 = 0.15;

/// Weight lag subtracted from the smoothed level before clamping
pub const WEIGHT_LAG: f32 = 0.15;

/// A level within this distance of 0 or 1 counts as settled
pub const SETTLE_EPSILON: f32 = 1e-3;

/// Amplitude of the idle vertical bob applied to drifting ornaments
pub const IDLE_BOB_AMPLITUDE: f32 = 0.1;

/// Amplitude of the per-particle drift noise while foliage is dispersed
pub const FOLIAGE_JITTER_AMPLITUDE: f32 = 0.05;

/// Phase rates for the two foliage drift axes
pub const FOLIAGE_JITTER_RATE_X: f32 = 1.5;
pub const FOLIAGE_JITTER_RATE_Y: f32 = 1.2;

/// Amplitude of the idle vertical bob applied to drifting photo panels
pub const PHOTO_BOB_AMPLITUDE: f32 = 0.05;

/// Yaw oscillation amplitude (radians) for settled photo panels
pub const PHOTO_SWAY_AMPLITUDE: f32 = 0.1;

/// Yaw oscillation rate (per second) for settled photo panels
pub const PHOTO_SWAY_RATE: f32 = 0.5;
