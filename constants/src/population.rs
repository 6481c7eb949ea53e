/// Default seed for population generation when the host supplies none
pub const DEFAULT_POPULATION_SEED: u64 = 0x7265_6557_7472_6565;

/// Foliage particles in the cloud
pub const FOLIAGE_COUNT: usize = 12_000;

/// Ornament instance counts per kind
pub const BALL_COUNT: usize = 180;
pub const GIFT_COUNT: usize = 70;
pub const LIGHT_COUNT: usize = 350;

/// Chaos shell radii for the foliage cloud
pub const FOLIAGE_SHELL_MIN_RADIUS: f32 = 10.0;
pub const FOLIAGE_SHELL_MAX_RADIUS: f32 = 15.0;

/// Cone silhouette for the assembled foliage: height span and taper
pub const FOLIAGE_CONE_HEIGHT: f32 = 12.0;
pub const FOLIAGE_CONE_TAPER: f32 = 0.45;
pub const FOLIAGE_RADIAL_SPREAD: f32 = 0.5;

/// Per-particle point size span
pub const FOLIAGE_SIZE_MIN: f32 = 0.05;
pub const FOLIAGE_SIZE_MAX: f32 = 0.20;

/// Cone silhouette for ornament hanging positions
pub const ORNAMENT_CONE_HEIGHT: f32 = 11.5;
pub const ORNAMENT_CONE_RIM: f32 = 12.5;
pub const ORNAMENT_CONE_TAPER: f32 = 0.42;

/// Power-law exponent biasing ornament heights toward the base
pub const HEIGHT_BIAS_EXPONENT: f32 = 2.2;

/// Side length of the cube ornaments scatter into while dispersed
pub const ORNAMENT_CHAOS_EXTENT: f32 = 40.0;

/// Side length of the cube photo panels scatter into while dispersed
pub const PHOTO_CHAOS_EXTENT: f32 = 50.0;

/// Photo panel placement band on the assembled tree
pub const PHOTO_MIN_HEIGHT: f32 = 1.5;
pub const PHOTO_HEIGHT_SPAN: f32 = 8.5;
pub const PHOTO_MIN_RADIUS: f32 = 3.5;
pub const PHOTO_RADIUS_SPAN: f32 = 2.5;

/// Vertical offset centering the cone about the origin
pub const TREE_BASE_OFFSET: f32 = -6.0;

/// Uniform scales per ornament kind
pub const BALL_SCALE: f32 = 0.22;
pub const GIFT_SCALE: f32 = 0.35;
pub const LIGHT_SCALE: f32 = 0.04;

/// Per-kind weight bands. Heavier kinds settle later; the bands keep the lag
/// ordering lights → balls → gifts strict while staying inside [0, 1].
pub const LIGHT_WEIGHT_RANGE: (f32, f32) = (0.0, 0.25);
pub const BALL_WEIGHT_RANGE: (f32, f32) = (0.3, 0.6);
pub const GIFT_WEIGHT_RANGE: (f32, f32) = (0.7, 1.0);
