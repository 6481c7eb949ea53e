/// Width of the downsampled camera frame the classifier scans
pub const SAMPLE_WIDTH: usize = 160;

/// Height of the downsampled camera frame the classifier scans
pub const SAMPLE_HEIGHT: usize = 120;

/// Channels per pixel in a raw frame (RGBA)
pub const SAMPLE_CHANNELS: usize = 4;

/// Luminance above which a pixel counts toward the bright-pixel mass.
/// Empirically tuned against indoor webcam footage; no physical derivation.
pub const BRIGHTNESS_THRESHOLD: f32 = 185.0;

/// Bounding-box area (px²) separating an open palm from a closed fist.
/// Empirically tuned alongside `BRIGHTNESS_THRESHOLD`.
pub const OPEN_AREA_THRESHOLD: f32 = 1800.0;

/// Minimum bright pixels before a sample produces any gesture update
pub const MIN_BRIGHT_PIXELS: usize = 50;

/// Seconds between classifier samples, decoupled from the render tick
pub const SAMPLE_PERIOD_SECS: f32 = 0.1;
