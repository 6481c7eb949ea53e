use bevy::prelude::*;
use constants::vision::{
    BRIGHTNESS_THRESHOLD, MIN_BRIGHT_PIXELS, OPEN_AREA_THRESHOLD, SAMPLE_PERIOD_SECS,
};
use super::frame::{CameraFeed, PixelSample, VisionError};

/// Raw classifier output for one sample. Coordinates are normalised to [0, 1]
/// in sample space; centring to [-0.5, 0.5] happens when the reading is
/// applied to `GestureState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureReading {
    pub formed: bool,
    pub point_x: f32,
    pub point_y: f32,
}

/// Latest gesture interpretation, shared with the scheduler and the scene
/// rig. Written only by `sample_gesture_system`; holds its previous value
/// whenever a sample yields no update.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GestureState {
    pub formed: bool,
    /// Pointing vector, each axis in [-0.5, 0.5]
    pub point: Vec2,
}

impl Default for GestureState {
    // The scene boots assembled; the first classified sample takes over.
    fn default() -> Self {
        Self {
            formed: true,
            point: Vec2::ZERO,
        }
    }
}

impl GestureState {
    pub fn apply(&mut self, reading: GestureReading) {
        self.formed = reading.formed;
        self.point = Vec2::new(reading.point_x - 0.5, reading.point_y - 0.5);
    }
}

/// Repeating 100 ms timer decoupling classification from the render tick
#[derive(Resource)]
pub struct GestureSampleTimer(pub Timer);

impl Default for GestureSampleTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(SAMPLE_PERIOD_SECS, TimerMode::Repeating))
    }
}

/// Classify one frame into a gesture reading.
///
/// Scans every pixel, accumulating the centroid and bounding box of the
/// bright-pixel mass (mean of the three colour channels above the brightness
/// threshold). Fewer than `MIN_BRIGHT_PIXELS` qualifying pixels means the
/// sample carries no signal and the caller must retain its prior state.
///
/// The horizontal axis is mirrored so the pointer follows natural hand motion
/// from the user's perspective, and the formed test is intentionally
/// inverted: a tight bright cluster (closed fist) assembles the scene, a wide
/// spread (open palm) scatters it.
pub fn classify(sample: &PixelSample) -> Option<GestureReading> {
    let width = sample.width();
    let height = sample.height();

    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    let mut count = 0usize;
    let mut min_x = width;
    let mut max_x = 0usize;
    let mut min_y = height;
    let mut max_y = 0usize;

    for (i, px) in sample.data().chunks_exact(4).enumerate() {
        let luminance = (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
        if luminance > BRIGHTNESS_THRESHOLD {
            let x = i % width;
            let y = i / width;
            sum_x += x as u64;
            sum_y += y as u64;
            count += 1;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if count < MIN_BRIGHT_PIXELS {
        return None;
    }

    let point_x = 1.0 - (sum_x as f32 / count as f32) / width as f32;
    let point_y = (sum_y as f32 / count as f32) / height as f32;
    let area = (max_x - min_x) as f32 * (max_y - min_y) as f32;

    Some(GestureReading {
        formed: area <= OPEN_AREA_THRESHOLD,
        point_x,
        point_y,
    })
}

/// Pull one frame from the camera boundary every sample tick and fold the
/// classification into `GestureState`. Every failure path resolves to "hold
/// the last good state and keep rendering"; a dead camera pins the target to
/// dispersed instead.
pub fn sample_gesture_system(
    time: Res<Time>,
    mut timer: ResMut<GestureSampleTimer>,
    mut feed: ResMut<CameraFeed>,
    mut gesture: ResMut<GestureState>,
) {
    // Late ticks collapse into one sample; there is no backlog to drain.
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    match feed.source.acquire() {
        Ok(sample) => {
            if let Some(reading) = classify(&sample) {
                gesture.apply(reading);
            }
        }
        Err(VisionError::InvalidSample { expected, actual }) => {
            warn!("skipping malformed sample: expected {expected} bytes, got {actual}");
        }
        Err(VisionError::CameraUnavailable(reason)) => {
            warn!("camera unavailable ({reason}); holding dispersed state");
            gesture.formed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::vision::{SAMPLE_CHANNELS, SAMPLE_HEIGHT, SAMPLE_WIDTH};

    fn dark_frame() -> Vec<u8> {
        let mut data = vec![20u8; SAMPLE_WIDTH * SAMPLE_HEIGHT * SAMPLE_CHANNELS];
        for px in data.chunks_exact_mut(SAMPLE_CHANNELS) {
            px[3] = 255;
        }
        data
    }

    fn light_pixel(data: &mut [u8], x: usize, y: usize) {
        let i = (y * SAMPLE_WIDTH + x) * SAMPLE_CHANNELS;
        data[i] = 255;
        data[i + 1] = 255;
        data[i + 2] = 255;
    }

    fn sample_from(data: Vec<u8>) -> PixelSample {
        PixelSample::new(SAMPLE_WIDTH, SAMPLE_HEIGHT, data).unwrap()
    }

    /// Fill a rectangle of bright pixels centred at (cx, cy)
    fn bright_rect(cx: usize, cy: usize, w: usize, h: usize) -> PixelSample {
        let mut data = dark_frame();
        for y in cy - h / 2..cy + h / 2 {
            for x in cx - w / 2..cx + w / 2 {
                light_pixel(&mut data, x, y);
            }
        }
        sample_from(data)
    }

    #[test]
    fn too_few_bright_pixels_yield_no_update() {
        let mut data = dark_frame();
        for x in 0..MIN_BRIGHT_PIXELS - 1 {
            light_pixel(&mut data, x, 10);
        }
        // Below the floor the classifier stays silent, so the caller's prior
        // state (here: the boot default) survives untouched.
        assert!(classify(&sample_from(data)).is_none());

        let gesture = GestureState::default();
        assert!(gesture.formed);
        assert_eq!(gesture.point, Vec2::ZERO);
    }

    #[test]
    fn tight_cluster_reads_as_formed() {
        // 20x20 box: 400 bright pixels, bounding area 361 px² << threshold
        let reading = classify(&bright_rect(80, 60, 20, 20)).unwrap();
        assert!(reading.formed);
    }

    #[test]
    fn wide_spread_reads_as_dispersed() {
        // 80x60 box: bounding area 4661 px² >> threshold
        let reading = classify(&bright_rect(80, 60, 80, 60)).unwrap();
        assert!(!reading.formed);
    }

    #[test]
    fn pointer_axes_stay_normalised() {
        for (cx, cy) in [(20, 20), (80, 60), (140, 100)] {
            let reading = classify(&bright_rect(cx, cy, 16, 16)).unwrap();
            assert!((0.0..=1.0).contains(&reading.point_x));
            assert!((0.0..=1.0).contains(&reading.point_y));
        }
    }

    #[test]
    fn pointer_is_horizontally_mirrored() {
        let left = classify(&bright_rect(30, 60, 16, 16)).unwrap();
        let right = classify(&bright_rect(130, 60, 16, 16)).unwrap();
        // A blob on the sample's left lands on the pointer's right.
        assert!(left.point_x > 0.5);
        assert!(right.point_x < 0.5);
        assert!((left.point_y - right.point_y).abs() < 1e-3);
    }

    #[test]
    fn applying_a_reading_centres_the_pointer() {
        let mut gesture = GestureState::default();
        gesture.apply(GestureReading {
            formed: false,
            point_x: 1.0,
            point_y: 0.0,
        });
        assert_eq!(gesture.point, Vec2::new(0.5, -0.5));
        assert!(!gesture.formed);
    }

    mod sampling {
        use super::*;
        use crate::engine::vision::frame::FrameSource;
        use bevy::ecs::system::RunSystemOnce;

        struct DeadCamera;

        impl FrameSource for DeadCamera {
            fn acquire(&mut self) -> Result<PixelSample, VisionError> {
                Err(VisionError::CameraUnavailable("no device".to_string()))
            }
        }

        struct TruncatedCamera;

        impl FrameSource for TruncatedCamera {
            fn acquire(&mut self) -> Result<PixelSample, VisionError> {
                PixelSample::new(SAMPLE_WIDTH, SAMPLE_HEIGHT, vec![0u8; 7])
            }
        }

        fn sampling_world(source: Box<dyn FrameSource>) -> World {
            let mut world = World::new();
            world.insert_resource(Time::<()>::default());
            world.insert_resource(CameraFeed::new(source));
            world.init_resource::<GestureState>();
            // Zero-duration timer fires on every tick regardless of delta.
            world.insert_resource(GestureSampleTimer(Timer::from_seconds(
                0.0,
                TimerMode::Repeating,
            )));
            world
        }

        #[test]
        fn dead_camera_degrades_to_dispersed() {
            let mut world = sampling_world(Box::new(DeadCamera));
            world.run_system_once(sample_gesture_system).unwrap();
            let gesture = world.resource::<GestureState>();
            assert!(!gesture.formed);
        }

        #[test]
        fn malformed_sample_skips_the_tick() {
            let mut world = sampling_world(Box::new(TruncatedCamera));
            world.run_system_once(sample_gesture_system).unwrap();
            let gesture = world.resource::<GestureState>();
            // Skip, not reset: the boot default survives.
            assert!(gesture.formed);
            assert_eq!(gesture.point, Vec2::ZERO);
        }
    }
}
