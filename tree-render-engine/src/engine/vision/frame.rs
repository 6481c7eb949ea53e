use bevy::prelude::*;
use constants::vision::{SAMPLE_CHANNELS, SAMPLE_HEIGHT, SAMPLE_WIDTH};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Failure modes at the camera boundary. Nothing here is fatal: the sampling
/// system absorbs every variant and keeps the frame loop running.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("invalid sample: expected {expected} bytes, got {actual}")]
    InvalidSample { expected: usize, actual: usize },
}

/// One downsampled camera frame: tightly packed RGBA, row-major, fixed size.
/// Read-only to the classifier and discarded after classification.
#[derive(Debug)]
pub struct PixelSample {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelSample {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, VisionError> {
        let expected = width * height * SAMPLE_CHANNELS;
        if data.len() != expected {
            return Err(VisionError::InvalidSample {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Narrow boundary to the camera collaborator. Hosts install their capture
/// backend here; acquisition failure degrades rather than propagating.
pub trait FrameSource: Send + Sync {
    fn acquire(&mut self) -> Result<PixelSample, VisionError>;
}

#[derive(Resource)]
pub struct CameraFeed {
    pub source: Box<dyn FrameSource>,
}

impl CameraFeed {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        Self { source }
    }
}

/// Deterministic stand-in for a real camera: renders a bright hand-like blob
/// over a dark background, alternating between a tight fist and a spread palm
/// while the centroid drifts in a slow circle. Doubles as the no-camera
/// fallback and as the fixture generator for classifier tests.
pub struct SyntheticFrameSource {
    rng: ChaCha8Rng,
    frame: u64,
}

impl SyntheticFrameSource {
    /// Frames per gesture phase (fist vs palm) at the 100 ms sample period
    const PHASE_FRAMES: u64 = 40;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            frame: 0,
        }
    }

    fn render(&mut self, fist: bool, center_x: f32, center_y: f32) -> PixelSample {
        let (half_w, half_h) = if fist { (12.0, 12.0) } else { (34.0, 26.0) };
        let mut data = vec![0u8; SAMPLE_WIDTH * SAMPLE_HEIGHT * SAMPLE_CHANNELS];
        for y in 0..SAMPLE_HEIGHT {
            for x in 0..SAMPLE_WIDTH {
                let dx = (x as f32 - center_x) / half_w;
                let dy = (y as f32 - center_y) / half_h;
                let i = (y * SAMPLE_WIDTH + x) * SAMPLE_CHANNELS;
                let value = if dx * dx + dy * dy <= 1.0 {
                    230 + self.rng.gen_range(0..20)
                } else {
                    self.rng.gen_range(10..40)
                };
                data[i] = value;
                data[i + 1] = value;
                data[i + 2] = value;
                data[i + 3] = 255;
            }
        }
        // Built to exact size above; bypasses the boundary validation.
        PixelSample {
            width: SAMPLE_WIDTH,
            height: SAMPLE_HEIGHT,
            data,
        }
    }
}

impl Default for SyntheticFrameSource {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameSource for SyntheticFrameSource {
    fn acquire(&mut self) -> Result<PixelSample, VisionError> {
        let fist = (self.frame / Self::PHASE_FRAMES) % 2 == 0;
        let drift = self.frame as f32 * 0.02;
        let center_x = SAMPLE_WIDTH as f32 * 0.5 + drift.cos() * 30.0;
        let center_y = SAMPLE_HEIGHT as f32 * 0.5 + drift.sin() * 20.0;
        self.frame += 1;
        Ok(self.render(fist, center_x, center_y))
    }
}
