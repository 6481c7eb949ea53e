use bevy::prelude::*;
use constants::morph::{FOLIAGE_RATE, ORNAMENT_RATE, PHOTO_RATE, SETTLE_EPSILON};

use crate::engine::vision::classifier::GestureState;

/// Advance a formedness level one tick toward the boolean target.
///
/// One-pole low-pass filter rather than a fixed-duration tween: gesture input
/// is noisy and may reverse at any tick, and the filter is glitch-free under
/// reversal. Out-of-range inputs are clamped, never rejected.
pub fn advance(level: f32, target: bool, dt: f32, rate: f32) -> f32 {
    let target_level = if target { 1.0 } else { 0.0 };
    let level = level.clamp(0.0, 1.0);
    level + (target_level - level) * (dt * rate).min(1.0)
}

/// Convergence is asymptotic; a level this close to its target counts as
/// settled.
pub fn is_settled(level: f32, target: bool) -> bool {
    let target_level = if target { 1.0 } else { 0.0 };
    (level - target_level).abs() <= SETTLE_EPSILON
}

/// Smoothed formedness per visual group. Photo panels run slightly behind the
/// tree body for a layered reveal.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Formedness {
    pub foliage: f32,
    pub ornaments: f32,
    pub photos: f32,
}

impl Default for Formedness {
    // Matches the boot-time assembled gesture state.
    fn default() -> Self {
        Self {
            foliage: 1.0,
            ornaments: 1.0,
            photos: 1.0,
        }
    }
}

/// Advance every group toward the latest gesture target. Runs every render
/// tick, including ticks where no new classifier output arrived.
pub fn advance_formedness(
    time: Res<Time>,
    gesture: Res<GestureState>,
    mut formedness: ResMut<Formedness>,
) {
    let dt = time.delta_secs();
    let target = gesture.formed;
    formedness.foliage = advance(formedness.foliage, target, dt, FOLIAGE_RATE);
    formedness.ornaments = advance(formedness.ornaments, target, dt, ORNAMENT_RATE);
    formedness.photos = advance(formedness.photos, target, dt, PHOTO_RATE);
}
