use bevy::prelude::*;
use constants::morph::{
    FOLIAGE_JITTER_AMPLITUDE, FOLIAGE_JITTER_RATE_X, FOLIAGE_JITTER_RATE_Y, IDLE_BOB_AMPLITUDE,
    PHOTO_BOB_AMPLITUDE, PHOTO_SWAY_AMPLITUDE, PHOTO_SWAY_RATE, WEIGHT_GAIN, WEIGHT_LAG,
};

use super::population::{EntityDescriptor, EntityKind};

/// Per-frame derived transform. Pure function output; recomputed every tick
/// and discarded after the scene systems consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTransform {
    pub translation: Vec3,
    /// Euler angles, applied XYZ
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Everything a solve needs beyond the descriptor itself. `formed_target` is
/// the raw boolean gesture target, deliberately not the smoothed level: the
/// idle/settled branch keys off it so in-flight entities calm down as soon as
/// the hand closes.
#[derive(Debug, Clone, Copy)]
pub struct SolveContext {
    pub level: f32,
    pub formed_target: bool,
    pub elapsed: f32,
}

/// Per-entity progress: the group level staggered by entity weight. Heavier
/// entities lag behind lighter ones, cascading the assembly instead of
/// snapping every instance at once.
pub fn progress(level: f32, weight: f32) -> f32 {
    let level = level.clamp(0.0, 1.0);
    (level * (1.0 + weight * WEIGHT_GAIN) - weight * WEIGHT_LAG).clamp(0.0, 1.0)
}

/// Base interpolated position, before any secondary motion.
pub fn base_translation(descriptor: &EntityDescriptor, level: f32) -> Vec3 {
    interpolate(descriptor, progress(level, descriptor.weight))
}

/// Full progress must land exactly on the target; lerp's extrapolating form
/// can drift an ulp at t = 1.
fn interpolate(descriptor: &EntityDescriptor, t: f32) -> Vec3 {
    if t >= 1.0 {
        descriptor.target_position
    } else {
        descriptor.chaos_position.lerp(descriptor.target_position, t)
    }
}

/// Compute one entity's transform for the current tick.
pub fn solve(descriptor: &EntityDescriptor, index: usize, ctx: &SolveContext) -> EntityTransform {
    let t = progress(ctx.level, descriptor.weight);
    let mut translation = base_translation(descriptor, ctx.level);

    let rotation = match descriptor.kind {
        EntityKind::Particle => {
            // Drift noise fades with progress rather than branching: the
            // cloud reads as one mass, not individually settling bodies.
            let fade = 1.0 - t;
            translation.x += (ctx.elapsed * FOLIAGE_JITTER_RATE_X + descriptor.chaos_position.y)
                .sin()
                * FOLIAGE_JITTER_AMPLITUDE
                * fade;
            translation.y += (ctx.elapsed * FOLIAGE_JITTER_RATE_Y + descriptor.chaos_position.x)
                .cos()
                * FOLIAGE_JITTER_AMPLITUDE
                * fade;
            Vec3::ZERO
        }
        EntityKind::Ball | EntityKind::Gift | EntityKind::Light => {
            if ctx.formed_target {
                Vec3::new(
                    descriptor.rotation_seed.x * (1.0 - t),
                    descriptor.rotation_seed.y,
                    descriptor.rotation_seed.z,
                )
            } else {
                translation.y += (ctx.elapsed + index as f32).sin() * IDLE_BOB_AMPLITUDE;
                Vec3::new(
                    descriptor.rotation_seed.x * (1.0 - t),
                    descriptor.rotation_seed.y + ctx.elapsed,
                    descriptor.rotation_seed.z,
                )
            }
        }
        EntityKind::Photo => {
            if ctx.formed_target {
                // Settled panels keep a slight seeded sway for liveliness.
                let sway = (ctx.elapsed * PHOTO_SWAY_RATE + index as f32).sin()
                    * PHOTO_SWAY_AMPLITUDE;
                Vec3::new(
                    descriptor.rotation_seed.x,
                    descriptor.rotation_seed.y + sway,
                    descriptor.rotation_seed.z,
                )
            } else {
                translation.y += (ctx.elapsed + index as f32).sin() * PHOTO_BOB_AMPLITUDE;
                Vec3::new(
                    descriptor.rotation_seed.x,
                    descriptor.rotation_seed.y + ctx.elapsed,
                    descriptor.rotation_seed.z,
                )
            }
        }
    };

    EntityTransform {
        translation,
        rotation,
        scale: Vec3::splat(descriptor.scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::morph::population::{EntityKind, TreePopulations};

    fn descriptor(weight: f32, kind: EntityKind) -> EntityDescriptor {
        EntityDescriptor {
            chaos_position: Vec3::new(8.0, -3.0, 5.0),
            target_position: Vec3::new(1.0, 2.0, -1.0),
            rotation_seed: Vec3::new(0.4, 1.3, 2.2),
            scale: 0.25,
            weight,
            palette_index: 0,
            kind,
        }
    }

    #[test]
    fn zero_level_rests_at_chaos_position() {
        let populations = TreePopulations::generate(3);
        for (i, desc) in populations.balls.iter().chain(&populations.foliage).enumerate() {
            assert_eq!(
                base_translation(desc, 0.0),
                desc.chaos_position,
                "entity {i} strayed from chaos at level 0"
            );
        }
    }

    #[test]
    fn full_level_with_zero_weight_lands_on_target() {
        let desc = descriptor(0.0, EntityKind::Ball);
        assert_eq!(base_translation(&desc, 1.0), desc.target_position);

        let populations = TreePopulations::generate(3);
        for desc in &populations.foliage {
            // Foliage carries zero weight, so it lands exactly.
            assert_eq!(base_translation(desc, 1.0), desc.target_position);
        }
    }

    #[test]
    fn full_level_lands_weighted_entities_too() {
        // k == j keeps progress(1, w) pinned at 1 for every legal weight.
        for weight in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(progress(1.0, weight), 1.0);
        }
    }

    #[test]
    fn heavier_entities_never_lead_lighter_ones() {
        let mut level = 0.0;
        for _ in 0..200 {
            level = crate::engine::morph::transition::advance(level, true, 0.016, 1.5);
            let mut previous = f32::INFINITY;
            for weight in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
                let p = progress(level, weight);
                assert!(
                    p <= previous + 1e-6,
                    "weight {weight} overtook a lighter entity at level {level}"
                );
                previous = p;
            }
        }
    }

    #[test]
    fn progress_clamps_out_of_range_levels() {
        assert_eq!(progress(-0.5, 0.3), 0.0);
        assert_eq!(progress(1.7, 0.3), 1.0);
    }

    #[test]
    fn idle_ornaments_bob_and_spin() {
        let desc = descriptor(0.5, EntityKind::Ball);
        let idle = SolveContext {
            level: 0.3,
            formed_target: false,
            elapsed: 2.0,
        };
        let settled = SolveContext {
            formed_target: true,
            ..idle
        };
        let drifting = solve(&desc, 4, &idle);
        let resting = solve(&desc, 4, &settled);
        assert_ne!(drifting.translation.y, resting.translation.y);
        assert_ne!(drifting.rotation.y, resting.rotation.y);
        assert_eq!(resting.rotation.y, desc.rotation_seed.y);
    }

    #[test]
    fn closing_the_hand_calms_entities_mid_flight() {
        // Same partial level: the branch follows the boolean target, so an
        // in-flight entity already rides the calm path once the fist closes.
        let desc = descriptor(0.5, EntityKind::Gift);
        let ctx = SolveContext {
            level: 0.5,
            formed_target: true,
            elapsed: 3.7,
        };
        let transform = solve(&desc, 9, &ctx);
        assert_eq!(transform.translation, base_translation(&desc, ctx.level));
        assert_eq!(transform.rotation.y, desc.rotation_seed.y);
    }

    #[test]
    fn settled_photos_keep_a_slight_sway() {
        let desc = descriptor(0.0, EntityKind::Photo);
        let ctx = SolveContext {
            level: 1.0,
            formed_target: true,
            elapsed: 1.1,
        };
        let transform = solve(&desc, 2, &ctx);
        assert_eq!(transform.translation, desc.target_position);
        let sway = transform.rotation.y - desc.rotation_seed.y;
        assert!(sway.abs() > 0.0 && sway.abs() <= PHOTO_SWAY_AMPLITUDE);
    }

    #[test]
    fn foliage_jitter_fades_out_at_full_progress() {
        let populations = TreePopulations::generate(5);
        let desc = &populations.foliage[17];
        let ctx = SolveContext {
            level: 1.0,
            formed_target: true,
            elapsed: 42.0,
        };
        assert_eq!(solve(desc, 17, &ctx).translation, desc.target_position);
    }

    #[test]
    fn scale_comes_straight_from_the_descriptor() {
        let desc = descriptor(0.2, EntityKind::Light);
        let ctx = SolveContext {
            level: 0.6,
            formed_target: true,
            elapsed: 0.0,
        };
        assert_eq!(solve(&desc, 0, &ctx).scale, Vec3::splat(desc.scale));
    }
}
