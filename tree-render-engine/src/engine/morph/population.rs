use bevy::prelude::*;
use constants::population::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0001_0000_01b3;

/// Which population an entity belongs to, selecting its interpolation and
/// secondary-motion rules in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Particle,
    Ball,
    Gift,
    Light,
    Photo,
}

/// Static per-entity data, generated once and immutable for the lifetime of
/// its population. The solver reads these every tick; nothing mutates them.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    pub chaos_position: Vec3,
    pub target_position: Vec3,
    pub rotation_seed: Vec3,
    pub scale: f32,
    pub weight: f32,
    pub palette_index: u8,
    pub kind: EntityKind,
}

/// Contiguous descriptor arrays for every population, plus the seed that
/// built them. One flat array per population keeps the per-tick solve a tight
/// batch loop instead of per-object dispatch.
#[derive(Resource)]
pub struct TreePopulations {
    pub foliage: Vec<EntityDescriptor>,
    pub balls: Vec<EntityDescriptor>,
    pub gifts: Vec<EntityDescriptor>,
    pub lights: Vec<EntityDescriptor>,
    pub photos: Vec<EntityDescriptor>,
    seed: u64,
}

impl TreePopulations {
    pub fn generate(seed: u64) -> Self {
        Self {
            foliage: generate_foliage(&mut stream_rng(seed, 0)),
            balls: generate_ornaments(&mut stream_rng(seed, 1), BALL_COUNT, EntityKind::Ball),
            gifts: generate_ornaments(&mut stream_rng(seed, 2), GIFT_COUNT, EntityKind::Gift),
            lights: generate_ornaments(&mut stream_rng(seed, 3), LIGHT_COUNT, EntityKind::Light),
            photos: Vec::new(),
            seed,
        }
    }

    /// Rebuild the photo panel population for a new image count. Panel slots
    /// are keyed by (seed, index), so unrelated populations are untouched and
    /// a panel keeps its height band as long as its index survives.
    pub fn regenerate_photos(&mut self, count: usize) {
        self.photos = generate_photo_panels(self.seed, count);
    }
}

impl Default for TreePopulations {
    fn default() -> Self {
        Self::generate(DEFAULT_POPULATION_SEED)
    }
}

/// Derive an independent RNG stream per population from the master seed, so
/// regenerating one population can never shift another's draws.
fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix_seed(seed, stream))
}

fn mix_seed(seed: u64, stream: u64) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in seed.to_le_bytes().into_iter().chain(stream.to_le_bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Foliage cloud: chaos on a spherical shell, target inside the tree cone.
pub fn generate_foliage(rng: &mut ChaCha8Rng) -> Vec<EntityDescriptor> {
    (0..FOLIAGE_COUNT)
        .map(|_| {
            // Uniform-on-sphere angles: cos(phi) uniform in [-1, 1].
            let radius = rng.gen_range(FOLIAGE_SHELL_MIN_RADIUS..FOLIAGE_SHELL_MAX_RADIUS);
            let theta = rng.gen_range(0.0..TAU);
            let cos_phi: f32 = rng.gen_range(-1.0..1.0);
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
            let chaos_position = Vec3::new(
                radius * sin_phi * theta.cos(),
                radius * sin_phi * theta.sin(),
                radius * cos_phi,
            );

            let height = rng.gen_range(0.0..FOLIAGE_CONE_HEIGHT);
            let cone_radius = (FOLIAGE_CONE_HEIGHT - height) * FOLIAGE_CONE_TAPER;
            let angle = rng.gen_range(0.0..TAU);
            let spread = rng.gen_range(-0.5..0.5) * FOLIAGE_RADIAL_SPREAD;
            let target_position = Vec3::new(
                (cone_radius + spread) * angle.cos(),
                height + TREE_BASE_OFFSET,
                (cone_radius + spread) * angle.sin(),
            );

            EntityDescriptor {
                chaos_position,
                target_position,
                rotation_seed: Vec3::ZERO,
                scale: rng.gen_range(FOLIAGE_SIZE_MIN..FOLIAGE_SIZE_MAX),
                weight: 0.0,
                palette_index: 0,
                kind: EntityKind::Particle,
            }
        })
        .collect()
}

/// Rigid ornament instances: chaos in a large cube, target hung on the cone
/// with a power-law height bias toward the base.
pub fn generate_ornaments(
    rng: &mut ChaCha8Rng,
    count: usize,
    kind: EntityKind,
) -> Vec<EntityDescriptor> {
    let (weight_min, weight_max) = match kind {
        EntityKind::Light => LIGHT_WEIGHT_RANGE,
        EntityKind::Ball => BALL_WEIGHT_RANGE,
        EntityKind::Gift => GIFT_WEIGHT_RANGE,
        other => unreachable!("not an ornament kind: {other:?}"),
    };
    let scale = match kind {
        EntityKind::Light => LIGHT_SCALE,
        EntityKind::Ball => BALL_SCALE,
        EntityKind::Gift => GIFT_SCALE,
        _ => unreachable!(),
    };

    (0..count)
        .map(|_| {
            let chaos_position = Vec3::new(
                rng.gen_range(-0.5..0.5) * ORNAMENT_CHAOS_EXTENT,
                rng.gen_range(-0.5..0.5) * ORNAMENT_CHAOS_EXTENT,
                rng.gen_range(-0.5..0.5) * ORNAMENT_CHAOS_EXTENT,
            );

            let height_base: f32 = rng.gen_range(0.0..1.0f32).powf(HEIGHT_BIAS_EXPONENT);
            let height = height_base * ORNAMENT_CONE_HEIGHT;
            let cone_radius = (ORNAMENT_CONE_RIM - height) * ORNAMENT_CONE_TAPER;
            let angle = rng.gen_range(0.0..TAU);
            let target_position = Vec3::new(
                cone_radius * angle.cos(),
                height + TREE_BASE_OFFSET,
                cone_radius * angle.sin(),
            );

            let palette_index = if kind == EntityKind::Light {
                0
            } else {
                rng.gen_range(0..constants::palette::ORNAMENT_PALETTE.len()) as u8
            };

            EntityDescriptor {
                chaos_position,
                target_position,
                rotation_seed: Vec3::new(
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                ),
                scale,
                weight: rng.gen_range(weight_min..weight_max),
                palette_index,
                kind,
            }
        })
        .collect()
}

/// Photo panels: evenly slotted around the cone by index, facing outward.
/// Each panel draws from its own (seed, index) stream.
pub fn generate_photo_panels(seed: u64, count: usize) -> Vec<EntityDescriptor> {
    (0..count)
        .map(|index| {
            let mut rng = stream_rng(seed, 0x5050_0000 + index as u64);
            let angle = index as f32 / count as f32 * TAU;
            let height = PHOTO_MIN_HEIGHT + rng.gen_range(0.0..1.0) * PHOTO_HEIGHT_SPAN;
            let radius = PHOTO_MIN_RADIUS + rng.gen_range(0.0..1.0) * PHOTO_RADIUS_SPAN;

            EntityDescriptor {
                chaos_position: Vec3::new(
                    rng.gen_range(-0.5..0.5) * PHOTO_CHAOS_EXTENT,
                    rng.gen_range(-0.5..0.5) * PHOTO_CHAOS_EXTENT,
                    rng.gen_range(-0.5..0.5) * PHOTO_CHAOS_EXTENT,
                ),
                target_position: Vec3::new(
                    radius * angle.cos(),
                    height + TREE_BASE_OFFSET,
                    radius * angle.sin(),
                ),
                rotation_seed: Vec3::new(0.0, -angle + FRAC_PI_2, 0.0),
                scale: 1.0,
                weight: 0.0,
                palette_index: 0,
                kind: EntityKind::Photo,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3Swizzles;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = TreePopulations::generate(42);
        let b = TreePopulations::generate(42);
        assert_eq!(a.foliage.len(), FOLIAGE_COUNT);
        for (x, y) in a.foliage.iter().zip(&b.foliage) {
            assert_eq!(x.chaos_position, y.chaos_position);
            assert_eq!(x.target_position, y.target_position);
        }
        for (x, y) in a.balls.iter().zip(&b.balls) {
            assert_eq!(x.target_position, y.target_position);
            assert_eq!(x.weight, y.weight);
        }
    }

    #[test]
    fn foliage_chaos_lies_on_the_shell() {
        let foliage = generate_foliage(&mut stream_rng(1, 0));
        for desc in &foliage {
            let r = desc.chaos_position.length();
            assert!(
                (FOLIAGE_SHELL_MIN_RADIUS - 1e-3..FOLIAGE_SHELL_MAX_RADIUS + 1e-3).contains(&r)
            );
        }
    }

    #[test]
    fn foliage_targets_fit_the_cone() {
        let foliage = generate_foliage(&mut stream_rng(1, 0));
        for desc in &foliage {
            let height = desc.target_position.y - TREE_BASE_OFFSET;
            assert!((0.0..FOLIAGE_CONE_HEIGHT).contains(&height));
            let radial = desc.target_position.xz().length();
            let max_radius =
                (FOLIAGE_CONE_HEIGHT - height) * FOLIAGE_CONE_TAPER + FOLIAGE_RADIAL_SPREAD;
            assert!(radial <= max_radius + 1e-3);
        }
    }

    #[test]
    fn ornament_heights_bias_toward_the_base() {
        let balls = generate_ornaments(&mut stream_rng(1, 1), 2000, EntityKind::Ball);
        let mean_height: f32 = balls
            .iter()
            .map(|d| d.target_position.y - TREE_BASE_OFFSET)
            .sum::<f32>()
            / balls.len() as f32;
        // Uniform sampling would average half the cone height; the power law
        // pulls the mean well below that.
        assert!(mean_height < ORNAMENT_CONE_HEIGHT * 0.4);
    }

    #[test]
    fn ornament_weights_stay_in_kind_bands() {
        let populations = TreePopulations::generate(9);
        for d in &populations.lights {
            assert!((LIGHT_WEIGHT_RANGE.0..LIGHT_WEIGHT_RANGE.1).contains(&d.weight));
        }
        for d in &populations.balls {
            assert!((BALL_WEIGHT_RANGE.0..BALL_WEIGHT_RANGE.1).contains(&d.weight));
        }
        for d in &populations.gifts {
            assert!((GIFT_WEIGHT_RANGE.0..GIFT_WEIGHT_RANGE.1).contains(&d.weight));
        }
    }

    #[test]
    fn photo_slots_follow_index_over_count() {
        let panels = generate_photo_panels(7, 5);
        for (i, desc) in panels.iter().enumerate() {
            let angle = i as f32 / 5.0 * TAU;
            let radial = desc.target_position.xz().length();
            assert!((desc.target_position.x - radial * angle.cos()).abs() < 1e-3);
            assert!((desc.target_position.z - radial * angle.sin()).abs() < 1e-3);
            assert_eq!(desc.rotation_seed.y, -angle + FRAC_PI_2);
        }
    }

    #[test]
    fn photo_regeneration_leaves_other_populations_untouched() {
        let mut populations = TreePopulations::generate(11);
        populations.regenerate_photos(3);
        let foliage_before: Vec<Vec3> =
            populations.foliage.iter().map(|d| d.chaos_position).collect();
        let balls_before: Vec<Vec3> =
            populations.balls.iter().map(|d| d.target_position).collect();

        populations.regenerate_photos(5);
        assert_eq!(populations.photos.len(), 5);
        for (before, after) in foliage_before.iter().zip(&populations.foliage) {
            assert_eq!(*before, after.chaos_position);
        }
        for (before, after) in balls_before.iter().zip(&populations.balls) {
            assert_eq!(*before, after.target_position);
        }
    }

    #[test]
    fn surviving_photo_indices_keep_their_band() {
        let three = generate_photo_panels(13, 3);
        let five = generate_photo_panels(13, 5);
        for (a, b) in three.iter().zip(&five) {
            // Height and radius come from the per-index stream, not from N.
            assert!((a.target_position.y - b.target_position.y).abs() < 1e-5);
            assert_eq!(a.chaos_position, b.chaos_position);
        }
    }
}
