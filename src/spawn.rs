//! Spark spawning.
//!
//! Pointer movement drops at most one spark per event, and only with the
//! configured probability, so a fast-moving pointer leaves a sparse trail
//! instead of a solid line. A click always throws a fixed-size burst.

use crate::config::{FieldConfig, SpawnProfile};
use crate::palette::Palette;
use crate::particle::Particle;
use crate::random::RandomSource;
use glam::Vec2;

/// Spawn one spark at `at` with values drawn from `profile`.
///
/// Draw order: x velocity, y velocity, radius, colour.
pub fn spawn_particle(
    profile: &SpawnProfile,
    at: Vec2,
    lifetime: u32,
    palette: &Palette,
    rng: &mut impl RandomSource,
) -> Particle {
    let velocity = Vec2::new(rng.range(&profile.velocity), rng.range(&profile.velocity));
    let radius = rng.range(&profile.radius);
    let color = palette.pick(rng);
    Particle::new(at, velocity, lifetime, radius, color)
}

/// Roll for a trail spark at `at`.
///
/// Consumes one draw for the roll, plus the spawn draws on success.
pub fn trail_spawn(config: &FieldConfig, at: Vec2, rng: &mut impl RandomSource) -> Option<Particle> {
    if !rng.chance(config.spawn_probability) {
        return None;
    }
    Some(spawn_particle(&config.trail, at, config.lifetime, &config.palette, rng))
}

/// Exactly `burst_count` burst sparks at `at`.
pub fn burst_spawn(config: &FieldConfig, at: Vec2, rng: &mut impl RandomSource) -> Vec<Particle> {
    (0..config.burst_count)
        .map(|_| spawn_particle(&config.burst, at, config.lifetime, &config.palette, rng))
        .collect()
}
