//! The spark particle.
//!
//! Sparks live in canvas pixel space and age in whole frames:
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `position` | `Vec2` | Canvas pixel coordinate |
//! | `velocity` | `Vec2` | Pixels per frame |
//! | `age` | `u32` | Frames since spawn, starts at 0 |
//! | `lifetime` | `u32` | Frames until removal, always > 0 |
//! | `radius` | `f32` | Draw radius in pixels |
//! | `color` | `Vec3` | RGB (0.0-1.0) picked from the palette |
//!
//! `age` never exceeds `lifetime`; a spark with `age == lifetime` is expired
//! and gets pruned before the next draw.

use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    age: u32,
    lifetime: u32,
    pub radius: f32,
    pub color: Vec3,
}

impl Particle {
    /// Create a fresh spark with age 0.
    ///
    /// A zero `lifetime` is raised to one frame.
    pub fn new(position: Vec2, velocity: Vec2, lifetime: u32, radius: f32, color: Vec3) -> Self {
        Self {
            position,
            velocity,
            age: 0,
            lifetime: lifetime.max(1),
            radius,
            color,
        }
    }

    /// Frames elapsed since spawn.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Total frames this spark may live.
    #[inline]
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    /// Advance one frame: integrate, damp, age.
    #[inline]
    pub fn step(&mut self, damping: f32) {
        self.position += self.velocity;
        self.velocity *= damping;
        self.age = (self.age + 1).min(self.lifetime);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Fraction of life used, 0.0 at spawn and 1.0 at expiry.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.age as f32 / self.lifetime as f32
    }

    /// Draw opacity, fading linearly from 1.0 to 0.0 over the lifetime.
    #[inline]
    pub fn alpha(&self) -> f32 {
        1.0 - self.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark(lifetime: u32) -> Particle {
        Particle::new(Vec2::ZERO, Vec2::new(1.0, -2.0), lifetime, 2.0, Vec3::ONE)
    }

    #[test]
    fn test_new_starts_at_age_zero() {
        let p = spark(60);
        assert_eq!(p.age(), 0);
        assert_eq!(p.lifetime(), 60);
        assert_eq!(p.alpha(), 1.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn test_zero_lifetime_is_raised() {
        let p = spark(0);
        assert_eq!(p.lifetime(), 1);
        assert!(!p.is_expired());
    }

    #[test]
    fn test_step_integrates_then_damps() {
        let mut p = spark(60);
        p.step(0.5);
        assert_eq!(p.position, Vec2::new(1.0, -2.0));
        assert_eq!(p.velocity, Vec2::new(0.5, -1.0));
        assert_eq!(p.age(), 1);

        p.step(0.5);
        assert_eq!(p.position, Vec2::new(1.5, -3.0));
        assert_eq!(p.age(), 2);
    }

    #[test]
    fn test_alpha_fades_linearly() {
        let mut p = spark(4);
        p.step(1.0);
        assert!((p.alpha() - 0.75).abs() < 1e-6);
        p.step(1.0);
        assert!((p.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_age_saturates_at_lifetime() {
        let mut p = spark(2);
        for _ in 0..5 {
            p.step(0.98);
        }
        assert_eq!(p.age(), 2);
        assert!(p.is_expired());
        assert_eq!(p.alpha(), 0.0);
    }
}
