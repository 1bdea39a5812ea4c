//! Tuning parameters for the particle field.
//!
//! All of these are presentation constants. The defaults give a sparse,
//! short-lived trail with a brighter, wider burst on click.
//!
//! # Example
//!
//! ```ignore
//! let config = FieldConfig::new()
//!     .with_spawn_probability(0.5)
//!     .with_lifetime(90)
//!     .with_burst_count(16)
//!     .with_palette(Palette::Ember);
//! config.validate()?;
//! ```
//!
//! Configs also round-trip through JSON; fields missing from a file take
//! their defaults:
//!
//! ```json
//! { "spawn_probability": 0.5, "palette": "ember" }
//! ```

use crate::error::ConfigError;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Velocity and radius ranges for one kind of spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Per-axis velocity range in pixels per frame.
    pub velocity: Range<f32>,
    /// Draw radius range in pixels.
    pub radius: Range<f32>,
}

impl SpawnProfile {
    /// Profile for sparks dropped by pointer movement.
    pub fn trail() -> Self {
        Self {
            velocity: -1.0..1.0,
            radius: 1.0..4.0,
        }
    }

    /// Profile for sparks thrown by a click. Faster and larger than the trail.
    pub fn burst() -> Self {
        Self {
            velocity: -4.0..4.0,
            radius: 2.0..6.0,
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check_range(field, "velocity", &self.velocity)?;
        check_range(field, "radius", &self.radius)?;
        if self.radius.start < 0.0 {
            return Err(ConfigError::invalid(field, "radius must not be negative"));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, what: &str, range: &Range<f32>) -> Result<(), ConfigError> {
    if !range.start.is_finite() || !range.end.is_finite() {
        return Err(ConfigError::invalid(field, format!("{what} range must be finite")));
    }
    if range.start > range.end {
        return Err(ConfigError::invalid(
            field,
            format!("{what} range {}..{} is reversed", range.start, range.end),
        ));
    }
    Ok(())
}

/// Field configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Chance that one pointer-move event spawns a spark.
    pub spawn_probability: f32,
    /// Frames a spark lives.
    pub lifetime: u32,
    /// Per-frame velocity multiplier, below 1.0.
    pub damping: f32,
    /// Ranges for move-spawned sparks.
    pub trail: SpawnProfile,
    /// Sparks spawned per click.
    pub burst_count: u32,
    /// Ranges for click-spawned sparks.
    pub burst: SpawnProfile,
    /// Soft glow radius in pixels drawn around every spark.
    pub glow: f32,
    pub palette: Palette,
    /// Optional hard cap on live sparks. The oldest go first when exceeded.
    pub max_particles: Option<usize>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spawn_probability: 0.3,
            lifetime: 60,
            damping: 0.98,
            trail: SpawnProfile::trail(),
            burst_count: 10,
            burst: SpawnProfile::burst(),
            glow: 10.0,
            palette: Palette::default(),
            max_particles: None,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spawn_probability(mut self, p: f32) -> Self {
        self.spawn_probability = p;
        self
    }

    pub fn with_lifetime(mut self, frames: u32) -> Self {
        self.lifetime = frames;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_trail(mut self, profile: SpawnProfile) -> Self {
        self.trail = profile;
        self
    }

    pub fn with_burst_count(mut self, count: u32) -> Self {
        self.burst_count = count;
        self
    }

    pub fn with_burst(mut self, profile: SpawnProfile) -> Self {
        self.burst = profile;
        self
    }

    pub fn with_glow(mut self, glow: f32) -> Self {
        self.glow = glow;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = Some(max);
        self
    }

    /// Check every parameter is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::invalid(
                "spawn_probability",
                format!("{} is outside 0.0..=1.0", self.spawn_probability),
            ));
        }
        if self.lifetime == 0 {
            return Err(ConfigError::invalid("lifetime", "must be at least one frame"));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(ConfigError::invalid(
                "damping",
                format!("{} is outside 0.0..1.0", self.damping),
            ));
        }
        self.trail.validate("trail")?;
        self.burst.validate("burst")?;
        if !self.glow.is_finite() || self.glow < 0.0 {
            return Err(ConfigError::invalid("glow", "must be a non-negative number"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
