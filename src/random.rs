//! Random sources for spawning.
//!
//! Spawning draws every random value through the [`RandomSource`] trait so
//! the field can run on real entropy in the window and on a fixed seed or a
//! scripted sequence in tests.
//!
//! ```ignore
//! // Deterministic: same seed, same sparks
//! let field = ParticleField::new(FieldConfig::default(), SeededRandom::from_seed(7));
//!
//! // Scripted: every draw returns the next value in the list
//! let field = ParticleField::new(FieldConfig::default(), SequenceRandom::new(vec![0.1, 0.9]));
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Only [`next_unit`](RandomSource::next_unit) needs implementing; the
/// helpers are built on top of it.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform value in `range`. An empty range yields `range.start`.
    fn range(&mut self, range: &Range<f32>) -> f32 {
        let unit = self.next_unit();
        if range.end <= range.start {
            return range.start;
        }
        range.start + (range.end - range.start) * unit
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.next_unit() < p
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f32) as usize).min(len - 1)
    }
}

/// Pseudo-random source backed by [`SmallRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Seeded from system entropy; different every run.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic stream for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty list always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that returns the same value forever.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
