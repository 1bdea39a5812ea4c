//! The particle field: a transient spark swarm reacting to the pointer.
//!
//! A [`ParticleField`] owns the live sparks and the surface they are drawn
//! on. The host feeds it pointer events and calls [`frame`](ParticleField::frame)
//! once per display refresh:
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldConfig::default(), SeededRandom::new());
//! field.attach(|| Ok(RecordingSurface::new(800, 600)));
//!
//! field.pointer_moved(100.0, 100.0); // maybe one spark
//! field.clicked(50.0, 50.0);         // always a burst
//!
//! while field.frame() == FrameRequest::Next {
//!     // wait for the next display refresh
//! }
//! ```
//!
//! # Lifecycle
//!
//! | State | Handlers | Frames |
//! |-------|----------|--------|
//! | `Detached` | ignored | draw nothing, `Stop` |
//! | `Attached` | spawn | step, prune, clear, draw, `Next` |
//! | `Disabled` | ignored | draw nothing, `Stop` |
//!
//! A field becomes `Disabled` when its surface cannot be acquired. The effect
//! is purely cosmetic, so that is logged and otherwise silent.
//!
//! All mutation goes through `&mut self`, so the handlers and the frame
//! callback can never overlap. Hosts on a multi-threaded runtime should keep
//! the field on a single task or behind one mutex.

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::spawn::{burst_spawn, trail_spawn};
use crate::surface::{Circle, Surface};
use glam::Vec2;

/// Whether the field is bound to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Not attached yet, or detached.
    Detached,
    /// Bound to a surface; handlers and frames are live.
    Attached,
    /// Surface acquisition failed; the effect does nothing.
    Disabled,
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame.
    Next,
    /// Do not schedule further frames.
    Stop,
}

/// Running counters since the field was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub spawned: u64,
    pub pruned: u64,
    pub frames: u64,
}

/// Pointer-driven spark field drawing onto a surface `S` with randomness from `R`.
pub struct ParticleField<S, R> {
    config: FieldConfig,
    rng: R,
    particles: Vec<Particle>,
    surface: Option<S>,
    state: FieldState,
    last_pointer: Option<Vec2>,
    stats: FieldStats,
}

impl<S: Surface, R: RandomSource> ParticleField<S, R> {
    /// Create a detached field.
    pub fn new(config: FieldConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            particles: Vec::new(),
            surface: None,
            state: FieldState::Detached,
            last_pointer: None,
            stats: FieldStats::default(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Live sparks, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Latest pointer position seen while attached.
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// The bound surface, if attached.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Bind to the surface returned by `acquire` and start reacting to input.
    ///
    /// `acquire` runs exactly once. If it fails the field logs the error and
    /// becomes [`FieldState::Disabled`]: no sparks, inert handlers, empty
    /// frames. There is no retry.
    ///
    /// Attaching an already attached field replaces its surface.
    pub fn attach<F>(&mut self, acquire: F) -> FieldState
    where
        F: FnOnce() -> Result<S, SurfaceError>,
    {
        if self.state == FieldState::Attached {
            log::warn!("particle field attached twice; replacing surface");
        }

        match acquire() {
            Ok(surface) => {
                let (width, height) = surface.size();
                log::debug!("particle field attached to {width}x{height} surface");
                self.surface = Some(surface);
                self.state = FieldState::Attached;
            }
            Err(err) => {
                log::warn!("particle field disabled, surface unavailable: {err}");
                self.surface = None;
                self.particles.clear();
                self.state = FieldState::Disabled;
            }
        }
        self.state
    }

    /// Stop the effect and hand back the surface.
    ///
    /// Drops every live spark. Afterwards handlers are inert and
    /// [`frame`](Self::frame) returns [`FrameRequest::Stop`] without touching
    /// any surface. Safe to call more than once.
    pub fn detach(&mut self) -> Option<S> {
        if self.state == FieldState::Attached {
            log::debug!(
                "particle field detached with {} live sparks",
                self.particles.len()
            );
        }
        self.state = FieldState::Detached;
        self.particles = Vec::new();
        self.last_pointer = None;
        self.surface.take()
    }

    /// Pointer moved to `(x, y)`. May drop one trail spark there.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.state != FieldState::Attached {
            return;
        }
        let at = Vec2::new(x, y);
        self.last_pointer = Some(at);
        if let Some(particle) = trail_spawn(&self.config, at, &mut self.rng) {
            self.push(particle);
        }
    }

    /// Pointer clicked at `(x, y)`. Always throws a full burst there.
    pub fn clicked(&mut self, x: f32, y: f32) {
        if self.state != FieldState::Attached {
            return;
        }
        for particle in burst_spawn(&self.config, Vec2::new(x, y), &mut self.rng) {
            self.push(particle);
        }
    }

    /// Viewport resized. Live sparks keep their positions.
    pub fn resized(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            log::debug!("particle surface resized to {width}x{height}");
            surface.resize(width, height);
        }
    }

    /// Advance and redraw one frame.
    ///
    /// Steps every spark, prunes the expired ones, clears the surface and
    /// draws what is left. Returns [`FrameRequest::Stop`] without doing
    /// anything unless attached.
    pub fn frame(&mut self) -> FrameRequest {
        let Some(surface) = self.surface.as_mut() else {
            return FrameRequest::Stop;
        };

        let damping = self.config.damping;
        for particle in &mut self.particles {
            particle.step(damping);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        self.stats.pruned += (before - self.particles.len()) as u64;

        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(&Circle {
                center: particle.position,
                radius: particle.radius,
                color: particle.color,
                alpha: particle.alpha(),
                glow: self.config.glow,
            });
        }
        surface.present();

        self.stats.frames += 1;
        FrameRequest::Next
    }

    fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
        self.stats.spawned += 1;

        if let Some(max) = self.config.max_particles {
            if self.particles.len() > max {
                let excess = self.particles.len() - max;
                self.particles.drain(..excess);
                self.stats.pruned += excess as u64;
            }
        }
    }
}
