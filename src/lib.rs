//! # Sparkfield
//!
//! Decorative particle trails that follow the pointer.
//!
//! Moving the pointer occasionally drops a spark; clicking throws a burst.
//! Every spark drifts, slows down and fades out over a fixed number of
//! frames, so the swarm stays small no matter how busy the pointer is.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sparkfield::prelude::*;
//!
//! let mut field = ParticleField::new(FieldConfig::default(), SeededRandom::new());
//! field.attach(|| Ok(RecordingSurface::new(800, 600)));
//!
//! field.pointer_moved(100.0, 100.0);
//! field.clicked(50.0, 50.0);
//! field.frame();
//! ```
//!
//! Or open a transparent window and play with it:
//!
//! ```ignore
//! sparkfield::window::run(FieldConfig::default())?;
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`ParticleField`] owns the live sparks and a [`Surface`]. Attaching binds
//! the surface; if it cannot be acquired the field quietly does nothing.
//! Pointer handlers spawn sparks, [`ParticleField::frame`] steps, prunes and
//! redraws them, and [`ParticleField::detach`] stops it all.
//!
//! ### Surfaces
//!
//! | Surface | Use |
//! |---------|-----|
//! | [`GpuSurface`] | wgpu rendering on a winit window |
//! | [`RecordingSurface`] | headless, records draw calls |
//!
//! ### Randomness
//!
//! All random draws go through [`RandomSource`]. Use [`SeededRandom`] for
//! real or seeded runs and [`SequenceRandom`] to script exact values.

pub mod config;
pub mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod logger;
pub mod palette;
pub mod particle;
pub mod random;
pub mod spawn;
pub mod surface;
pub mod time;
pub mod window;

pub use config::{FieldConfig, SpawnProfile};
pub use error::{AppError, ConfigError, SurfaceError};
pub use field::{FieldState, FieldStats, FrameRequest, ParticleField};
pub use glam::{Vec2, Vec3};
pub use gpu::GpuSurface;
pub use input::{MouseButton, PointerEvent, PointerTracker};
pub use palette::Palette;
pub use particle::Particle;
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use surface::{Circle, DrawCall, RecordingSurface, Surface};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use sparkfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{FieldConfig, SpawnProfile};
    pub use crate::field::{FieldState, FrameRequest, ParticleField};
    pub use crate::input::{PointerEvent, PointerTracker};
    pub use crate::palette::Palette;
    pub use crate::random::{RandomSource, SeededRandom, SequenceRandom};
    pub use crate::surface::{Circle, RecordingSurface, Surface};
    pub use crate::{Vec2, Vec3};
}
