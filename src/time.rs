//! Frame timing for the windowed host.
//!
//! The field itself advances in whole frames and never looks at wall-clock
//! time. [`FrameClock`] counts those frames and keeps a periodic FPS estimate
//! for the log.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//!
//! // Once per redraw:
//! clock.tick();
//! if let Some(fps) = clock.take_fps_report() {
//!     log::info!("{fps:.1} fps");
//! }
//! ```

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Set when a fresh FPS value has not been reported yet.
    fps_fresh: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(5))
    }

    /// Clock that recomputes FPS every `interval`.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: interval,
            fps_fresh: false,
        }
    }

    /// Count one frame. Call once per redraw.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            self.fps_fresh = true;
        }
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The FPS estimate, once per update interval.
    pub fn take_fps_report(&mut self) -> Option<f32> {
        std::mem::take(&mut self.fps_fresh).then_some(self.fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
