//! Drawing surfaces.
//!
//! The field only needs four things from whatever it draws on: a size, a way
//! to resize, a full clear, and filled circles. [`GpuSurface`](crate::gpu::GpuSurface)
//! does this with wgpu on a window; [`RecordingSurface`] records the calls
//! for headless use.

use glam::{Vec2, Vec3};

/// One filled, glowing circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre in surface pixels.
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec3,
    /// Opacity, 0.0-1.0.
    pub alpha: f32,
    /// Soft glow radius beyond `radius`, in pixels.
    pub glow: f32,
}

/// A 2D pixel surface the field can draw on.
pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Match new viewport dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    fn fill_circle(&mut self, circle: &Circle);

    /// Flush everything drawn since the last clear.
    fn present(&mut self) {}
}

/// A call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(u32, u32),
    Clear,
    Circle(Circle),
    Present,
}

/// Headless surface that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Every call in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Clear)).count()
    }

    /// Circles drawn after the most recent clear.
    pub fn last_frame(&self) -> Vec<Circle> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle(circle) => Some(*circle),
                _ => None,
            })
            .collect()
    }

    /// Whether the last frame was cleared and nothing was drawn after it.
    pub fn ended_with_clear(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find(|c| !matches!(c, DrawCall::Present))
            .is_some_and(|c| matches!(c, DrawCall::Clear))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.push(DrawCall::Resize(width, height));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, circle: &Circle) {
        self.calls.push(DrawCall::Circle(*circle));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32) -> Circle {
        Circle {
            center: Vec2::new(x, 0.0),
            radius: 1.0,
            color: Vec3::ONE,
            alpha: 1.0,
            glow: 0.0,
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(800, 600);
        surface.clear();
        surface.fill_circle(&dot(1.0));
        surface.present();

        assert_eq!(
            surface.calls(),
            &[DrawCall::Clear, DrawCall::Circle(dot(1.0)), DrawCall::Present]
        );
    }

    #[test]
    fn test_resize_updates_size() {
        let mut surface = RecordingSurface::new(800, 600);
        surface.resize(1024, 768);
        assert_eq!(surface.size(), (1024, 768));
    }

    #[test]
    fn test_last_frame_only_after_latest_clear() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.clear();
        surface.fill_circle(&dot(1.0));
        surface.clear();
        surface.fill_circle(&dot(2.0));
        surface.fill_circle(&dot(3.0));

        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.last_frame(), vec![dot(2.0), dot(3.0)]);
        assert!(!surface.ended_with_clear());

        surface.clear();
        surface.present();
        assert!(surface.ended_with_clear());
        assert!(surface.last_frame().is_empty());
    }
}
