//! Pointer input for the particle field.
//!
//! [`PointerTracker`] turns raw winit window events into the three events the
//! field cares about. winit reports clicks without a position, so the tracker
//! remembers the last cursor coordinate and stamps clicks with it.
//!
//! # Usage
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if let Some(pointer) = self.tracker.handle_event(&event) {
//!         pointer.apply(&mut self.field);
//!     }
//! }
//! ```

use crate::field::ParticleField;
use crate::random::RandomSource;
use crate::surface::Surface;
use glam::Vec2;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

/// A pointer event in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    Clicked(Vec2),
    Resized(u32, u32),
}

impl PointerEvent {
    /// Dispatch to the matching field handler.
    pub fn apply<S: Surface, R: RandomSource>(self, field: &mut ParticleField<S, R>) {
        match self {
            PointerEvent::Moved(at) => field.pointer_moved(at.x, at.y),
            PointerEvent::Clicked(at) => field.clicked(at.x, at.y),
            PointerEvent::Resized(width, height) => field.resized(width, height),
        }
    }
}

/// Tracks the cursor across window events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position, `None` before the first move or after
    /// the cursor left the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a winit window event.
    ///
    /// Only left-button presses count as clicks, and only once the cursor
    /// position is known.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let at = Vec2::new(position.x as f32, position.y as f32);
                self.position = Some(at);
                Some(PointerEvent::Moved(at))
            }

            WindowEvent::CursorLeft { .. } => {
                self.position = None;
                None
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.click(MouseButton::from(*button)),

            WindowEvent::Resized(size) => Some(PointerEvent::Resized(size.width, size.height)),

            _ => None,
        }
    }

    fn click(&self, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        self.position.map(PointerEvent::Clicked)
    }
}
