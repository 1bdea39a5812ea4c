//! Windowed host: runs a [`ParticleField`] on a transparent winit window.
//!
//! The window's redraw requests are the frame clock. A new redraw is only
//! requested while the field asks for one, so nothing is scheduled after the
//! field is detached.

use crate::config::FieldConfig;
use crate::error::AppError;
use crate::field::{FieldState, FrameRequest, ParticleField};
use crate::gpu::GpuSurface;
use crate::input::PointerTracker;
use crate::random::SeededRandom;
use crate::time::FrameClock;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

pub struct App {
    window: Option<Arc<Window>>,
    field: ParticleField<GpuSurface, SeededRandom>,
    tracker: PointerTracker,
    clock: FrameClock,
}

impl App {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            window: None,
            field: ParticleField::new(config, SeededRandom::new()),
            tracker: PointerTracker::new(),
            clock: FrameClock::new(),
        }
    }

    fn redraw(&mut self) {
        if self.field.frame() != FrameRequest::Next {
            return;
        }
        self.clock.tick();
        if let Some(fps) = self.clock.take_fps_report() {
            log::info!("{fps:.1} fps, {} live sparks", self.field.len());
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Sparkfield")
            .with_transparent(true)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let surface_window = window.clone();
        let state = self
            .field
            .attach(|| pollster::block_on(GpuSurface::new(surface_window)));
        if state == FieldState::Attached {
            window.request_redraw();
        }
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.field.detach();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(pointer) = self.tracker.handle_event(&other) {
                    pointer.apply(&mut self.field);
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let stats = self.field.stats();
        log::debug!(
            "exiting after {} frames: {} sparks spawned, {} pruned",
            stats.frames,
            stats.spawned,
            stats.pruned
        );
        self.field.detach();
    }
}

/// Open a window and run the field until it is closed.
pub fn run(config: FieldConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
