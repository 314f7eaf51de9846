//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::BoardhostApp;

impl ApplicationHandler for BoardhostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.open_pending_files();
        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                // winit has no dedicated minimize event; a resize is sent on both edges.
                let minimized = self
                    .window
                    .as_ref()
                    .and_then(|w| w.is_minimized())
                    .unwrap_or(false);
                self.host.on_host_minimized(minimized);
                if !minimized {
                    self.relayout();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.relayout();
            }

            WindowEvent::Moved(_) => {
                self.host.on_host_moved();
            }

            WindowEvent::Focused(true) => {
                self.host.on_host_activated();
            }

            WindowEvent::DroppedFile(path) => {
                tracing::debug!(path = %path.display(), "File dropped");
                self.open_path(&path, None);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shut_down {
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}
