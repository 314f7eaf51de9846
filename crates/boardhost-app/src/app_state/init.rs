//! Window creation, engine attachment, and opening files.

use std::path::Path;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::{Window, WindowAttributes};

use boardhost_common::types::Rect;
use boardhost_embed::ViewerKind;
use boardhost_platform::WindowHandle;

use super::core::BoardhostApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl BoardhostApp {
    /// Create the host window and attach the embedding engine to it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let handle = native_handle(&window);
        if handle.is_null() {
            tracing::warn!("Host window has no native handle, viewers cannot be embedded");
        }

        let scale = window.scale_factor();
        self.host.attach(handle, content_rect(&window), scale);
        tracing::info!(hwnd = %handle, scale, "Host window created");

        self.window = Some(window);
        true
    }

    /// Re-run layout after the window's size or scale changed.
    pub(super) fn relayout(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        self.host
            .on_layout(content_rect(&window), window.scale_factor());
    }

    // =========================================================================
    // FILE OPENING
    // =========================================================================

    /// Open the files given on the command line, each in its own tab.
    pub(super) fn open_pending_files(&mut self) {
        let files = std::mem::take(&mut self.pending_files);
        let viewer = self.pending_viewer.take();
        for file in &files {
            self.open_path(file, viewer);
        }
    }

    /// Open `path` and log the outcome. Launch failures were already
    /// reported to the user by the engine.
    pub(super) fn open_path(&mut self, path: &Path, viewer: Option<ViewerKind>) {
        match self.host.open_file(path, viewer) {
            Ok(outcome) => {
                tracing::info!(path = %path.display(), tab = %outcome.tab(), "Opened file");
            }
            Err(e) => tracing::warn!(path = %path.display(), "Failed to open file: {e}"),
        }
        self.update_window_title();
    }
}

/// Region tab content occupies: the whole client area, in logical pixels.
fn content_rect(window: &Window) -> Rect {
    let size = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor());
    Rect {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    }
}

fn native_handle(window: &Window) -> WindowHandle {
    let raw = match window.window_handle() {
        Ok(handle) => handle.as_raw(),
        Err(e) => {
            tracing::error!("Failed to get native window handle: {e}");
            return WindowHandle::NULL;
        }
    };
    match raw {
        RawWindowHandle::Win32(win32) => WindowHandle(win32.hwnd.get() as u64),
        _ => WindowHandle::NULL,
    }
}
