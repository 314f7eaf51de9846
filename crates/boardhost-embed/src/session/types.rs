use std::path::{Path, PathBuf};

use boardhost_common::types::PixelRect;
use boardhost_common::{SessionId, TabId};
use boardhost_platform::WindowHandle;

use crate::process::ProcessHandle;
use crate::strategy::OverlayState;
use crate::viewer::{EmbeddingKind, ViewerKind, ViewerProfile};

/// Where a session is in its life.
///
/// ```text
/// Launching -> Resolving -> Embedded -> Exited | Closed
///                  |-------> Detached -> Exited | Closed
///                  |-------> Exited | Closed
/// ```
///
/// `Detached` means embedding failed part-way: the viewer lives on as its
/// own top-level window and is never embedded again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Launching,
    Resolving,
    Embedded,
    Detached,
    Exited,
    Closed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Exited | SessionState::Closed)
    }

    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Launching, Resolving)
                | (Launching, Exited | Closed)
                | (Resolving, Embedded | Detached | Exited | Closed)
                | (Embedded, Exited | Closed)
                | (Detached, Exited | Closed)
        )
    }
}

/// Everything tracked for one tab that hosts a viewer process.
#[derive(Debug)]
pub struct EmbeddingSession {
    pub(super) id: SessionId,
    pub(super) tab: TabId,
    pub(super) viewer: ViewerKind,
    pub(super) kind: EmbeddingKind,
    pub(super) file_path: PathBuf,
    pub(super) state: SessionState,
    pub(crate) process: Option<ProcessHandle>,
    pub(crate) window: WindowHandle,
    pub(crate) surface: WindowHandle,
    pub(crate) surface_rect: Option<PixelRect>,
    pub(crate) surface_visible: bool,
    pub(crate) last_fit: Option<PixelRect>,
    pub(crate) overlay: OverlayState,
    pub(crate) staging_dir: Option<PathBuf>,
}

impl EmbeddingSession {
    /// A session for a freshly started process. The embedding kind comes from
    /// the viewer's profile and never changes afterwards.
    pub fn new(
        tab: TabId,
        viewer: ViewerKind,
        file_path: PathBuf,
        process: ProcessHandle,
        surface: WindowHandle,
    ) -> Self {
        Self {
            id: SessionId::new(),
            tab,
            viewer,
            kind: viewer.profile().embedding,
            file_path,
            state: SessionState::Launching,
            process: Some(process),
            window: WindowHandle::NULL,
            surface,
            surface_rect: None,
            surface_visible: false,
            last_fit: None,
            overlay: OverlayState::default(),
            staging_dir: None,
        }
    }

    pub fn with_id(mut self, id: SessionId) -> Self {
        self.id = id;
        self
    }

    pub fn with_staging_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.staging_dir = dir;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn viewer(&self) -> ViewerKind {
        self.viewer
    }

    pub fn profile(&self) -> &'static ViewerProfile {
        self.viewer.profile()
    }

    pub fn kind(&self) -> EmbeddingKind {
        self.kind
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn window(&self) -> WindowHandle {
        self.window
    }

    pub fn surface(&self) -> WindowHandle {
        self.surface
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn pid(&self) -> Option<u32> {
        self.process.as_ref().map(ProcessHandle::pid)
    }

    pub fn has_exited(&self) -> bool {
        self.process.as_ref().map_or(true, ProcessHandle::has_exited)
    }

    /// Move to `next` if the state machine allows it. Returns whether it moved.
    pub fn advance(&mut self, next: SessionState) -> bool {
        if self.state.can_transition_to(next) {
            tracing::debug!(tab = %self.tab, from = ?self.state, to = ?next, "session state");
            self.state = next;
            true
        } else {
            tracing::warn!(tab = %self.tab, from = ?self.state, to = ?next, "rejected session transition");
            false
        }
    }

    /// Give up ownership of the process, e.g. to terminate it off the UI thread.
    pub fn take_process(&mut self) -> Option<ProcessHandle> {
        self.process.take()
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState::*;
    use super::*;

    #[test]
    fn happy_path_transitions() {
        assert!(Launching.can_transition_to(Resolving));
        assert!(Resolving.can_transition_to(Embedded));
        assert!(Embedded.can_transition_to(Exited));
        assert!(Embedded.can_transition_to(Closed));
    }

    #[test]
    fn terminal_states_are_final() {
        for next in [Launching, Resolving, Embedded, Detached, Exited, Closed] {
            assert!(!Exited.can_transition_to(next));
            assert!(!Closed.can_transition_to(next));
        }
        assert!(Exited.is_terminal());
        assert!(!Detached.is_terminal());
    }

    #[test]
    fn embedded_is_never_re_embedded() {
        assert!(!Embedded.can_transition_to(Embedded));
        assert!(!Embedded.can_transition_to(Resolving));
        assert!(!Detached.can_transition_to(Embedded));
    }
}
