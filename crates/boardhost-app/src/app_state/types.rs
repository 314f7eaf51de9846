//! Type definitions and constants for the app state.

use std::time::Duration;

/// Poll interval for engine events and debounced layout (~60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Timeout for background tasks when the runtime is torn down.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Tab-strip actions the host binds to keys that viewers leave alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shortcut {
    NextTab,
    PreviousTab,
    NewTab,
    CloseTab,
    /// Zero-based tab index.
    SelectTab(usize),
}
