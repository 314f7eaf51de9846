//! Graceful shutdown: retire viewers, then stop background work.

use super::core::BoardhostApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl BoardhostApp {
    /// Perform graceful shutdown. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Shut down the engine (kill viewers, destroy surfaces, remove staged installs)
    /// 2. Shut down the tokio runtime (cancel process watchers and resolvers)
    /// 3. Drop the window
    pub(crate) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        tracing::info!("Initiating graceful shutdown");

        // 1. The engine blocks on the runtime, so it goes first
        self.host.shutdown();

        // 2. Shut down tokio runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        // 3. Release the host window
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::test_support::fresh_app;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = fresh_app();
        app.shutdown();
        assert!(app.shut_down);
        assert!(app.tokio_runtime.is_none());
        assert!(app.host.is_shut_down());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = fresh_app();
        app.shutdown();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }
}
