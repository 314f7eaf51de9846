//! Batch teardown when the host exits.

use futures_util::future::join_all;

use super::core::EmbeddingHost;
use crate::process::cleanup;
use crate::session::SessionState;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl EmbeddingHost {
    /// Terminate every viewer and remove temporary files.
    ///
    /// Order matters:
    /// 1. Take every session out of the registry and destroy its surface
    /// 2. Terminate all processes concurrently, each with a bounded wait
    /// 3. Remove every staging directory this host created, then the temp
    ///    root if nothing else lives in it
    ///
    /// Failures are logged and swallowed. Calling this again does nothing.
    /// Must not be called from inside the runtime.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.layout.cancel();
        tracing::info!(sessions = self.registry.len(), "shutting down embedded viewers");

        // 1. Retire sessions
        let mut processes = Vec::new();
        let mut staging_dirs = Vec::new();
        for mut session in self.registry.drain() {
            session.advance(SessionState::Closed);
            self.destroy_surface(session.surface());
            processes.extend(session.take_process());
            staging_dirs.extend(session.staging_dir.take());
        }
        for (_, stray) in self.strays.drain() {
            processes.push(stray.process);
            staging_dirs.extend(stray.staging_dir);
        }

        // 2. Terminate in parallel
        let timeout = self.settings.terminate_timeout;
        let results = self
            .runtime
            .block_on(join_all(processes.into_iter().map(|p| p.terminate(timeout))));
        let timed_out = results.iter().filter(|done| !**done).count();
        if timed_out > 0 {
            tracing::warn!(timed_out, "some viewers did not terminate in time");
        }

        // 3. Temp directories
        if !staging_dirs.is_empty() {
            // The timer must be created inside the runtime.
            let delay = self.settings.cleanup_delay;
            self.runtime
                .block_on(async move { tokio::time::sleep(delay).await });
        }
        // Directories of earlier sessions whose background cleanup never ran
        // are swept here too.
        for dir in staging_dirs.iter().chain(self.staged_dirs.iter()) {
            cleanup::remove_dir_quietly(dir);
        }
        self.staged_dirs.clear();
        cleanup::remove_dir_if_empty(&self.settings.temp_root);

        tracing::info!("embedded viewers shut down");
    }
}
