//! Engine polling and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::BoardhostApp;
use super::types::POLL_INTERVAL;

impl BoardhostApp {
    /// Drain engine events and schedule the next wake-up.
    ///
    /// The loop wakes at the poll interval or at the engine's next layout
    /// deadline, whichever comes first.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.host.pump(now) {
            tracing::trace!("Engine events processed");
        }
        self.update_window_title();

        let mut wake = now + POLL_INTERVAL;
        if let Some(deadline) = self.host.next_deadline() {
            wake = wake.min(deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
