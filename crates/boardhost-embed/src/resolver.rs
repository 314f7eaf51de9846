//! Window handle resolution.
//!
//! A freshly started viewer needs a while before its window exists. The
//! resolver polls for it off the UI thread with a bounded retry budget and
//! gives up early once the process has exited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use boardhost_config::schema::ResolverConfig;
use boardhost_platform::{WindowHandle, WindowSystem};

/// Bounded polling budget for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval: Duration,
    /// Wait before the first attempt.
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            attempts: config.attempts,
            interval: Duration::from_millis(config.interval_ms),
            initial_delay: Duration::ZERO,
        }
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Upper bound on the time one resolution can take.
    pub fn budget(&self) -> Duration {
        self.initial_delay + self.interval * self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(WindowHandle),
    NotFound,
}

/// What to look for on each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    /// The process's main window, else its first visible top-level window.
    Process(u32),
    /// The first child window inside a container surface.
    ChildOf(WindowHandle),
}

impl WindowTarget {
    fn find(&self, ws: &dyn WindowSystem) -> Option<WindowHandle> {
        match *self {
            WindowTarget::Process(pid) => ws
                .main_window(pid)
                .or_else(|| ws.find_visible_window(pid)),
            WindowTarget::ChildOf(surface) => ws.first_child(surface),
        }
    }
}

/// Poll for the window described by `target` until it appears, the process
/// exits, or the attempt budget runs out.
///
/// Each attempt checks `exited` first so a dead process never yields a
/// handle, even one left behind by a window that has not been destroyed yet.
pub async fn resolve(
    ws: Arc<dyn WindowSystem>,
    target: WindowTarget,
    exited: Arc<AtomicBool>,
    policy: RetryPolicy,
) -> Resolution {
    if !policy.initial_delay.is_zero() {
        tokio::time::sleep(policy.initial_delay).await;
    }

    for attempt in 1..=policy.attempts {
        if exited.load(Ordering::SeqCst) {
            tracing::debug!(attempt, ?target, "process exited before its window appeared");
            return Resolution::NotFound;
        }

        if let Some(window) = target.find(ws.as_ref()) {
            if exited.load(Ordering::SeqCst) {
                return Resolution::NotFound;
            }
            tracing::debug!(attempt, ?target, %window, "window resolved");
            return Resolution::Found(window);
        }

        tokio::time::sleep(policy.interval).await;
    }

    tracing::warn!(attempts = policy.attempts, ?target, "window never appeared");
    Resolution::NotFound
}
