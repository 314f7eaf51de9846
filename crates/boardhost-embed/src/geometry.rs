//! Coalescing of high-frequency geometry triggers.
//!
//! Continuous resize and layout events restart a short timer; the host only
//! re-synchronizes embedded windows once the timer runs out. Selection,
//! activation, move and minimize updates bypass it.

use std::time::{Duration, Instant};

use boardhost_common::types::{PixelRect, Rect};

/// Trailing-edge debouncer driven by the host's event loop.
///
/// Pure state with no timers of its own: callers pass `now` in and ask for
/// [`Debouncer::deadline`] to schedule their next wake-up.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Whether triggers should be applied right away.
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }

    /// Register a trigger, pushing the deadline out by the full delay.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per burst, when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Host layout region in physical pixels for the given display scale.
pub fn physical_content(content: Rect, scale: f64) -> PixelRect {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let rect = content.to_physical(scale);
    PixelRect::new(rect.x, rect.y, rect.width.max(0), rect.height.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_fires_once_after_last_trigger() {
        let mut d = Debouncer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        d.schedule(t0);
        d.schedule(t0 + Duration::from_millis(30));

        assert!(!d.fire(t0 + Duration::from_millis(60)));
        assert!(d.fire(t0 + Duration::from_millis(80)));
        assert!(!d.fire(t0 + Duration::from_millis(200)));
        assert!(!d.is_pending());
    }

    #[test]
    fn zero_delay_is_immediate() {
        let mut d = Debouncer::new(Duration::ZERO);
        assert!(d.is_immediate());
        let now = Instant::now();
        d.schedule(now);
        assert!(d.fire(now));
    }

    #[test]
    fn cancel_drops_pending_burst() {
        let mut d = Debouncer::new(Duration::from_millis(10));
        let now = Instant::now();
        d.schedule(now);
        d.cancel();
        assert_eq!(d.deadline(), None);
        assert!(!d.fire(now + Duration::from_secs(1)));
    }

    #[test]
    fn content_scales_to_physical_pixels() {
        let content = Rect {
            x: 0.0,
            y: 32.0,
            width: 800.0,
            height: 568.0,
        };
        assert_eq!(
            physical_content(content, 1.5),
            PixelRect::new(0, 48, 1200, 852)
        );
        assert_eq!(
            physical_content(content, 0.0),
            PixelRect::new(0, 32, 800, 568)
        );
    }
}
