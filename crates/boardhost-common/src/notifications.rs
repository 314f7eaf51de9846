use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a transient status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Short, non-blocking status text (for example "BoardViewer exited").
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notice {
    /// Creates an info notice with a 5-second TTL.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_ttl(NoticeLevel::Info, message, Duration::from_secs(5))
    }

    /// Creates a warning notice with an 8-second TTL.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_ttl(NoticeLevel::Warning, message, Duration::from_secs(8))
    }

    /// Creates an error notice with a 10-second TTL.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_ttl(NoticeLevel::Error, message, Duration::from_secs(10))
    }

    pub fn with_ttl(level: NoticeLevel, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of notices that drops expired entries on access.
#[derive(Debug)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notice, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notice: Notice) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notice);
    }

    /// The most recent notice that has not expired yet.
    pub fn latest(&mut self) -> Option<&Notice> {
        self.evict_expired();
        self.items.back()
    }

    pub fn visible(&mut self) -> Vec<&Notice> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// Number of queued notices, including ones that have expired but were not evicted yet.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(16)
    }
}
