//! Transient feedback notices.
//!
//! The queue is owned by the [`App`](crate::App) and handed to the renderer
//! each frame; nothing else can post to it. Notices expire on their own
//! after [`NOTICE_TTL`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    posted: Instant,
}

impl Notice {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.posted) >= NOTICE_TTL
    }
}

/// FIFO of live notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.notices.push_back(Notice {
            kind,
            text,
            posted: Instant::now(),
        });
    }

    /// Drop everything whose TTL has elapsed as of `now`.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|notice| !notice.expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
