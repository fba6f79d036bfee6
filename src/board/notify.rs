//! Ephemeral status notices for transition outcomes.

use std::time::{Duration, Instant};

/// How long a notice stays visible without being replaced or dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Notice severity; drives the display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A single status message shown above the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Holds at most one notice and the single expiry deadline for it.
///
/// Showing a new notice replaces the previous one and re-arms the
/// deadline, so overlapping notices never leave a stale timer behind.
#[derive(Debug)]
pub struct Notifier {
    current: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Display a notice, replacing whatever was visible and restarting
    /// the auto-clear window.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        let notice = Notice {
            message: message.into(),
            severity,
        };
        self.current = Some((notice, Instant::now() + self.ttl));
    }

    /// Manual close; the pending deadline goes with the notice.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible notice, if any. Expired notices are cleared on read.
    pub fn current(&mut self) -> Option<&Notice> {
        if let Some((_, deadline)) = &self.current {
            if Instant::now() >= *deadline {
                self.current = None;
            }
        }
        self.current.as_ref().map(|(notice, _)| notice)
    }
}
