//! Notification events
//!
//! The editor reports outcomes as semantic events: a severity plus a
//! short human-readable message, never UI markup. Delivery is
//! fire-and-forget; sinks decide how (and whether) to display them.

use chrono::Utc;

use crate::constants::{FORMAT_CYAN, FORMAT_GREEN, FORMAT_RED, FORMAT_RESET, FORMAT_YELLOW};

/// Severity of a notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warn,
    Error,
}

/// A single notification event.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Receives notification events from the editor. No acknowledgment,
/// no queuing guarantee beyond what the sink itself provides.
pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);
}

/// Prints notices to stdout with a colored severity tag and a
/// timestamp, in the style of a console status line.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        let (tag, color) = match notice.kind {
            NoticeKind::Info => ("info", FORMAT_CYAN),
            NoticeKind::Success => ("ok", FORMAT_GREEN),
            NoticeKind::Warn => ("warn", FORMAT_YELLOW),
            NoticeKind::Error => ("error", FORMAT_RED),
        };
        println!(
            "{}[{} {}]{} {}",
            color,
            Utc::now().format("%H:%M:%S"),
            tag,
            FORMAT_RESET,
            notice.message
        );
    }
}

/// Keeps only the most recent notice, mirroring a single-slot
/// notification bar where each message replaces the prior one.
#[derive(Debug, Default)]
pub struct LatestNotice {
    current: Option<Notice>,
}

impl LatestNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<Notice> {
        self.current.take()
    }
}

impl NotificationSink for LatestNotice {
    fn notify(&mut self, notice: Notice) {
        self.current = Some(notice);
    }
}
