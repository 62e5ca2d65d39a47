use chrono::{DateTime, Utc};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Notification dispatch capability.
///
/// Form and upload flows talk to this instead of a concrete UI effect, so the
/// TUI toast store and test doubles are interchangeable.
pub trait Notifier {
    fn notify(&mut self, kind: ToastKind, message: &str);

    fn info(&mut self, message: &str) {
        self.notify(ToastKind::Info, message);
    }
    fn success(&mut self, message: &str) {
        self.notify(ToastKind::Success, message);
    }
    fn warning(&mut self, message: &str) {
        self.notify(ToastKind::Warning, message);
    }
    fn error(&mut self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

/// One emitted notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub timestamp: DateTime<Utc>,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded in-memory toast history rendered by the TUI
pub struct ToastStore {
    toasts: Vec<Toast>,
    capacity: usize,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            capacity: 100,
        }
    }

    /// Most recent toast, for the transient banner
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Last `count` toasts, oldest first
    pub fn recent(&self, count: usize) -> &[Toast] {
        let start = self.toasts.len().saturating_sub(count);
        &self.toasts[start..]
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastStore {
    fn notify(&mut self, kind: ToastKind, message: &str) {
        self.toasts.push(Toast {
            timestamp: Utc::now(),
            kind,
            message: message.to_string(),
        });
        if self.toasts.len() > self.capacity {
            self.toasts.remove(0);
        }
    }
}

/// Test double that records every notification
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Vec<(ToastKind, String)>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: ToastKind, message: &str) {
        self.events.push((kind, message.to_string()));
    }
}
