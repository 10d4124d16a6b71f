//! Notification sink implementations.

use std::sync::Mutex;

use gearlog_core::validation::sink::NotificationSink;

/// Forwards warnings to the tracing subscriber. Useful for headless callers
/// (imports, scripts) that have no toast surface.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn warning(&self, message: &str) {
        tracing::warn!(%message, "validation warning");
    }
}

/// Queues warnings for a UI layer to drain and render as toasts.
#[derive(Debug, Default)]
pub struct QueuedSink {
    messages: Mutex<Vec<String>>,
}

impl QueuedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued warnings, oldest first, leaving the queue empty.
    pub fn drain(&self) -> Vec<String> {
        let mut queue = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *queue)
    }
}

impl NotificationSink for QueuedSink {
    fn warning(&self, message: &str) {
        let mut queue = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.push(message.to_string());
    }
}
