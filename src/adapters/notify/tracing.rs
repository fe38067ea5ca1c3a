//! Tracing-backed notifier.

use crate::ports::{Notice, Notifier, Severity};

/// Notifier that emits each notice as a tracing event.
///
/// Used by the demo binary, where the log stream stands in for the UI's
/// toast area.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => {
                tracing::info!(title = %notice.title, body = %notice.body, "notice")
            }
            Severity::Error => {
                tracing::warn!(title = %notice.title, body = %notice.body, "notice")
            }
        }
    }
}
