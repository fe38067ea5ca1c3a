//! Notifier port - transient user-facing notifications.

use serde::Serialize;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral or success outcome.
    Info,
    /// Validation failure the user must correct.
    Error,
}

/// A transient notification shown to the user.
///
/// Notices are fire-and-forget: never logged for audit, never retried,
/// never escalated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notice {
    /// Creates an informational notice.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
        }
    }

    /// Creates an error notice.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
        }
    }
}

/// Port for surfacing notices to the user.
pub trait Notifier: Send + Sync {
    /// Presents a notice. Must not fail; delivery is best-effort.
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_and_error_set_severity() {
        assert_eq!(Notice::info("t", "b").severity, Severity::Info);
        assert_eq!(Notice::error("t", "b").severity, Severity::Error);
    }
}
