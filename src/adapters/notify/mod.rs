//! Notifier adapters.

mod recording;
mod tracing;

pub use recording::RecordingNotifier;
pub use tracing::TracingNotifier;
