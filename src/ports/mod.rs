//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! Everything here is synchronous: the session core has no suspension
//! points, no network, and no shared mutable state beyond the one slot.
//!
//! - `Notifier` - transient user-facing notifications (the mock's toasts)
//! - `DashboardReader` - source of per-role dashboard data

mod dashboard_reader;
mod notifier;

pub use dashboard_reader::DashboardReader;
pub use notifier::{Notice, Notifier, Severity};
