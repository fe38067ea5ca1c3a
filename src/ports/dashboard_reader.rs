//! DashboardReader port - source of per-role dashboard data.

use crate::domain::dashboard::DashboardView;
use crate::domain::foundation::Role;

/// Port for fetching the dashboard view a role should see.
///
/// Infallible by contract: every role has a dashboard. A real backend
/// would return per-user data here; the in-memory adapter serves the
/// canned catalog.
pub trait DashboardReader: Send + Sync {
    fn dashboard_for(&self, role: Role) -> DashboardView;
}
