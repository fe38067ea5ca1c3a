//! GetDashboardHandler - selects the dashboard view for the session's role.

use std::sync::Arc;

use crate::domain::dashboard::DashboardView;
use crate::domain::session::{Session, SessionError};
use crate::ports::DashboardReader;

/// Handler for fetching the dashboard of the currently signed-in user.
pub struct GetDashboardHandler {
    reader: Arc<dyn DashboardReader>,
}

impl GetDashboardHandler {
    pub fn new(reader: Arc<dyn DashboardReader>) -> Self {
        Self { reader }
    }

    /// Returns the view matching the session's role.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the session is anonymous.
    pub fn handle(&self, session: &Session) -> Result<DashboardView, SessionError> {
        let role = session.role().ok_or(SessionError::Unauthorized)?;
        let view = self.reader.dashboard_for(role);
        tracing::debug!(%role, "dashboard selected");
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::dashboard::InMemoryDashboardReader;
    use crate::domain::foundation::{EmailAddress, Identity, Role};

    fn handler() -> GetDashboardHandler {
        GetDashboardHandler::new(Arc::new(InMemoryDashboardReader::new()))
    }

    #[test]
    fn anonymous_session_is_unauthorized() {
        let session = Session::new();
        assert_eq!(handler().handle(&session), Err(SessionError::Unauthorized));
    }

    #[test]
    fn view_matches_the_session_role() {
        for role in Role::all() {
            let mut session = Session::new();
            session.login(Identity::new(
                EmailAddress::new("a@x.com").unwrap(),
                role,
            ));

            let view = handler().handle(&session).unwrap();
            assert_eq!(view.role(), role);
        }
    }

    #[test]
    fn logout_revokes_dashboard_access() {
        let mut session = Session::new();
        session.login(Identity::new(
            EmailAddress::new("a@x.com").unwrap(),
            Role::Student,
        ));
        session.logout();

        assert_eq!(handler().handle(&session), Err(SessionError::Unauthorized));
    }
}
