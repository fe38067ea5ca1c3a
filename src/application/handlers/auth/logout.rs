//! LogoutHandler - command handler for signing out.

use crate::domain::session::Session;

/// Handler for logout.
///
/// Logout cannot fail and needs no input; it clears the slot whatever
/// state it is in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutHandler;

impl LogoutHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the session to anonymous.
    pub fn handle(&self, session: &mut Session) {
        if let Some(session_id) = session.session_id() {
            tracing::info!(%session_id, "logged out");
        }
        session.logout();
    }
}
