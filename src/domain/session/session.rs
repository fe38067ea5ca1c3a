//! Session slot entity.
//!
//! The session is a single mutable slot owned by whatever process hosts the
//! UI; it is passed explicitly to the handlers that need it. There is no
//! global, no expiry, and no multi-session support.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Identity, Role, SessionId, Timestamp};

/// The two states a session can be in.
///
/// State machine: `Anonymous -> Authenticated -> Anonymous`. Logging in
/// while already authenticated replaces the identity in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SessionState {
    Anonymous,
    Authenticated {
        identity: Identity,
        /// Random id for log correlation, minted on each login.
        session_id: SessionId,
        signed_in_at: Timestamp,
    },
}

/// The process-local session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates a new anonymous session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Anonymous,
        }
    }

    /// Records a successful authentication, replacing any current identity.
    ///
    /// Returns the freshly minted session id.
    pub fn login(&mut self, identity: Identity) -> SessionId {
        let session_id = SessionId::new();
        self.state = SessionState::Authenticated {
            identity,
            session_id,
            signed_in_at: Timestamp::now(),
        };
        session_id
    }

    /// Clears the slot, returning the session to anonymous.
    ///
    /// Idempotent; logging out of an anonymous session is a no-op.
    pub fn logout(&mut self) {
        self.state = SessionState::Anonymous;
    }

    /// Returns the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns true while an identity is held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// Returns the current identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated { identity, .. } => Some(identity),
        }
    }

    /// Returns the current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    /// Returns the current session id, if authenticated.
    pub fn session_id(&self) -> Option<SessionId> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated { session_id, .. } => Some(*session_id),
        }
    }

    /// Returns when the current identity signed in, if authenticated.
    pub fn signed_in_at(&self) -> Option<&Timestamp> {
        match &self.state {
            SessionState::Anonymous => None,
            SessionState::Authenticated { signed_in_at, .. } => Some(signed_in_at),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmailAddress;

    fn identity(email: &str, role: Role) -> Identity {
        Identity::new(EmailAddress::new(email).unwrap(), role)
    }

    #[test]
    fn new_session_is_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.identity(), None);
        assert_eq!(session.role(), None);
        assert_eq!(session.session_id(), None);
    }

    #[test]
    fn login_records_identity() {
        let mut session = Session::new();
        session.login(identity("a@x.com", Role::Student));

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.identity().unwrap().email.as_str(), "a@x.com");
        assert!(session.signed_in_at().is_some());
    }

    #[test]
    fn relogin_replaces_identity_and_mints_new_id() {
        let mut session = Session::new();
        let first = session.login(identity("a@x.com", Role::Student));
        let second = session.login(identity("b@x.com", Role::Professor));

        assert_ne!(first, second);
        assert_eq!(session.role(), Some(Role::Professor));
        assert_eq!(session.identity().unwrap().email.as_str(), "b@x.com");
        assert_eq!(session.session_id(), Some(second));
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut session = Session::new();
        session.login(identity("a@x.com", Role::Admin));
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.state(), &SessionState::Anonymous);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::new();
        session.logout();
        session.logout();
        assert_eq!(session.state(), &SessionState::Anonymous);
    }
}
