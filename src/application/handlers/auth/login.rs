//! LoginHandler - command handler for signing in.

use std::sync::Arc;

use crate::domain::credentials::{CredentialError, CredentialGate, LoginAttempt};
use crate::domain::foundation::{Identity, Role};
use crate::domain::session::Session;
use crate::ports::{Notice, Notifier};

use super::rejection_notice;

/// Command to sign in with form credentials.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Handler for login attempts.
pub struct LoginHandler {
    gate: CredentialGate,
    notifier: Arc<dyn Notifier>,
}

impl LoginHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gate: CredentialGate::new(),
            notifier,
        }
    }

    /// Validates the command and, on success, records the identity in the
    /// session slot.
    ///
    /// Every outcome produces exactly one notice.
    pub fn handle(
        &self,
        cmd: LoginCommand,
        session: &mut Session,
    ) -> Result<Identity, CredentialError> {
        let attempt = LoginAttempt::new(cmd.email, cmd.password, cmd.role);

        let identity = match self.gate.login(&attempt) {
            Ok(identity) => identity,
            Err(error) => {
                tracing::debug!(%error, "login rejected");
                self.notifier.notify(rejection_notice(&error));
                return Err(error);
            }
        };

        let session_id = session.login(identity.clone());
        tracing::info!(%session_id, email = %identity.email, role = %identity.role, "logged in");

        self.notifier.notify(Notice::info(
            "Login Successful",
            format!(
                "Welcome back! Redirecting to {} dashboard.",
                identity.role
            ),
        ));

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::RecordingNotifier;
    use crate::ports::Severity;

    fn handler_with_recorder() -> (LoginHandler, Arc<RecordingNotifier>) {
        let recorder = Arc::new(RecordingNotifier::new());
        (LoginHandler::new(recorder.clone()), recorder)
    }

    fn cmd(email: &str, password: &str, role: Role) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn successful_login_authenticates_the_session() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        let identity = handler
            .handle(cmd("a@x.com", "anything", Role::Student), &mut session)
            .unwrap();

        assert_eq!(identity.email.as_str(), "a@x.com");
        assert_eq!(session.role(), Some(Role::Student));

        let notice = recorder.last().unwrap();
        assert_eq!(notice.title, "Login Successful");
        assert_eq!(notice.severity, Severity::Info);
        assert!(notice.body.contains("student dashboard"));
    }

    #[test]
    fn missing_email_leaves_session_anonymous() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        let err = handler
            .handle(cmd("", "pw", Role::Admin), &mut session)
            .unwrap_err();

        assert_eq!(err, CredentialError::missing_field("email"));
        assert!(!session.is_authenticated());
        assert_eq!(recorder.last().unwrap().title, "Missing Information");
    }

    #[test]
    fn relogin_replaces_the_current_identity() {
        let (handler, _) = handler_with_recorder();
        let mut session = Session::new();

        handler
            .handle(cmd("a@x.com", "pw", Role::Student), &mut session)
            .unwrap();
        handler
            .handle(cmd("b@x.com", "pw", Role::Professor), &mut session)
            .unwrap();

        assert_eq!(session.role(), Some(Role::Professor));
        assert_eq!(session.identity().unwrap().email.as_str(), "b@x.com");
    }

    #[test]
    fn every_outcome_produces_exactly_one_notice() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        let _ = handler.handle(cmd("a@x.com", "pw", Role::Admin), &mut session);
        let _ = handler.handle(cmd("", "pw", Role::Admin), &mut session);

        assert_eq!(recorder.count(), 2);
    }
}
