//! SignupHandler - command handler for admin self-registration.

use std::sync::Arc;

use crate::domain::credentials::{CredentialError, CredentialGate, SignupAttempt};
use crate::domain::foundation::{Identity, Role};
use crate::domain::session::Session;
use crate::ports::{Notice, Notifier};

use super::rejection_notice;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Handler for signup attempts.
///
/// Registration is restricted to administrators; accepted signups are
/// logged in immediately, as the auth form does.
pub struct SignupHandler {
    gate: CredentialGate,
    notifier: Arc<dyn Notifier>,
}

impl SignupHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gate: CredentialGate::new(),
            notifier,
        }
    }

    /// Validates the command and, on success, records the new admin
    /// identity in the session slot.
    pub fn handle(
        &self,
        cmd: SignupCommand,
        session: &mut Session,
    ) -> Result<Identity, CredentialError> {
        let attempt = SignupAttempt::new(
            cmd.name,
            cmd.email,
            cmd.password,
            cmd.confirm_password,
            cmd.role,
        );

        let identity = match self.gate.signup(&attempt) {
            Ok(identity) => identity,
            Err(error) => {
                tracing::debug!(%error, "signup rejected");
                self.notifier.notify(rejection_notice(&error));
                return Err(error);
            }
        };

        let session_id = session.login(identity.clone());
        tracing::info!(%session_id, email = %identity.email, "admin account registered");

        self.notifier.notify(Notice::info(
            "Registration Successful",
            "Admin account created successfully!",
        ));

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::RecordingNotifier;

    fn handler_with_recorder() -> (SignupHandler, Arc<RecordingNotifier>) {
        let recorder = Arc::new(RecordingNotifier::new());
        (SignupHandler::new(recorder.clone()), recorder)
    }

    fn cmd(password: &str, confirm: &str, role: Role) -> SignupCommand {
        SignupCommand {
            name: "Alice Admin".to_string(),
            email: "b@x.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role,
        }
    }

    #[test]
    fn admin_signup_authenticates_the_session() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        let identity = handler.handle(cmd("p1", "p1", Role::Admin), &mut session).unwrap();

        assert_eq!(identity.email.as_str(), "b@x.com");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(recorder.last().unwrap().title, "Registration Successful");
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        let err = handler
            .handle(cmd("p1", "p2", Role::Admin), &mut session)
            .unwrap_err();

        assert_eq!(err, CredentialError::PasswordMismatch);
        assert!(!session.is_authenticated());
        assert_eq!(recorder.last().unwrap().title, "Password Mismatch");
    }

    #[test]
    fn non_admin_roles_cannot_register() {
        let (handler, recorder) = handler_with_recorder();
        let mut session = Session::new();

        for role in [Role::Professor, Role::Student] {
            let err = handler
                .handle(cmd("p1", "p1", role), &mut session)
                .unwrap_err();
            assert_eq!(err, CredentialError::RoleRestricted { role });
        }

        assert!(!session.is_authenticated());
        assert_eq!(recorder.last().unwrap().title, "Access Restricted");
    }
}
