//! CredentialGate - synchronous validation of auth form input.

use crate::domain::foundation::{EmailAddress, Identity, Role};

use super::{CredentialError, LoginAttempt, SignupAttempt};

/// Validates login and signup attempts and emits an [`Identity`] on success.
///
/// # Contract
///
/// - Login fails only on missing or malformed input. There is no credential
///   store, so any well-formed email/password pair is accepted and the
///   requested role is taken at face value. This is demo behavior, not an
///   authentication scheme.
/// - Signup additionally requires the password confirmation to match and the
///   requested role to be [`Role::Admin`]; administrators add everyone else
///   to the platform themselves.
///
/// Purely synchronous; no retries, no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialGate;

impl CredentialGate {
    /// Creates a new gate.
    pub fn new() -> Self {
        Self
    }

    /// Validates a login attempt.
    ///
    /// # Errors
    ///
    /// - `MissingField` if email or password is empty
    /// - `InvalidEmail` if the email is non-empty but malformed
    pub fn login(&self, attempt: &LoginAttempt) -> Result<Identity, CredentialError> {
        if attempt.email.trim().is_empty() {
            return Err(CredentialError::missing_field("email"));
        }
        if attempt.password.is_empty() {
            return Err(CredentialError::missing_field("password"));
        }

        let email = EmailAddress::new(attempt.email.as_str())?;
        Ok(Identity::new(email, attempt.role))
    }

    /// Validates a signup attempt.
    ///
    /// # Errors
    ///
    /// - `MissingField` if name, email, or password is empty
    /// - `PasswordMismatch` if the confirmation differs from the password
    /// - `RoleRestricted` if the requested role is not administrator
    /// - `InvalidEmail` if the email is non-empty but malformed
    pub fn signup(&self, attempt: &SignupAttempt) -> Result<Identity, CredentialError> {
        if attempt.name.trim().is_empty() {
            return Err(CredentialError::missing_field("name"));
        }
        if attempt.email.trim().is_empty() {
            return Err(CredentialError::missing_field("email"));
        }
        if attempt.password.is_empty() {
            return Err(CredentialError::missing_field("password"));
        }
        if attempt.password != attempt.confirm_password {
            return Err(CredentialError::PasswordMismatch);
        }
        if !attempt.role.can_self_register() {
            return Err(CredentialError::RoleRestricted {
                role: attempt.role,
            });
        }

        let email = EmailAddress::new(attempt.email.as_str())?;
        Ok(Identity::new(email, attempt.role))
    }
}
