//! Credential gate error types.
//!
//! These errors are surfaced directly to the user as transient notifications;
//! none are retried or escalated.

use thiserror::Error;

use crate::domain::foundation::{Role, ValidationError};

/// Reasons the credential gate rejects a login or signup attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// A required form field was left empty.
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    /// The email field is non-empty but not a plausible address.
    #[error("Invalid email address: {reason}")]
    InvalidEmail { reason: String },

    /// Signup password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Self-registration attempted with a non-administrator role.
    #[error("Only administrators can register new accounts (role '{role}' not permitted)")]
    RoleRestricted { role: Role },
}

impl CredentialError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        CredentialError::MissingField { field: field.into() }
    }

    /// Creates an invalid email error.
    pub fn invalid_email(reason: impl Into<String>) -> Self {
        CredentialError::InvalidEmail {
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for CredentialError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => CredentialError::MissingField { field },
            ValidationError::InvalidFormat { reason, .. } => {
                CredentialError::InvalidEmail { reason }
            }
        }
    }
}
