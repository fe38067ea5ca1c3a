//! Transient form input for the two auth flows.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Role;

/// Raw login form input. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
    /// Role the user selected on the form; becomes the session role as-is.
    pub role: Role,
}

impl LoginAttempt {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Raw signup form input. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupAttempt {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl SignupAttempt {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            role,
        }
    }
}
