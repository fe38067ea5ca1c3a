//! Identity type for the domain layer.
//!
//! An `Identity` is what the credential gate emits on success and what the
//! session slot holds while authenticated. It carries only the two facts the
//! dashboards need: who the user is and which role they act in.

use serde::{Deserialize, Serialize};

use super::{EmailAddress, Role};

/// The authenticated user's email and role for the current session.
///
/// Held only in process memory; destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's validated email address.
    pub email: EmailAddress,

    /// Role determining which dashboard variant is shown.
    pub role: Role,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(email: EmailAddress, role: Role) -> Self {
        Self { email, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_email_and_role() {
        let identity = Identity::new(EmailAddress::new("a@x.com").unwrap(), Role::Student);
        assert_eq!(identity.email.as_str(), "a@x.com");
        assert_eq!(identity.role, Role::Student);
    }
}
