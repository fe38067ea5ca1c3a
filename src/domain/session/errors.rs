//! Session-specific error types.

use thiserror::Error;

/// Errors raised when an operation requires an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session is anonymous and the operation needs an identity.
    #[error("Not logged in")]
    Unauthorized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_displays_plainly() {
        assert_eq!(format!("{}", SessionError::Unauthorized), "Not logged in");
    }
}
