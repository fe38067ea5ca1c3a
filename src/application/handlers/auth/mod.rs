//! Auth command handlers.

mod login;
mod logout;
mod signup;

pub use login::{LoginCommand, LoginHandler};
pub use logout::LogoutHandler;
pub use signup::{SignupCommand, SignupHandler};

use crate::domain::credentials::CredentialError;
use crate::ports::Notice;

/// Maps a gate rejection to the notice the user sees.
///
/// Titles and bodies match the auth form's toasts.
fn rejection_notice(error: &CredentialError) -> Notice {
    match error {
        CredentialError::MissingField { .. } => Notice::error(
            "Missing Information",
            "Please fill in all required fields.",
        ),
        CredentialError::InvalidEmail { .. } => {
            Notice::error("Invalid Email", "Please enter a valid email address.")
        }
        CredentialError::PasswordMismatch => {
            Notice::error("Password Mismatch", "Passwords do not match.")
        }
        CredentialError::RoleRestricted { .. } => Notice::error(
            "Access Restricted",
            "Only administrators can register new accounts.",
        ),
    }
}
