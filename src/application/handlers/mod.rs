//! Command handlers.
//!
//! One handler per user-visible operation. Handlers validate through the
//! domain, mutate the session slot they are handed, and surface every
//! outcome through the `Notifier` port.

pub mod auth;
pub mod dashboard;

pub use auth::{
    LoginCommand, LoginHandler, LogoutHandler, SignupCommand, SignupHandler,
};
pub use dashboard::GetDashboardHandler;
