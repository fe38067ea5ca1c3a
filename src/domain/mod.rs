//! Domain layer - the business rules of the session core.

pub mod credentials;
pub mod dashboard;
pub mod foundation;
pub mod session;
