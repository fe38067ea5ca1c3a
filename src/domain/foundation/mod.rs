//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the SaiU LMS domain.

mod email;
mod errors;
mod identity;
mod ids;
mod percentage;
mod role;
mod timestamp;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use identity::Identity;
pub use ids::SessionId;
pub use percentage::Percentage;
pub use role::Role;
pub use timestamp::Timestamp;
