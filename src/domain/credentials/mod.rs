//! Credentials module - login/signup input validation.
//!
//! The credential gate is the only checkpoint between the auth form and the
//! session slot. It validates input shape and enforces the one registration
//! rule; it performs no credential verification because no credential store
//! exists in this system.

mod attempt;
mod errors;
mod gate;

pub use attempt::{LoginAttempt, SignupAttempt};
pub use errors::CredentialError;
pub use gate::CredentialGate;
