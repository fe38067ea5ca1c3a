//! Session module - the process-local authenticated-identity slot.

mod errors;
mod session;

pub use errors::SessionError;
pub use session::{Session, SessionState};
