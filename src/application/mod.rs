//! Application layer - command handlers wiring the gate, session, and ports.

pub mod handlers;
