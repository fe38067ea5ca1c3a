//! Adapters - implementations of the ports.

pub mod dashboard;
pub mod notify;
