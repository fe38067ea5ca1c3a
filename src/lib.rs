//! SaiU LMS - Role-gated session core
//!
//! This crate implements the authentication and session slice of the SaiU
//! learning management system: credential validation, the process-local
//! session slot, and role-conditioned dashboard selection.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
