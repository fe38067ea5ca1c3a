//! Demo driver for the SaiU LMS session core.
//!
//! Replays the mock front end's interaction flow against the real handlers:
//! a rejected login, a student login with their dashboard, a logout, and an
//! admin self-registration. Dashboard views are printed as JSON; notices go
//! to the log stream.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use saiu_lms::adapters::dashboard::InMemoryDashboardReader;
use saiu_lms::adapters::notify::TracingNotifier;
use saiu_lms::application::handlers::{
    GetDashboardHandler, LoginCommand, LoginHandler, LogoutHandler, SignupCommand, SignupHandler,
};
use saiu_lms::config::AppConfig;
use saiu_lms::domain::foundation::Role;
use saiu_lms::domain::session::Session;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_level.as_str())
        }))
        .init();

    let notifier = Arc::new(TracingNotifier::new());
    let login = LoginHandler::new(notifier.clone());
    let signup = SignupHandler::new(notifier.clone());
    let logout = LogoutHandler::new();
    let dashboard = GetDashboardHandler::new(Arc::new(InMemoryDashboardReader::new()));

    let mut session = Session::new();

    // A login with a missing email is rejected at the gate.
    let rejected = login.handle(
        LoginCommand {
            email: String::new(),
            password: "pw".to_string(),
            role: Role::Student,
        },
        &mut session,
    );
    tracing::info!(outcome = ?rejected.err(), "first attempt");

    // Any well-formed credentials sign in; there is no credential store.
    login.handle(
        LoginCommand {
            email: "a@x.com".to_string(),
            password: "anything".to_string(),
            role: Role::Student,
        },
        &mut session,
    )?;

    let view = dashboard.handle(&session)?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    logout.handle(&mut session);

    // Self-registration is admin-only and signs the new account in.
    signup.handle(
        SignupCommand {
            name: "Alice Admin".to_string(),
            email: "b@x.com".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            role: Role::Admin,
        },
        &mut session,
    )?;

    let view = dashboard.handle(&session)?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    logout.handle(&mut session);

    Ok(())
}
