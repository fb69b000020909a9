//! FSM Design
//!
//! Reads a finite-state machine from the console and walks the user through
//! its transitions, checking each requested move against the transition table.
//!
//! This library provides functionality for:
//! - Reading a machine definition as a console dialogue
//! - Checking moves with the first-match scan or the any-match index
//! - Running the interactive walk over any reader and writer

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod session;
pub mod state_machine;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Reject a log level that cannot be used as a tracing filter
pub fn validate_log_level(level: &str) -> Result<()> {
    crate::ensure!(!level.trim().is_empty(), "Log level must not be empty");
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(level) {
        crate::bail!("Invalid log level {:?}: {}", level, e);
    }
    Ok(())
}

/// Initialize logging with the given log level
///
/// Logs go to stderr so the dialogue on stdout is left untouched.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
