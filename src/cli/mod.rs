//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::state_machine::LookupMode;
use crate::{Config, Result};
use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// Interactive finite-state machine walker
#[derive(Parser, Debug)]
#[command(name = "fsm-design")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "FSM_DESIGN_CONFIG")]
    pub config: Option<PathBuf>,

    /// How requested moves are checked (overrides config)
    #[arg(short, long, value_enum)]
    pub lookup: Option<LookupMode>,

    /// Reject state identifiers outside [0, n_states) while loading
    #[arg(long)]
    pub strict: bool,

    /// Log level (overrides config, RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Settings for one session after applying CLI overrides to the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub lookup: LookupMode,
    pub strict: bool,
}

impl Cli {
    /// Effective log level: flag first, then config
    pub fn log_level<'a>(&'a self, config: &'a Config) -> &'a str {
        self.log_level.as_deref().unwrap_or(&config.logging.level)
    }

    /// Effective session settings: flags first, then config
    pub fn session_settings(&self, config: &Config) -> SessionSettings {
        SessionSettings {
            lookup: self.lookup.unwrap_or(config.session.lookup),
            strict: self.strict || config.session.strict,
        }
    }
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    commands::walk::execute(args.session_settings(&config))
}
