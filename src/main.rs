//! FSM Design

use anyhow::Context;
use clap::Parser;
use fsm_design::{Config, VERSION, cli, init_logging, validate_log_level};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)
            .with_context(|| format!("loading configuration from {:?}", config_path))?,
        None => Config::load().context("loading configuration")?,
    };

    let level = args.log_level(&config);
    validate_log_level(level).context("checking log level")?;
    init_logging(level);

    tracing::info!("FSM Design v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config).context("running session")?;

    Ok(())
}
