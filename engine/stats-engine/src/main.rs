use anyhow::Context;
use clap::Parser;
use stats_engine::cli::{Cli, CliHandler};
use stats_engine::{StatsConfig, StatsEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = StatsConfig::load_from_file(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;
    info!("Data directory: {:?}, {} leagues", config.data_dir, config.leagues.len());

    let engine = StatsEngine::from_config(&config).context("Failed to create stats engine")?;

    CliHandler::new(engine, cli.json).handle_command(cli.command)
}
