use anyhow::Context;
use clap::Parser;
use proxen_config::ProxenConfig;

mod cli;
mod commands;
mod inputs;
mod output;
mod progress;

fn main() {
    if let Err(error) = run() {
        eprintln!("proxen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = ProxenConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load proxen configuration")?;
    tracing::debug!(?config, "configuration loaded");

    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROXEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
