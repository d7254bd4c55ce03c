use anyhow::Context;
use clap::Parser;
use schemata_config::SchemataConfig;

mod cli;
mod commands;
mod manifest;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("schemata error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = SchemataConfig::load_with_dotenv().context("failed to load schemata configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.general.log_level)?;

    let flags = cli.global_flags();
    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCHEMATA_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
