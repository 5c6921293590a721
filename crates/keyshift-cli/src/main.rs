mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout carries only status lines)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Run {
            paths,
            config,
            verbose_rules,
        } => commands::run::handle(paths, config, verbose_rules),
        cli::Commands::Check {
            paths,
            config,
            diff,
        } => commands::check::handle(paths, config, diff),
        cli::Commands::Rules => commands::rules::handle(),
        cli::Commands::Init { force } => commands::init::handle(force),
    }
}
