//! SiteDesk command-line entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sitedesk_cli::Cli;
use sitedesk_client::HttpTransport;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn execute(cli: &Cli) -> Result<()> {
    let config = cli.client_config()?;
    tracing::debug!("Using backend {}", config.base_url);
    let transport = HttpTransport::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sitedesk_cli::run(cli, &transport, &mut out).await
}
