//! SiteDesk
//!
//! Staff, materials and time-tracking desk for a REST backend
//!
//! This is the main entry point for the Dioxus Desktop application.

use clap::Parser;
use sitedesk_client::ClientConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// SiteDesk desktop application
#[derive(Parser, Debug)]
#[command(name = "sitedesk", version, about, long_about = None)]
struct Args {
    /// Backend origin (e.g., https://desk.example.com)
    #[arg(long = "base-url", env = "SITEDESK_BASE_URL")]
    base_url: Option<String>,

    /// Client configuration file (TOML)
    #[arg(long = "config", env = "SITEDESK_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .pretty()
        .init();

    let args = Args::parse();
    let mut config = ClientConfig::load_or_default(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   🏗️  SiteDesk v{:<42}║", sitedesk_core::VERSION);
    println!("║   Staff, materials and time tracking                      ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    sitedesk_ui::launch(config)?;
    Ok(())
}
