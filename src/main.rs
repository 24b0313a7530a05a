//! Terminal host for a donation session.
//!
//! Reads one command per line from stdin and prints every notification the
//! session raises. Payment triggers run in the background, so several of them
//! may overlap the same way quick taps do on a phone screen. Input ends at EOF,
//! `quit` or ctrl-c; payments still in flight are awaited before exiting.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use donation_connect::{Config, DonationSession, host::HELP, session::notify::ConsoleNotifier};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Make a donation to a campaign")]
struct Cli {
    /// Campaign the donation is attributed to
    #[arg(long, env = "DONATION_CAMPAIGN_ID")]
    campaign_id: String,
    /// Overrides DONATION_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    let session = Arc::new(
        DonationSession::new(cli.campaign_id, &config, Arc::new(ConsoleNotifier))
            .context("failed to build donation client")?,
    );
    tracing::info!(campaign_id = %session.campaign_id(), api_url = %config.api_url, "Donation session started");
    println!("Make a Donation\nCampaign: {}\n{HELP}", session.campaign_id());

    donation_connect::host::run(session, BufReader::new(tokio::io::stdin())).await
}
