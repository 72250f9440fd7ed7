mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use samgov_lib::samgov_api::Client;
use samgov_lib::OpportunitySearchClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "samgov")]
#[command(about = "Search contract opportunities posted on sam.gov")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search opportunities posted in a date range
    Search(Box<commands::search::SearchArgs>),
    /// List opportunities posted recently (yesterday through today by default)
    Recent(commands::recent::RecentArgs),
    /// List procurement type codes
    Types,
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Builds the API client, honoring `SAMGOV_BASE_URL` and `SAMGOV_TIMEOUT_SECS`.
fn build_client() -> OpportunitySearchClient {
    let mut client = match std::env::var("SAMGOV_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => Client::with_base_url(url.trim()),
        _ => Client::new(),
    };
    if let Some(secs) = env_u64("SAMGOV_TIMEOUT_SECS") {
        client = client.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(
        "Using {} with a {}s timeout",
        client.base_url(),
        client.timeout().as_secs()
    );
    OpportunitySearchClient::from_client(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("samgov=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Search(args) => {
            commands::search::run(args.as_ref(), &build_client(), &format).await?
        }
        Commands::Recent(args) => commands::recent::run(args, &build_client(), &format).await?,
        Commands::Types => commands::types::run(&format)?,
    }

    Ok(())
}
