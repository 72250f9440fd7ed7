use anyhow::Result;
use clap::Args;
use samgov_lib::validation;
use samgov_lib::OpportunitySearchClient;

use crate::output::{print_opportunities, OutputFormat};

#[derive(Args)]
pub struct RecentArgs {
    /// First posted date (YYYY-MM-DD or MM/DD/YYYY). Defaults to yesterday.
    #[arg(long)]
    pub from: Option<String>,

    /// Last posted date (YYYY-MM-DD or MM/DD/YYYY). Defaults to today.
    #[arg(long)]
    pub to: Option<String>,
}

pub async fn run(
    args: &RecentArgs,
    client: &OpportunitySearchClient,
    format: &OutputFormat,
) -> Result<()> {
    let from = args
        .from
        .as_deref()
        .map(|d| validation::validate_date("start_date", d))
        .transpose()?;
    let to = args
        .to
        .as_deref()
        .map(|d| validation::validate_date("end_date", d))
        .transpose()?;

    let opportunities = client.get_all_opportunities(from, to).await?;
    eprintln!("{} opportunities", opportunities.len());
    print_opportunities(&opportunities, format)
}
