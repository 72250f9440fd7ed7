use anyhow::Result;
use clap::Args;
use samgov_lib::validation;
use samgov_lib::{OpportunitySearchClient, SearchRequest};

use crate::output::{print_opportunities, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// First posted date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    pub from: String,

    /// Last posted date (YYYY-MM-DD or MM/DD/YYYY), at most one year after --from
    #[arg(long)]
    pub to: String,

    /// Records per page, 0-1000
    #[arg(long, default_value = "1000", allow_negative_numbers = true)]
    pub limit: i64,

    /// Procurement type code (see `samgov types`), e.g. o for Solicitation
    #[arg(long)]
    pub ptype: Option<String>,

    /// Solicitation number
    #[arg(long)]
    pub solnum: Option<String>,

    /// Notice ID
    #[arg(long)]
    pub notice_id: Option<String>,

    /// Notice title
    #[arg(long)]
    pub title: Option<String>,

    /// Department name (e.g. "DEPT OF DEFENSE")
    #[arg(long)]
    pub dept: Option<String>,

    /// Sub-tier agency name
    #[arg(long)]
    pub agency: Option<String>,

    /// Place of performance state (2-letter code)
    #[arg(long)]
    pub state: Option<String>,

    /// Place of performance zip code (5 digits)
    #[arg(long)]
    pub zip: Option<String>,

    /// Organization code
    #[arg(long)]
    pub org_code: Option<String>,

    /// Organization name
    #[arg(long)]
    pub org_name: Option<String>,

    /// Set-aside code (e.g. SBA, 8A, SDVOSBC)
    #[arg(long)]
    pub set_aside: Option<String>,

    /// Set-aside description
    #[arg(long)]
    pub set_aside_desc: Option<String>,

    /// NAICS code
    #[arg(long)]
    pub naics: Option<String>,

    /// Product/service classification code
    #[arg(long)]
    pub ccode: Option<String>,

    /// Earliest response deadline (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    pub deadline_from: Option<String>,

    /// Latest response deadline (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    pub deadline_to: Option<String>,
}

/// Converts command-line arguments into a search request. Dates are parsed
/// here; every other check happens when the request is run.
pub fn build_request(args: &SearchArgs) -> Result<SearchRequest> {
    let start = validation::validate_date("start_date", &args.from)?;
    let end = validation::validate_date("end_date", &args.to)?;
    let mut request = SearchRequest::new(start, end).with_limit(args.limit);

    if let Some(ref d) = args.deadline_from {
        request = request
            .with_response_deadline_start(validation::validate_date("response_deadline_start", d)?);
    }
    if let Some(ref d) = args.deadline_to {
        request = request
            .with_response_deadline_end(validation::validate_date("response_deadline_end", d)?);
    }

    request.procurement_type = args.ptype.clone();
    request.solicitation_number = args.solnum.clone();
    request.notice_id = args.notice_id.clone();
    request.title = args.title.clone();
    request.department_name = args.dept.clone();
    request.agency_name = args.agency.clone();
    request.place_of_performance_state = args.state.clone();
    request.place_of_performance_zip = args.zip.clone();
    request.org_code = args.org_code.clone();
    request.org_name = args.org_name.clone();
    request.set_aside = args.set_aside.clone();
    request.set_aside_description = args.set_aside_desc.clone();
    request.naics_code = args.naics.clone();
    request.classification_code = args.ccode.clone();
    Ok(request)
}

pub async fn run(
    args: &SearchArgs,
    client: &OpportunitySearchClient,
    format: &OutputFormat,
) -> Result<()> {
    let request = build_request(args)?;
    let opportunities = client.search_opportunities(&request).await?;
    eprintln!(
        "{} opportunities posted {} to {}",
        opportunities.len(),
        request.start_date,
        request.end_date
    );
    print_opportunities(&opportunities, format)
}
