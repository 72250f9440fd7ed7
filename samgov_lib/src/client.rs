//! Paginating search client over the raw API client.

use chrono::{Days, Local, NaiveDate};
use samgov_api::types::Opportunity;
use samgov_api::Client;

use crate::error::SamGovError;
use crate::request::SearchRequest;

/// Searches sam.gov contract opportunities and walks every result page.
///
/// Pages are fetched one at a time; a failed page aborts the search and
/// discards what was already fetched.
#[derive(Clone, Debug, Default)]
pub struct OpportunitySearchClient {
    inner: Client,
}

impl OpportunitySearchClient {
    /// Creates a client for the production API.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    /// Wraps an already configured API client.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// Fetches every opportunity posted in the given range.
    ///
    /// A missing `end_date` means today; a missing `start_date` means
    /// yesterday. No other filters are applied.
    pub async fn get_all_opportunities(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Opportunity>, SamGovError> {
        let (start_date, end_date) =
            resolve_date_range(start_date, end_date, Local::now().date_naive());
        self.search_opportunities(&SearchRequest::new(start_date, end_date))
            .await
    }

    /// Validates the request, then fetches pages until a short page is seen.
    ///
    /// Records are returned in page order, then in the order the API listed
    /// them within each page.
    pub async fn search_opportunities(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Opportunity>, SamGovError> {
        let mut query = request.to_query()?;
        let mut results = Vec::new();
        let mut pages = 0usize;

        loop {
            tracing::debug!(
                "Fetching opportunities page offset={} limit={}",
                query.offset,
                query.limit
            );
            let page = self.inner.search(&query).await?;
            pages += 1;

            let fetched = page.opportunities_data.len();
            results.extend(page.opportunities_data);

            if !has_next_page(page.total_records, query.limit, query.offset, fetched) {
                break;
            }
            query.advance();
        }

        tracing::info!(
            "Fetched {} opportunities in {} page(s) for {} to {}",
            results.len(),
            pages,
            request.start_date,
            request.end_date
        );
        Ok(results)
    }
}

/// Fills in the defaults used by [`OpportunitySearchClient::get_all_opportunities`]:
/// `end` falls back to `today`, `start` to the day before `today`.
pub fn resolve_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let end = end.unwrap_or(today);
    let start = start.unwrap_or_else(|| today.checked_sub_days(Days::new(1)).unwrap_or(today));
    (start, end)
}

/// Whether another page should be requested after the page at `offset`.
///
/// A page is full when the reported `totalRecords` reaches `limit`. With a
/// zero limit the offset cannot move, and an empty page past the first one
/// means the results are exhausted.
fn has_next_page(total_records: i64, limit: i64, offset: i64, fetched: usize) -> bool {
    if limit == 0 {
        return false;
    }
    if offset > 0 && fetched == 0 {
        return false;
    }
    total_records >= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_to_yesterday_and_today() {
        let today = date(2024, 3, 1);
        assert_eq!(
            resolve_date_range(None, None, today),
            (date(2024, 2, 29), date(2024, 3, 1))
        );
    }

    #[test]
    fn explicit_dates_are_kept() {
        let today = date(2024, 3, 1);
        assert_eq!(
            resolve_date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 15)), today),
            (date(2024, 1, 1), date(2024, 1, 15))
        );
    }

    #[test]
    fn only_end_given_start_still_defaults_to_yesterday() {
        let today = date(2024, 1, 1);
        assert_eq!(
            resolve_date_range(None, Some(date(2023, 12, 1)), today),
            (date(2023, 12, 31), date(2023, 12, 1))
        );
    }

    #[test]
    fn full_page_continues() {
        assert!(has_next_page(1000, 1000, 0, 1000));
        assert!(has_next_page(5000, 1000, 1000, 1000));
    }

    #[test]
    fn short_page_stops() {
        assert!(!has_next_page(250, 1000, 1000, 250));
        assert!(!has_next_page(0, 1000, 0, 0));
    }

    #[test]
    fn zero_limit_stops() {
        assert!(!has_next_page(10, 0, 0, 0));
    }

    #[test]
    fn empty_page_after_first_stops() {
        assert!(!has_next_page(5000, 1000, 5000, 0));
        assert!(has_next_page(1000, 1000, 0, 0));
    }
}
