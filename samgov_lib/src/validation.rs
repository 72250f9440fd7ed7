use chrono::NaiveDate;
use samgov_api::types::ProcurementType;
use samgov_api::OpportunityQuery;

use crate::error::SamGovError;

/// Longest allowed span between `postedFrom` and `postedTo`, in days.
pub const MAX_RANGE_DAYS: i64 = 365;

pub const STATE_CODE_LENGTH: usize = 2;
pub const ZIP_CODE_LENGTH: usize = 5;

/// Date formats accepted from text input: ISO first, then the API's own format.
const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a calendar date given as text, `YYYY-MM-DD` or `MM/DD/YYYY`.
///
/// Library callers pass [`NaiveDate`] values directly; this is for text
/// boundaries such as the command line.
pub fn validate_date(field: &'static str, input: &str) -> Result<NaiveDate, SamGovError> {
    let trimmed = input.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            SamGovError::invalid(
                field,
                trimmed,
                "expected a calendar date as YYYY-MM-DD or MM/DD/YYYY",
            )
        })
}

/// Validate a procurement type code against the fixed set of 11 codes.
pub fn validate_procurement_type(input: &str) -> Result<ProcurementType, SamGovError> {
    input.parse::<ProcurementType>().map_err(|_| {
        let codes: Vec<&str> = ProcurementType::ALL.iter().map(|p| p.code()).collect();
        SamGovError::invalid(
            "procurement_type",
            input,
            format!("unknown procurement type. Valid codes: {}", codes.join(", ")),
        )
    })
}

/// Validate a place-of-performance state: exactly 2 characters.
pub fn validate_state(input: &str) -> Result<&str, SamGovError> {
    if input.chars().count() == STATE_CODE_LENGTH {
        Ok(input)
    } else {
        Err(SamGovError::invalid(
            "place_of_performance_state",
            input,
            "expected a 2-letter state abbreviation",
        ))
    }
}

/// Validate a place-of-performance zip code: exactly 5 characters.
pub fn validate_zip(input: &str) -> Result<&str, SamGovError> {
    if input.chars().count() == ZIP_CODE_LENGTH {
        Ok(input)
    } else {
        Err(SamGovError::invalid(
            "place_of_performance_zip",
            input,
            "expected a 5-digit zip code",
        ))
    }
}

/// Validate the page size: must be 0..=1000.
pub fn validate_limit(limit: i64) -> Result<i64, SamGovError> {
    if !(0..=OpportunityQuery::MAX_LIMIT).contains(&limit) {
        return Err(SamGovError::invalid(
            "limit",
            limit,
            format!("must be between 0 and {}", OpportunityQuery::MAX_LIMIT),
        ));
    }
    Ok(limit)
}

/// Validate that the posted-date range spans at most one year.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), SamGovError> {
    let days = (end - start).num_days();
    if days > MAX_RANGE_DAYS {
        return Err(SamGovError::invalid(
            "date_range",
            format!("{} to {}", start, end),
            format!("range is {} days, at most {} allowed", days, MAX_RANGE_DAYS),
        ));
    }
    Ok(())
}
