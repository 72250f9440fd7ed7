//! Shared wire formatting for query parameters.

use chrono::NaiveDate;

/// Date format the search API expects for every date parameter.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Formats a date as `MM/DD/YYYY`. Output is numeric only, so it does not
/// depend on locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
