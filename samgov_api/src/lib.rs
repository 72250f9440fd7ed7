mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_TIMEOUT, SEARCH_PATH};
pub use self::errors::Error;
pub use self::query::{format_date, OpportunityQuery, DATE_FORMAT};
