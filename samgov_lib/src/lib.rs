//! Library layer for the sam.gov opportunities search: input validation,
//! query construction and pagination over the raw API client.

pub mod client;
pub mod error;
pub mod request;
pub mod validation;

pub use samgov_api;
pub use samgov_api::types;
pub use samgov_api::OpportunityQuery;

pub use client::{resolve_date_range, OpportunitySearchClient};
pub use error::SamGovError;
pub use request::SearchRequest;
