use serde::{Deserialize, Serialize};

use super::Opportunity;

/// One page of search results.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub total_records: i64,

    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub offset: Option<i64>,

    #[serde(default)]
    pub opportunities_data: Vec<Opportunity>,
}
