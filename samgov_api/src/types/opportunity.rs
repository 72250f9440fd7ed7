//! Opportunity records as returned in `opportunitiesData`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a notice (a 32-character hex string).
pub type NoticeID = String;

/// A single contract opportunity.
///
/// The commonly used fields are typed; everything else the API returns is
/// kept verbatim in [`Opportunity::extra`] so that records survive a
/// serialize/deserialize cycle without losing data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub notice_id: Option<NoticeID>,

    pub title: Option<String>,

    pub solicitation_number: Option<String>,

    /// Dotted department/agency/office path, e.g. `DEPT OF DEFENSE.DEPT OF THE ARMY`.
    pub full_parent_path_name: Option<String>,

    pub posted_date: Option<String>,

    /// Procurement type label (e.g. "Solicitation").
    #[serde(rename = "type")]
    pub notice_type: Option<String>,

    pub base_type: Option<String>,

    pub type_of_set_aside: Option<String>,

    pub type_of_set_aside_description: Option<String>,

    #[serde(rename = "responseDeadLine")]
    pub response_deadline: Option<String>,

    pub naics_code: Option<String>,

    pub classification_code: Option<String>,

    /// "Yes" or "No".
    pub active: Option<String>,

    pub ui_link: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Opportunity {
    /// Last segment of [`Opportunity::full_parent_path_name`], typically the
    /// contracting office or sub-tier agency.
    pub fn agency(&self) -> Option<&str> {
        self.full_parent_path_name
            .as_deref()
            .and_then(|path| path.rsplit('.').next())
            .filter(|segment| !segment.is_empty())
    }
}
