//! Caller-facing search parameters and their conversion into a wire query.

use chrono::NaiveDate;
use samgov_api::OpportunityQuery;

use crate::error::SamGovError;
use crate::validation::{
    validate_date_range, validate_limit, validate_procurement_type, validate_state, validate_zip,
};

/// Filters for an opportunity search.
///
/// Text filters are kept exactly as the caller gave them and are checked by
/// [`SearchRequest::to_query`]. Empty strings count as unset.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub limit: i64,
    /// Single-letter procurement type code (e.g. `o` for Solicitation).
    pub procurement_type: Option<String>,
    pub solicitation_number: Option<String>,
    pub notice_id: Option<String>,
    pub title: Option<String>,
    pub department_name: Option<String>,
    pub agency_name: Option<String>,
    pub place_of_performance_state: Option<String>,
    pub place_of_performance_zip: Option<String>,
    pub org_code: Option<String>,
    pub org_name: Option<String>,
    pub set_aside: Option<String>,
    pub set_aside_description: Option<String>,
    pub naics_code: Option<String>,
    pub classification_code: Option<String>,
    pub response_deadline_start: Option<NaiveDate>,
    pub response_deadline_end: Option<NaiveDate>,
}

impl SearchRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            limit: OpportunityQuery::MAX_LIMIT,
            procurement_type: None,
            solicitation_number: None,
            notice_id: None,
            title: None,
            department_name: None,
            agency_name: None,
            place_of_performance_state: None,
            place_of_performance_zip: None,
            org_code: None,
            org_name: None,
            set_aside: None,
            set_aside_description: None,
            naics_code: None,
            classification_code: None,
            response_deadline_start: None,
            response_deadline_end: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_procurement_type(mut self, procurement_type: &str) -> Self {
        self.procurement_type = Some(procurement_type.to_string());
        self
    }

    pub fn with_solicitation_number(mut self, solicitation_number: &str) -> Self {
        self.solicitation_number = Some(solicitation_number.to_string());
        self
    }

    pub fn with_notice_id(mut self, notice_id: &str) -> Self {
        self.notice_id = Some(notice_id.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_department_name(mut self, department_name: &str) -> Self {
        self.department_name = Some(department_name.to_string());
        self
    }

    pub fn with_agency_name(mut self, agency_name: &str) -> Self {
        self.agency_name = Some(agency_name.to_string());
        self
    }

    pub fn with_place_of_performance_state(mut self, state: &str) -> Self {
        self.place_of_performance_state = Some(state.to_string());
        self
    }

    pub fn with_place_of_performance_zip(mut self, zip: &str) -> Self {
        self.place_of_performance_zip = Some(zip.to_string());
        self
    }

    pub fn with_org_code(mut self, org_code: &str) -> Self {
        self.org_code = Some(org_code.to_string());
        self
    }

    pub fn with_org_name(mut self, org_name: &str) -> Self {
        self.org_name = Some(org_name.to_string());
        self
    }

    pub fn with_set_aside(mut self, set_aside: &str) -> Self {
        self.set_aside = Some(set_aside.to_string());
        self
    }

    pub fn with_set_aside_description(mut self, set_aside_description: &str) -> Self {
        self.set_aside_description = Some(set_aside_description.to_string());
        self
    }

    pub fn with_naics_code(mut self, naics_code: &str) -> Self {
        self.naics_code = Some(naics_code.to_string());
        self
    }

    pub fn with_classification_code(mut self, classification_code: &str) -> Self {
        self.classification_code = Some(classification_code.to_string());
        self
    }

    pub fn with_response_deadline_start(mut self, date: NaiveDate) -> Self {
        self.response_deadline_start = Some(date);
        self
    }

    pub fn with_response_deadline_end(mut self, date: NaiveDate) -> Self {
        self.response_deadline_end = Some(date);
        self
    }

    /// Validates the request and builds the first-page query.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// procurement type, state, zip, limit, then the posted-date span.
    pub fn to_query(&self) -> Result<OpportunityQuery, SamGovError> {
        let procurement_type = present(&self.procurement_type)
            .map(validate_procurement_type)
            .transpose()?;
        let state = present(&self.place_of_performance_state)
            .map(validate_state)
            .transpose()?;
        let zip = present(&self.place_of_performance_zip)
            .map(validate_zip)
            .transpose()?;
        let limit = validate_limit(self.limit)?;
        validate_date_range(self.start_date, self.end_date)?;

        let mut query = OpportunityQuery::new(self.start_date, self.end_date).with_limit(limit);
        if let Some(date) = self.response_deadline_end {
            query = query.with_response_deadline_to(date);
        }
        if let Some(date) = self.response_deadline_start {
            query = query.with_response_deadline_from(date);
        }
        if let Some(procurement_type) = procurement_type {
            query = query.with_procurement_type(procurement_type);
        }

        type Setter = fn(OpportunityQuery, &str) -> OpportunityQuery;
        let filters: [(Option<&str>, Setter); 13] = [
            (present(&self.solicitation_number), OpportunityQuery::with_solicitation_number),
            (present(&self.notice_id), OpportunityQuery::with_notice_id),
            (present(&self.title), OpportunityQuery::with_title),
            (present(&self.department_name), OpportunityQuery::with_department_name),
            (present(&self.agency_name), OpportunityQuery::with_agency_name),
            (state, OpportunityQuery::with_state),
            (zip, OpportunityQuery::with_zip),
            (present(&self.org_code), OpportunityQuery::with_organization_code),
            (present(&self.org_name), OpportunityQuery::with_organization_name),
            (present(&self.set_aside), OpportunityQuery::with_set_aside),
            (present(&self.set_aside_description), OpportunityQuery::with_set_aside_description),
            (present(&self.naics_code), OpportunityQuery::with_naics_code),
            (present(&self.classification_code), OpportunityQuery::with_classification_code),
        ];
        for (value, set) in filters {
            if let Some(value) = value {
                query = set(query, value);
            }
        }
        Ok(query)
    }
}

/// A filter value that should be sent: set and non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
