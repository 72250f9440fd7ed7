use chrono::NaiveDate;
use url::Url;

use crate::types::ProcurementType;

use super::format_date;

/// Query parameters for the opportunities search endpoint.
///
/// `postedFrom`, `postedTo`, `limit` and `offset` are always sent. Every
/// other parameter is sent only when set to a non-empty value.
#[derive(Clone, Debug)]
pub struct OpportunityQuery {
    pub posted_from: NaiveDate,
    pub posted_to: NaiveDate,
    /// Records per page. Defaults to 1000, the API maximum.
    pub limit: i64,
    /// Zero-based index of the first record of the page.
    pub offset: i64,
    pub response_deadline_from: Option<NaiveDate>,
    pub response_deadline_to: Option<NaiveDate>,
    pub procurement_type: Option<ProcurementType>,
    pub solicitation_number: Option<String>,
    pub notice_id: Option<String>,
    pub title: Option<String>,
    pub department_name: Option<String>,
    pub agency_name: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub organization_code: Option<String>,
    pub organization_name: Option<String>,
    pub set_aside: Option<String>,
    pub set_aside_description: Option<String>,
    pub naics_code: Option<String>,
    pub classification_code: Option<String>,
}

impl OpportunityQuery {
    pub const MAX_LIMIT: i64 = 1000;

    /// Creates a query for notices posted between the two dates, first page,
    /// full page size.
    pub fn new(posted_from: NaiveDate, posted_to: NaiveDate) -> Self {
        Self {
            posted_from,
            posted_to,
            limit: Self::MAX_LIMIT,
            offset: 0,
            response_deadline_from: None,
            response_deadline_to: None,
            procurement_type: None,
            solicitation_number: None,
            notice_id: None,
            title: None,
            department_name: None,
            agency_name: None,
            state: None,
            zip: None,
            organization_code: None,
            organization_name: None,
            set_aside: None,
            set_aside_description: None,
            naics_code: None,
            classification_code: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Moves the offset forward by one page.
    pub fn advance(&mut self) {
        self.offset += self.limit;
    }

    pub fn with_response_deadline_from(mut self, date: NaiveDate) -> Self {
        self.response_deadline_from = Some(date);
        self
    }

    pub fn with_response_deadline_to(mut self, date: NaiveDate) -> Self {
        self.response_deadline_to = Some(date);
        self
    }

    pub fn with_procurement_type(mut self, procurement_type: ProcurementType) -> Self {
        self.procurement_type = Some(procurement_type);
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

    /// Sub-tier agency name, sent as `subtier`.
    pub fn with_agency_name(mut self, agency_name: &str) -> Self {
        self.agency_name = Some(agency_name.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_zip(mut self, zip: &str) -> Self {
        self.zip = Some(zip.to_string());
        self
    }

    pub fn with_organization_code(mut self, organization_code: &str) -> Self {
        self.organization_code = Some(organization_code.to_string());
        self
    }

    pub fn with_organization_name(mut self, organization_name: &str) -> Self {
        self.organization_name = Some(organization_name.to_string());
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

    /// Wire parameters in the order they are appended to the URL.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("postedFrom", format_date(self.posted_from)),
            ("postedTo", format_date(self.posted_to)),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(date) = self.response_deadline_to {
            params.push(("rdlto", format_date(date)));
        }
        if let Some(date) = self.response_deadline_from {
            params.push(("rdlfrom", format_date(date)));
        }
        if let Some(procurement_type) = self.procurement_type {
            params.push(("ptype", procurement_type.code().to_string()));
        }

        let filters = [
            ("solnum", &self.solicitation_number),
            ("noticeid", &self.notice_id),
            ("title", &self.title),
            ("deptname", &self.department_name),
            ("subtier", &self.agency_name),
            ("state", &self.state),
            ("zip", &self.zip),
            ("organizationCode", &self.organization_code),
            ("organizationName", &self.organization_name),
            ("typeOfSetAside", &self.set_aside),
            ("typeOfSetAsideDescription", &self.set_aside_description),
            ("ncode", &self.naics_code),
            ("ccode", &self.classification_code),
        ];
        for (name, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((name, value.to_string()));
            }
        }
        params
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (name, value) in self.params() {
            url.query_pairs_mut().append_pair(name, &value);
        }
        url
    }
}
