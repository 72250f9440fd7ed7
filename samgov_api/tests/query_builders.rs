use chrono::NaiveDate;
use samgov_api::types::ProcurementType;
use samgov_api::{format_date, OpportunityQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/prod/opportunities/v1/search").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn query_defaults() {
    let url = OpportunityQuery::new(date(2024, 5, 1), date(2024, 5, 2)).add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(pairs.len(), 4);
    assert_eq!(value(&pairs, "postedFrom"), Some("05/01/2024"));
    assert_eq!(value(&pairs, "postedTo"), Some("05/02/2024"));
    assert_eq!(value(&pairs, "limit"), Some("1000"));
    assert_eq!(value(&pairs, "offset"), Some("0"));
}

#[test]
fn query_response_deadline_range() {
    let url = OpportunityQuery::new(date(2024, 5, 1), date(2024, 5, 2))
        .with_response_deadline_from(date(2024, 6, 1))
        .with_response_deadline_to(date(2024, 6, 30))
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(value(&pairs, "rdlfrom"), Some("06/01/2024"));
    assert_eq!(value(&pairs, "rdlto"), Some("06/30/2024"));
}

#[test]
fn query_all_filters() {
    let url = OpportunityQuery::new(date(2024, 5, 1), date(2024, 5, 2))
        .with_limit(100)
        .with_offset(300)
        .with_procurement_type(ProcurementType::CombinedSynopsisSolicitation)
        .with_solicitation_number("W91247-24-Q-0012")
        .with_notice_id("0a1b2c3d")
        .with_title("Janitorial Services")
        .with_department_name("DEPT OF DEFENSE")
        .with_agency_name("DEPT OF THE ARMY")
        .with_state("NC")
        .with_zip("28310")
        .with_organization_code("021")
        .with_organization_name("MICC")
        .with_set_aside("SBA")
        .with_set_aside_description("Total Small Business")
        .with_naics_code("561720")
        .with_classification_code("S201")
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    assert_eq!(pairs.len(), 18);
    assert_eq!(value(&pairs, "limit"), Some("100"));
    assert_eq!(value(&pairs, "offset"), Some("300"));
    assert_eq!(value(&pairs, "ptype"), Some("k"));
    assert_eq!(value(&pairs, "solnum"), Some("W91247-24-Q-0012"));
    assert_eq!(value(&pairs, "noticeid"), Some("0a1b2c3d"));
    assert_eq!(value(&pairs, "title"), Some("Janitorial Services"));
    assert_eq!(value(&pairs, "deptname"), Some("DEPT OF DEFENSE"));
    assert_eq!(value(&pairs, "subtier"), Some("DEPT OF THE ARMY"));
    assert_eq!(value(&pairs, "state"), Some("NC"));
    assert_eq!(value(&pairs, "zip"), Some("28310"));
    assert_eq!(value(&pairs, "organizationCode"), Some("021"));
    assert_eq!(value(&pairs, "organizationName"), Some("MICC"));
    assert_eq!(value(&pairs, "typeOfSetAside"), Some("SBA"));
    assert_eq!(value(&pairs, "typeOfSetAsideDescription"), Some("Total Small Business"));
    assert_eq!(value(&pairs, "ncode"), Some("561720"));
    assert_eq!(value(&pairs, "ccode"), Some("S201"));
}

#[test]
fn query_omits_unset_filters() {
    let url = OpportunityQuery::new(date(2024, 5, 1), date(2024, 5, 2))
        .with_naics_code("541330")
        .add_to_url(&base_url());
    let pairs = pairs(&url);
    for key in [
        "rdlto", "rdlfrom", "ptype", "solnum", "noticeid", "title", "deptname", "subtier",
        "state", "zip", "organizationCode", "organizationName", "typeOfSetAside",
        "typeOfSetAsideDescription", "ccode",
    ] {
        assert!(value(&pairs, key).is_none(), "unexpected key {}", key);
    }
    assert_eq!(value(&pairs, "ncode"), Some("541330"));
}

#[test]
fn query_keeps_existing_path() {
    let url = OpportunityQuery::new(date(2024, 5, 1), date(2024, 5, 2)).add_to_url(&base_url());
    assert_eq!(url.path(), "/prod/opportunities/v1/search");
    assert_eq!(url.host_str(), Some("example.com"));
}

#[test]
fn date_format_is_month_day_year() {
    assert_eq!(format_date(date(2023, 11, 5)), "11/05/2023");
    assert_eq!(format_date(date(2024, 2, 29)), "02/29/2024");
}
