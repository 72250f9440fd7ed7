use anyhow::Result;
use samgov_lib::types::{Opportunity, ProcurementType};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Parses the `--output` flag. Unknown values fall back to a table.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct OpportunityRow {
    #[tabled(rename = "Notice ID")]
    #[serde(rename = "Notice ID")]
    notice_id: String,
    #[tabled(rename = "Posted")]
    #[serde(rename = "Posted")]
    posted: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    notice_type: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Set-Aside")]
    #[serde(rename = "Set-Aside")]
    set_aside: String,
    #[tabled(rename = "Deadline")]
    #[serde(rename = "Deadline")]
    deadline: String,
}

#[derive(Tabled, Serialize)]
struct ProcurementTypeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
}

// -- Row builders --

fn build_opportunity_rows(opportunities: &[Opportunity]) -> Vec<OpportunityRow> {
    opportunities
        .iter()
        .map(|o| OpportunityRow {
            notice_id: o.notice_id.clone().unwrap_or_default(),
            posted: o.posted_date.clone().unwrap_or_default(),
            notice_type: o.notice_type.clone().unwrap_or_default(),
            title: o.title.clone().unwrap_or_default(),
            agency: o.agency().unwrap_or_default().to_string(),
            set_aside: o.type_of_set_aside.clone().unwrap_or_default(),
            deadline: o.response_deadline.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_procurement_type_rows(types: &[ProcurementType]) -> Vec<ProcurementTypeRow> {
    types
        .iter()
        .map(|t| ProcurementTypeRow {
            code: t.code().to_string(),
            label: t.label().to_string(),
        })
        .collect()
}

// -- Opportunities --

pub fn print_opportunities(opportunities: &[Opportunity], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&opportunities),
        OutputFormat::Table => print_table(build_opportunity_rows(opportunities), false),
        OutputFormat::Markdown => print_table(build_opportunity_rows(opportunities), true),
        OutputFormat::Csv => print_csv(build_opportunity_rows(opportunities))?,
    }
    Ok(())
}

// -- Procurement types --

pub fn print_procurement_types(types: &[ProcurementType], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&build_procurement_type_rows(types)),
        OutputFormat::Table => print_table(build_procurement_type_rows(types), false),
        OutputFormat::Markdown => print_table(build_procurement_type_rows(types), true),
        OutputFormat::Csv => print_csv(build_procurement_type_rows(types))?,
    }
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>, markdown: bool) {
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_opportunities_fixture() -> Vec<Opportunity> {
        let json_str = include_str!("../../samgov_api/tests/fixtures/search_page.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["opportunitiesData"].clone()).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_build_opportunity_rows_mapping() {
        let opportunities = load_opportunities_fixture();
        let rows = build_opportunity_rows(&opportunities);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.notice_id, "0a1b2c3d4e5f60718293a4b5c6d7e8f9");
        assert_eq!(row.posted, "2024-03-01");
        assert_eq!(row.notice_type, "Solicitation");
        assert_eq!(row.title, "Janitorial Services - Fort Liberty");
        assert_eq!(row.agency, "W6QM MICC FT LIBERTY");
        assert_eq!(row.set_aside, "SBA");
        assert_eq!(row.deadline, "2024-03-20T14:00:00-04:00");
    }

    #[test]
    fn test_build_opportunity_rows_missing_fields() {
        let opportunities = load_opportunities_fixture();
        let rows = build_opportunity_rows(&opportunities);

        let row = &rows[1];
        assert_eq!(row.set_aside, "");
        assert_eq!(row.deadline, "");
        assert_eq!(row.agency, "DEPT OF THE AIR FORCE");
    }

    #[test]
    fn test_build_opportunity_rows_empty() {
        let rows = build_opportunity_rows(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_build_procurement_type_rows() {
        let rows = build_procurement_type_rows(&ProcurementType::ALL);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].code, "u");
        assert_eq!(rows[0].label, "Justification and Approval (J&A)");
        assert!(rows
            .iter()
            .any(|r| r.code == "o" && r.label == "Solicitation"));
    }

    #[test]
    fn test_opportunity_csv_headers() {
        let opportunities = load_opportunities_fixture();
        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in build_opportunity_rows(&opportunities) {
            wtr.serialize(row).unwrap();
        }
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "Notice ID,Posted,Type,Title,Agency,Set-Aside,Deadline"
        );
        assert_eq!(out.lines().count(), 3);
    }
}
