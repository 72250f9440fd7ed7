use anyhow::Result;
use samgov_lib::types::ProcurementType;

use crate::output::{print_procurement_types, OutputFormat};

pub fn run(format: &OutputFormat) -> Result<()> {
    print_procurement_types(&ProcurementType::ALL, format)
}
