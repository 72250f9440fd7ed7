mod common;
pub use self::common::{format_date, DATE_FORMAT};

mod opportunity;
pub use self::opportunity::OpportunityQuery;
