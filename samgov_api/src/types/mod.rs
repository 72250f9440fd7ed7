mod page;
pub use self::page::SearchPage;

mod opportunity;
pub use self::opportunity::{NoticeID, Opportunity};

mod procurement_type;
pub use self::procurement_type::ProcurementType;
