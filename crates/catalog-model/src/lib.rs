pub mod defect;
pub mod error;
pub mod issue;
pub mod record;

pub use defect::DefectEntry;
pub use error::{ModelError, Result};
pub use issue::{ValidationIssue, join_issues};
pub use record::{FieldValue, Fields, ProductRecord, parse_records};
