use crate::issue::ValidationIssue;
use crate::record::ProductRecord;

/// A record with at least one issue, together with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DefectEntry<'a> {
    pub index: usize,
    pub record: &'a ProductRecord,
    pub issues: Vec<ValidationIssue>,
}
