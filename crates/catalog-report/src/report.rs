use serde::Serialize;
use serde_json::Value;

use catalog_model::{DefectEntry, ProductRecord, ValidationIssue};

/// One defective product as it appears in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectSummary {
    /// Position of the product in the fetched list.
    pub index: usize,
    /// The product's `id`, copied verbatim.
    pub id: Value,
    /// The product's `title`, copied verbatim.
    pub title: Value,
    pub issues: Vec<ValidationIssue>,
}

impl From<&DefectEntry<'_>> for DefectSummary {
    fn from(entry: &DefectEntry<'_>) -> Self {
        Self {
            index: entry.index,
            id: entry.record.id().clone(),
            title: entry.record.title().clone(),
            issues: entry.issues.clone(),
        }
    }
}

/// Result of scanning a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefectReport {
    pub defects: Vec<DefectSummary>,
    pub total_products: usize,
    pub defective_count: usize,
}

impl DefectReport {
    /// Build a report from the scanned products and the scanner's output.
    pub fn from_scan(products: &[ProductRecord], defects: &[DefectEntry<'_>]) -> Self {
        let defects: Vec<DefectSummary> = defects.iter().map(DefectSummary::from).collect();
        Self {
            total_products: products.len(),
            defective_count: defects.len(),
            defects,
        }
    }

    pub fn has_defects(&self) -> bool {
        self.defective_count > 0
    }

    /// Total number of issues across all defective products.
    pub fn issue_count(&self) -> usize {
        self.defects.iter().map(|defect| defect.issues.len()).sum()
    }
}
