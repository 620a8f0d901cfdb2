//! Defect report generation.
//!
//! Turns the scanner's [`DefectEntry`](catalog_model::DefectEntry) list into an
//! owned, serializable [`DefectReport`] and renders it as:
//!
//! - **JSON**: `{"defects": [...], "total_products": N, "defective_count": M}`
//! - **Text**: one `- idx=... id=... title=... -> field: message` line per defect

mod render;
mod report;

pub use render::{render_json, render_text};
pub use report::{DefectReport, DefectSummary};
