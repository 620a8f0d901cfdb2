use catalog_model::join_issues;

use crate::report::{DefectReport, DefectSummary};

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &DefectReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render the report as a plain-text listing, without a trailing newline.
pub fn render_text(report: &DefectReport) -> String {
    let mut lines = Vec::with_capacity(report.defects.len() + 2);
    if report.has_defects() {
        lines.push("Detected defective products (index -> issues):".to_string());
        lines.extend(report.defects.iter().map(defect_line));
    } else {
        lines.push("No defective products detected.".to_string());
    }
    lines.push(format!(
        "Scanned {} products, {} defective.",
        report.total_products, report.defective_count
    ));
    lines.join("\n")
}

fn defect_line(defect: &DefectSummary) -> String {
    format!(
        "- idx={} id={} title={} -> {}",
        defect.index,
        defect.id,
        defect.title,
        join_issues(&defect.issues)
    )
}
