use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::{info, info_span};

use catalog_cli::summary::print_summary;
use catalog_fetch::{FetchConfig, fetch_products, load_products_from_path};
use catalog_model::{ProductRecord, ValidationIssue};
use catalog_report::{DefectReport, render_json, render_text};
use catalog_validate::{find_defective_products, validate_product};

use crate::cli::{CheckArgs, ReportFormatArg, ScanArgs};

/// Fetch (or load) the catalog, scan it, and print the report.
pub fn run_scan(args: &ScanArgs) -> Result<DefectReport> {
    let products = match &args.input {
        Some(path) => {
            let _span = info_span!("load", path = %path.display()).entered();
            load_products_from_path(path)
                .with_context(|| format!("load products from {}", path.display()))?
        }
        None => {
            let config = fetch_config(args)?;
            let _span = info_span!("fetch", url = %config.url).entered();
            fetch_products(&config).context("fetch products")?
        }
    };

    let defects = {
        let _span = info_span!("scan", products = products.len()).entered();
        find_defective_products(&products)
    };
    let report = DefectReport::from_scan(&products, &defects);
    info!(
        total = report.total_products,
        defective = report.defective_count,
        issues = report.issue_count(),
        "scan complete"
    );

    match args.format {
        ReportFormatArg::Json => println!("{}", render_json(&report).context("render report")?),
        ReportFormatArg::Text => println!("{}", render_text(&report)),
        ReportFormatArg::Table => print_summary(&report),
    }
    Ok(report)
}

/// Validate one product read from a file and print its issues.
pub fn run_check(args: &CheckArgs) -> Result<Vec<ValidationIssue>> {
    let record = read_record(&args.file)?;
    let issues = validate_product(&record);
    if issues.is_empty() {
        println!("OK: {}", args.file.display());
    } else {
        println!("{}: {} issue(s)", args.file.display(), issues.len());
        for issue in &issues {
            println!("- {issue}");
        }
    }
    Ok(issues)
}

fn fetch_config(args: &ScanArgs) -> Result<FetchConfig> {
    let timeout = Duration::try_from_secs_f64(args.timeout)
        .map_err(|_| anyhow!("invalid timeout: {} seconds", args.timeout))?;
    if timeout.is_zero() {
        return Err(anyhow!("timeout must be greater than zero"));
    }
    Ok(FetchConfig::default()
        .with_url(args.url.clone())
        .with_timeout(timeout))
}

fn read_record(path: &Path) -> Result<ProductRecord> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&body).with_context(|| format!("parse {}", path.display()))?;
    Ok(ProductRecord::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_args(timeout: f64) -> ScanArgs {
        ScanArgs {
            url: "http://localhost:9000/products".to_string(),
            timeout,
            input: None,
            format: ReportFormatArg::Json,
            fail_on_defects: false,
        }
    }

    #[test]
    fn fetch_config_uses_url_and_timeout() {
        let config = fetch_config(&scan_args(2.5)).unwrap();
        assert_eq!(config.url, "http://localhost:9000/products");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn fetch_config_rejects_bad_timeouts() {
        assert!(fetch_config(&scan_args(0.0)).is_err());
        assert!(fetch_config(&scan_args(-1.0)).is_err());
        assert!(fetch_config(&scan_args(f64::NAN)).is_err());
    }
}
