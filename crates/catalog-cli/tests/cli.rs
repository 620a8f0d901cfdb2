//! End-to-end tests for the `catalog-qa` binary using local catalog files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn catalog_qa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catalog-qa"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CATALOG_QA_URL")
        .output()
        .expect("run catalog-qa")
}

fn write_json(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn catalog() -> Value {
    json!([
        {"id": 1, "title": "Backpack", "price": 109.95, "rating": {"rate": 3.9, "count": 120}},
        {"id": 2, "title": "Mens Casual T-Shirt", "price": -1, "rating": {"rate": 4.1}},
        {"id": 3, "title": "Jacket", "price": 55.99, "rating": {"rate": 4.7}},
        {"id": 4, "price": 15.99, "rating": {"rate": 2.1}},
    ])
}

#[test]
fn test_scan_input_prints_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "products.json", &catalog());

    let output = catalog_qa(&["scan", "--input", &input]);

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_products"], json!(4));
    assert_eq!(report["defective_count"], json!(2));
    assert_eq!(report["defects"][0]["index"], json!(1));
    assert_eq!(report["defects"][0]["id"], json!(2));
    assert_eq!(
        report["defects"][0]["issues"],
        json!([{"field": "price", "message": "must not be negative"}])
    );
    assert_eq!(report["defects"][1]["index"], json!(3));
    assert_eq!(report["defects"][1]["title"], json!(null));
}

#[test]
fn test_scan_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "products.json", &catalog());

    let output = catalog_qa(&["scan", "--input", &input, "--format", "text"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(
        "- idx=1 id=2 title=\"Mens Casual T-Shirt\" -> price: must not be negative"
    ));
    assert!(stdout.contains("Scanned 4 products, 2 defective."));
}

#[test]
fn test_scan_fail_on_defects() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "products.json", &catalog());

    let output = catalog_qa(&["scan", "--input", &input, "--fail-on-defects"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_scan_clean_catalog_with_fail_on_defects() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(
        dir.path(),
        "products.json",
        &json!([{"id": 1, "title": "A", "price": 1.0, "rating": {"rate": 5}}]),
    );

    let output = catalog_qa(&["scan", "--input", &input, "--fail-on-defects"]);

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["defects"], json!([]));
}

#[test]
fn test_scan_source_failure_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "products.json", &json!({"products": []}));

    let output = catalog_qa(&["scan", "--input", &input]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error fetching products"));
    assert!(stderr.contains("expected a list of products"));
}

#[test]
fn test_scan_missing_input_file_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let output = catalog_qa(&["scan", "--input", &missing.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_check_valid_product() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(
        dir.path(),
        "product.json",
        &json!({"title": "A", "price": 1.0, "rating": {"rate": 5}}),
    );

    let output = catalog_qa(&["check", &file]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("OK: "));
}

#[test]
fn test_check_defective_product() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(
        dir.path(),
        "product.json",
        &json!({"title": "C", "price": 0, "rating": {"rate": 6}}),
    );

    let output = catalog_qa(&["check", &file]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 issue(s)"));
    assert!(stdout.contains("- rating.rate: must not exceed 5"));
}

#[test]
fn test_check_unparseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let output = catalog_qa(&["check", &path.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("error: parse"));
}
