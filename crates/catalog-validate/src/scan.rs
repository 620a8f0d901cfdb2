use catalog_model::{DefectEntry, ProductRecord};
use tracing::{debug, info};

use crate::checks::validate_product;

/// Return the products with any validation issues, in input order.
pub fn find_defective_products(products: &[ProductRecord]) -> Vec<DefectEntry<'_>> {
    let defects: Vec<DefectEntry<'_>> = products
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let issues = validate_product(record);
            if issues.is_empty() {
                return None;
            }
            debug!(index, issues = issues.len(), "defective product");
            Some(DefectEntry {
                index,
                record,
                issues,
            })
        })
        .collect();
    info!(
        total = products.len(),
        defective = defects.len(),
        "scanned products"
    );
    defects
}
