use std::fs;
use std::path::Path;

use catalog_model::{ProductRecord, parse_records};
use tracing::{debug, info};

use crate::error::Result;

/// Load products from a JSON file holding the same array the API returns.
pub fn load_products_from_path(path: &Path) -> Result<Vec<ProductRecord>> {
    debug!(path = %path.display(), "loading products");
    let body = fs::read_to_string(path)?;
    let products = parse_records(&body)?;
    info!(count = products.len(), "loaded products");
    Ok(products)
}
