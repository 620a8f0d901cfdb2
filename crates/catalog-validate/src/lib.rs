//! Product record validation.
//!
//! [`validate_product`] applies the field rules to one record.
//! [`find_defective_products`] runs it over a batch and keeps the records that
//! failed at least one rule.

mod checks;
mod scan;

pub use checks::validate_product;
pub use scan::find_defective_products;
