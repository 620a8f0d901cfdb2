//! Data sources for product catalogs.
//!
//! Records come either from the catalog HTTP API ([`fetch_products`]) or from
//! a JSON file on disk ([`load_products_from_path`]). Both require the
//! top-level document to be a JSON array and hand back the elements untouched;
//! field-level checking is left to the validator.
//!
//! # Example
//!
//! ```no_run
//! use catalog_fetch::{FetchConfig, fetch_products};
//!
//! fn count_products() -> catalog_fetch::Result<usize> {
//!     let products = fetch_products(&FetchConfig::default())?;
//!     Ok(products.len())
//! }
//! ```

mod client;
mod config;
mod error;
mod file;

pub use client::{CatalogClient, fetch_products};
pub use config::{DEFAULT_PRODUCTS_URL, DEFAULT_TIMEOUT, FetchConfig};
pub use error::{FetchError, Result};
pub use file::load_products_from_path;
