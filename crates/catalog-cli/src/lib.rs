//! CLI library components for the catalog defect checker.

pub mod logging;
pub mod summary;
