//! Catalog — phone records and the read-only per-request index.

pub mod catalog;
pub mod types;

pub use catalog::{CatalogIndex, CatalogSource, StaticCatalog};
pub use types::PhoneRecord;
