//! Catalog domain module.
//!
//! This crate owns the product catalog for the storefront:
//! - the product model and its closed category set,
//! - the bundled default catalog and its data version,
//! - load-or-seed initialization and write-through persistence,
//! - the pure filter engine used by the catalog page,
//! - navigation/selection state for the inquiry flow.

pub mod defaults;
pub mod filter;
pub mod product;
pub mod session;
pub mod storage;
pub mod store;

pub use defaults::{DATA_VERSION, default_products};
pub use filter::{CategoryFilter, FilterCriteria, filter};
pub use product::{Category, Pricing, Product, ProductPatch};
pub use session::{Page, SessionState};
pub use storage::{
    DATA_VERSION_KEY, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, PRODUCTS_KEY,
    StorageError,
};
pub use store::{CatalogSnapshot, CatalogStore, Initialized, LoadOutcome, SeedReason, initialize};
