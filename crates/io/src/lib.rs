// Unit file I/O operations

pub mod catalog;
pub mod store;
pub mod unit_json;
pub mod unit_toml;

pub use catalog::{CatalogError, FileCatalog};
pub use store::FileStore;
