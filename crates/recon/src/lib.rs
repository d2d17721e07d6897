//! `mechbay-recon` — omni-unit pod-equipment reconciliation engine.
//!
//! Pure engine crate: consumes the unit catalog and unit storage through
//! traits, returns reports. No file formats or CLI dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod propagate;
pub mod resolver;

pub use config::ReconConfig;
pub use engine::run;
pub use error::StoreError;
pub use model::{ReconReport, UnitCatalog, UnitStore, UnitSummary};
