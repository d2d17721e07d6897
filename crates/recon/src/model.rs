use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use mechbay_core::{Location, TechBase, Unit, UnitKind};

use crate::error::StoreError;
use crate::resolver::{ResolveFailure, BASE_MODEL_PREFIX};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Catalog row for one known unit: enough metadata to decide whether a
/// unit is worth loading, plus the locator the store resolves.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub chassis: String,
    pub model: String,
    pub tonnage: f64,
    pub tech_base: TechBase,
    pub kind: UnitKind,
    /// Opaque source locator, meaningful only to the store.
    pub source: PathBuf,
}

impl UnitSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.chassis, self.model)
    }

    /// Base-chassis records are templates, never reconciled as variants.
    pub fn is_base_record(&self) -> bool {
        self.model.starts_with(BASE_MODEL_PREFIX)
    }
}

/// Unit catalog collaborator: name lookup and full enumeration.
pub trait UnitCatalog {
    fn find_by_name(&self, name: &str) -> Option<&UnitSummary>;
    fn all_units(&self) -> &[UnitSummary];
}

/// Persistent unit storage collaborator.
pub trait UnitStore {
    fn load(&self, summary: &UnitSummary) -> Result<Unit, StoreError>;
    fn save(&self, summary: &UnitSummary, unit: &Unit) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Misses and diagnostics
// ---------------------------------------------------------------------------

/// A base fixed-equipment item with no pod-mounted counterpart in the
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Miss {
    pub equipment: String,
    pub location: Location,
    pub variant: String,
}

impl std::fmt::Display for Miss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not locate {} in {} of {}",
            self.equipment, self.location, self.variant
        )
    }
}

/// Per-unit condition recorded during a batch run. None of these abort
/// the batch; the affected unit is skipped and processing continues.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    Resolution(ResolveFailure),
    LoadFailed { unit: String, detail: String },
    SaveFailed { unit: String, detail: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution(failure) => write!(f, "{failure}"),
            Self::LoadFailed { unit, detail } => write!(f, "cannot load {unit}: {detail}"),
            Self::SaveFailed { unit, detail } => write!(f, "cannot save {unit}: {detail}"),
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    /// RFC 3339 timestamp of the run.
    pub run_at: String,
    pub write_back: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconSummary {
    /// Every catalog row enumerated, including skips and load failures.
    pub scanned: usize,
    pub base_records: usize,
    pub non_omni: usize,
    pub load_failures: usize,
    /// Omni variants whose base chassis could not be resolved.
    pub unresolved: usize,
    pub reconciled: usize,
    /// Variant mounts promoted from pod-mounted to fixed.
    pub promoted: usize,
    pub misses: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub misses: Vec<Miss>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of the pod-reset traversal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResetReport {
    pub scanned: usize,
    /// Omni units rewritten with all eligible equipment pod-mounted.
    pub reset: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of the chassis-listing traversal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChassisReport {
    /// Distinct chassis names across all omni units, sorted.
    pub chassis: BTreeSet<String>,
    pub diagnostics: Vec<Diagnostic>,
}
