// File-backed unit catalog

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use mechbay_core::Unit;
use mechbay_recon::model::{UnitCatalog, UnitSummary};

use crate::store::{is_unit_file, load_path};

/// Catalog construction failure. Unlike per-unit load errors this is
/// fatal: without a catalog there is nothing to reconcile.
#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, detail: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => {
                write!(f, "cannot scan {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Catalog built by scanning a directory tree for unit files.
///
/// Files that exist but cannot be decoded are listed in `skipped`
/// rather than failing the scan, so one broken file never hides the
/// rest of the collection.
pub struct FileCatalog {
    units: Vec<UnitSummary>,
    pub skipped: Vec<(PathBuf, String)>,
}

impl FileCatalog {
    pub fn scan(root: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            units: Vec::new(),
            skipped: Vec::new(),
        };
        catalog.walk(root)?;
        catalog
            .units
            .sort_by(|a, b| a.full_name().cmp(&b.full_name()));
        Ok(catalog)
    }

    fn walk(&mut self, dir: &Path) -> Result<(), CatalogError> {
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::Io {
            path: dir.to_path_buf(),
            detail: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::Io {
                path: dir.to_path_buf(),
                detail: e.to_string(),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.walk(&path)?;
            } else if is_unit_file(&path) {
                match load_path(&path) {
                    Ok(unit) => self.units.push(summary_of(&unit, path)),
                    Err(e) => self.skipped.push((path, e.to_string())),
                }
            }
        }
        Ok(())
    }
}

impl UnitCatalog for FileCatalog {
    fn find_by_name(&self, name: &str) -> Option<&UnitSummary> {
        self.units.iter().find(|s| s.full_name() == name)
    }

    fn all_units(&self) -> &[UnitSummary] {
        &self.units
    }
}

fn summary_of(unit: &Unit, source: PathBuf) -> UnitSummary {
    UnitSummary {
        chassis: unit.chassis.clone(),
        model: unit.model.clone(),
        tonnage: unit.tonnage,
        tech_base: unit.tech_base,
        kind: unit.kind(),
        source,
    }
}
