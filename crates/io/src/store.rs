// File-backed unit store

use std::fs;
use std::path::Path;

use mechbay_core::{Unit, UnitKind};
use mechbay_recon::error::StoreError;
use mechbay_recon::model::{UnitStore, UnitSummary};

use crate::unit_json::{self, UNIT_EXT};
use crate::unit_toml::{self, GROUND_EXT};

/// Loads and saves units as files, one unit per file. Mobile-ground
/// units use the TOML format, aerospace and vehicle units the JSON one.
pub struct FileStore;

pub fn is_unit_file(path: &Path) -> bool {
    match path.to_str() {
        Some(p) => p.ends_with(GROUND_EXT) || p.ends_with(UNIT_EXT),
        None => false,
    }
}

/// Load a unit from a path, dispatching on the file's double extension.
pub fn load_path(path: &Path) -> Result<Unit, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;

    let decoded = match path.to_str() {
        Some(p) if p.ends_with(GROUND_EXT) => unit_toml::decode(&text),
        Some(p) if p.ends_with(UNIT_EXT) => unit_json::decode(&text),
        _ => return Err(StoreError::Format(path.display().to_string())),
    };

    decoded.map_err(|detail| StoreError::Parse {
        unit: path.display().to_string(),
        detail,
    })
}

impl UnitStore for FileStore {
    fn load(&self, summary: &UnitSummary) -> Result<Unit, StoreError> {
        load_path(&summary.source)
    }

    fn save(&self, summary: &UnitSummary, unit: &Unit) -> Result<(), StoreError> {
        // Format follows the unit's category, not the file name.
        let encoded = match unit.kind() {
            UnitKind::Ground => unit_toml::encode(unit),
            UnitKind::Aerospace | UnitKind::Vehicle => unit_json::encode(unit),
        };
        let text = encoded.map_err(|detail| StoreError::Parse {
            unit: summary.full_name(),
            detail,
        })?;

        fs::write(&summary.source, text)
            .map_err(|e| StoreError::Io(format!("{}: {e}", summary.source.display())))
    }
}
