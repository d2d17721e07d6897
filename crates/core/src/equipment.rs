use serde::{Deserialize, Serialize};

/// A catalog equipment type. `internal_id` is the catalog identity used
/// for equality; `name` is the display name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub internal_id: String,
    pub name: String,
    /// Types that can never be pod-mounted regardless of context
    /// (structural items, engine-integral gear).
    #[serde(default)]
    pub fixed_only: bool,
}

impl EquipmentType {
    pub fn new(internal_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            internal_id: internal_id.into(),
            name: name.into(),
            fixed_only: false,
        }
    }

    /// Catalog identity test: same type iff same internal id.
    pub fn same_type(&self, other: &EquipmentType) -> bool {
        self.internal_id == other.internal_id
    }
}
