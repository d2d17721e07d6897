use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentType;
use crate::location::Location;

// ---------------------------------------------------------------------------
// Tech base
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechBase {
    InnerSphere,
    Clan,
}

impl TechBase {
    /// Suffix used in base-chassis record names ("Warhammer <base>IS").
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::InnerSphere => "IS",
            Self::Clan => "Clan",
        }
    }
}

impl std::fmt::Display for TechBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InnerSphere => write!(f, "Inner Sphere"),
            Self::Clan => write!(f, "Clan"),
        }
    }
}

// ---------------------------------------------------------------------------
// Unit category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Ground,
    Aerospace,
    Vehicle,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ground => write!(f, "ground"),
            Self::Aerospace => write!(f, "aerospace"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}

// ---------------------------------------------------------------------------
// Category-specific chassis data
// ---------------------------------------------------------------------------

/// A troop-transport allocation on a vehicle. Allocations flagged
/// `chassis_fixed` belong to the chassis and are not player-configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroopSpace {
    pub capacity: f64,
    #[serde(default)]
    pub chassis_fixed: bool,
}

/// Derived attributes that only exist for one unit category. A closed
/// variant so that adding a category forces every consumer to decide
/// what it means for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChassisData {
    Ground {
        heat_sinks: u32,
        /// Heat sinks integral to the base chassis, never pod-swapped.
        #[serde(default)]
        base_chassis_heat_sinks: u32,
    },
    Aerospace {
        heat_sinks: u32,
        #[serde(default)]
        base_chassis_heat_sinks: u32,
    },
    Vehicle {
        /// Nominal troop-carrying capacity in tons.
        #[serde(default)]
        troop_capacity: f64,
        #[serde(default)]
        base_chassis_turret_weight: f64,
        #[serde(default)]
        base_chassis_turret2_weight: f64,
        #[serde(default)]
        transporters: Vec<TroopSpace>,
    },
}

impl ChassisData {
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Ground { .. } => UnitKind::Ground,
            Self::Aerospace { .. } => UnitKind::Aerospace,
            Self::Vehicle { .. } => UnitKind::Vehicle,
        }
    }
}

// ---------------------------------------------------------------------------
// Mounts and units
// ---------------------------------------------------------------------------

/// One piece of equipment mounted on a unit. `pod_mounted` is the
/// reconciliation target: true means freely reconfigurable, false means
/// fixed to the chassis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    pub location: Location,
    // Scalar fields stay ahead of `equipment` so the TOML form keeps
    // values before the nested table.
    #[serde(default)]
    pub pod_mounted: bool,
    pub equipment: EquipmentType,
}

impl Mount {
    pub fn new(location: Location, equipment: EquipmentType) -> Self {
        Self {
            location,
            pod_mounted: false,
            equipment,
        }
    }
}

/// A named combat unit with its ordered equipment loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub chassis: String,
    pub model: String,
    pub tonnage: f64,
    pub tech_base: TechBase,
    /// Reconfigurable ("omni") units are the only reconciliation subjects.
    #[serde(default)]
    pub omni: bool,
    pub data: ChassisData,
    /// Stored order matters: matching scans mounts in this order.
    #[serde(default)]
    pub mounts: Vec<Mount>,
}

impl Unit {
    /// Catalog name, "{chassis} {model}".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.chassis, self.model)
    }

    pub fn kind(&self) -> UnitKind {
        self.data.kind()
    }
}
