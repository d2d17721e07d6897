//! `mechbay-core` — plain unit data types shared across the workspace.

pub mod equipment;
pub mod location;
pub mod unit;

pub use equipment::EquipmentType;
pub use location::Location;
pub use unit::{ChassisData, Mount, TechBase, TroopSpace, Unit, UnitKind};
