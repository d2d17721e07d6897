// JSON unit format — aerospace and vehicle units

use mechbay_core::Unit;

/// Double extension for aerospace/vehicle unit files.
pub const UNIT_EXT: &str = ".unit.json";

pub fn decode(input: &str) -> Result<Unit, String> {
    serde_json::from_str(input).map_err(|e| e.to_string())
}

pub fn encode(unit: &Unit) -> Result<String, String> {
    serde_json::to_string_pretty(unit).map_err(|e| e.to_string())
}
