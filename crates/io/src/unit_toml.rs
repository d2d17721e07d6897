// TOML unit format — mobile-ground units

use mechbay_core::Unit;

/// Double extension for mobile-ground unit files.
pub const GROUND_EXT: &str = ".mek.toml";

pub fn decode(input: &str) -> Result<Unit, String> {
    toml::from_str(input).map_err(|e| e.to_string())
}

pub fn encode(unit: &Unit) -> Result<String, String> {
    toml::to_string_pretty(unit).map_err(|e| e.to_string())
}
