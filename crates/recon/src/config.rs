use serde::Deserialize;

use crate::error::ConfigError;

/// Reconciliation run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconConfig {
    /// Equipment identities whose absence from a variant is structurally
    /// insignificant and not counted as a miss. CASE is auto-added on
    /// Clan designs, so base records carry it without the variant files
    /// listing it.
    #[serde(default = "default_miss_exempt")]
    pub miss_exempt: Vec<String>,
    /// Serialize each reconciled variant back to storage immediately
    /// after its own reconciliation.
    #[serde(default)]
    pub write_back: bool,
}

fn default_miss_exempt() -> Vec<String> {
    vec!["CLCASE".into()]
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            miss_exempt: default_miss_exempt(),
            write_back: false,
        }
    }
}

impl ReconConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: ReconConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.miss_exempt.iter().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "miss_exempt entries must be non-empty".into(),
            ));
        }
        Ok(())
    }
}
