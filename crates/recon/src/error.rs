use std::fmt;

/// Failure raised by a [`crate::model::UnitStore`] implementation.
#[derive(Debug)]
pub enum StoreError {
    /// Source data exists but cannot be decoded into a unit.
    Parse { unit: String, detail: String },
    /// Source locator points at a format this store does not handle.
    Format(String),
    /// Underlying read/write failure.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { unit, detail } => write!(f, "cannot parse '{unit}': {detail}"),
            Self::Format(msg) => write!(f, "unsupported unit format: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// TOML parse / validation error for [`crate::config::ReconConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
