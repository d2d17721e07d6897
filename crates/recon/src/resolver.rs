use serde::Serialize;

use mechbay_core::Unit;

use crate::model::{UnitCatalog, UnitSummary};

/// Model designators beginning with this marker are base-chassis records.
pub const BASE_MODEL_PREFIX: &str = "<base";

/// Model designator of a base-chassis record, optionally followed by a
/// tech-base suffix when one chassis name exists in both tech bases.
const BASE_DESIGNATOR: &str = "<base>";

/// Why a variant could not be paired with a base chassis. These are skip
/// signals, not errors: the pair is dropped from the run and reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ResolveFailure {
    NotFound {
        variant: String,
    },
    TonnageMismatch {
        variant: String,
        base: String,
        variant_tons: f64,
        base_tons: f64,
    },
    TechBaseMismatch {
        variant: String,
        base: String,
    },
}

impl std::fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { variant } => {
                write!(f, "could not find base chassis for {variant}")
            }
            Self::TonnageMismatch { variant, base, variant_tons, base_tons } => {
                write!(
                    f,
                    "{variant} and {base} have different tonnage ({variant_tons} vs {base_tons})"
                )
            }
            Self::TechBaseMismatch { variant, base } => {
                write!(f, "{variant} and {base} have different tech base")
            }
        }
    }
}

impl std::error::Error for ResolveFailure {}

/// Locate the base-chassis record for a variant.
///
/// Tries `"{chassis} <base>"` first, then the tech-base-suffixed form.
/// A name match with mismatched tonnage or tech base is still a failure;
/// no partial compatibility is accepted. Performs no mutation.
pub fn resolve_base(
    catalog: &dyn UnitCatalog,
    variant: &Unit,
) -> Result<UnitSummary, ResolveFailure> {
    let plain = format!("{} {}", variant.chassis, BASE_DESIGNATOR);
    let suffixed = format!(
        "{} {}{}",
        variant.chassis,
        BASE_DESIGNATOR,
        variant.tech_base.suffix()
    );

    let summary = catalog
        .find_by_name(&plain)
        .or_else(|| catalog.find_by_name(&suffixed))
        .ok_or_else(|| ResolveFailure::NotFound {
            variant: variant.full_name(),
        })?;

    if (summary.tonnage - variant.tonnage).abs() > f64::EPSILON {
        return Err(ResolveFailure::TonnageMismatch {
            variant: variant.full_name(),
            base: summary.full_name(),
            variant_tons: variant.tonnage,
            base_tons: summary.tonnage,
        });
    }
    if summary.tech_base != variant.tech_base {
        return Err(ResolveFailure::TechBaseMismatch {
            variant: variant.full_name(),
            base: summary.full_name(),
        });
    }

    Ok(summary.clone())
}
