use mechbay_core::Unit;

use crate::model::Miss;

/// What one (base, variant) reconciliation did.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Variant mounts switched from pod-mounted to fixed.
    pub promoted: usize,
    pub misses: Vec<Miss>,
}

/// Promote the variant mounts that mirror the base chassis's fixed
/// equipment.
///
/// Base mounts that are unlocated, fixed-only-typed, or pod-mounted on
/// the base carry no obligation and are skipped. Each remaining base
/// mount claims the first variant mount (in stored order) with the same
/// location, the same type identity, and `pod_mounted == true`; that
/// mount becomes fixed. A base mount with no claimable counterpart is a
/// miss unless its type identity is in `miss_exempt`.
///
/// Matching is greedy and one-to-one. Known limitation: when several
/// identical pod mounts share a location, whichever was stored first is
/// promoted, so the assignment depends on mount order in the source data.
///
/// Mutates only `pod_mounted` flags on the variant; the base is never
/// touched and no mount is added or removed.
pub fn reconcile_fixed(base: &Unit, variant: &mut Unit, miss_exempt: &[String]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    'base: for base_mount in &base.mounts {
        if !base_mount.location.is_located()
            || base_mount.equipment.fixed_only
            || base_mount.pod_mounted
        {
            continue;
        }

        for mount in &mut variant.mounts {
            if mount.location == base_mount.location
                && mount.equipment.same_type(&base_mount.equipment)
                && mount.pod_mounted
            {
                mount.pod_mounted = false;
                outcome.promoted += 1;
                continue 'base;
            }
        }

        if !miss_exempt
            .iter()
            .any(|id| id == &base_mount.equipment.internal_id)
        {
            outcome.misses.push(Miss {
                equipment: base_mount.equipment.name.clone(),
                location: base_mount.location,
                variant: variant.full_name(),
            });
        }
    }

    outcome
}
