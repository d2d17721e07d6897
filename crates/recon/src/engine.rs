use mechbay_core::Unit;

use crate::config::ReconConfig;
use crate::matcher::reconcile_fixed;
use crate::model::{
    ChassisReport, Diagnostic, ReconMeta, ReconReport, ReconSummary, ResetReport, UnitCatalog,
    UnitStore,
};
use crate::propagate::propagate_chassis;
use crate::resolver::resolve_base;

/// Run reconciliation over the full catalog.
///
/// Units are processed one at a time, each passing through
/// `loaded -> (skipped | resolved -> reconciled -> [persisted])`. A
/// failure on one unit never affects the next; all per-unit conditions
/// land in the report's diagnostics. The driver itself cannot fail.
pub fn run(catalog: &dyn UnitCatalog, store: &dyn UnitStore, config: &ReconConfig) -> ReconReport {
    let mut summary = ReconSummary::default();
    let mut misses = Vec::new();
    let mut diagnostics = Vec::new();

    for unit_summary in catalog.all_units() {
        summary.scanned += 1;

        if unit_summary.is_base_record() {
            summary.base_records += 1;
            continue;
        }

        let mut variant = match store.load(unit_summary) {
            Ok(unit) => unit,
            Err(e) => {
                summary.load_failures += 1;
                diagnostics.push(Diagnostic::LoadFailed {
                    unit: unit_summary.full_name(),
                    detail: e.to_string(),
                });
                continue;
            }
        };

        if !variant.omni {
            summary.non_omni += 1;
            continue;
        }

        let base_summary = match resolve_base(catalog, &variant) {
            Ok(found) => found,
            Err(failure) => {
                summary.unresolved += 1;
                diagnostics.push(Diagnostic::Resolution(failure));
                continue;
            }
        };

        let base = match store.load(&base_summary) {
            Ok(unit) => unit,
            Err(e) => {
                summary.load_failures += 1;
                diagnostics.push(Diagnostic::LoadFailed {
                    unit: base_summary.full_name(),
                    detail: e.to_string(),
                });
                continue;
            }
        };

        let outcome = reconcile_fixed(&base, &mut variant, &config.miss_exempt);
        propagate_chassis(&base, &mut variant);

        summary.reconciled += 1;
        summary.promoted += outcome.promoted;
        summary.misses += outcome.misses.len();
        misses.extend(outcome.misses);

        if config.write_back {
            if let Err(e) = store.save(unit_summary, &variant) {
                diagnostics.push(Diagnostic::SaveFailed {
                    unit: unit_summary.full_name(),
                    detail: e.to_string(),
                });
            }
        }
    }

    ReconReport {
        meta: meta(config.write_back),
        summary,
        misses,
        diagnostics,
    }
}

fn meta(write_back: bool) -> ReconMeta {
    ReconMeta {
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        run_at: chrono::Utc::now().to_rfc3339(),
        write_back,
    }
}

/// Mark every located, non-fixed-only mount on a unit pod-mounted.
pub fn set_all_pod(unit: &mut Unit) {
    for mount in &mut unit.mounts {
        if mount.location.is_located() && !mount.equipment.fixed_only {
            mount.pod_mounted = true;
        }
    }
}

/// Rewrite every omni unit with all eligible equipment pod-mounted.
///
/// This is the bulk-retag pass run before [`run`] with write-back:
/// everything starts pod-mounted, then reconciliation fixes down the
/// mounts the base chassis dictates.
pub fn reset_all_pod(catalog: &dyn UnitCatalog, store: &dyn UnitStore) -> ResetReport {
    let mut report = ResetReport::default();

    for summary in catalog.all_units() {
        report.scanned += 1;

        let mut unit = match store.load(summary) {
            Ok(unit) => unit,
            Err(e) => {
                report.diagnostics.push(Diagnostic::LoadFailed {
                    unit: summary.full_name(),
                    detail: e.to_string(),
                });
                continue;
            }
        };
        if !unit.omni {
            continue;
        }

        set_all_pod(&mut unit);

        match store.save(summary, &unit) {
            Ok(()) => report.reset += 1,
            Err(e) => report.diagnostics.push(Diagnostic::SaveFailed {
                unit: summary.full_name(),
                detail: e.to_string(),
            }),
        }
    }

    report
}

/// Collect the sorted set of distinct chassis names across all omni units.
pub fn omni_chassis(catalog: &dyn UnitCatalog, store: &dyn UnitStore) -> ChassisReport {
    let mut report = ChassisReport::default();

    for summary in catalog.all_units() {
        let unit = match store.load(summary) {
            Ok(unit) => unit,
            Err(e) => {
                report.diagnostics.push(Diagnostic::LoadFailed {
                    unit: summary.full_name(),
                    detail: e.to_string(),
                });
                continue;
            }
        };
        if unit.omni {
            report.chassis.insert(unit.chassis);
        }
    }

    report
}
