use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use mechbay_core::{ChassisData, EquipmentType, Location, Mount, TechBase, Unit, UnitKind};
use mechbay_recon::engine::{omni_chassis, reset_all_pod, run};
use mechbay_recon::error::StoreError;
use mechbay_recon::model::{Diagnostic, UnitCatalog, UnitStore, UnitSummary};
use mechbay_recon::ReconConfig;

// ---------------------------------------------------------------------------
// In-memory fakes
// ---------------------------------------------------------------------------

struct MemCatalog(Vec<UnitSummary>);

impl UnitCatalog for MemCatalog {
    fn find_by_name(&self, name: &str) -> Option<&UnitSummary> {
        self.0.iter().find(|s| s.full_name() == name)
    }
    fn all_units(&self) -> &[UnitSummary] {
        &self.0
    }
}

struct MemStore {
    units: RefCell<HashMap<PathBuf, Unit>>,
    fail: HashSet<PathBuf>,
    saved: RefCell<Vec<PathBuf>>,
}

impl MemStore {
    fn new() -> Self {
        Self {
            units: RefCell::new(HashMap::new()),
            fail: HashSet::new(),
            saved: RefCell::new(Vec::new()),
        }
    }

    fn insert(&self, summary: &UnitSummary, unit: Unit) {
        self.units.borrow_mut().insert(summary.source.clone(), unit);
    }

    fn get(&self, summary: &UnitSummary) -> Unit {
        self.units.borrow()[&summary.source].clone()
    }
}

impl UnitStore for MemStore {
    fn load(&self, summary: &UnitSummary) -> Result<Unit, StoreError> {
        if self.fail.contains(&summary.source) {
            return Err(StoreError::Parse {
                unit: summary.full_name(),
                detail: "unexpected end of file".into(),
            });
        }
        self.units
            .borrow()
            .get(&summary.source)
            .cloned()
            .ok_or_else(|| StoreError::Io(format!("{} not found", summary.source.display())))
    }

    fn save(&self, summary: &UnitSummary, unit: &Unit) -> Result<(), StoreError> {
        self.units
            .borrow_mut()
            .insert(summary.source.clone(), unit.clone());
        self.saved.borrow_mut().push(summary.source.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

fn summary(chassis: &str, model: &str, tonnage: f64, kind: UnitKind) -> UnitSummary {
    UnitSummary {
        chassis: chassis.into(),
        model: model.into(),
        tonnage,
        tech_base: TechBase::Clan,
        kind,
        source: PathBuf::from(format!("{chassis} {model}")),
    }
}

fn ground(chassis: &str, model: &str, omni: bool, mounts: Vec<Mount>) -> Unit {
    Unit {
        chassis: chassis.into(),
        model: model.into(),
        tonnage: 60.0,
        tech_base: TechBase::Clan,
        omni,
        data: ChassisData::Ground { heat_sinks: 13, base_chassis_heat_sinks: 0 },
        mounts,
    }
}

fn vehicle(chassis: &str, model: &str, troop_capacity: f64, turret: f64, mounts: Vec<Mount>) -> Unit {
    Unit {
        chassis: chassis.into(),
        model: model.into(),
        tonnage: 50.0,
        tech_base: TechBase::Clan,
        omni: true,
        data: ChassisData::Vehicle {
            troop_capacity,
            base_chassis_turret_weight: turret,
            base_chassis_turret2_weight: 0.0,
            transporters: Vec::new(),
        },
        mounts,
    }
}

fn fixed(location: Location, id: &str, name: &str) -> Mount {
    Mount::new(location, EquipmentType::new(id, name))
}

fn pod(location: Location, id: &str, name: &str) -> Mount {
    let mut mount = fixed(location, id, name);
    mount.pod_mounted = true;
    mount
}

/// Catalog of eight rows exercising every branch of the batch driver:
/// a corrupt file, two base records, two good ground variants, a
/// non-omni unit, a variant with no base, and a vehicle variant.
fn fixture() -> (MemCatalog, MemStore) {
    let rows = vec![
        summary("Vapor Eagle", "VE-2", 60.0, UnitKind::Ground),
        summary("Mad Dog", "<base>", 60.0, UnitKind::Ground),
        summary("Mad Dog", "Prime", 60.0, UnitKind::Ground),
        summary("Mad Dog", "B", 60.0, UnitKind::Ground),
        summary("Hunchback", "HBK-4G", 60.0, UnitKind::Ground),
        summary("Timber Wolf", "Prime", 60.0, UnitKind::Ground),
        summary("Epona", "<base>", 50.0, UnitKind::Vehicle),
        summary("Epona", "Prime", 50.0, UnitKind::Vehicle),
    ];

    let mut store = MemStore::new();
    store.fail.insert(rows[0].source.clone());

    store.insert(
        &rows[1],
        ground(
            "Mad Dog",
            "<base>",
            true,
            vec![
                fixed(Location::LeftTorso, "CLERPPC", "ER PPC"),
                fixed(Location::CenterTorso, "CLJumpJet", "Jump Jet"),
                fixed(Location::RightTorso, "CLCASE", "CASE"),
            ],
        ),
    );
    store.insert(
        &rows[2],
        ground(
            "Mad Dog",
            "Prime",
            true,
            vec![
                pod(Location::LeftTorso, "CLERPPC", "ER PPC"),
                pod(Location::CenterTorso, "CLJumpJet", "Jump Jet"),
                pod(Location::RightArm, "CLLargePulse", "Large Pulse Laser"),
            ],
        ),
    );
    store.insert(
        &rows[3],
        ground(
            "Mad Dog",
            "B",
            true,
            vec![pod(Location::LeftTorso, "CLERPPC", "ER PPC")],
        ),
    );
    store.insert(&rows[4], ground("Hunchback", "HBK-4G", false, Vec::new()));
    store.insert(&rows[5], ground("Timber Wolf", "Prime", true, Vec::new()));
    store.insert(
        &rows[6],
        vehicle(
            "Epona",
            "<base>",
            4.0,
            2.5,
            vec![fixed(Location::Front, "CLMG", "Machine Gun")],
        ),
    );
    store.insert(
        &rows[7],
        vehicle(
            "Epona",
            "Prime",
            6.0,
            0.0,
            vec![pod(Location::Front, "CLMG", "Machine Gun")],
        ),
    );

    (MemCatalog(rows), store)
}

// ---------------------------------------------------------------------------
// Batch reconciliation
// ---------------------------------------------------------------------------

#[test]
fn full_run_summary_counts() {
    let (catalog, store) = fixture();
    let report = run(&catalog, &store, &ReconConfig::default());

    assert_eq!(report.summary.scanned, 8, "load failures still count as scanned");
    assert_eq!(report.summary.base_records, 2);
    assert_eq!(report.summary.load_failures, 1);
    assert_eq!(report.summary.non_omni, 1);
    assert_eq!(report.summary.unresolved, 1);
    assert_eq!(report.summary.reconciled, 3);
    // Prime promotes ER PPC + Jump Jet, B promotes ER PPC, Epona promotes MG.
    assert_eq!(report.summary.promoted, 4);
    // B is missing the base's Jump Jet; CASE is exempt everywhere.
    assert_eq!(report.summary.misses, 1);
    assert_eq!(report.misses.len(), 1);
    assert_eq!(report.misses[0].equipment, "Jump Jet");
    assert_eq!(report.misses[0].location, Location::CenterTorso);
    assert_eq!(report.misses[0].variant, "Mad Dog B");

    assert!(!report.meta.write_back);
    assert!(!report.meta.run_at.is_empty());
}

#[test]
fn load_failure_is_isolated_and_diagnosed() {
    let (catalog, store) = fixture();
    let report = run(&catalog, &store, &ReconConfig::default());

    let load_failures: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::LoadFailed { .. }))
        .collect();
    assert_eq!(load_failures.len(), 1);
    assert!(load_failures[0].to_string().contains("Vapor Eagle VE-2"));

    // Units after the corrupt one were still processed.
    assert_eq!(report.summary.reconciled, 3);
}

#[test]
fn unresolved_variant_is_diagnosed() {
    let (catalog, store) = fixture();
    let report = run(&catalog, &store, &ReconConfig::default());

    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.to_string() == "could not find base chassis for Timber Wolf Prime"));
}

#[test]
fn default_run_does_not_write_back() {
    let (catalog, store) = fixture();
    run(&catalog, &store, &ReconConfig::default());
    assert!(store.saved.borrow().is_empty());
}

#[test]
fn write_back_persists_each_reconciled_variant() {
    let (catalog, store) = fixture();
    let config = ReconConfig { write_back: true, ..ReconConfig::default() };
    let report = run(&catalog, &store, &config);

    assert!(report.meta.write_back);
    let saved = store.saved.borrow().clone();
    assert_eq!(saved.len(), 3, "only reconciled variants are saved");
    assert!(saved.contains(&PathBuf::from("Mad Dog Prime")));
    assert!(saved.contains(&PathBuf::from("Mad Dog B")));
    assert!(saved.contains(&PathBuf::from("Epona Prime")));

    // The persisted Prime has its chassis-fixed mounts promoted and the
    // unmatched pod weapon left alone.
    let prime = store.get(&catalog.0[2]);
    assert!(!prime.mounts[0].pod_mounted);
    assert!(!prime.mounts[1].pod_mounted);
    assert!(prime.mounts[2].pod_mounted);

    // Vehicle propagation came through the same traversal.
    let epona = store.get(&catalog.0[7]);
    match epona.data {
        ChassisData::Vehicle { base_chassis_turret_weight, ref transporters, .. } => {
            assert_eq!(base_chassis_turret_weight, 2.5);
            assert_eq!(transporters.len(), 1);
            assert_eq!(transporters[0].capacity, 2.0);
            assert!(transporters[0].chassis_fixed);
        }
        _ => unreachable!(),
    }
}

#[test]
fn report_serializes_to_json() {
    let (catalog, store) = fixture();
    let report = run(&catalog, &store, &ReconConfig::default());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["scanned"], 8);
    assert_eq!(json["misses"][0]["equipment"], "Jump Jet");
    assert!(json["diagnostics"][0].is_string());
}

// ---------------------------------------------------------------------------
// Pod reset + chassis listing
// ---------------------------------------------------------------------------

#[test]
fn reset_all_pod_rewrites_only_omni_units() {
    let (catalog, store) = fixture();
    let report = reset_all_pod(&catalog, &store);

    assert_eq!(report.scanned, 8);
    // Everything loadable and omni: both bases, both Mad Dog variants,
    // Timber Wolf, Epona Prime.
    assert_eq!(report.reset, 6);
    assert_eq!(report.diagnostics.len(), 1, "corrupt unit diagnosed");

    let base = store.get(&catalog.0[1]);
    assert!(base.mounts.iter().all(|m| m.pod_mounted));

    let saved = store.saved.borrow().clone();
    assert!(!saved.contains(&PathBuf::from("Hunchback HBK-4G")));
}

#[test]
fn omni_chassis_is_sorted_and_distinct() {
    let (catalog, store) = fixture();
    let report = omni_chassis(&catalog, &store);

    let names: Vec<_> = report.chassis.iter().cloned().collect();
    assert_eq!(names, vec!["Epona", "Mad Dog", "Timber Wolf"]);
    assert_eq!(report.diagnostics.len(), 1);
}
