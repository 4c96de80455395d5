#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use plan_browser::db::LocalRepository;
use plan_browser::models::{CountyRecord, DataCell, PlanRecord, PremiumColumn};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// ==================== Fixtures ====================

/// The bundled sample dataset.
pub fn sample_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_plans.json")
}

/// A listable plan in `state`/`county`.
pub fn plan(
    id: &str,
    state: &str,
    county: &str,
    issuer: &str,
    name: &str,
    metal: &str,
    plan_type: &str,
) -> PlanRecord {
    let mut plan = PlanRecord::new(id);
    plan.state_code = Some(state.to_string());
    plan.county_name = Some(county.to_string());
    plan.issuer_name = Some(issuer.to_string());
    plan.plan_marketing_name = Some(name.to_string());
    plan.metal_level = Some(metal.to_string());
    plan.plan_type = Some(plan_type.to_string());
    plan.plan_id_standard_component = Some(format!("{}-std", id));
    plan
}

/// Set the four listing-age individual premiums.
pub fn with_individual_premiums(mut plan: PlanRecord, values: [Option<DataCell>; 4]) -> PlanRecord {
    let columns = [
        PremiumColumn::IndividualAge21,
        PremiumColumn::IndividualAge30,
        PremiumColumn::IndividualAge40,
        PremiumColumn::IndividualAge50,
    ];
    for (column, value) in columns.into_iter().zip(values) {
        plan.premiums.set(column, value);
    }
    plan
}

/// Travis County (TX) plans out of issuer/name order, one incomplete row, one
/// without a metal tier, and a Harris County plan.
pub fn travis_repository() -> LocalRepository {
    let repo = LocalRepository::new();

    repo.insert_plan(with_individual_premiums(
        plan("p-zeta", "TX", "Travis", "Zeta Health", "Zeta Silver", "Silver", "PPO"),
        [
            Some(DataCell::from(300.0)),
            None,
            Some(DataCell::from("abc")),
            Some(DataCell::from(500.0)),
        ],
    ));
    repo.insert_plan(with_individual_premiums(
        plan("p-acme-b", "TX", "Travis", "Acme", "Acme Gold", "Gold", "HMO"),
        [
            Some(DataCell::from("400")),
            Some(DataCell::from(400.0)),
            Some(DataCell::from(400.0)),
            Some(DataCell::from(400.0)),
        ],
    ));
    repo.insert_plan(plan("p-acme-a", "TX", "Travis", "Acme", "Acme Bronze", "Bronze", "PPO"));

    let mut incomplete = plan("p-incomplete", "TX", "Travis", "Acme", "Acme Draft", "Gold", "HMO");
    incomplete.plan_type = None;
    repo.insert_plan(incomplete);

    let mut untiered = plan("p-dental", "TX", "Travis", "Acme", "Acme Dental", "Gold", "PPO");
    untiered.metal_level = None;
    repo.insert_plan(untiered);

    repo.insert_plan(plan("p-harris", "TX", "Harris", "Acme", "Acme Harris", "Gold", "HMO"));

    for county in ["Travis", "Harris", "Harris", "Bexar", ""] {
        repo.insert_county(CountyRecord::new("TX", county));
    }
    repo.insert_county(CountyRecord::new("FL", "Miami-Dade"));

    repo
}
