//! Tests for LocalRepository: seeding, filtering and health simulation.

mod support;

use std::sync::Arc;

use plan_browser::db::repository::{GeographyRepository, PlanRepository, RepositoryError};
use plan_browser::db::LocalRepository;
use plan_browser::models::{PlanId, StateCode};

fn tx() -> StateCode {
    StateCode::parse("TX").unwrap()
}

#[tokio::test]
async fn test_list_plans_filters_geography_and_metal_level() {
    let repo = support::travis_repository();
    let plans = repo.list_plans(&tx(), "Travis").await.unwrap();

    let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
    // The incomplete row is still returned; only the service drops it.
    assert_eq!(ids, vec!["p-acme-a", "p-incomplete", "p-acme-b", "p-zeta"]);
    assert!(plans.iter().all(|p| p.metal_level.is_some()));
}

#[tokio::test]
async fn test_list_plans_matches_stored_state_case_insensitively() {
    let repo = LocalRepository::new();
    repo.insert_plan(support::plan("p-1", "tx", "Travis", "Acme", "Acme Gold", "Gold", "HMO"));

    assert_eq!(repo.list_plans(&tx(), "Travis").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_counties_keeps_duplicates_for_the_service() {
    let repo = support::travis_repository();
    let counties = repo.list_counties(&tx()).await.unwrap();
    assert_eq!(counties, vec!["", "Bexar", "Harris", "Harris", "Travis"]);
}

#[tokio::test]
async fn test_get_plan_by_id() {
    let repo = support::travis_repository();
    let plan = repo.get_plan(&PlanId::new("p-harris")).await.unwrap();
    assert_eq!(plan.unwrap().county_name.as_deref(), Some("Harris"));

    assert!(repo.get_plan(&PlanId::new("nope")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unhealthy_repository_fails_reads() {
    let repo = support::travis_repository();
    repo.set_healthy(false);

    assert!(!repo.health_check().await.unwrap());
    let err = repo.list_plans(&tx(), "Travis").await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("list_plans"));

    repo.set_healthy(true);
    assert!(repo.list_counties(&tx()).await.is_ok());
}

#[tokio::test]
async fn test_clear_keeps_health_status() {
    let repo = support::travis_repository();
    repo.set_healthy(false);
    repo.clear();

    assert_eq!(repo.plan_count(), 0);
    assert!(!repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_seed_without_counties_derives_lookup() {
    let repo = LocalRepository::from_seed_str(
        r#"{ "plans": [
            { "id": "a", "state_code": "TX", "county_name": "Travis", "metal_level": "Gold" },
            { "id": "b", "state_code": "TX", "county_name": "Harris", "metal_level": "Gold" }
        ] }"#,
    )
    .unwrap();

    assert_eq!(repo.plan_count(), 2);
    assert_eq!(repo.list_counties(&tx()).await.unwrap(), vec!["Harris", "Travis"]);
}

#[test]
fn test_malformed_seed_is_data_error() {
    let err = LocalRepository::from_seed_str("{ \"plans\": 42 }").unwrap_err();
    assert!(matches!(err, RepositoryError::DataError { .. }));
}

#[test]
fn test_missing_seed_file_is_configuration_error() {
    let err = LocalRepository::from_seed_file("/nonexistent/plans.json").unwrap_err();
    assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    assert_eq!(
        err.context().entity_id.as_deref(),
        Some("/nonexistent/plans.json")
    );
}

#[test]
fn test_debug_reports_sizes_not_rows() {
    let repo = support::travis_repository();
    repo.set_healthy(false);
    assert_eq!(
        format!("{:?}", repo),
        "LocalRepository { plans: 6, counties: 6, is_healthy: false }"
    );
}

#[test]
fn test_sample_seed_loads() {
    let repo = LocalRepository::from_seed_file(support::sample_seed_path()).unwrap();
    assert_eq!(repo.plan_count(), 7);
}

#[tokio::test]
async fn test_concurrent_reads() {
    let repo = Arc::new(support::travis_repository());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.list_plans(&tx(), "Travis").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().len(), 4);
    }
}
