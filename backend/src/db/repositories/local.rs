//! In-memory local repository implementation.
//!
//! Holds the plans dataset in memory for unit tests and local development.
//! Data can be inserted directly or loaded from a JSON seed document:
//!
//! ```json
//! { "plans": [ { "id": "...", "state_code": "TX", ... } ],
//!   "counties": [ { "state_code": "TX", "county_name": "Travis" } ] }
//! ```
//!
//! When `counties` is left out, the lookup is derived from the plans.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::db::repository::*;
use crate::models::{CountyRecord, PlanId, PlanRecord, StateCode};

/// In-memory local repository.
///
/// # Example
/// ```
/// use plan_browser::db::repositories::LocalRepository;
/// use plan_browser::models::PlanRecord;
///
/// let repo = LocalRepository::new();
/// repo.insert_plan(PlanRecord::new("p-1"));
/// assert_eq!(repo.plan_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    plans: Vec<PlanRecord>,
    counties: Vec<CountyRecord>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            plans: Vec::new(),
            counties: Vec::new(),
            is_healthy: true,
        }
    }
}

/// Seed document accepted by [`LocalRepository::from_seed_str`].
#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    plans: Vec<PlanRecord>,
    #[serde(default)]
    counties: Option<Vec<CountyRecord>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Build a repository from a JSON seed document.
    pub fn from_seed_str(json: &str) -> RepositoryResult<Self> {
        let seed: SeedDocument = serde_json::from_str(json).map_err(|e| {
            RepositoryError::data_with_context(
                e.to_string(),
                ErrorContext::new("load_seed").with_entity("seed_document"),
            )
        })?;

        let counties = seed.counties.unwrap_or_else(|| {
            seed.plans
                .iter()
                .map(|plan| CountyRecord {
                    state_code: plan.state_code.clone(),
                    county_name: plan.county_name.clone(),
                    fips_county_code: plan.fips_county_code,
                })
                .collect()
        });

        let repo = Self::new();
        {
            let mut data = repo.data.write();
            data.plans = seed.plans;
            data.counties = counties;
        }
        Ok(repo)
    }

    /// Build a repository from a JSON seed file on disk.
    pub fn from_seed_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read seed file: {}", e),
                ErrorContext::new("load_seed").with_entity_id(path.display()),
            )
        })?;
        let repo = Self::from_seed_str(&json)?;
        info!(
            path = %path.display(),
            plans = repo.plan_count(),
            "Loaded local plans seed"
        );
        Ok(repo)
    }

    /// Add a plan to the repository.
    pub fn insert_plan(&self, plan: PlanRecord) {
        self.data.write().plans.push(plan);
    }

    /// Add a row to the state/county lookup.
    pub fn insert_county(&self, county: CountyRecord) {
        self.data.write().counties.push(county);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of plans stored.
    pub fn plan_count(&self) -> usize {
        self.data.read().plans.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocalRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.read();
        f.debug_struct("LocalRepository")
            .field("plans", &data.plans.len())
            .field("counties", &data.counties.len())
            .field("is_healthy", &data.is_healthy)
            .finish()
    }
}

fn has_metal_level(plan: &PlanRecord) -> bool {
    plan.metal_level.is_some()
}

#[async_trait]
impl PlanRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_plans(
        &self,
        state: &StateCode,
        county_name: &str,
    ) -> RepositoryResult<Vec<PlanRecord>> {
        self.check_health("list_plans")?;
        let data = self.data.read();

        let mut plans: Vec<PlanRecord> = data
            .plans
            .iter()
            .filter(|plan| {
                plan.state_code
                    .as_deref()
                    .is_some_and(|code| code.eq_ignore_ascii_case(state.as_str()))
                    && plan.county_name.as_deref() == Some(county_name)
                    && has_metal_level(plan)
            })
            .cloned()
            .collect();

        plans.sort_by(|a, b| {
            a.issuer_name
                .cmp(&b.issuer_name)
                .then_with(|| a.plan_marketing_name.cmp(&b.plan_marketing_name))
        });
        Ok(plans)
    }

    async fn get_plan(&self, plan_id: &PlanId) -> RepositoryResult<Option<PlanRecord>> {
        self.check_health("get_plan")?;
        let data = self.data.read();
        Ok(data.plans.iter().find(|plan| &plan.id == plan_id).cloned())
    }
}

#[async_trait]
impl GeographyRepository for LocalRepository {
    async fn list_counties(&self, state: &StateCode) -> RepositoryResult<Vec<String>> {
        self.check_health("list_counties")?;
        let data = self.data.read();

        let mut names: Vec<String> = data
            .counties
            .iter()
            .filter(|county| county.is_in(state))
            .filter_map(|county| county.county_name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
