//! Plan catalogue reads.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{PlanId, PlanRecord, StateCode};

/// Read access to the marketplace plans table.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Plan Operations ====================

    /// Plans offered in one county that carry a metal tier.
    ///
    /// # Arguments
    /// * `state` - Normalized state code
    /// * `county_name` - County name, matched exactly
    ///
    /// # Returns
    /// Rows ordered by issuer name, then marketing name. Rows may still miss
    /// other listing columns; callers filter those.
    async fn list_plans(
        &self,
        state: &StateCode,
        county_name: &str,
    ) -> RepositoryResult<Vec<PlanRecord>>;

    /// Fetch one plan by id.
    ///
    /// # Returns
    /// * `Ok(Some(plan))` - The full record
    /// * `Ok(None)` - No plan has that id
    /// * `Err(RepositoryError)` - The lookup itself failed
    async fn get_plan(&self, plan_id: &PlanId) -> RepositoryResult<Option<PlanRecord>>;
}
