use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::StateCode;

/// Read access to the state/county lookup.
#[async_trait]
pub trait GeographyRepository: Send + Sync {
    /// County names recorded for `state`. Names may repeat and may be empty;
    /// the service layer cleans them up.
    async fn list_counties(&self, state: &StateCode) -> RepositoryResult<Vec<String>>;
}
