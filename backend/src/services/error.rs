use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::StateCodeError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures of the plan query operations.
///
/// Parameter variants carry messages meant for the caller. Repository
/// failures are never shown verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("Plan ID is required")]
    MissingPlanId,

    #[error("{0}")]
    InvalidStateCode(StateCodeError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Whether the caller sent a bad request, as opposed to a backend failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ServiceError::Repository(_))
    }
}

impl From<StateCodeError> for ServiceError {
    fn from(err: StateCodeError) -> Self {
        match err {
            StateCodeError::Missing => ServiceError::MissingParameter("state_code"),
            malformed => ServiceError::InvalidStateCode(malformed),
        }
    }
}
