use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Rejected user actions of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Select a state before choosing a county")]
    StateNotSelected,

    #[error("Counties for the selected state are not available")]
    CountiesUnavailable,

    #[error("'{0}' is not a county of the selected state")]
    UnknownCounty(String),

    #[error("Both state and county must be selected")]
    IncompleteGeography,

    #[error("No plan fetch is in flight")]
    NotLoading,

    #[error("Sub-filters apply only to fetched results")]
    NoResults,
}

/// Failures of the persisted listing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to encode listing state: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}
