//! Data Transfer Objects for the HTTP API.
//!
//! Listing payloads live in [`crate::models`] because the client state
//! library consumes them too; they are re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::models::{CountyListing, PlanListing, PlanRecord, PlanSummary};

/// Query parameters of `GET /counties`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountiesQuery {
    #[serde(default)]
    pub state_code: Option<String>,
}

/// Query parameters of `GET /plan-details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanDetailsQuery {
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub family_makeup: Option<String>,
}

/// `GET /plan-details/{id}` payload. `plan` is `null` when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDetailResponse {
    pub plan: Option<PlanRecord>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
