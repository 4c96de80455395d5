//! HTTP handlers for the REST API.
//!
//! Each handler parses its query string and delegates to the service layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{
    CountiesQuery, CountyListing, HealthResponse, PlanDetailResponse, PlanDetailsQuery,
    PlanListing,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const COUNTIES_FAILED: &str = "Failed to fetch counties from database";
const PLANS_FAILED: &str = "Failed to fetch plan details from database";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Geography
// =============================================================================

/// GET /counties?state_code=XX
pub async fn list_counties(
    State(state): State<AppState>,
    Query(query): Query<CountiesQuery>,
) -> HandlerResult<CountyListing> {
    let listing = services::list_counties(state.repository.as_ref(), query.state_code.as_deref())
        .await
        .map_err(|e| AppError::from_service(e, COUNTIES_FAILED))?;

    Ok(Json(listing))
}

// =============================================================================
// Plans
// =============================================================================

/// GET /plan-details?state_code=&county_name=&family_makeup=
pub async fn list_plans(
    State(state): State<AppState>,
    Query(query): Query<PlanDetailsQuery>,
) -> HandlerResult<PlanListing> {
    let listing = services::list_plans(
        state.repository.as_ref(),
        query.state_code.as_deref(),
        query.county_name.as_deref(),
        query.family_makeup.as_deref(),
    )
    .await
    .map_err(|e| AppError::from_service(e, PLANS_FAILED))?;

    info!(
        state_code = %listing.state_code,
        county = %listing.county_name,
        count = listing.count,
        "Plan listing served"
    );
    Ok(Json(listing))
}

/// GET /plan-details/{id}
///
/// Responds 404 with `{ "plan": null }` when no plan has the id.
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<(StatusCode, Json<PlanDetailResponse>), AppError> {
    let plan = services::get_plan(state.repository.as_ref(), &plan_id)
        .await
        .map_err(|e| AppError::from_service(e, PLANS_FAILED))?;

    let status = if plan.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(PlanDetailResponse { plan })))
}
