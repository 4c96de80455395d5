//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The API is read-only and public.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Paths used by the original web client.
    let legacy = Router::new()
        .route("/getCounties", get(handlers::list_counties))
        .route("/getMainPlanDetails", get(handlers::list_plans))
        .route("/getPlanDetails/{id}", get(handlers::get_plan));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/counties", get(handlers::list_counties))
        .route("/plan-details", get(handlers::list_plans))
        .route("/plan-details/{id}", get(handlers::get_plan))
        .nest("/api/db", legacy)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
