//! End-to-end tests of the HTTP router over a local repository.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use plan_browser::db::{FullRepository, LocalRepository};
use plan_browser::http::{create_router, AppState};

fn router_with(repo: LocalRepository) -> Router {
    let repository: Arc<dyn FullRepository> = Arc::new(repo);
    create_router(AppState::new(repository))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ==================== Health ====================

#[tokio::test]
async fn test_health_reports_database_status() {
    let (status, body) = get(router_with(LocalRepository::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let (status, body) = get(router_with(repo), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "disconnected");
}

// ==================== Counties ====================

#[tokio::test]
async fn test_counties_ok() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/counties?state_code=tx",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "counties": ["Bexar", "Harris", "Travis"], "count": 3, "state_code": "TX" })
    );
}

#[tokio::test]
async fn test_counties_missing_state_code_is_bad_request() {
    let (status, body) = get(router_with(support::travis_repository()), "/counties").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "state_code parameter is required" }));

    let (status, _) = get(
        router_with(support::travis_repository()),
        "/counties?state_code=",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_counties_malformed_state_code_is_bad_request() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/counties?state_code=T1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("two-letter"));
}

#[tokio::test]
async fn test_counties_backend_failure_hides_cause() {
    let repo = support::travis_repository();
    repo.set_healthy(false);

    let (status, body) = get(router_with(repo), "/counties?state_code=TX").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch counties from database" }));
}

// ==================== Plan listing ====================

#[tokio::test]
async fn test_plan_listing_with_family_makeup() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/plan-details?state_code=TX&county_name=Travis&family_makeup=adult_individual",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["state_code"], "TX");
    assert_eq!(body["county_name"], "Travis");
    assert_eq!(body["family_makeup"], "adult_individual");

    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans[0]["id"], "p-acme-a");
    assert_eq!(plans[0]["average_premium"], Value::Null);
    assert!(plans[0].as_object().unwrap().contains_key("average_premium"));
    assert_eq!(plans[2]["average_premium"], json!(400.0));
    assert_eq!(
        plans[2],
        json!({
            "id": "p-zeta",
            "metal_level": "Silver",
            "issuer_name": "Zeta Health",
            "plan_id_standard_component": "p-zeta-std",
            "plan_marketing_name": "Zeta Silver",
            "plan_type": "PPO",
            "average_premium": 400.0
        })
    );
}

#[tokio::test]
async fn test_plan_listing_without_family_makeup() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/plan-details?state_code=TX&county_name=Travis",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["family_makeup"], Value::Null);
    for plan in body["plans"].as_array().unwrap() {
        assert!(!plan.as_object().unwrap().contains_key("average_premium"));
    }
}

#[tokio::test]
async fn test_plan_listing_missing_county() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/plan-details?state_code=TX",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "county_name parameter is required" }));
}

#[tokio::test]
async fn test_plan_listing_backend_failure() {
    let repo = support::travis_repository();
    repo.set_healthy(false);

    let (status, body) = get(
        router_with(repo),
        "/plan-details?state_code=TX&county_name=Travis",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch plan details from database" })
    );
}

#[tokio::test]
async fn test_plan_listing_encoded_county() {
    let repo = LocalRepository::new();
    repo.insert_plan(support::plan(
        "p-1", "TX", "San Patricio", "Acme", "Acme Gold", "Gold", "HMO",
    ));

    let (status, body) = get(
        router_with(repo),
        "/plan-details?state_code=TX&county_name=San%20Patricio",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}

// ==================== Single plan ====================

#[tokio::test]
async fn test_plan_detail_found() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/plan-details/p-zeta",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["id"], "p-zeta");
    assert_eq!(body["plan"]["premium_adult_individual_age_21"], json!(300.0));
    assert_eq!(body["plan"]["premium_adult_individual_age_40"], "abc");
}

#[tokio::test]
async fn test_plan_detail_not_found() {
    let (status, body) = get(
        router_with(support::travis_repository()),
        "/plan-details/does-not-exist",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "plan": null }));
}

#[tokio::test]
async fn test_plan_detail_blank_id() {
    let (status, body) = get(router_with(support::travis_repository()), "/plan-details/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Plan ID is required" }));
}

#[tokio::test]
async fn test_plan_detail_backend_failure() {
    let repo = support::travis_repository();
    repo.set_healthy(false);

    let (status, body) = get(router_with(repo), "/plan-details/p-zeta").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("plan").is_none());
}

// ==================== Legacy paths ====================

#[tokio::test]
async fn test_legacy_paths() {
    let router = router_with(support::travis_repository());

    let (status, body) = get(router.clone(), "/api/db/getCounties?state_code=TX").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let (status, body) = get(
        router.clone(),
        "/api/db/getMainPlanDetails?state_code=TX&county_name=Travis&family_makeup=",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["family_makeup"], "");
    assert!(body["plans"][0].get("average_premium").is_none());

    let (status, _) = get(router, "/api/db/getPlanDetails/p-acme-b").await;
    assert_eq!(status, StatusCode::OK);
}

// ==================== Middleware ====================

#[tokio::test]
async fn test_cors_and_compression_layers() {
    let router = router_with(support::travis_repository());

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/counties?state_code=TX")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");

    let preflight = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/plan-details")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::OK);
    assert_eq!(preflight.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
