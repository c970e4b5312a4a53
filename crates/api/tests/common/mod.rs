#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use clientele_api::config::ServerConfig;
use clientele_api::router::build_app_router;
use clientele_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a free founder and return its id.
pub async fn create_founder(pool: &PgPool, full_name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/founders",
        serde_json::json!({"taxId": 111111111111_i64, "fullName": full_name}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a client around the given free founder and return the client id.
pub async fn create_client_with_founder(
    pool: &PgPool,
    name: &str,
    client_type: &str,
    founder_id: i64,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/clients/with-founder",
        serde_json::json!({
            "taxId": 123456789012_i64,
            "name": name,
            "type": client_type,
            "founderId": founder_id,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Fetch a founder's `clientId` (`None` when free).
pub async fn founder_client_id(pool: &PgPool, founder_id: i64) -> Option<i64> {
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/founders/{founder_id}"),
    )
    .await;
    body_json(response).await["clientId"].as_i64()
}
