#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use consorcio_api::config::ServerConfig;
use consorcio_api::router::build_app_router;
use consorcio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the wildcard CORS origin (matching the production default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
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

/// POST with an empty body (query-parameter endpoints).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// PUT with an empty body (query-parameter endpoints).
pub async fn put_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid lead form submission.
pub fn lead_payload(name: &str, model: &str, source: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "whatsapp": "(91) 99876-5432",
        "city": "Belém",
        "model": model,
        "source": source,
    })
}

/// A complete car document.
pub fn car_payload(id: &str, model: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("{model} 2025"),
        "model": model,
        "year": 2025,
        "image": "https://images.example/car.jpg",
        "monthly_price": "R$ 1.099",
        "total_credit": "R$ 80.000",
        "installments": 60,
        "highlights": ["Motor 1.4 TSI", "Câmbio automático"],
        "description": "Modelo de teste.",
        "is_active": true,
    })
}
