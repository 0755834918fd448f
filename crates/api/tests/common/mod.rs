#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pedalstock_core::catalog::Catalog;
use pedalstock_db::session::Session;
use pedalstock_db::stores::MemoryStore;
use tower::ServiceExt;

use pedalstock_api::config::ServerConfig;
use pedalstock_api::router::build_app_router;
use pedalstock_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and no database, so snapshots live in the given [`MemoryStore`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        catalog_path: None,
    }
}

/// A small catalog shared by the API tests.
pub fn test_catalog() -> Catalog {
    Catalog::new([
        ("Resistors", vec!["100R", "1K"]),
        ("Diodes", vec!["1N4148"]),
        ("Transistors", vec!["BC548B"]),
    ])
}

/// Build the full application router over `store`, hydrating a session
/// with [`test_catalog`].
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_test_app_with_catalog(store, test_catalog()).await
}

pub async fn build_test_app_with_catalog(store: Arc<MemoryStore>, catalog: Catalog) -> Router {
    let config = test_config();
    let session = Session::hydrate(store, Arc::new(catalog)).await;
    build_app_router(AppState::new(session, config.clone()), &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
