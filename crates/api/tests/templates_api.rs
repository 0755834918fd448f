//! Integration tests for `/api/v1/templates`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use pedalstock_core::storage::{KeyValueStore, TEMPLATES_KEY};
use pedalstock_db::stores::MemoryStore;
use serde_json::json;

#[tokio::test]
async fn create_template_returns_201_with_dense_components() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store.clone()).await;

    let response = post_json(
        app,
        "/api/v1/templates",
        json!({"name": "  Fuzz  ", "components": {"100R": 2, "BC548B": "1"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["index"], 0);
    assert_eq!(data["name"], "Fuzz");
    assert_eq!(data["message"], "Template \"Fuzz\" saved!");
    assert_eq!(
        data["components"],
        json!({"100R": 2, "1K": 0, "1N4148": 0, "BC548B": 1})
    );
    assert_eq!(
        data["used_components"],
        json!([{"name": "100R", "quantity": 2}, {"name": "BC548B", "quantity": 1}])
    );
    assert!(data.get("ignored_components").is_none());

    let saved = store.get(TEMPLATES_KEY).await.unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved[0]["name"], "Fuzz");
}

#[tokio::test]
async fn empty_name_is_a_validation_error() {
    let app = common::build_test_app(Arc::new(MemoryStore::new())).await;

    for name in ["", "   "] {
        let response = post_json(
            app.clone(),
            "/api/v1/templates",
            json!({"name": name, "components": {"100R": 1}}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Please enter a pedal name.");
    }

    let json = body_json(get(app, "/api/v1/templates").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn templates_are_listed_in_creation_order() {
    let app = common::build_test_app(Arc::new(MemoryStore::new())).await;

    for name in ["Fuzz", "Drive", "Fuzz"] {
        let response = post_json(
            app.clone(),
            "/api/v1/templates",
            json!({"name": name, "components": {}}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/v1/templates").await).await;
    let listed: Vec<(u64, &str)> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| (t["index"].as_u64().unwrap(), t["name"].as_str().unwrap()))
        .collect();
    assert_eq!(listed, [(0, "Fuzz"), (1, "Drive"), (2, "Fuzz")]);
}

#[tokio::test]
async fn unknown_components_are_ignored_and_reported() {
    let app = common::build_test_app(Arc::new(MemoryStore::new())).await;

    let response = post_json(
        app,
        "/api/v1/templates",
        json!({"name": "Tremolo", "components": {"LDR": 1, "1K": 3}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["ignored_components"], json!(["LDR"]));
    assert!(json["data"]["components"].get("LDR").is_none());
    assert_eq!(json["data"]["components"]["1K"], 3);
}

#[tokio::test]
async fn stored_templates_are_hydrated() {
    let store = Arc::new(MemoryStore::with_entries([(
        TEMPLATES_KEY,
        r#"[{"name": "Boost", "components": {"1K": 1}}]"#,
    )]));
    let app = common::build_test_app(store).await;

    let json = body_json(get(app, "/api/v1/templates").await).await;
    assert_eq!(json["data"][0]["name"], "Boost");
    assert_eq!(json["data"][0]["used_components"], json!([{"name": "1K", "quantity": 1}]));
}
