//! Handlers for the `/inventory` resource.
//!
//! Reading returns the raw map plus the per-category stock view; writing
//! replaces the whole inventory with clamped values.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pedalstock_core::inventory::{CategoryStock, Inventory};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Message returned after a manual update.
pub const UPDATED_MESSAGE: &str = "Inventory updated successfully!";

/// DTO for a manual inventory update. Values may be any JSON; each is
/// coerced to a non-negative integer.
#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    #[serde(default)]
    pub quantities: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct InventoryView<'a> {
    pub inventory: &'a Inventory,
    pub categories: Vec<CategoryStock<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_components: Vec<String>,
}

/// GET /api/v1/inventory
pub async fn get_inventory(State(state): State<AppState>) -> AppResult<Response> {
    let session = state.session.lock().await;

    let view = InventoryView {
        inventory: session.inventory(),
        categories: session.stock_by_category(),
        message: None,
        ignored_components: Vec::new(),
    };
    Ok(Json(DataResponse { data: view }).into_response())
}

/// PUT /api/v1/inventory
///
/// Wholesale replacement. A name is accepted when the catalog lists it or
/// the current inventory already holds it, so a stored entry for a part
/// dropped from the catalog survives a read-modify-write round trip. Other
/// names are left out and echoed back in `ignored_components`.
pub async fn update_inventory(
    State(state): State<AppState>,
    Json(input): Json<UpdateInventoryRequest>,
) -> AppResult<Response> {
    let mut session = state.session.lock().await;

    let (known, ignored): (Vec<_>, Vec<_>) = input
        .quantities
        .into_iter()
        .partition(|(name, _)| {
            session.catalog().contains(name) || session.inventory().contains(name)
        });
    let ignored: Vec<String> = ignored.into_iter().map(|(name, _)| name).collect();
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "Ignoring unknown components in inventory update");
    }

    session.set_inventory(known).await;

    let view = InventoryView {
        inventory: session.inventory(),
        categories: session.stock_by_category(),
        message: Some(UPDATED_MESSAGE),
        ignored_components: ignored,
    };
    Ok(Json(DataResponse { data: view }).into_response())
}
