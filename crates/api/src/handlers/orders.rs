//! Handler for placing an order against the template registry.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pedalstock_core::inventory::Inventory;
use pedalstock_core::order::{OrderOutcome, OrderRequest};
use pedalstock_core::types::TemplateIndex;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// DTO for an order: template index (as a JSON object key) to build quantity.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub quantities: BTreeMap<TemplateIndex, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct OrderView<'a> {
    /// `false` when no template had a positive quantity; nothing was changed.
    pub placed: bool,
    pub message: String,
    pub applied: &'a [String],
    pub inventory: &'a Inventory,
}

/// POST /api/v1/orders
///
/// An order with no positive quantity is not an error: it answers 200 with
/// `placed: false` and leaves the inventory alone.
pub async fn place_order(
    State(state): State<AppState>,
    Json(input): Json<PlaceOrderRequest>,
) -> AppResult<Response> {
    let request = OrderRequest::from_values(input.quantities);

    let mut session = state.session.lock().await;
    let outcome = session.place_order(&request).await;

    let applied: &[String] = match &outcome {
        OrderOutcome::Placed(result) => &result.applied,
        OrderOutcome::NothingOrdered => &[],
    };
    let view = OrderView {
        placed: outcome.is_placed(),
        message: outcome.message(),
        applied,
        inventory: session.inventory(),
    };
    Ok(Json(DataResponse { data: view }).into_response())
}
