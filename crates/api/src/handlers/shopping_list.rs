//! Handler for the derived shopping list.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pedalstock_core::shopping_list::ShoppingListEntry;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShoppingListView<'a> {
    /// `true` means nothing needs buying; `entries` is then empty.
    pub fully_stocked: bool,
    pub entries: Vec<ShoppingListEntry<'a>>,
}

/// GET /api/v1/shopping-list
pub async fn get_shopping_list(State(state): State<AppState>) -> AppResult<Response> {
    let session = state.session.lock().await;
    let entries = session.shopping_list().entries();

    let view = ShoppingListView {
        fully_stocked: entries.is_empty(),
        entries,
    };
    Ok(Json(DataResponse { data: view }).into_response())
}
