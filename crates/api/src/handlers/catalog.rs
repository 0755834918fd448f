//! Handlers for the `/catalog` resource.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use indexmap::IndexMap;
use pedalstock_core::catalog::ComponentItem;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub categories: &'a IndexMap<String, Vec<String>>,
    pub components: Vec<ComponentItem<'a>>,
}

/// GET /api/v1/catalog
///
/// Categories in display order plus the flat component list.
pub async fn get_catalog(State(state): State<AppState>) -> AppResult<Response> {
    let session = state.session.lock().await;
    let catalog = session.catalog();

    let view = CatalogView {
        categories: catalog.categories(),
        components: catalog.all_components().collect(),
    };
    Ok(Json(DataResponse { data: view }).into_response())
}
