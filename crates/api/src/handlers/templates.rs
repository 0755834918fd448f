//! Handlers for the `/templates` resource.
//!
//! Templates are append-only: there is no update or delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use indexmap::IndexMap;
use pedalstock_core::template::{dense_components, Template};
use pedalstock_core::types::Quantity;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// DTO for creating a template. `components` may be sparse; missing catalog
/// components are stored as 0.
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct UsedComponent<'a> {
    pub name: &'a str,
    pub quantity: Quantity,
}

/// A template together with its registry index and the parts it uses.
#[derive(Debug, Serialize)]
pub struct TemplateView<'a> {
    pub index: usize,
    pub name: &'a str,
    pub components: &'a IndexMap<String, Quantity>,
    pub used_components: Vec<UsedComponent<'a>>,
}

impl<'a> TemplateView<'a> {
    fn new(index: usize, template: &'a Template) -> Self {
        Self {
            index,
            name: &template.name,
            components: &template.components,
            used_components: template
                .used_components()
                .map(|(name, quantity)| UsedComponent { name, quantity })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedTemplate<'a> {
    #[serde(flatten)]
    pub template: TemplateView<'a>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_components: Vec<String>,
}

/// GET /api/v1/templates
pub async fn list_templates(State(state): State<AppState>) -> AppResult<Response> {
    let session = state.session.lock().await;

    let views: Vec<_> = session
        .templates()
        .iter()
        .enumerate()
        .map(|(index, template)| TemplateView::new(index, template))
        .collect();
    Ok(Json(DataResponse { data: views }).into_response())
}

/// POST /api/v1/templates
///
/// Rejects an empty or whitespace-only name with `VALIDATION_ERROR`.
pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplateRequest>,
) -> AppResult<Response> {
    let mut session = state.session.lock().await;

    let (components, ignored) = dense_components(session.catalog(), input.components);
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "Ignoring unknown components in template");
    }

    session.add_template(&input.name, components).await?;
    let index = session.templates().len() - 1;
    let template = session
        .templates()
        .get(index)
        .ok_or_else(|| AppError::InternalError("template missing after append".into()))?;
    let created = CreatedTemplate {
        message: format!("Template \"{}\" saved!", template.name),
        template: TemplateView::new(index, template),
        ignored_components: ignored,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })).into_response())
}
