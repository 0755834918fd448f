pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, inventory, orders, shopping_list, templates};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET    /catalog          -> catalog::get_catalog
/// GET    /inventory        -> inventory::get_inventory
/// PUT    /inventory        -> inventory::update_inventory
/// GET    /templates        -> templates::list_templates
/// POST   /templates        -> templates::create_template
/// POST   /orders           -> orders::place_order
/// GET    /shopping-list    -> shopping_list::get_shopping_list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route(
            "/inventory",
            get(inventory::get_inventory).put(inventory::update_inventory),
        )
        .route(
            "/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/orders", post(orders::place_order))
        .route("/shopping-list", get(shopping_list::get_shopping_list))
}
