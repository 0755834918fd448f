//! Axum handlers, one module per resource.

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod shopping_list;
pub mod templates;
