//! Session controller: the single authoritative copy of inventory and
//! templates.
//!
//! Every mutation replaces the in-memory value first and then issues a
//! best-effort save of the whole value. The domain functions it calls are
//! pure; this is the only place where state and storage meet.

use std::sync::Arc;

use indexmap::IndexMap;
use pedalstock_core::catalog::Catalog;
use pedalstock_core::error::CoreError;
use pedalstock_core::inventory::{stock_by_category, CategoryStock, Inventory};
use pedalstock_core::order::{self, OrderOutcome, OrderRequest};
use pedalstock_core::shopping_list::ShoppingList;
use pedalstock_core::storage::KeyValueStore;
use pedalstock_core::template::{Template, TemplateRegistry};
use pedalstock_core::types::Quantity;

use crate::repositories::{InventoryRepo, TemplateRepo};

pub struct Session {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<Catalog>,
    inventory: Inventory,
    templates: TemplateRegistry,
}

impl Session {
    /// Load both snapshots from `store`, defaulting whatever is missing or
    /// unreadable.
    pub async fn hydrate(store: Arc<dyn KeyValueStore>, catalog: Arc<Catalog>) -> Self {
        let inventory = InventoryRepo::load(store.as_ref(), &catalog).await;
        let templates = TemplateRepo::load(store.as_ref()).await;
        tracing::info!(
            inventory_entries = inventory.len(),
            templates = templates.len(),
            "Session hydrated",
        );
        Self {
            store,
            catalog,
            inventory,
            templates,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Replace the inventory with manually entered values.
    pub async fn set_inventory<K>(
        &mut self,
        values: impl IntoIterator<Item = (K, serde_json::Value)>,
    ) -> &Inventory
    where
        K: Into<String>,
    {
        self.inventory = Inventory::set_manual(&self.catalog, values);
        InventoryRepo::save(self.store.as_ref(), &self.inventory).await;
        tracing::info!(entries = self.inventory.len(), "Inventory updated manually");
        &self.inventory
    }

    /// Append a template. A rejected name leaves the registry untouched and
    /// nothing is saved.
    pub async fn add_template(
        &mut self,
        name: &str,
        components: IndexMap<String, Quantity>,
    ) -> Result<&Template, CoreError> {
        self.templates = self.templates.add(name, components)?;
        TemplateRepo::save(self.store.as_ref(), &self.templates).await;

        let template = self
            .templates
            .last()
            .ok_or_else(|| CoreError::Internal("template missing after append".into()))?;
        tracing::info!(
            name = %template.name,
            index = self.templates.len() - 1,
            "Template saved",
        );
        Ok(template)
    }

    /// Apply an order. Only a placed order replaces and saves the inventory.
    pub async fn place_order(&mut self, request: &OrderRequest) -> OrderOutcome {
        let outcome = order::apply(&self.inventory, &self.templates, request);
        match &outcome {
            OrderOutcome::Placed(result) => {
                self.inventory = result.inventory.clone();
                InventoryRepo::save(self.store.as_ref(), &self.inventory).await;
                tracing::info!(applied = ?result.applied, "Order placed");
            }
            OrderOutcome::NothingOrdered => {
                tracing::debug!("Order submitted with no positive quantities");
            }
        }
        outcome
    }

    pub fn shopping_list(&self) -> ShoppingList<'_> {
        ShoppingList::new(&self.inventory, &self.catalog)
    }

    pub fn stock_by_category(&self) -> Vec<CategoryStock<'_>> {
        stock_by_category(&self.inventory, &self.catalog)
    }
}
