//! Shopping list: catalog components whose stock is at or below zero.

use serde::Serialize;

use crate::catalog::{Catalog, ComponentItem};
use crate::inventory::Inventory;
use crate::types::Quantity;

/// A component that needs restocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShoppingListEntry<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub quantity: Quantity,
}

/// Lazily derived view over the catalog, filtered by `quantity <= 0`.
///
/// Holds no data of its own; every call to [`ShoppingList::iter`] walks the
/// catalog again, so the view is always consistent with the inventory it
/// borrows.
#[derive(Debug, Clone, Copy)]
pub struct ShoppingList<'a> {
    inventory: &'a Inventory,
    catalog: &'a Catalog,
}

impl<'a> ShoppingList<'a> {
    pub fn new(inventory: &'a Inventory, catalog: &'a Catalog) -> Self {
        Self { inventory, catalog }
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ShoppingListEntry<'a>> + Clone + 'a {
        let inventory = self.inventory;
        let catalog = self.catalog;
        catalog
            .all_components()
            .filter_map(move |ComponentItem { name, category }| {
                let quantity = inventory.quantity(name);
                (quantity <= 0).then_some(ShoppingListEntry {
                    name,
                    category,
                    quantity,
                })
            })
    }

    pub fn entries(&self) -> Vec<ShoppingListEntry<'a>> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// `true` when nothing needs buying.
    pub fn is_fully_stocked(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.is_fully_stocked()
    }
}

/// Derive the shopping list for `inventory` against `catalog`.
pub fn compute<'a>(inventory: &'a Inventory, catalog: &'a Catalog) -> ShoppingList<'a> {
    ShoppingList::new(inventory, catalog)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
