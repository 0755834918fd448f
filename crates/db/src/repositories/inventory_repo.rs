//! Load and save the inventory snapshot.

use pedalstock_core::catalog::Catalog;
use pedalstock_core::inventory::Inventory;
use pedalstock_core::storage::{KeyValueStore, INVENTORY_KEY};

use super::{load_json, save_json};

/// Provides persistence for the inventory store.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Load the saved inventory, falling back to all zeros.
    ///
    /// The result always has an entry for every catalog component; keys the
    /// catalog no longer lists are kept.
    pub async fn load(store: &dyn KeyValueStore, catalog: &Catalog) -> Inventory {
        let mut inventory = match load_json::<Inventory>(store, INVENTORY_KEY).await {
            Ok(Some(inventory)) => inventory,
            Ok(None) => {
                tracing::debug!(key = INVENTORY_KEY, "No saved inventory, using defaults");
                Inventory::with_defaults(catalog)
            }
            Err(e) => {
                tracing::warn!(key = INVENTORY_KEY, error = %e, "Failed to load inventory, using defaults");
                Inventory::with_defaults(catalog)
            }
        };
        inventory.backfill(catalog);
        inventory
    }

    /// Persist the full inventory. Failures are logged and swallowed.
    pub async fn save(store: &dyn KeyValueStore, inventory: &Inventory) {
        match save_json(store, INVENTORY_KEY, inventory).await {
            Ok(()) => tracing::debug!(entries = inventory.len(), "Inventory saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save inventory"),
        }
    }
}
