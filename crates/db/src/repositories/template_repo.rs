//! Load and save the template registry snapshot.

use pedalstock_core::storage::{KeyValueStore, TEMPLATES_KEY};
use pedalstock_core::template::TemplateRegistry;

use super::{load_json, save_json};

/// Provides persistence for the template registry.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Load the saved registry, falling back to an empty one.
    ///
    /// Negative per-unit amounts in the snapshot are raised to 0 so an
    /// order can only ever add stock.
    pub async fn load(store: &dyn KeyValueStore) -> TemplateRegistry {
        match load_json::<TemplateRegistry>(store, TEMPLATES_KEY).await {
            Ok(Some(mut registry)) => {
                let clamped = registry.clamp_negative_quantities();
                if clamped > 0 {
                    tracing::warn!(key = TEMPLATES_KEY, clamped, "Negative template amounts reset to 0");
                }
                registry
            }
            Ok(None) => TemplateRegistry::default(),
            Err(e) => {
                tracing::warn!(key = TEMPLATES_KEY, error = %e, "Failed to load templates, starting empty");
                TemplateRegistry::default()
            }
        }
    }

    /// Persist the full registry. Failures are logged and swallowed.
    pub async fn save(store: &dyn KeyValueStore, registry: &TemplateRegistry) {
        match save_json(store, TEMPLATES_KEY, registry).await {
            Ok(()) => tracing::debug!(templates = registry.len(), "Templates saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save templates"),
        }
    }
}
