//! Build templates: a named pedal design as per-unit component quantities.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::inventory::coerce_quantity;
use crate::types::Quantity;

/// Message shown when a template is submitted without a usable name.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a pedal name.";

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A pedal design: component name to quantity required per single build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub components: IndexMap<String, Quantity>,
}

impl Template {
    /// Components this design actually uses (quantity above zero).
    pub fn used_components(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.components
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(name, qty)| (name.as_str(), *qty))
    }
}

/// Build a dense component map from a client submission.
///
/// The result has one entry per catalog component in catalog order: missing
/// components default to 0 and submitted values are clamped with
/// [`coerce_quantity`]. Names the catalog does not know are left out and
/// returned separately so callers can report them.
pub fn dense_components<K>(
    catalog: &Catalog,
    submitted: impl IntoIterator<Item = (K, serde_json::Value)>,
) -> (IndexMap<String, Quantity>, Vec<String>)
where
    K: Into<String>,
{
    let mut components: IndexMap<String, Quantity> = catalog
        .component_names()
        .into_iter()
        .map(|name| (name.to_string(), 0))
        .collect();

    let mut unknown = Vec::new();
    for (name, value) in submitted {
        let name = name.into();
        match components.get_mut(&name) {
            Some(qty) => *qty = coerce_quantity(&value),
            None => unknown.push(name),
        }
    }
    (components, unknown)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered list of templates. A template's position is the index used to
/// reference it when placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRegistry(Vec<Template>);

impl TemplateRegistry {
    pub fn new(templates: Vec<Template>) -> Self {
        Self(templates)
    }

    /// Return a new registry with a template appended.
    ///
    /// The name is trimmed; an empty or whitespace-only name is rejected and
    /// `self` is left as it was. Components are copied verbatim, zero
    /// entries included.
    pub fn add(
        &self,
        name: &str,
        components: IndexMap<String, Quantity>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation(EMPTY_NAME_MESSAGE.to_string()));
        }

        let mut templates = self.0.clone();
        templates.push(Template {
            name: name.to_string(),
            components,
        });
        Ok(Self(templates))
    }

    /// Raise every negative per-unit amount to 0 and return how many were
    /// changed. Registries built with [`TemplateRegistry::add`] never hold
    /// one; decoded snapshots might.
    pub fn clamp_negative_quantities(&mut self) -> usize {
        let mut clamped = 0;
        for qty in self.0.iter_mut().flat_map(|t| t.components.values_mut()) {
            if *qty < 0 {
                *qty = 0;
                clamped += 1;
            }
        }
        clamped
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.0.get(index)
    }

    pub fn last(&self) -> Option<&Template> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
