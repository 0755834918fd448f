//! Component catalog: the fixed list of known parts grouped by category.
//!
//! The catalog is configuration, not state. Category order and the order of
//! components inside a category are preserved because the inventory view and
//! the shopping list are both rendered in catalog order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Built-in parts list
// ---------------------------------------------------------------------------

/// Default guitar pedal parts, in display order.
const PEDAL_PARTS: &[(&str, &[&str])] = &[
    (
        "Resistors",
        &[
            "100R", "220R", "470R", "560R", "820R", "1K", "1.2K", "1K5", "1K8", "2K", "2.2K",
            "2.7K", "3.3K", "3K9", "4K7", "5K1", "5K6", "6.8K", "10K", "12K", "15K", "20K", "22K",
            "27K", "33K", "39K", "47K", "68K", "100K", "130K", "150K", "180K", "220K", "330K",
            "392K", "422K", "470K", "1M", "2M", "2.2M", "10M",
        ],
    ),
    (
        "Film Box Capacitors",
        &[
            "1nF", "2.2nF", "2.7nF", "3.3nF", "3.9nF", "4.7nF", "5.6nF", "8.2nF", "10nF", "18nF",
            "22nF", "27nF", "47nF", "56nF", "68nF", "82nF", "100nF", "120nF", "150nF", "220nF",
            "390nF", "470nF", "1000nF",
        ],
    ),
    (
        "Ceramic Capacitors",
        &[
            "15p",
            "47p",
            "100p",
            "120p",
            "220p",
            "250p",
            "390p (MLCC)",
            "470p",
            "680p",
            "820p (MLCC)",
            "220nF",
        ],
    ),
    (
        "Electrolytic Capacitors",
        &["1uF", "2.2uF", "4.7uF", "10uF", "22uF", "47uF", "100uF", "220uF"],
    ),
    (
        "Transistors",
        &[
            "J201",
            "2N2222A",
            "2N3906",
            "2N5088",
            "2N5457 - JFET",
            "2N7000",
            "BC548B",
        ],
    ),
    (
        "ICs",
        &[
            "JRC4558D",
            "JRC4580D",
            "LM833N",
            "OPA2134",
            "RC4558P",
            "TC1044SCPA",
            "TL072CP",
            "V3102D",
            "V3207D",
        ],
    ),
    (
        "Diodes",
        &[
            "BA282", "BAT41", "1N34A", "1N914", "1N4001", "1N4148", "1N4742A", "1N5239B", "1N5817",
        ],
    ),
    (
        "Potentiometers",
        &[
            "A10K Pot",
            "A100K Pot",
            "A250K Pot",
            "A250K Dual Pot",
            "A500K Pot",
            "A1M Pot",
            "B1K Pot",
            "B10K Pot",
            "B25K Pot",
            "B50K Pot",
            "B100K Pot",
            "B100K Dual Pot",
            "B500K Pot",
            "C1K Pot",
            "C10K Pot",
            "C25K Pot",
            "C50K Pot",
            "W20K Pot",
            "50k Trim Pot",
            "100k Trim Pot",
        ],
    ),
    (
        "Switches",
        &["DPDT", "3PDT latching footswitch", "SPDT Toggle Switch ON/ON"],
    ),
    (
        "Hardware",
        &[
            "DC Jack",
            "Input Jack",
            "Black MXR knob",
            "Blue MXR knob",
            "Clear MXR knob",
            "Cream MXR knob",
            "Green MXR knob",
            "Grey MXR knob",
            "Light Blue MXR knob",
            "Orange MXR knob",
            "Purple MXR knob",
            "Red MXR knob",
            "White MXR knob",
            "Yellow MXR knob",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A catalog component paired with the category it was listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentItem<'a> {
    pub name: &'a str,
    pub category: &'a str,
}

/// Ordered mapping from category name to the component names it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<String>>,
}

impl Catalog {
    /// Build a catalog from `(category, components)` pairs, keeping order.
    ///
    /// A category listed twice has its components appended to the first
    /// occurrence.
    pub fn new<C, N>(categories: impl IntoIterator<Item = (C, Vec<N>)>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for (category, names) in categories {
            map.entry(category.into())
                .or_default()
                .extend(names.into_iter().map(Into::into));
        }
        Self { categories: map }
    }

    /// The built-in guitar pedal parts catalog.
    pub fn pedal_parts() -> Self {
        Self::new(
            PEDAL_PARTS
                .iter()
                .map(|(category, names)| (*category, names.to_vec())),
        )
    }

    /// Parse a catalog from a JSON object of `{ "<category>": ["<name>", ...] }`.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let catalog: Self = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("Invalid catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Validation(format!(
                "Failed to read catalog file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    /// Ordered category view.
    pub fn categories(&self) -> &IndexMap<String, Vec<String>> {
        &self.categories
    }

    /// Every component in category-then-item order.
    ///
    /// A name listed under two categories appears once per category.
    pub fn all_components(&self) -> impl Iterator<Item = ComponentItem<'_>> + Clone + '_ {
        self.categories.iter().flat_map(|(category, names)| {
            names.iter().map(move |name| ComponentItem {
                name: name.as_str(),
                category: category.as_str(),
            })
        })
    }

    /// Distinct component names in first-seen order.
    pub fn component_names(&self) -> Vec<&str> {
        let mut seen = indexmap::IndexSet::new();
        for item in self.all_components() {
            seen.insert(item.name);
        }
        seen.into_iter().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories
            .values()
            .any(|names| names.iter().any(|n| n == name))
    }

    /// The first category that lists `name`.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.all_components()
            .find(|item| item.name == name)
            .map(|item| item.category)
    }

    /// Number of entries in [`Catalog::all_components`].
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> Result<(), CoreError> {
        for (category, names) in &self.categories {
            if category.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Catalog category names must not be empty".to_string(),
                ));
            }
            if names.iter().any(|n| n.trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "Catalog category '{category}' contains an empty component name"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
