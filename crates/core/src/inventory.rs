//! Inventory store: on-hand quantity per component.
//!
//! The store is always replaced wholesale. Values coming from user input pass
//! through [`coerce_quantity`] before they reach the store, so a stored
//! quantity is never negative unless an older snapshot already held one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::Quantity;

// ---------------------------------------------------------------------------
// Input clamp
// ---------------------------------------------------------------------------

/// Coerce a raw input value into a non-negative quantity.
///
/// - integers pass through, negatives become 0
/// - floats truncate toward zero (`3.9` -> 3), NaN becomes 0
/// - strings parse their leading integer (`"12abc"` -> 12, `"abc"` -> 0)
/// - anything else (null, bool, array, object) becomes 0
pub fn coerce_quantity(value: &serde_json::Value) -> Quantity {
    use serde_json::Value;

    let raw = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                Quantity::MAX
            } else {
                // `as` saturates and maps NaN to 0.
                n.as_f64().map_or(0, |f| f.trunc() as Quantity)
            }
        }
        Value::String(s) => parse_leading_integer(s),
        _ => 0,
    };
    raw.max(0)
}

/// Parse an optional sign followed by digits at the start of `s`, ignoring
/// leading whitespace and anything after the digits. Saturates on overflow.
fn parse_leading_integer(s: &str) -> Quantity {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: Quantity = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(Quantity::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// Mapping from component name to on-hand quantity, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(IndexMap<String, Quantity>);

impl Inventory {
    /// An all-zero inventory with one entry per catalog component.
    pub fn with_defaults(catalog: &Catalog) -> Self {
        let mut inventory = Self::default();
        inventory.backfill(catalog);
        inventory
    }

    /// Wholesale replacement from raw user input.
    ///
    /// Every value is clamped with [`coerce_quantity`]; catalog components the
    /// input does not mention are kept at 0 so the store stays dense.
    pub fn set_manual<K>(
        catalog: &Catalog,
        values: impl IntoIterator<Item = (K, serde_json::Value)>,
    ) -> Self
    where
        K: Into<String>,
    {
        let mut inventory = Self::with_defaults(catalog);
        for (name, value) in values {
            inventory.0.insert(name.into(), coerce_quantity(&value));
        }
        inventory
    }

    /// Current quantity for `name`; absent or unknown names read as 0.
    pub fn quantity(&self, name: &str) -> Quantity {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Whether `name` has an entry, catalog-listed or not.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Add `delta` to the entry for `name`, treating a missing entry as 0.
    pub fn add(&mut self, name: &str, delta: Quantity) {
        match self.0.get_mut(name) {
            Some(qty) => *qty = qty.saturating_add(delta),
            None => {
                self.0.insert(name.to_string(), delta);
            }
        }
    }

    /// Insert a 0 entry for every catalog component that has none. Keys the
    /// catalog does not know about are left in place.
    pub fn backfill(&mut self, catalog: &Catalog) {
        for item in catalog.all_components() {
            if !self.0.contains_key(item.name) {
                self.0.insert(item.name.to_string(), 0);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.0.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Quantity)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (K, Quantity)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ---------------------------------------------------------------------------
// Stock view
// ---------------------------------------------------------------------------

/// One component row in the per-category stock view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLine<'a> {
    pub name: &'a str,
    pub quantity: Quantity,
    pub out_of_stock: bool,
}

/// A category heading with its component rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock<'a> {
    pub category: &'a str,
    pub items: Vec<StockLine<'a>>,
}

/// Group the inventory by catalog category, flagging rows at or below zero.
pub fn stock_by_category<'a>(
    inventory: &Inventory,
    catalog: &'a Catalog,
) -> Vec<CategoryStock<'a>> {
    catalog
        .categories()
        .iter()
        .map(|(category, names)| CategoryStock {
            category: category.as_str(),
            items: names
                .iter()
                .map(|name| {
                    let quantity = inventory.quantity(name);
                    StockLine {
                        name: name.as_str(),
                        quantity,
                        out_of_stock: quantity <= 0,
                    }
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
