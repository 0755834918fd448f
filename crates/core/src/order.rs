//! Order engine: apply template build quantities to the inventory.
//!
//! Placing an order *adds* `amount_per_unit * quantity` of every template
//! component to stock. Per-unit amounts are never negative, so it never
//! subtracts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::inventory::{coerce_quantity, Inventory};
use crate::template::TemplateRegistry;
use crate::types::{Quantity, TemplateIndex};

/// Feedback shown when a submission has no positive quantity.
pub const NOTHING_ORDERED_MESSAGE: &str = "No orders placed, set a quantity first.";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Requested build quantity per template index, for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRequest(BTreeMap<TemplateIndex, Quantity>);

impl OrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from raw input values, clamping each with
    /// [`coerce_quantity`].
    pub fn from_values(
        values: impl IntoIterator<Item = (TemplateIndex, serde_json::Value)>,
    ) -> Self {
        Self(
            values
                .into_iter()
                .map(|(index, value)| (index, coerce_quantity(&value)))
                .collect(),
        )
    }

    pub fn with(mut self, index: TemplateIndex, quantity: Quantity) -> Self {
        self.0.insert(index, quantity);
        self
    }

    /// Quantity for `index`; absent and negative entries read as 0.
    pub fn quantity(&self, index: TemplateIndex) -> Quantity {
        self.0.get(&index).copied().unwrap_or(0).max(0)
    }
}

impl FromIterator<(TemplateIndex, Quantity)> for OrderRequest {
    fn from_iter<T: IntoIterator<Item = (TemplateIndex, Quantity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Inventory after an order plus the `"{qty}x {name}"` lines that were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderResult {
    pub inventory: Inventory,
    pub applied: Vec<String>,
}

/// Result of [`apply`]. `NothingOrdered` is feedback, not an error: the
/// caller must neither replace nor persist the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed(OrderResult),
    NothingOrdered,
}

impl OrderOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// User-facing summary of the submission.
    pub fn message(&self) -> String {
        match self {
            Self::Placed(result) => format!("Order placed: {}", result.applied.join(", ")),
            Self::NothingOrdered => NOTHING_ORDERED_MESSAGE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Apply `request` against `inventory`, walking templates in registry order.
///
/// Request indices with no matching template are ignored. The input
/// inventory is never modified; the updated copy is returned in
/// [`OrderOutcome::Placed`].
pub fn apply(
    inventory: &Inventory,
    templates: &TemplateRegistry,
    request: &OrderRequest,
) -> OrderOutcome {
    let mut updated = inventory.clone();
    let mut applied = Vec::new();

    for (index, template) in templates.iter().enumerate() {
        let qty = request.quantity(index);
        if qty <= 0 {
            continue;
        }
        for (component, per_unit) in &template.components {
            updated.add(component, per_unit.saturating_mul(qty));
        }
        applied.push(format!("{qty}x {}", template.name));
    }

    if applied.is_empty() {
        OrderOutcome::NothingOrdered
    } else {
        OrderOutcome::Placed(OrderResult {
            inventory: updated,
            applied,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use indexmap::IndexMap;
    use serde_json::json;

    use super::*;
    use crate::catalog::Catalog;

    fn registry(templates: Vec<(&str, Vec<(&str, Quantity)>)>) -> TemplateRegistry {
        templates
            .into_iter()
            .fold(TemplateRegistry::default(), |registry, (name, parts)| {
                let components: IndexMap<String, Quantity> =
                    parts.into_iter().map(|(n, q)| (n.to_string(), q)).collect();
                registry.add(name, components).unwrap()
            })
    }

    fn placed(outcome: OrderOutcome) -> OrderResult {
        match outcome {
            OrderOutcome::Placed(result) => result,
            OrderOutcome::NothingOrdered => panic!("expected a placed order"),
        }
    }

    #[test]
    fn fuzz_scenario_adds_per_unit_times_quantity() {
        let catalog = Catalog::new([("Resistors", vec!["100R"])]);
        let inventory = Inventory::with_defaults(&catalog);
        let templates = registry(vec![("Fuzz", vec![("100R", 2)])]);

        let result = placed(apply(&inventory, &templates, &OrderRequest::new().with(0, 3)));

        assert_eq!(result.inventory.quantity("100R"), 6);
        assert_eq!(result.applied, ["3x Fuzz"]);
    }

    #[test]
    fn all_zero_request_is_a_no_op() {
        let inventory: Inventory = [("100R", 4)].into_iter().collect();
        let templates = registry(vec![("Fuzz", vec![("100R", 2)]), ("Boost", vec![("1K", 1)])]);
        let request = OrderRequest::new().with(0, 0).with(1, 0);

        let outcome = apply(&inventory, &templates, &request);

        assert_matches!(outcome, OrderOutcome::NothingOrdered);
        assert_eq!(outcome.message(), NOTHING_ORDERED_MESSAGE);
        assert_eq!(inventory.quantity("100R"), 4);
    }

    #[test]
    fn empty_request_and_empty_registry_are_no_ops() {
        let inventory = Inventory::default();
        let templates = registry(vec![("Fuzz", vec![("100R", 2)])]);
        assert_matches!(
            apply(&inventory, &templates, &OrderRequest::new()),
            OrderOutcome::NothingOrdered
        );
        assert_matches!(
            apply(&inventory, &TemplateRegistry::default(), &OrderRequest::new().with(0, 5)),
            OrderOutcome::NothingOrdered
        );
    }

    #[test]
    fn negative_quantities_count_as_zero() {
        let inventory = Inventory::default();
        let templates = registry(vec![("Fuzz", vec![("100R", 2)])]);
        let outcome = apply(&inventory, &templates, &OrderRequest::new().with(0, -2));
        assert!(!outcome.is_placed());
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let inventory = Inventory::default();
        let templates = registry(vec![("Fuzz", vec![("100R", 1)])]);
        let request = OrderRequest::new().with(0, 1).with(7, 10);

        let result = placed(apply(&inventory, &templates, &request));
        assert_eq!(result.applied, ["1x Fuzz"]);
        assert_eq!(result.inventory.quantity("100R"), 1);
    }

    #[test]
    fn multiple_templates_apply_in_registry_order() {
        let inventory: Inventory = [("100R", 1), ("1K", 0), ("TL072CP", 0)].into_iter().collect();
        let templates = registry(vec![
            ("Klon", vec![("100R", 1), ("TL072CP", 1)]),
            ("Muff", vec![("100R", 2), ("1K", 4)]),
        ]);
        let request = OrderRequest::new().with(1, 2).with(0, 1);

        let outcome = apply(&inventory, &templates, &request);
        assert_eq!(outcome.message(), "Order placed: 1x Klon, 2x Muff");

        let result = placed(outcome);
        assert_eq!(result.inventory.quantity("100R"), 1 + 1 + 4);
        assert_eq!(result.inventory.quantity("1K"), 8);
        assert_eq!(result.inventory.quantity("TL072CP"), 1);
    }

    #[test]
    fn components_missing_from_inventory_start_at_zero() {
        let inventory = Inventory::default();
        let templates = registry(vec![("Phaser", vec![("V3207D", 1)])]);
        let result = placed(apply(&inventory, &templates, &OrderRequest::new().with(0, 2)));
        assert_eq!(result.inventory.quantity("V3207D"), 2);
    }

    #[test]
    fn zero_per_unit_entries_leave_stock_unchanged() {
        let inventory: Inventory = [("100R", 5), ("1K", 0)].into_iter().collect();
        let templates = registry(vec![("Boost", vec![("100R", 0), ("1K", 1)])]);
        let result = placed(apply(&inventory, &templates, &OrderRequest::new().with(0, 3)));
        assert_eq!(result.inventory.quantity("100R"), 5);
        assert_eq!(result.inventory.quantity("1K"), 3);
    }

    #[test]
    fn split_quantities_are_additive() {
        let templates = registry(vec![("Fuzz", vec![("100R", 2), ("BC548B", 3)])]);
        let start: Inventory = [("100R", 1), ("BC548B", 0)].into_iter().collect();

        for (q1, q2) in [(0, 5), (1, 4), (2, 3), (5, 0)] {
            let once = placed(apply(&start, &templates, &OrderRequest::new().with(0, q1 + q2)));

            let mut twice = start.clone();
            for q in [q1, q2] {
                if let OrderOutcome::Placed(step) =
                    apply(&twice, &templates, &OrderRequest::new().with(0, q))
                {
                    twice = step.inventory;
                }
            }
            assert_eq!(once.inventory, twice, "split {q1}+{q2}");
        }
    }

    #[test]
    fn input_inventory_is_not_mutated() {
        let inventory: Inventory = [("100R", 1)].into_iter().collect();
        let templates = registry(vec![("Fuzz", vec![("100R", 2)])]);
        let _ = apply(&inventory, &templates, &OrderRequest::new().with(0, 3));
        assert_eq!(inventory.quantity("100R"), 1);
    }

    #[test]
    fn request_from_raw_values_is_clamped() {
        let request =
            OrderRequest::from_values([(0, json!("3")), (1, json!(-1)), (2, json!(null))]);
        assert_eq!(request.quantity(0), 3);
        assert_eq!(request.quantity(1), 0);
        assert_eq!(request.quantity(2), 0);
        assert_eq!(request.quantity(9), 0);
    }

    #[test]
    fn huge_quantities_saturate_instead_of_overflowing() {
        let templates = registry(vec![("Fuzz", vec![("100R", Quantity::MAX)])]);
        let result = placed(apply(
            &Inventory::default(),
            &templates,
            &OrderRequest::new().with(0, 2),
        ));
        assert_eq!(result.inventory.quantity("100R"), Quantity::MAX);
    }
}
