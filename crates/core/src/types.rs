/// Stock counts and per-build amounts. Signed so that a stale or hand-edited
/// snapshot holding a negative count still shows up on the shopping list.
pub type Quantity = i64;

/// Position of a template in the registry.
pub type TemplateIndex = usize;
