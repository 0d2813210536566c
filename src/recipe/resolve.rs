//! Resolving a selection to an ordered list of class names.

use indexmap::IndexMap;

use super::compile::CompiledTable;
use super::matcher::matches;
use super::recipe::CompoundVariant;
use super::selection::{ResolvedSelection, Selection};
use crate::key::{compound_key, variant_key, BASE_KEY};
use crate::registry::ClassName;
use crate::value::VariantValue;

/// Returns the class names that apply to `selection`, in application order.
///
/// 1. The base class.
/// 2. One class per resolved `(group, value)` pair, in [`ResolvedSelection`] order.
///    Pairs with no entry in `table` are skipped silently.
/// 3. One class per compound whose predicate matches, in declaration order,
///    looked up under the compound's key.
///
/// Never fails. Later entries are meant to win over earlier ones when merged.
pub fn resolve<F>(
    table: &CompiledTable,
    defaults: &IndexMap<String, VariantValue>,
    compounds: &[CompoundVariant<F>],
    selection: &Selection,
) -> Vec<ClassName> {
    let resolved = ResolvedSelection::resolve(defaults, selection);
    let mut classes = Vec::with_capacity(1 + resolved.len());

    if let Some(base) = table.get(BASE_KEY) {
        classes.push(base.clone());
    }

    for (group, value) in resolved.pairs() {
        let key = variant_key(group, value);
        match table.get(&key) {
            Some(class) => classes.push(class.clone()),
            None => tracing::trace!(group = %group, value = %value, "no variant class; skipping"),
        }
    }

    for compound in compounds {
        if !matches(compound.predicate(), &resolved) {
            continue;
        }
        let key = compound_key(compound.predicate());
        if let Some(class) = table.get(&key) {
            classes.push(class.clone());
        }
    }

    classes
}
