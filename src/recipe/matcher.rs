//! Compound predicate matching.

use indexmap::IndexMap;

use super::selection::ResolvedSelection;
use crate::value::VariantValue;

/// Returns true if every `(group, value)` pair of `predicate` is in `resolved`.
///
/// Groups in `resolved` that the predicate does not mention are ignored. A
/// single missing or differing pair fails the whole predicate.
pub fn matches(predicate: &IndexMap<String, VariantValue>, resolved: &ResolvedSelection) -> bool {
    predicate
        .iter()
        .all(|(group, value)| resolved.get(group) == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::selection::Selection;

    fn predicate(pairs: &[(&str, &str)]) -> IndexMap<String, VariantValue> {
        pairs
            .iter()
            .map(|(g, v)| (g.to_string(), VariantValue::from(*v)))
            .collect()
    }

    fn resolved(pairs: &[(&str, &str)]) -> ResolvedSelection {
        let selection: Selection = pairs.iter().copied().collect();
        ResolvedSelection::resolve(&IndexMap::new(), &selection)
    }

    #[test]
    fn test_exact_match() {
        let p = predicate(&[("a", "x"), ("b", "y")]);
        assert!(matches(&p, &resolved(&[("a", "x"), ("b", "y")])));
    }

    #[test]
    fn test_differing_value_fails() {
        let p = predicate(&[("a", "x"), ("b", "y")]);
        assert!(!matches(&p, &resolved(&[("a", "x"), ("b", "z")])));
    }

    #[test]
    fn test_missing_group_fails() {
        let p = predicate(&[("a", "x"), ("b", "y")]);
        assert!(!matches(&p, &resolved(&[("a", "x")])));
    }

    #[test]
    fn test_extra_groups_are_ignored() {
        let p = predicate(&[("a", "x"), ("b", "y")]);
        assert!(matches(&p, &resolved(&[("c", "q"), ("a", "x"), ("b", "y")])));
    }

    #[test]
    fn test_boolean_forms_match() {
        let mut p = IndexMap::new();
        p.insert("primary".to_string(), VariantValue::from(true));
        let selection = Selection::new().set("primary", "true");
        assert!(matches(&p, &ResolvedSelection::resolve(&IndexMap::new(), &selection)));
    }
}
