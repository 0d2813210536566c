//! Caller selections and their resolution against defaults.

use indexmap::IndexMap;

use crate::value::VariantValue;

/// A caller's explicit, partial choice of variant values.
///
/// # Example
///
/// ```rust
/// use variant_recipes::Selection;
///
/// let selection = Selection::new()
///     .set("primary", true)
///     .set("size", "small")
///     .set_opt("tone", None::<&str>);
///
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: IndexMap<String, VariantValue>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses `value` for `group`. Setting a group again replaces its value in place.
    pub fn set<V: Into<VariantValue>>(mut self, group: &str, value: V) -> Self {
        self.values.insert(group.to_string(), value.into());
        self
    }

    /// Like [`set`](Self::set), but `None` leaves the group unselected so its default applies.
    pub fn set_opt<V: Into<VariantValue>>(self, group: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(group, value),
            None => self,
        }
    }

    pub fn get(&self, group: &str) -> Option<&VariantValue> {
        self.values.get(group)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter().map(|(g, v)| (g.as_str(), v))
    }
}

impl<G, V> FromIterator<(G, V)> for Selection
where
    G: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (G, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(g, v)| (g.into(), v.into()))
                .collect(),
        }
    }
}

/// Defaults overridden group-by-group by a [`Selection`], as an ordered list of pairs.
///
/// Order is the defaults' declaration order, followed by groups only the
/// selection names, in the order they were set. A selected value replaces
/// its default without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSelection {
    pairs: Vec<(String, VariantValue)>,
}

impl ResolvedSelection {
    /// Merges `selection` over `defaults`.
    pub fn resolve(defaults: &IndexMap<String, VariantValue>, selection: &Selection) -> Self {
        let mut merged = defaults.clone();
        for (group, value) in selection.iter() {
            merged.insert(group.to_string(), value.clone());
        }
        Self {
            pairs: merged.into_iter().collect(),
        }
    }

    /// Returns the value resolved for `group`, if any.
    pub fn get(&self, group: &str) -> Option<&VariantValue> {
        self.pairs
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, v)| v)
    }

    pub fn pairs(&self) -> &[(String, VariantValue)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> IndexMap<String, VariantValue> {
        let mut map = IndexMap::new();
        map.insert("color".to_string(), VariantValue::from("blue"));
        map.insert("size".to_string(), VariantValue::from("small"));
        map
    }

    fn groups(resolved: &ResolvedSelection) -> Vec<&str> {
        resolved.pairs().iter().map(|(g, _)| g.as_str()).collect()
    }

    #[test]
    fn test_resolve_empty_selection_uses_defaults() {
        let resolved = ResolvedSelection::resolve(&defaults(), &Selection::new());
        assert_eq!(groups(&resolved), vec!["color", "size"]);
        assert_eq!(resolved.get("size"), Some(&VariantValue::from("small")));
    }

    #[test]
    fn test_override_keeps_default_position() {
        let selection = Selection::new().set("tone", "loud").set("size", "large");
        let resolved = ResolvedSelection::resolve(&defaults(), &selection);

        assert_eq!(groups(&resolved), vec!["color", "size", "tone"]);
        assert_eq!(resolved.get("size"), Some(&VariantValue::from("large")));
    }

    #[test]
    fn test_set_opt_none_keeps_default() {
        let selection = Selection::new().set_opt("size", None::<&str>);
        let resolved = ResolvedSelection::resolve(&defaults(), &selection);
        assert_eq!(resolved.get("size"), Some(&VariantValue::from("small")));
    }

    #[test]
    fn test_groups_absent_everywhere_are_unresolved() {
        let resolved = ResolvedSelection::resolve(&IndexMap::new(), &Selection::new());
        assert!(resolved.is_empty());
        assert_eq!(resolved.get("color"), None);
    }

    #[test]
    fn test_selection_from_iter() {
        let selection: Selection = [("primary", true), ("disabled", false)].into_iter().collect();
        assert_eq!(selection.get("primary"), Some(&VariantValue::from("true")));
        assert_eq!(selection.len(), 2);
    }
}
