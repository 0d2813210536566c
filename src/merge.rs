//! Combining an ordered list of class names into one token.
//!
//! A [`ClassMerge`] receives the class names produced by resolution, in
//! order, and returns the final class attribute value. Entries later in the
//! list win over earlier ones for the same property; how that is enforced is
//! up to the merge function.

use indexmap::IndexMap;

use crate::registry::atomic::atomic_slot;
use crate::registry::ClassName;

/// Merges an ordered list of class names into a single token.
///
/// Any `Fn(&[ClassName]) -> String` is a `ClassMerge`.
pub trait ClassMerge {
    fn merge(&self, classes: &[ClassName]) -> String;
}

impl<T> ClassMerge for T
where
    T: Fn(&[ClassName]) -> String,
{
    fn merge(&self, classes: &[ClassName]) -> String {
        self(classes)
    }
}

/// Drops empty class names and joins the rest with spaces.
///
/// Does no conflict resolution; pairs with [`KeyRegistry`](crate::KeyRegistry).
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinClasses;

impl ClassMerge for JoinClasses {
    fn merge(&self, classes: &[ClassName]) -> String {
        classes
            .iter()
            .filter(|c| !c.is_empty())
            .map(ClassName::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Last-wins merge for class names produced by [`AtomicRegistry`](crate::AtomicRegistry).
///
/// Every class name is split into its atomic classes. For each property slot
/// only the last atomic class is kept, at the position where the slot first
/// appeared. Tokens that are not atomic classes are kept once, in order.
///
/// # Example
///
/// ```rust
/// use variant_recipes::{AtomicMerge, AtomicRegistry, ClassMerge, Declaration};
///
/// let padding = |value: &str| Declaration {
///     selector: String::new(),
///     property: "padding".into(),
///     value: value.into(),
/// };
/// let small = AtomicRegistry::class_for(&padding("0.25rem"));
/// let large = AtomicRegistry::class_for(&padding("0.75rem"));
///
/// let merged = AtomicMerge.merge(&[small.into(), large.clone().into()]);
/// assert_eq!(merged, large);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicMerge;

impl ClassMerge for AtomicMerge {
    fn merge(&self, classes: &[ClassName]) -> String {
        let mut slots: IndexMap<&str, &str> = IndexMap::new();
        for token in classes.iter().flat_map(|c| c.as_str().split_whitespace()) {
            // Plain tokens use themselves as slot so repeats collapse.
            let slot = atomic_slot(token).unwrap_or(token);
            slots.insert(slot, token);
        }
        slots.into_values().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AtomicRegistry;
    use crate::style::Declaration;

    fn class(property: &str, value: &str) -> String {
        AtomicRegistry::class_for(&Declaration {
            selector: String::new(),
            property: property.into(),
            value: value.into(),
        })
    }

    #[test]
    fn test_join_skips_empty() {
        let merged = JoinClasses.merge(&["base".into(), "".into(), "size_small".into()]);
        assert_eq!(merged, "base size_small");
    }

    #[test]
    fn test_closure_is_a_merge() {
        let merge = |classes: &[ClassName]| classes.len().to_string();
        assert_eq!(merge.merge(&["a".into(), "b".into()]), "2");
    }

    #[test]
    fn test_atomic_merge_last_wins_per_property() {
        let base = format!("{} {}", class("padding", "0.25rem"), class("margin", "1rem"));
        let large = class("padding", "0.75rem");

        let merged = AtomicMerge.merge(&[base.into(), large.clone().into()]);
        assert_eq!(merged, format!("{} {}", large, class("margin", "1rem")));
    }

    #[test]
    fn test_atomic_merge_keeps_plain_tokens_once() {
        let merged = AtomicMerge.merge(&["custom".into(), "other custom".into()]);
        assert_eq!(merged, "custom other");
    }

    #[test]
    fn test_atomic_merge_empty() {
        assert_eq!(AtomicMerge.merge(&[]), "");
        assert_eq!(AtomicMerge.merge(&[ClassName::default()]), "");
    }
}
