//! Atomic CSS registry.

use std::sync::{Mutex, MutexGuard};

use indexmap::IndexMap;

use super::{ClassName, StyleRegistry};
use crate::style::{Declaration, StyleFragment};
use crate::util::{kebab_case, short_hash};

/// Registry that splits fragments into one class per declaration.
///
/// Each flattened declaration `(selector, property, value)` gets an atomic
/// class named `f<slot>-<value>`, where `<slot>` hashes the selector and
/// property and `<value>` hashes the value. A fragment's class name is the
/// space-separated list of its atomic classes, so identical declarations in
/// different fragments (or different recipes) share a class.
///
/// Because the slot is part of every class, [`AtomicMerge`](crate::AtomicMerge)
/// can resolve conflicts between fragments: the last class per slot wins.
///
/// # Example
///
/// ```rust
/// use variant_recipes::{AtomicRegistry, Recipe, StyleFragment, compile};
///
/// let registry = AtomicRegistry::new();
/// let recipe = Recipe::new()
///     .base(StyleFragment::new().set("padding", "0.25rem"))
///     .variant("size", "large", StyleFragment::new().set("padding", "0.75rem"));
///
/// let table = compile(&recipe, &registry).unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.css_text().contains("padding:0.75rem"));
/// ```
#[derive(Debug, Default)]
pub struct AtomicRegistry {
    /// Atomic class name to its CSS rule, in first-registration order.
    rules: Mutex<IndexMap<String, String>>,
}

impl AtomicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the atomic class for one declaration without registering it.
    pub fn class_for(declaration: &Declaration) -> String {
        let slot = short_hash(&[&declaration.selector, &declaration.property]);
        let value = short_hash(&[&declaration.value]);
        format!("f{}-{}", slot, value)
    }

    /// Returns every registered CSS rule, in registration order.
    pub fn rules(&self) -> Vec<String> {
        self.lock().values().cloned().collect()
    }

    /// Returns the rules joined into a style sheet, one rule per line.
    pub fn css_text(&self) -> String {
        self.rules().join("\n")
    }

    /// Returns the CSS rule registered for an atomic class.
    pub fn rule(&self, class: &str) -> Option<String> {
        self.lock().get(class).cloned()
    }

    /// Number of distinct atomic classes registered so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, String>> {
        // The map stays consistent even if a holder panicked mid-insert.
        self.rules.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn css_rule(class: &str, declaration: &Declaration) -> String {
    format!(
        ".{}{}{{{}:{};}}",
        class,
        declaration.selector.replace('&', ""),
        kebab_case(&declaration.property),
        declaration.value
    )
}

/// Returns the slot part of an atomic class name, or `None` for other tokens.
pub(crate) fn atomic_slot(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('f')?;
    let (slot, value) = rest.split_once('-')?;
    let is_hash = |s: &str| s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit());
    if is_hash(slot) && is_hash(value) {
        Some(slot)
    } else {
        None
    }
}

impl StyleRegistry<StyleFragment> for AtomicRegistry {
    fn register(&self, fragments: IndexMap<String, StyleFragment>) -> IndexMap<String, ClassName> {
        let mut rules = self.lock();
        let before = rules.len();

        let classes: IndexMap<String, ClassName> = fragments
            .into_iter()
            .map(|(key, fragment)| {
                let names: Vec<String> = fragment
                    .declarations()
                    .iter()
                    .map(|declaration| {
                        let class = Self::class_for(declaration);
                        rules
                            .entry(class.clone())
                            .or_insert_with(|| css_rule(&class, declaration));
                        class
                    })
                    .collect();
                (key, ClassName::new(names.join(" ")))
            })
            .collect();

        tracing::debug!(
            fragments = classes.len(),
            new_rules = rules.len() - before,
            "registered atomic styles"
        );
        classes
    }
}
