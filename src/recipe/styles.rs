//! Pre-compiled recipes bound to a merge function.

use indexmap::IndexMap;

use super::compile::{compile, CompiledTable};
use super::recipe::{CompoundVariant, Recipe};
use super::resolve::resolve;
use super::selection::Selection;
use crate::error::ConfigurationError;
use crate::merge::ClassMerge;
use crate::registry::{ClassName, StyleRegistry};
use crate::value::VariantValue;

/// A compiled recipe, ready to turn selections into class tokens.
///
/// Compile once (typically in a `static`), then call [`class_name`](Self::class_name)
/// as often as needed. Resolution only reads the compiled table, so a
/// `VariantStyles` can be shared across threads without locking.
///
/// # Example
///
/// ```rust
/// use variant_recipes::{
///     CompoundVariant, JoinClasses, KeyRegistry, Recipe, Selection, StyleFragment, VariantStyles,
/// };
///
/// let recipe = Recipe::new()
///     .variant("color", "blue", StyleFragment::new().set("color", "blue"))
///     .variant("size", "large", StyleFragment::new().set("fontSize", "18px"))
///     .compound(
///         CompoundVariant::new(StyleFragment::new().set("fontWeight", "bold"))
///             .when("color", "blue")
///             .when("size", "large"),
///     );
///
/// let button = VariantStyles::new(recipe, &KeyRegistry, JoinClasses).unwrap();
/// let class = button.class_name(&Selection::new().set("color", "blue").set("size", "large"));
/// assert_eq!(class, "base color_blue size_large blue_large");
/// ```
#[derive(Debug, Clone)]
pub struct VariantStyles<M, F = crate::style::StyleFragment> {
    table: CompiledTable,
    defaults: IndexMap<String, VariantValue>,
    compounds: Vec<CompoundVariant<F>>,
    merge: M,
}

impl<M: ClassMerge, F: Clone> VariantStyles<M, F> {
    /// Compiles `recipe` with `registry` and binds the result to `merge`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the recipe is invalid; see [`compile`].
    pub fn new<R>(recipe: Recipe<F>, registry: &R, merge: M) -> Result<Self, ConfigurationError>
    where
        R: StyleRegistry<F> + ?Sized,
    {
        let table = compile(&recipe, registry)?;
        Ok(Self {
            table,
            defaults: recipe.default_variants().clone(),
            compounds: recipe.compound_variants().to_vec(),
            merge,
        })
    }

    /// Returns the ordered, unmerged class names for `selection`.
    pub fn classes(&self, selection: &Selection) -> Vec<ClassName> {
        resolve(&self.table, &self.defaults, &self.compounds, selection)
    }

    /// Returns the merged class token for `selection`.
    pub fn class_name(&self, selection: &Selection) -> String {
        self.merge.merge(&self.classes(selection))
    }

    /// Returns the merged class token with only the defaults applied.
    pub fn default_class_name(&self) -> String {
        self.class_name(&Selection::new())
    }

    pub fn table(&self) -> &CompiledTable {
        &self.table
    }

    pub fn defaults(&self) -> &IndexMap<String, VariantValue> {
        &self.defaults
    }

    pub fn compounds(&self) -> &[CompoundVariant<F>] {
        &self.compounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{AtomicMerge, JoinClasses};
    use crate::registry::{AtomicRegistry, KeyRegistry};
    use crate::style::StyleFragment;

    fn sized() -> Recipe {
        Recipe::new()
            .base(StyleFragment::new().set("padding", "0.25rem"))
            .variant("size", "small", StyleFragment::new().set("fontSize", "12px"))
            .variant("size", "large", StyleFragment::new().set("padding", "0.75rem"))
            .default_variant("size", "small")
    }

    #[test]
    fn test_default_class_name() {
        let styles = VariantStyles::new(sized(), &KeyRegistry, JoinClasses).unwrap();
        assert_eq!(styles.default_class_name(), "base size_small");
    }

    #[test]
    fn test_override_replaces_default() {
        let styles = VariantStyles::new(sized(), &KeyRegistry, JoinClasses).unwrap();
        let classes = styles.classes(&Selection::new().set("size", "large"));
        assert_eq!(classes, vec![ClassName::from("base"), ClassName::from("size_large")]);
    }

    #[test]
    fn test_atomic_merge_applies_last_wins() {
        let registry = AtomicRegistry::new();
        let styles = VariantStyles::new(sized(), &registry, AtomicMerge).unwrap();

        let large = styles.class_name(&Selection::new().set("size", "large"));
        assert_eq!(large.split(' ').count(), 1);
        let rule = registry.rule(&large).unwrap();
        assert!(rule.contains("padding:0.75rem"));
    }

    #[test]
    fn test_invalid_recipe_is_rejected() {
        let recipe: Recipe = Recipe::new().variant("a_b", "c", StyleFragment::new());
        assert!(VariantStyles::new(recipe, &KeyRegistry, JoinClasses).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let styles = VariantStyles::new(sized(), &KeyRegistry, JoinClasses).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let styles = &styles;
                    scope.spawn(move || {
                        let size = if i % 2 == 0 { "small" } else { "large" };
                        styles.class_name(&Selection::new().set("size", size))
                    })
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let expected = if i % 2 == 0 { "base size_small" } else { "base size_large" };
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
