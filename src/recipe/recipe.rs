//! Recipe declarations.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::style::StyleFragment;
use crate::value::VariantValue;

/// An override style that applies when every listed `(group, value)` pair is selected.
///
/// # Example
///
/// ```rust
/// use variant_recipes::{CompoundVariant, StyleFragment};
///
/// let compound = CompoundVariant::new(StyleFragment::new().set("padding", "0.75rem"))
///     .when("primary", true)
///     .when("size", "large");
///
/// assert_eq!(compound.predicate().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant<F = StyleFragment> {
    #[serde(rename = "variants")]
    predicate: IndexMap<String, VariantValue>,
    style: F,
}

impl<F> CompoundVariant<F> {
    /// Creates a compound with an empty predicate. Add conditions with [`when`](Self::when).
    pub fn new(style: F) -> Self {
        Self {
            predicate: IndexMap::new(),
            style,
        }
    }

    /// Adds a `(group, value)` condition, returning the compound for chaining.
    pub fn when<V: Into<VariantValue>>(mut self, group: &str, value: V) -> Self {
        self.predicate.insert(group.to_string(), value.into());
        self
    }

    pub fn predicate(&self) -> &IndexMap<String, VariantValue> {
        &self.predicate
    }

    pub fn style(&self) -> &F {
        &self.style
    }
}

/// A declarative style recipe: a base, variant groups, compounds and defaults.
///
/// Recipes are plain data. Turn one into something usable with
/// [`compile`](crate::compile) or [`VariantStyles::new`](crate::VariantStyles::new).
///
/// # Example
///
/// ```rust
/// use variant_recipes::{CompoundVariant, Recipe, StyleFragment};
///
/// let recipe = Recipe::new()
///     .base(StyleFragment::new().set("cursor", "pointer"))
///     .variant("size", "small", StyleFragment::new().set("fontSize", "0.75rem"))
///     .variant("size", "large", StyleFragment::new().set("fontSize", "1.25rem"))
///     .variant("primary", true, StyleFragment::new().set("color", "white"))
///     .compound(
///         CompoundVariant::new(StyleFragment::new().set("padding", "0.75rem"))
///             .when("primary", true)
///             .when("size", "large"),
///     )
///     .default_variant("size", "large");
///
/// assert_eq!(recipe.variants().len(), 2);
/// ```
///
/// The same recipe can be written as YAML:
///
/// ```rust
/// use variant_recipes::Recipe;
///
/// let recipe: Recipe = Recipe::from_yaml(r#"
/// base:
///   cursor: pointer
/// variants:
///   size:
///     small: { fontSize: 0.75rem }
///     large: { fontSize: 1.25rem }
///   primary:
///     true: { color: white }
/// compoundVariants:
///   - variants: { primary: true, size: large }
///     style: { padding: 0.75rem }
/// defaultVariants:
///   size: large
/// "#).unwrap();
///
/// assert_eq!(recipe.compound_variants().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "F: Deserialize<'de> + Default")
)]
pub struct Recipe<F = StyleFragment> {
    #[serde(default)]
    base: F,
    #[serde(default)]
    variants: IndexMap<String, IndexMap<VariantValue, F>>,
    #[serde(default, alias = "compound_variants")]
    compound_variants: Vec<CompoundVariant<F>>,
    #[serde(default, alias = "default_variants")]
    default_variants: IndexMap<String, VariantValue>,
}

impl<F: Default> Recipe<F> {
    /// Creates a recipe with an empty base and no variants.
    pub fn new() -> Self {
        Self {
            base: F::default(),
            variants: IndexMap::new(),
            compound_variants: Vec::new(),
            default_variants: IndexMap::new(),
        }
    }
}

impl<F: Default> Default for Recipe<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Recipe<F> {
    /// Sets the base fragment, applied to every resolution.
    pub fn base(mut self, fragment: F) -> Self {
        self.base = fragment;
        self
    }

    /// Declares `value` in `group`, creating the group on first use.
    ///
    /// Groups and values keep their declaration order.
    pub fn variant<V: Into<VariantValue>>(mut self, group: &str, value: V, fragment: F) -> Self {
        self.variants
            .entry(group.to_string())
            .or_default()
            .insert(value.into(), fragment);
        self
    }

    /// Appends a compound variant.
    pub fn compound(mut self, compound: CompoundVariant<F>) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// Sets the value used for `group` when a selection omits it.
    pub fn default_variant<V: Into<VariantValue>>(mut self, group: &str, value: V) -> Self {
        self.default_variants.insert(group.to_string(), value.into());
        self
    }

    pub fn base_style(&self) -> &F {
        &self.base
    }

    pub fn variants(&self) -> &IndexMap<String, IndexMap<VariantValue, F>> {
        &self.variants
    }

    pub fn compound_variants(&self) -> &[CompoundVariant<F>] {
        &self.compound_variants
    }

    pub fn default_variants(&self) -> &IndexMap<String, VariantValue> {
        &self.default_variants
    }
}

impl<F: DeserializeOwned + Default> Recipe<F> {
    /// Parses a recipe from YAML.
    ///
    /// Mapping order in the document is kept; it decides key order in the
    /// compiled table and compound evaluation order.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
