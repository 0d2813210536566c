//! Compiling a recipe into a class table.

use indexmap::IndexMap;

use super::recipe::Recipe;
use crate::error::{ConfigurationError, NameKind};
use crate::key::{compound_key, validate_name, variant_key, BASE_KEY};
use crate::registry::{ClassName, StyleRegistry};

/// Two fragments that compiled to the same key; only the later one survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    /// The shared key.
    pub key: String,
    /// Index of the compound that took the key over.
    pub compound: usize,
    /// What held the key before.
    pub shadowed: KeyOwner,
}

/// The origin of an entry in the fragment map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOwner {
    Base,
    Variant,
    Compound(usize),
}

/// Immutable mapping from canonical key to class name, built once per recipe.
///
/// Keys appear in compile order: `"base"`, then every `(group, value)` pair
/// in declaration order, then compound keys in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTable {
    classes: IndexMap<String, ClassName>,
    collisions: Vec<KeyCollision>,
}

impl CompiledTable {
    pub fn get(&self, key: &str) -> Option<&ClassName> {
        self.classes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassName)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Compound keys that overwrote an earlier entry during compilation.
    ///
    /// Compound keys are built from predicate values only, so compounds over
    /// different groups with equal value sets collide. The earlier fragment
    /// is unreachable; whoever looks the key up gets the later one.
    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }
}

/// Compiles `recipe` into a [`CompiledTable`].
///
/// Every fragment is collected under its canonical key and handed to
/// `registry` in a single call. A compound whose key is already taken
/// overwrites the earlier fragment; this is logged and recorded in
/// [`CompiledTable::collisions`], not rejected.
///
/// # Errors
///
/// - [`ConfigurationError::SeparatorInName`] if a group or value name contains `_`
/// - [`ConfigurationError::UndeclaredGroup`] if a compound names an unknown group
/// - [`ConfigurationError::EmptyPredicate`] if a compound has no conditions
/// - [`ConfigurationError::Unregistered`] if the registry leaves a key out
///
/// # Example
///
/// ```rust
/// use variant_recipes::{compile, CompoundVariant, KeyRegistry, Recipe, StyleFragment};
///
/// let recipe = Recipe::new()
///     .variant("color", "blue", StyleFragment::new())
///     .variant("size", "large", StyleFragment::new())
///     .compound(CompoundVariant::new(StyleFragment::new()).when("color", "blue").when("size", "large"));
///
/// let table = compile(&recipe, &KeyRegistry).unwrap();
/// let keys: Vec<&str> = table.keys().collect();
/// assert_eq!(keys, vec!["base", "color_blue", "size_large", "blue_large"]);
/// ```
pub fn compile<F, R>(recipe: &Recipe<F>, registry: &R) -> Result<CompiledTable, ConfigurationError>
where
    F: Clone,
    R: StyleRegistry<F> + ?Sized,
{
    validate(recipe)?;

    let mut fragments: IndexMap<String, F> = IndexMap::new();
    let mut owners: IndexMap<String, KeyOwner> = IndexMap::new();

    fragments.insert(BASE_KEY.to_string(), recipe.base_style().clone());
    owners.insert(BASE_KEY.to_string(), KeyOwner::Base);

    let mut value_count = 0;
    for (group, values) in recipe.variants() {
        for (value, fragment) in values {
            let key = variant_key(group, value);
            fragments.insert(key.clone(), fragment.clone());
            owners.insert(key, KeyOwner::Variant);
            value_count += 1;
        }
    }

    let mut collisions = Vec::new();
    for (index, compound) in recipe.compound_variants().iter().enumerate() {
        let key = compound_key(compound.predicate());
        if let Some(shadowed) = owners.insert(key.clone(), KeyOwner::Compound(index)) {
            tracing::warn!(
                key = %key,
                compound = index,
                shadowed = ?shadowed,
                "compound variant key collides with an earlier entry; the earlier style is unreachable"
            );
            collisions.push(KeyCollision {
                key: key.clone(),
                compound: index,
                shadowed,
            });
        }
        fragments.insert(key, compound.style().clone());
    }

    let keys: Vec<String> = fragments.keys().cloned().collect();
    let mut registered = registry.register(fragments);

    let mut classes = IndexMap::with_capacity(keys.len());
    for key in keys {
        let class = registered
            .swap_remove(&key)
            .ok_or_else(|| ConfigurationError::Unregistered { key: key.clone() })?;
        classes.insert(key, class);
    }

    tracing::debug!(
        groups = recipe.variants().len(),
        values = value_count,
        compounds = recipe.compound_variants().len(),
        keys = classes.len(),
        "compiled variant recipe"
    );

    Ok(CompiledTable {
        classes,
        collisions,
    })
}

fn validate<F>(recipe: &Recipe<F>) -> Result<(), ConfigurationError> {
    for (group, values) in recipe.variants() {
        validate_name(NameKind::Group, group)?;
        for value in values.keys() {
            validate_name(NameKind::Value, value.as_str())?;
        }
    }

    for (index, compound) in recipe.compound_variants().iter().enumerate() {
        if compound.predicate().is_empty() {
            return Err(ConfigurationError::EmptyPredicate { index });
        }
        for (group, value) in compound.predicate() {
            if !recipe.variants().contains_key(group) {
                return Err(ConfigurationError::UndeclaredGroup {
                    index,
                    group: group.clone(),
                });
            }
            validate_name(NameKind::Value, value.as_str())?;
        }
    }

    for (group, value) in recipe.default_variants() {
        validate_name(NameKind::Group, group)?;
        validate_name(NameKind::Value, value.as_str())?;
    }

    Ok(())
}
