//! Style registration: turning fragments into class names.
//!
//! A [`StyleRegistry`] receives every fragment of a recipe in one batch,
//! keyed by canonical key, and hands back one opaque [`ClassName`] per key.
//! How class names are made, and whether identical content is shared, is
//! entirely up to the registry.
//!
//! Two registries ship with the crate:
//!
//! | Registry | Class name for a fragment | Use |
//! |----------|---------------------------|-----|
//! | [`KeyRegistry`] | its canonical key (`"size_small"`) | tests, debugging |
//! | [`AtomicRegistry`] | one atomic class per declaration | real CSS output |
//!
//! Registries take `&self`: a registry shared between recipes (and threads)
//! synchronizes its own state.

pub(crate) mod atomic;

use indexmap::IndexMap;

pub use atomic::AtomicRegistry;

/// An opaque, stable identifier for one registered fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ClassName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Turns style fragments into class names.
///
/// Called exactly once per compiled recipe, with the recipe's full key set.
/// Implementations must return an entry for every submitted key.
pub trait StyleRegistry<F> {
    fn register(&self, fragments: IndexMap<String, F>) -> IndexMap<String, ClassName>;
}

impl<F, R: StyleRegistry<F> + ?Sized> StyleRegistry<F> for &R {
    fn register(&self, fragments: IndexMap<String, F>) -> IndexMap<String, ClassName> {
        (**self).register(fragments)
    }
}

/// Registry that names every fragment after its own canonical key.
///
/// Fragment content is ignored, which makes resolution output easy to read:
///
/// ```rust
/// use variant_recipes::{compile, KeyRegistry, Recipe, StyleFragment};
///
/// let recipe = Recipe::new().variant("size", "small", StyleFragment::new());
/// let table = compile(&recipe, &KeyRegistry).unwrap();
/// assert_eq!(table.get("size_small").unwrap().as_str(), "size_small");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRegistry;

impl<F> StyleRegistry<F> for KeyRegistry {
    fn register(&self, fragments: IndexMap<String, F>) -> IndexMap<String, ClassName> {
        fragments
            .into_keys()
            .map(|key| {
                let class = ClassName::new(key.clone());
                (key, class)
            })
            .collect()
    }
}
