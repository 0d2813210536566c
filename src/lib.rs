//! # Variant Recipes - Compile-Once Style Variants
//!
//! `variant-recipes` turns a declarative style recipe into class names.
//!
//! A recipe has a base style, named groups of mutually exclusive variant
//! values, compound variants that apply when several values are selected
//! together, and default values for groups the caller leaves out. The recipe
//! is compiled once into an immutable table; every call afterwards resolves a
//! selection to an ordered list of class names and merges them into one token.
//!
//! ## Core Concepts
//!
//! - [`Recipe`]: The declaration, built in code or loaded from YAML
//! - [`compile`]: Builds a [`CompiledTable`] through a [`StyleRegistry`]
//! - [`resolve`]: Ordered class names for a [`Selection`]
//! - [`VariantStyles`]: A compiled recipe bound to a [`ClassMerge`]
//! - [`AtomicRegistry`] / [`AtomicMerge`]: Atomic CSS with last-wins merging
//! - [`KeyRegistry`] / [`JoinClasses`]: Readable class names for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use variant_recipes::{
//!     AtomicMerge, AtomicRegistry, CompoundVariant, Recipe, Selection, StyleFragment,
//!     VariantStyles,
//! };
//!
//! let registry = AtomicRegistry::new();
//! let button = VariantStyles::new(
//!     Recipe::new()
//!         .base(StyleFragment::new().set("padding", "0.25rem").set("border", "none"))
//!         .variant("primary", true, StyleFragment::new().set("backgroundColor", "blue"))
//!         .variant("primary", false, StyleFragment::new().set("backgroundColor", "gray"))
//!         .variant("size", "small", StyleFragment::new().set("fontSize", "0.75rem"))
//!         .variant("size", "large", StyleFragment::new().set("padding", "0.5rem"))
//!         .compound(
//!             CompoundVariant::new(StyleFragment::new().set("padding", "0.75rem"))
//!                 .when("primary", true)
//!                 .when("size", "large"),
//!         )
//!         .default_variant("primary", true)
//!         .default_variant("size", "large"),
//!     &registry,
//!     AtomicMerge,
//! )
//! .unwrap();
//!
//! let class = button.class_name(&Selection::new().set("size", "small"));
//! assert!(!class.is_empty());
//! println!("{}", registry.css_text());
//! ```
//!
//! ## Compound Keys
//!
//! Compound variants are stored under a key built from their predicate's
//! values alone, sorted and joined with `_`. Two compounds over different
//! groups but with the same values share a key, and the one declared later
//! wins. Such collisions are logged with `tracing` at `warn` level and listed
//! by [`CompiledTable::collisions`].
//!
//! ## Unknown Selections
//!
//! Resolution never fails. A selected group or value that the recipe does
//! not declare contributes no class.

pub mod error;
pub mod key;
pub mod merge;
pub mod recipe;
pub mod registry;
pub mod style;
mod util;
mod value;

pub use error::{ConfigurationError, NameKind};
pub use merge::{AtomicMerge, ClassMerge, JoinClasses};
pub use recipe::{
    compile, matches, resolve, CompiledTable, CompoundVariant, KeyCollision, KeyOwner, Recipe,
    ResolvedSelection, Selection, VariantStyles,
};
pub use registry::{AtomicRegistry, ClassName, KeyRegistry, StyleRegistry};
pub use style::{Declaration, PropertyValue, StyleFragment};
pub use util::kebab_case;
pub use value::VariantValue;
