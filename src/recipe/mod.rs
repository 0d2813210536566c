//! Recipes: declaration, compilation and resolution.
//!
//! This module provides:
//!
//! - [`Recipe`] and [`CompoundVariant`]: The declarative surface
//! - [`compile`]: Turns a recipe into an immutable [`CompiledTable`]
//! - [`matches`]: Subset matching of compound predicates
//! - [`resolve`]: Turns a [`Selection`] into ordered class names
//! - [`VariantStyles`]: A compiled recipe bound to a merge function
//!
//! Compilation happens once; resolution is a pure read of the compiled
//! table and may run concurrently from any number of threads.

mod compile;
mod matcher;
#[allow(clippy::module_inception)]
mod recipe;
mod resolve;
mod selection;
mod styles;

pub use compile::{compile, CompiledTable, KeyCollision, KeyOwner};
pub use matcher::matches;
pub use recipe::{CompoundVariant, Recipe};
pub use resolve::resolve;
pub use selection::{ResolvedSelection, Selection};
pub use styles::VariantStyles;
