//! Recipe configuration errors.

use crate::key::SEPARATOR;

/// Which kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// A variant group name.
    Group,
    /// A value name inside a variant group, a compound predicate, or the defaults.
    Value,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Group => write!(f, "group"),
            NameKind::Value => write!(f, "value"),
        }
    }
}

/// Error returned when a recipe cannot be compiled.
///
/// These only ever surface at compile time. Resolving a selection against a
/// compiled recipe is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A group or value name contains the key separator.
    #[error("{kind} name '{name}' contains the reserved separator '{}'", SEPARATOR)]
    SeparatorInName { kind: NameKind, name: String },

    /// A compound predicate references a group the recipe never declares.
    #[error("compound variant #{index} references undeclared group '{group}'")]
    UndeclaredGroup { index: usize, group: String },

    /// A compound predicate with no conditions.
    #[error("compound variant #{index} has an empty predicate")]
    EmptyPredicate { index: usize },

    /// The style registry returned no identifier for a submitted key.
    #[error("style registry returned no class for key '{key}'")]
    Unregistered { key: String },
}
