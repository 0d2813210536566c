//! Canonical keys for the compiled class table.
//!
//! Every style fragment in a recipe is stored under a string key:
//!
//! | Fragment | Key |
//! |----------|-----|
//! | base | `"base"` |
//! | group `size`, value `small` | `"size_small"` |
//! | compound `{ primary: true, size: small }` | `"small_true"` |
//!
//! Compound keys are built from the predicate's values only, sorted and
//! joined. Group names do not take part, so two compounds with the same value
//! set share one key. See [`compound_key`].

use crate::error::{ConfigurationError, NameKind};
use crate::value::VariantValue;

/// Separator between the parts of a canonical key.
pub const SEPARATOR: char = '_';

/// Key of the base fragment.
pub const BASE_KEY: &str = "base";

/// Returns the key for one `(group, value)` pair.
///
/// # Example
///
/// ```rust
/// use variant_recipes::key::variant_key;
///
/// assert_eq!(variant_key("size", &"small".into()), "size_small");
/// assert_eq!(variant_key("primary", &true.into()), "primary_true");
/// ```
pub fn variant_key(group: &str, value: &VariantValue) -> String {
    let mut key = String::with_capacity(group.len() + 1 + value.as_str().len());
    key.push_str(group);
    key.push(SEPARATOR);
    key.push_str(value.as_str());
    key
}

/// Returns the key for a compound predicate.
///
/// Only the predicate's values are used: they are sorted and joined with
/// [`SEPARATOR`]. `{ colorA: x, colorB: y }` and `{ sizeA: x, sizeB: y }`
/// both yield `"x_y"`.
///
/// ```rust
/// use variant_recipes::key::compound_key;
/// use variant_recipes::VariantValue;
///
/// let (large, blue) = (VariantValue::from("large"), VariantValue::from("blue"));
/// let key = compound_key([("size", &large), ("color", &blue)]);
/// assert_eq!(key, "blue_large");
/// ```
pub fn compound_key<'a, I, G>(predicate: I) -> String
where
    I: IntoIterator<Item = (G, &'a VariantValue)>,
    G: AsRef<str>,
{
    let mut values: Vec<&str> = predicate.into_iter().map(|(_, v)| v.as_str()).collect();
    values.sort_unstable();
    values.join(&SEPARATOR.to_string())
}

/// Rejects names that would make [`variant_key`] ambiguous.
pub(crate) fn validate_name(kind: NameKind, name: &str) -> Result<(), ConfigurationError> {
    if name.contains(SEPARATOR) {
        return Err(ConfigurationError::SeparatorInName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VariantValue {
        VariantValue::from(s)
    }

    #[test]
    fn test_variant_key() {
        assert_eq!(variant_key("color", &v("blue")), "color_blue");
        assert_eq!(variant_key("disabled", &VariantValue::from(false)), "disabled_false");
    }

    #[test]
    fn test_compound_key_sorts_values() {
        let a = compound_key([("color", &v("blue")), ("size", &v("large"))]);
        let b = compound_key([("size", &v("large")), ("color", &v("blue"))]);
        assert_eq!(a, "blue_large");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compound_key_ignores_group_names() {
        let a = compound_key([("colorA", &v("x")), ("colorB", &v("y"))]);
        let b = compound_key([("sizeA", &v("x")), ("sizeB", &v("y"))]);
        assert_eq!(a, "x_y");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compound_key_with_boolean() {
        let key = compound_key([("primary", &VariantValue::from(true)), ("size", &v("small"))]);
        assert_eq!(key, "small_true");
    }

    #[test]
    fn test_compound_key_single_value() {
        assert_eq!(compound_key([("size", &v("small"))]), "small");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name(NameKind::Group, "size").is_ok());
        assert!(matches!(
            validate_name(NameKind::Value, "extra_large"),
            Err(ConfigurationError::SeparatorInName {
                kind: NameKind::Value,
                ..
            })
        ));
    }
}
