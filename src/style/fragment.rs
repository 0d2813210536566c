//! The default style fragment type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value of one property in a [`StyleFragment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A unitless number, such as `opacity: 0.5`.
    Number(f64),
    /// A literal value, such as `padding: "0.25rem"`.
    Text(String),
    /// Styles applied under a nested selector, such as `":hover"`.
    Nested(StyleFragment),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<StyleFragment> for PropertyValue {
    fn from(value: StyleFragment) -> Self {
        PropertyValue::Nested(value)
    }
}

/// One flattened property: where it applies, what it sets, and to what.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// Concatenated nested selectors (`""` at the top level, `":hover"` inside a hover block).
    pub selector: String,
    /// Property name as written in the fragment (e.g. `"backgroundColor"`).
    pub property: String,
    /// Rendered value (e.g. `"0.5"`, `"darkblue"`).
    pub value: String,
}

/// An ordered bag of presentation properties.
///
/// Fragments are built with a fluent API or deserialized from a recipe file.
/// Setting a property twice keeps its original position and replaces the value.
///
/// # Example
///
/// ```rust
/// use variant_recipes::StyleFragment;
///
/// let primary = StyleFragment::new()
///     .set("backgroundColor", "blue")
///     .set("color", "white")
///     .nest(":hover", StyleFragment::new().set("backgroundColor", "darkblue"));
///
/// assert_eq!(primary.len(), 3);
/// assert_eq!(primary.declarations().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    properties: IndexMap<String, PropertyValue>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated fragment for chaining.
    pub fn set<V: Into<PropertyValue>>(mut self, property: &str, value: V) -> Self {
        self.properties.insert(property.to_string(), value.into());
        self
    }

    /// Adds a nested block applied under `selector`.
    pub fn nest(self, selector: &str, fragment: StyleFragment) -> Self {
        self.set(selector, fragment)
    }

    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over top-level entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattens the fragment, nested blocks included, in declaration order.
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, selector: &str, out: &mut Vec<Declaration>) {
        for (property, value) in &self.properties {
            match value {
                PropertyValue::Nested(inner) => {
                    let nested = format!("{}{}", selector, property);
                    inner.flatten_into(&nested, out);
                }
                PropertyValue::Number(n) => out.push(Declaration {
                    selector: selector.to_string(),
                    property: property.clone(),
                    value: n.to_string(),
                }),
                PropertyValue::Text(text) => out.push(Declaration {
                    selector: selector.to_string(),
                    property: property.clone(),
                    value: text.clone(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let fragment = StyleFragment::new()
            .set("padding", "0.25rem")
            .set("margin", "1rem")
            .set("padding", "0.75rem");

        let keys: Vec<&str> = fragment.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["padding", "margin"]);
        assert_eq!(fragment.get("padding"), Some(&PropertyValue::from("0.75rem")));
    }

    #[test]
    fn test_declarations_flatten_nested_selectors() {
        let fragment = StyleFragment::new()
            .set("color", "white")
            .nest(
                ":hover",
                StyleFragment::new()
                    .set("backgroundColor", "darkblue")
                    .nest(":focus", StyleFragment::new().set("outline", "none")),
            );

        let decls = fragment.declarations();
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].selector, "");
        assert_eq!(decls[1].selector, ":hover");
        assert_eq!(decls[1].property, "backgroundColor");
        assert_eq!(decls[2].selector, ":hover:focus");
    }

    #[test]
    fn test_numbers_render_without_trailing_zero() {
        let fragment = StyleFragment::new().set("opacity", 0.5).set("zIndex", 2);
        let values: Vec<String> = fragment.declarations().into_iter().map(|d| d.value).collect();
        assert_eq!(values, vec!["0.5", "2"]);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let fragment: StyleFragment = serde_yaml::from_str(
            r#"
cursor: not-allowed
opacity: 0.5
":hover":
  backgroundColor: darkblue
"#,
        )
        .unwrap();

        assert_eq!(fragment.get("opacity"), Some(&PropertyValue::Number(0.5)));
        assert!(matches!(fragment.get(":hover"), Some(PropertyValue::Nested(_))));
        let keys: Vec<&str> = fragment.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["cursor", "opacity", ":hover"]);
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = StyleFragment::default();
        assert!(fragment.is_empty());
        assert!(fragment.declarations().is_empty());
    }
}
