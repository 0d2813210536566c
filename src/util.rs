//! Helpers for naming atomic classes and writing CSS.

use xxhash_rust::xxh3::xxh3_64;

/// Hashes `parts` (NUL-separated) into an 8-digit lowercase hex string.
pub(crate) fn short_hash(parts: &[&str]) -> String {
    let joined = parts.join("\0");
    format!("{:08x}", xxh3_64(joined.as_bytes()) as u32)
}

/// Converts a camelCase property name to the kebab-case CSS form.
///
/// Names that are already kebab-case, and custom properties (`--brand`),
/// are returned unchanged.
///
/// # Example
///
/// ```rust
/// use variant_recipes::kebab_case;
///
/// assert_eq!(kebab_case("backgroundColor"), "background-color");
/// assert_eq!(kebab_case("padding"), "padding");
/// assert_eq!(kebab_case("--brandColor"), "--brandColor");
/// ```
pub fn kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_vendor_prefix() {
        assert_eq!(kebab_case("WebkitAppearance"), "-webkit-appearance");
    }

    #[test]
    fn test_kebab_case_already_kebab() {
        assert_eq!(kebab_case("border-radius"), "border-radius");
    }

    #[test]
    fn test_short_hash_is_stable_and_fixed_width() {
        let a = short_hash(&["", "padding"]);
        let b = short_hash(&["", "padding"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_short_hash_separates_parts() {
        assert_ne!(short_hash(&["ab", "c"]), short_hash(&["a", "bc"]));
    }
}
