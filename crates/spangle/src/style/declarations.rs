//! Insertion-ordered CSS declaration maps.

use super::value::StyleValue;

/// An ordered mapping from CSS property name to value.
///
/// Iteration follows insertion order. Overwriting an existing property keeps
/// its original position, so merging a child scope over its parent never
/// reorders the inherited declarations.
///
/// Property names are stored exactly as given; `fontWeight` and
/// `font-weight` are distinct keys until normalization.
///
/// # Example
///
/// ```rust
/// use spangle::Declarations;
///
/// let decls = Declarations::new()
///     .add("color", "red")
///     .add("fontWeight", 700);
///
/// assert_eq!(decls.len(), 2);
/// assert_eq!(decls.get("color").map(|v| v.to_string()), Some("red".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(String, StyleValue)>,
}

impl Declarations {
    /// Creates an empty declaration map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated map for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, property: &str, value: V) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a declaration in place, replacing any previous value for the property.
    pub fn insert<V: Into<StyleValue>>(&mut self, property: &str, value: V) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property.to_string(), value)),
        }
    }

    /// Returns the value declared for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Returns a new map holding `self` overridden by `overrides`.
    pub fn merged(&self, overrides: &Declarations) -> Declarations {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.insert(name, value.clone());
        }
        merged
    }

    /// Iterates declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<StyleValue>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (name, value) in iter {
            decls.insert(name.as_ref(), value);
        }
        decls
    }
}

impl<K: AsRef<str>, V: Into<StyleValue>, const N: usize> From<[(K, V); N]> for Declarations {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<&Declarations> for Declarations {
    fn from(decls: &Declarations) -> Self {
        decls.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let decls = Declarations::new()
            .add("color", "red")
            .add("fontSize", "12px")
            .add("opacity", 0.5);

        let names: Vec<&str> = decls.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["color", "fontSize", "opacity"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let decls = Declarations::new()
            .add("color", "red")
            .add("fontSize", "12px")
            .add("color", "blue");

        let entries: Vec<(&str, String)> =
            decls.iter().map(|(n, v)| (n, v.to_string())).collect();
        assert_eq!(
            entries,
            vec![("color", "blue".to_string()), ("fontSize", "12px".to_string())]
        );
    }

    #[test]
    fn test_merged_overrides_parent() {
        let parent = Declarations::from([("color", "red"), ("fontSize", "12px")]);
        let child = Declarations::new().add("color", "green").add("fontWeight", 700);

        let merged = parent.merged(&child);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("color"), Some(&StyleValue::from("green")));
        assert_eq!(merged.get("fontWeight"), Some(&StyleValue::from(700)));
        // Parent untouched
        assert_eq!(parent.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn test_merged_with_empty_is_identity() {
        let parent = Declarations::from([("color", "red")]);
        assert_eq!(parent.merged(&Declarations::new()), parent);
    }

    #[test]
    fn test_camel_and_kebab_are_distinct_keys() {
        let decls = Declarations::new()
            .add("fontWeight", 400)
            .add("font-weight", 700);
        assert_eq!(decls.len(), 2);
    }
}
