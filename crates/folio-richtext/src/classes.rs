//! Per-element styling classes.

use std::collections::HashMap;

use crate::output::ElementTag;

/// Error returned for a class key that names no element kind.
#[derive(Debug, thiserror::Error)]
#[error("Unknown element class key '{key}' (expected one of: {})", ElementTag::CLASS_KEYS.join(", "))]
pub struct UnknownClassKey {
    /// The rejected key.
    pub key: String,
}

/// Styling classes keyed by element kind (see [`ElementTag::CLASS_KEYS`]).
///
/// # Example
///
/// ```
/// use folio_richtext::{ClassMap, ElementTag};
///
/// let mut classes = ClassMap::new();
/// classes.insert("paragraph", "mb-4").unwrap();
/// assert_eq!(classes.get(&ElementTag::Paragraph), Some("mb-4"));
/// assert!(classes.insert("carousel", "x").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClassMap {
    classes: HashMap<&'static str, String>,
}

impl ClassMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class for an element kind. Empty classes are ignored.
    pub fn insert(&mut self, key: &str, class: impl Into<String>) -> Result<(), UnknownClassKey> {
        let known = ElementTag::CLASS_KEYS
            .iter()
            .copied()
            .find(|k| *k == key)
            .ok_or_else(|| UnknownClassKey {
                key: key.to_owned(),
            })?;
        let class = class.into();
        if !class.is_empty() {
            self.classes.insert(known, class);
        }
        Ok(())
    }

    /// Class configured for an element, if any.
    #[must_use]
    pub fn get(&self, tag: &ElementTag) -> Option<&str> {
        self.classes.get(tag.class_key()).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Mark;

    #[test]
    fn test_insert_and_get() {
        let mut classes = ClassMap::new();
        classes.insert("heading-2", "text-3xl").unwrap();
        classes.insert("code", "bg-stone-100").unwrap();

        assert_eq!(classes.get(&ElementTag::Heading(2)), Some("text-3xl"));
        assert_eq!(classes.get(&ElementTag::Mark(Mark::Code)), Some("bg-stone-100"));
        assert_eq!(classes.get(&ElementTag::Heading(3)), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut classes = ClassMap::new();
        let err = classes.insert("hero", "x").unwrap_err();
        assert_eq!(err.key, "hero");
        assert!(err.to_string().contains("paragraph"));
        assert!(classes.is_empty());
    }

    #[test]
    fn test_empty_class_ignored() {
        let mut classes = ClassMap::new();
        classes.insert("paragraph", "").unwrap();
        assert!(classes.is_empty());
    }
}
