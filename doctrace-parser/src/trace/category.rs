//! Recognized trace categories
//!
//! Only traces whose category is part of the set are kept for audit. Anything else that
//! happens to look like a marker (`NOTE(ABT-1)`, `INVALID(ABT-2)`) is ordinary prose.

use std::collections::BTreeSet;

/// Categories recognized when no other configuration is supplied.
pub const DEFAULT_CATEGORIES: &[&str] = &["BUG", "FEATURE"];

/// An immutable set of recognized category tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: BTreeSet<String>,
}

impl CategorySet {
    /// Build a set from any list of tokens. Duplicates collapse.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff `token` exactly equals one of the recognized categories.
    pub fn is_valid(&self, token: &str) -> bool {
        self.categories.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BUG", true)]
    #[case("FEATURE", true)]
    #[case("INVALID", false)]
    #[case("bug", false)]
    #[case("BUG ", false)]
    #[case("", false)]
    fn test_default_categories(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(CategorySet::default().is_valid(token), expected);
    }

    #[test]
    fn test_custom_categories_replace_defaults() {
        let set = CategorySet::new(["SECURITY", "FEATURE", "SECURITY"]);
        assert_eq!(set.len(), 2);
        assert!(set.is_valid("SECURITY"));
        assert!(!set.is_valid("BUG"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["FEATURE", "SECURITY"]);
    }
}
