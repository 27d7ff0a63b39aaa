//! Keyword overrides for path synthesis.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fragments of a symbolic name mapped to custom path replacements.
///
/// Keys are matched case-sensitively against the identifier as written
/// (e.g. `CustomersStats`). Replacements may contain the slot marker
/// [`SLOT`](crate::SLOT), e.g. `repos/${}/${}`.
///
/// The map is immutable once built and cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    entries: Arc<BTreeMap<String, String>>,
}

impl Keywords {
    /// An empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replacement for a fragment, if any.
    #[must_use]
    pub fn get(&self, fragment: &str) -> Option<&str> {
        self.entries.get(fragment).map(String::as_str)
    }

    /// Overrides in the order they are applied.
    pub fn in_application_order(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| override_order(a, b));
        entries.into_iter()
    }
}

/// Application order for overlapping fragments: descending lexicographic.
///
/// When one fragment contains another, this decides which one wins. Swap
/// this comparator to change the disambiguation rule.
#[must_use]
pub fn override_order(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

impl<K, V> FromIterator<(K, V)> for Keywords
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Keywords
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Keywords {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}
