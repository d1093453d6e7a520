//! Navigation elements and the browsable title index.
//!
//! # Invariants
//! - Every entry's `this_uri` is the key it is stored under.
//! - For adjacent entries in sorted order, the earlier's `next_*` fields equal
//!   the later's `this_*` fields and the later's `prev_*` fields equal the
//!   earlier's `this_*` fields.
//! - The first entry has an empty `prev_uri`; the last an empty `next_uri`.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Previous/this/next link metadata for one record in a browsing sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavElementView {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub this_label: String,
    pub this_uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prev_uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prev_label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_label: String,
    /// Zero-based position in the sorted sequence.
    pub weight: usize,
}

impl NavElementView {
    /// Creates an unlinked element for one record.
    pub fn new(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            this_label: label.into(),
            this_uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn has_prev(&self) -> bool {
        !self.prev_uri.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.next_uri.is_empty()
    }
}

/// Navigation elements in browsing order.
pub type NavView = Vec<NavElementView>;

/// Title-ordered navigation index keyed by record URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleIndex {
    entries: NavView,
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    /// Wraps already-linked elements given in browsing order.
    pub(crate) fn from_sorted(entries: NavView) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, nav)| (nav.this_uri.clone(), position))
            .collect();
        Self { entries, positions }
    }

    /// Returns the element stored for `uri`.
    pub fn get(&self, uri: &str) -> Option<&NavElementView> {
        self.positions
            .get(uri)
            .and_then(|position| self.entries.get(*position))
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.positions.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates elements in browsing order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavElementView> {
        self.entries.iter()
    }

    /// Returns record URIs in browsing order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|nav| nav.this_uri.as_str())
    }

    pub fn first(&self) -> Option<&NavElementView> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&NavElementView> {
        self.entries.last()
    }

    /// Returns the elements in browsing order.
    pub fn nav_view(&self) -> &[NavElementView] {
        &self.entries
    }

    /// Converts into a URI-keyed map.
    pub fn into_map(self) -> BTreeMap<String, NavElementView> {
        self.entries
            .into_iter()
            .map(|nav| (nav.this_uri.clone(), nav))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TitleIndex {
    type Item = &'a NavElementView;
    type IntoIter = std::slice::Iter<'a, NavElementView>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized as a `uri -> element` object, entries in browsing order.
impl Serialize for TitleIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for nav in &self.entries {
            map.serialize_entry(&nav.this_uri, nav)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{NavElementView, TitleIndex};

    #[test]
    fn serialization_omits_empty_links_but_keeps_this_uri_and_weight() {
        let nav = NavElementView::new("", "");
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json, serde_json::json!({"this_uri": "", "weight": 0}));
    }

    #[test]
    fn lookup_by_uri_follows_positions() {
        let index = TitleIndex::from_sorted(vec![
            NavElementView::new("A", "/a"),
            NavElementView::new("B", "/b"),
        ]);
        assert_eq!(index.get("/b").map(|nav| nav.this_label.as_str()), Some("B"));
        assert!(index.get("/c").is_none());
        assert_eq!(index.uris().collect::<Vec<_>>(), vec!["/a", "/b"]);
    }
}
