//! Generic key/value container for request parameters.
//!
//! Every mapping handled by this crate (server environment, derived headers,
//! query parameters, cookies, ...) is stored as a [`ParamBag`]. Entries are
//! kept in an ordered map so iteration is reproducible. Keys and values are
//! raw strings; no validation, case folding, or name translation is
//! performed at this level. An empty string value is a present entry, not an
//! absent one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag {
    params: IndexMap<String, String>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    /// Returns the full underlying map.
    pub fn all(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Inserts or overwrites an entry. An overwritten key keeps its original
    /// position in the iteration order.
    pub fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.shift_remove(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl FromIterator<(String, String)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Extend<(String, String)> for ParamBag {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.params.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ParamBag {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_distinguishes_absent_from_empty() {
        let mut bag = ParamBag::new();
        bag.set("EMPTY", "");

        assert_eq!(bag.get("EMPTY"), Some(""));
        assert!(bag.has("EMPTY"));
        assert_eq!(bag.get("MISSING"), None);
        assert!(!bag.has("MISSING"));
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let mut bag = ParamBag::new();
        bag.set("NAME", "value");

        assert_eq!(bag.get_or("NAME", "fallback"), "value");
        assert_eq!(bag.get_or("OTHER", "fallback"), "fallback");
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let bag = ParamBag::from_iter([("B", "2"), ("A", "1"), ("C", "3")]);

        let keys: Vec<&str> = bag.keys().collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut bag = ParamBag::from_iter([("A", "1"), ("B", "2")]);
        bag.set("A", "9");

        assert_eq!(bag.get("A"), Some("9"));
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut bag = ParamBag::from_iter([("A", "1")]);

        assert_eq!(bag.remove("A"), Some("1".to_string()));
        assert_eq!(bag.remove("A"), None);
        assert!(bag.is_empty());
    }

    #[test]
    fn deserializes_from_a_plain_json_object() {
        let bag: ParamBag =
            serde_json::from_str(r#"{"HTTP_HOST": "example.test", "CONTENT_TYPE": "text/plain"}"#)
                .unwrap();

        assert_eq!(bag.get("HTTP_HOST"), Some("example.test"));
        assert_eq!(bag.get("CONTENT_TYPE"), Some("text/plain"));

        let round_trip: ParamBag =
            serde_json::from_str(&serde_json::to_string(&bag).unwrap()).unwrap();
        assert_eq!(round_trip, bag);
    }
}
