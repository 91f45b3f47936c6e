//! Lookup tables from metadata keys to dedicated encoder flags

use std::collections::BTreeMap;

/// Immutable mapping from a metadata key to the encoder flag that sets it
///
/// Keys are kept in a `BTreeMap` so iteration is always in ascending key order.
/// A missing key is not an error; it tells the caller to take its fallback path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: BTreeMap<String, String>,
}

impl ParameterMap {
    /// Build a table from `(key, flag)` pairs
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, flag)| (key.into(), flag.into()))
                .collect(),
        }
    }

    /// Dedicated flag for `key`, if there is one
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `(key, flag)` pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, flag)| (key.as_str(), flag.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let map = ParameterMap::new([("DATE", "--date")]);
        assert_eq!(map.get("DATE"), Some("--date"));
        assert_eq!(map.get("MOOD"), None);
        assert_eq!(map.get("date"), None, "Lookups are case sensitive");
    }

    #[test]
    fn test_iter_is_sorted_by_key() {
        let map = ParameterMap::new([
            ("title", "--title"),
            ("album", "--album"),
            ("track number", "--tracknumber"),
            ("artist", "--artist"),
        ]);
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["album", "artist", "title", "track number"]);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_empty_map() {
        let map = ParameterMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
    }
}
