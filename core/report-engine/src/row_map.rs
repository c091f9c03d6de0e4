//! FILENAME: core/report-engine/src/row_map.rs
//! Insertion-ordered keyed storage for rows.
//!
//! Rows are stored once in first-seen order and looked up by key through an
//! index map, the same interning scheme the pivot field caches use: a
//! `key -> index` hash map next to an append-only vector.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct RowMap<R> {
    key_to_index: FxHashMap<String, usize>,
    entries: Vec<(String, R)>,
}

impl<R> RowMap<R> {
    pub fn new() -> Self {
        RowMap {
            key_to_index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Returns the row for `key`, creating it with `make` on first sight.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> R) -> &mut R {
        let index = match self.key_to_index.get(key) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                self.entries.push((key.to_string(), make()));
                self.key_to_index.insert(key.to_string(), index);
                index
            }
        };
        &mut self.entries[index].1
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.key_to_index.get(key).map(|&index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut R> {
        match self.key_to_index.get(key) {
            Some(&index) => Some(&mut self.entries[index].1),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.key_to_index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, row)| row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> Default for RowMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_first_seen_order() {
        let mut map = RowMap::new();
        for key in ["c", "a", "c", "b", "a"] {
            *map.get_or_insert_with(key, || 0) += 1;
        }

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![2, 2, 1]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_lookup() {
        let mut map = RowMap::new();
        map.get_or_insert_with("x", || 10);

        assert_eq!(map.get("x"), Some(&10));
        assert_eq!(map.get("y"), None);
        assert!(map.contains_key("x"));

        if let Some(value) = map.get_mut("x") {
            *value = 11;
        }
        assert_eq!(map.get("x"), Some(&11));
    }

    #[test]
    fn test_make_only_called_once() {
        let mut map = RowMap::new();
        let mut calls = 0;
        for _ in 0..3 {
            map.get_or_insert_with("k", || {
                calls += 1;
                "row"
            });
        }
        assert_eq!(calls, 1);
        assert!(!map.is_empty());
    }
}
