//! [`Grouping`]: an insertion-ordered multimap produced by
//! [`Sequence::group_by`](crate::Sequence::group_by).
//!
//! Keys keep the order in which they were first seen and every group keeps
//! its elements in arrival order.
//!
//! ```
//! use sequery::Grouping;
//!
//! let g: Grouping<usize, &str> = ["pear", "fig", "plum", "kiwi"]
//!     .into_iter()
//!     .map(|w| (w.len(), w))
//!     .collect();
//! assert_eq!(g.keys().copied().collect::<Vec<_>>(), vec![4, 3]);
//! assert_eq!(g[&4], vec!["pear", "plum", "kiwi"]);
//! ```

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct Grouping<K, V> {
    entries: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Grouping<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// `(key, group)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, vs)| (k, vs.as_slice()))
    }

    /// Consume into `(key, group)` pairs in first-seen key order.
    #[must_use]
    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Grouping<K, V> {
    /// Append `value` to the group for `key`, opening the group if needed.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1.push(value);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![value]));
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K: Eq + Hash + Clone, V> Index<&K> for Grouping<K, V> {
    type Output = [V];

    /// # Panics
    /// Panics when `key` has no group.
    fn index(&self, key: &K) -> &[V] {
        self.get(key).expect("no group for key")
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Grouping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (k, v) in iter {
            g.push(k, v);
        }
        g
    }
}

/// Duplicate keys are merged into the first occurrence's group.
impl<K: Eq + Hash + Clone, V> From<Vec<(K, Vec<V>)>> for Grouping<K, V> {
    fn from(entries: Vec<(K, Vec<V>)>) -> Self {
        let mut g = Self::new();
        for (k, vs) in entries {
            if let Some(&slot) = g.index.get(&k) {
                g.entries[slot].1.extend(vs);
            } else {
                g.index.insert(k.clone(), g.entries.len());
                g.entries.push((k, vs));
            }
        }
        g
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Grouping<K, V> {
    /// Groupings are equal when they hold the same groups in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Serialized as a sequence of `[key, [values...]]` pairs, which keeps key
/// order and supports non-string keys.
impl<K: Serialize, V: Serialize> Serialize for Grouping<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|(k, vs)| (k, vs)))
    }
}

impl<'de, K, V> Deserialize<'de> for Grouping<K, V>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(K, Vec<V>)>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_key_order() {
        let g: Grouping<char, u32> = vec![('b', 1), ('a', 2), ('b', 3), ('c', 4), ('a', 5)]
            .into_iter()
            .collect();
        assert_eq!(g.len(), 3);
        assert_eq!(g.keys().copied().collect::<Vec<_>>(), vec!['b', 'a', 'c']);
        assert_eq!(g.get(&'b'), Some(&[1, 3][..]));
        assert_eq!(g.get(&'a'), Some(&[2, 5][..]));
        assert_eq!(g.get(&'z'), None);
        assert!(g.contains_key(&'c'));
    }

    #[test]
    fn from_entries_merges_duplicates() {
        let g = Grouping::from(vec![(1, vec!["x"]), (2, vec!["y"]), (1, vec!["z"])]);
        assert_eq!(g.into_vec(), vec![(1, vec!["x", "z"]), (2, vec!["y"])]);
    }

    #[test]
    fn serde_keeps_order_and_integer_keys() {
        let g: Grouping<u32, String> = vec![(6, "banana".to_string()), (5, "apple".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"[[6,["banana"]],[5,["apple"]]]"#);
        let back: Grouping<u32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
