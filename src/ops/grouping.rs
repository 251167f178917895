//! Grouping elements by a derived key into a [`Grouping`].
//!
//! Keys appear in the order they are first seen; each group keeps its
//! elements in source order.

use crate::{Grouping, Sequence};
use std::hash::Hash;

impl<T> Sequence<'_, T> {
    /// Group elements by `key`.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let words = ["apple", "banana", "cherry", "date", "elderberry"];
    /// let by_len = from_slice(&words).group_by(|w| w.len());
    /// assert_eq!(by_len.len(), 4);
    /// assert_eq!(by_len[&6], ["banana", "cherry"]);
    /// ```
    pub fn group_by<K, F>(&self, key: F) -> Grouping<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        self.iter().map(|t| (key(t), t.clone())).collect()
    }

    /// Group `element(t)` projections by `key(t)`.
    pub fn group_by_with<K, V, F, G>(&self, key: F, element: G) -> Grouping<K, V>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
        G: Fn(&T) -> V,
    {
        self.iter().map(|t| (key(t), element(t))).collect()
    }
}
