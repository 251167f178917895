//! Distinct helpers: exact de-duplication, by value or by derived key.
//!
//! # Overview
//! - [`Sequence::distinct`] - Remove duplicate elements (value equality)
//! - [`Sequence::distinct_by`] - Keep the first element for every distinct key
//!
//! Both keep the first occurrence and preserve first-occurrence order.
//! `distinct` needs `Eq + Hash`, which `f64` and [`Coercible`](crate::Coercible)
//! lack; de-duplicate those with `distinct_by` over an
//! [`ordered_float::OrderedFloat`] key:
//!
//! ```
//! use sequery::*;
//! use ordered_float::OrderedFloat;
//!
//! let readings = [1.5, 2.0, 1.5, -0.0, 2.0];
//! let unique = from_slice(&readings).distinct_by(|x| OrderedFloat(*x));
//! assert_eq!(unique, vec![1.5, 2.0, -0.0]);
//!
//! let mixed = [Coercible::from("$2"), Coercible::Number(2.0), Coercible::Bool(true)];
//! let by_value = from_slice(&mixed).distinct_by(|c| OrderedFloat(c.to_double()));
//! assert_eq!(by_value.len(), 2);
//! ```

use crate::Sequence;
use std::collections::HashSet;
use std::hash::Hash;

impl<T> Sequence<'_, T> {
    /// Exact distinct. Removes duplicates, keeping first occurrences in order.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let xs = [1, 2, 2, 3, 1, 4, 3];
    /// assert_eq!(from_slice(&xs).distinct(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        self.iter().filter(|t| seen.insert(*t)).cloned().collect()
    }

    /// Keeps the first element for every distinct `key(element)`.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let firsts = from_slice(&words).distinct_by(|w| w.chars().next());
    /// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    /// ```
    pub fn distinct_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen: HashSet<K> = HashSet::new();
        self.iter().filter(|&t| seen.insert(key(t))).cloned().collect()
    }
}
