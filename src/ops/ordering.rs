//! Stable ordering of a [`Sequence`] by natural order or a derived key.
//!
//! - [`Sequence::ordered`] / [`Sequence::ordered_descending`] -- natural `Ord` of the elements
//! - [`Sequence::order_by`] / [`Sequence::order_by_descending`] -- by `key(element)`
//! - [`Sequence::order_by_with`] -- by key in an explicit [`SortOrder`]
//!
//! Keys are computed once per element. Elements with equal keys keep their
//! relative source order in both directions. `f64` keys have no total order;
//! wrap them in [`ordered_float::OrderedFloat`]:
//!
//! ```
//! use sequery::*;
//! use ordered_float::OrderedFloat;
//!
//! let prices = [("tea", 3.5), ("coffee", 2.25), ("cocoa", 3.5)];
//! let cheapest_first = from_slice(&prices).order_by(|p| OrderedFloat(p.1));
//! assert_eq!(cheapest_first[0].0, "coffee");
//! assert_eq!(cheapest_first[1].0, "tea"); // ties keep source order
//! ```

use crate::Sequence;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `Ascending` for `true`, `Descending` for `false`.
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

impl<T: Clone> Sequence<'_, T> {
    /// Elements in ascending natural order.
    ///
    /// ```
    /// use sequery::*;
    /// let xs = [3, 1, 4, 1, 5, 9, 2, 6];
    /// assert_eq!(from_slice(&xs).ordered(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    /// ```
    #[must_use]
    pub fn ordered(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut out = self.to_vec();
        out.sort();
        out
    }

    /// Elements in descending natural order.
    #[must_use]
    pub fn ordered_descending(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut out = self.to_vec();
        out.sort_by(|a, b| b.cmp(a));
        out
    }

    /// Elements sorted ascending by `key`.
    pub fn order_by<K, F>(&self, key: F) -> Vec<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by_with(key, SortOrder::Ascending)
    }

    /// Elements sorted descending by `key`.
    pub fn order_by_descending<K, F>(&self, key: F) -> Vec<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by_with(key, SortOrder::Descending)
    }

    /// Elements sorted by `key` in the given direction.
    pub fn order_by_with<K, F>(&self, key: F, order: SortOrder) -> Vec<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut out = self.to_vec();
        // sort_by_cached_key is stable and calls `key` once per element.
        match order {
            SortOrder::Ascending => out.sort_by_cached_key(|t| key(t)),
            SortOrder::Descending => out.sort_by_cached_key(|t| Reverse(key(t))),
        }
        out
    }
}
