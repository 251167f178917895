//! Key-based joins between an outer [`Sequence`] and an inner one.
//!
//! The inner side is indexed once into a key -> positions map (positions in
//! inner order), then every outer element probes the index in outer order.
//! Output is therefore grouped by outer element and, within each outer
//! element, ordered by inner position.
//!
//! ## Available operations
//! - [`Sequence::join`] - Inner join: one row per matching `(outer, inner)` pair
//! - [`Sequence::left_join`] - Left outer join: unmatched outer elements pair with `None`
//! - [`Sequence::group_join`] - One row per outer element with all of its inner matches
//!
//! ## Examples
//! ```
//! use sequery::*;
//!
//! let people = [(1, "Alice"), (2, "Bob"), (3, "Carol")];
//! let orders = [(1, "Laptop"), (1, "Mouse"), (2, "Keyboard")];
//! let outer = from_slice(&people);
//! let inner = from_slice(&orders);
//!
//! let bought = outer.join(inner, |p| p.0, |o| o.0, |p, o| format!("{} bought a {}", p.1, o.1));
//! assert_eq!(bought, vec![
//!     "Alice bought a Laptop",
//!     "Alice bought a Mouse",
//!     "Bob bought a Keyboard",
//! ]);
//!
//! let counts = outer.group_join(inner, |p| p.0, |o| o.0, |p, os| (p.1, os.len()));
//! assert_eq!(counts, vec![("Alice", 2), ("Bob", 1), ("Carol", 0)]);
//! ```

use crate::Sequence;
use std::collections::HashMap;
use std::hash::Hash;

/// Index the inner side by key; each bucket lists inner elements in order.
fn index_inner<'b, U, K, IK>(inner: Sequence<'b, U>, inner_key: IK) -> HashMap<K, Vec<&'b U>>
where
    K: Eq + Hash,
    IK: Fn(&U) -> K,
{
    let mut index: HashMap<K, Vec<&'b U>> = HashMap::new();
    for u in inner {
        index.entry(inner_key(u)).or_default().push(u);
    }
    tracing::debug!(rows = inner.len(), keys = index.len(), "indexed inner join side");
    index
}

impl<'a, T> Sequence<'a, T> {
    /// Inner join on `outer_key(t) == inner_key(u)`, emitting `result(t, u)`
    /// for every matching pair.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let left = [1, 2, 3];
    /// let right = [4, 5, 6];
    /// let none = from_slice(&left).join(from_slice(&right), |n| *n, |n| *n, |a, b| a + b);
    /// assert!(none.is_empty());
    /// ```
    pub fn join<'b, U, K, OK, IK, R, RS>(
        &self,
        inner: impl Into<Sequence<'b, U>>,
        outer_key: OK,
        inner_key: IK,
        result: RS,
    ) -> Vec<R>
    where
        U: 'b,
        K: Eq + Hash,
        OK: Fn(&T) -> K,
        IK: Fn(&U) -> K,
        RS: Fn(&'a T, &'b U) -> R,
    {
        let inner = inner.into();
        if self.is_empty() || inner.is_empty() {
            return Vec::new();
        }
        let index = index_inner(inner, inner_key);
        let mut out = Vec::new();
        for t in self.iter() {
            if let Some(matches) = index.get(&outer_key(t)) {
                out.extend(matches.iter().map(|&u| result(t, u)));
            }
        }
        out
    }

    /// Left outer join: like [`join`](Self::join), but an outer element with
    /// no inner match still emits one row, `result(t, None)`.
    pub fn left_join<'b, U, K, OK, IK, R, RS>(
        &self,
        inner: impl Into<Sequence<'b, U>>,
        outer_key: OK,
        inner_key: IK,
        result: RS,
    ) -> Vec<R>
    where
        U: 'b,
        K: Eq + Hash,
        OK: Fn(&T) -> K,
        IK: Fn(&U) -> K,
        RS: Fn(&'a T, Option<&'b U>) -> R,
    {
        let index = index_inner(inner.into(), inner_key);
        let mut out = Vec::with_capacity(self.len());
        for t in self.iter() {
            match index.get(&outer_key(t)) {
                Some(matches) => out.extend(matches.iter().map(|u| result(t, Some(*u)))),
                None => out.push(result(t, None)),
            }
        }
        out
    }

    /// Correlate every outer element with the inner elements sharing its key.
    ///
    /// Exactly one `result(t, matches)` is produced per outer element, in outer
    /// order; `matches` is empty (never absent) when nothing matched,
    /// including when the inner source itself is absent.
    pub fn group_join<'b, U, K, OK, IK, R, RS>(
        &self,
        inner: impl Into<Sequence<'b, U>>,
        outer_key: OK,
        inner_key: IK,
        result: RS,
    ) -> Vec<R>
    where
        U: 'b,
        K: Eq + Hash,
        OK: Fn(&T) -> K,
        IK: Fn(&U) -> K,
        RS: Fn(&'a T, Vec<&'b U>) -> R,
    {
        if self.is_empty() {
            return Vec::new();
        }
        let index = index_inner(inner.into(), inner_key);
        self.iter()
            .map(|t| {
                let matches = index.get(&outer_key(t)).cloned().unwrap_or_default();
                result(t, matches)
            })
            .collect()
    }
}
