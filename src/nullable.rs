//! Entry points that accept **absent** callbacks and signed counts.
//!
//! The [`Sequence`] methods take plain closures, which cannot be missing.
//! Code that forwards callbacks it received from elsewhere (configuration,
//! dynamic dispatch tables, foreign bindings) often holds them as `Option`s;
//! the functions here accept those directly and degrade to a fixed default
//! instead of failing:
//!
//! | missing argument      | result                                         |
//! |-----------------------|------------------------------------------------|
//! | source                | empty `Vec` / empty [`Grouping`] / `0` / `0.0` / `false` / `None` / `-1` |
//! | predicate or selector | same as a missing source                       |
//! | `all` predicate       | `false` (while a missing source is `true`)     |
//!
//! Counts are `isize` so negative `take`/`skip` arguments are expressible:
//! `take` with `n <= 0` is empty and `skip` with `n <= 0` returns everything.
//!
//! ```
//! use sequery::nullable;
//! use sequery::Sequence;
//!
//! let xs = vec![1, 2, 3, 4];
//! let is_even = |n: &i32| n % 2 == 0;
//!
//! assert_eq!(nullable::filter(&xs, Some(is_even)), vec![2, 4]);
//! assert!(nullable::filter(&xs, None::<fn(&i32) -> bool>).is_empty());
//! assert!(nullable::all(Sequence::<i32>::absent(), Some(is_even)));
//! assert!(!nullable::all(&xs, None::<fn(&i32) -> bool>));
//! assert_eq!(nullable::find_index(&xs, Some(|n: &i32| *n > 10)), -1);
//! assert_eq!(nullable::take(&xs, -1), Vec::<i32>::new());
//! ```

use crate::coerce::ToDouble;
use crate::{Grouping, Sequence, SortOrder};
use std::hash::Hash;

/* ===================== predicate queries ===================== */

/// `true` when `source` is present and non-empty.
pub fn any<'a, T: 'a>(source: impl Into<Sequence<'a, T>>) -> bool {
    source.into().any()
}

/// `true` when some element satisfies `pred`; `false` when `pred` is missing.
pub fn any_match<'a, T: 'a, P>(source: impl Into<Sequence<'a, T>>, pred: Option<P>) -> bool
where
    P: Fn(&T) -> bool,
{
    pred.is_some_and(|p| source.into().any_match(p))
}

/// `true` for a missing source; `false` for a present source with a missing
/// `pred`; otherwise whether every element satisfies `pred`.
pub fn all<'a, T: 'a, P>(source: impl Into<Sequence<'a, T>>, pred: Option<P>) -> bool
where
    P: Fn(&T) -> bool,
{
    let source = source.into();
    if source.is_absent() {
        return true;
    }
    pred.is_some_and(|p| source.all(p))
}

pub fn first_or_default<'a, T: 'a>(source: impl Into<Sequence<'a, T>>) -> Option<&'a T> {
    source.into().first_or_default()
}

/// First element satisfying `pred`; `None` when `pred` is missing.
pub fn first_or_default_by<'a, T: 'a, P>(
    source: impl Into<Sequence<'a, T>>,
    pred: Option<P>,
) -> Option<&'a T>
where
    P: Fn(&T) -> bool,
{
    pred.and_then(|p| source.into().first_or_default_by(p))
}

/// Position of the first element satisfying `pred`, or `-1`.
pub fn find_index<'a, T: 'a, P>(source: impl Into<Sequence<'a, T>>, pred: Option<P>) -> isize
where
    P: Fn(&T) -> bool,
{
    pred.and_then(|p| source.into().find_index(p))
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(-1)
}

/* ===================== transforms ===================== */

pub fn filter<'a, T, P>(source: impl Into<Sequence<'a, T>>, pred: Option<P>) -> Vec<T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool,
{
    pred.map(|p| source.into().filter(p)).unwrap_or_default()
}

pub fn select<'a, T: 'a, R, F>(source: impl Into<Sequence<'a, T>>, f: Option<F>) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    f.map(|f| source.into().select(f)).unwrap_or_default()
}

/// Flatten `f(element)` sub-sequences; a `None` sub-sequence is skipped.
pub fn select_many<'a, T: 'a, I, F>(
    source: impl Into<Sequence<'a, T>>,
    f: Option<F>,
) -> Vec<I::Item>
where
    I: IntoIterator,
    F: Fn(&'a T) -> Option<I>,
{
    f.map(|f| source.into().select_many(|t| f(t).into_iter().flatten()))
        .unwrap_or_default()
}

pub fn distinct<'a, T>(source: impl Into<Sequence<'a, T>>) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
{
    source.into().distinct()
}

/// The first `n` elements; empty when `n <= 0`.
pub fn take<'a, T: Clone + 'a>(source: impl Into<Sequence<'a, T>>, n: isize) -> Vec<T> {
    match usize::try_from(n) {
        Ok(n) => source.into().take(n),
        Err(_) => Vec::new(),
    }
}

/// Everything after the first `n` elements; everything when `n <= 0`.
pub fn skip<'a, T: Clone + 'a>(source: impl Into<Sequence<'a, T>>, n: isize) -> Vec<T> {
    source.into().skip(usize::try_from(n).unwrap_or(0))
}

/// Stable sort by `key` in the direction given by `ascending`.
pub fn order_by<'a, T, K, F>(
    source: impl Into<Sequence<'a, T>>,
    key: Option<F>,
    ascending: bool,
) -> Vec<T>
where
    T: Clone + 'a,
    K: Ord,
    F: Fn(&T) -> K,
{
    key.map(|k| {
        source
            .into()
            .order_by_with(k, SortOrder::from_ascending(ascending))
    })
    .unwrap_or_default()
}

pub fn order_by_descending<'a, T, K, F>(source: impl Into<Sequence<'a, T>>, key: Option<F>) -> Vec<T>
where
    T: Clone + 'a,
    K: Ord,
    F: Fn(&T) -> K,
{
    order_by(source, key, false)
}

/* ===================== aggregation ===================== */

pub fn count<'a, T: 'a>(source: impl Into<Sequence<'a, T>>) -> usize {
    source.into().count()
}

/// Matching elements; `0` when `pred` is missing.
pub fn count_where<'a, T: 'a, P>(source: impl Into<Sequence<'a, T>>, pred: Option<P>) -> usize
where
    P: Fn(&T) -> bool,
{
    pred.map_or(0, |p| source.into().count_where(p))
}

pub fn sum<'a, T: ToDouble + 'a>(source: impl Into<Sequence<'a, T>>) -> f64 {
    source.into().sum()
}

pub fn sum_by<'a, T: 'a, V, F>(source: impl Into<Sequence<'a, T>>, f: Option<F>) -> f64
where
    V: ToDouble,
    F: Fn(&T) -> V,
{
    f.map_or(0.0, |f| source.into().sum_by(f))
}

pub fn min<'a, T: ToDouble + 'a>(source: impl Into<Sequence<'a, T>>) -> f64 {
    source.into().min()
}

pub fn min_by<'a, T: 'a, V, F>(source: impl Into<Sequence<'a, T>>, f: Option<F>) -> f64
where
    V: ToDouble,
    F: Fn(&T) -> V,
{
    f.map_or(0.0, |f| source.into().min_by(f))
}

pub fn max<'a, T: ToDouble + 'a>(source: impl Into<Sequence<'a, T>>) -> f64 {
    source.into().max()
}

pub fn max_by<'a, T: 'a, V, F>(source: impl Into<Sequence<'a, T>>, f: Option<F>) -> f64
where
    V: ToDouble,
    F: Fn(&T) -> V,
{
    f.map_or(0.0, |f| source.into().max_by(f))
}

pub fn average<'a, T: ToDouble + 'a>(source: impl Into<Sequence<'a, T>>) -> f64 {
    source.into().average()
}

pub fn average_by<'a, T: 'a, V, F>(source: impl Into<Sequence<'a, T>>, f: Option<F>) -> f64
where
    V: ToDouble,
    F: Fn(&T) -> V,
{
    f.map_or(0.0, |f| source.into().average_by(f))
}

/* ===================== relational ===================== */

pub fn group_by<'a, T, K, F>(source: impl Into<Sequence<'a, T>>, key: Option<F>) -> Grouping<K, T>
where
    T: Clone + 'a,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    key.map(|k| source.into().group_by(k)).unwrap_or_default()
}

/// Empty when either selector is missing.
pub fn group_by_with<'a, T: 'a, K, V, F, G>(
    source: impl Into<Sequence<'a, T>>,
    key: Option<F>,
    element: Option<G>,
) -> Grouping<K, V>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
    G: Fn(&T) -> V,
{
    match (key, element) {
        (Some(k), Some(e)) => source.into().group_by_with(k, e),
        _ => Grouping::new(),
    }
}

/// Inner join; empty when any selector is missing.
pub fn join<'a, 'b, T: 'a, U: 'b, K, OK, IK, R, RS>(
    outer: impl Into<Sequence<'a, T>>,
    inner: impl Into<Sequence<'b, U>>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<RS>,
) -> Vec<R>
where
    K: Eq + Hash,
    OK: Fn(&T) -> K,
    IK: Fn(&U) -> K,
    RS: Fn(&'a T, &'b U) -> R,
{
    match (outer_key, inner_key, result) {
        (Some(ok), Some(ik), Some(rs)) => outer.into().join(inner, ok, ik, rs),
        _ => Vec::new(),
    }
}

/// One result per outer element; empty when any selector is missing. An
/// absent inner source pairs every outer element with an empty match list.
pub fn group_join<'a, 'b, T: 'a, U: 'b, K, OK, IK, R, RS>(
    outer: impl Into<Sequence<'a, T>>,
    inner: impl Into<Sequence<'b, U>>,
    outer_key: Option<OK>,
    inner_key: Option<IK>,
    result: Option<RS>,
) -> Vec<R>
where
    K: Eq + Hash,
    OK: Fn(&T) -> K,
    IK: Fn(&U) -> K,
    RS: Fn(&'a T, Vec<&'b U>) -> R,
{
    match (outer_key, inner_key, result) {
        (Some(ok), Some(ik), Some(rs)) => outer.into().group_join(inner, ok, ik, rs),
        _ => Vec::new(),
    }
}
