//! Element-wise transforms and slicing.
//!
//! - [`Sequence::filter`] - keep elements matching a predicate (LINQ `Where`)
//! - [`Sequence::select`] - project every element
//! - [`Sequence::select_many`] - project every element into zero or more outputs and flatten
//! - [`Sequence::take`] / [`Sequence::skip`] - prefix / suffix by count
//!
//! All of them allocate a new `Vec`; the borrowed source is left untouched.

use crate::Sequence;

impl<'a, T> Sequence<'a, T> {
    /// Elements satisfying `pred`, in source order.
    ///
    /// ```
    /// use sequery::*;
    /// let xs: Vec<i32> = (1..=10).collect();
    /// assert_eq!(from_slice(&xs).filter(|n| n % 2 == 0), vec![2, 4, 6, 8, 10]);
    /// ```
    pub fn filter<P>(&self, pred: P) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|&t| pred(t)).cloned().collect()
    }

    /// `f(element)` for every element, in source order.
    pub fn select<R, F>(&self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R,
    {
        self.iter().map(f).collect()
    }

    /// Concatenation of `f(element)` for every element, in source order.
    ///
    /// `f` may return anything iterable; returning an empty iterator (or
    /// `None` for an `Option`) contributes nothing.
    ///
    /// ```
    /// use sequery::*;
    /// let nested = vec![vec![1, 2], vec![3], vec![]];
    /// assert_eq!(from_slice(&nested).select_many(|v| v.iter().copied()), vec![1, 2, 3]);
    /// ```
    pub fn select_many<I, F>(&self, f: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: Fn(&'a T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    /// The first `n` elements (all of them when the source is shorter).
    #[must_use]
    pub fn take(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().take(n).cloned().collect()
    }

    /// Everything after the first `n` elements.
    ///
    /// ```
    /// use sequery::*;
    /// let xs = [1, 2, 3, 4, 5];
    /// assert_eq!(from_slice(&xs).skip(3), vec![4, 5]);
    /// assert!(from_slice(&xs).skip(10).is_empty());
    /// ```
    #[must_use]
    pub fn skip(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().skip(n).cloned().collect()
    }
}
