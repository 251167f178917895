//! Predicate queries: existence, universality and first-match lookups.
//!
//! # Overview
//! - [`Sequence::any`] / [`Sequence::any_match`] - is there an element (matching a predicate)?
//! - [`Sequence::all`] - does every element match? Vacuously `true` when absent or empty.
//! - [`Sequence::first_or_default`] / [`Sequence::first_or_default_by`] - first (matching) element
//! - [`Sequence::find_index`] - position of the first match

use crate::Sequence;

impl<'a, T> Sequence<'a, T> {
    /// `true` when the source is present and holds at least one element.
    ///
    /// ```
    /// use sequery::*;
    /// assert!(from_slice(&[1]).any());
    /// assert!(!from_slice::<i32>(&[]).any());
    /// assert!(!absent::<i32>().any());
    /// ```
    #[must_use]
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// `true` when at least one element satisfies `pred`.
    pub fn any_match<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(pred)
    }

    /// `true` when every element satisfies `pred`.
    ///
    /// Absent and empty sources are vacuously `true`.
    ///
    /// ```
    /// use sequery::*;
    /// assert!(from_slice(&[2, 4]).all(|n| n % 2 == 0));
    /// assert!(absent::<i32>().all(|_| false));
    /// ```
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().all(pred)
    }

    /// The first element, or `None` when the source is absent or empty.
    #[must_use]
    pub fn first_or_default(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    /// The first element satisfying `pred`, or `None`.
    ///
    /// ```
    /// use sequery::*;
    /// let xs = [1, 2, 3, 4];
    /// assert_eq!(from_slice(&xs).first_or_default_by(|n| n % 2 == 0), Some(&2));
    /// assert_eq!(from_slice(&xs).first_or_default_by(|n| *n > 10), None);
    /// ```
    pub fn first_or_default_by<P>(&self, pred: P) -> Option<&'a T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|&t| pred(t))
    }

    /// Zero-based position of the first element satisfying `pred`.
    pub fn find_index<P>(&self, pred: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().position(pred)
    }
}
