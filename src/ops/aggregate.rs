//! Counting and numeric aggregation.
//!
//! Every numeric aggregation coerces its inputs through [`ToDouble`]
//! (strings such as `"$2,500.50"` included) and answers `0.0` for an absent
//! or empty source. For `min`/`max` this means an empty source and a source
//! whose extreme is `0.0` cannot be told apart; check [`Sequence::any`]
//! first when that matters.
//!
//! ```
//! use sequery::*;
//!
//! let prices = ["$1.99", "2,500.50", "3.75"];
//! assert!((from_slice(&prices).sum() - 2506.24).abs() < 1e-9);
//!
//! let xs: Vec<u32> = (1..=10).collect();
//! assert_eq!(from_slice(&xs).average(), 5.5);
//! assert_eq!(from_slice(&xs).max_by(|n| n * 2), 20.0);
//! ```

use crate::aggregators::{AverageF64, CombineFn, Count, Max, Min, Sum};
use crate::Sequence;
use crate::coerce::ToDouble;

impl<T> Sequence<'_, T> {
    /// Number of elements; `0` when absent.
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Number of elements satisfying `pred`.
    pub fn count_where<P>(&self, pred: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        Count.combine_all(self.iter().filter(|&t| pred(t)))
    }

    /// Fold the coerced elements with `comb`.
    pub fn aggregate<C, A, O>(&self, comb: C) -> O
    where
        T: ToDouble,
        C: CombineFn<f64, A, O>,
    {
        comb.combine_all(self.iter().map(ToDouble::to_double))
    }

    /// Fold the coerced `f(element)` values with `comb`.
    pub fn aggregate_by<V, F, C, A, O>(&self, f: F, comb: C) -> O
    where
        V: ToDouble,
        F: Fn(&T) -> V,
        C: CombineFn<f64, A, O>,
    {
        comb.combine_all(self.iter().map(|t| f(t).to_double()))
    }

    /// Sum of the coerced elements.
    #[must_use]
    pub fn sum(&self) -> f64
    where
        T: ToDouble,
    {
        self.aggregate(Sum)
    }

    /// Sum of the coerced `f(element)` values.
    pub fn sum_by<V, F>(&self, f: F) -> f64
    where
        V: ToDouble,
        F: Fn(&T) -> V,
    {
        self.aggregate_by(f, Sum)
    }

    /// Smallest coerced element; `0.0` when there are none.
    #[must_use]
    pub fn min(&self) -> f64
    where
        T: ToDouble,
    {
        self.aggregate(Min)
    }

    /// Smallest coerced `f(element)`; `0.0` when there are none.
    pub fn min_by<V, F>(&self, f: F) -> f64
    where
        V: ToDouble,
        F: Fn(&T) -> V,
    {
        self.aggregate_by(f, Min)
    }

    /// Largest coerced element; `0.0` when there are none.
    #[must_use]
    pub fn max(&self) -> f64
    where
        T: ToDouble,
    {
        self.aggregate(Max)
    }

    /// Largest coerced `f(element)`; `0.0` when there are none.
    pub fn max_by<V, F>(&self, f: F) -> f64
    where
        V: ToDouble,
        F: Fn(&T) -> V,
    {
        self.aggregate_by(f, Max)
    }

    /// Arithmetic mean of the coerced elements; `0.0` when there are none.
    #[must_use]
    pub fn average(&self) -> f64
    where
        T: ToDouble,
    {
        self.aggregate(AverageF64)
    }

    /// Arithmetic mean of the coerced `f(element)` values.
    pub fn average_by<V, F>(&self, f: F) -> f64
    where
        V: ToDouble,
        F: Fn(&T) -> V,
    {
        self.aggregate_by(f, AverageF64)
    }
}
