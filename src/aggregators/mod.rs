//! Built-in combiners for [`Sequence::aggregate`](crate::Sequence::aggregate)
//! and [`Sequence::aggregate_by`](crate::Sequence::aggregate_by).
//!
//! Every combiner folds coerced `f64` values (see [`crate::coerce`]):
//!
//! - [`Count`] -- number of inputs.
//! - [`Sum`] -- sum of values.
//! - [`Min`] / [`Max`] -- smallest / largest value.
//! - [`AverageF64`] -- arithmetic mean.
//!
//! Each combiner specifies its accumulator type (`A`) and output type (`O`).
//! Empty inputs finish at `0`, never at an error.
//!
//! # Examples
//! ```
//! use sequery::*;
//! use sequery::aggregators::{AverageF64, Max};
//!
//! let xs = [4, 8, 6];
//! assert_eq!(from_slice(&xs).aggregate(Max), 8.0);
//! assert_eq!(from_slice(&xs).aggregate(AverageF64), 6.0);
//! ```

mod basic;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use statistical::{AverageF64, MeanAcc};

/// A fold over a stream of values: start from [`create`](Self::create),
/// feed every value through [`add_input`](Self::add_input), then turn the
/// accumulator into the output with [`finish`](Self::finish).
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;

    /// Run the whole fold over `values`.
    fn combine_all<I>(&self, values: I) -> O
    where
        I: IntoIterator<Item = V>,
        Self: Sized,
    {
        let mut acc = self.create();
        for v in values {
            self.add_input(&mut acc, v);
        }
        self.finish(acc)
    }
}
