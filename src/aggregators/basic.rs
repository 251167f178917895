//! Basic arithmetic combiners: Count, Sum, Min, Max

use super::CombineFn;
use ordered_float::OrderedFloat;

/* ===================== Count ===================== */

/// Number of values seen.
///
/// - Accumulator: `usize`
/// - Output: `usize`
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, usize, usize> for Count {
    fn create(&self) -> usize {
        0
    }

    fn add_input(&self, acc: &mut usize, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}

/* ===================== Sum ===================== */

/// Sum of values.
///
/// - Accumulator: `f64`
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl CombineFn<f64, f64, f64> for Sum {
    fn create(&self) -> f64 {
        0.0
    }

    fn add_input(&self, acc: &mut f64, v: f64) {
        *acc += v;
    }

    fn finish(&self, acc: f64) -> f64 {
        acc
    }
}

/* ===================== Min ===================== */

/// Minimum value under the total order of [`OrderedFloat`].
///
/// - Accumulator: `Option<OrderedFloat<f64>>`
/// - Output: `f64` (`0.0` when nothing was added)
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for Min {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.map_or(0.0, OrderedFloat::into_inner)
    }
}

/* ===================== Max ===================== */

/// Maximum value under the total order of [`OrderedFloat`].
///
/// - Accumulator: `Option<OrderedFloat<f64>>`
/// - Output: `f64` (`0.0` when nothing was added)
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for Max {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.map_or(0.0, OrderedFloat::into_inner)
    }
}
