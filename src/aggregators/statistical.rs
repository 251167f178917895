//! Statistical combiners: `AverageF64`

use super::CombineFn;

/// Running state of [`AverageF64`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAcc {
    pub total: f64,
    pub n: u64,
}

/// Arithmetic mean of coerced values; `0.0` when nothing was added.
///
/// ```
/// use sequery::{AverageF64, CombineFn};
///
/// assert_eq!(AverageF64.combine_all([1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(AverageF64.combine_all(Vec::<f64>::new()), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl CombineFn<f64, MeanAcc, f64> for AverageF64 {
    fn create(&self) -> MeanAcc {
        MeanAcc::default()
    }

    fn add_input(&self, acc: &mut MeanAcc, v: f64) {
        acc.total += v;
        acc.n += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: MeanAcc) -> f64 {
        match acc.n {
            0 => 0.0,
            n => acc.total / n as f64,
        }
    }
}
