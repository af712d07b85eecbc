use serde::Serialize;

use crate::Numeric;

/// Summary statistics over a buffer.
///
/// `min`, `max` and `range` keep the element type of the buffer. The mean is
/// always accumulated and reported as `f64` so that integer buffers neither
/// overflow a running sum nor truncate the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrayStats<T> {
    /// The smallest element.
    pub min: T,
    /// The largest element.
    pub max: T,
    /// The arithmetic mean of all elements.
    pub mean: f64,
    /// `max - min`.
    pub range: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("statistics need at least one element")]
    Empty,
    #[display("range between minimum and maximum does not fit the element type")]
    RangeOverflow,
}

impl<T> ArrayStats<T>
where
    T: Numeric,
{
    /// Computes minimum, maximum, mean and range in a single pass.
    ///
    /// The first element seeds both the minimum and the maximum; later
    /// elements only replace them when strictly smaller or larger.
    ///
    /// For floating-point buffers a NaN never compares smaller or larger, so
    /// it only ends up in `min`/`max` when it is the first element. Any NaN
    /// makes the mean NaN.
    ///
    /// # Errors
    ///
    /// * [`StatsError::Empty`] - if `values` is empty
    /// * [`StatsError::RangeOverflow`] - if `max - min` overflows an integer element type
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixkit_core::stats::ArrayStats;
    /// let stats = ArrayStats::new(&[2.0_f32, -1.0, 4.0]).unwrap();
    /// assert_eq!(stats.min, -1.0);
    /// assert_eq!(stats.max, 4.0);
    /// assert_eq!(stats.range, 5.0);
    /// assert!((stats.mean - 5.0 / 3.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new(values: &[T]) -> Result<Self, StatsError> {
        let (&first, rest) = values.split_first().ok_or(StatsError::Empty)?;

        let mut min = first;
        let mut max = first;
        let mut sum = first.to_f64();
        for &value in rest {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
            sum += value.to_f64();
        }

        let mean = sum / values.len() as f64;
        let range = max.checked_span(min).ok_or(StatsError::RangeOverflow)?;

        Ok(Self {
            min,
            max,
            mean,
            range,
        })
    }
}
