/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from a sequence of values.
    ///
    /// The variance is the mean of squared deviations from the mean
    /// (denominator `n`). When every value is identical, the mean is that
    /// value and both variance and standard deviation are exactly `0.0`.
    /// A `NaN` value makes every statistic `NaN`.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use inflammation_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    ///
    /// assert!(DescriptiveStats::new([]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let first = *values.first()?;
        let count = values.len();

        // Summing identical values can drift from the value itself
        if !first.is_nan() && values.iter().all(|v| v.to_bits() == first.to_bits()) {
            return Some(Self {
                count,
                min: first,
                max: first,
                mean: first,
                variance: 0.0,
                std_dev: 0.0,
            });
        }

        // NaN propagates like every other statistic
        let (min, max) = values.iter().fold((first, first), |(min, max), &v| {
            if min.is_nan() || v.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (min.min(v), max.max(v))
            }
        });

        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            variance,
            std_dev,
        })
    }
}
