//! Measures of center and spread.
//!
//! Variance and standard deviation are *sample* statistics: the squared
//! deviations are divided by `n - 1` (Bessel's correction).

use serde::Serialize;

/// Error returned when a sample is too small for a spread measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "need at least {required} data points to calculate sample standard deviation, got {actual}"
)]
pub struct InsufficientDataError {
    /// Minimum number of values required.
    pub required: usize,
    /// Number of values supplied.
    pub actual: usize,
}

/// Computes the arithmetic mean.
///
/// Returns `None` if `values` is empty.
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().sum::<f64>();
    Some(sum / values.len() as f64)
}

/// Computes the median.
///
/// The values are sorted on a copy, so the caller's slice is left untouched.
/// For an even number of values the two middle values are averaged.
///
/// Returns `None` if `values` is empty.
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

fn median_of_sorted(sorted_values: &[f64]) -> Option<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        Some(f64::midpoint(sorted_values[mid - 1], sorted_values[mid]))
    } else {
        Some(sorted_values[mid])
    }
}

/// Computes the sample variance, `sum((x - mean)^2) / (n - 1)`.
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(2.5));
/// assert!(sample_variance(&[1.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_variance(values: &[f64]) -> Result<f64, InsufficientDataError> {
    let n = values.len();
    if n < 2 {
        return Err(InsufficientDataError {
            required: 2,
            actual: n,
        });
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let squared_deviations = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok(squared_deviations / (n - 1) as f64)
}

/// Computes the sample standard deviation (square root of [`sample_variance`]).
///
/// # Examples
///
/// ```
/// # use statlab_stats::descriptive::sample_std_dev;
/// let s = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((s - 1.581).abs() < 1e-3);
/// ```
pub fn sample_std_dev(values: &[f64]) -> Result<f64, InsufficientDataError> {
    sample_variance(values).map(f64::sqrt)
}

/// Measures of center for a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterSummary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
}

impl CenterSummary {
    /// Computes count, mean and median.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::descriptive::CenterSummary;
    /// let summary = CenterSummary::new(&[5.0, 1.0, 3.0, 100.0]).unwrap();
    /// assert_eq!(summary.count, 4);
    /// assert_eq!(summary.mean, 27.25);
    /// assert_eq!(summary.median, 4.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
        })
    }
}

/// Measures of spread for a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadSummary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance (`n - 1` denominator).
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
}

impl SpreadSummary {
    /// Computes count, mean, sample variance and sample standard deviation.
    ///
    /// Fails if fewer than two values are given.
    pub fn new(values: &[f64]) -> Result<Self, InsufficientDataError> {
        let variance = sample_variance(values)?;
        let mean = mean(values).ok_or(InsufficientDataError {
            required: 2,
            actual: 0,
        })?;
        Ok(Self {
            count: values.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
