use std::fmt;

use serde::Serialize;

/// Error produced when a histogram cannot be built.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum BinError {
    /// The requested number of bins is not a positive integer.
    #[display("number of bins must be a positive integer")]
    InvalidBinCount,
    /// There are no values to count.
    #[display("no data points to bin")]
    EmptySample,
    /// The requested number of bins exceeds [`MAX_BINS`].
    #[display("number of bins must be at most {max}")]
    TooManyBins { max: usize },
}

/// Largest number of bins a histogram may have.
pub const MAX_BINS: usize = 1000;

/// An equal-width histogram of a dataset.
///
/// The data range `[min, max]` is divided into `num_bins` bins of equal width.
/// Every bin is half-open (`[start, end)`) except the last one, which is closed
/// (`[start, end]`) so the maximum value is always counted.
///
/// # Degenerate range
///
/// When every value is identical (`min == max`), the range is widened to
/// `[min, min + num_bins]` so each bin has width `1.0`. All values then equal
/// the lower bound and land in the first bin. For magnitudes where adding `1.0`
/// is lost to rounding, the width grows to the smallest step that still keeps
/// the bins apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Lower bound of the first bin (the smallest value).
    pub min: f64,
    /// Upper bound of the last bin.
    ///
    /// This is the largest value, or `min + num_bins` for a degenerate range.
    pub max: f64,
    /// Width shared by all bins.
    pub bin_width: f64,
    /// Whether the range was synthesized because all values are identical.
    pub degenerate: bool,
    /// The bins, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound; inclusive only when `end_inclusive` is set.
    pub end: f64,
    /// Whether `end` belongs to this bin (true only for the last bin).
    pub end_inclusive: bool,
    /// The number of values that fall within this bin.
    pub count: usize,
}

impl HistogramBin {
    /// Returns whether `value` lies within this bin's bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && (value < self.end || (self.end_inclusive && value == self.end))
    }

    /// Returns the range label with bounds rounded to one decimal place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::histogram::HistogramBin;
    /// let bin = HistogramBin { start: 1.0, end: 2.8, end_inclusive: false, count: 2 };
    /// assert_eq!(bin.label(), "[1.0, 2.8)");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.end_inclusive { ']' } else { ')' };
        write!(f, "[{:.1}, {:.1}{close}", self.start, self.end)
    }
}

impl Histogram {
    /// Builds a histogram with `num_bins` equal-width bins.
    ///
    /// Values are assumed finite, which [`parse_sample`] guarantees.
    ///
    /// # Errors
    ///
    /// * [`BinError::InvalidBinCount`] - if `num_bins` is zero
    /// * [`BinError::TooManyBins`] - if `num_bins` exceeds [`MAX_BINS`]
    /// * [`BinError::EmptySample`] - if `values` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    /// let histogram = Histogram::new(&values, 5).unwrap();
    /// let counts = histogram.bins.iter().map(|bin| bin.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [2, 2, 2, 2, 2]);
    /// assert_eq!(histogram.bins[4].label(), "[8.2, 10.0]");
    /// ```
    ///
    /// [`parse_sample`]: crate::parse::parse_sample
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn new(values: &[f64], num_bins: usize) -> Result<Self, BinError> {
        if num_bins == 0 {
            return Err(BinError::InvalidBinCount);
        }
        if num_bins > MAX_BINS {
            return Err(BinError::TooManyBins { max: MAX_BINS });
        }
        if values.is_empty() {
            return Err(BinError::EmptySample);
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let degenerate = min == data_max;
        let (max, bin_width) = if degenerate {
            let bin_width = degenerate_bin_width(min);
            (min + num_bins as f64 * bin_width, bin_width)
        } else {
            (data_max, (data_max - min) / num_bins as f64)
        };

        let last = num_bins - 1;
        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute each boundary from `min` to avoid accumulating rounding errors
                let start = min + bin_idx as f64 * bin_width;
                let end = if bin_idx == last {
                    max
                } else {
                    min + (bin_idx + 1) as f64 * bin_width
                };
                HistogramBin {
                    start,
                    end,
                    end_inclusive: bin_idx == last,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &value in values {
            let position = ((value - min) / bin_width).floor();
            let idx = if degenerate {
                0
            } else if value == max {
                // floor() may land one short of or past the last bin for the maximum
                last
            } else {
                position.clamp(0.0, last as f64) as usize
            };
            bins[idx].count += 1;
        }

        Ok(Self {
            min,
            max,
            bin_width,
            degenerate,
            bins,
        })
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns whether the histogram has no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the number of counted values (the sample size).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the frequency of the fullest bin.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Returns `(range label, count)` pairs in bin order.
    pub fn labelled_counts(&self) -> impl Iterator<Item = (String, usize)> + '_ {
        self.bins.iter().map(|bin| (bin.label(), bin.count))
    }
}

/// Width of the synthesized bins of a degenerate range starting at `min`.
///
/// `1.0` unless `min` is so large that `min + 1.0 == min`; then twice the
/// relative precision of `min`, which always moves past the next float.
fn degenerate_bin_width(min: f64) -> f64 {
    f64::max(1.0, min.abs() * f64::EPSILON * 2.0)
}

/// Smallest bar height, in percent, so that empty bins remain visible.
pub const MIN_BAR_HEIGHT_PERCENT: f64 = 0.5;

/// Returns the height of a bar relative to the fullest bin, in percent.
///
/// The result is never below [`MIN_BAR_HEIGHT_PERCENT`].
///
/// # Examples
///
/// ```
/// # use statlab_stats::histogram::bar_height_percent;
/// assert_eq!(bar_height_percent(2, 4), 50.0);
/// assert_eq!(bar_height_percent(0, 4), 0.5);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn bar_height_percent(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return MIN_BAR_HEIGHT_PERCENT;
    }
    let height = count as f64 / max_count as f64 * 100.0;
    height.max(MIN_BAR_HEIGHT_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(histogram: &Histogram) -> Vec<usize> {
        histogram.bins.iter().map(|bin| bin.count).collect()
    }

    #[test]
    fn test_invalid_bin_count() {
        assert_eq!(Histogram::new(&[1.0, 2.0], 0), Err(BinError::InvalidBinCount));
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(Histogram::new(&[], 3), Err(BinError::EmptySample));
    }

    #[test]
    fn test_bin_count_checked_before_sample() {
        assert_eq!(Histogram::new(&[], 0), Err(BinError::InvalidBinCount));
    }

    #[test]
    fn test_one_to_ten_in_five_bins() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, 5).unwrap();

        assert!((histogram.bin_width - 1.8).abs() < 1e-12);
        assert_eq!(histogram.len(), 5);
        assert_eq!(counts(&histogram), vec![2, 2, 2, 2, 2]);
        // The maximum always belongs to the last bin
        assert!(histogram.bins[4].contains(10.0));
        assert_eq!(histogram.bins[4].end, 10.0);
    }

    #[test]
    fn test_labels() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, 5).unwrap();
        let labels = histogram
            .labelled_counts()
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "[1.0, 2.8)",
                "[2.8, 4.6)",
                "[4.6, 6.4)",
                "[6.4, 8.2)",
                "[8.2, 10.0]"
            ]
        );
    }

    #[test]
    fn test_half_open_boundaries() {
        // width 1.0: the value 1.0 sits on the boundary between bins 0 and 1
        let histogram = Histogram::new(&[0.0, 1.0, 2.0], 2).unwrap();
        assert_eq!(counts(&histogram), vec![1, 2]);

        let histogram = Histogram::new(&[0.0, 1.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(counts(&histogram), vec![1, 1, 0, 2]);
        assert!(!histogram.bins[0].contains(1.0));
        assert!(histogram.bins[1].contains(1.0));
        assert!(histogram.bins[3].contains(4.0));
    }

    #[test]
    fn test_degenerate_range() {
        let histogram = Histogram::new(&[5.0, 5.0, 5.0], 3).unwrap();

        assert!(histogram.degenerate);
        assert_eq!(histogram.bin_width, 1.0);
        assert_eq!(histogram.min, 5.0);
        assert_eq!(histogram.max, 8.0);
        assert_eq!(counts(&histogram), vec![3, 0, 0]);
        let bounds = histogram
            .bins
            .iter()
            .map(|bin| (bin.start, bin.end))
            .collect::<Vec<_>>();
        assert_eq!(bounds, vec![(5.0, 6.0), (6.0, 7.0), (7.0, 8.0)]);
    }

    #[test]
    fn test_degenerate_range_of_large_values() {
        let histogram = Histogram::new(&[1e20, 1e20, 1e20], 3).unwrap();

        assert!(histogram.degenerate);
        assert_eq!(counts(&histogram), vec![3, 0, 0]);
        assert!(histogram.bins[0].contains(1e20));
        for bin in &histogram.bins {
            assert!(bin.end > bin.start, "empty bin {bin}");
        }
        assert!(histogram.max > histogram.min);
    }

    #[test]
    fn test_too_many_bins() {
        assert_eq!(
            Histogram::new(&[1.0, 2.0], MAX_BINS + 1),
            Err(BinError::TooManyBins { max: MAX_BINS })
        );
        assert_eq!(
            Histogram::new(&[1.0, 2.0], usize::MAX),
            Err(BinError::TooManyBins { max: MAX_BINS })
        );
        let histogram = Histogram::new(&[1.0, 2.0], MAX_BINS).unwrap();
        assert_eq!(histogram.len(), MAX_BINS);
    }

    #[test]
    fn test_single_value_single_bin() {
        let histogram = Histogram::new(&[-2.0], 1).unwrap();
        assert_eq!(counts(&histogram), vec![1]);
        assert_eq!(histogram.bins[0].label(), "[-2.0, -1.0]");
    }

    #[test]
    fn test_single_bin_holds_everything() {
        let histogram = Histogram::new(&[3.0, -1.0, 7.5, 2.0], 1).unwrap();
        assert_eq!(counts(&histogram), vec![4]);
        assert!(histogram.bins[0].end_inclusive);
    }

    #[test]
    fn test_counts_sum_to_sample_length() {
        let samples: [&[f64]; 5] = [
            &[0.1, 0.2, 0.3, 0.7, 0.9, 1.1],
            &[-5.0, 5.0],
            &[1e-9, 2e-9, 3e-9],
            &[100.0, 100.0, 100.0, 101.0],
            &[0.3, 0.6, 0.9, 1.2, 1.5, 1.8, 2.1, 2.4, 2.7, 3.0],
        ];
        for values in samples {
            for num_bins in 1..=12 {
                let histogram = Histogram::new(values, num_bins).unwrap();
                assert_eq!(histogram.len(), num_bins);
                assert_eq!(histogram.total_count(), values.len(), "{values:?} / {num_bins}");
            }
        }
    }

    #[test]
    fn test_bins_partition_range() {
        let values = [0.3, 0.6, 0.9, 1.2, 1.5, 1.8, 2.1, 2.4, 2.7, 3.0];
        let histogram = Histogram::new(&values, 3).unwrap();
        for value in values {
            let containing = histogram.bins.iter().filter(|bin| bin.contains(value)).count();
            assert_eq!(containing, 1, "{value} should be in exactly one bin");
        }
    }

    #[test]
    fn test_max_count() {
        let histogram = Histogram::new(&[1.0, 1.0, 1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(counts(&histogram), vec![3, 2]);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn test_bar_height_percent() {
        assert_eq!(bar_height_percent(3, 3), 100.0);
        assert_eq!(bar_height_percent(1, 4), 25.0);
        assert_eq!(bar_height_percent(0, 3), MIN_BAR_HEIGHT_PERCENT);
        assert_eq!(bar_height_percent(0, 0), MIN_BAR_HEIGHT_PERCENT);
    }

    #[test]
    fn test_serializes_bins() {
        let histogram = Histogram::new(&[1.0, 2.0], 2).unwrap();
        let json = serde_json::to_value(&histogram).unwrap();
        assert_eq!(json["bins"][1]["end_inclusive"], true);
        assert_eq!(json["bins"][0]["count"], 1);
    }
}
