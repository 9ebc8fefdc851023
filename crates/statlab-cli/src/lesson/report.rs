use statlab_stats::{
    descriptive::{CenterSummary, InsufficientDataError, SpreadSummary},
    histogram::{BinError, Histogram},
    parse::{self, ParseError},
    z_score::{ZPosition, ZScoreError, ZScoreSummary},
};

/// A computed result, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Histogram(Histogram),
    Center(CenterSummary),
    Spread(SpreadSummary),
    ZScore {
        x: f64,
        mean: f64,
        std_dev: f64,
        summary: ZScoreSummary,
    },
}

/// The first validation failure of a user action.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum LessonError {
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{field}: {error}")]
    Field { field: &'static str, error: ParseError },
    #[display("{_0}")]
    Bin(BinError),
    #[display("{_0}")]
    InsufficientData(InsufficientDataError),
    #[display("{_0}")]
    ZScore(ZScoreError),
}

/// Builds a histogram from the raw data and bin-count fields.
///
/// Parser errors are reported before the bin count is looked at.
pub fn histogram(raw_data: &str, raw_bins: &str) -> Result<Report, LessonError> {
    let values = parse::parse_sample(raw_data)?;
    let num_bins = parse::parse_bin_count(raw_bins)?;
    let histogram = Histogram::new(&values, num_bins)?;
    Ok(Report::Histogram(histogram))
}

pub fn center(raw_data: &str) -> Result<Report, LessonError> {
    let values = parse::parse_sample(raw_data)?;
    // parse_sample never returns an empty sample
    let summary = CenterSummary::new(&values).ok_or(ParseError::EmptyInput)?;
    Ok(Report::Center(summary))
}

pub fn spread(raw_data: &str) -> Result<Report, LessonError> {
    let values = parse::parse_sample(raw_data)?;
    let summary = SpreadSummary::new(&values)?;
    Ok(Report::Spread(summary))
}

pub fn z_score(raw_x: &str, raw_mean: &str, raw_std_dev: &str) -> Result<Report, LessonError> {
    let field = |field: &'static str, raw: &str| {
        parse::parse_value(raw).map_err(|error| LessonError::Field { field, error })
    };
    let x = field("Value (x)", raw_x)?;
    let mean = field("Mean", raw_mean)?;
    let std_dev = field("Standard deviation", raw_std_dev)?;
    let summary = ZScoreSummary::new(x, mean, std_dev)?;
    Ok(Report::ZScore {
        x,
        mean,
        std_dev,
        summary,
    })
}

/// Formats a computed value with three decimals.
pub fn fixed3(value: f64) -> String {
    format!("{value:.3}")
}

/// Describes where a value lies relative to the mean.
pub fn describe_position(position: ZPosition) -> String {
    match position {
        ZPosition::AtMean => "The value is exactly at the mean.".to_owned(),
        ZPosition::Above { magnitude } => format!(
            "The value is {} standard deviations above the mean.",
            fixed3(magnitude)
        ),
        ZPosition::Below { magnitude } => format!(
            "The value is {} standard deviations below the mean.",
            fixed3(magnitude)
        ),
    }
}

/// Returns the report as `(label, value)` lines.
///
/// Histograms are drawn as charts and have no key/value form.
pub fn key_values(report: &Report) -> Vec<(&'static str, String)> {
    match report {
        Report::Histogram(histogram) => vec![
            ("Count (n)", histogram.total_count().to_string()),
            ("Bin width", fixed3(histogram.bin_width)),
        ],
        Report::Center(summary) => vec![
            ("Count (n)", summary.count.to_string()),
            ("Mean (x̄)", fixed3(summary.mean)),
            ("Median", fixed3(summary.median)),
        ],
        Report::Spread(summary) => vec![
            ("Count (n)", summary.count.to_string()),
            ("Mean (x̄)", fixed3(summary.mean)),
            ("Sample Variance (s²)", fixed3(summary.variance)),
            ("Sample Standard Deviation (s)", fixed3(summary.std_dev)),
        ],
        Report::ZScore {
            x,
            mean,
            std_dev,
            summary,
        } => vec![
            ("Value (x)", fixed3(*x)),
            ("Mean (μ)", fixed3(*mean)),
            ("Standard Deviation (σ)", fixed3(*std_dev)),
            ("Z-Score (z = (x − μ) / σ)", fixed3(summary.z)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use statlab_stats::histogram::MAX_BINS;

    use super::*;

    #[test]
    fn test_histogram_report() {
        let report = histogram("1,2,3,4,5,6,7,8,9,10", "5").unwrap();
        let Report::Histogram(histogram) = report else {
            panic!("expected histogram report");
        };
        assert_eq!(histogram.len(), 5);
        assert_eq!(histogram.total_count(), 10);
    }

    #[test]
    fn test_parse_error_short_circuits_bins() {
        assert_eq!(
            histogram("", "0"),
            Err(LessonError::Parse(ParseError::EmptyInput))
        );
        assert_eq!(
            histogram("1, 2", "zero"),
            Err(LessonError::Bin(BinError::InvalidBinCount))
        );
    }

    #[test]
    fn test_huge_bin_count_is_an_error() {
        assert_eq!(
            histogram("1, 2, 3", "18446744073709551615"),
            Err(LessonError::Bin(BinError::TooManyBins { max: MAX_BINS }))
        );
    }

    #[test]
    fn test_center_report() {
        let report = center("2, 4, 6").unwrap();
        assert_eq!(
            key_values(&report),
            vec![
                ("Count (n)", "3".to_owned()),
                ("Mean (x̄)", "4.000".to_owned()),
                ("Median", "4.000".to_owned()),
            ]
        );
    }

    #[test]
    fn test_spread_report() {
        let report = spread("1, 2, 3, 4, 5").unwrap();
        let lines = key_values(&report);
        assert_eq!(lines[2], ("Sample Variance (s²)", "2.500".to_owned()));
        assert_eq!(lines[3], ("Sample Standard Deviation (s)", "1.581".to_owned()));
    }

    #[test]
    fn test_spread_needs_two_values() {
        let err = spread("42").unwrap_err();
        assert!(matches!(err, LessonError::InsufficientData(_)));
        assert_eq!(
            err.to_string(),
            "need at least 2 data points to calculate sample standard deviation, got 1"
        );
    }

    #[test]
    fn test_z_score_report() {
        let Report::ZScore { summary, .. } = z_score("15", "10", "5").unwrap() else {
            panic!("expected z-score report");
        };
        assert_eq!(summary.z, 1.0);
        assert_eq!(
            describe_position(summary.position),
            "The value is 1.000 standard deviations above the mean."
        );
    }

    #[test]
    fn test_z_score_field_errors() {
        assert_eq!(
            z_score("15", "", "5").unwrap_err().to_string(),
            "Mean: please enter some data"
        );
        assert!(matches!(
            z_score("5", "10", "0"),
            Err(LessonError::ZScore(ZScoreError::NonPositiveStdDev { .. }))
        ));
    }

    #[test]
    fn test_describe_position() {
        assert_eq!(
            describe_position(ZPosition::AtMean),
            "The value is exactly at the mean."
        );
        assert_eq!(
            describe_position(ZPosition::Below { magnitude: 1.5 }),
            "The value is 1.500 standard deviations below the mean."
        );
    }
}
