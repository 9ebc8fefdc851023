//! Conversion of free-form user text into numeric samples.
//!
//! Input is a comma-separated list such as `"1, 2.5, -3,"`. Segments are
//! trimmed and empty segments (trailing or doubled commas) are ignored.
//! Every remaining segment must be a finite number.

use crate::histogram::{BinError, MAX_BINS};

/// Error produced while converting text into numbers.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ParseError {
    /// The text was blank or consisted only of separators.
    #[display("please enter some data")]
    EmptyInput,
    /// A segment could not be read as a finite number.
    #[display("'{segment}' is not a number; data must contain only numbers separated by commas")]
    NotANumber { segment: String },
}

/// Parses a comma-separated list of numbers.
///
/// The returned sample keeps the input order and is never empty.
///
/// # Examples
///
/// ```
/// use statlab_stats::parse::{ParseError, parse_sample};
///
/// assert_eq!(parse_sample(" 1, 2,,3.5, ").unwrap(), vec![1.0, 2.0, 3.5]);
/// assert_eq!(parse_sample(",,,"), Err(ParseError::EmptyInput));
/// assert!(parse_sample("1,a,3").unwrap_err().is_not_a_number());
/// ```
pub fn parse_sample(raw: &str) -> Result<Vec<f64>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(values)
}

/// Parses a single number, as typed into a numeric field.
///
/// # Examples
///
/// ```
/// use statlab_stats::parse::{ParseError, parse_value};
///
/// assert_eq!(parse_value(" -2.5 "), Ok(-2.5));
/// assert_eq!(parse_value(""), Err(ParseError::EmptyInput));
/// ```
pub fn parse_value(raw: &str) -> Result<f64, ParseError> {
    let segment = raw.trim();
    if segment.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parse_segment(segment)
}

/// Parses the bin-count field of the histogram form.
///
/// Only positive integers up to [`MAX_BINS`] are accepted.
///
/// # Examples
///
/// ```
/// use statlab_stats::{histogram::BinError, parse::parse_bin_count};
///
/// assert_eq!(parse_bin_count(" 5 "), Ok(5));
/// assert_eq!(parse_bin_count("0"), Err(BinError::InvalidBinCount));
/// assert_eq!(parse_bin_count("2.5"), Err(BinError::InvalidBinCount));
/// ```
///
/// [`MAX_BINS`]: crate::histogram::MAX_BINS
pub fn parse_bin_count(raw: &str) -> Result<usize, BinError> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(0) => Err(BinError::InvalidBinCount),
        Ok(count) if count <= MAX_BINS => Ok(count),
        Ok(_) => Err(BinError::TooManyBins { max: MAX_BINS }),
        // Digits only, but too large for usize
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            Err(BinError::TooManyBins { max: MAX_BINS })
        }
        Err(_) => Err(BinError::InvalidBinCount),
    }
}

fn parse_segment(segment: &str) -> Result<f64, ParseError> {
    segment
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::NotANumber {
            segment: segment.to_owned(),
        })
}
