//! Statistical core of the statlab teaching tool.
//!
//! This crate turns user-typed text into numbers and computes the elementary
//! statistics taught by the lessons:
//!
//! - **Parsing**: comma-separated text into a validated sample
//! - **Descriptive statistics**: mean, median, sample variance and standard deviation
//! - **Histograms**: equal-width binning with a closed last bin
//! - **Z-scores**: standard scores and where a value lies relative to the mean
//!
//! Every function is pure; results are recomputed on demand.
//!
//! # Modules
//!
//! - [`parse`]: Text to numeric sample conversion
//! - [`descriptive`]: Measures of center and spread
//! - [`histogram`]: Frequency distributions over equal-width bins
//! - [`z_score`]: Standard scores and their interpretation
//!
//! # Examples
//!
//! ## Measures of center
//!
//! ```
//! use statlab_stats::{descriptive::CenterSummary, parse::parse_sample};
//!
//! let values = parse_sample("1, 2, 3, 4").unwrap();
//! let summary = CenterSummary::new(&values).unwrap();
//! assert_eq!(summary.mean, 2.5);
//! assert_eq!(summary.median, 2.5);
//! ```
//!
//! ## Measures of spread
//!
//! ```
//! use statlab_stats::descriptive::SpreadSummary;
//!
//! let summary = SpreadSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.variance, 2.5);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use statlab_stats::histogram::Histogram;
//!
//! let histogram = Histogram::new(&[5.0, 5.0, 5.0], 3).unwrap();
//! assert_eq!(histogram.bins[0].count, 3);
//! ```
//!
//! ## Interpreting a z-score
//!
//! ```
//! use statlab_stats::z_score::{ZPosition, ZScoreSummary};
//!
//! let summary = ZScoreSummary::new(15.0, 10.0, 5.0).unwrap();
//! assert_eq!(summary.position, ZPosition::Above { magnitude: 1.0 });
//! ```

pub mod descriptive;
pub mod histogram;
pub mod parse;
pub mod z_score;
