//! Standard scores.

use serde::Serialize;

/// Error returned when a z-score cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ZScoreError {
    /// The standard deviation is zero, negative or not a finite number.
    #[display("standard deviation must be greater than zero, got {std_dev}")]
    NonPositiveStdDev { std_dev: f64 },
}

/// Computes the z-score `(x - mean) / std_dev`.
///
/// # Examples
///
/// ```
/// # use statlab_stats::z_score::z_score;
/// assert_eq!(z_score(15.0, 10.0, 5.0), Ok(1.0));
/// assert!(z_score(5.0, 10.0, 0.0).is_err());
/// ```
pub fn z_score(x: f64, mean: f64, std_dev: f64) -> Result<f64, ZScoreError> {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(ZScoreError::NonPositiveStdDev { std_dev });
    }
    Ok((x - mean) / std_dev)
}

/// Where a value lies relative to the mean.
///
/// The magnitude is `|z|`; rendering is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZPosition {
    /// The value equals the mean.
    AtMean,
    /// The value is above the mean.
    Above { magnitude: f64 },
    /// The value is below the mean.
    Below { magnitude: f64 },
}

impl ZPosition {
    /// Classifies a z-score.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::z_score::ZPosition;
    /// assert_eq!(ZPosition::classify(0.0), ZPosition::AtMean);
    /// assert_eq!(ZPosition::classify(-1.5), ZPosition::Below { magnitude: 1.5 });
    /// ```
    #[must_use]
    pub fn classify(z: f64) -> Self {
        if z > 0.0 {
            Self::Above { magnitude: z }
        } else if z < 0.0 {
            Self::Below { magnitude: -z }
        } else {
            Self::AtMean
        }
    }

    /// Returns `|z|`, which is zero at the mean.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match *self {
            Self::AtMean => 0.0,
            Self::Above { magnitude } | Self::Below { magnitude } => magnitude,
        }
    }
}

/// A z-score together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreSummary {
    /// The z-score.
    pub z: f64,
    /// Where the value lies relative to the mean.
    pub position: ZPosition,
}

impl ZScoreSummary {
    /// Computes and classifies the z-score of `x`.
    pub fn new(x: f64, mean: f64, std_dev: f64) -> Result<Self, ZScoreError> {
        let z = z_score(x, mean, std_dev)?;
        Ok(Self {
            z,
            position: ZPosition::classify(z),
        })
    }
}
