//! Descriptive statistics and confidence intervals
//!
//! All functions operate on plain numeric slices with missing values already
//! excluded; extracting and filtering samples from the dataset is the
//! caller's concern.

pub mod hypothesis;

use itertools::Itertools;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{JobInsightsError, Result};

/// Descriptive summary of a numeric sample
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (midpoint of the two central values for even counts)
    pub median: f64,
    /// Sample standard deviation (denominator n-1); 0 for a single observation
    pub std_dev: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
}

/// Mean estimate with a symmetric confidence interval
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceInterval {
    /// Sample mean
    pub mean: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level the interval was computed at
    pub level: f64,
}

/// Compute descriptive statistics for a numeric sample
///
/// # Errors
/// Returns `InsufficientData` for an empty sample.
pub fn describe(values: &[f64]) -> Result<DescriptiveStats> {
    if values.is_empty() {
        return Err(JobInsightsError::InsufficientData(
            "descriptive statistics require at least one observation".to_string(),
        ));
    }

    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(DescriptiveStats {
        count: values.len(),
        mean: mean(values),
        median,
        std_dev: sample_variance(values).sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Compute the confidence interval for a sample mean
///
/// Uses the Student's t critical value at n-1 degrees of freedom:
/// mean ± t · (s / √n).
///
/// # Arguments
/// * `values` - The numeric sample, missing values already excluded
/// * `level` - Confidence level, in (0, 1)
///
/// # Errors
/// Returns `InsufficientData` for samples of fewer than 2 observations
/// (degrees of freedom would be ≤ 0) and `InvalidArgument` for a confidence
/// level outside (0, 1).
pub fn confidence_interval(values: &[f64], level: f64) -> Result<ConfidenceInterval> {
    if values.len() < 2 {
        return Err(JobInsightsError::InsufficientData(format!(
            "confidence interval requires at least 2 observations, got {}",
            values.len()
        )));
    }
    if !(level > 0.0 && level < 1.0) {
        return Err(JobInsightsError::InvalidArgument(format!(
            "confidence level must be in (0, 1), got {level}"
        )));
    }

    let n = values.len() as f64;
    let mean = mean(values);
    let std_err = (sample_variance(values) / n).sqrt();

    let dist = StudentsT::new(0.0, 1.0, n - 1.0)
        .map_err(|e| JobInsightsError::InvalidArgument(e.to_string()))?;
    let critical = dist.inverse_cdf((1.0 + level) / 2.0);
    let half_width = critical * std_err;

    Ok(ConfidenceInterval {
        mean,
        lower: mean - half_width,
        upper: mean + half_width,
        level,
    })
}

/// Arithmetic mean of a non-empty sample
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (denominator n-1); 0 for a single observation
pub(crate) fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}
