//! Hypothesis tests for comparing group means
//!
//! Both tests are pure functions over already-filtered numeric samples with
//! missing values removed. The interpretation policy is uniform: p < 0.05
//! rejects the null hypothesis of equal population means.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::{JobInsightsError, Result};
use crate::stats::{mean, sample_variance};

/// Fixed significance threshold for all tests
pub const ALPHA: f64 = 0.05;

/// Decision on the null hypothesis of equal population means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Conclusion {
    /// p < ALPHA: the observed difference is statistically significant
    RejectNull,
    /// p >= ALPHA: no statistically significant difference
    FailToRejectNull,
}

impl Conclusion {
    /// Derive the conclusion from a p-value using the fixed threshold
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < ALPHA {
            Self::RejectNull
        } else {
            Self::FailToRejectNull
        }
    }

    /// Whether the difference is statistically significant
    #[must_use]
    pub fn is_significant(self) -> bool {
        matches!(self, Self::RejectNull)
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RejectNull => {
                write!(f, "statistically significant difference, reject H0")
            }
            Self::FailToRejectNull => {
                write!(f, "no significant difference, fail to reject H0")
            }
        }
    }
}

/// Result of a two-sample mean comparison
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestResult {
    /// The t statistic
    pub statistic: f64,
    /// Two-sided p-value under H0 (equal population means)
    pub p_value: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
    /// Decision at the fixed significance threshold
    pub conclusion: Conclusion,
}

/// Result of a k-sample mean comparison (one-way ANOVA)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnovaResult {
    /// The F statistic
    pub f_statistic: f64,
    /// p-value under H0 (all population means equal)
    pub p_value: f64,
    /// Between-group degrees of freedom (k - 1)
    pub df_between: f64,
    /// Within-group degrees of freedom (n - k)
    pub df_within: f64,
    /// Decision at the fixed significance threshold
    pub conclusion: Conclusion,
}

/// Two-sample mean comparison with unequal variances (Welch's t-test)
///
/// Tests H0: the two population means are equal, against a two-sided
/// alternative. The result is symmetric in the order of the samples.
///
/// # Errors
/// Returns `InsufficientData` if either sample has fewer than 2 observations
/// (its variance is undefined).
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TestResult> {
    if a.len() < 2 || b.len() < 2 {
        return Err(JobInsightsError::InsufficientData(format!(
            "Welch t-test requires at least 2 observations per sample, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (var_a, var_b) = (sample_variance(a), sample_variance(b));
    let se_a = var_a / n_a;
    let se_b = var_b / n_b;

    let se = (se_a + se_b).sqrt();
    if se == 0.0 {
        // Both samples constant: equal means give no evidence against H0,
        // different means are infinitely many standard errors apart.
        let statistic = if mean(a) == mean(b) { 0.0 } else { f64::INFINITY };
        let p_value = if statistic == 0.0 { 1.0 } else { 0.0 };
        return Ok(TestResult {
            statistic,
            p_value,
            degrees_of_freedom: n_a + n_b - 2.0,
            conclusion: Conclusion::from_p_value(p_value),
        });
    }

    let statistic = (mean(a) - mean(b)) / se;

    // Welch-Satterthwaite approximation
    let df = (se_a + se_b).powi(2)
        / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));

    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| JobInsightsError::InvalidArgument(e.to_string()))?;
    let p_value = 2.0 * dist.cdf(-statistic.abs());

    Ok(TestResult {
        statistic,
        p_value,
        degrees_of_freedom: df,
        conclusion: Conclusion::from_p_value(p_value),
    })
}

/// k-sample mean comparison (one-way analysis of variance)
///
/// Tests H0: all population means are equal.
///
/// # Errors
/// Returns `InsufficientData` if fewer than 2 groups are given or any group
/// has fewer than 2 observations.
pub fn one_way_anova(groups: &[&[f64]]) -> Result<AnovaResult> {
    if groups.len() < 2 {
        return Err(JobInsightsError::InsufficientData(format!(
            "ANOVA requires at least 2 groups, got {}",
            groups.len()
        )));
    }
    for (i, group) in groups.iter().enumerate() {
        if group.len() < 2 {
            return Err(JobInsightsError::InsufficientData(format!(
                "ANOVA requires at least 2 observations per group, group {i} has {}",
                group.len()
            )));
        }
    }

    let k = groups.len() as f64;
    let n: usize = groups.iter().map(|g| g.len()).sum();
    let n = n as f64;

    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n;

    let ss_between: f64 = groups
        .iter()
        .map(|g| g.len() as f64 * (mean(g) - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .map(|g| {
            let m = mean(g);
            g.iter().map(|v| (v - m).powi(2)).sum::<f64>()
        })
        .sum();

    let df_between = k - 1.0;
    let df_within = n - k;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    // Guard the 0/0 case: identical data in every group carries no evidence
    // against H0.
    let (f_statistic, p_value) = if ms_within == 0.0 {
        if ms_between == 0.0 {
            (0.0, 1.0)
        } else {
            (f64::INFINITY, 0.0)
        }
    } else {
        let f = ms_between / ms_within;
        let dist = FisherSnedecor::new(df_between, df_within)
            .map_err(|e| JobInsightsError::InvalidArgument(e.to_string()))?;
        (f, 1.0 - dist.cdf(f))
    };

    Ok(AnovaResult {
        f_statistic,
        p_value,
        df_between,
        df_within,
        conclusion: Conclusion::from_p_value(p_value),
    })
}
