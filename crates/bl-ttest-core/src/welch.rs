//! Welch's two-sample t-test
//!
//! - unequal variances, Welch-Satterthwaite degrees of freedom
//! - two-sided or one-sided (group 2 > group 1) alternative
//! - confidence interval for the mean difference at level 1 - alpha

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::types::{Alternative, Sample};
use crate::{TtestError, TtestResult};

/// Options for the Welch t-test
#[derive(Debug, Clone)]
pub struct WelchOptions {
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Significance level, must lie in (0, 1)
    pub alpha: f64,
}

impl Default for WelchOptions {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            alpha: 0.05,
        }
    }
}

/// Result of one Welch t-test run
///
/// All statistics are reported for group 2 minus group 1, so a positive
/// mean difference means group 2 is larger. Degenerate inputs (zero
/// standard error) produce non-finite fields rather than an error.
#[derive(Debug, Clone)]
pub struct WelchResult {
    /// mean(group 2) - mean(group 1)
    pub mean_diff: f64,
    /// Standard error of the mean difference
    pub std_error: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
    /// t statistic
    pub statistic: f64,
    /// Reported p-value after tail adjustment
    pub p_value: f64,
    /// Two-sided p-value before tail adjustment
    pub p_two_sided: f64,
    /// Student t quantile at 1 - alpha/2, used for the CI in both tail modes
    pub t_critical: f64,
    /// Confidence interval lower bound
    pub ci_lower: f64,
    /// Confidence interval upper bound
    pub ci_upper: f64,
    /// Alternative hypothesis used
    pub alternative: Alternative,
    /// Significance level used
    pub alpha: f64,
    /// Group 1 column name
    pub group1: String,
    /// Group 2 column name
    pub group2: String,
    pub n1: usize,
    pub n2: usize,
    pub mean1: f64,
    pub mean2: f64,
}

impl WelchResult {
    /// Confidence level of the interval
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }

    /// True when zero variance made the statistic undefined
    pub fn is_degenerate(&self) -> bool {
        !self.statistic.is_finite() || !self.df.is_finite()
    }

    /// Significance verdict at the configured level
    pub fn is_significant(&self) -> bool {
        self.p_value < self.alpha
    }
}

/// Welch's t-test between two samples
///
/// # Arguments
/// * `group1` - First sample (the baseline)
/// * `group2` - Second sample (the comparison)
/// * `options` - Tail mode and significance level
///
/// # Returns
/// Test result with mean difference, t-statistic, p-value, df, and CI.
/// Fails with `InsufficientData` when either sample has fewer than 2
/// observations and with `InvalidAlpha` when alpha is outside (0, 1).
pub fn welch_t_test(
    group1: &Sample,
    group2: &Sample,
    options: &WelchOptions,
) -> TtestResult<WelchResult> {
    if !(options.alpha > 0.0 && options.alpha < 1.0) {
        return Err(TtestError::InvalidAlpha(options.alpha));
    }
    if group1.n() < 2 {
        return Err(TtestError::InsufficientData {
            column: group1.name().to_string(),
            n: group1.n(),
        });
    }
    if group2.n() < 2 {
        return Err(TtestError::InsufficientData {
            column: group2.name().to_string(),
            n: group2.n(),
        });
    }

    let (n1, n2) = (group1.n() as f64, group2.n() as f64);
    let (m1, m2) = (group1.mean(), group2.mean());
    let (v1, v2) = (group1.variance(), group2.variance());

    let diff = m2 - m1;
    let se = (v2 / n2 + v1 / n1).sqrt();
    let df = se.powi(4) / ((v2 / n2).powi(2) / (n2 - 1.0) + (v1 / n1).powi(2) / (n1 - 1.0));
    let statistic = diff / se;

    // StudentsT rejects a non-finite df, which happens exactly when both
    // variances are zero. The run still completes; the fields stay NaN.
    let dist = StudentsT::new(0.0, 1.0, df).ok();
    let p_two_sided = dist
        .as_ref()
        .map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(statistic.abs())));
    let t_critical = dist
        .as_ref()
        .map_or(f64::NAN, |d| d.inverse_cdf(1.0 - options.alpha / 2.0));

    let p_value = match options.alternative {
        Alternative::TwoSided => p_two_sided,
        // diff == 0 falls to the else branch on purpose
        Alternative::Greater => {
            if diff > 0.0 {
                p_two_sided / 2.0
            } else {
                1.0 - p_two_sided / 2.0
            }
        }
    };

    Ok(WelchResult {
        mean_diff: diff,
        std_error: se,
        df,
        statistic,
        p_value,
        p_two_sided,
        t_critical,
        ci_lower: diff - t_critical * se,
        ci_upper: diff + t_critical * se,
        alternative: options.alternative,
        alpha: options.alpha,
        group1: group1.name().to_string(),
        group2: group2.name().to_string(),
        n1: group1.n(),
        n2: group2.n(),
        mean1: m1,
        mean2: m2,
    })
}
