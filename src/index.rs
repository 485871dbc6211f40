//! Main `StabilityIndex` entry point and per-variable driver.

use nalgebra::DMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::PsiError;
use crate::result::{Severity, StabilityReport, VariableStability};
use crate::statistics::{accumulate_psi, bucket_counts, quantile_breakpoints};
use crate::types::Axis;

/// Main entry point for stability analysis.
///
/// Use the builder pattern to configure and run a comparison between a
/// baseline matrix and a later matrix of the same shape.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use population_stability::{Axis, StabilityIndex};
///
/// // 100 observations of one variable, compared against itself.
/// let expected = DMatrix::from_fn(100, 1, |r, _| (r % 10) as f64);
/// let actual = expected.clone();
///
/// let report = StabilityIndex::new()
///     .buckets(10)
///     .axis(Axis::Columns)
///     .check(&expected, &actual)
///     .unwrap();
///
/// assert_eq!(report.values(), vec![0.0]);
/// assert!(!report.has_drift());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StabilityIndex {
    config: Config,
}

impl StabilityIndex {
    /// Create with default configuration (10 buckets, variables in columns).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the number of quantile buckets per variable.
    ///
    /// Validated when `check` runs; zero is rejected there.
    pub fn buckets(mut self, buckets: usize) -> Self {
        self.config.buckets = buckets;
        self
    }

    /// Set which matrix dimension holds the variables.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    /// Set the raw-PSI warning threshold.
    pub fn warning_threshold(mut self, threshold: f64) -> Self {
        self.config.warning_threshold = threshold;
        self
    }

    /// Set the raw-PSI critical threshold.
    pub fn critical_threshold(mut self, threshold: f64) -> Self {
        self.config.critical_threshold = threshold;
        self
    }

    /// Compare `actual` against the `expected` baseline.
    ///
    /// Derives quantile breakpoints from the expected data for each variable,
    /// counts both samples into those buckets, accumulates the divergence,
    /// and scales the emitted value by 1/100. Variables are independent, so
    /// the loop fans out across a rayon pool when the `parallel` feature is
    /// enabled; results come back in variable order either way.
    ///
    /// # Errors
    ///
    /// Returns [`PsiError`] if `buckets` is zero, the matrix shapes differ,
    /// or the variables have no observations. All checks run before any
    /// per-variable work starts.
    pub fn check(
        &self,
        expected: &DMatrix<f64>,
        actual: &DMatrix<f64>,
    ) -> Result<StabilityReport, PsiError> {
        self.validate(expected, actual)?;

        let count = variable_count(expected, self.config.axis);

        #[cfg(feature = "parallel")]
        let variables: Vec<VariableStability> = (0..count)
            .into_par_iter()
            .map(|variable| self.assess_variable(expected, actual, variable))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let variables: Vec<VariableStability> = (0..count)
            .map(|variable| self.assess_variable(expected, actual, variable))
            .collect();

        Ok(StabilityReport {
            buckets: self.config.buckets,
            axis: self.config.axis,
            variables,
        })
    }

    /// Breakpoints from the baseline, counts for both samples, divergence sum.
    fn assess_variable(
        &self,
        expected: &DMatrix<f64>,
        actual: &DMatrix<f64>,
        variable: usize,
    ) -> VariableStability {
        let baseline = variable_sample(expected, self.config.axis, variable);
        let current = variable_sample(actual, self.config.axis, variable);

        let breakpoints = quantile_breakpoints(&baseline, self.config.buckets);
        let expected_counts = bucket_counts(&baseline, &breakpoints);
        let actual_counts = bucket_counts(&current, &breakpoints);

        let psi = accumulate_psi(
            &expected_counts,
            &actual_counts,
            baseline.len(),
            current.len(),
        );

        VariableStability {
            variable,
            psi,
            value: psi / 100.0,
            severity: self.classify(psi),
        }
    }

    fn classify(&self, psi: f64) -> Severity {
        if psi >= self.config.critical_threshold {
            Severity::Critical
        } else if psi >= self.config.warning_threshold {
            Severity::Warning
        } else {
            Severity::None
        }
    }

    fn validate(
        &self,
        expected: &DMatrix<f64>,
        actual: &DMatrix<f64>,
    ) -> Result<(), PsiError> {
        if self.config.buckets == 0 {
            return Err(PsiError::InvalidBuckets);
        }
        if expected.shape() != actual.shape() {
            return Err(PsiError::ShapeMismatch {
                expected: expected.shape(),
                actual: actual.shape(),
            });
        }
        if variable_count(expected, self.config.axis) > 0
            && sample_len(expected, self.config.axis) == 0
        {
            return Err(PsiError::EmptySample);
        }
        Ok(())
    }
}

/// Number of variables the matrix holds along `axis`.
fn variable_count(matrix: &DMatrix<f64>, axis: Axis) -> usize {
    match axis {
        Axis::Columns => matrix.ncols(),
        Axis::Rows => matrix.nrows(),
    }
}

/// Number of observations per variable along the other dimension.
fn sample_len(matrix: &DMatrix<f64>, axis: Axis) -> usize {
    match axis {
        Axis::Columns => matrix.nrows(),
        Axis::Rows => matrix.ncols(),
    }
}

/// Extract one variable's observations as a contiguous sample.
fn variable_sample(matrix: &DMatrix<f64>, axis: Axis, variable: usize) -> Vec<f64> {
    match axis {
        Axis::Columns => matrix.column(variable).iter().copied().collect(),
        Axis::Rows => matrix.row(variable).iter().copied().collect(),
    }
}
