//! Configuration for stability analysis.

use crate::types::Axis;

/// Configuration options for `StabilityIndex`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of quantile buckets per variable (default: 10).
    ///
    /// Breakpoints are taken from the expected data at `buckets + 1` evenly
    /// spaced quantile levels. Skewed or discrete data may collapse adjacent
    /// breakpoints; the degenerate intervals simply count nothing.
    pub buckets: usize,

    /// Which matrix dimension holds the variables (default: columns).
    pub axis: Axis,

    /// Raw PSI at or above this value is flagged as warning-level drift
    /// (default: 0.1, the conventional PSI band).
    pub warning_threshold: f64,

    /// Raw PSI at or above this value is flagged as critical drift
    /// (default: 0.25).
    pub critical_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buckets: 10,
            axis: Axis::Columns,
            warning_threshold: 0.1,
            critical_threshold: 0.25,
        }
    }
}
