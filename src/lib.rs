//! # population-stability
//!
//! Compute the Population Stability Index (PSI) to detect distribution
//! drift between a baseline ("expected") dataset and a later ("actual")
//! dataset, per variable.
//!
//! PSI is the standard drift statistic of credit-risk scorecard monitoring
//! and ML model monitoring: each variable's value space is cut into
//! quantile buckets derived from the baseline, both samples are counted
//! into those buckets, and a symmetric log-ratio divergence is summed over
//! the buckets. The output is one non-negative scalar per variable.
//!
//! ## Quick Start
//!
//! ```
//! use nalgebra::DMatrix;
//! use population_stability::{calculate_psi, Axis};
//!
//! // Two variables in columns, 100 observations each.
//! let expected = DMatrix::from_fn(100, 2, |r, c| (r % 10) as f64 + c as f64);
//! let actual = expected.clone();
//!
//! let psi = calculate_psi(&expected, &actual, 10, Axis::Columns).unwrap();
//! assert_eq!(psi, vec![0.0, 0.0]);
//! ```
//!
//! For thresholds, severity bands, and report formatting, use the builder:
//!
//! ```
//! use nalgebra::DMatrix;
//! use population_stability::StabilityIndex;
//!
//! let expected = DMatrix::from_fn(200, 1, |r, _| r as f64);
//! let actual = DMatrix::from_fn(200, 1, |r, _| (r as f64) * 0.5);
//!
//! let report = StabilityIndex::new()
//!     .buckets(10)
//!     .check(&expected, &actual)
//!     .unwrap();
//!
//! if report.has_drift() {
//!     println!("{}", population_stability::output::format_report(&report));
//! }
//! ```
//!
//! ## Semantics worth knowing
//!
//! - Breakpoints always come from the expected data, so the comparison is
//!   not symmetric: `check(a, b)` and `check(b, a)` use different buckets.
//! - A bucket populated in only one of the two samples produces an
//!   infinite divergence term; that term is substituted with zero. This
//!   under-counts one-sided drift, and is kept deliberately so results
//!   stay comparable with existing PSI threshold calibrations.
//! - The emitted values are the raw accumulated PSI divided by 100; the
//!   per-variable [`result::VariableStability`] also carries the raw value
//!   on the conventional 0.1 / 0.25 band scale.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod index;
mod result;
mod types;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use error::PsiError;
pub use index::StabilityIndex;
pub use result::{Severity, StabilityReport, VariableStability};
pub use types::Axis;

use nalgebra::DMatrix;

/// Convenience function computing PSI values with default thresholds.
///
/// Equivalent to running [`StabilityIndex`] with the given `buckets` and
/// `axis` and collecting [`StabilityReport::values`]: one entry per
/// variable along `axis`, each the variable's accumulated PSI divided
/// by 100, ordered by variable index.
///
/// # Arguments
///
/// * `expected` - Baseline matrix the quantile buckets are derived from
/// * `actual` - Comparison matrix of the same shape
/// * `buckets` - Number of quantile buckets (use 10 for the conventional PSI)
/// * `axis` - Whether variables are the columns or the rows
///
/// # Errors
///
/// Returns [`PsiError`] when `buckets` is zero, the shapes differ, or the
/// variables carry no observations.
pub fn calculate_psi(
    expected: &DMatrix<f64>,
    actual: &DMatrix<f64>,
    buckets: usize,
    axis: Axis,
) -> Result<Vec<f64>, PsiError> {
    StabilityIndex::new()
        .buckets(buckets)
        .axis(axis)
        .check(expected, actual)
        .map(|report| report.values())
}
