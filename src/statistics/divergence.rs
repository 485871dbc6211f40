//! Symmetric log-ratio divergence accumulation.

/// One divergence term for a single bucket.
///
/// `(e_p - a_p) * ln(e_p / a_p)` is symmetric in sign: it is positive
/// whenever the proportions differ, regardless of direction. When exactly
/// one proportion is zero the term is infinite, and when both are zero it is
/// NaN; either way the bucket contributes nothing. This under-counts
/// divergence from buckets populated in only one of the two samples - a
/// deliberate policy kept for compatibility with downstream threshold
/// calibration, not a defect.
fn divergence_term(expected_proportion: f64, actual_proportion: f64) -> f64 {
    let term = (expected_proportion - actual_proportion)
        * (expected_proportion / actual_proportion).ln();
    if term.is_finite() {
        term
    } else {
        0.0
    }
}

/// Accumulate the raw PSI over a pair of bucket count vectors.
///
/// Proportions are taken against the full sample sizes (not the sum of
/// counts, which may be smaller when values fall outside the breakpoint
/// range). Returns the unscaled sum; the variable driver applies the final
/// 1/100 scaling so it stays single-sourced.
///
/// # Arguments
///
/// * `expected_counts` - Per-bucket counts of the baseline sample
/// * `actual_counts` - Per-bucket counts of the comparison sample
/// * `expected_size` - Number of observations in the baseline sample
/// * `actual_size` - Number of observations in the comparison sample
///
/// # Panics
///
/// Panics in debug builds if the count vectors differ in length.
pub fn accumulate_psi(
    expected_counts: &[usize],
    actual_counts: &[usize],
    expected_size: usize,
    actual_size: usize,
) -> f64 {
    debug_assert_eq!(
        expected_counts.len(),
        actual_counts.len(),
        "Count vectors must cover the same buckets"
    );

    let expected_n = expected_size as f64;
    let actual_n = actual_size as f64;

    expected_counts
        .iter()
        .zip(actual_counts.iter())
        .map(|(&e, &a)| divergence_term(e as f64 / expected_n, a as f64 / actual_n))
        .sum()
}
