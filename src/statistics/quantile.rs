//! Quantile breakpoint construction from the expected (baseline) sample.
//!
//! Breakpoints are read at evenly spaced quantile levels using the "R-7"
//! definition (linear interpolation between rank neighbors), which matches
//! the standard percentile behavior of most statistical packages.

/// Compute a single quantile from pre-sorted data.
///
/// Uses the R-7 quantile definition: the fractional rank is
/// `(n - 1) * p` and the result interpolates linearly between the two
/// nearest order statistics.
///
/// # Arguments
///
/// * `sorted` - Slice of values that MUST be sorted in ascending order
/// * `p` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The quantile value at probability `p`.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside [0, 1]. The caller must
/// ensure the data is sorted; no verification is performed.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        // Linear interpolation between neighbors
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Compute `buckets + 1` breakpoints from pre-sorted data.
///
/// Breakpoints sit at quantile levels `k / buckets` for `k = 0..=buckets`,
/// so there are `buckets` intervals between them. Repeated values in the
/// data may produce duplicate breakpoints; they are passed through
/// unchanged, and the resulting degenerate intervals count nothing.
///
/// # Panics
///
/// Panics if `sorted` is empty or `buckets` is zero.
pub fn breakpoints_sorted(sorted: &[f64], buckets: usize) -> Vec<f64> {
    assert!(!sorted.is_empty(), "Cannot compute breakpoints of empty slice");
    assert!(buckets >= 1, "At least one bucket is required");

    (0..=buckets)
        .map(|k| quantile_sorted(sorted, k as f64 / buckets as f64))
        .collect()
}

/// Compute `buckets + 1` quantile breakpoints from an unsorted sample.
///
/// Sorts a copy of the sample once, then reads all breakpoints from the
/// sorted data - O(n log n) total.
///
/// # Arguments
///
/// * `sample` - Slice of baseline observations
/// * `buckets` - Number of intervals the breakpoints should delimit
///
/// # Returns
///
/// An ordered `Vec<f64>` of length `buckets + 1` spanning the sample from
/// its minimum (level 0) to its maximum (level 1).
///
/// # Panics
///
/// Panics if `sample` is empty or `buckets` is zero. Public entry points
/// validate these preconditions and return an error before reaching here.
pub fn quantile_breakpoints(sample: &[f64], buckets: usize) -> Vec<f64> {
    assert!(!sample.is_empty(), "Cannot compute breakpoints of empty slice");

    // Use unstable sort which is faster than stable sort (don't need stability)
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    breakpoints_sorted(&sorted, buckets)
}
