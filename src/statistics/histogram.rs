//! Bucketed frequency counts against a fixed breakpoint sequence.

/// Count how many sample values fall in each interval between breakpoints.
///
/// Interval `i` spans `(breakpoints[i], breakpoints[i + 1]]` - open below,
/// closed above - except the very first interval, which also includes its
/// lower bound so the baseline minimum is never dropped. Values above the
/// last breakpoint (or below the first) land in no interval.
///
/// Each interval is tested directly against the full sample, O(n * buckets).
/// The inclusive/exclusive boundary semantics are load-bearing: a
/// binary-search bucketing shortcut would silently misplace values sitting
/// exactly on the first breakpoint.
///
/// # Arguments
///
/// * `sample` - Slice of observations to count (may be empty)
/// * `breakpoints` - Ordered breakpoint sequence of length `buckets + 1`
///
/// # Returns
///
/// A `Vec<usize>` of length `breakpoints.len() - 1`. An empty sample yields
/// an all-zero vector. Duplicate breakpoints make the interval between them
/// degenerate; it counts nothing (`low < x <= high` is unsatisfiable when
/// `low == high`, and the shared values are picked up by the neighboring
/// interval that ends at that breakpoint).
///
/// # Panics
///
/// Panics if fewer than two breakpoints are provided.
pub fn bucket_counts(sample: &[f64], breakpoints: &[f64]) -> Vec<usize> {
    assert!(
        breakpoints.len() >= 2,
        "At least two breakpoints are required"
    );

    let mut counts = vec![0usize; breakpoints.len() - 1];
    for (i, count) in counts.iter_mut().enumerate() {
        let low = breakpoints[i];
        let high = breakpoints[i + 1];
        *count = if i == 0 {
            sample.iter().filter(|&&x| x >= low && x <= high).count()
        } else {
            sample.iter().filter(|&&x| x > low && x <= high).count()
        };
    }
    counts
}
