//! End-to-end tests for the PSI pipeline.

use nalgebra::DMatrix;
use population_stability::{calculate_psi, Axis, StabilityIndex};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Evenly spaced grid covering `[start, start + n * step)`.
fn grid_column(start: f64, step: f64, n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, 1, |r, _| start + step * r as f64)
}

#[test]
fn self_comparison_is_zero_for_any_bucket_count() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let data = DMatrix::from_fn(200, 3, |_, _| rng.gen::<f64>() * 50.0);

    for buckets in [1, 2, 5, 10, 20, 50] {
        let values = calculate_psi(&data, &data, buckets, Axis::Columns).unwrap();
        assert_eq!(values, vec![0.0, 0.0, 0.0], "buckets = {}", buckets);
    }
}

#[test]
fn replicated_discrete_scenario_yields_zero_vector() {
    // [1,1,1,1,2,2,2,3,3,4] replicated to 100 observations per variable,
    // across 2 columns. Ties collapse several breakpoints; the comparison
    // against an identical sample must still come out exactly stable.
    let base = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0];
    let expected = DMatrix::from_fn(100, 2, |r, _| base[r % base.len()]);
    let actual = expected.clone();

    let values = calculate_psi(&expected, &actual, 10, Axis::Columns).unwrap();
    assert_eq!(values.len(), 2);
    for v in values {
        assert!(v.abs() < 1e-9);
    }
}

#[test]
fn contraction_of_the_distribution_is_detected() {
    // Baseline uniform on [0, 100); later sample concentrated on [25, 75).
    // The mid-range buckets double their proportion, which the divergence
    // sum picks up well past the conventional 0.1 warning band.
    let expected = grid_column(0.0, 0.1, 1000);
    let actual = grid_column(25.0, 0.05, 1000);

    let report = StabilityIndex::new()
        .buckets(10)
        .check(&expected, &actual)
        .unwrap();

    let psi = report.variables[0].psi;
    assert!(psi > 0.1, "raw PSI {} should flag drift", psi);
    assert!(psi < 1.0, "raw PSI {} is implausibly large for this shift", psi);
    assert!(report.has_drift());

    // The emitted vector carries the same number scaled by 1/100.
    assert!((report.values()[0] - psi / 100.0).abs() < 1e-15);
}

#[test]
fn swapping_expected_and_actual_changes_the_result() {
    // Breakpoints come from the first argument only, so the statistic is
    // not symmetric under relabeling.
    let wide = grid_column(0.0, 0.1, 1000);
    let narrow = grid_column(25.0, 0.05, 1000);

    let forward = calculate_psi(&wide, &narrow, 10, Axis::Columns).unwrap();
    let backward = calculate_psi(&narrow, &wide, 10, Axis::Columns).unwrap();

    assert!(forward[0] > 0.0);
    assert!(backward[0] > 0.0);
    assert!(
        (forward[0] - backward[0]).abs() > 1e-5,
        "swapped comparison unexpectedly matched: {} vs {}",
        forward[0],
        backward[0]
    );
}

#[test]
fn output_is_nonnegative_for_assorted_distributions() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let expected = DMatrix::from_fn(500, 4, |_, c| {
        let u = rng.gen::<f64>();
        match c {
            0 => u * 100.0,
            1 => u * u * 10.0,
            2 => (u - 0.5) * 3.0,
            _ => (u + 1e-12).ln().abs(),
        }
    });
    let actual = DMatrix::from_fn(500, 4, |_, c| {
        let u = rng.gen::<f64>();
        match c {
            0 => 20.0 + u * 120.0,
            1 => u * 10.0,
            2 => (u - 0.2) * 2.0,
            _ => u.sqrt(),
        }
    });

    let values = calculate_psi(&expected, &actual, 10, Axis::Columns).unwrap();
    for (i, v) in values.iter().enumerate() {
        assert!(*v >= 0.0, "variable {} produced negative PSI {}", i, v);
    }
}

#[test]
fn column_axis_equals_transposed_row_axis() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
    let expected = DMatrix::from_fn(150, 4, |_, _| rng.gen::<f64>() * 10.0);
    let actual = DMatrix::from_fn(150, 4, |_, _| 1.0 + rng.gen::<f64>() * 8.0);

    let by_columns = calculate_psi(&expected, &actual, 10, Axis::Columns).unwrap();
    let by_rows =
        calculate_psi(&expected.transpose(), &actual.transpose(), 10, Axis::Rows).unwrap();

    assert_eq!(by_columns, by_rows);
}

#[test]
fn more_buckets_do_not_break_stability_of_identical_data() {
    let data = grid_column(5.0, 0.25, 400);
    for buckets in [1, 3, 10, 40, 100] {
        let values = calculate_psi(&data, &data, buckets, Axis::Columns).unwrap();
        assert_eq!(values, vec![0.0], "buckets = {}", buckets);
    }
}

#[test]
fn integer_axis_selectors_resolve_through_from_index() {
    let data = grid_column(0.0, 1.0, 50);
    let axis = Axis::from_index(0).unwrap();
    let values = calculate_psi(&data, &data, 5, axis).unwrap();
    assert_eq!(values, vec![0.0]);
}
