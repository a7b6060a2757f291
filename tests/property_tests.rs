//! Property-based tests for the indicator stages.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated, irregularly sampled series.

use chrono::{Duration, TimeZone, Utc};
use geo_indicators::core::{
    Aggregator, IndicatorConfig, TimeSeriesTable, TimeSeriesTableBuilder, WindowSet,
};
use geo_indicators::pipeline::{
    CombinedIndicatorPipeline, DerivativeStage, LogIndicatorStage, RollingAggregateStage, Stage,
    StepwisePipeline,
};
use geo_indicators::transform::{log10_floored, rolling_max, rolling_mean};
use proptest::prelude::*;

/// Create a table from values and strictly positive time steps in seconds.
fn make_table(values: &[f64], steps: &[i64]) -> TimeSeriesTable {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut offset = 0i64;
    let timestamps = steps
        .iter()
        .take(values.len())
        .map(|step| {
            offset += *step;
            base + Duration::seconds(offset)
        })
        .collect();
    TimeSeriesTableBuilder::new()
        .timestamps(timestamps)
        .signal("x", values.to_vec())
        .build()
        .unwrap()
}

/// Strategy for a series together with irregular sampling steps.
fn series_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<i64>)> {
    (min_len..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(-1000.0..1000.0_f64, len),
            prop::collection::vec(1i64..3600, len),
        )
    })
}

/// Strategy for small window sets of distinct widths.
fn windows_strategy() -> impl Strategy<Value = WindowSet> {
    prop::collection::btree_set(1usize..40, 1..4)
        .prop_map(|w| WindowSet::new(w.into_iter().collect()).unwrap())
}

fn same_series(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(a, b)| {
            (a.is_nan() && b.is_nan()) || (a - b).abs() <= 1e-12 * a.abs().max(1.0)
        })
}

// =============================================================================
// Property: Derivative keeps the row count, edges are missing
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn derivative_preserves_length_and_marks_edges(
        (values, steps) in series_strategy(3, 200)
    ) {
        let table = make_table(&values, &steps);
        let der = DerivativeStage::new().apply(&table).unwrap();
        let d = der.values("x_der").unwrap();

        prop_assert_eq!(d.len(), values.len());
        prop_assert!(d[0].is_nan());
        prop_assert!(d[d.len() - 1].is_nan());
        for value in &d[1..d.len() - 1] {
            prop_assert!(value.is_finite());
        }
    }
}

// =============================================================================
// Property: Log rescale is floored and monotone
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn log_of_zero_is_minus_six(values in prop::collection::vec(0.0..1e6_f64, 1..50)) {
        let mut with_zeros = values.clone();
        with_zeros[0] = 0.0;
        let result = log10_floored(&with_zeros, 1e-6);
        prop_assert!((result[0] + 6.0).abs() < 1e-12);
    }

    #[test]
    fn log_preserves_ordering(a in 1e-12..1e9_f64, b in 1e-12..1e9_f64) {
        let result = log10_floored(&[a, b], 1e-6);
        if a < b {
            prop_assert!(result[0] <= result[1]);
        } else {
            prop_assert!(result[0] >= result[1]);
        }
    }
}

// =============================================================================
// Property: Rolling aggregates with min_periods = 1 are defined everywhere
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn rolling_defined_from_first_sample(
        (values, _steps) in series_strategy(1, 100),
        window in 1usize..200
    ) {
        let max = rolling_max(&values, window, 1);
        let mean = rolling_mean(&values, window, 1);
        prop_assert!(max.iter().all(|v| !v.is_nan()));
        prop_assert!(mean.iter().all(|v| !v.is_nan()));
        for (m, x) in max.iter().zip(&values) {
            prop_assert!(m >= x);
        }
    }

    #[test]
    fn rolling_stage_truncates_shifted_tail(
        (values, steps) in series_strategy(1, 100),
        windows in windows_strategy()
    ) {
        let table = make_table(&values, &steps);
        let out = RollingAggregateStage::new(Aggregator::Mean)
            .with_windows(windows.clone())
            .apply(&table)
            .unwrap();

        for w in windows.iter() {
            let v = out.values(&format!("x_w_{}", w)).unwrap();
            let shift = w.div_ceil(2).min(v.len());
            prop_assert!(v[v.len() - shift..].iter().all(|x| x.is_nan()));
            prop_assert!(v[..v.len() - shift].iter().all(|x| !x.is_nan()));
        }
    }
}

// =============================================================================
// Property: Fused and stepwise paths agree under the max aggregator
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn combined_equals_stepwise_max(
        (values, steps) in series_strategy(3, 150),
        windows in windows_strategy()
    ) {
        let table = make_table(&values, &steps);
        let combined = CombinedIndicatorPipeline::new()
            .with_windows(windows.clone())
            .apply(&table)
            .unwrap();
        let config = IndicatorConfig::new()
            .with_windows(windows.clone())
            .with_aggregator(Aggregator::Max);
        let stepwise = StepwisePipeline::with_config(config).unwrap().run(&table).unwrap();

        for w in windows.iter() {
            let fused = combined.values(&format!("x_{}", w)).unwrap();
            let staged = stepwise.indicator.values(&format!("x_lg_{}", w)).unwrap();
            prop_assert!(same_series(fused, staged));
        }
    }

    #[test]
    fn stages_are_pure(
        (values, steps) in series_strategy(3, 100)
    ) {
        let table = make_table(&values, &steps);
        let der = DerivativeStage::new().apply(&table).unwrap();
        let rolled = RollingAggregateStage::new(Aggregator::Max).apply(&der).unwrap();
        let first = LogIndicatorStage::new().apply(&rolled).unwrap();
        let second = LogIndicatorStage::new().apply(&rolled).unwrap();

        prop_assert_eq!(first.signal_names(), second.signal_names());
        for (a, b) in first.columns().iter().zip(second.columns()) {
            let a: Vec<u64> = a.values().iter().map(|v| v.to_bits()).collect();
            let b: Vec<u64> = b.values().iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(a, b);
        }
    }
}
