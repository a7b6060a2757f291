//! Re-centered rolling aggregates over several window widths.

use crate::core::{Aggregator, Column, ColumnTag, StageKind, TimeSeriesTable, WindowSet};
use crate::error::Result;
use crate::pipeline::{ensure_distinct_outputs, Stage};
use crate::transform::centered_rolling;
use tracing::debug;

/// Rolling max or mean of every signal for each width in a [`WindowSet`].
///
/// Each aggregate covers the trailing `w` samples (at least one valid sample),
/// then is shifted back by half a window so it is reported at the window's
/// center. Output columns are named `<base>_w_<w>` for the mean and
/// `<base>_max_<w>` for the maximum.
///
/// Signals whose base names coincide (`radon_a` and `radon_b` both have base
/// `radon`) would render the same columns, so they are rejected with
/// [`IndicatorError::ColumnCollision`](crate::error::IndicatorError::ColumnCollision).
#[derive(Debug, Clone, Default)]
pub struct RollingAggregateStage {
    windows: WindowSet,
    aggregator: Aggregator,
}

impl RollingAggregateStage {
    /// Stage using the default window set `{10, 100, 1000}`.
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            windows: WindowSet::default(),
            aggregator,
        }
    }

    /// Replace the window widths.
    pub fn with_windows(mut self, windows: WindowSet) -> Self {
        self.windows = windows;
        self
    }

    /// Window widths, in output order.
    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    /// Aggregation applied inside each window.
    pub fn aggregator(&self) -> Aggregator {
        self.aggregator
    }
}

impl Stage for RollingAggregateStage {
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
        let capacity = table.width() * self.windows.len();
        let mut columns = Vec::with_capacity(capacity);
        let mut inputs = Vec::with_capacity(capacity);

        for column in table.columns() {
            let base = column.base_name();
            for w in self.windows.iter() {
                inputs.push(column.name());
                columns.push(Column::new(
                    format!("{}_{}_{}", base, self.aggregator.tag(), w),
                    ColumnTag::new(base, StageKind::Rolling(self.aggregator), Some(w)),
                    centered_rolling(column.values(), w, self.aggregator),
                ));
            }
        }
        ensure_distinct_outputs(&columns, &inputs)?;

        debug!(
            stage = self.name(),
            aggregator = %self.aggregator,
            windows = ?self.windows.widths(),
            rows = table.len(),
            columns = columns.len(),
            "computed rolling aggregates"
        );
        let title = match self.aggregator {
            Aggregator::Mean => "Window average",
            Aggregator::Max => "Window maximum",
        };
        TimeSeriesTable::derived(table, columns, title)
    }

    fn name(&self) -> &'static str {
        "rolling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeSeriesTableBuilder;
    use crate::error::IndicatorError;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone, Utc};

    fn make_table(names: &[&str], values: Vec<f64>) -> TimeSeriesTable {
        let base = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let n = values.len();
        let mut builder = TimeSeriesTableBuilder::new()
            .timestamps((0..n).map(|i| base + Duration::minutes(i as i64)).collect());
        for name in names {
            builder = builder.signal(*name, values.clone());
        }
        builder.build().unwrap()
    }

    #[test]
    fn default_windows_and_mean_names() {
        let table = make_table(&["x_der"], vec![1.0; 20]);
        let out = RollingAggregateStage::new(Aggregator::Mean)
            .apply(&table)
            .unwrap();

        assert_eq!(out.signal_names(), vec!["x_w_10", "x_w_100", "x_w_1000"]);
        assert_eq!(out.title(), Some("Window average"));

        let tag = out.column("x_w_100").unwrap().tag();
        assert_eq!(tag.source(), "x");
        assert_eq!(tag.window(), Some(100));
        assert_eq!(tag.stage(), StageKind::Rolling(Aggregator::Mean));
    }

    #[test]
    fn signal_major_column_order() {
        let table = make_table(&["a", "b"], vec![1.0; 4]);
        let out = RollingAggregateStage::new(Aggregator::Max)
            .with_windows(WindowSet::new(vec![2, 3]).unwrap())
            .apply(&table)
            .unwrap();

        assert_eq!(
            out.signal_names(),
            vec!["a_max_2", "a_max_3", "b_max_2", "b_max_3"]
        );
    }

    #[test]
    fn window_wider_than_series_defines_every_value_before_shift() {
        let table = make_table(&["x"], vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let out = RollingAggregateStage::new(Aggregator::Mean)
            .with_windows(WindowSet::new(vec![10]).unwrap())
            .apply(&table)
            .unwrap();

        // shift of 5 moves every defined value past the end
        assert!(out.values("x_w_10").unwrap().iter().all(|v| v.is_nan()));

        let raw = crate::transform::rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 10, 1);
        assert_eq!(raw.len(), 5);
        assert!(raw.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn centered_mean_values() {
        let table = make_table(&["x"], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let out = RollingAggregateStage::new(Aggregator::Mean)
            .with_windows(WindowSet::new(vec![2]).unwrap())
            .apply(&table)
            .unwrap();

        let v = out.values("x_w_2").unwrap();
        assert_relative_eq!(v[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(v[4], 5.5, epsilon = 1e-12);
        assert!(v[5].is_nan());
    }

    #[test]
    fn signals_sharing_a_base_are_rejected() {
        let table = make_table(&["radon_a", "radon_b"], vec![1.0; 20]);
        let result = RollingAggregateStage::new(Aggregator::Mean).apply(&table);

        assert_eq!(
            result,
            Err(IndicatorError::ColumnCollision {
                name: "radon_w_10".to_string(),
                first: "radon_a".to_string(),
                second: "radon_b".to_string(),
            })
        );
    }

    #[test]
    fn collision_names_the_derivative_inputs() {
        let table = make_table(&["radon_a", "radon_b"], vec![1.0; 20]);
        let derivative = crate::pipeline::DerivativeStage::new()
            .apply(&table)
            .unwrap();

        match RollingAggregateStage::new(Aggregator::Max).apply(&derivative) {
            Err(IndicatorError::ColumnCollision {
                name,
                first,
                second,
            }) => {
                assert_eq!(name, "radon_max_10");
                assert_eq!(first, "radon_a_der");
                assert_eq!(second, "radon_b_der");
            }
            other => panic!("expected a column collision, got {:?}", other),
        }
    }
}
