//! Single-pass indicator computation over every window width.

use crate::core::{
    validate_zero_floor, Aggregator, Column, ColumnTag, StageKind, TimeSeriesTable, WindowSet,
    DEFAULT_ZERO_FLOOR,
};
use crate::error::Result;
use crate::pipeline::Stage;
use crate::transform::{centered_difference, centered_rolling, log10_floored, magnitude};
use tracing::debug;

/// Derivative, magnitude, rolling maximum and zero-floor log in one pass.
///
/// The input columns are kept unchanged and one `<name>_<w>` indicator column
/// per signal and window width is appended after them. The result matches
/// [`StepwisePipeline`](crate::pipeline::StepwisePipeline) run with
/// [`Aggregator::Max`] and the same windows.
#[derive(Debug, Clone)]
pub struct CombinedIndicatorPipeline {
    windows: WindowSet,
    zero_floor: f64,
}

impl Default for CombinedIndicatorPipeline {
    fn default() -> Self {
        Self {
            windows: WindowSet::default(),
            zero_floor: DEFAULT_ZERO_FLOOR,
        }
    }
}

impl CombinedIndicatorPipeline {
    /// Pipeline using the default window set `{10, 100, 1000}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the window widths.
    pub fn with_windows(mut self, windows: WindowSet) -> Self {
        self.windows = windows;
        self
    }

    /// Use a different value in place of exact zeros.
    pub fn with_zero_floor(mut self, zero_floor: f64) -> Result<Self> {
        validate_zero_floor(zero_floor)?;
        self.zero_floor = zero_floor;
        Ok(self)
    }

    /// Window widths producing one indicator column each.
    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }
}

impl Stage for CombinedIndicatorPipeline {
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
        let mut columns = table.columns().to_vec();
        columns.reserve(table.width() * self.windows.len());

        for column in table.columns() {
            let derivative = centered_difference(table.timestamps(), column.values());
            let abs = magnitude(&derivative);

            for w in self.windows.iter() {
                let peaks = centered_rolling(&abs, w, Aggregator::Max);
                columns.push(Column::new(
                    format!("{}_{}", column.name(), w),
                    ColumnTag::new(column.name(), StageKind::Indicator, Some(w)),
                    log10_floored(&peaks, self.zero_floor),
                ));
            }
        }

        debug!(
            stage = self.name(),
            windows = ?self.windows.widths(),
            rows = table.len(),
            columns = columns.len(),
            "computed combined indicators"
        );
        TimeSeriesTable::derived(table, columns, "Full data analysis")
    }

    fn name(&self) -> &'static str {
        "combined"
    }
}
