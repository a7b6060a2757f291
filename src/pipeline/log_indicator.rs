//! Logarithmic indicator function of rolling aggregates.

use crate::core::{
    validate_zero_floor, Column, ColumnTag, StageKind, TimeSeriesTable, DEFAULT_ZERO_FLOOR,
};
use crate::error::{IndicatorError, Result};
use crate::pipeline::{ensure_distinct_outputs, Stage};
use crate::transform::log10_floored;
use tracing::debug;

/// Zero-floor `log10` of each column, named `<base>_lg_<window>`.
///
/// The window width is taken from the column tag. Columns assembled outside
/// the pipeline carry no width, so it is read from the third `_`-separated
/// segment of their name (`x_w_10` becomes `x_lg_10`).
#[derive(Debug, Clone, Copy)]
pub struct LogIndicatorStage {
    zero_floor: f64,
}

impl Default for LogIndicatorStage {
    fn default() -> Self {
        Self {
            zero_floor: DEFAULT_ZERO_FLOOR,
        }
    }
}

impl LogIndicatorStage {
    /// Stage replacing zeros with `1e-6`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different value in place of exact zeros.
    pub fn with_zero_floor(zero_floor: f64) -> Result<Self> {
        validate_zero_floor(zero_floor)?;
        Ok(Self { zero_floor })
    }

    /// Value substituted for exact zeros.
    pub fn zero_floor(&self) -> f64 {
        self.zero_floor
    }
}

/// Window width of a column, from its tag or its name.
fn window_of(column: &Column) -> Result<usize> {
    if let Some(w) = column.tag().window() {
        return Ok(w);
    }
    column
        .name()
        .split('_')
        .nth(2)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| IndicatorError::InvalidColumnName(column.name().to_string()))
}

impl Stage for LogIndicatorStage {
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
        let columns = table
            .columns()
            .iter()
            .map(|column| -> Result<Column> {
                let base = column.base_name();
                let window = window_of(column)?;
                Ok(Column::new(
                    format!("{}_lg_{}", base, window),
                    ColumnTag::new(base, StageKind::LogIndicator, Some(window)),
                    log10_floored(column.values(), self.zero_floor),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let inputs: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
        ensure_distinct_outputs(&columns, &inputs)?;

        debug!(
            stage = self.name(),
            zero_floor = self.zero_floor,
            rows = table.len(),
            columns = columns.len(),
            "computed log indicators"
        );
        TimeSeriesTable::derived(
            table,
            columns,
            "Indicator function (log of derivative magnitude)",
        )
    }

    fn name(&self) -> &'static str {
        "log_indicator"
    }
}
