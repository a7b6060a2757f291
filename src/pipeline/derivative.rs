//! Numerical derivative of every signal against elapsed time.

use crate::core::{Column, ColumnTag, StageKind, TimeSeriesTable};
use crate::error::Result;
use crate::pipeline::Stage;
use crate::transform::centered_difference;
use tracing::debug;

const DERIVATIVE_SUFFIX: &str = "_der";

/// Centered second-order derivative of each signal, in units per second.
///
/// The output keeps only the time column and one `<name>_der` column per
/// input signal. First and last rows are NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivativeStage;

impl DerivativeStage {
    /// Create the stage.
    pub fn new() -> Self {
        Self
    }
}

impl Stage for DerivativeStage {
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
        let columns: Vec<Column> = table
            .columns()
            .iter()
            .map(|column| {
                Column::new(
                    format!("{}{}", column.name(), DERIVATIVE_SUFFIX),
                    ColumnTag::new(column.base_name(), StageKind::Derivative, None),
                    centered_difference(table.timestamps(), column.values()),
                )
            })
            .collect();

        debug!(
            stage = self.name(),
            rows = table.len(),
            columns = columns.len(),
            "computed centered derivatives"
        );
        TimeSeriesTable::derived(table, columns, "Numerical derivative")
    }

    fn name(&self) -> &'static str {
        "derivative"
    }
}
