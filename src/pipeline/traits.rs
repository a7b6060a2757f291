//! Stage trait defining the common interface for table transforms.

use crate::core::{Column, TimeSeriesTable};
use crate::error::{IndicatorError, Result};
use std::collections::HashMap;

/// A pure transform from one table to a new table.
///
/// This trait is object-safe and can be used with `Box<dyn Stage>`.
///
/// # Example
///
/// ```
/// use geo_indicators::pipeline::{BoxedStage, DerivativeStage, LogIndicatorStage, Stage};
///
/// let stages: Vec<BoxedStage> = vec![
///     Box::new(DerivativeStage::new()),
///     Box::new(LogIndicatorStage::new()),
/// ];
/// assert_eq!(stages[0].name(), "derivative");
/// ```
pub trait Stage {
    /// Apply the stage, producing a new table.
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable>;

    /// Get the stage name.
    fn name(&self) -> &'static str;
}

/// Type alias for boxed stage trait objects.
pub type BoxedStage = Box<dyn Stage>;

/// Apply stages in order, feeding each output into the next stage.
pub fn apply_all(stages: &[BoxedStage], table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
    let mut current = table.clone();
    for stage in stages {
        current = stage.apply(&current)?;
    }
    Ok(current)
}

/// Fail when two output columns share a name, reporting the inputs behind them.
///
/// `inputs[i]` is the name of the column `outputs[i]` was computed from.
pub(crate) fn ensure_distinct_outputs(outputs: &[Column], inputs: &[&str]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(outputs.len());
    for (column, input) in outputs.iter().zip(inputs) {
        if let Some(first) = seen.insert(column.name(), *input) {
            return Err(IndicatorError::ColumnCollision {
                name: column.name().to_string(),
                first: first.to_string(),
                second: input.to_string(),
            });
        }
    }
    Ok(())
}
