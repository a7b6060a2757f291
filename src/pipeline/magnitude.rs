//! Magnitude of every signal.

use crate::core::{Column, ColumnTag, StageKind, TimeSeriesTable};
use crate::error::Result;
use crate::pipeline::Stage;
use crate::transform::magnitude;
use tracing::debug;

/// Elementwise `sqrt(x^2)` of each column, named `<name>_2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnitudeStage;

impl MagnitudeStage {
    /// Create the stage.
    pub fn new() -> Self {
        Self
    }
}

impl Stage for MagnitudeStage {
    fn apply(&self, table: &TimeSeriesTable) -> Result<TimeSeriesTable> {
        let columns: Vec<Column> = table
            .columns()
            .iter()
            .map(|column| {
                Column::new(
                    format!("{}_2", column.name()),
                    ColumnTag::new(column.base_name(), StageKind::Magnitude, None),
                    magnitude(column.values()),
                )
            })
            .collect();

        debug!(stage = self.name(), rows = table.len(), columns = columns.len());
        TimeSeriesTable::derived(table, columns, "Derivative magnitude")
    }

    fn name(&self) -> &'static str {
        "magnitude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeSeriesTableBuilder;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn magnitude_names_and_values() {
        let base = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let table = TimeSeriesTableBuilder::new()
            .timestamps((0..3).map(|i| base + Duration::seconds(i)).collect())
            .signal("x_der", vec![f64::NAN, -0.5, 0.25])
            .build()
            .unwrap();

        let out = MagnitudeStage::new().apply(&table).unwrap();
        assert_eq!(out.signal_names(), vec!["x_der_2"]);

        let values = out.values("x_der_2").unwrap();
        assert!(values[0].is_nan());
        assert_eq!(&values[1..], &[0.5, 0.25]);

        let tag = out.column("x_der_2").unwrap().tag();
        assert_eq!(tag.source(), "x");
        assert_eq!(tag.stage(), StageKind::Magnitude);
    }
}
