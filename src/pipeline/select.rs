//! Extract one signal's columns from a list of computed tables.

use crate::core::{Column, TimeSeriesTable};
use crate::error::{IndicatorError, Result};
use tracing::{debug, trace};

/// Collects every column whose name starts with a prefix, across tables that
/// share one time index.
///
/// # Example
///
/// ```
/// use geo_indicators::core::TimeSeriesTableBuilder;
/// use geo_indicators::pipeline::ComponentSelector;
/// use chrono::{TimeZone, Utc};
///
/// let t = vec![Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()];
/// let derivatives = TimeSeriesTableBuilder::new()
///     .timestamps(t.clone())
///     .signal("x_der", vec![1.0])
///     .signal("y_der", vec![2.0])
///     .build()
///     .unwrap();
/// let averages = TimeSeriesTableBuilder::new()
///     .timestamps(t)
///     .signal("x_w_10", vec![3.0])
///     .build()
///     .unwrap();
///
/// let x = ComponentSelector::new("x").select(&[derivatives, averages]).unwrap();
/// assert_eq!(x.signal_names(), vec!["x_der", "x_w_10"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSelector {
    prefix: String,
}

impl ComponentSelector {
    /// Selector for columns starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Name prefix the selector matches.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Merge the matching columns of `tables` into one table.
    ///
    /// Every table must carry exactly the time index of the first one. Columns
    /// keep the order of their first appearance; a later column with the same
    /// name replaces the earlier values in place.
    pub fn select(&self, tables: &[TimeSeriesTable]) -> Result<TimeSeriesTable> {
        let first = tables.first().ok_or(IndicatorError::EmptyData)?;

        let mut columns: Vec<Column> = Vec::new();
        for (index, table) in tables.iter().enumerate() {
            if table.timestamps() != first.timestamps() {
                return Err(IndicatorError::MisalignedTables { index });
            }

            let before = columns.len();
            for column in table
                .columns()
                .iter()
                .filter(|c| c.name().starts_with(&self.prefix))
            {
                match columns.iter_mut().find(|c| c.name() == column.name()) {
                    Some(existing) => *existing = column.clone(),
                    None => columns.push(column.clone()),
                }
            }
            if columns.len() == before {
                trace!(prefix = %self.prefix, index, "table contributes no new columns");
            }
        }

        if columns.is_empty() {
            return Err(IndicatorError::ComponentNotFound(self.prefix.clone()));
        }

        debug!(
            prefix = %self.prefix,
            tables = tables.len(),
            columns = columns.len(),
            "selected component"
        );
        TimeSeriesTable::derived(first, columns, &format!("Component {}", self.prefix))
    }
}
