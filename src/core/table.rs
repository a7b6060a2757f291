//! TimeSeriesTable data structure: a time column plus named signal columns.

use crate::core::config::Aggregator;
use crate::error::{IndicatorError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Stage that produced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Supplied by the caller.
    Raw,
    /// Centered second-order difference.
    Derivative,
    /// Absolute value.
    Magnitude,
    /// Rolling aggregate, re-centered.
    Rolling(Aggregator),
    /// Zero-floor log10 of a rolling aggregate.
    LogIndicator,
    /// Output of the fused derivative/max/log path.
    Indicator,
}

/// Provenance carried alongside every column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnTag {
    source: String,
    stage: StageKind,
    window: Option<usize>,
}

impl ColumnTag {
    /// Tag with an explicit source, stage and width.
    pub fn new(source: impl Into<String>, stage: StageKind, window: Option<usize>) -> Self {
        Self {
            source: source.into(),
            stage,
            window,
        }
    }

    /// Tag for a caller-supplied signal.
    pub fn raw(name: impl Into<String>) -> Self {
        Self::new(name, StageKind::Raw, None)
    }

    /// Base signal name the column was derived from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Stage that produced the column.
    pub fn stage(&self) -> StageKind {
        self.stage
    }

    /// Window width, for rolling and indicator columns.
    pub fn window(&self) -> Option<usize> {
        self.window
    }
}

/// A named signal column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    tag: ColumnTag,
    values: Vec<f64>,
}

impl Column {
    /// Column with an explicit tag.
    pub fn new(name: impl Into<String>, tag: ColumnTag, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            tag,
            values,
        }
    }

    /// Column supplied by the caller, tagged as raw.
    pub fn raw(name: impl Into<String>, values: Vec<f64>) -> Self {
        let name = name.into();
        let tag = ColumnTag::raw(name.clone());
        Self { name, tag, values }
    }

    /// Rendered column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provenance of the column.
    pub fn tag(&self) -> &ColumnTag {
        &self.tag
    }

    /// Column values, NaN where missing.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Base signal name used when composing derived column names.
    ///
    /// Raw columns fall back to the text before the first `_`, which is how
    /// externally assembled tables encode their provenance.
    pub fn base_name(&self) -> &str {
        match self.tag.stage {
            StageKind::Raw => self.name.split('_').next().unwrap_or(&self.name),
            _ => self.tag.source(),
        }
    }
}

/// A table of one time column followed by named numeric signal columns.
///
/// Column order is insertion order. Tables are never modified by the stages;
/// every stage builds a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTable {
    time_label: String,
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
    title: Option<String>,
}

/// Builder for constructing TimeSeriesTable.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesTableBuilder {
    time_label: Option<String>,
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
    title: Option<String>,
}

impl TimeSeriesTableBuilder {
    /// Empty builder; the time label defaults to `t`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the time column.
    pub fn time_label(mut self, label: impl Into<String>) -> Self {
        self.time_label = Some(label.into());
        self
    }

    /// Time index, strictly increasing.
    pub fn timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Append a caller-supplied signal column.
    pub fn signal(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push(Column::raw(name, values));
        self
    }

    /// Append an already tagged column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Human-readable description of the table.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TimeSeriesTable> {
        let time_label = self.time_label.unwrap_or_else(|| "t".to_string());
        let mut table = TimeSeriesTable::new(time_label, self.timestamps, self.columns)?;
        table.title = self.title;
        Ok(table)
    }
}

impl TimeSeriesTable {
    /// Create a table, validating its shape.
    pub fn new(
        time_label: impl Into<String>,
        timestamps: Vec<DateTime<Utc>>,
        columns: Vec<Column>,
    ) -> Result<Self> {
        let time_label = time_label.into();
        if time_label.is_empty() {
            return Err(IndicatorError::InvalidColumnName(
                "time column label must not be empty".to_string(),
            ));
        }

        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(IndicatorError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.len() != timestamps.len() {
                return Err(IndicatorError::DimensionMismatch {
                    expected: timestamps.len(),
                    got: column.len(),
                });
            }
            if column.name() == time_label || !seen.insert(column.name()) {
                return Err(IndicatorError::DuplicateColumn(column.name().to_string()));
            }
        }

        Ok(Self {
            time_label,
            timestamps,
            columns,
            title: None,
        })
    }

    /// Build a table around an existing time index, reusing its label.
    pub(crate) fn derived(
        source: &TimeSeriesTable,
        columns: Vec<Column>,
        title: &str,
    ) -> Result<Self> {
        let mut table = Self::new(
            source.time_label.clone(),
            source.timestamps.clone(),
            columns,
        )?;
        table.title = Some(title.to_string());
        Ok(table)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of signal columns (the time column is not counted).
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Name of the time column.
    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Time index.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Signal columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Signal column names in order.
    pub fn signal_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Column with the given name, if any.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Values of a named column.
    pub fn values(&self, name: &str) -> Result<&[f64]> {
        self.column(name)
            .map(|c| c.values())
            .ok_or_else(|| IndicatorError::ColumnNotFound(name.to_string()))
    }

    /// Description set by the stage that produced the table.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Rows whose timestamp lies in `[start, end]`.
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<TimeSeriesTable> {
        if start > end {
            return Err(IndicatorError::InvalidParameter(
                "start must be <= end".to_string(),
            ));
        }

        let from = self.timestamps.partition_point(|t| *t < start);
        let to = self.timestamps.partition_point(|t| *t <= end);

        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.tag.clone(), c.values[from..to].to_vec()))
            .collect();

        Ok(TimeSeriesTable {
            time_label: self.time_label.clone(),
            timestamps: self.timestamps[from..to].to_vec(),
            columns,
            title: self.title.clone(),
        })
    }
}
