//! Core data structures and configuration.

mod config;
mod table;

pub(crate) use config::validate_zero_floor;
pub use config::{Aggregator, IndicatorConfig, WindowSet, DEFAULT_WINDOWS, DEFAULT_ZERO_FLOOR};
pub use table::{Column, ColumnTag, StageKind, TimeSeriesTable, TimeSeriesTableBuilder};
