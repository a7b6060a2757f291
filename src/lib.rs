//! # geo-indicators
//!
//! Indicator functions for geophysical time series.
//!
//! Turns raw time-stamped measurements (radon concentration, inclinometer
//! readings, seismic catalogue series) into smoothed, log-scaled indicator
//! signals used to spot precursory anomalies: a centered derivative against
//! elapsed time, its magnitude, re-centered rolling aggregates over several
//! window widths, and a zero-floor base-10 logarithm.
//!
//! # Example
//!
//! ```
//! use geo_indicators::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
//! let table = TimeSeriesTableBuilder::new()
//!     .time_label("t")
//!     .timestamps((0..50).map(|i| start + Duration::minutes(i)).collect())
//!     .signal("radon", (0..50).map(|i| (i as f64 * 0.3).sin()).collect())
//!     .build()
//!     .unwrap();
//!
//! let full = CombinedIndicatorPipeline::new().apply(&table).unwrap();
//! assert!(full.column("radon_100").is_some());
//! ```

pub mod core;
pub mod error;
pub mod pipeline;
pub mod transform;

pub use error::{IndicatorError, Result};

pub mod prelude {
    pub use crate::core::{
        Aggregator, IndicatorConfig, TimeSeriesTable, TimeSeriesTableBuilder, WindowSet,
    };
    pub use crate::error::{IndicatorError, Result};
    pub use crate::pipeline::{
        CombinedIndicatorPipeline, ComponentSelector, DerivativeStage, LogIndicatorStage,
        MagnitudeStage, RollingAggregateStage, Stage, StepwisePipeline,
    };
}
