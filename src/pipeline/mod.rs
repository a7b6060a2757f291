//! Indicator pipeline stages.
//!
//! Each stage is a pure function from one [`TimeSeriesTable`] to a new one:
//!
//! raw → [`DerivativeStage`] → [`MagnitudeStage`] → [`RollingAggregateStage`]
//! → [`LogIndicatorStage`]
//!
//! [`CombinedIndicatorPipeline`] runs the same chain with the maximum
//! aggregator in a single pass, and [`ComponentSelector`] gathers one signal's
//! columns from any set of produced tables.
//!
//! [`TimeSeriesTable`]: crate::core::TimeSeriesTable

mod traits;

pub mod combined;
pub mod derivative;
pub mod log_indicator;
pub mod magnitude;
pub mod rolling;
pub mod select;
pub mod stepwise;

pub use combined::CombinedIndicatorPipeline;
pub use derivative::DerivativeStage;
pub use log_indicator::LogIndicatorStage;
pub use magnitude::MagnitudeStage;
pub use rolling::RollingAggregateStage;
pub use select::ComponentSelector;
pub use stepwise::{StepwiseOutput, StepwisePipeline};
pub(crate) use traits::ensure_distinct_outputs;
pub use traits::{apply_all, BoxedStage, Stage};
