//! Numeric kernels used by the pipeline stages.
//!
//! Provides finite differences, rolling windows, and logarithmic rescaling
//! over plain slices.
//!
//! # Example
//!
//! ```
//! use geo_indicators::core::Aggregator;
//! use geo_indicators::transform::{centered_rolling, log10_floored, magnitude};
//!
//! let series = vec![0.0, -2.0, 3.0, 0.0, 1.0];
//!
//! let abs = magnitude(&series);
//! let peaks = centered_rolling(&abs, 2, Aggregator::Max);
//! let indicator = log10_floored(&peaks, 1e-6);
//! assert_eq!(indicator.len(), series.len());
//! ```

pub mod difference;
pub mod log;
pub mod window;

pub use difference::{centered_difference, elapsed_seconds, magnitude};
pub use log::log10_floored;
pub use window::{
    centered_rolling, centering_shift, rolling, rolling_max, rolling_mean, shift_backward,
};
