//! Configuration shared by the rolling and logarithmic stages.

use crate::error::{IndicatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default window widths applied when the caller does not supply any.
pub const DEFAULT_WINDOWS: [usize; 3] = [10, 100, 1000];

/// Default value substituted for exact zeros before taking a logarithm.
pub const DEFAULT_ZERO_FLOOR: f64 = 1e-6;

/// Aggregation applied inside each rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    /// Largest valid value in the window.
    Max,
    /// Arithmetic mean of the valid values in the window.
    #[default]
    Mean,
}

impl Aggregator {
    /// Tag rendered between the base name and the window width.
    pub fn tag(&self) -> &'static str {
        match self {
            Aggregator::Max => "max",
            Aggregator::Mean => "w",
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregator::Max => write!(f, "max"),
            Aggregator::Mean => write!(f, "mean"),
        }
    }
}

/// Ordered, non-empty set of positive rolling window widths.
///
/// Later stages recover the width of a column from its tag, so the same set
/// must be used across stages that are meant to compose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct WindowSet(Vec<usize>);

impl WindowSet {
    /// Create a window set, rejecting empty sets, zero widths and repeats.
    pub fn new(widths: Vec<usize>) -> Result<Self> {
        if widths.is_empty() {
            return Err(IndicatorError::InvalidParameter(
                "window set must not be empty".to_string(),
            ));
        }
        if widths.contains(&0) {
            return Err(IndicatorError::InvalidParameter(
                "window width must be positive".to_string(),
            ));
        }
        for (i, w) in widths.iter().enumerate() {
            if widths[..i].contains(w) {
                return Err(IndicatorError::InvalidParameter(format!(
                    "window width {} appears more than once",
                    w
                )));
            }
        }
        Ok(Self(widths))
    }

    /// Widths in the order they were given.
    pub fn widths(&self) -> &[usize] {
        &self.0
    }

    /// Number of widths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the widths in order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WindowSet {
    fn default() -> Self {
        Self(DEFAULT_WINDOWS.to_vec())
    }
}

impl TryFrom<Vec<usize>> for WindowSet {
    type Error = IndicatorError;

    fn try_from(widths: Vec<usize>) -> Result<Self> {
        Self::new(widths)
    }
}

impl From<WindowSet> for Vec<usize> {
    fn from(set: WindowSet) -> Self {
        set.0
    }
}

/// Configuration for the rolling and indicator stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub windows: WindowSet,
    pub aggregator: Aggregator,
    pub zero_floor: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            windows: WindowSet::default(),
            aggregator: Aggregator::default(),
            zero_floor: DEFAULT_ZERO_FLOOR,
        }
    }
}

impl IndicatorConfig {
    /// Configuration with the default windows, mean aggregator and zero floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the window widths.
    pub fn with_windows(mut self, windows: WindowSet) -> Self {
        self.windows = windows;
        self
    }

    /// Replace the rolling aggregator.
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Replace the value substituted for exact zeros.
    ///
    /// Checked by [`validate`](Self::validate), not here.
    pub fn with_zero_floor(mut self, zero_floor: f64) -> Self {
        self.zero_floor = zero_floor;
        self
    }

    /// Check that the configuration can be used by the stages.
    pub fn validate(&self) -> Result<()> {
        validate_zero_floor(self.zero_floor)
    }
}

pub(crate) fn validate_zero_floor(zero_floor: f64) -> Result<()> {
    if !zero_floor.is_finite() || zero_floor <= 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "zero floor must be finite and positive, got {}",
            zero_floor
        )));
    }
    Ok(())
}
