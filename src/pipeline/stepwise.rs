//! Staged indicator computation that keeps every intermediate table.

use crate::core::{IndicatorConfig, TimeSeriesTable};
use crate::error::Result;
use crate::pipeline::{
    DerivativeStage, LogIndicatorStage, MagnitudeStage, RollingAggregateStage, Stage,
};
use tracing::debug;

/// Tables produced by each step of a [`StepwisePipeline`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct StepwiseOutput {
    pub derivative: TimeSeriesTable,
    pub magnitude: TimeSeriesTable,
    pub rolling: TimeSeriesTable,
    pub indicator: TimeSeriesTable,
}

impl StepwiseOutput {
    /// All tables in pipeline order, ready for component selection.
    pub fn tables(&self) -> [&TimeSeriesTable; 4] {
        [
            &self.derivative,
            &self.magnitude,
            &self.rolling,
            &self.indicator,
        ]
    }
}

/// Derivative → magnitude → rolling aggregate → log indicator.
#[derive(Debug, Clone, Default)]
pub struct StepwisePipeline {
    config: IndicatorConfig,
}

impl StepwisePipeline {
    /// Pipeline with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with a validated configuration.
    pub fn with_config(config: IndicatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration shared by the rolling and log steps.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Run every step on `table`.
    ///
    /// Fails with [`IndicatorError::ColumnCollision`] when two signals share a
    /// base name, since their rolling columns would be indistinguishable.
    ///
    /// [`IndicatorError::ColumnCollision`]: crate::error::IndicatorError::ColumnCollision
    pub fn run(&self, table: &TimeSeriesTable) -> Result<StepwiseOutput> {
        let derivative = DerivativeStage::new().apply(table)?;
        let magnitude = MagnitudeStage::new().apply(&derivative)?;
        let rolling = RollingAggregateStage::new(self.config.aggregator)
            .with_windows(self.config.windows.clone())
            .apply(&magnitude)?;
        let indicator =
            LogIndicatorStage::with_zero_floor(self.config.zero_floor)?.apply(&rolling)?;

        debug!(
            aggregator = %self.config.aggregator,
            rows = table.len(),
            signals = table.width(),
            "stepwise pipeline finished"
        );
        Ok(StepwiseOutput {
            derivative,
            magnitude,
            rolling,
            indicator,
        })
    }
}
