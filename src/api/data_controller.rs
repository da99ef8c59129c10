use tracing::debug;

use crate::core::{DataItem, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_chart_config, validate_viewport};
use super::{ChartConfig, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Replaces the series. Takes effect on the next `recompute`.
    pub fn set_series(&mut self, items: Vec<DataItem>) {
        debug!(count = items.len(), "set series");
        self.items = items;
    }

    /// Updates the viewport size. Takes effect on the next `recompute`.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = validate_viewport(Viewport::new(width, height))?;
        debug!(width, height, "set viewport size");
        self.viewport = viewport;
        Ok(())
    }

    /// Replaces the configuration. Takes effect on the next `recompute`.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.config = validate_chart_config(config)?;
        debug!(
            curved = self.config.curved,
            show_last_label = self.config.show_last_label,
            "set chart config"
        );
        Ok(())
    }
}
