use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DataArea, DataItem, Domain, DotRect, GridPlan, Insets, LabelPlan, LabelSlot, PathSpec, Point,
    Viewport, build_mask_path, build_series_path, layout_labels, line_gap, map_points, plan_dots,
    plan_grid, plan_labels, resolve_domain,
};
use crate::error::ChartResult;

use super::ChartConfig;

/// Geometry computed by one layout pass.
///
/// `items` is the series the pass was computed from, so hit tests always
/// resolve indices against the same data the points came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub items: Vec<DataItem>,
    pub insets: Insets,
    pub data_area: DataArea,
    pub domain: Domain,
    pub line_gap: Option<f64>,
    pub points: Vec<Point>,
    pub series_path: Option<PathSpec>,
    pub mask_path: Option<PathSpec>,
    pub grid: GridPlan,
    pub label_plan: LabelPlan,
    pub labels: Vec<LabelSlot>,
    pub dots: Vec<DotRect>,
}

impl ChartLayout {
    /// Data-area top-left in viewport pixels.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.insets.left, self.insets.top)
    }
}

/// Runs every layout stage for `items`.
///
/// Returns `Ok(None)` for an empty series. Series shorter than two items still
/// get a grid and labels but no points, paths or dots.
pub(super) fn resolve_chart_layout(
    items: &[DataItem],
    viewport: Viewport,
    config: &ChartConfig,
) -> ChartResult<Option<ChartLayout>> {
    let Some(domain) = resolve_domain(items) else {
        return Ok(None);
    };

    let insets = config.effective_insets();
    let data_area = DataArea::from_viewport(viewport, insets)?;
    let points = map_points(items, domain, data_area)?;

    let series_path = build_series_path(&points, config.curved);
    let mask_path = if config.gradient {
        series_path
            .as_ref()
            .and_then(|path| build_mask_path(&points, path, data_area.height))
    } else {
        None
    };

    let grid = plan_grid(items, domain, data_area, config.grid_lines_visible);
    let label_plan = plan_labels(
        items.len(),
        data_area.width,
        config.min_label_width,
        config.show_last_label,
    );
    let labels = layout_labels(&label_plan, items, data_area, insets);
    let dots = if config.show_dots {
        plan_dots(
            &points,
            config.dot_outer_radius,
            config.dot_inner_radius,
            insets,
        )
    } else {
        Vec::new()
    };

    debug!(
        items = items.len(),
        points = points.len(),
        domain_min = domain.min,
        domain_max = domain.max,
        grid_lines = grid.lines.len(),
        labels = labels.len(),
        dots = dots.len(),
        "resolved chart layout"
    );

    Ok(Some(ChartLayout {
        items: items.to_vec(),
        insets,
        data_area,
        domain,
        line_gap: line_gap(data_area.width, items.len()),
        points,
        series_path,
        mask_path,
        grid,
        label_plan,
        labels,
        dots,
    }))
}
