use crate::core::{DataArea, DataItem, Domain, Point};
use crate::error::{ChartError, ChartResult};

/// Horizontal distance between consecutive points.
///
/// Returns `None` below two items, where no gap exists.
#[must_use]
pub fn line_gap(area_width: f64, item_count: usize) -> Option<f64> {
    if item_count < 2 {
        return None;
    }
    Some(area_width / (item_count - 1) as f64)
}

/// Maps every item to a data-area-local pixel position.
///
/// Output is index-aligned with `items`. Series shorter than two items map to
/// an empty vector since no line gap can be derived.
pub fn map_points(items: &[DataItem], domain: Domain, area: DataArea) -> ChartResult<Vec<Point>> {
    area.validate()?;
    if !domain.min.is_finite() || !domain.max.is_finite() || domain.span() <= 0.0 {
        return Err(ChartError::InvalidData(
            "domain must be finite with max > min".to_owned(),
        ));
    }

    let Some(gap) = line_gap(area.width, items.len()) else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| Point {
            x: index as f64 * gap,
            y: value_to_y(item.value as f64, domain, area.height),
        })
        .collect())
}

/// Vertical pixel for `value`; `domain.max` maps to `0`, `domain.min` to `height`.
#[must_use]
pub fn value_to_y(value: f64, domain: Domain, height: f64) -> f64 {
    height * (1.0 - domain.normalize(value))
}
