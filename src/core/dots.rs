use serde::{Deserialize, Serialize};

use crate::core::{Insets, Point, Rect};

/// Marker boxes for one data point, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotRect {
    pub index: usize,
    pub outer: Rect,
    pub inner: Rect,
}

/// Centers an outer and an inner marker square on every point.
///
/// Points are data-area-local, so the left/top insets are added to place the
/// markers in the parent coordinate space.
#[must_use]
pub fn plan_dots(points: &[Point], outer_radius: f64, inner_radius: f64, insets: Insets) -> Vec<DotRect> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let center = point.offset(insets.left, insets.top);
            DotRect {
                index,
                outer: Rect::centered_square(center, outer_radius),
                inner: Rect::centered_square(center, inner_radius),
            }
        })
        .collect()
}
