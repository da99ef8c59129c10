use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataArea, DataItem, Domain};

const SPARSE_FRACTIONS: [f64; 2] = [0.0, 1.0];
const DENSE_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
/// Item count from which the dense fraction set is used.
const DENSE_MIN_ITEMS: usize = 4;
const DASHED_OPACITY: f64 = 0.5;

/// Stroke policy for one horizontal grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLineStyle {
    pub dashed: bool,
    pub opacity: f64,
    pub width: f64,
}

impl GridLineStyle {
    #[must_use]
    pub const fn solid() -> Self {
        Self {
            dashed: false,
            opacity: 1.0,
            width: 1.0,
        }
    }

    #[must_use]
    pub const fn dashed(visible: bool) -> Self {
        Self {
            dashed: true,
            opacity: DASHED_OPACITY,
            width: if visible { 1.0 } else { 0.0 },
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.width > 0.0
    }
}

/// Horizontal tick line at a fixed fraction of the data-area height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Vertical position, `0` at the top and `1` at the bottom.
    pub fraction: f64,
    pub y: f64,
    pub value: i64,
    pub text: String,
    pub style: GridLineStyle,
}

/// Vertical value-axis line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    pub vertical_line: AxisLine,
    pub lines: Vec<GridLine>,
}

/// Tick fractions for a series of `item_count` items.
#[must_use]
pub fn tick_fractions(item_count: usize) -> SmallVec<[f64; 5]> {
    match item_count {
        0 => SmallVec::new(),
        count if count < DENSE_MIN_ITEMS => SmallVec::from_slice(&SPARSE_FRACTIONS),
        _ => SmallVec::from_slice(&DENSE_FRACTIONS),
    }
}

/// Tick value at `fraction`: `domain.max` at the top, `domain.min` at the bottom.
///
/// Values outside the `i64` range saturate at its bounds.
#[must_use]
pub fn tick_value(fraction: f64, domain: Domain) -> i64 {
    let value = ((1.0 - fraction) * domain.span()).round() + domain.min.round();
    value.clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

/// Plans the horizontal tick lines and the vertical axis line.
///
/// The bottom line is always solid. Other lines are dashed at half opacity,
/// with zero width when `grid_lines_visible` is off.
#[must_use]
pub fn plan_grid(
    items: &[DataItem],
    domain: Domain,
    area: DataArea,
    grid_lines_visible: bool,
) -> GridPlan {
    let lines = tick_fractions(items.len())
        .into_iter()
        .map(|fraction| {
            let value = tick_value(fraction, domain);
            let style = if fraction == 1.0 {
                GridLineStyle::solid()
            } else {
                GridLineStyle::dashed(grid_lines_visible)
            };
            GridLine {
                fraction,
                y: fraction * area.height,
                value,
                text: value.to_string(),
                style,
            }
        })
        .collect();

    GridPlan {
        vertical_line: AxisLine {
            x: 0.0,
            top: 0.0,
            bottom: area.height,
        },
        lines,
    }
}
