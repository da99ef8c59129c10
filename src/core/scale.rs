use serde::{Deserialize, Serialize};

use crate::core::DataItem;
use crate::error::{ChartError, ChartResult};

/// Step the rounded-top axis snaps to.
const ROUNDING_STEP: i64 = 100;
/// Headroom applied above the data range in min/max mode.
const MIN_MAX_HEADROOM: f64 = 1.10;
/// Span substituted when every value is identical.
const MIN_SPAN: f64 = 1.0;

/// How a [`Domain`] was derived from the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Zero-based axis whose top is a multiple of 100 above the maximum.
    RoundedTop,
    /// Tight `min..max` fit with 10% headroom.
    MinMax,
}

/// Value range mapped onto the full data-area height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub mode: ScaleMode,
}

impl Domain {
    pub fn new(min: f64, max: f64, mode: ScaleMode) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ChartError::InvalidData(
                "domain must be finite with max > min".to_owned(),
            ));
        }
        Ok(Self { min, max, mode })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Normalized position of `value` in the domain (`0` at min, `1` at max).
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Resolves the value-axis domain for `items`.
///
/// Returns `None` for an empty series. Series without negative values get a
/// zero-based [`ScaleMode::RoundedTop`] axis unless the rounded top does not
/// fit in `i64`; anything else falls back to [`ScaleMode::MinMax`].
#[must_use]
pub fn resolve_domain(items: &[DataItem]) -> Option<Domain> {
    let min_value = items.iter().map(|item| item.value).min()?;
    let max_value = items.iter().map(|item| item.value).max()?;

    let top = if min_value >= 0 {
        rounded_top(max_value)
    } else {
        None
    };
    if let Some(top) = top {
        return Some(Domain {
            min: 0.0,
            max: top as f64,
            mode: ScaleMode::RoundedTop,
        });
    }

    let min = min_value as f64;
    let mut range = (max_value as f64 - min) * MIN_MAX_HEADROOM;
    if range <= 0.0 {
        range = MIN_SPAN;
    }
    // at |min| near 2^63 one unit is below f64 resolution
    range = range.max(min.abs() * f64::EPSILON * 2.0);
    Some(Domain {
        min,
        max: min + range,
        mode: ScaleMode::MinMax,
    })
}

/// Top bound for the rounded-top axis. Always a multiple of 100 and strictly
/// above `max_value` for non-negative input.
///
/// Returns `None` when the top would overflow `i64`.
#[must_use]
pub fn rounded_top(max_value: i64) -> Option<i64> {
    let mut base = max_value.div_euclid(ROUNDING_STEP) * ROUNDING_STEP;
    if max_value - base > ROUNDING_STEP / 2 {
        base = base.checked_add(ROUNDING_STEP)?;
    }
    let headroom = if base < max_value {
        2 * ROUNDING_STEP
    } else {
        ROUNDING_STEP
    };
    base.checked_add(headroom)
}
