use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One category sample of the series: an integer value plus its axis label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataItem {
    pub value: i64,
    pub label: String,
}

impl DataItem {
    #[must_use]
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Pixel position local to the data area (origin top-left, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Mirrors `self` through `center`.
    #[must_use]
    pub fn reflect_through(self, center: Point) -> Self {
        Self::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins between the viewport edge and the data area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(left: f64, top: f64, bottom: f64, right: f64) -> Self {
        Self {
            left,
            top,
            bottom,
            right,
        }
    }

    #[must_use]
    pub fn with_right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40.0, 40.0, 40.0, 0.0)
    }
}

/// Size of the inset rectangle where the series and grid are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataArea {
    pub width: f64,
    pub height: f64,
}

impl DataArea {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Subtracts `insets` from `viewport`.
    pub fn from_viewport(viewport: Viewport, insets: Insets) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let area = Self {
            width: f64::from(viewport.width) - insets.left - insets.right,
            height: f64::from(viewport.height) - insets.top - insets.bottom,
        };
        area.validate()?;
        Ok(area)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidDataArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` centered on `center`.
    #[must_use]
    pub fn centered_square(center: Point, side: f64) -> Self {
        Self::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
