use serde::{Deserialize, Serialize};

use crate::core::{PathSpec, Point, Rect};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed,
}

/// Draw command for one line segment in viewport pixels.
///
/// A zero `stroke_width` is legal and means the line is laid out but not
/// painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub opacity: f64,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width: 1.0,
            opacity: 1.0,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke_width: f64, opacity: f64, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_width = stroke_width;
        self.opacity = opacity;
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectRole {
    DotOuter,
    DotInner,
    HighlightDot,
}

/// Draw command for one filled box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub role: RectRole,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: Rect, role: RectRole) -> Self {
        Self { rect, role }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.rect.is_finite() || self.rect.width < 0.0 || self.rect.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect must be finite with non-negative size".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment inside `TextPrimitive::rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Center,
    Right,
}

/// Draw command for one label in viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub rect: Rect,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, rect: Rect, h_align: TextHAlign) -> Self {
        Self {
            text: text.into(),
            rect,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.rect.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathRole {
    /// Stroke of the series line.
    Series,
    /// Closed clip region for the gradient fill.
    GradientMask,
}

/// Draw command for a data-area path; `origin` is the data-area top-left in
/// viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub path: PathSpec,
    pub origin: Point,
    pub role: PathRole,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(path: PathSpec, origin: Point, role: PathRole) -> Self {
        Self { path, origin, role }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.path.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive must not be empty".to_owned(),
            ));
        }
        if !self.origin.is_finite() || !self.path.is_finite() {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if self.role == PathRole::GradientMask && !self.path.is_closed() {
            return Err(ChartError::InvalidData(
                "gradient mask path must be closed".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_opacity(opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}
