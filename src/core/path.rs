use serde::{Deserialize, Serialize};

use crate::core::{Point, curve_segments};

/// One drawing operation of a [`PathSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for [`PathCommand::Close`].
    #[must_use]
    pub fn end_point(self) -> Option<Point> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::CubicTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point.is_finite(),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
            Self::Close => true,
        }
    }
}

/// Backend-agnostic vector path in data-area-local pixels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathSpec {
    pub commands: Vec<PathCommand>,
}

impl PathSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// End points of every command, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| command.end_point())
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| command.is_finite())
    }
}

/// Builds the series stroke path through `points`.
///
/// Linear mode joins consecutive points with straight segments; curved mode
/// uses [`curve_segments`] and still passes exactly through each point.
/// Returns `None` below two points.
#[must_use]
pub fn build_series_path(points: &[Point], curved: bool) -> Option<PathSpec> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut path = PathSpec::new();
    path.move_to(*first);
    if curved {
        for (segment, to) in curve_segments(points).into_iter().zip(rest) {
            path.cubic_to(segment.control1, segment.control2, *to);
        }
    } else {
        for point in rest {
            path.line_to(*point);
        }
    }
    Some(path)
}

/// Builds the closed fill region under `series_path`.
///
/// The region drops from the first point to the data-area bottom, follows the
/// series path, drops from the last point to the bottom and closes.
#[must_use]
pub fn build_mask_path(points: &[Point], series_path: &PathSpec, area_height: f64) -> Option<PathSpec> {
    let first = *points.first()?;
    let last = *points.last()?;
    if series_path.is_empty() {
        return None;
    }

    let mut mask = PathSpec::new();
    mask.move_to(Point::new(first.x, area_height));
    mask.line_to(first);
    mask.commands.extend(
        series_path
            .commands
            .iter()
            .copied()
            .filter(|command| !matches!(command, PathCommand::MoveTo(_) | PathCommand::Close)),
    );
    mask.line_to(Point::new(last.x, area_height));
    mask.close();
    Some(mask)
}
