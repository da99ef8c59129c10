use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Fraction of a chord used to seed the provisional control points.
const CONTROL_POINT_RATIO: f64 = 0.3;

/// Control points of the cubic joining `points[i]` to `points[i + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub control1: Point,
    pub control2: Point,
}

/// Computes one [`CurveSegment`] per consecutive point pair.
///
/// Control points start 30% along each chord from either end, so every
/// segment would be a straight line. Each interior point then averages the
/// reflection of its incoming control point with its outgoing one (and vice
/// versa); the two resulting controls are symmetric around the point, which
/// keeps the tangent continuous across segments. The curve always passes
/// through every input point.
#[must_use]
pub fn curve_segments(points: &[Point]) -> Vec<CurveSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments: Vec<CurveSegment> = points
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            CurveSegment {
                control1: a.offset(CONTROL_POINT_RATIO * dx, CONTROL_POINT_RATIO * dy),
                control2: b.offset(-CONTROL_POINT_RATIO * dx, -CONTROL_POINT_RATIO * dy),
            }
        })
        .collect();

    for index in 1..points.len() - 1 {
        let anchor = points[index];
        let incoming = segments[index - 1].control2;
        let outgoing = segments[index].control1;

        segments[index].control1 = incoming.reflect_through(anchor).midpoint(outgoing);
        segments[index - 1].control2 = outgoing.reflect_through(anchor).midpoint(incoming);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::curve_segments;
    use crate::core::Point;

    #[test]
    fn interior_controls_are_symmetric_around_anchor() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 20.0),
            Point::new(100.0, 80.0),
        ];
        let segments = curve_segments(&points);
        assert_eq!(segments.len(), 2);

        let anchor = points[1];
        let left = segments[0].control2;
        let right = segments[1].control1;
        assert!((left.x + right.x - 2.0 * anchor.x).abs() <= 1e-9);
        assert!((left.y + right.y - 2.0 * anchor.y).abs() <= 1e-9);
    }

    #[test]
    fn two_points_keep_straight_controls() {
        let segments = curve_segments(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].control1.x - 3.0).abs() <= 1e-9);
        assert!((segments[0].control1.y - 3.0).abs() <= 1e-9);
        assert!((segments[0].control2.x - 7.0).abs() <= 1e-9);
        assert!((segments[0].control2.y - 7.0).abs() <= 1e-9);
    }
}
