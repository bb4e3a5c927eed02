use std::collections::HashSet;

use crate::math::intersect_2d::{
    circle_circle_intersect_2d, segment_circle_intersect_2d, segment_segment_intersect_2d,
};
use crate::math::tolerance::{sort_by_xy, PrecisionKey};
use crate::math::Point2;

use super::curve::{Circle, Line};
use super::Transform;

/// A primitive tracked for intersections by the construction graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstructionElement {
    /// A straight segment.
    Line(Line),
    /// A full circle.
    Circle(Circle),
}

impl ConstructionElement {
    /// Name of the element kind, as used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
        }
    }

    /// Returns `true` if every parameter is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Line(line) => {
                [line.start().x, line.start().y, line.end().x, line.end().y]
                    .iter()
                    .all(|v| v.is_finite())
            }
            Self::Circle(circle) => {
                [circle.center().x, circle.center().y, circle.radius()]
                    .iter()
                    .all(|v| v.is_finite())
            }
        }
    }

    /// Returns the element mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.transformed(transform)),
            Self::Circle(circle) => Self::Circle(circle.transformed(transform)),
        }
    }

    /// Computes the pivots where `self` and `other` meet.
    ///
    /// Results that agree at `precision` decimals are reported once, and the
    /// list comes back in canonical order.
    #[must_use]
    pub fn pivots(&self, other: &Self, precision: u32) -> Vec<Point2> {
        let raw = match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => circle_circle_intersect_2d(
                a.center().x,
                a.center().y,
                a.radius(),
                b.center().x,
                b.center().y,
                b.radius(),
            ),
            (Self::Line(l), Self::Circle(c)) | (Self::Circle(c), Self::Line(l)) => {
                segment_circle_intersect_2d(
                    l.start().x,
                    l.start().y,
                    l.end().x,
                    l.end().y,
                    c.center().x,
                    c.center().y,
                    c.radius(),
                )
            }
            (Self::Line(a), Self::Line(b)) => segment_segment_intersect_2d(
                a.start().x,
                a.start().y,
                a.end().x,
                a.end().y,
                b.start().x,
                b.start().y,
                b.end().x,
                b.end().y,
            ),
        };

        let mut seen = HashSet::with_capacity(raw.len());
        let mut pivots: Vec<Point2> = raw
            .into_iter()
            .filter(|p| seen.insert(PrecisionKey::new(p, precision)))
            .collect();
        pivots.sort_by(sort_by_xy);
        pivots
    }
}

impl From<Line> for ConstructionElement {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for ConstructionElement {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_PRECISION;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ConstructionElement {
        Line::new(Point2::new(x1, y1), Point2::new(x2, y2)).unwrap().into()
    }

    fn circle(x: f64, y: f64, r: f64) -> ConstructionElement {
        Circle::new(Point2::new(x, y), r).unwrap().into()
    }

    #[test]
    fn pivots_are_sorted() {
        let a = circle(0.0, 0.0, 5.0);
        let b = circle(8.0, 0.0, 5.0);
        let pivots = a.pivots(&b, DEFAULT_PRECISION);
        assert_eq!(pivots.len(), 2);
        assert!(pivots[0].y < pivots[1].y);
    }

    #[test]
    fn circle_line_dispatch_is_order_free() {
        let c = circle(5.0, 5.0, 5.0);
        let l = line(0.0, 5.0, 10.0, 5.0);
        assert_eq!(c.pivots(&l, DEFAULT_PRECISION), l.pivots(&c, DEFAULT_PRECISION));
        assert_eq!(
            l.pivots(&c, DEFAULT_PRECISION),
            vec![Point2::new(0.0, 5.0), Point2::new(10.0, 5.0)]
        );
    }

    #[test]
    fn nearly_tangent_pair_collapses_at_precision() {
        // Two crossings 0.02 apart fall into the same rounded cell.
        let c = circle(0.0, 0.0, 10.0);
        let l = line(-1.0, 9.999_995, 1.0, 9.999_995);
        assert_eq!(c.pivots(&l, DEFAULT_PRECISION).len(), 1);
        assert_eq!(c.pivots(&l, 6).len(), 2);
    }

    #[test]
    fn kind_names() {
        assert_eq!(line(0.0, 0.0, 1.0, 1.0).kind(), "line");
        assert_eq!(circle(0.0, 0.0, 1.0).kind(), "circle");
    }
}
