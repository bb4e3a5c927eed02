use super::distance_2d::{distance, point_on_segment};
use super::tolerance::{float_eq, float_ge, float_le};
use super::Point2;
use crate::error::{GeometryError, Result};

/// Intersection points of two full circles.
///
/// Solves with the radical-line formula: the weighted midpoint of the two
/// centers, offset along the perpendicular by a discriminant term. Returns
/// no points when the circles are apart, nested, or concentric, and a single
/// point when they are tangent.
#[must_use]
pub fn circle_circle_intersect_2d(
    x1: f64,
    y1: f64,
    r1: f64,
    x2: f64,
    y2: f64,
    r2: f64,
) -> Vec<Point2> {
    let big_r_sq = (x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1);
    if float_eq(big_r_sq.sqrt(), 0.0) {
        // Concentric: no crossing, or infinitely many for equal radii.
        return Vec::new();
    }

    let r1r2_minus = r1 * r1 - r2 * r2;
    let r1r2_plus = r1 * r1 + r2 * r2;

    let mut discriminant = 2.0 * r1r2_plus / big_r_sq
        - r1r2_minus * r1r2_minus / (big_r_sq * big_r_sq)
        - 1.0;
    if float_eq(discriminant, 0.0) {
        discriminant = 0.0;
    } else if discriminant < 0.0 {
        return Vec::new();
    }

    let along = r1r2_minus / (2.0 * big_r_sq);
    let across = 0.5 * discriminant.sqrt();

    let mid_x = 0.5 * (x1 + x2) + along * (x2 - x1);
    let mid_y = 0.5 * (y1 + y2) + along * (y2 - y1);

    let first = Point2::new(mid_x + across * (y2 - y1), mid_y + across * (x1 - x2));
    let second = Point2::new(mid_x - across * (y2 - y1), mid_y - across * (x1 - x2));

    let mut points = Vec::with_capacity(2);
    if is_finite(&first) {
        points.push(first);
    }
    if is_finite(&second) && first != second {
        points.push(second);
    }
    points
}

/// Intersection points of the closed segment `(lx1, ly1)`-`(lx2, ly2)` with a
/// full circle.
///
/// Projects the center onto the supporting line; a projection at distance
/// `r` is a tangency (one point), closer than `r` gives up to two points.
/// Only points whose segment parameter lies in `[0, 1]` (with tolerance)
/// are kept. A zero-length segment never intersects.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn segment_circle_intersect_2d(
    lx1: f64,
    ly1: f64,
    lx2: f64,
    ly2: f64,
    cx: f64,
    cy: f64,
    r: f64,
) -> Vec<Point2> {
    let mut points = Vec::new();
    let dx = lx2 - lx1;
    let dy = ly2 - ly1;
    if float_eq(dx, 0.0) && float_eq(dy, 0.0) {
        return points;
    }

    let len_sq = dx * dx + dy * dy;
    let t = ((cx - lx1) * dx + (cy - ly1) * dy) / len_sq;

    let nearest_x = lx1 + t * dx;
    let nearest_y = ly1 + t * dy;

    let dist = distance(nearest_x, nearest_y, cx, cy);
    if float_eq(dist, r) {
        if in_unit_range(t) {
            points.push(Point2::new(nearest_x, nearest_y));
        }
        return points;
    } else if dist > r {
        return points;
    }

    let dt = (r * r - dist * dist).sqrt() / len_sq.sqrt();
    for t in [t - dt, t + dt] {
        if in_unit_range(t) {
            points.push(Point2::new(lx1 + t * dx, ly1 + t * dy));
        }
    }
    points
}

/// Intersection of the closed segments `a` and `b`.
///
/// Each segment's supporting line must separate (or touch) the other
/// segment's endpoints before the 2x2 system is solved. Collinear segments
/// only yield a point when they meet in exactly one point: a zero-length
/// segment lying on the other, or two segments touching end to end.
/// Overlapping runs are not reported.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn segment_segment_intersect_2d(
    ax1: f64,
    ay1: f64,
    ax2: f64,
    ay2: f64,
    bx1: f64,
    by1: f64,
    bx2: f64,
    by2: f64,
) -> Vec<Point2> {
    let m1 = ay2 - ay1;
    let m2 = ax1 - ax2;
    let m3 = ax2 * ay1 - ax1 * ay2;
    let m4 = m1 * bx1 + m2 * by1 + m3;
    let m5 = m1 * bx2 + m2 * by2 + m3;
    if m4 * m5 > 0.0 {
        return Vec::new();
    }

    let j1 = by2 - by1;
    let j2 = bx1 - bx2;
    let j3 = bx2 * by1 - bx1 * by2;
    let j4 = j1 * ax1 + j2 * ay1 + j3;
    let j5 = j1 * ax2 + j2 * ay2 + j3;
    if j4 * j5 > 0.0 {
        return Vec::new();
    }

    let det = m1 * j2 - j1 * m2;
    if float_eq(det, 0.0) {
        return collinear_contact(ax1, ay1, ax2, ay2, bx1, by1, bx2, by2);
    }

    let x = (m2 * j3 - j2 * m3) / det;
    let y = (j1 * m3 - m1 * j3) / det;
    vec![Point2::new(x, y)]
}

/// Single contact point of two collinear segments, if there is exactly one.
#[allow(clippy::too_many_arguments)]
fn collinear_contact(
    ax1: f64,
    ay1: f64,
    ax2: f64,
    ay2: f64,
    bx1: f64,
    by1: f64,
    bx2: f64,
    by2: f64,
) -> Vec<Point2> {
    let a_degenerate = float_eq(ax1 - ax2, 0.0) && float_eq(ay1 - ay2, 0.0);
    let b_degenerate = float_eq(bx1 - bx2, 0.0) && float_eq(by1 - by2, 0.0);
    if a_degenerate {
        return point_contact(ax1, ay1, bx1, by1, bx2, by2);
    }
    if b_degenerate {
        return point_contact(bx1, by1, ax1, ay1, ax2, ay2);
    }

    // Parameters of b's endpoints along a.
    let dx = ax2 - ax1;
    let dy = ay2 - ay1;
    let len_sq = dx * dx + dy * dy;
    let t1 = ((bx1 - ax1) * dx + (by1 - ay1) * dy) / len_sq;
    let t2 = ((bx2 - ax1) * dx + (by2 - ay1) * dy) / len_sq;
    let lo = t1.min(t2).max(0.0);
    let hi = t1.max(t2).min(1.0);
    if !float_eq(lo, hi) {
        return Vec::new();
    }
    if float_eq(lo, 0.0) {
        vec![Point2::new(ax1, ay1)]
    } else {
        vec![Point2::new(ax2, ay2)]
    }
}

fn point_contact(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<Point2> {
    if point_on_segment(px, py, x1, y1, x2, y2) {
        vec![Point2::new(px, py)]
    } else {
        Vec::new()
    }
}

fn in_unit_range(t: f64) -> bool {
    float_ge(t, 0.0) && float_le(t, 1.0)
}

fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Kernel intersection routines addressable by name, for callers holding
/// untyped coordinate lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelOp {
    /// `x1, y1, r1, x2, y2, r2`
    CircleCircle,
    /// `lx1, ly1, lx2, ly2, cx, cy, r`
    SegmentCircle,
    /// `ax1, ay1, ax2, ay2, bx1, by1, bx2, by2`
    SegmentSegment,
}

impl KernelOp {
    /// Number of scalar arguments the routine takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::CircleCircle => 6,
            Self::SegmentCircle => 7,
            Self::SegmentSegment => 8,
        }
    }

    /// Name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CircleCircle => "circle-circle intersection",
            Self::SegmentCircle => "segment-circle intersection",
            Self::SegmentSegment => "segment-segment intersection",
        }
    }
}

/// Runs `op` on a flat argument list.
///
/// # Errors
///
/// Returns [`GeometryError::Arity`] if `args` does not hold exactly
/// [`KernelOp::arity`] values. Nothing is computed in that case.
pub fn intersect_raw(op: KernelOp, args: &[f64]) -> Result<Vec<Point2>> {
    let points = match (op, args) {
        (KernelOp::CircleCircle, &[x1, y1, r1, x2, y2, r2]) => {
            circle_circle_intersect_2d(x1, y1, r1, x2, y2, r2)
        }
        (KernelOp::SegmentCircle, &[lx1, ly1, lx2, ly2, cx, cy, r]) => {
            segment_circle_intersect_2d(lx1, ly1, lx2, ly2, cx, cy, r)
        }
        (KernelOp::SegmentSegment, &[ax1, ay1, ax2, ay2, bx1, by1, bx2, by2]) => {
            segment_segment_intersect_2d(ax1, ay1, ax2, ay2, bx1, by1, bx2, by2)
        }
        _ => {
            return Err(GeometryError::Arity {
                op: op.name(),
                expected: op.arity(),
                got: args.len(),
            }
            .into())
        }
    };
    Ok(points)
}
