//! Tolerance-based float comparisons and the canonical point order.
//!
//! Two tolerances live here and they are not interchangeable:
//! [`float_eq`] and friends use the absolute [`EPSILON`] for boundary and
//! degeneracy tests inside the kernel, while [`PrecisionKey`] rounds to a
//! fixed number of decimal digits and decides when two independently
//! computed intersections are the same point.

use std::cmp::Ordering;

use super::{Point2, EPSILON};

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
pub fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns `true` if `a < b` or the two are [`float_eq`].
#[must_use]
pub fn float_le(a: f64, b: f64) -> bool {
    float_eq(a, b) || a < b
}

/// Returns `true` if `a > b` or the two are [`float_eq`].
#[must_use]
pub fn float_ge(a: f64, b: f64) -> bool {
    float_eq(a, b) || a > b
}

/// Canonical point order: by `x`, then by `y`, each compared with [`float_eq`]
/// treated as a tie.
#[must_use]
pub fn sort_by_xy(a: &Point2, b: &Point2) -> Ordering {
    if float_eq(a.x, b.x) {
        if float_eq(a.y, b.y) {
            return Ordering::Equal;
        }
        if a.y > b.y {
            return Ordering::Greater;
        }
        return Ordering::Less;
    }
    if a.x > b.x {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Fixed-point decimal rendering of a value.
///
/// The exact binary value is rounded to `digits` decimals, so `3.45` renders
/// as `3.5` and `3.55` as `3.5`. Negative zero renders like zero.
#[must_use]
pub fn to_fixed(value: f64, digits: u32) -> String {
    let text = format!("{:.*}", digits as usize, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_owned(),
        _ => text,
    }
}

/// Returns `true` if `a` and `b` agree when rounded to `digits` decimals.
#[must_use]
pub fn precision_eq(a: f64, b: f64, digits: u32) -> bool {
    to_fixed(a, digits) == to_fixed(b, digits)
}

/// Rounded coordinates of a point, used as the identity of an intersection.
///
/// Equality on keys is exactly [`precision_eq`] on both coordinates, which
/// makes it a true equivalence and safe to hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionKey {
    x: String,
    y: String,
}

impl PrecisionKey {
    /// Builds the key of `point` at `digits` decimals.
    #[must_use]
    pub fn new(point: &Point2, digits: u32) -> Self {
        Self {
            x: to_fixed(point.x, digits),
            y: to_fixed(point.y, digits),
        }
    }
}
