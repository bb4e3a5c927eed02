use super::tolerance::float_eq;

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x1 - x2) * (x1 - x2) + (y1 - y2) * (y1 - y2)).sqrt()
}

/// Returns `true` if `(px, py)` lies on the closed segment `(x1, y1)`-`(x2, y2)`.
///
/// The point is on the segment when its distances to both ends add up to the
/// segment length.
#[must_use]
pub fn point_on_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    float_eq(
        distance(x1, y1, x2, y2),
        distance(px, py, x1, y1) + distance(px, py, x2, y2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_values() {
        assert_relative_eq!(distance(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_relative_eq!(distance(0.0, 1.0, 1.0, 1.0), 1.0);
        assert_relative_eq!(
            distance(3.456_77, -1.23, 7.8888, 9.0),
            11.148_802_174_265_18,
            max_relative = 1e-14
        );
        assert!(distance(0.0, f64::NAN, 0.0, 0.0).is_nan());
    }

    #[test]
    fn point_on_segment_interior_and_ends() {
        assert!(point_on_segment(5.0, 0.0, 0.0, 0.0, 10.0, 0.0));
        assert!(point_on_segment(0.0, 0.0, 0.0, 0.0, 10.0, 0.0));
        assert!(point_on_segment(10.0, 0.0, 0.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn point_off_segment() {
        assert!(!point_on_segment(11.0, 0.0, 0.0, 0.0, 10.0, 0.0));
        assert!(!point_on_segment(5.0, 0.1, 0.0, 0.0, 10.0, 0.0));
    }
}
