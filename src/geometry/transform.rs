use crate::math::{Matrix3, Point2, Vector2};

/// A 2D affine transform stored as a homogeneous 3x3 matrix.
///
/// Construction elements keep their original parameters together with the
/// transform they went through; the geometry they actually occupy is the
/// original mapped through this transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The transform that leaves every point in place.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_array([1.0, 0.0, 0.0, 1.0, dx, dy])
    }

    /// Counter-clockwise rotation by `angle` radians around `about`.
    #[must_use]
    pub fn rotation(angle: f64, about: Point2) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::translation(-about.x, -about.y)
            .then(&Self::from_array([cos, sin, -sin, cos, 0.0, 0.0]))
            .then(&Self::translation(about.x, about.y))
    }

    /// Scaling by `(sx, sy)` around `about`.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64, about: Point2) -> Self {
        Self::translation(-about.x, -about.y)
            .then(&Self::from_array([sx, 0.0, 0.0, sy, 0.0, 0.0]))
            .then(&Self::translation(about.x, about.y))
    }

    /// Builds a transform from SVG matrix order `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn from_array([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self {
            matrix: Matrix3::new(a, c, e, b, d, f, 0.0, 0.0, 1.0),
        }
    }

    /// Returns the transform in SVG matrix order `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        let m = &self.matrix;
        [m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)]]
    }

    /// Returns the transform that applies `self` first and `next` after it.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Maps a point (translation included).
    #[must_use]
    pub fn apply_point(&self, point: &Point2) -> Point2 {
        let v = self.matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// Maps a direction (translation ignored).
    #[must_use]
    pub fn apply_vector(&self, dir: &Vector2) -> Vector2 {
        let v = self.matrix * nalgebra::Vector3::new(dir.x, dir.y, 0.0);
        Vector2::new(v.x, v.y)
    }

    /// Returns `true` if this is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn array_round_trip() {
        let arr = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(Transform::from_array(arr).to_array(), arr);
        assert_eq!(Transform::identity().to_array(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_about_point() {
        let t = Transform::rotation(FRAC_PI_2, Point2::new(1.0, 1.0));
        let p = t.apply_point(&Point2::new(2.0, 1.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn then_applies_in_order() {
        let t = Transform::translation(1.0, 0.0).then(&Transform::scaling(2.0, 2.0, Point2::origin()));
        assert_eq!(t.apply_point(&Point2::new(1.0, 1.0)), Point2::new(4.0, 2.0));
    }

    #[test]
    fn vectors_ignore_translation() {
        let t = Transform::translation(7.0, -3.0);
        assert_eq!(t.apply_vector(&Vector2::new(0.0, 5.0)), Vector2::new(0.0, 5.0));
        assert!(!t.is_identity());
        assert!(Transform::default().is_identity());
    }
}
