use crate::error::{GeometryError, Result};
use crate::geometry::Transform;
use crate::math::{Point2, Vector2};

/// A full circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A zero radius is accepted and behaves as a point on other curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is not finite, or the radius
    /// is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeometryError::NonFinite {
                what: "circle center",
            }
            .into());
        }
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "circle radius",
            }
            .into());
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the circle as it appears after `transform`.
    ///
    /// The stored radius is measured along the transformed `(0, r)` vector,
    /// so scaling grows the radius while translation leaves it alone.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        let radius = transform.apply_vector(&Vector2::new(0.0, self.radius)).norm();
        Self {
            center: transform.apply_point(&self.center),
            radius,
        }
    }
}
