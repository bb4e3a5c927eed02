use crate::error::{GeometryError, Result};
use crate::geometry::Transform;
use crate::math::distance_2d::distance;
use crate::math::Point2;

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new segment from `start` to `end`.
    ///
    /// Zero-length segments are allowed; they never intersect anything.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is NaN or infinite.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if !(start.x.is_finite() && start.y.is_finite()) {
            return Err(GeometryError::NonFinite { what: "line start" }.into());
        }
        if !(end.x.is_finite() && end.y.is_finite()) {
            return Err(GeometryError::NonFinite { what: "line end" }.into());
        }
        Ok(Self { start, end })
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Returns the segment with both endpoints mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            start: transform.apply_point(&self.start),
            end: transform.apply_point(&self.end),
        }
    }

    /// Renders the segment as a two-command path, e.g. `M0,0L1,1`.
    #[must_use]
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        self.write_path(&mut out);
        out
    }

    /// Appends the path of this segment to `out`.
    pub fn write_path(&self, out: &mut String) {
        out.push_str(&format!(
            "M{},{}L{},{}",
            coord(self.start.x),
            coord(self.start.y),
            coord(self.end.x),
            coord(self.end.y)
        ));
    }
}

/// Shortest round-trip form, with negative zero printed as `0`.
fn coord(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
