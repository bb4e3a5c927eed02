use crate::error::{Result, TileError};
use crate::math::tolerance::float_eq;
use crate::math::Point2;

/// The axis-aligned region a tessellation unit is constructed in.
///
/// `top` is the corner with the smaller coordinates and `bottom` the one
/// with the larger, in screen orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    top_x: f64,
    top_y: f64,
    bottom_x: f64,
    bottom_y: f64,
}

impl Tile {
    /// Creates a tile from its top-left and bottom-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidBounds`] if `top_x > bottom_x` or
    /// `top_y > bottom_y`.
    pub fn new(top_x: f64, top_y: f64, bottom_x: f64, bottom_y: f64) -> Result<Self> {
        if inverted(top_x, bottom_x) {
            return Err(TileError::InvalidBounds {
                axis: 'X',
                top: top_x,
                bottom: bottom_x,
            }
            .into());
        }
        if inverted(top_y, bottom_y) {
            return Err(TileError::InvalidBounds {
                axis: 'Y',
                top: top_y,
                bottom: bottom_y,
            }
            .into());
        }
        Ok(Self {
            top_x,
            top_y,
            bottom_x,
            bottom_y,
        })
    }

    /// The largest square centred in a `width` x `height` area, inset by
    /// `padding` on its shorter side.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidBounds`] if the padding leaves no room.
    pub fn centered(width: f64, height: f64, padding: f64) -> Result<Self> {
        let radius = width.min(height) / 2.0 - padding;
        let (cx, cy) = (width / 2.0, height / 2.0);
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    #[must_use]
    pub fn top_x(&self) -> f64 {
        self.top_x
    }

    #[must_use]
    pub fn top_y(&self) -> f64 {
        self.top_y
    }

    #[must_use]
    pub fn bottom_x(&self) -> f64 {
        self.bottom_x
    }

    #[must_use]
    pub fn bottom_y(&self) -> f64 {
        self.bottom_y
    }

    /// Center of the tile.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.top_x + self.bottom_x) / 2.0,
            (self.top_y + self.bottom_y) / 2.0,
        )
    }

    /// Half the horizontal side length.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.bottom_x - self.top_x) / 2.0
    }

    /// Horizontal side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.bottom_x - self.top_x
    }

    /// Returns `true` if `(x, y)` lies inside or on the boundary, with each
    /// edge widened by the kernel tolerance.
    #[must_use]
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        (x > self.top_x || float_eq(x, self.top_x))
            && (x < self.bottom_x || float_eq(x, self.bottom_x))
            && (y > self.top_y || float_eq(y, self.top_y))
            && (y < self.bottom_y || float_eq(y, self.bottom_y))
    }

    /// Where the infinite line through `a` and `b` crosses the tile boundary.
    ///
    /// Vertical and horizontal lines span the tile directly. Other lines are
    /// intersected with the top, left, bottom and right supporting lines in
    /// that order, keeping crossings that lie on the tile; a crossing that
    /// repeats an earlier one (a corner) counts once. Returns the first two
    /// crossings, or `None` if the line misses the tile or `a` and `b`
    /// coincide.
    #[must_use]
    pub fn clip_line_to_boundary(&self, a: &Point2, b: &Point2) -> Option<(Point2, Point2)> {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        if float_eq(dx, 0.0) && float_eq(dy, 0.0) {
            return None;
        }
        if float_eq(dx, 0.0) {
            if !self.is_inside(a.x, self.top_y) {
                return None;
            }
            return Some((
                Point2::new(a.x, self.top_y),
                Point2::new(a.x, self.bottom_y),
            ));
        }
        if float_eq(dy, 0.0) {
            if !self.is_inside(self.top_x, a.y) {
                return None;
            }
            return Some((
                Point2::new(self.top_x, a.y),
                Point2::new(self.bottom_x, a.y),
            ));
        }

        let slope = dy / dx;
        let intercept = a.y - slope * a.x;
        let candidates = [
            Point2::new((self.top_y - intercept) / slope, self.top_y),
            Point2::new(self.top_x, slope * self.top_x + intercept),
            Point2::new((self.bottom_y - intercept) / slope, self.bottom_y),
            Point2::new(self.bottom_x, slope * self.bottom_x + intercept),
        ];

        let mut found: Vec<Point2> = Vec::with_capacity(2);
        for candidate in candidates {
            if !self.is_inside(candidate.x, candidate.y) {
                continue;
            }
            let repeated = found
                .iter()
                .any(|p| float_eq(p.x, candidate.x) && float_eq(p.y, candidate.y));
            if !repeated {
                found.push(candidate);
            }
            if found.len() == 2 {
                return Some((found[0], found[1]));
            }
        }
        None
    }
}

fn inverted(top: f64, bottom: f64) -> bool {
    top.is_nan() || bottom.is_nan() || top > bottom
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tile_values() {
        let tile = Tile::new(0.0, 0.0, 10.0, 20.0).unwrap();
        assert_relative_eq!(tile.top_x(), 0.0);
        assert_relative_eq!(tile.top_y(), 0.0);
        assert_relative_eq!(tile.bottom_x(), 10.0);
        assert_relative_eq!(tile.bottom_y(), 20.0);
        assert_eq!(tile.center(), Point2::new(5.0, 10.0));
        assert_relative_eq!(tile.radius(), 5.0);
        assert_relative_eq!(tile.side(), 10.0);
    }

    #[test]
    fn inverted_corners_are_rejected() {
        let err = Tile::new(0.0, 10.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "topY:10 is bigger than bottomY:0");
        let err = Tile::new(10.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "topX:10 is bigger than bottomX:0");
        assert!(Tile::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn is_inside_includes_boundary() {
        let tile = Tile::new(0.0, 0.0, 10.0, 20.0).unwrap();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 20.0), (10.0, 20.0), (5.0, 10.0)] {
            assert!(tile.is_inside(x, y), "({x}, {y})");
        }
        assert!(tile.is_inside(5.0, 0.0));
        assert!(tile.is_inside(10.0 + f64::EPSILON, 20.0 - f64::EPSILON));
        assert!(!tile.is_inside(15.0, 15.0));
        assert!(!tile.is_inside(10.0001, 20.0));
        assert!(!tile.is_inside(-1e-7, 5.0));
    }

    #[test]
    fn centered_in_landscape_area() {
        let tile = Tile::centered(400.0, 200.0, 10.0).unwrap();
        assert_relative_eq!(tile.top_x(), 110.0);
        assert_relative_eq!(tile.top_y(), 10.0);
        assert_relative_eq!(tile.bottom_x(), 290.0);
        assert_relative_eq!(tile.bottom_y(), 190.0);
        assert!(Tile::centered(10.0, 10.0, 6.0).is_err());
    }

    #[test]
    fn clip_vertical_line() {
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let clipped = tile.clip_line_to_boundary(&Point2::new(5.0, -100.0), &Point2::new(5.0, 100.0));
        assert_eq!(clipped, Some((Point2::new(5.0, 0.0), Point2::new(5.0, 10.0))));
        assert!(tile
            .clip_line_to_boundary(&Point2::new(11.0, 0.0), &Point2::new(11.0, 1.0))
            .is_none());
    }

    #[test]
    fn clip_horizontal_line() {
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let clipped = tile.clip_line_to_boundary(&Point2::new(3.0, 4.0), &Point2::new(4.0, 4.0));
        assert_eq!(clipped, Some((Point2::new(0.0, 4.0), Point2::new(10.0, 4.0))));
    }

    #[test]
    fn clip_sloped_line() {
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        // y = x / 2 + 1 crosses the left edge at y = 1 and the right edge at y = 6
        let (p, q) = tile
            .clip_line_to_boundary(&Point2::new(2.0, 2.0), &Point2::new(4.0, 3.0))
            .unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn clip_through_corners_counts_each_corner_once() {
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let (p, q) = tile
            .clip_line_to_boundary(&Point2::new(2.0, 2.0), &Point2::new(3.0, 3.0))
            .unwrap();
        assert_eq!(p, Point2::new(0.0, 0.0));
        assert_eq!(q, Point2::new(10.0, 10.0));
    }

    #[test]
    fn clip_misses_tile() {
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(tile
            .clip_line_to_boundary(&Point2::new(20.0, 0.0), &Point2::new(30.0, 5.0))
            .is_none());
        assert!(tile
            .clip_line_to_boundary(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0))
            .is_none());
    }
}
