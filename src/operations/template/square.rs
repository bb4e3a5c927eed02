use crate::construction::{ConstructionGraph, ElementId};
use crate::error::Result;
use crate::geometry::Tile;
use crate::math::Point2;

/// Lays out the square construction grid on a tile.
///
/// Adds the inscribed circle, the four tile edges, the two mid lines and the
/// two diagonals, in that order.
pub struct SquareTemplate {
    tile: Tile,
}

impl SquareTemplate {
    /// Creates a new `SquareTemplate` operation.
    #[must_use]
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }

    /// Executes the operation and returns the inscribed circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile has non-finite bounds.
    pub fn execute(&self, graph: &mut ConstructionGraph) -> Result<ElementId> {
        let t = &self.tile;
        let (top_x, top_y, bottom_x, bottom_y) = (t.top_x(), t.top_y(), t.bottom_x(), t.bottom_y());
        let radius = t.radius();

        let circle = graph.add_circle(t.center(), radius)?;
        let lines = [
            ((top_x, top_y), (bottom_x, top_y)),
            ((top_x, top_y), (top_x, bottom_y)),
            ((bottom_x, top_y), (bottom_x, bottom_y)),
            ((top_x, bottom_y), (bottom_x, bottom_y)),
            ((top_x + radius, top_y), (top_x + radius, bottom_y)),
            ((top_x, top_y + radius), (bottom_x, top_y + radius)),
            ((top_x, top_y), (bottom_x, bottom_y)),
            ((bottom_x, top_y), (top_x, bottom_y)),
        ];
        for ((x1, y1), (x2, y2)) in lines {
            graph.add_line(Point2::new(x1, y1), Point2::new(x2, y2))?;
        }
        tracing::debug!(points = graph.point_count(), "square template laid out");
        Ok(circle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn square_grid_points() {
        let mut graph = ConstructionGraph::new();
        let tile = Tile::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let circle = SquareTemplate::new(tile).execute(&mut graph).unwrap();

        assert_eq!(graph.element_count(), 9);
        // corners, edge midpoints, center and four diagonal crossings
        assert_eq!(graph.point_count(), 13);
        assert_eq!(graph.element(circle).unwrap().points().len(), 8);

        let center = graph.find_point(&Point2::new(5.0, 5.0)).unwrap();
        // both mid lines and both diagonals
        assert_eq!(graph.point(center).unwrap().touching().len(), 4);
        let corner = graph.find_point(&Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.point(corner).unwrap().touching().len(), 3);

        let tangent = graph.intersection_point_at(circle, 0).unwrap();
        assert_eq!(*graph.point(tangent).unwrap().position(), Point2::new(0.0, 5.0));
    }
}
