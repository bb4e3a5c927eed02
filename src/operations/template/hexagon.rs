use crate::construction::{ConstructionGraph, ElementId};
use crate::error::Result;
use crate::geometry::Tile;
use crate::math::Point2;

/// Elements of a hexagon template that patterns are usually built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagonFrame {
    /// The circle inscribed in the tile.
    pub circle: ElementId,
    /// The horizontal mid line.
    pub horizontal: ElementId,
    /// Sides of the inscribed hexagon: left, upper left, lower left, lower
    /// right, right and upper right, in screen coordinates.
    pub sides: [ElementId; 6],
}

/// Diameters joining opposite points of the twelve-fold division.
const DIAMETERS: [(usize, usize); 4] = [(1, 10), (2, 9), (3, 8), (4, 7)];

/// Hexagon sides as pairs of indices into the inscribed circle's points.
const SIDES: [(usize, usize); 6] = [(1, 2), (1, 5), (2, 6), (6, 10), (10, 9), (5, 9)];

/// Lays out the hexagonal construction on a tile.
///
/// The inscribed circle is divided into twelve equal arcs by the two mid
/// lines and four circles of the same radius centred on the edge midpoints.
/// Diameters and hexagon sides then join the division points, picked by
/// their canonical index on the inscribed circle.
pub struct HexagonTemplate {
    tile: Tile,
}

impl HexagonTemplate {
    /// Creates a new `HexagonTemplate` operation.
    #[must_use]
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstructionError::OutOfRange`] if the
    /// inscribed circle ends up with too few points, as on a degenerate tile.
    pub fn execute(&self, graph: &mut ConstructionGraph) -> Result<HexagonFrame> {
        let t = &self.tile;
        let (top_x, top_y, bottom_x, bottom_y) = (t.top_x(), t.top_y(), t.bottom_x(), t.bottom_y());
        let radius = t.radius();

        let circle = graph.add_circle(t.center(), radius)?;
        graph.add_line(
            Point2::new(top_x + radius, top_y),
            Point2::new(top_x + radius, bottom_y),
        )?;
        let horizontal = graph.add_line(
            Point2::new(top_x, top_y + radius),
            Point2::new(bottom_x, top_y + radius),
        )?;
        for center in [
            Point2::new(top_x + radius, top_y),
            Point2::new(top_x + radius, bottom_y),
            Point2::new(top_x, top_y + radius),
            Point2::new(bottom_x, top_y + radius),
        ] {
            graph.add_circle(center, radius)?;
        }

        for (i, j) in DIAMETERS {
            chord(graph, circle, i, j)?;
        }
        let mut sides = [circle; 6];
        for (side, (i, j)) in sides.iter_mut().zip(SIDES) {
            *side = chord(graph, circle, i, j)?;
        }

        tracing::debug!(points = graph.point_count(), "hexagon template laid out");
        Ok(HexagonFrame {
            circle,
            horizontal,
            sides,
        })
    }
}

fn chord(graph: &mut ConstructionGraph, circle: ElementId, i: usize, j: usize) -> Result<ElementId> {
    let a = graph.intersection_point_at(circle, i)?;
    let b = graph.intersection_point_at(circle, j)?;
    graph.add_line_through(a, b)
}
