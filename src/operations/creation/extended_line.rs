use crate::construction::{Anchor, ConstructionGraph, ElementId};
use crate::error::Result;
use crate::geometry::Tile;

/// Creates a construction line through two anchors, extended to span the tile.
///
/// The line is not limited to the segment between the anchors: it runs from
/// one tile edge to the opposite one.
pub struct ExtendedLine {
    tile: Tile,
    a: Anchor,
    b: Anchor,
}

impl ExtendedLine {
    /// Creates a new `ExtendedLine` operation.
    #[must_use]
    pub fn new(tile: Tile, a: impl Into<Anchor>, b: impl Into<Anchor>) -> Self {
        Self {
            tile,
            a: a.into(),
            b: b.into(),
        }
    }

    /// Executes the operation, adding the clipped line to the graph.
    ///
    /// Returns `None` without touching the graph if the line through the
    /// anchors misses the tile or the anchors coincide.
    ///
    /// # Errors
    ///
    /// Returns an error if an anchor names a point not in `graph`.
    pub fn execute(&self, graph: &mut ConstructionGraph) -> Result<Option<ElementId>> {
        let a = graph.resolve(self.a)?;
        let b = graph.resolve(self.b)?;
        let Some((start, end)) = self.tile.clip_line_to_boundary(&a, &b) else {
            tracing::warn!(
                ax = a.x,
                ay = a.y,
                bx = b.x,
                by = b.y,
                "extended line does not cross the tile"
            );
            return Ok(None);
        };
        graph.add_line(start, end).map(Some)
    }
}
