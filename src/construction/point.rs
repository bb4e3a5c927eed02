use crate::math::Point2;

use super::element::ElementId;

slotmap::new_key_type! {
    /// Handle of an intersection point in the construction graph.
    pub struct PointId;
}

/// A registered intersection point.
#[derive(Debug, Clone)]
pub struct PointData {
    id: u32,
    position: Point2,
    touching: Vec<ElementId>,
}

impl PointData {
    pub(crate) fn new(id: u32, position: Point2) -> Self {
        Self {
            id,
            position,
            touching: Vec::new(),
        }
    }

    /// Stable sequence number, assigned at creation and never reused.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Position as first computed.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    /// Elements known to pass through this point, in the order they were linked.
    #[must_use]
    pub fn touching(&self) -> &[ElementId] {
        &self.touching
    }

    /// Adds `element` to the touching set. Returns `false` if already present.
    pub(crate) fn touch(&mut self, element: ElementId) -> bool {
        if self.touching.contains(&element) {
            return false;
        }
        self.touching.push(element);
        true
    }
}
