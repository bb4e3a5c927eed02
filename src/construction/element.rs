use std::cmp::Ordering;

use slotmap::SlotMap;

use crate::geometry::{ConstructionElement, Transform};
use crate::math::tolerance::sort_by_xy;

use super::point::{PointData, PointId};

slotmap::new_key_type! {
    /// Handle of a construction element in the construction graph.
    pub struct ElementId;
}

/// A line or circle added to the construction graph.
///
/// Keeps the parameters it was created with, the transform applied to them,
/// and the resulting actual geometry that all intersection tests use.
#[derive(Debug, Clone)]
pub struct ElementData {
    id: u32,
    base: ConstructionElement,
    transform: Transform,
    actual: ConstructionElement,
    points: Vec<PointId>,
}

impl ElementData {
    pub(crate) fn new(
        id: u32,
        base: ConstructionElement,
        transform: Transform,
        actual: ConstructionElement,
    ) -> Self {
        Self {
            id,
            base,
            transform,
            actual,
            points: Vec::new(),
        }
    }

    /// Stable sequence number, assigned at creation.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Parameters as given at creation.
    #[must_use]
    pub fn base(&self) -> &ConstructionElement {
        &self.base
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Parameters after the transform.
    #[must_use]
    pub fn actual(&self) -> &ConstructionElement {
        &self.actual
    }

    /// Element kind name (`"line"` or `"circle"`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.actual.kind()
    }

    /// Intersection points on this element, in canonical order.
    #[must_use]
    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    /// Path of the actual segment, for lines.
    #[must_use]
    pub fn path_string(&self) -> Option<String> {
        match &self.actual {
            ConstructionElement::Line(line) => Some(line.path_string()),
            ConstructionElement::Circle(_) => None,
        }
    }

    /// Inserts `point` at its canonical position. Returns `false` if the point
    /// is already linked or unknown to `store`.
    pub(crate) fn insert_point(
        &mut self,
        point: PointId,
        store: &SlotMap<PointId, PointData>,
    ) -> bool {
        if self.points.contains(&point) {
            return false;
        }
        let Some(position) = store.get(point).map(PointData::position) else {
            return false;
        };
        let at = self.points.partition_point(|p| {
            store
                .get(*p)
                .is_some_and(|data| sort_by_xy(data.position(), position) != Ordering::Greater)
        });
        self.points.insert(at, point);
        true
    }
}
