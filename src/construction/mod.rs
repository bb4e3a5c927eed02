mod element;
mod point;
mod scene;

pub use element::{ElementData, ElementId};
pub use point::{PointData, PointId};
pub use scene::{ElementRecord, PatternLineRecord, PointRecord, SceneSnapshot, ShapeRecord};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{ConstructionError, GeometryError, Result};
use crate::geometry::{Circle, ConstructionElement, Line, Transform};
use crate::math::tolerance::PrecisionKey;
use crate::math::{Point2, DEFAULT_PRECISION};
use crate::pattern::{compound_path, PatternLine};

/// Parameters of a construction session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Decimal digits two intersections must share to be the same point.
    pub precision: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Where a line starts or ends: raw coordinates or a registered point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    At(Point2),
    Point(PointId),
}

impl From<Point2> for Anchor {
    fn from(p: Point2) -> Self {
        Self::At(p)
    }
}

impl From<PointId> for Anchor {
    fn from(id: PointId) -> Self {
        Self::Point(id)
    }
}

/// Owns every construction element and intersection point of a session.
///
/// Elements are added one at a time. Each addition intersects the new
/// element with all earlier ones, merges the results into the point set and
/// links points and elements both ways. Nothing is ever removed, so ids and
/// handles stay valid for the lifetime of the graph.
#[derive(Debug, Default)]
pub struct ConstructionGraph {
    config: GraphConfig,
    elements: SlotMap<ElementId, ElementData>,
    points: SlotMap<PointId, PointData>,
    element_order: Vec<ElementId>,
    point_order: Vec<PointId>,
    point_index: HashMap<PrecisionKey, PointId>,
    pattern_lines: Vec<PatternLine>,
    next_element_id: u32,
    next_point_id: u32,
}

impl ConstructionGraph {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with `config`.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // --- Adding elements ---

    /// Adds the construction line from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn add_line(&mut self, a: Point2, b: Point2) -> Result<ElementId> {
        let line = Line::new(a, b)?;
        self.add_element(line.into(), Transform::identity())
    }

    /// Adds the construction line between two registered points.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in this graph.
    pub fn add_line_through(&mut self, a: PointId, b: PointId) -> Result<ElementId> {
        let a = *self.point(a)?.position();
        let b = *self.point(b)?.position();
        self.add_line(a, b)
    }

    /// Adds the construction circle around `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or a value is not finite.
    pub fn add_circle(&mut self, center: Point2, radius: f64) -> Result<ElementId> {
        let circle = Circle::new(center, radius)?;
        self.add_element(circle.into(), Transform::identity())
    }

    /// Adds `base` as it appears after `transform`.
    ///
    /// Every intersection with an earlier element is registered before this
    /// returns. All geometry is computed up front, so an error leaves the
    /// graph untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformed element has non-finite parameters.
    pub fn add_element(
        &mut self,
        base: ConstructionElement,
        transform: Transform,
    ) -> Result<ElementId> {
        let actual = base.transformed(&transform);
        if !actual.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "transformed element",
            }
            .into());
        }

        let precision = self.config.precision;
        let crossings: Vec<(ElementId, Vec<Point2>)> = self
            .element_order
            .iter()
            .filter_map(|&other| {
                let pivots = actual.pivots(self.elements.get(other)?.actual(), precision);
                (!pivots.is_empty()).then_some((other, pivots))
            })
            .collect();

        let id = self.next_element_id;
        self.next_element_id += 1;
        let element = self
            .elements
            .insert(ElementData::new(id, base, transform, actual));

        let (mut created, mut reused) = (0_usize, 0_usize);
        for (other, pivots) in crossings {
            for pivot in pivots {
                let key = PrecisionKey::new(&pivot, precision);
                // a reused point only gains the new element
                if let Some(&existing) = self.point_index.get(&key) {
                    reused += 1;
                    self.link(element, existing);
                } else {
                    created += 1;
                    let point = self.register_point(pivot, key);
                    self.link(element, point);
                    self.link(other, point);
                }
            }
        }
        self.element_order.push(element);

        tracing::debug!(
            kind = actual.kind(),
            id,
            created,
            reused,
            "added construction element"
        );
        Ok(element)
    }

    fn register_point(&mut self, position: Point2, key: PrecisionKey) -> PointId {
        let id = self.next_point_id;
        self.next_point_id += 1;
        let point = self.points.insert(PointData::new(id, position));
        self.point_order.push(point);
        self.point_index.insert(key, point);
        tracing::trace!(id, x = position.x, y = position.y, "registered intersection point");
        point
    }

    /// Links `point` and `element` both ways, skipping sides already linked.
    fn link(&mut self, element: ElementId, point: PointId) {
        if let Some(data) = self.elements.get_mut(element) {
            data.insert_point(point, &self.points);
        }
        if let Some(data) = self.points.get_mut(point) {
            data.touch(element);
        }
    }

    /// Resolves an anchor to coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the anchor names a point not in this graph.
    pub fn resolve(&self, anchor: Anchor) -> Result<Point2> {
        match anchor {
            Anchor::At(p) => Ok(p),
            Anchor::Point(id) => Ok(*self.point(id)?.position()),
        }
    }

    // --- Pattern lines ---

    /// Adds a pattern line from `a` to `b` and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn add_pattern_line(&mut self, a: Point2, b: Point2) -> Result<usize> {
        self.pattern_lines.push(PatternLine::new(Line::new(a, b)?));
        Ok(self.pattern_lines.len() - 1)
    }

    /// Adds a pattern line between two registered points and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in this graph.
    pub fn add_pattern_line_through(&mut self, a: PointId, b: PointId) -> Result<usize> {
        let a = *self.point(a)?.position();
        let b = *self.point(b)?.position();
        self.add_pattern_line(a, b)
    }

    /// Pattern lines in insertion order.
    #[must_use]
    pub fn pattern_lines(&self) -> &[PatternLine] {
        &self.pattern_lines
    }

    /// All pattern lines joined into one compound path.
    #[must_use]
    pub fn full_pattern_path(&self) -> String {
        compound_path(&self.pattern_lines)
    }

    // --- Queries ---

    /// Returns the element data.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in this graph.
    pub fn element(&self, id: ElementId) -> Result<&ElementData> {
        self.elements
            .get(id)
            .ok_or_else(|| ConstructionError::EntityNotFound("element").into())
    }

    /// Returns the point data.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in this graph.
    pub fn point(&self, id: PointId) -> Result<&PointData> {
        self.points
            .get(id)
            .ok_or_else(|| ConstructionError::EntityNotFound("point").into())
    }

    /// Returns the actual segment of a line element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or is a circle.
    pub fn line(&self, id: ElementId) -> Result<&Line> {
        match self.element(id)?.actual() {
            ConstructionElement::Line(line) => Ok(line),
            other => Err(ConstructionError::TypeMismatch {
                expected: "line",
                found: other.kind(),
            }
            .into()),
        }
    }

    /// Returns the actual circle of a circle element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or is a line.
    pub fn circle(&self, id: ElementId) -> Result<&Circle> {
        match self.element(id)?.actual() {
            ConstructionElement::Circle(circle) => Ok(circle),
            other => Err(ConstructionError::TypeMismatch {
                expected: "circle",
                found: other.kind(),
            }
            .into()),
        }
    }

    /// The `index`-th intersection point of `element` in canonical order.
    ///
    /// The answer only holds until another element adds a point to
    /// `element`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::OutOfRange`] if the element has no more
    /// than `index` points.
    pub fn intersection_point_at(&self, element: ElementId, index: usize) -> Result<PointId> {
        let points = self.element(element)?.points();
        points.get(index).copied().ok_or_else(|| {
            ConstructionError::OutOfRange {
                index,
                len: points.len(),
            }
            .into()
        })
    }

    /// Finds the registered point that `position` rounds to.
    #[must_use]
    pub fn find_point(&self, position: &Point2) -> Option<PointId> {
        self.point_index
            .get(&PrecisionKey::new(position, self.config.precision))
            .copied()
    }

    /// Element handles in insertion order.
    #[must_use]
    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_order
    }

    /// Point handles in creation order.
    #[must_use]
    pub fn point_ids(&self) -> &[PointId] {
        &self.point_order
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &ElementData)> + '_ {
        self.element_order
            .iter()
            .filter_map(|&id| self.elements.get(id).map(|data| (id, data)))
    }

    /// Points in creation order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> + '_ {
        self.point_order
            .iter()
            .filter_map(|&id| self.points.get(id).map(|data| (id, data)))
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_order.len()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_order.len()
    }
}
