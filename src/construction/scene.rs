//! Plain-data image of a construction graph.
//!
//! A snapshot carries everything needed to rebuild a graph without
//! recomputing a single intersection: element parameters and transforms,
//! point positions, both sides of every link and the pattern lines. Ids are
//! the stable `u32` sequence numbers, never arena keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConstructionError, GeometryError, Result};
use crate::geometry::{Circle, ConstructionElement, Line, Transform};
use crate::math::tolerance::PrecisionKey;
use crate::math::Point2;
use crate::pattern::PatternLine;

use super::{ConstructionGraph, ElementData, ElementId, GraphConfig, PointData, PointId};

/// Serializable image of a [`ConstructionGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub elements: Vec<ElementRecord>,
    pub points: Vec<PointRecord>,
    #[serde(default)]
    pub pattern_lines: Vec<PatternLineRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: u32,
    pub shape: ShapeRecord,
    /// SVG order `[a, b, c, d, e, f]`.
    pub transform: [f64; 6],
    /// Point ids in canonical order.
    pub points: Vec<u32>,
}

/// Parameters of an element as created, before its transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeRecord {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub touching: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternLineRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl From<&ConstructionElement> for ShapeRecord {
    fn from(shape: &ConstructionElement) -> Self {
        match shape {
            ConstructionElement::Line(line) => Self::Line {
                x1: line.start().x,
                y1: line.start().y,
                x2: line.end().x,
                y2: line.end().y,
            },
            ConstructionElement::Circle(circle) => Self::Circle {
                cx: circle.center().x,
                cy: circle.center().y,
                r: circle.radius(),
            },
        }
    }
}

impl TryFrom<ShapeRecord> for ConstructionElement {
    type Error = crate::error::GirihError;

    fn try_from(record: ShapeRecord) -> Result<Self> {
        Ok(match record {
            ShapeRecord::Line { x1, y1, x2, y2 } => {
                Line::new(Point2::new(x1, y1), Point2::new(x2, y2))?.into()
            }
            ShapeRecord::Circle { cx, cy, r } => Circle::new(Point2::new(cx, cy), r)?.into(),
        })
    }
}

impl From<&PatternLine> for PatternLineRecord {
    fn from(pattern_line: &PatternLine) -> Self {
        let line = pattern_line.line();
        Self {
            x1: line.start().x,
            y1: line.start().y,
            x2: line.end().x,
            y2: line.end().y,
        }
    }
}

impl ConstructionGraph {
    /// Captures the graph as plain data.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let point_id = |key: &PointId| self.points.get(*key).map(PointData::id);
        let element_id = |key: &ElementId| self.elements.get(*key).map(ElementData::id);

        let elements = self
            .elements()
            .map(|(_, data)| ElementRecord {
                id: data.id(),
                shape: data.base().into(),
                transform: data.transform().to_array(),
                points: data.points().iter().filter_map(point_id).collect(),
            })
            .collect();
        let points = self
            .points()
            .map(|(_, data)| PointRecord {
                id: data.id(),
                x: data.position().x,
                y: data.position().y,
                touching: data.touching().iter().filter_map(element_id).collect(),
            })
            .collect();

        SceneSnapshot {
            elements,
            points,
            pattern_lines: self.pattern_lines.iter().map(Into::into).collect(),
        }
    }

    /// Rebuilds a graph from `snapshot` without recomputing intersections.
    ///
    /// Ids are preserved and new entities continue after the largest one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnknownId`] for a link to a missing id,
    /// [`ConstructionError::DuplicateId`] for an id or link listed twice, and
    /// a geometry error for invalid element parameters.
    pub fn restore(snapshot: &SceneSnapshot, config: GraphConfig) -> Result<Self> {
        let mut graph = Self::with_config(config);
        let mut element_keys: HashMap<u32, ElementId> = HashMap::new();
        let mut point_keys: HashMap<u32, PointId> = HashMap::new();

        for record in &snapshot.elements {
            if element_keys.contains_key(&record.id) {
                return Err(duplicate("element", record.id));
            }
            let base = ConstructionElement::try_from(record.shape)?;
            let transform = Transform::from_array(record.transform);
            let actual = base.transformed(&transform);
            if !actual.is_finite() {
                return Err(GeometryError::NonFinite {
                    what: "restored element",
                }
                .into());
            }
            let key = graph
                .elements
                .insert(ElementData::new(record.id, base, transform, actual));
            graph.element_order.push(key);
            element_keys.insert(record.id, key);
        }

        for record in &snapshot.points {
            if point_keys.contains_key(&record.id) {
                return Err(duplicate("point", record.id));
            }
            let position = Point2::new(record.x, record.y);
            if !(position.x.is_finite() && position.y.is_finite()) {
                return Err(GeometryError::NonFinite {
                    what: "restored point",
                }
                .into());
            }
            let mut data = PointData::new(record.id, position);
            for id in &record.touching {
                let element = *element_keys.get(id).ok_or_else(|| unknown("element", *id))?;
                if !data.touch(element) {
                    return Err(duplicate("element", *id));
                }
            }
            let key = graph.points.insert(data);
            graph.point_order.push(key);
            graph
                .point_index
                .entry(PrecisionKey::new(&position, config.precision))
                .or_insert(key);
            point_keys.insert(record.id, key);
        }

        for record in &snapshot.elements {
            let Some(&element) = element_keys.get(&record.id) else {
                continue;
            };
            for id in &record.points {
                let point = *point_keys.get(id).ok_or_else(|| unknown("point", *id))?;
                let inserted = graph
                    .elements
                    .get_mut(element)
                    .is_some_and(|data| data.insert_point(point, &graph.points));
                if !inserted {
                    return Err(duplicate("point", *id));
                }
            }
        }

        for record in &snapshot.pattern_lines {
            graph.add_pattern_line(
                Point2::new(record.x1, record.y1),
                Point2::new(record.x2, record.y2),
            )?;
        }

        graph.next_element_id = element_keys.keys().max().map_or(0, |id| id + 1);
        graph.next_point_id = point_keys.keys().max().map_or(0, |id| id + 1);
        tracing::debug!(
            elements = graph.element_count(),
            points = graph.point_count(),
            "restored construction graph"
        );
        Ok(graph)
    }
}

fn unknown(kind: &'static str, id: u32) -> crate::error::GirihError {
    ConstructionError::UnknownId { kind, id }.into()
}

fn duplicate(kind: &'static str, id: u32) -> crate::error::GirihError {
    ConstructionError::DuplicateId { kind, id }.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GirihError;

    fn sample() -> ConstructionGraph {
        let mut graph = ConstructionGraph::new();
        graph.add_circle(Point2::new(5.0, 5.0), 5.0).unwrap();
        graph
            .add_line(Point2::new(0.0, 5.0), Point2::new(10.0, 5.0))
            .unwrap();
        graph
            .add_element(
                Line::new(Point2::new(0.0, 0.0), Point2::new(0.0, 10.0))
                    .unwrap()
                    .into(),
                Transform::translation(5.0, 0.0),
            )
            .unwrap();
        graph
            .add_pattern_line(Point2::new(0.0, 5.0), Point2::new(5.0, 0.0))
            .unwrap();
        graph
    }

    #[test]
    fn snapshot_survives_json_and_restores_the_same_graph() {
        let graph = sample();
        let snapshot = graph.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""kind":"circle""#));
        let decoded: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);

        let mut restored = ConstructionGraph::restore(&decoded, GraphConfig::default()).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.point_count(), 5);
        assert_eq!(restored.full_pattern_path(), graph.full_pattern_path());

        let vertical = restored.element_ids()[2];
        assert_eq!(*restored.line(vertical).unwrap().start(), Point2::new(5.0, 0.0));
        assert!(restored.find_point(&Point2::new(5.0, 5.0)).is_some());

        // new ids continue after the restored ones and reuse restored points
        let before = restored.point_count();
        let diagonal = restored
            .add_line(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0))
            .unwrap();
        assert_eq!(restored.element(diagonal).unwrap().id(), 3);
        let created: Vec<u32> = restored
            .points()
            .skip(before)
            .map(|(_, data)| data.id())
            .collect();
        assert_eq!(created, vec![5, 6]);
    }

    #[test]
    fn dangling_links_are_rejected() {
        let mut snapshot = sample().snapshot();
        snapshot.points[0].touching.push(42);
        let err = ConstructionGraph::restore(&snapshot, GraphConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            GirihError::Construction(ConstructionError::UnknownId {
                kind: "element",
                id: 42
            })
        ));

        let mut snapshot = sample().snapshot();
        snapshot.elements[1].points.push(99);
        assert!(matches!(
            ConstructionGraph::restore(&snapshot, GraphConfig::default()),
            Err(GirihError::Construction(ConstructionError::UnknownId {
                kind: "point",
                id: 99
            }))
        ));
    }

    #[test]
    fn duplicated_ids_are_rejected() {
        let mut snapshot = sample().snapshot();
        let copy = snapshot.elements[0].clone();
        snapshot.elements.push(copy);
        assert!(matches!(
            ConstructionGraph::restore(&snapshot, GraphConfig::default()),
            Err(GirihError::Construction(ConstructionError::DuplicateId {
                kind: "element",
                id: 0
            }))
        ));

        let mut snapshot = sample().snapshot();
        let first = snapshot.elements[0].points[0];
        snapshot.elements[0].points.push(first);
        assert!(matches!(
            ConstructionGraph::restore(&snapshot, GraphConfig::default()),
            Err(GirihError::Construction(ConstructionError::DuplicateId { kind: "point", .. }))
        ));
    }

    #[test]
    fn invalid_shape_is_rejected() {
        let mut snapshot = sample().snapshot();
        snapshot.elements[0].shape = ShapeRecord::Circle {
            cx: 0.0,
            cy: 0.0,
            r: -2.0,
        };
        assert!(matches!(
            ConstructionGraph::restore(&snapshot, GraphConfig::default()),
            Err(GirihError::Geometry(GeometryError::NegativeRadius(_)))
        ));
    }
}
