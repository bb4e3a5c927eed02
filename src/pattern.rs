//! Pattern lines: the segments that make up the finished tessellation.
//!
//! They are drawn on top of the construction and never take part in
//! intersection tracking.

use crate::geometry::Line;

/// A decorative segment of the final pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternLine {
    line: Line,
}

impl PatternLine {
    #[must_use]
    pub fn new(line: Line) -> Self {
        Self { line }
    }

    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Path of this segment, e.g. `M0,0L1,1`.
    #[must_use]
    pub fn path_string(&self) -> String {
        self.line.path_string()
    }
}

/// Concatenates the paths of `lines`, in order, into one compound path.
#[must_use]
pub fn compound_path(lines: &[PatternLine]) -> String {
    let mut out = String::with_capacity(lines.len() * 24);
    for pattern_line in lines {
        pattern_line.line.write_path(&mut out);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn pattern_line(x1: f64, y1: f64, x2: f64, y2: f64) -> PatternLine {
        PatternLine::new(Line::new(Point2::new(x1, y1), Point2::new(x2, y2)).unwrap())
    }

    #[test]
    fn compound_path_keeps_order() {
        let lines = [
            pattern_line(0.0, 0.0, 1.0, 1.0),
            pattern_line(1.0, 1.0, 2.5, 0.0),
        ];
        assert_eq!(compound_path(&lines), "M0,0L1,1M1,1L2.5,0");
    }

    #[test]
    fn empty_pattern_has_empty_path() {
        assert_eq!(compound_path(&[]), "");
    }
}
