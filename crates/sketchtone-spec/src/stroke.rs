//! Stroke and point types delivered by the drawing surface.

use serde::{Deserialize, Serialize};

/// A point in canvas pixel coordinates.
///
/// Serialized as a two-element array `[x, y]`, which is how drawing
/// surfaces report path coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// Horizontal position in pixels (0 = left edge).
    pub x: f64,
    /// Vertical position in pixels (0 = top edge).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous pen-down-to-pen-up path, in drawing order.
///
/// A stroke is immutable once captured; the engine only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke from an ordered point list.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a stroke from `(x, y)` tuples.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            points: coords.into_iter().map(Point::from).collect(),
        }
    }

    /// The points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_stroke_serializes_as_nested_arrays() {
        let stroke = Stroke::from_coords([(1.0, 2.0), (3.5, 4.0)]);
        let json = serde_json::to_string(&stroke).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.5,4.0]]");

        let parsed: Stroke = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stroke);
    }

    #[test]
    fn test_empty_stroke() {
        let stroke = Stroke::default();
        assert!(stroke.is_empty());
        assert_eq!(stroke.len(), 0);
    }
}
