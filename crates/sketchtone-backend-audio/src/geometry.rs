//! Stroke geometry: path length and sharpness.

use serde::Serialize;
use sketchtone_spec::Point;

/// Geometric features of one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeMetrics {
    /// Sum of Euclidean distances between consecutive points, in pixels.
    pub total_length: f64,
    /// Mean absolute change in slope between consecutive segments.
    pub sharpness: f64,
}

/// Analyzes a point sequence.
///
/// Segments with no horizontal extent have slope 0. Strokes with fewer than
/// three points have no slope changes and report a sharpness of 0.
pub fn analyze(points: &[Point]) -> StrokeMetrics {
    StrokeMetrics {
        total_length: total_length(points),
        sharpness: sharpness(points),
    }
}

/// Total path length in pixels.
pub fn total_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Mean absolute difference between consecutive segment slopes.
pub fn sharpness(points: &[Point]) -> f64 {
    let slopes: Vec<f64> = points.windows(2).map(|w| slope(&w[0], &w[1])).collect();
    if slopes.len() < 2 {
        return 0.0;
    }

    let total: f64 = slopes.windows(2).map(|s| (s[1] - s[0]).abs()).sum();
    total / (slopes.len() - 1) as f64
}

#[inline]
fn slope(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    if dx == 0.0 {
        0.0
    } else {
        (b.y - a.y) / dx
    }
}
