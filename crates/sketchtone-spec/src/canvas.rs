//! Import of stroke documents produced by the drawing surface.
//!
//! Two JSON shapes are accepted:
//!
//! - A canvas document, `{"objects": [{"type": "path", "path": [["M", x, y], ...]}]}`,
//!   where each path object becomes one stroke. `M`/`L` contribute one point,
//!   `Q` two points, and `C` three points, in command order.
//! - A plain stroke list, `{"strokes": [[[x, y], ...], ...]}`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{SpecError, SpecResult};
use crate::stroke::{Point, Stroke};

/// Which document shape was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Canvas object list with path commands.
    Canvas,
    /// Plain list of point lists.
    Strokes,
}

impl DocumentKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Canvas => "canvas",
            DocumentKind::Strokes => "strokes",
        }
    }
}

#[derive(Deserialize)]
struct StrokeDocument {
    strokes: Vec<Stroke>,
}

/// Parses either document shape into strokes, in document order.
pub fn parse_document(json: &str) -> SpecResult<(DocumentKind, Vec<Stroke>)> {
    let value: Value = serde_json::from_str(json)?;
    let object = value
        .as_object()
        .ok_or_else(|| SpecError::invalid_canvas("document must be a JSON object"))?;

    if object.contains_key("objects") {
        Ok((DocumentKind::Canvas, strokes_from_canvas(&value)?))
    } else if object.contains_key("strokes") {
        let doc: StrokeDocument = serde_json::from_value(value)?;
        Ok((DocumentKind::Strokes, doc.strokes))
    } else {
        Err(SpecError::invalid_canvas(
            "expected an 'objects' array (canvas) or a 'strokes' array",
        ))
    }
}

/// Extracts strokes from a canvas document value.
///
/// Non-path objects and paths that yield no points are skipped.
pub fn strokes_from_canvas(doc: &Value) -> SpecResult<Vec<Stroke>> {
    let objects = doc
        .get("objects")
        .and_then(Value::as_array)
        .ok_or_else(|| SpecError::invalid_canvas("'objects' must be an array"))?;

    let strokes = objects
        .iter()
        .filter(|obj| obj.get("type").and_then(Value::as_str) == Some("path"))
        .filter_map(|obj| {
            let commands = obj.get("path").and_then(Value::as_array)?;
            let points = path_points(commands);
            (!points.is_empty()).then(|| Stroke::new(points))
        })
        .collect();

    Ok(strokes)
}

/// Flattens path commands into their coordinate points.
fn path_points(commands: &[Value]) -> Vec<Point> {
    let mut points = Vec::new();

    for command in commands {
        let Some(parts) = command.as_array() else {
            continue;
        };
        let Some(op) = parts.first().and_then(Value::as_str) else {
            continue;
        };
        let operands: Vec<f64> = parts[1..].iter().map_while(Value::as_f64).collect();

        let pairs = match op {
            "M" | "L" => 1,
            "Q" => 2,
            "C" => 3,
            _ => continue,
        };
        if operands.len() < pairs * 2 {
            continue;
        }

        points.extend(
            operands
                .chunks_exact(2)
                .take(pairs)
                .map(|xy| Point::new(xy[0], xy[1])),
        );
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canvas_commands_flatten_in_order() {
        let json = r#"{
            "objects": [
                {"type": "path", "path": [
                    ["M", 10, 20],
                    ["Q", 11, 21, 12, 22],
                    ["C", 1, 2, 3, 4, 5, 6],
                    ["L", 30, 40]
                ]}
            ]
        }"#;
        let (kind, strokes) = parse_document(json).unwrap();
        assert_eq!(kind, DocumentKind::Canvas);
        assert_eq!(strokes.len(), 1);

        let coords: Vec<(f64, f64)> = strokes[0].points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            coords,
            vec![
                (10.0, 20.0),
                (11.0, 21.0),
                (12.0, 22.0),
                (1.0, 2.0),
                (3.0, 4.0),
                (5.0, 6.0),
                (30.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_short_and_unknown_commands_skipped() {
        let json = r#"{
            "objects": [
                {"type": "path", "path": [
                    ["M", 1, 1],
                    ["C", 1, 2, 3],
                    ["Z"],
                    ["A", 1, 1, 0, 0, 1, 5, 5],
                    ["L", 2, 2]
                ]}
            ]
        }"#;
        let (_, strokes) = parse_document(json).unwrap();
        assert_eq!(strokes[0].len(), 2);
    }

    #[test]
    fn test_non_path_objects_and_empty_paths_dropped() {
        let json = r#"{
            "objects": [
                {"type": "rect", "left": 5},
                {"type": "path", "path": [["Z"]]},
                {"type": "path", "path": [["M", 0, 0], ["L", 100, 0]]}
            ]
        }"#;
        let (_, strokes) = parse_document(json).unwrap();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].len(), 2);
    }

    #[test]
    fn test_plain_stroke_document() {
        let json = r#"{"strokes": [[[0, 0], [10, 0]], [[5, 5]]]}"#;
        let (kind, strokes) = parse_document(json).unwrap();
        assert_eq!(kind, DocumentKind::Strokes);
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].points()[0], Point::new(5.0, 5.0));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        assert!(matches!(
            parse_document("[1, 2]"),
            Err(SpecError::InvalidCanvas { .. })
        ));
        assert!(matches!(
            parse_document(r#"{"shapes": []}"#),
            Err(SpecError::InvalidCanvas { .. })
        ));
        assert!(matches!(
            parse_document(r#"{"objects": 3}"#),
            Err(SpecError::InvalidCanvas { .. })
        ));
    }
}
