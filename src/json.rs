// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use log::warn;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::geom::{Circle, Edge, Rect, Shape, ShapeKind};

/// Reasons a JSON document could not be read as a `Shape`.
#[derive(Debug, Error)]
pub enum ShapeJsonError {
    /// The text was not valid JSON.
    #[error("invalid json: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The document was not a JSON object.
    #[error("shape json must be an object")]
    NotAnObject,

    /// The object had no `type` field.
    #[error("shape json has no \"type\" field")]
    MissingType,

    /// The `type` field did not name a known shape kind.
    #[error("unrecognized shape type {0}")]
    UnknownType(String),

    /// The fields for the named kind were missing or not numbers.
    #[error("malformed {kind} shape: {source}")]
    Malformed {
        kind: ShapeKind,
        #[source]
        source: serde_json::Error,
    },
}

impl Shape {
    /// Reads a shape from a JSON object such as
    /// `{"type": "circle", "x": 1, "y": 2, "r": 3}`.
    ///
    /// Either the whole shape is read or an error is returned; failures are
    /// also logged as warnings.
    pub fn from_json(json: &Value) -> Result<Shape, ShapeJsonError> {
        parse_shape(json).map_err(|err| {
            warn!("failed to read shape from json: {}", err);
            err
        })
    }

    /// Parses `text` as JSON and reads a shape from it.
    pub fn from_json_str(text: &str) -> Result<Shape, ShapeJsonError> {
        let json: Value = serde_json::from_str(text).map_err(|err| {
            warn!("failed to parse shape json: {}", err);
            err
        })?;
        Shape::from_json(&json)
    }
}

fn parse_shape(json: &Value) -> Result<Shape, ShapeJsonError> {
    let fields = json.as_object().ok_or(ShapeJsonError::NotAnObject)?;
    let kind = match fields.get("type") {
        None => return Err(ShapeJsonError::MissingType),
        Some(Value::String(name)) => match name.as_str() {
            "rect" => ShapeKind::Rect,
            "circle" => ShapeKind::Circle,
            "edge" => ShapeKind::Edge,
            _ => return Err(ShapeJsonError::UnknownType(format!("{:?}", name))),
        },
        Some(other) => return Err(ShapeJsonError::UnknownType(other.to_string())),
    };
    Ok(match kind {
        ShapeKind::Rect => Shape::Rect(payload::<Rect>(json, kind)?),
        ShapeKind::Circle => Shape::Circle(payload::<Circle>(json, kind)?),
        ShapeKind::Edge => Shape::Edge(payload::<Edge>(json, kind)?),
    })
}

fn payload<'a, T: Deserialize<'a>>(json: &'a Value, kind: ShapeKind) -> Result<T, ShapeJsonError> {
    T::deserialize(json).map_err(|source| ShapeJsonError::Malformed { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_each_kind() {
        let rect = Shape::from_json(&json!({"type": "rect", "x": 1, "y": 2.5, "w": 3, "h": 4})).unwrap();
        assert_eq!(rect, Shape::rect(1.0, 2.5, 3.0, 4.0));
        let circle = Shape::from_json(&json!({"type": "circle", "x": -1, "y": 0, "r": 5})).unwrap();
        assert_eq!(circle, Shape::circle(-1.0, 0.0, 5.0));
        let edge = Shape::from_json_str(r#"{"type": "edge", "x1": 0, "y1": 1, "x2": 2, "y2": 3}"#).unwrap();
        assert_eq!(edge, Shape::edge(0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let shape = Shape::from_json(&json!({"type": "circle", "x": 0, "y": 0, "r": 1, "name": "ball"}));
        assert_eq!(shape.unwrap(), Shape::circle(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_bad_type() {
        assert!(matches!(
            Shape::from_json(&json!({"x": 0, "y": 0, "r": 1})),
            Err(ShapeJsonError::MissingType)
        ));
        assert!(matches!(
            Shape::from_json(&json!({"type": "polygon", "x": 0})),
            Err(ShapeJsonError::UnknownType(_))
        ));
        assert!(matches!(
            Shape::from_json(&json!({"type": 3})),
            Err(ShapeJsonError::UnknownType(_))
        ));
        assert!(matches!(Shape::from_json(&json!([1, 2])), Err(ShapeJsonError::NotAnObject)));
    }

    #[test]
    fn test_missing_field() {
        let err = Shape::from_json(&json!({"type": "rect", "x": 0, "y": 0, "w": 1})).unwrap_err();
        match err {
            ShapeJsonError::Malformed { kind, .. } => assert_eq!(kind, ShapeKind::Rect),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(matches!(
            Shape::from_json(&json!({"type": "edge", "x1": "a", "y1": 0, "x2": 1, "y2": 1})),
            Err(ShapeJsonError::Malformed { .. })
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(Shape::from_json_str("{\"type\": "), Err(ShapeJsonError::Syntax(_))));
    }

    #[test]
    fn test_write_then_read() {
        let shape = Shape::edge(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "edge");
        assert_eq!(Shape::from_json(&json).unwrap(), shape);
    }
}
