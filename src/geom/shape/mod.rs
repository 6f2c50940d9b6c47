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


use std::fmt::{self, Display, Formatter};

use log::info;
use serde::{Deserialize, Serialize};

use crate::geom::{Circle, Edge, PixelRect, Rect, Vec2};

pub mod contact;


pub use self::contact::{CircleIntersection, Contact};

/// Enumeration of kinds of shapes.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Circle.
    Circle,
    /// Line segment.
    Edge,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Edge => "edge",
        })
    }
}

/// One of the primitive shapes.
///
/// Two shapes are equal only if they are the same kind and every field matches
/// exactly; no tolerance is applied.
///
/// In JSON a shape is an object whose `type` field is `"rect"`, `"circle"` or
/// `"edge"`, next to the fields of the matching primitive.
#[derive(PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Edge(Edge),
}

impl Shape {
    /// Constructs a rectangle shape from its top-left corner and size.
    #[inline]
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::Rect(Rect::new(x, y, w, h))
    }

    /// Constructs a circle shape from its center and radius.
    #[inline]
    pub fn circle(x: f64, y: f64, r: f64) -> Shape {
        Shape::Circle(Circle::new(x, y, r))
    }

    /// Constructs an edge shape from its endpoints.
    #[inline]
    pub fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
        Shape::Edge(Edge::new(x1, y1, x2, y2))
    }

    /// Returns the kind of shape.
    pub fn kind(&self) -> ShapeKind {
        match *self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Edge(_) => ShapeKind::Edge,
        }
    }

    /// Moves the shape by `delta` in place.
    pub fn move_by(&mut self, delta: Vec2) {
        match *self {
            Shape::Rect(ref mut r) => {
                r.x += delta.x;
                r.y += delta.y;
            }
            Shape::Circle(ref mut c) => {
                c.x += delta.x;
                c.y += delta.y;
            }
            Shape::Edge(ref mut e) => {
                e.x1 += delta.x;
                e.y1 += delta.y;
                e.x2 += delta.x;
                e.y2 += delta.y;
            }
        }
    }

    /// Returns a copy of the shape moved by `delta`.
    pub fn translated(mut self, delta: Vec2) -> Shape {
        self.move_by(delta);
        self
    }

    /// Returns the smallest rectangle enclosing the shape.
    pub fn bounds(&self) -> Rect {
        match *self {
            Shape::Rect(r) => r,
            Shape::Circle(c) => c.bounds(),
            Shape::Edge(e) => e.bounds(),
        }
    }

    /// Returns the circle itself, or the bounding circle of a rect or edge.
    pub fn to_circle(&self) -> Circle {
        match *self {
            Shape::Rect(r) => r.bounding_circle(),
            Shape::Circle(c) => c,
            Shape::Edge(e) => e.bounding_circle(),
        }
    }

    /// Returns the center of a rect or circle, or the midpoint of an edge.
    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Rect(r) => r.center(),
            Shape::Circle(c) => c.center(),
            Shape::Edge(e) => e.midpoint(),
        }
    }

    /// Returns `true` if `p` lies inside the shape or on its boundary.
    ///
    /// Edges have no interior, so this is always `false` for an edge.
    pub fn contains_point(&self, p: Vec2) -> bool {
        match *self {
            Shape::Rect(r) => r.contains_point(p),
            Shape::Circle(c) => c.contains_point(p),
            Shape::Edge(_) => false,
        }
    }

    /// Returns `true` if the two shapes overlap.
    pub fn overlaps(&self, other: &Shape) -> bool {
        use self::contact::*;
        match (self, other) {
            (Shape::Rect(a), Shape::Rect(b)) => rect_rect_overlap(a, b),
            (Shape::Rect(a), Shape::Circle(b)) => circle_rect_overlap(b, a),
            (Shape::Rect(a), Shape::Edge(b)) => edge_rect_overlap(b, a),
            (Shape::Circle(a), Shape::Rect(b)) => circle_rect_overlap(a, b),
            (Shape::Circle(a), Shape::Circle(b)) => circle_circle_overlap(a, b),
            (Shape::Circle(a), Shape::Edge(b)) => edge_circle_overlap(b, a),
            (Shape::Edge(a), Shape::Rect(b)) => edge_rect_overlap(a, b),
            (Shape::Edge(a), Shape::Circle(b)) => edge_circle_overlap(a, b),
            (Shape::Edge(a), Shape::Edge(b)) => edge_edge_overlap(a, b),
        }
    }

    /// Returns where the two shapes touch, or `None` if they do not overlap.
    ///
    /// The normal of the returned contact points from `other` toward `self`.
    pub fn overlap_contact(&self, other: &Shape) -> Option<Contact> {
        use self::contact::*;
        match (self, other) {
            (Shape::Rect(a), Shape::Rect(b)) => rect_rect_contact(a, b),
            (Shape::Rect(a), Shape::Circle(b)) => circle_rect_contact(b, a).map(Contact::flip),
            (Shape::Rect(a), Shape::Edge(b)) => edge_rect_contact(b, a).map(Contact::flip),
            (Shape::Circle(a), Shape::Rect(b)) => circle_rect_contact(a, b),
            (Shape::Circle(a), Shape::Circle(b)) => circle_circle_contact(a, b),
            (Shape::Circle(a), Shape::Edge(b)) => edge_circle_contact(b, a).map(Contact::flip),
            (Shape::Edge(a), Shape::Rect(b)) => edge_rect_contact(a, b),
            (Shape::Edge(a), Shape::Circle(b)) => edge_circle_contact(a, b),
            (Shape::Edge(a), Shape::Edge(b)) => edge_edge_contact(a, b),
        }
    }

    /// Returns the unit vector from the nearest point of the shape toward `p`.
    ///
    /// Returns the zero vector if `p` lies inside the shape, or on it for an edge.
    pub fn normal_toward(&self, p: Vec2) -> Vec2 {
        if self.contains_point(p) {
            return Vec2::zero();
        }
        let nearest = match *self {
            Shape::Rect(r) => r.clamp_point(p),
            Shape::Circle(c) => c.center(),
            Shape::Edge(e) => e.closest_point(p),
        };
        (p - nearest).try_normalize().unwrap_or_else(Vec2::zero)
    }

    /// Shorthand for `self.normal_toward(other.center())`.
    pub fn normal_for_shape(&self, other: &Shape) -> Vec2 {
        self.normal_toward(other.center())
    }

    /// Shorthand for `self.normal_toward(circle.center())`.
    pub fn normal_for_circle(&self, circle: &Circle) -> Vec2 {
        self.normal_toward(circle.center())
    }

    /// Writes the shape to the log at info level.
    pub fn log(&self) {
        info!("{}", self);
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Shape::Rect(ref r) => Display::fmt(r, f),
            Shape::Circle(ref c) => Display::fmt(c, f),
            Shape::Edge(ref e) => Display::fmt(e, f),
        }
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Shape {
        Shape::Rect(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Shape {
        Shape::Circle(c)
    }
}

impl From<Edge> for Shape {
    fn from(e: Edge) -> Shape {
        Shape::Edge(e)
    }
}

impl From<PixelRect> for Shape {
    fn from(r: PixelRect) -> Shape {
        Shape::Rect(r.into())
    }
}
