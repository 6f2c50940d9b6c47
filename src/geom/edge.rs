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

use crate::geom::{v2, Circle, Rect, Vec2};
use crate::util::{clamp, enclosing_span};

/// A line segment between two endpoints.
///
/// An edge may have zero length, in which case it is a single point.
#[derive(PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Edge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Edge {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge {
        Edge { x1, y1, x2, y2 }
    }

    /// Constructs an edge running from `a` to `b`.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Edge {
        Edge::new(a.x, a.y, b.x, b.y)
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        v2(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        v2(self.x2, self.y2)
    }

    /// Returns `end - start`.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.end() - self.start()
    }

    pub fn midpoint(&self) -> Vec2 {
        v2((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    pub fn length(&self) -> f64 {
        self.dir().len()
    }

    /// Returns the point of the edge nearest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let dir = self.dir();
        let len_sq = dir.len_sq();
        if len_sq == 0.0 {
            return self.start();
        }
        let t = clamp((p - self.start()) * dir / len_sq, 0.0, 1.0);
        self.start() + dir * t
    }

    /// Returns the smallest rectangle enclosing both endpoints.
    pub fn bounds(&self) -> Rect {
        let left = self.x1.min(self.x2);
        let top = self.y1.min(self.y2);
        Rect::new(
            left,
            top,
            enclosing_span(left, self.x1.max(self.x2)),
            enclosing_span(top, self.y1.max(self.y2)),
        )
    }

    /// Returns the circle centered on the midpoint that passes through both endpoints.
    pub fn bounding_circle(&self) -> Circle {
        let mid = self.midpoint();
        Circle::new(mid.x, mid.y, self.length() * 0.5)
    }

    /// Writes the edge to the log at info level.
    pub fn log(&self) {
        info!("{}", self);
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Edge: ({}, {}) -> ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
