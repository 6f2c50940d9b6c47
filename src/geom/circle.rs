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

use crate::geom::{v2, Rect, Vec2};
use crate::util::enclosing_span;

/// A circle, given by its center and radius.
///
/// A radius of zero is allowed and behaves as a point.
#[derive(PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(x: f64, y: f64, r: f64) -> Circle {
        Circle { x, y, r }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        v2(self.x, self.y)
    }

    /// Returns `true` if `p` lies inside the circle or on its boundary.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.dist_sq(&self.center()) <= self.r * self.r
    }

    /// Returns the smallest rectangle enclosing the circle.
    pub fn bounds(&self) -> Rect {
        let (left, top) = (self.x - self.r, self.y - self.r);
        Rect::new(
            left,
            top,
            enclosing_span(left, self.x + self.r),
            enclosing_span(top, self.y + self.r),
        )
    }

    /// Writes the circle to the log at info level.
    pub fn log(&self) {
        info!("{}", self);
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Circle: ({}, {}) r {}", self.x, self.y, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let c = Circle::new(1.0, 1.0, 2.0);
        assert!(c.contains_point(v2(1.0, 1.0)));
        assert!(c.contains_point(v2(3.0, 1.0)));
        assert!(!c.contains_point(v2(2.5, 2.5)));
        assert!(Circle::new(4.0, 4.0, 0.0).contains_point(v2(4.0, 4.0)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Circle::new(3.0, 5.0, 2.0).bounds(), Rect::new(1.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn test_bounds_reach_far_sides() {
        let c = Circle::new(-39.04213940145054, 7.25, 26.56871978005439);
        let bounds = c.bounds();
        assert!(bounds.contains_point(v2(c.x + c.r, c.y)));
        assert!(bounds.contains_point(v2(c.x, c.y + c.r)));
        assert!(bounds.contains_point(v2(c.x - c.r, c.y - c.r)));
    }
}
