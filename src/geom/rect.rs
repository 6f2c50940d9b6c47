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

use crate::geom::{v2, Card, Circle, Edge, Vec2};
use crate::util::clamp;

/// An axis-aligned rectangle, given by its top-left corner and its size.
///
/// Width and height are expected to be non-negative but this is not enforced.
#[derive(PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// An integer rectangle, as used by windowing and graphics APIs.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    #[inline]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> PixelRect {
        PixelRect { x, y, w, h }
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    /// Returns the lowest x coordinate.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Returns the highest x coordinate.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Returns the lowest y coordinate.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Returns the highest y coordinate.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        v2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Returns `true` if `p` lies inside the rectangle or on its boundary.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Returns the point of the closed rectangle nearest to `p`.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        v2(
            clamp(p.x, self.left(), self.right()),
            clamp(p.y, self.top(), self.bottom()),
        )
    }

    /// Returns the boundary edge facing `card`, running clockwise.
    pub fn side(&self, card: Card) -> Edge {
        let (l, r, t, b) = (self.left(), self.right(), self.top(), self.bottom());
        match card {
            Card::Top => Edge::new(l, t, r, t),
            Card::Right => Edge::new(r, t, r, b),
            Card::Bottom => Edge::new(r, b, l, b),
            Card::Left => Edge::new(l, b, l, t),
        }
    }

    /// Returns the four boundary edges, clockwise from the top side.
    pub fn sides(&self) -> [Edge; 4] {
        [
            self.side(Card::Top),
            self.side(Card::Right),
            self.side(Card::Bottom),
            self.side(Card::Left),
        ]
    }

    /// Returns the circle passing through the four corners.
    pub fn bounding_circle(&self) -> Circle {
        let center = self.center();
        Circle::new(center.x, center.y, v2(self.w, self.h).len() * 0.5)
    }

    /// Writes the rectangle to the log at info level.
    pub fn log(&self) {
        info!("{}", self);
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Rect: ({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}

impl From<[f64; 4]> for Rect {
    fn from(v: [f64; 4]) -> Rect {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rect> for [f64; 4] {
    fn from(r: Rect) -> [f64; 4] {
        [r.x, r.y, r.w, r.h]
    }
}

impl From<PixelRect> for Rect {
    fn from(r: PixelRect) -> Rect {
        Rect::new(r.x as f64, r.y as f64, r.w as f64, r.h as f64)
    }
}

// Fractions are truncated toward zero.
impl From<Rect> for PixelRect {
    fn from(r: Rect) -> PixelRect {
        PixelRect::new(r.x as i32, r.y as i32, r.w as i32, r.h as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let r = Rect::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(r.left(), 1.0);
        assert_eq!(r.top(), 2.0);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 8.0);
        assert_eq!(r.center(), v2(3.0, 5.0));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(v2(0.0, 0.0)));
        assert!(r.contains_point(v2(10.0, 10.0)));
        assert!(r.contains_point(v2(5.0, 10.0)));
        assert!(!r.contains_point(v2(10.5, 5.0)));
        assert!(!r.contains_point(v2(5.0, -0.1)));
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(r.clamp_point(v2(-3.0, 2.0)), v2(0.0, 2.0));
        assert_eq!(r.clamp_point(v2(12.0, 9.0)), v2(10.0, 4.0));
        assert_eq!(r.clamp_point(v2(5.0, 1.0)), v2(5.0, 1.0));
    }

    #[test]
    fn test_sides_form_loop() {
        let sides = Rect::new(1.0, 1.0, 3.0, 2.0).sides();
        for i in 0..4 {
            assert_eq!(sides[i].end(), sides[(i + 1) % 4].start());
        }
        assert_eq!(sides[0].start(), v2(1.0, 1.0));
    }

    #[test]
    fn test_side_faces_card() {
        let rect = Rect::new(1.0, 1.0, 3.0, 2.0);
        assert_eq!(rect.side(Card::Right), Edge::new(4.0, 1.0, 4.0, 3.0));
        for &card in Card::values().iter() {
            let side = rect.side(card);
            let outward = side.midpoint() + Vec2::from(card);
            assert!(!rect.contains_point(outward));
            assert!(rect.contains_point(side.midpoint() - Vec2::from(card) * 0.5));
        }
    }

    #[test]
    fn test_bounding_circle() {
        let c = Rect::new(0.0, 0.0, 6.0, 8.0).bounding_circle();
        assert_eq!(c, Circle::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_foreign_round_trips() {
        let v = [1.5, -2.0, 3.25, 4.0];
        assert_eq!(<[f64; 4]>::from(Rect::from(v)), v);
        let p = PixelRect::new(-7, 3, 640, 480);
        assert_eq!(PixelRect::from(Rect::from(p)), p);
        assert_eq!(PixelRect::from(Rect::new(1.9, -1.9, 2.5, 3.0)), PixelRect::new(1, -1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1.0, 2.5, 3.0, 4.0).to_string(), "Rect: (1, 2.5, 3, 4)");
    }
}
