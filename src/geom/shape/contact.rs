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


// Pairwise overlap tests between the primitive shapes.
//
// Every pair has a boolean test and a `_contact` variant that also resolves
// where the shapes touch. The contact variant returns `Some` exactly when the
// boolean test passes. For a pair `(a, b)` the contact normal is the unit
// surface normal of `b` pointing toward `a`, which is the direction `a` would
// move to separate from `b`.

use crate::float::n64;
use crate::geom::{v2, Card, Circle, Edge, Rect, Vec2};
use crate::util::quad_roots_ascending;

/// The point where two shapes touch, together with the surface normal there.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Contact {
    /// The point of contact.
    pub point: Vec2,
    /// Unit normal pointing from the second shape toward the first.
    pub normal: Vec2,
}

impl Contact {
    #[inline]
    pub fn new(point: Vec2, normal: Vec2) -> Contact {
        Contact { point, normal }
    }

    /// Returns the same contact with the normal reversed.
    pub fn flip(self) -> Contact {
        Contact::new(self.point, -self.normal)
    }
}

/// The exact intersection of two circle outlines.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum CircleIntersection {
    /// The circles are identical, so their outlines share every point.
    Coincident,
    /// The outlines do not meet: the circles are apart or one is nested in the other.
    Disjoint,
    /// The outlines touch at a single point.
    Tangent(Vec2),
    /// The outlines cross at two distinct points.
    Secant(Vec2, Vec2),
}

impl CircleIntersection {
    /// Returns the number of intersection points, or `-1` for coincident circles.
    pub fn count(&self) -> i32 {
        match *self {
            CircleIntersection::Coincident => -1,
            CircleIntersection::Disjoint => 0,
            CircleIntersection::Tangent(_) => 1,
            CircleIntersection::Secant(_, _) => 2,
        }
    }

    /// Returns both intersection points, repeating the point of a tangency.
    pub fn points(&self) -> Option<(Vec2, Vec2)> {
        match *self {
            CircleIntersection::Tangent(p) => Some((p, p)),
            CircleIntersection::Secant(p, q) => Some((p, q)),
            _ => None,
        }
    }
}

/// Returns `true` if the interiors of the rectangles overlap.
///
/// Rectangles that only share an edge do not overlap.
pub fn rect_rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// Resolves a rect-rect overlap along the axis of least penetration.
///
/// The contact point lies on the side of `b` facing the normal, centered on the
/// overlap along that side. On equal penetration the x axis is preferred.
pub fn rect_rect_contact(a: &Rect, b: &Rect) -> Option<Contact> {
    if !rect_rect_overlap(a, b) {
        return None;
    }
    let card = min_card(|card| penetration(a, b, card));
    let mid_x = 0.5 * (a.left().max(b.left()) + a.right().min(b.right()));
    let mid_y = 0.5 * (a.top().max(b.top()) + a.bottom().min(b.bottom()));
    let point = match card {
        Card::Left => v2(b.left(), mid_y),
        Card::Right => v2(b.right(), mid_y),
        Card::Top => v2(mid_x, b.top()),
        Card::Bottom => v2(mid_x, b.bottom()),
    };
    Some(Contact::new(point, card.into()))
}

// Distance `a` must travel toward `card` to stop overlapping `b`.
fn penetration(a: &Rect, b: &Rect, card: Card) -> f64 {
    match card {
        Card::Left => a.right() - b.left(),
        Card::Right => b.right() - a.left(),
        Card::Top => a.bottom() - b.top(),
        Card::Bottom => b.bottom() - a.top(),
    }
}

fn min_card<F: Fn(Card) -> f64>(depth: F) -> Card {
    Card::values()
        .iter()
        .cloned()
        .min_by_key(|&card| n64(depth(card)))
        .unwrap_or(Card::Left)
}

/// Returns `true` if the circles overlap. Tangent circles do not overlap.
pub fn circle_circle_overlap(a: &Circle, b: &Circle) -> bool {
    a.center().dist(&b.center()) < a.r + b.r
}

/// Resolves a circle-circle overlap.
///
/// The contact point lies on the line between the centers, `a.r` away from the
/// center of `a`. Concentric circles use the normal `(1, 0)`.
pub fn circle_circle_contact(a: &Circle, b: &Circle) -> Option<Contact> {
    if !circle_circle_overlap(a, b) {
        return None;
    }
    let normal = (a.center() - b.center())
        .try_normalize()
        .unwrap_or_else(|| v2(1.0, 0.0));
    Some(Contact::new(a.center() - normal * a.r, normal))
}

/// Computes the points where the outlines of two circles cross.
///
/// Tangency is decided by exact floating point comparison of the center
/// distance against the sum and difference of the radii.
pub fn circle_intersect_circle(a: &Circle, b: &Circle) -> CircleIntersection {
    if a == b {
        return CircleIntersection::Coincident;
    }
    let offset = b.center() - a.center();
    let dist = offset.len();
    let (outer, inner) = (a.r + b.r, (a.r - b.r).abs());
    if dist > outer || dist < inner || dist == 0.0 {
        return CircleIntersection::Disjoint;
    }
    let dir = offset * (1.0 / dist);
    // distance from the center of `a` to the chord through both points
    let along = (dist * dist + a.r * a.r - b.r * b.r) / (2.0 * dist);
    let mid = a.center() + dir * along;
    if dist == outer || dist == inner {
        return CircleIntersection::Tangent(mid);
    }
    let half_chord = (a.r * a.r - along * along).max(0.0).sqrt();
    let offset = dir.perp() * half_chord;
    CircleIntersection::Secant(mid + offset, mid - offset)
}

/// Returns `true` if the circle touches or overlaps the rectangle.
pub fn circle_rect_overlap(a: &Circle, b: &Rect) -> bool {
    b.clamp_point(a.center()).dist(&a.center()) <= a.r
}

/// Resolves a circle-rect overlap.
///
/// The contact is the point of the rectangle nearest the circle center. When
/// the center lies within the rectangle, the contact is instead projected onto
/// the nearest side and the normal is that side's outward direction.
pub fn circle_rect_contact(a: &Circle, b: &Rect) -> Option<Contact> {
    let center = a.center();
    let nearest = b.clamp_point(center);
    if nearest.dist(&center) > a.r {
        return None;
    }
    Some(match (center - nearest).try_normalize() {
        Some(normal) => Contact::new(nearest, normal),
        None => inner_point_contact(b, center),
    })
}

fn inner_point_contact(rect: &Rect, p: Vec2) -> Contact {
    let card = min_card(|card| match card {
        Card::Left => p.x - rect.left(),
        Card::Right => rect.right() - p.x,
        Card::Top => p.y - rect.top(),
        Card::Bottom => rect.bottom() - p.y,
    });
    let point = match card {
        Card::Left => v2(rect.left(), p.y),
        Card::Right => v2(rect.right(), p.y),
        Card::Top => v2(p.x, rect.top()),
        Card::Bottom => v2(p.x, rect.bottom()),
    };
    Contact::new(point, card.into())
}

/// Returns `true` if the edges cross or touch.
///
/// Parallel edges never intersect, even when collinear and overlapping.
/// Zero-length edges count as parallel to everything.
pub fn edge_edge_overlap(a: &Edge, b: &Edge) -> bool {
    edge_edge_param(a, b).is_some()
}

/// Resolves an edge-edge intersection.
///
/// The normal is perpendicular to `b`, on the side of `b` where `a` starts.
pub fn edge_edge_contact(a: &Edge, b: &Edge) -> Option<Contact> {
    let t = edge_edge_param(a, b)?;
    Some(Contact::new(a.start() + a.dir() * t, side_normal(b, a)))
}

// Solves `a.start + t*a.dir == b.start + u*b.dir`, returning `t` when both
// parameters lie in [0, 1].
fn edge_edge_param(a: &Edge, b: &Edge) -> Option<f64> {
    let (r, s) = (a.dir(), b.dir());
    let denom = r.cross(&s);
    if denom == 0.0 {
        return None;
    }
    let qp = b.start() - a.start();
    let t = qp.cross(&s) / denom;
    let u = qp.cross(&r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

// Unit normal of `b` on the side holding the start of `a`. If the start lies on
// the line through `b`, the side away from the end of `a` is used.
// Points from `b` toward `a`, matching the other pairs, not away from `a`.
fn side_normal(b: &Edge, a: &Edge) -> Vec2 {
    let normal = b.dir().perp().normalize();
    let side = (a.start() - b.start()) * normal;
    if side > 0.0 || (side == 0.0 && (a.end() - b.start()) * normal < 0.0) {
        normal
    } else {
        -normal
    }
}

/// Returns `true` if the edge crosses the boundary of the rectangle or lies within it.
pub fn edge_rect_overlap(a: &Edge, b: &Rect) -> bool {
    b.contains_point(a.start())
        || b.contains_point(a.end())
        || b.sides().iter().any(|side| edge_edge_overlap(a, side))
}

/// Resolves an edge-rect intersection.
///
/// Of the rectangle sides the edge crosses, the one crossed nearest the start of
/// the edge gives the contact point, and its outward direction the normal. An
/// edge that crosses no side but has an endpoint within the rectangle contacts
/// at that endpoint, with the outward normal of the nearest side.
pub fn edge_rect_contact(a: &Edge, b: &Rect) -> Option<Contact> {
    let crossing = Card::values()
        .iter()
        .filter_map(|&card| edge_edge_param(a, &b.side(card)).map(|t| (t, card)))
        .min_by_key(|&(t, _)| n64(t));
    if let Some((t, card)) = crossing {
        return Some(Contact::new(a.start() + a.dir() * t, card.into()));
    }
    [a.start(), a.end()]
        .iter()
        .cloned()
        .find(|&p| b.contains_point(p))
        .map(|p| inner_point_contact(b, p))
}

/// Returns `true` if the edge touches or enters the circle.
pub fn edge_circle_overlap(a: &Edge, b: &Circle) -> bool {
    a.closest_point(b.center()).dist(&b.center()) <= b.r
}

/// Resolves an edge-circle intersection.
///
/// The contact is where the edge first meets the circle outline, travelling
/// from its start. An edge lying wholly within the circle contacts at its point
/// nearest the center. The normal is the radius direction at the contact.
pub fn edge_circle_contact(a: &Edge, b: &Circle) -> Option<Contact> {
    let center = b.center();
    let closest = a.closest_point(center);
    if closest.dist(&center) > b.r {
        return None;
    }
    let dir = a.dir();
    let from_center = a.start() - center;
    let crossing = quad_roots_ascending(
        dir.len_sq(),
        2.0 * (from_center * dir),
        from_center.len_sq() - b.r * b.r,
    )
    .and_then(|(t1, t2)| [t1, t2].iter().cloned().find(|t| (0.0..=1.0).contains(t)));
    let point = match crossing {
        Some(t) => a.start() + dir * t,
        None => closest,
    };
    let normal = (point - center)
        .try_normalize()
        .or_else(|| dir.perp().try_normalize())
        .unwrap_or_else(|| v2(1.0, 0.0));
    Some(Contact::new(point, normal))
}
