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


use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector of `f64` components, used both for points and directions.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Vec2 {
    /// The x component.
    pub x: f64,
    /// The y component, growing downward in screen space.
    pub y: f64,
}

/// Shorthand for `Vec2::new(x, y)`.
#[inline]
pub fn v2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    /// Constructs a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::default()
    }

    /// Returns the unit vector pointing in the direction of `radians`,
    /// measured from the positive x axis.
    pub fn from_angle(radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(cos, sin)
    }

    /// Returns the squared length of the vector.
    pub fn len_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector.
    pub fn len(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns a unit vector in the same direction.
    ///
    /// Panics if the vector has zero length.
    pub fn normalize(&self) -> Vec2 {
        self.try_normalize()
            .unwrap_or_else(|| panic!("can only normalize vector if length is non-zero"))
    }

    /// Returns a unit vector in the same direction, or `None` for the zero vector.
    pub fn try_normalize(&self) -> Option<Vec2> {
        let len = self.len();
        if len > 0.0 {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Returns the vector rotated a quarter turn, `(-y, x)`.
    #[inline]
    pub fn perp(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dist_sq(&self, other: &Vec2) -> f64 {
        (*self - *other).len_sq()
    }

    pub fn dist(&self, other: &Vec2) -> f64 {
        (*self - *other).len()
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = f64;
    fn mul(self, rhs: Vec2) -> f64 {
        self.dot(&rhs)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalize() {
        assert_eq!(v2(3.0, -4.0).normalize(), v2(0.6, -0.8));
        assert_eq!(Vec2::zero().try_normalize(), None);
    }

    #[test]
    #[should_panic]
    fn test_normalize_zero() {
        Vec2::zero().normalize();
    }

    #[test]
    fn test_from_angle() {
        let v = Vec2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert_eq!(Vec2::from_angle(0.0), v2(1.0, 0.0));
    }

    #[test]
    fn test_products() {
        let a = v2(1.0, 2.0);
        let b = v2(3.0, -1.0);
        assert_eq!(a * b, 1.0);
        assert_eq!(a.cross(&b), -7.0);
        assert_eq!(a.perp(), v2(-2.0, 1.0));
        assert_eq!(a.perp() * a, 0.0);
    }
}
