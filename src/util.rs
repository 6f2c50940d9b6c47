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


// Returns the real roots of `a*t^2 + b*t + c` in ascending order, or `None`
// if there are none. A double root is returned twice. Uses the cancellation
// free form of the quadratic formula.
pub fn quad_roots_ascending(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        return if b == 0.0 {
            None
        } else {
            let root = -c / b;
            Some((root, root))
        };
    }
    let determinant = b * b - 4.0 * a * c;
    if determinant < 0.0 {
        return None;
    }
    let q = -0.5 * (b + b.signum() * determinant.sqrt());
    if q == 0.0 {
        return Some((0.0, 0.0));
    }
    let (r1, r2) = (q / a, c / q);
    if r1 <= r2 {
        Some((r1, r2))
    } else {
        Some((r2, r1))
    }
}

// Returns the smallest extent `w` with `min + w >= max`, so that a box stored
// as a corner and a size still reaches `max` after rounding.
pub fn enclosing_span(min: f64, max: f64) -> f64 {
    let mut span = max - min;
    if !(span >= 0.0) {
        return span;
    }
    while min + span < max {
        span = f64::from_bits(span.abs().to_bits() + 1);
    }
    span
}

#[inline]
pub fn clamp(val: f64, min: f64, max: f64) -> f64 {
    val.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_roots_ascending() {
        assert_eq!(quad_roots_ascending(1.0, -3.0, 2.0), Some((1.0, 2.0)));
        assert_eq!(quad_roots_ascending(-1.0, 3.0, -2.0), Some((1.0, 2.0)));
        assert_eq!(quad_roots_ascending(1.0, -2.0, 1.0), Some((1.0, 1.0)));
        assert_eq!(quad_roots_ascending(0.0, 2.0, -1.0), Some((0.5, 0.5)));
        assert_eq!(quad_roots_ascending(2.0, 0.0, 0.0), Some((0.0, 0.0)));
        assert!(quad_roots_ascending(1.0, 1.0, 1.0).is_none());
        assert!(quad_roots_ascending(0.0, 0.0, 1.0).is_none());
        let (r1, r2) = quad_roots_ascending(1e-14, 2.0, -1.0).unwrap();
        assert!(r1 < r2);
        assert!((r2 - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_enclosing_span() {
        assert_eq!(enclosing_span(1.0, 5.0), 4.0);
        assert_eq!(enclosing_span(2.0, 2.0), 0.0);
        let (min, max) = (-31.1831464217752, 48.30571047624649);
        let span = enclosing_span(min, max);
        assert!(min + span >= max);
        assert!(span - (max - min) < 1e-12);
        assert!(enclosing_span(3.0, 1.0) < 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(clamp(3.0, 0.0, 2.0), 2.0);
        assert_eq!(clamp(1.5, 0.0, 2.0), 1.5);
    }
}
