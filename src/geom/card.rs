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


use crate::geom::{v2, Vec2};

/// The four outward directions of a rectangle's sides.
///
/// Directions are in screen space, where y grows downward, so `Top`
/// points toward negative y.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Card {
    /// Negative X direction.
    Left,

    /// Positive X direction.
    Right,

    /// Negative Y direction.
    Top,

    /// Positive Y direction.
    Bottom,
}

impl Card {
    /// Returns all directions, x axis first.
    ///
    /// Minimum searches over this list keep the first of equal candidates,
    /// so the x axis wins ties.
    #[inline]
    pub fn values() -> [Card; 4] {
        [Card::Left, Card::Right, Card::Top, Card::Bottom]
    }
}

impl From<Card> for Vec2 {
    fn from(card: Card) -> Vec2 {
        match card {
            Card::Left => v2(-1.0, 0.0),
            Card::Right => v2(1.0, 0.0),
            Card::Top => v2(0.0, -1.0),
            Card::Bottom => v2(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_point_along_axes() {
        let dirs: Vec<Vec2> = Card::values().iter().map(|&card| card.into()).collect();
        assert_eq!(dirs, vec![v2(-1.0, 0.0), v2(1.0, 0.0), v2(0.0, -1.0), v2(0.0, 1.0)]);
        for &dir in &dirs {
            assert_eq!(dir.len_sq(), 1.0);
        }
    }
}
