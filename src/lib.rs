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


//! Discrete 2D overlap tests between axis-aligned rectangles, circles and edges.
//!
//! Shapes are plain values in screen space (y grows downward). The
//! [`Shape`](geom::Shape) enum wraps one primitive and dispatches the pairwise
//! tests in [`geom::contact`]:
//!
//! ```
//! use overlap2d::geom::{v2, Shape};
//!
//! let ball = Shape::circle(9.0, 5.0, 2.0);
//! let wall = Shape::rect(10.0, 0.0, 4.0, 20.0);
//! assert!(ball.overlaps(&wall));
//! let contact = ball.overlap_contact(&wall).unwrap();
//! assert_eq!(contact.normal, v2(-1.0, 0.0));
//! ```

pub mod geom;
mod float;
mod json;
mod util;

pub use crate::json::ShapeJsonError;
