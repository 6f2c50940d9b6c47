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


//! Module containing the shape primitives and the tests between them.

mod card;
mod circle;
mod edge;
mod rect;
mod shape;
mod vec;

pub(crate) use self::card::Card;
pub use self::circle::*;
pub use self::edge::*;
pub use self::rect::*;
pub use self::shape::*;
pub use self::vec::*;
