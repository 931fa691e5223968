// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Periods Core
//!
//! Foundational contract and algebra for inclusive, discrete periods. A
//! period is a closed range `[begin, end]` over a stepped point domain
//! (calendar days, integers) that carries an opaque payload and a
//! "protect data" flag deciding which payload survives a containment union.
//!
//! ## Modules
//!
//! - `point`: The `DiscretePoint` trait: ordered points with a successor,
//!   a predecessor and a step distance. Implemented for `chrono::NaiveDate`
//!   and the primitive integers.
//! - `period`: The `Period` capability trait. Implementors supply bounds,
//!   payload access and two builders; every comparison (containment,
//!   crossing, strict ordering, leading/trailing crossing), the `Relation`
//!   classifier and the algebra (crossing, union, difference, split) are
//!   provided methods.
//! - `reduce`: Circular reductions of one sequence of periods against
//!   another (`circle_sub`, `circle_crossing`, `circle_add`) plus ordering
//!   helpers.
//! - `error`: The `PeriodError` type shared by every crate of the workspace.
//!
//! ## Purpose
//!
//! Keeping the algebra generic over the point domain lets the edge-case
//! semantics (touching by one step, single-point periods, payload
//! propagation) live in one place, while concrete realizations such as
//! calendar-date periods only decide how they are built and displayed.

pub mod error;
pub mod period;
pub mod point;
pub mod reduce;

pub use error::PeriodError;
pub use period::{Fragments, Period, Relation};
pub use point::DiscretePoint;
