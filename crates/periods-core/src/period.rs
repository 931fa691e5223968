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

//! # Period Contract and Algebra
//!
//! The `Period` trait describes a closed range `[begin, end]` over a
//! `DiscretePoint` domain that carries a payload. Implementors provide the
//! bounds, the payload, and two builders; everything else is provided:
//!
//! - Predicates: containment of points and periods, crossing (sharing at
//!   least one point), strict ordering without contact (`precedes`,
//!   `succeeds`) and proper crossing from the left or the right
//!   (`crosses_leading`, `crosses_trailing`).
//! - Classification: `relation` sorts any pair into exactly one `Relation`.
//! - Algebra: `crossing`, `union`, `difference` and `split`, returning at
//!   most three `Fragments`.
//!
//! ## Payload rules
//!
//! Fragments built by the algebra always carry the payload of the receiver
//! (`self`) and are never protected. The one exception is `union` when
//! `self` lies strictly inside `other`: the result is `other`, and if `self`
//! protects its data, `other` is rebuilt with `self`'s payload.

use crate::{error::PeriodError, point::DiscretePoint};
use smallvec::{SmallVec, smallvec};

/// The result of a period operation: between zero and three periods in
/// ascending order of their begin (argument order for a disjoint union).
pub type Fragments<P> = SmallVec<[P; 3]>;

/// How two crossing or non-crossing periods are positioned relative to
/// each other, seen from the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The periods share no point.
    Disjoint,
    /// Both bounds coincide.
    Equal,
    /// The other period lies inside the receiver and differs from it.
    Contains,
    /// The receiver lies inside the other period and differs from it.
    Within,
    /// The periods properly cross and the receiver ends first.
    CrossesLeading,
    /// The periods properly cross and the receiver ends last.
    CrossesTrailing,
}

/// A closed, non-empty range `[begin, end]` of discrete points carrying a
/// payload.
///
/// # Examples
///
/// ```rust
/// use periods_core::{Period, Relation};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Shift {
///     first: u32,
///     last: u32,
///     crew: &'static str,
/// }
///
/// impl Period for Shift {
///     type Point = u32;
///     type Data = &'static str;
///
///     fn begin(&self) -> u32 { self.first }
///     fn end(&self) -> u32 { self.last }
///     fn data(&self) -> &&'static str { &self.crew }
///     fn protect_data(&self) -> bool { false }
///     fn fragment(&self, begin: u32, end: u32) -> Self {
///         Shift { first: begin, last: end, crew: self.crew }
///     }
///     fn with_payload(&self, crew: &'static str) -> Self {
///         Shift { crew, ..self.clone() }
///     }
/// }
///
/// let day = Shift { first: 1, last: 10, crew: "day" };
/// let night = Shift { first: 4, last: 6, crew: "night" };
///
/// assert_eq!(day.relation(&night), Relation::Contains);
/// let rest = day.difference(&night);
/// assert_eq!(rest.len(), 2);
/// assert_eq!((rest[0].first, rest[0].last), (1, 3));
/// assert_eq!((rest[1].first, rest[1].last), (7, 10));
/// assert_eq!(rest[1].crew, "day");
/// ```
#[allow(clippy::len_without_is_empty)]
pub trait Period: Clone {
    /// The point domain of the bounds.
    type Point: DiscretePoint;
    /// The opaque payload propagated by the algebra.
    type Data: Clone;

    /// Returns the inclusive begin bound.
    fn begin(&self) -> Self::Point;

    /// Returns the inclusive end bound.
    fn end(&self) -> Self::Point;

    /// Returns the payload.
    fn data(&self) -> &Self::Data;

    /// Returns `true` if this period's payload wins a containment union.
    fn protect_data(&self) -> bool;

    /// Builds the unprotected period `[begin, end]` carrying this period's
    /// payload.
    ///
    /// The algebra only calls this with `begin <= end`.
    fn fragment(&self, begin: Self::Point, end: Self::Point) -> Self;

    /// Builds a copy of this period whose payload is replaced by `data`.
    ///
    /// Bounds and the protect flag are kept.
    fn with_payload(&self, data: Self::Data) -> Self;

    /// Builds a copy of this period carrying `donor`'s payload.
    #[inline]
    fn with_payload_of(&self, donor: &Self) -> Self {
        self.with_payload(donor.data().clone())
    }

    /// Returns the number of points in the period, bounds included.
    #[inline]
    fn len(&self) -> usize {
        Self::Point::steps_between(self.begin(), self.end()).saturating_add(1)
    }

    /// Returns `true` if `point` lies within `[begin, end]`.
    #[inline]
    fn contains_point(&self, point: Self::Point) -> bool {
        self.begin() <= point && point <= self.end()
    }

    /// Returns `true` if `other` is a subset of this period.
    ///
    /// Equal periods contain each other.
    #[inline]
    fn contains_period<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        self.contains_point(other.begin()) && self.contains_point(other.end())
    }

    /// Returns `true` if both bounds coincide with `other`'s.
    #[inline]
    fn same_range<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        self.begin() == other.begin() && self.end() == other.end()
    }

    /// Returns `true` if the periods share at least one point.
    #[inline]
    fn is_crossing<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        self.contains_point(other.begin())
            || self.contains_point(other.end())
            || other.contains_point(self.begin())
            || other.contains_point(self.end())
    }

    /// Returns `true` if this period ends before `point`.
    #[inline]
    fn precedes_point(&self, point: Self::Point) -> bool {
        self.end() < point
    }

    /// Returns `true` if this period ends before `other` begins.
    ///
    /// Periods that cross or contain one another never precede each other.
    #[inline]
    fn precedes<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        if self.contains_period(other) || self.is_crossing(other) {
            return false;
        }
        self.end() < other.begin()
    }

    /// Returns `true` if this period begins after `point`.
    #[inline]
    fn succeeds_point(&self, point: Self::Point) -> bool {
        point < self.begin()
    }

    /// Returns `true` if this period begins after `other` ends.
    ///
    /// Periods that cross or contain one another never succeed each other.
    #[inline]
    fn succeeds<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        if other.contains_period(self) || self.is_crossing(other) {
            return false;
        }
        other.end() < self.begin()
    }

    /// Returns `true` if the periods properly cross and this one ends first.
    ///
    /// False for disjoint periods, equal periods, and whenever one contains
    /// the other.
    #[inline]
    fn crosses_leading<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        if !self.is_crossing(other) {
            return false;
        }
        if self.same_range(other) || other.contains_period(self) || self.contains_period(other) {
            return false;
        }
        self.end() <= other.end()
    }

    /// Returns `true` if the periods properly cross and this one ends last.
    ///
    /// False for disjoint periods and whenever one contains the other.
    #[inline]
    fn crosses_trailing<Q>(&self, other: &Q) -> bool
    where
        Q: Period<Point = Self::Point>,
    {
        if !self.is_crossing(other) {
            return false;
        }
        if other.contains_period(self) || self.contains_period(other) {
            return false;
        }
        self.end() > other.end()
    }

    /// Classifies how `other` is positioned relative to this period.
    fn relation<Q>(&self, other: &Q) -> Relation
    where
        Q: Period<Point = Self::Point>,
    {
        if !self.is_crossing(other) {
            Relation::Disjoint
        } else if self.same_range(other) {
            Relation::Equal
        } else if self.contains_period(other) {
            Relation::Contains
        } else if other.contains_period(self) {
            Relation::Within
        } else if self.end() <= other.end() {
            Relation::CrossesLeading
        } else {
            Relation::CrossesTrailing
        }
    }

    /// Returns the shared part of both periods carrying this period's
    /// payload, or `None` if they do not cross.
    fn crossing<Q>(&self, other: &Q) -> Option<Self>
    where
        Q: Period<Point = Self::Point>,
    {
        if !self.is_crossing(other) {
            return None;
        }
        let begin = self.begin().max(other.begin());
        let end = self.end().min(other.end());
        Some(self.fragment(begin, end))
    }

    /// Like `crossing`, but a missing intersection is an error.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::NoIntersection` if the periods do not cross.
    fn must_crossing<Q>(&self, other: &Q) -> Result<Self, PeriodError>
    where
        Q: Period<Point = Self::Point>,
    {
        self.crossing(other).ok_or_else(|| {
            let err = PeriodError::no_intersection(bounds(self), bounds(other));
            log::debug!("must_crossing failed: {err}");
            err
        })
    }

    /// Unites this period with `other`.
    ///
    /// - Disjoint periods are returned unchanged, in argument order.
    /// - If `other` is a subset of this period, this period is returned.
    /// - If this period lies strictly inside `other`, `other` is returned,
    ///   rebuilt with this period's payload when this period protects it.
    /// - Properly crossing periods merge into one period carrying this
    ///   period's payload.
    fn union(&self, other: &Self) -> Fragments<Self> {
        match self.relation(other) {
            Relation::Disjoint => smallvec![self.clone(), other.clone()],
            Relation::Equal | Relation::Contains => smallvec![self.clone()],
            Relation::Within if self.protect_data() => smallvec![other.with_payload_of(self)],
            Relation::Within => smallvec![other.clone()],
            Relation::CrossesLeading => smallvec![self.fragment(self.begin(), other.end())],
            Relation::CrossesTrailing => smallvec![self.fragment(other.begin(), self.end())],
        }
    }

    /// Removes every point of `other` from this period.
    ///
    /// Returns this period unchanged if the periods are disjoint, nothing
    /// if `other` covers it, and otherwise the one or two remainders in
    /// ascending order.
    fn difference<Q>(&self, other: &Q) -> Fragments<Self>
    where
        Q: Period<Point = Self::Point>,
    {
        match self.relation(other) {
            Relation::Disjoint => smallvec![self.clone()],
            Relation::Equal | Relation::Within => SmallVec::new(),
            Relation::Contains => {
                let mut rest = SmallVec::new();
                if self.begin() != other.begin() {
                    rest.push(self.fragment(self.begin(), before(other.begin())));
                }
                if self.end() != other.end() {
                    rest.push(self.fragment(after(other.end()), self.end()));
                }
                rest
            }
            Relation::CrossesLeading => {
                smallvec![self.fragment(self.begin(), before(other.begin()))]
            }
            Relation::CrossesTrailing => {
                smallvec![self.fragment(after(other.end()), self.end())]
            }
        }
    }

    /// Cuts this period at `other`'s bounds.
    ///
    /// Unlike `difference`, the shared part is kept. When the periods
    /// properly cross, the outer fragment on `other`'s side spans `other`'s
    /// remainder, so the fragments partition the union of both periods.
    /// Returns this period unchanged if the periods are disjoint, equal, or
    /// this period lies inside `other`.
    fn split<Q>(&self, other: &Q) -> Fragments<Self>
    where
        Q: Period<Point = Self::Point>,
    {
        match self.relation(other) {
            Relation::Disjoint | Relation::Equal | Relation::Within => smallvec![self.clone()],
            Relation::CrossesLeading => {
                let (shared_begin, shared_end) = (other.begin(), self.end());
                smallvec![
                    self.fragment(self.begin(), before(shared_begin)),
                    self.fragment(shared_begin, shared_end),
                    self.fragment(after(shared_end), other.end()),
                ]
            }
            Relation::CrossesTrailing => {
                let (shared_begin, shared_end) = (self.begin(), other.end());
                smallvec![
                    self.fragment(other.begin(), before(shared_begin)),
                    self.fragment(shared_begin, shared_end),
                    self.fragment(after(shared_end), self.end()),
                ]
            }
            Relation::Contains => {
                let mut parts = SmallVec::new();
                if self.begin() != other.begin() {
                    parts.push(self.fragment(self.begin(), before(other.begin())));
                }
                parts.push(self.fragment(other.begin(), other.end()));
                if self.end() != other.end() {
                    parts.push(self.fragment(after(other.end()), self.end()));
                }
                parts
            }
        }
    }
}

/// The point right after a bound that is known to have a successor.
#[inline]
fn after<T: DiscretePoint>(point: T) -> T {
    point
        .successor()
        .expect("period algebra stepped past the top of the point domain")
}

/// The point right before a bound that is known to have a predecessor.
#[inline]
fn before<T: DiscretePoint>(point: T) -> T {
    point
        .predecessor()
        .expect("period algebra stepped past the bottom of the point domain")
}

fn bounds<P: Period>(period: &P) -> String {
    format!("[{}, {}]", period.begin(), period.end())
}
