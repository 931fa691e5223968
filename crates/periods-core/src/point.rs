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

//! # Discrete Points
//!
//! Periods are closed on both ends, so trimming one period by another needs
//! to step one unit past a bound: the day after an end, the integer before a
//! begin. `DiscretePoint` captures exactly that, plus the distance between
//! two points used to count the members of a period.

use chrono::NaiveDate;
use std::fmt::{Debug, Display};

/// An ordered point domain where every point has well-defined neighbours.
///
/// # Examples
///
/// ```rust
/// # use periods_core::DiscretePoint;
/// use chrono::NaiveDate;
///
/// let leap = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// assert_eq!(leap.successor(), NaiveDate::from_ymd_opt(2020, 3, 1));
/// assert_eq!(3u8.predecessor(), Some(2));
/// assert_eq!(u8::MAX.successor(), None);
/// ```
pub trait DiscretePoint: Copy + Ord + Debug + Display {
    /// The point immediately after `self`, or `None` at the top of the domain.
    fn successor(self) -> Option<Self>;

    /// The point immediately before `self`, or `None` at the bottom of the domain.
    fn predecessor(self) -> Option<Self>;

    /// The number of steps from `from` to `to`.
    ///
    /// Callers guarantee `from <= to`.
    fn steps_between(from: Self, to: Self) -> usize;
}

impl DiscretePoint for NaiveDate {
    #[inline]
    fn successor(self) -> Option<Self> {
        self.succ_opt()
    }

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.pred_opt()
    }

    #[inline]
    fn steps_between(from: Self, to: Self) -> usize {
        debug_assert!(from <= to, "called `steps_between` with from > to");
        usize::try_from(to.signed_duration_since(from).num_days()).unwrap_or(0)
    }
}

macro_rules! impl_discrete_point_for {
    ($t:ty) => {
        impl DiscretePoint for $t {
            #[inline]
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn predecessor(self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline]
            fn steps_between(from: Self, to: Self) -> usize {
                debug_assert!(from <= to, "called `steps_between` with from > to");
                usize::try_from(to.abs_diff(from)).unwrap_or(usize::MAX)
            }
        }
    };
}

impl_discrete_point_for!(i8);
impl_discrete_point_for!(u8);
impl_discrete_point_for!(i16);
impl_discrete_point_for!(u16);
impl_discrete_point_for!(i32);
impl_discrete_point_for!(u32);
impl_discrete_point_for!(i64);
impl_discrete_point_for!(u64);
impl_discrete_point_for!(i128);
impl_discrete_point_for!(u128);
impl_discrete_point_for!(isize);
impl_discrete_point_for!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_neighbours() {
        assert_eq!(date(2020, 1, 31).successor(), Some(date(2020, 2, 1)));
        assert_eq!(date(2020, 3, 1).predecessor(), Some(date(2020, 2, 29)));
        assert_eq!(date(2019, 3, 1).predecessor(), Some(date(2019, 2, 28)));
        assert_eq!(date(2020, 12, 31).successor(), Some(date(2021, 1, 1)));
    }

    #[test]
    fn test_date_domain_edges() {
        assert_eq!(NaiveDate::MAX.successor(), None);
        assert_eq!(NaiveDate::MIN.predecessor(), None);
    }

    #[test]
    fn test_date_steps_between() {
        assert_eq!(NaiveDate::steps_between(date(2020, 1, 1), date(2020, 1, 1)), 0);
        assert_eq!(NaiveDate::steps_between(date(2020, 1, 1), date(2020, 1, 31)), 30);
        // Leap year
        assert_eq!(NaiveDate::steps_between(date(2020, 1, 1), date(2021, 1, 1)), 366);
    }

    #[test]
    fn test_integer_neighbours() {
        assert_eq!(5i32.successor(), Some(6));
        assert_eq!(5i32.predecessor(), Some(4));
        assert_eq!(i32::MAX.successor(), None);
        assert_eq!(0u32.predecessor(), None);
    }

    #[test]
    fn test_integer_steps_between() {
        assert_eq!(i64::steps_between(-10, 10), 20);
        assert_eq!(u8::steps_between(0, 255), 255);
        assert_eq!(i8::steps_between(-128, 127), 255);
    }
}
