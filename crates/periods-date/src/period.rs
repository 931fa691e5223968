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

use crate::{day::IntoCalendarDay, iter::DateIter};
use chrono::NaiveDate;
use periods_core::{Fragments, Period, PeriodError, reduce};
use std::{
    hash::{Hash, Hasher},
    ops::{Add, BitAnd, Sub},
};

/// An inclusive range of calendar days `[begin, end]` carrying a payload.
///
/// Equality and hashing look at the bounds only; the payload and the
/// protect flag never take part. Comparisons, containment and the period
/// algebra come from the `Period` trait.
///
/// # Invariants
///
/// `begin <= end` always holds, so every period spans at least one day.
///
/// # Examples
///
/// ```rust
/// use periods_date::{DatePeriod, Period};
/// use chrono::NaiveDate;
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
/// let january = DatePeriod::new(day(1, 1), day(1, 31)).with_data("january");
/// let late = DatePeriod::new(day(1, 25), day(2, 29)).with_data("late");
///
/// assert!(january.crosses_leading(&late));
/// assert_eq!((&january + &late).to_vec(), vec![DatePeriod::new(day(1, 1), day(2, 29))]);
/// assert_eq!((&january - &late).to_vec(), vec![DatePeriod::new(day(1, 1), day(1, 24))]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::serde_impl::RawDatePeriod<T>"))]
pub struct DatePeriod<T = ()> {
    begin: NaiveDate,
    end: NaiveDate,
    data: T,
    protect_data: bool,
}

impl DatePeriod<()> {
    /// Creates a new period without payload.
    ///
    /// Both bounds are truncated to their calendar day.
    ///
    /// # Panics
    ///
    /// Panics if `begin` falls after `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use periods_date::{DatePeriod, Period};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// assert_eq!(DatePeriod::new(day, day).len(), 1);
    /// ```
    #[inline]
    pub fn new(begin: impl IntoCalendarDay, end: impl IntoCalendarDay) -> Self {
        let (begin, end) = (begin.into_calendar_day(), end.into_calendar_day());
        assert!(
            begin <= end,
            "Invalid period: begin {begin} must not fall after end {end}"
        );
        Self::new_unchecked(begin, end, ())
    }

    /// Creates a new period without payload if the bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `begin` falls after `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use periods_date::DatePeriod;
    /// use chrono::NaiveDate;
    ///
    /// let first = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let last = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
    /// assert!(DatePeriod::try_new(first, last).is_ok());
    /// assert!(DatePeriod::try_new(last, first).is_err());
    /// ```
    pub fn try_new(
        begin: impl IntoCalendarDay,
        end: impl IntoCalendarDay,
    ) -> Result<Self, PeriodError> {
        Self::try_from_parts(begin, end, (), false)
    }
}

impl<T> DatePeriod<T> {
    /// Creates a period from all of its parts if the bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `begin` falls after `end`.
    pub fn try_from_parts(
        begin: impl IntoCalendarDay,
        end: impl IntoCalendarDay,
        data: T,
        protect_data: bool,
    ) -> Result<Self, PeriodError> {
        let (begin, end) = (begin.into_calendar_day(), end.into_calendar_day());
        if begin > end {
            let err = PeriodError::invalid_range(begin, end);
            log::debug!("rejected period: {err}");
            return Err(err);
        }
        Ok(Self {
            begin,
            end,
            data,
            protect_data,
        })
    }

    /// Creates a period without checking the bound order in release builds.
    #[inline]
    pub(crate) fn new_unchecked(begin: NaiveDate, end: NaiveDate, data: T) -> Self {
        debug_assert!(
            begin <= end,
            "Invalid period: begin {begin} must not fall after end {end}"
        );
        Self {
            begin,
            end,
            data,
            protect_data: false,
        }
    }

    /// Replaces the payload, keeping the bounds and the protect flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use periods_date::{DatePeriod, Period};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let tagged = DatePeriod::new(day, day).with_data(42u32);
    /// assert_eq!(*tagged.data(), 42);
    /// ```
    #[inline]
    pub fn with_data<U>(self, data: U) -> DatePeriod<U> {
        DatePeriod {
            begin: self.begin,
            end: self.end,
            data,
            protect_data: self.protect_data,
        }
    }

    /// Sets whether this period's payload wins a containment union.
    #[inline]
    pub fn with_protect_data(self, protect_data: bool) -> Self {
        Self {
            protect_data,
            ..self
        }
    }

    /// Consumes the period and returns its payload.
    #[inline]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Creates an iterator over every day of the period, in ascending order.
    ///
    /// Each call starts over from `begin`.
    #[inline]
    pub fn iter(&self) -> DateIter {
        let len = usize::try_from((self.end - self.begin).num_days()).unwrap_or(0) + 1;
        DateIter::new(self.begin, self.end, len)
    }
}

impl<T: Clone> DatePeriod<T> {
    /// Subtracts every period of `subtrahends` from every period of
    /// `minuends` until no overlap is left.
    ///
    /// See `periods_core::reduce::circle_sub`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use periods_date::DatePeriod;
    /// use chrono::NaiveDate;
    ///
    /// let day = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
    /// let rest = DatePeriod::circle_sub(
    ///     &[DatePeriod::new(day(2, 1), day(7, 31))],
    ///     &[
    ///         DatePeriod::new(day(2, 15), day(2, 25)),
    ///         DatePeriod::new(day(1, 1), day(2, 14)),
    ///         DatePeriod::new(day(4, 1), day(4, 20)),
    ///         DatePeriod::new(day(3, 1), day(4, 5)),
    ///     ],
    /// );
    /// assert_eq!(
    ///     rest,
    ///     vec![
    ///         DatePeriod::new(day(2, 26), day(2, 29)),
    ///         DatePeriod::new(day(4, 21), day(7, 31)),
    ///     ]
    /// );
    /// ```
    pub fn circle_sub<U: Clone>(minuends: &[Self], subtrahends: &[DatePeriod<U>]) -> Vec<Self> {
        reduce::circle_sub(minuends, subtrahends)
    }

    /// Intersects every period of `left` with every period of `right`.
    ///
    /// See `periods_core::reduce::circle_crossing`.
    pub fn circle_crossing<U: Clone>(left: &[Self], right: &[DatePeriod<U>]) -> Vec<Self> {
        reduce::circle_crossing(left, right)
    }

    /// Unites every period of `left` with every period of `right`.
    ///
    /// See `periods_core::reduce::circle_add`.
    pub fn circle_add(left: &[Self], right: &[Self]) -> Vec<Self> {
        reduce::circle_add(left, right)
    }
}

impl<T: Clone> Period for DatePeriod<T> {
    type Point = NaiveDate;
    type Data = T;

    #[inline]
    fn begin(&self) -> NaiveDate {
        self.begin
    }

    #[inline]
    fn end(&self) -> NaiveDate {
        self.end
    }

    #[inline]
    fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    fn protect_data(&self) -> bool {
        self.protect_data
    }

    #[inline]
    fn fragment(&self, begin: NaiveDate, end: NaiveDate) -> Self {
        Self::new_unchecked(begin, end, self.data.clone())
    }

    #[inline]
    fn with_payload(&self, data: T) -> Self {
        Self {
            begin: self.begin,
            end: self.end,
            data,
            protect_data: self.protect_data,
        }
    }
}

impl<T, U> PartialEq<DatePeriod<U>> for DatePeriod<T> {
    #[inline]
    fn eq(&self, other: &DatePeriod<U>) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl<T> Eq for DatePeriod<T> {}

/// A period never equals a single date.
impl<T> PartialEq<NaiveDate> for DatePeriod<T> {
    #[inline]
    fn eq(&self, _: &NaiveDate) -> bool {
        false
    }
}

impl<T> PartialEq<DatePeriod<T>> for NaiveDate {
    #[inline]
    fn eq(&self, _: &DatePeriod<T>) -> bool {
        false
    }
}

impl<T> Hash for DatePeriod<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.begin.hash(state);
        self.end.hash(state);
    }
}

impl<T: Clone> Add for &DatePeriod<T> {
    type Output = Fragments<DatePeriod<T>>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Clone, U: Clone> Sub<&DatePeriod<U>> for &DatePeriod<T> {
    type Output = Fragments<DatePeriod<T>>;

    #[inline]
    fn sub(self, rhs: &DatePeriod<U>) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Clone, U: Clone> BitAnd<&DatePeriod<U>> for &DatePeriod<T> {
    type Output = Option<DatePeriod<T>>;

    #[inline]
    fn bitand(self, rhs: &DatePeriod<U>) -> Self::Output {
        self.crossing(rhs)
    }
}

impl<T> IntoIterator for &DatePeriod<T> {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DatePeriod<T> {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(b: NaiveDate, e: NaiveDate) -> DatePeriod {
        DatePeriod::new(b, e)
    }

    #[test]
    fn test_construction_valid() {
        let p = period(date(2020, 1, 1), date(2020, 1, 25));
        assert_eq!(p.begin(), date(2020, 1, 1));
        assert_eq!(p.end(), date(2020, 1, 25));
        assert_eq!(p.len(), 25);
        assert!(!p.protect_data());
    }

    #[test]
    fn test_construction_single_day() {
        let p = period(date(2020, 1, 1), date(2020, 1, 1));
        assert_eq!(p.len(), 1);
        assert!(p.contains_period(&p));
    }

    #[test]
    fn test_try_new() {
        assert!(DatePeriod::try_new(date(2020, 1, 1), date(2020, 1, 2)).is_ok());
        assert!(DatePeriod::try_new(date(2020, 1, 1), date(2020, 1, 1)).is_ok());

        let err = DatePeriod::try_new(date(2020, 1, 2), date(2020, 1, 1)).unwrap_err();
        assert_eq!(err, PeriodError::invalid_range("2020-01-02", "2020-01-01"));
    }

    #[test]
    #[should_panic(expected = "Invalid period")]
    fn test_new_panic() {
        DatePeriod::new(date(2020, 1, 2), date(2020, 1, 1));
    }

    #[test]
    fn test_construction_truncates_time() {
        let begin = date(2020, 1, 1).and_hms_opt(18, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 6, 0, 0).unwrap();

        // Same calendar day even though the end instant is earlier
        let p = DatePeriod::try_new(begin, end).unwrap();
        assert_eq!(p.begin(), date(2020, 1, 1));
        assert_eq!(p.end(), date(2020, 1, 1));
    }

    #[test]
    fn test_builders() {
        let p = period(date(2020, 1, 1), date(2020, 1, 31))
            .with_data(vec![1, 2, 3])
            .with_protect_data(true);
        assert_eq!(p.data(), &vec![1, 2, 3]);
        assert!(p.protect_data());

        let relabelled = p.clone().with_data("label");
        assert_eq!(*relabelled.data(), "label");
        assert!(relabelled.protect_data());
        assert_eq!(relabelled, p);

        assert_eq!(p.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn test_with_payload_keeps_flag() {
        let p = period(date(2020, 1, 1), date(2020, 1, 31))
            .with_data("a")
            .with_protect_data(true);
        let q = p.with_payload("b");
        assert_eq!(*q.data(), "b");
        assert!(q.protect_data());
        assert_eq!(q, p);
    }

    #[test]
    fn test_equality_ignores_payload() {
        let a = period(date(2020, 1, 1), date(2020, 1, 31)).with_data("a");
        let b = period(date(2020, 1, 1), date(2020, 1, 31))
            .with_data(7u8)
            .with_protect_data(true);
        let c = period(date(2020, 1, 1), date(2020, 1, 30)).with_data("a");

        assert!(a == b);
        assert!(a != c);
        assert!(!(a != b));
    }

    #[test]
    fn test_equality_with_date() {
        let p = period(date(2020, 1, 1), date(2020, 1, 1));
        assert!(p != date(2020, 1, 1));
        assert!(!(p == date(2020, 1, 1)));
        assert!(date(2020, 1, 1) != p);
    }

    #[test]
    fn test_hash_ignores_payload() {
        let mut set = HashSet::new();
        set.insert(period(date(2020, 1, 1), date(2020, 1, 31)).with_data("a"));
        set.insert(period(date(2020, 1, 1), date(2020, 1, 31)).with_data("b"));
        set.insert(period(date(2020, 2, 1), date(2020, 2, 29)).with_data("c"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_operators() {
        let a = period(date(2020, 1, 1), date(2020, 1, 31)).with_data("a");
        let b = period(date(2020, 1, 25), date(2020, 2, 29)).with_data("b");

        let sum = &a + &b;
        assert_eq!(sum.to_vec(), vec![period(date(2020, 1, 1), date(2020, 2, 29))]);
        assert_eq!(*sum[0].data(), "a");

        let diff = &b - &a;
        assert_eq!(diff.to_vec(), vec![period(date(2020, 2, 1), date(2020, 2, 29))]);
        assert_eq!(*diff[0].data(), "b");

        let cross = (&a & &b).unwrap();
        assert_eq!(cross, period(date(2020, 1, 25), date(2020, 1, 31)));
        assert_eq!(*cross.data(), "a");
    }

    #[test]
    fn test_iteration_restarts() {
        let p = period(date(2020, 1, 3), date(2020, 1, 6));
        let first: Vec<_> = p.iter().collect();
        let second: Vec<_> = (&p).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), p.len());
        assert_eq!(p.iter().rev().next(), Some(date(2020, 1, 6)));

        let mut count = 0;
        for day in p {
            assert_eq!(day, date(2020, 1, 3 + count));
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_leap_year_length() {
        assert_eq!(period(date(2020, 2, 1), date(2020, 2, 29)).len(), 29);
        assert_eq!(period(date(2020, 1, 1), date(2020, 12, 31)).len(), 366);
        assert_eq!(period(date(2019, 1, 1), date(2019, 12, 31)).len(), 365);
    }

    #[test]
    fn test_circle_associated_functions() {
        let year = vec![period(date(2020, 1, 1), date(2020, 12, 31)).with_data("year")];
        let holidays = vec![
            period(date(2020, 12, 24), date(2020, 12, 31)).with_data("xmas"),
            period(date(2020, 1, 1), date(2020, 1, 6)).with_data("new year"),
        ];

        let working = DatePeriod::circle_sub(&year, &holidays);
        assert_eq!(
            working,
            vec![period(date(2020, 1, 7), date(2020, 12, 23))]
        );
        assert_eq!(*working[0].data(), "year");

        let off = DatePeriod::circle_crossing(&year, &holidays);
        assert_eq!(off, holidays);
        assert!(off.iter().all(|p| *p.data() == "year"));

        let sum = DatePeriod::circle_add(&holidays, &year);
        assert_eq!(sum, vec![year[0].clone(), year[0].clone()]);
        assert!(sum.iter().all(|p| *p.data() == "year"));
    }
}
