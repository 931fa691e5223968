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

//! Calendar-day truncation for period bounds.
//!
//! Periods have day granularity. Any date-like value handed to a
//! constructor is reduced to its calendar date first; time of day is
//! dropped and zoned timestamps use the date in their own time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A value that denotes a calendar day.
///
/// # Examples
///
/// ```rust
/// # use periods_date::IntoCalendarDay;
/// use chrono::NaiveDate;
///
/// let noon = NaiveDate::from_ymd_opt(2020, 1, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert_eq!(noon.into_calendar_day(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
/// ```
pub trait IntoCalendarDay {
    /// Returns the calendar day of `self`.
    fn into_calendar_day(self) -> NaiveDate;
}

impl IntoCalendarDay for NaiveDate {
    #[inline]
    fn into_calendar_day(self) -> NaiveDate {
        self
    }
}

impl IntoCalendarDay for &NaiveDate {
    #[inline]
    fn into_calendar_day(self) -> NaiveDate {
        *self
    }
}

impl IntoCalendarDay for NaiveDateTime {
    #[inline]
    fn into_calendar_day(self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> IntoCalendarDay for DateTime<Tz> {
    #[inline]
    fn into_calendar_day(self) -> NaiveDate {
        self.date_naive()
    }
}
