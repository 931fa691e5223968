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

use chrono::NaiveDate;
use std::iter::FusedIterator;

/// An iterator over the days of a `DatePeriod`, both bounds included.
///
/// # Examples
///
/// ```rust
/// # use periods_date::DatePeriod;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
/// let period = DatePeriod::new(day(3), day(6));
/// let days: Vec<_> = period.iter().collect();
/// assert_eq!(days, vec![day(3), day(4), day(5), day(6)]);
/// ```
#[derive(Debug, Clone)]
pub struct DateIter {
    front: NaiveDate,
    back: NaiveDate,
    remaining: usize,
}

impl DateIter {
    #[inline]
    pub(crate) fn new(begin: NaiveDate, end: NaiveDate, len: usize) -> Self {
        debug_assert!(begin <= end, "DateIter over an empty range");
        Self {
            front: begin,
            back: end,
            remaining: len,
        }
    }
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            // front < back here, so the successor exists.
            self.front = self.front.succ_opt()?;
        }
        Some(day)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DateIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.back.pred_opt()?;
        }
        Some(day)
    }
}

impl ExactSizeIterator for DateIter {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for DateIter {}
