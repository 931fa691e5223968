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

//! Textual form of a period: `DD.MM.YYYY - DD.MM.YYYY`.

use crate::period::DatePeriod;
use chrono::NaiveDate;
use periods_core::{Period, PeriodError};
use std::{fmt, str::FromStr};

/// The `chrono` format of a single bound.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The separator between the two bounds.
pub const SEPARATOR: &str = " - ";

impl<T: Clone> fmt::Display for DatePeriod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.begin().format(DATE_FORMAT),
            SEPARATOR,
            self.end().format(DATE_FORMAT)
        )
    }
}

/// Parses the form written by `Display`.
///
/// Whitespace around the bounds is ignored.
///
/// # Examples
///
/// ```rust
/// use periods_date::{DatePeriod, Period};
///
/// let p: DatePeriod = "01.02.2020 - 29.02.2020".parse().unwrap();
/// assert_eq!(p.len(), 29);
/// assert_eq!(p.to_string(), "01.02.2020 - 29.02.2020");
/// assert!("29.02.2020 - 01.02.2020".parse::<DatePeriod>().is_err());
/// ```
impl FromStr for DatePeriod<()> {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (begin, end) = split_bounds(s).ok_or_else(|| {
            let err = PeriodError::parse(s, "expected 'DD.MM.YYYY - DD.MM.YYYY'");
            log::debug!("{err}");
            err
        })?;
        let begin = parse_bound(s, begin)?;
        let end = parse_bound(s, end)?;
        DatePeriod::try_new(begin, end)
    }
}

/// Splits at the separating dash.
///
/// A dash right after the month's dot is the sign of a negative year and
/// belongs to the bound; whitespace around the separator is optional.
fn split_bounds(s: &str) -> Option<(&str, &str)> {
    let sep = SEPARATOR.trim();
    s.match_indices(sep)
        .map(|(i, _)| i)
        .find(|&i| !s[..i].trim_end().ends_with('.'))
        .map(|i| (&s[..i], &s[i + sep.len()..]))
}

fn parse_bound(input: &str, bound: &str) -> Result<NaiveDate, PeriodError> {
    NaiveDate::parse_from_str(bound.trim(), DATE_FORMAT).map_err(|e| {
        let err = PeriodError::parse(input, format!("bad date '{}': {e}", bound.trim()));
        log::debug!("{err}");
        err
    })
}
