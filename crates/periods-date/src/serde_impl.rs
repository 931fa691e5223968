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

//! Serde support, enabled by the `serde` feature.
//!
//! A period serializes as `{ "begin", "end", "data", "protect_data" }` with
//! ISO dates. Deserialization goes through `RawDatePeriod` so that the bound
//! order is checked again; a missing `protect_data` reads as `false`.

use crate::period::DatePeriod;
use chrono::NaiveDate;
use periods_core::PeriodError;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename = "DatePeriod")]
pub(crate) struct RawDatePeriod<T> {
    begin: NaiveDate,
    end: NaiveDate,
    data: T,
    #[serde(default)]
    protect_data: bool,
}

impl<T> TryFrom<RawDatePeriod<T>> for DatePeriod<T> {
    type Error = PeriodError;

    fn try_from(raw: RawDatePeriod<T>) -> Result<Self, Self::Error> {
        DatePeriod::try_from_parts(raw.begin, raw.end, raw.data, raw.protect_data)
    }
}
