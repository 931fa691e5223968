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

//! # Periods Date
//!
//! **Inclusive calendar-date periods with payloads.**
//!
//! `DatePeriod<T>` is the calendar realization of the `periods_core::Period`
//! contract: a range of whole days `[begin, end]`, both ends included,
//! carrying an arbitrary payload `T` and a "protect data" flag.
//!
//! ## Architecture
//!
//! * **`period`**: `DatePeriod` itself, its constructors and builders,
//!   equality and hashing on the bounds, operator sugar (`+` union,
//!   `-` difference, `&` crossing) and the `circle_*` reductions.
//! * **`day`**: `IntoCalendarDay`, truncating dates, naive timestamps and
//!   zoned timestamps to their calendar day.
//! * **`iter`**: `DateIter`, a double-ended, exact-size iterator over the
//!   days of a period.
//! * **`format`**: the `DD.MM.YYYY - DD.MM.YYYY` textual form (`Display`
//!   and `FromStr`).
//!
//! ## Usage
//!
//! ```rust
//! use periods_date::{DatePeriod, Period};
//! use chrono::NaiveDate;
//!
//! let day = |m, d| NaiveDate::from_ymd_opt(2020, m, d).unwrap();
//! let spring = DatePeriod::new(day(3, 1), day(5, 31)).with_data("spring");
//! let april = DatePeriod::new(day(4, 1), day(4, 30));
//!
//! assert!(spring.contains_period(&april));
//! let parts = spring.split(&april);
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts[1].to_string(), "01.04.2020 - 30.04.2020");
//! assert!(parts.iter().all(|p| *p.data() == "spring"));
//! ```

pub mod day;
pub mod format;
pub mod iter;
pub mod period;
#[cfg(feature = "serde")]
mod serde_impl;

pub use day::IntoCalendarDay;
pub use iter::DateIter;
pub use period::DatePeriod;
pub use periods_core::{DiscretePoint, Fragments, Period, PeriodError, Relation, reduce};
