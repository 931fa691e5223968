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

use std::fmt::Display;

/// The error type for period construction and algebra.
///
/// Bounds are stored in their rendered form so that the error stays
/// independent of the point domain that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The begin bound lies after the end bound.
    #[error("invalid range: begin {begin} is after end {end}")]
    InvalidRange { begin: String, end: String },
    /// An intersection was required but the periods share no point.
    #[error("periods {left} and {right} do not intersect")]
    NoIntersection { left: String, right: String },
    /// A textual period could not be read.
    #[error("could not parse period from '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl PeriodError {
    /// Creates an `InvalidRange` error from the offending bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use periods_core::PeriodError;
    ///
    /// let err = PeriodError::invalid_range(10, 5);
    /// assert_eq!(err.to_string(), "invalid range: begin 10 is after end 5");
    /// ```
    pub fn invalid_range(begin: impl Display, end: impl Display) -> Self {
        Self::InvalidRange {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates a `NoIntersection` error from the rendered operands.
    pub fn no_intersection(left: impl Display, right: impl Display) -> Self {
        Self::NoIntersection {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Creates a `Parse` error for `input`.
    pub fn parse(input: impl Into<String>, reason: impl Display) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = PeriodError::invalid_range("2020-02-01", "2020-01-01");
        assert_eq!(
            err,
            PeriodError::InvalidRange {
                begin: "2020-02-01".to_string(),
                end: "2020-01-01".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid range: begin 2020-02-01 is after end 2020-01-01"
        );
    }

    #[test]
    fn test_no_intersection_message() {
        let err = PeriodError::no_intersection("[1, 2]", "[5, 6]");
        assert_eq!(err.to_string(), "periods [1, 2] and [5, 6] do not intersect");
    }

    #[test]
    fn test_parse_message() {
        let err = PeriodError::parse("garbage", "missing separator");
        assert_eq!(
            err.to_string(),
            "could not parse period from 'garbage': missing separator"
        );
    }
}
