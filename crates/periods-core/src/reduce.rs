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

//! # Circular Reductions
//!
//! Set-wise operations that apply the pairwise period algebra across two
//! sequences. None of them sorts or merges its output: results come out in
//! processing order, and callers sort explicitly (see `sort_by_begin`).
//!
//! All three reductions share the same base cases: an empty first sequence
//! yields an empty result, and an empty second sequence returns the first
//! sequence unchanged. For `circle_crossing` and `circle_add` the latter is
//! deliberately not the empty cross product; callers rely on it.

use crate::period::Period;
use log::trace;
use std::collections::VecDeque;

/// Subtracts every period of `subtrahends` from every period of
/// `minuends`.
///
/// Each minuend is reduced to a fixed point: the first subtrahend that
/// crosses the current fragment replaces it by the remainders of the
/// difference, which are examined again against all subtrahends. A
/// fragment crossing no subtrahend is emitted. Output is depth-first, left
/// to right, so the fragments of one minuend stay in ascending order and
/// precede those of the next minuend.
///
/// # Examples
///
/// ```rust
/// use periods_core::{Period, reduce::circle_sub};
///
/// #[derive(Clone, Debug)]
/// struct Days(u32, u32);
///
/// impl Period for Days {
///     type Point = u32;
///     type Data = ();
///     fn begin(&self) -> u32 { self.0 }
///     fn end(&self) -> u32 { self.1 }
///     fn data(&self) -> &() { &() }
///     fn protect_data(&self) -> bool { false }
///     fn fragment(&self, begin: u32, end: u32) -> Self { Days(begin, end) }
///     fn with_payload(&self, _: ()) -> Self { self.clone() }
/// }
///
/// let rest = circle_sub(&[Days(1, 30)], &[Days(5, 9), Days(20, 40), Days(8, 12)]);
/// let bounds: Vec<_> = rest.iter().map(|d| (d.0, d.1)).collect();
/// assert_eq!(bounds, vec![(1, 4), (13, 19)]);
/// ```
pub fn circle_sub<P, Q>(minuends: &[P], subtrahends: &[Q]) -> Vec<P>
where
    P: Period,
    Q: Period<Point = P::Point>,
{
    if minuends.is_empty() {
        return Vec::new();
    }
    if subtrahends.is_empty() {
        return minuends.to_vec();
    }

    // Every cut removes at least one point, so the total length bounds the work.
    let budget = minuends
        .iter()
        .map(|p| p.len())
        .fold(0usize, usize::saturating_add);
    let mut cuts = 0usize;

    let mut result = Vec::with_capacity(minuends.len());
    let mut pending: VecDeque<P> = VecDeque::new();

    for minuend in minuends {
        pending.push_back(minuend.clone());

        while let Some(current) = pending.pop_front() {
            let Some(cut) = subtrahends.iter().find(|s| current.is_crossing(*s)) else {
                trace!("circle_sub: keeping [{}, {}]", current.begin(), current.end());
                result.push(current);
                continue;
            };

            cuts += 1;
            debug_assert!(
                cuts <= budget,
                "circle_sub exceeded its step bound of {budget} cuts"
            );

            let rest = current.difference(cut);
            trace!(
                "circle_sub: [{}, {}] minus [{}, {}] left {} fragment(s)",
                current.begin(),
                current.end(),
                cut.begin(),
                cut.end(),
                rest.len()
            );
            for fragment in rest.into_iter().rev() {
                pending.push_front(fragment);
            }
        }
    }

    result
}

/// Intersects every period of `left` with every period of `right`.
///
/// Each crossing pair contributes `l.crossing(r)`, carrying the payload of
/// the period from `left`. Pairs are visited left-major.
pub fn circle_crossing<P, Q>(left: &[P], right: &[Q]) -> Vec<P>
where
    P: Period,
    Q: Period<Point = P::Point>,
{
    if left.is_empty() {
        return Vec::new();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    let result: Vec<P> = left
        .iter()
        .flat_map(|l| right.iter().filter_map(move |r| l.crossing(r)))
        .collect();
    trace!(
        "circle_crossing: {} x {} periods gave {} intersection(s)",
        left.len(),
        right.len(),
        result.len()
    );
    result
}

/// Unites every period of `left` with every period of `right`.
///
/// The fragments of each pair's `union` are appended as they are: nothing
/// is deduplicated or merged across pairs, so the result may hold
/// redundant, overlapping periods.
pub fn circle_add<P>(left: &[P], right: &[P]) -> Vec<P>
where
    P: Period,
{
    if left.is_empty() {
        return Vec::new();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            result.extend(l.union(r));
        }
    }
    trace!(
        "circle_add: {} x {} periods gave {} period(s)",
        left.len(),
        right.len(),
        result.len()
    );
    result
}

/// Sorts periods by their begin bound, keeping the relative order of
/// periods that begin on the same point.
#[inline]
pub fn sort_by_begin<P>(periods: &mut [P])
where
    P: Period,
{
    periods.sort_by_key(|p| p.begin());
}

/// Checks whether the given periods are pairwise disjoint and sorted by
/// begin.
///
/// Returns `true` if each period ends before the next one begins.
#[inline]
pub fn are_disjoint_and_sorted<P>(periods: &[P]) -> bool
where
    P: Period,
{
    periods.windows(2).all(|w| w[0].end() < w[1].begin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Span {
        begin: i64,
        end: i64,
        data: char,
    }

    impl Period for Span {
        type Point = i64;
        type Data = char;

        fn begin(&self) -> i64 {
            self.begin
        }

        fn end(&self) -> i64 {
            self.end
        }

        fn data(&self) -> &char {
            &self.data
        }

        fn protect_data(&self) -> bool {
            false
        }

        fn fragment(&self, begin: i64, end: i64) -> Self {
            Span {
                begin,
                end,
                data: self.data,
            }
        }

        fn with_payload(&self, data: char) -> Self {
            Span { data, ..*self }
        }
    }

    impl Copy for Span {}

    fn iv(begin: i64, end: i64) -> Span {
        Span {
            begin,
            end,
            data: '-',
        }
    }

    fn tagged(begin: i64, end: i64, data: char) -> Span {
        Span { begin, end, data }
    }

    fn ranges(periods: &[Span]) -> Vec<(i64, i64)> {
        periods.iter().map(|s| (s.begin, s.end)).collect()
    }

    #[test]
    fn test_circle_sub_base_cases() {
        let v = vec![iv(0, 10), iv(20, 30)];
        let empty: Vec<Span> = vec![];

        assert_eq!(ranges(&circle_sub(&v, &empty)), vec![(0, 10), (20, 30)]);
        assert!(circle_sub(&empty, &v).is_empty());
        assert!(circle_sub(&empty, &empty).is_empty());
    }

    #[test]
    fn test_circle_sub_untouched() {
        let v = vec![iv(0, 10), iv(20, 30)];
        assert_eq!(ranges(&circle_sub(&v, &[iv(12, 18)])), vec![(0, 10), (20, 30)]);
    }

    #[test]
    fn test_circle_sub_reaches_fixed_point() {
        // The first cut leaves two fragments, each of which is cut again.
        let rest = circle_sub(
            &[tagged(0, 100, 'a')],
            &[iv(40, 60), iv(0, 10), iv(90, 95), iv(20, 30)],
        );
        assert_eq!(
            ranges(&rest),
            vec![(11, 19), (31, 39), (61, 89), (96, 100)]
        );
        assert!(rest.iter().all(|s| s.data == 'a'));
        assert!(are_disjoint_and_sorted(&rest));
    }

    #[test]
    fn test_circle_sub_keeps_minuend_order() {
        let rest = circle_sub(&[iv(50, 60), iv(0, 20), iv(30, 35)], &[iv(15, 45)]);
        assert_eq!(ranges(&rest), vec![(50, 60), (0, 14)]);

        let rest = circle_sub(&[iv(50, 60), iv(0, 20), iv(30, 35)], &[iv(15, 32)]);
        assert_eq!(ranges(&rest), vec![(50, 60), (0, 14), (33, 35)]);
    }

    #[test]
    fn test_circle_sub_erases_covered() {
        let rest = circle_sub(&[iv(1, 2), iv(3, 3), iv(5, 9)], &[iv(0, 10)]);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_circle_crossing() {
        let left = vec![tagged(0, 100, 'l')];
        let right = vec![iv(-10, 5), iv(50, 60), iv(200, 300), iv(95, 120)];

        let cross = circle_crossing(&left, &right);
        assert_eq!(ranges(&cross), vec![(0, 5), (50, 60), (95, 100)]);
        assert!(cross.iter().all(|s| s.data == 'l'));
    }

    #[test]
    fn test_circle_crossing_base_cases() {
        let v = vec![iv(0, 10)];
        let empty: Vec<Span> = vec![];

        assert_eq!(ranges(&circle_crossing(&v, &empty)), vec![(0, 10)]);
        assert!(circle_crossing(&empty, &v).is_empty());
        // Nothing crosses
        assert!(circle_crossing(&v, &[iv(11, 20)]).is_empty());
    }

    #[test]
    fn test_circle_add() {
        let left = vec![tagged(0, 10, 'l')];
        let right = vec![tagged(5, 20, 'r'), tagged(30, 40, 'r'), tagged(2, 3, 'r')];

        let sum = circle_add(&left, &right);
        assert_eq!(
            ranges(&sum),
            vec![(0, 20), (0, 10), (30, 40), (0, 10)]
        );
        assert_eq!(
            sum.iter().map(|s| s.data).collect::<Vec<_>>(),
            vec!['l', 'l', 'r', 'l']
        );
    }

    #[test]
    fn test_circle_add_base_cases() {
        let v = vec![iv(0, 10)];
        let empty: Vec<Span> = vec![];

        assert_eq!(ranges(&circle_add(&v, &empty)), vec![(0, 10)]);
        assert!(circle_add(&empty, &v).is_empty());
    }

    #[test]
    fn test_sort_by_begin() {
        let mut v = vec![iv(30, 40), iv(0, 5), iv(10, 20), iv(0, 2)];
        sort_by_begin(&mut v);
        assert_eq!(ranges(&v), vec![(0, 5), (0, 2), (10, 20), (30, 40)]);
    }

    #[test]
    fn test_are_disjoint_and_sorted() {
        let empty: Vec<Span> = vec![];
        assert!(are_disjoint_and_sorted(&empty));
        assert!(are_disjoint_and_sorted(&[iv(0, 10)]));
        assert!(are_disjoint_and_sorted(&[iv(0, 4), iv(5, 10), iv(11, 20)]));
        // Sharing a point is an overlap for closed periods
        assert!(!are_disjoint_and_sorted(&[iv(0, 5), iv(5, 10)]));
        assert!(!are_disjoint_and_sorted(&[iv(10, 20), iv(0, 5)]));
    }
}
