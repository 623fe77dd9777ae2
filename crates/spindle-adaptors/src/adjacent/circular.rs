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

//! Sliding windows that wrap around the end of the base.
//!
//! Over a base of `len` elements one lap yields exactly `len` windows, and
//! window `i` holds the elements at `i % len` through `(i + N - 1) % len`.
//! A winding counter records how many times the leading cursor has come
//! back to the beginning, so windows on different laps compare unequal and
//! random-access distances span laps.
//!
//! ```rust
//! use spindle_adaptors::adjacent::circular::adjacent_circular;
//! use spindle_core::range::RangeFacade;
//!
//! let polygon: [(i32, i32); 3] = [(0, 0), (4, 0), (4, 3)];
//! let perimeter: i32 = adjacent_circular::<2, _>(&polygon)
//!     .iter()
//!     .map(|edge| {
//!         let (a, b) = (edge.front(), edge.back());
//!         (a.0 - b.0).abs() + (a.1 - b.1).abs()
//!     })
//!     .sum();
//! assert_eq!(perimeter, 4 + 3 + 7);
//! ```

use super::Window;
use log::trace;
use spindle_core::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};
use std::array;

/// Cursor over the wrapping windows of `[begin, end)`.
#[derive(Debug, Clone, Copy)]
pub struct AdjacentCircularCursor<C, const N: usize> {
    cursors: [C; N],
    offset: usize,
    begin: C,
    end: C,
    winding: isize,
}

impl<C, const N: usize> AdjacentCircularCursor<C, N>
where
    C: ForwardCursor,
{
    /// The first window of lap `winding` over `[begin, end)`.
    ///
    /// The base must hold at least `N` elements.
    pub fn new(begin: C, end: C, winding: isize) -> Self {
        let cursors = Self::ring_from(begin.clone(), &begin, &end);
        Self {
            cursors,
            offset: 0,
            begin,
            end,
            winding,
        }
    }

    /// A cursor over a base too short for a single window. All such
    /// cursors of one range compare equal.
    fn degenerate(begin: C, end: C) -> Self {
        Self {
            cursors: array::from_fn(|_| begin.clone()),
            offset: 0,
            begin,
            end,
            winding: 0,
        }
    }

    fn ring_from(first: C, begin: &C, end: &C) -> [C; N] {
        let mut walker = first;
        array::from_fn(|_| {
            let current = walker.clone();
            walker.increment();
            if walker.is_equal(end) {
                walker = begin.clone();
            }
            current
        })
    }

    #[inline]
    fn slot(&self, k: usize) -> usize {
        (self.offset + k) % N
    }

    /// The base cursor at the first element of the window.
    #[inline]
    pub fn front(&self) -> &C {
        &self.cursors[self.offset]
    }

    /// Completed laps of the leading cursor.
    #[inline]
    pub fn winding(&self) -> isize {
        self.winding
    }
}

impl<C, const N: usize> AdjacentCircularCursor<C, N>
where
    C: ForwardCursor + RandomAccessCursor,
{
    #[inline]
    fn base_len(&self) -> isize {
        self.begin.distance_to(&self.end)
    }

    /// Position counted from the first window of lap zero.
    #[inline]
    fn linear_index(&self) -> isize {
        self.winding * self.base_len() + self.begin.distance_to(self.front())
    }
}

impl<C, const N: usize> Cursor for AdjacentCircularCursor<C, N>
where
    C: ForwardCursor,
{
    type Reference = Window<C::Reference, N>;
    type Category = C::Category;

    #[inline]
    fn dereference(&self) -> Self::Reference {
        Window::new(array::from_fn(|k| self.cursors[self.slot(k)].dereference()))
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.winding == other.winding && self.front().is_equal(other.front())
    }

    fn increment(&mut self) {
        let mut next = self.cursors[self.slot(N - 1)].clone();
        next.increment();
        if next.is_equal(&self.end) {
            next = self.begin.clone();
        }
        self.cursors[self.offset] = next;
        self.offset = self.slot(1);
        if self.front().is_equal(&self.begin) {
            self.winding += 1;
        }
    }
}

impl<C, const N: usize> BidirectionalCursor for AdjacentCircularCursor<C, N>
where
    C: ForwardCursor + BidirectionalCursor,
{
    fn decrement(&mut self) {
        let mut previous = self.front().clone();
        if previous.is_equal(&self.begin) {
            self.winding -= 1;
            previous = self.end.clone();
        }
        previous.decrement();
        let back = self.slot(N - 1);
        self.cursors[back] = previous;
        self.offset = back;
    }
}

impl<C, const N: usize> RandomAccessCursor for AdjacentCircularCursor<C, N>
where
    C: ForwardCursor + RandomAccessCursor,
{
    fn advance(&mut self, n: isize) {
        let len = self.base_len();
        if len == 0 {
            return;
        }
        let target = self.linear_index() + n;
        let mut front = self.begin.clone();
        front.advance(target.rem_euclid(len));
        self.cursors = Self::ring_from(front, &self.begin, &self.end);
        self.offset = 0;
        self.winding = target.div_euclid(len);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.linear_index() - self.linear_index()
    }
}

/// The wrapping `N`-element windows of a base range, one lap long.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentCircularRange<R, const N: usize> {
    base: R,
    short: bool,
}

impl<R, const N: usize> Range for AdjacentCircularRange<R, N>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    type Cursor = AdjacentCircularCursor<R::Cursor, N>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        let (begin, end) = (self.base.begin_cursor(), self.base.end_cursor());
        if self.short {
            AdjacentCircularCursor::degenerate(begin, end)
        } else {
            AdjacentCircularCursor::new(begin, end, 0)
        }
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        let (begin, end) = (self.base.begin_cursor(), self.base.end_cursor());
        if self.short {
            AdjacentCircularCursor::degenerate(begin, end)
        } else {
            AdjacentCircularCursor::new(begin, end, 1)
        }
    }
}

impl_range_traits!([R, const N: usize] AdjacentCircularRange<R, N>);

/// One lap of wrapping windows of `N` elements over `range`.
///
/// A base with fewer than `N` elements yields an empty range.
pub fn adjacent_circular<const N: usize, R>(range: R) -> AdjacentCircularRange<R, N>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    const { assert!(N > 0, "window size must be at least one") };

    let end = range.end_cursor();
    let mut walker = range.begin_cursor();
    let mut available = 0;
    while available < N && !walker.is_equal(&end) {
        walker.increment();
        available += 1;
    }
    let short = available < N;
    if short {
        trace!("adjacent_circular: base holds {available} elements, fewer than the window size {N}");
    }
    AdjacentCircularRange { base: range, short }
}

/// One lap of wrapping windows of `N` elements over `[first, last)`.
#[inline]
pub fn adjacent_circular_between<const N: usize, C>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
) -> AdjacentCircularRange<IteratorRange<C>, N>
where
    C: ForwardCursor,
{
    adjacent_circular(IteratorRange::from_facades(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::cursor::index::index_range;
    use spindle_core::range::RangeFacade;

    #[test]
    fn test_window_contents_wrap() {
        let windows: Vec<[usize; 3]> = adjacent_circular::<3, _>(index_range(0_usize, 5))
            .iter()
            .map(Window::into_array)
            .collect();
        let expected: Vec<[usize; 3]> = (0..5).map(|i| [i % 5, (i + 1) % 5, (i + 2) % 5]).collect();
        assert_eq!(windows, expected);
    }

    #[test]
    fn test_one_lap_is_len_windows() {
        let data = vec![1, 2, 3, 4];
        let pairs = adjacent_circular::<2, _>(&data);
        assert_eq!(pairs.size(), 4);
        assert_eq!(pairs.iter().count(), 4);
        assert_eq!(pairs.iter().len(), 4);
    }

    #[test]
    fn test_laps_are_distinct() {
        let pairs = adjacent_circular::<2, _>(index_range(0_u8, 3));
        let begin = pairs.begin();
        let next_lap = begin + 3;
        assert!(next_lap != begin);
        assert!(next_lap == pairs.end());
        assert_eq!(next_lap.get(), begin.get());
        assert_eq!(next_lap.cursor().winding(), 1);
        assert_eq!((begin + 7).get().into_array(), [1, 2]);
        assert_eq!((begin + 7) - begin, 7);
        assert_eq!((begin - 1).get().into_array(), [2, 0]);
        assert_eq!((begin - 1).cursor().winding(), -1);
    }

    #[test]
    fn test_stepping_matches_jumping() {
        let triples = adjacent_circular::<3, _>(index_range(0_i32, 5));
        let mut stepped = triples.begin();
        for n in 0..12_isize {
            let jumped = triples.begin() + n;
            assert!(stepped == jumped, "mismatch at {n}");
            assert_eq!(stepped.get(), jumped.get());
            stepped.inc();
        }
    }

    #[test]
    fn test_reverse_walk() {
        let reversed: Vec<[i32; 3]> = adjacent_circular::<3, _>(index_range(0_i32, 4))
            .iter()
            .rev()
            .map(Window::into_array)
            .collect();
        assert_eq!(reversed, vec![[3, 0, 1], [2, 3, 0], [1, 2, 3], [0, 1, 2]]);
    }

    #[test]
    fn test_short_base_is_empty() {
        let two = [1, 2];
        assert!(adjacent_circular::<3, _>(&two).is_empty());
        assert!(adjacent_circular::<1, _>(index_range(0_u8, 0)).is_empty());
        assert_eq!(adjacent_circular::<3, _>(&two).size(), 0);
        assert_eq!(adjacent_circular::<2, _>(&two).iter().count(), 2);
    }

    #[test]
    fn test_window_equal_to_base_length() {
        let windows: Vec<[u8; 3]> = adjacent_circular::<3, _>(index_range(0_u8, 3))
            .iter()
            .map(Window::into_array)
            .collect();
        assert_eq!(windows, vec![[0, 1, 2], [1, 2, 0], [2, 0, 1]]);
    }

    #[test]
    fn test_between() {
        let data = [9, 1, 2, 3, 9];
        let view = &data;
        let inner = adjacent_circular_between::<2, _>(view.begin() + 1, view.end() - 1);
        let sums: Vec<i32> = inner.iter().map(|w| *w[0] + *w[1]).collect();
        assert_eq!(sums, vec![3, 5, 4]);
    }
}
