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

//! # Circular
//!
//! Walks a finite base range several times over. Each cursor carries a
//! winding number that counts completed laps, so the same element reached
//! on different laps gives unequal positions and distances span laps. The
//! category is the base's: a random-access base gives a random-access
//! circular range.
//!
//! An empty base has no laps; its winding is normalized to zero so the
//! circular range over it is empty whatever the requested count.
//!
//! ```rust
//! use spindle_adaptors::circular::{circular, circular_connect};
//! use spindle_core::range::RangeFacade;
//!
//! let weekdays = ["mo", "tu", "we"];
//!
//! let shifts = circular(&weekdays, 2);
//! assert_eq!(shifts.size(), 6);
//! assert_eq!(*shifts.at(4), "tu");
//!
//! let closed = circular_connect(&weekdays);
//! assert_eq!(
//!     closed.iter().copied().collect::<Vec<_>>(),
//!     vec!["mo", "tu", "we", "mo"]
//! );
//! ```

use log::trace;
use spindle_core::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range, RangeFacade};

/// Cursor over `[begin, end)` repeated, with a lap counter.
#[derive(Debug, Clone, Copy)]
pub struct CircularCursor<C> {
    current: C,
    begin: C,
    end: C,
    winding: isize,
}

impl<C> CircularCursor<C>
where
    C: ForwardCursor,
{
    /// A cursor at `current` on lap `winding` of `[begin, end)`.
    #[inline]
    pub fn new(current: C, begin: C, end: C, winding: isize) -> Self {
        let winding = if begin.is_equal(&end) { 0 } else { winding };
        Self {
            current,
            begin,
            end,
            winding,
        }
    }

    /// The base cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.current
    }

    /// Completed laps.
    #[inline]
    pub fn winding(&self) -> isize {
        self.winding
    }
}

impl<C> CircularCursor<C>
where
    C: ForwardCursor + RandomAccessCursor,
{
    #[inline]
    fn linear_index(&self) -> isize {
        self.winding * self.begin.distance_to(&self.end) + self.begin.distance_to(&self.current)
    }
}

impl<C> Cursor for CircularCursor<C>
where
    C: ForwardCursor,
{
    type Reference = C::Reference;
    type Category = C::Category;

    #[inline]
    fn dereference(&self) -> C::Reference {
        self.current.dereference()
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.winding == other.winding && self.current.is_equal(&other.current)
    }

    #[inline]
    fn increment(&mut self) {
        self.current.increment();
        if self.current.is_equal(&self.end) {
            self.current = self.begin.clone();
            self.winding += 1;
        }
    }

    #[inline]
    fn referent_address(reference: &C::Reference) -> Option<*const u8> {
        C::referent_address(reference)
    }
}

impl<C> BidirectionalCursor for CircularCursor<C>
where
    C: ForwardCursor + BidirectionalCursor,
{
    #[inline]
    fn decrement(&mut self) {
        if self.current.is_equal(&self.begin) {
            self.current = self.end.clone();
            self.winding -= 1;
        }
        self.current.decrement();
    }
}

impl<C> RandomAccessCursor for CircularCursor<C>
where
    C: ForwardCursor + RandomAccessCursor,
{
    fn advance(&mut self, n: isize) {
        let len = self.begin.distance_to(&self.end);
        if len == 0 {
            return;
        }
        let target = self.linear_index() + n;
        let mut current = self.begin.clone();
        current.advance(target.rem_euclid(len));
        self.current = current;
        self.winding = target.div_euclid(len);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.linear_index() - self.linear_index()
    }
}

/// A base range repeated `windings` times.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularRange<R> {
    base: R,
    windings: usize,
    connect: bool,
}

impl<R> CircularRange<R> {
    /// The number of laps.
    #[inline]
    pub fn windings(&self) -> usize {
        self.windings
    }

    /// Whether the range ends one element into the next lap.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connect
    }
}

impl<R> Range for CircularRange<R>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    type Cursor = CircularCursor<R::Cursor>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        let begin = self.base.begin_cursor();
        CircularCursor::new(begin.clone(), begin, self.base.end_cursor(), 0)
    }

    fn end_cursor(&self) -> Self::Cursor {
        let begin = self.base.begin_cursor();
        let windings = isize::try_from(self.windings).unwrap_or(isize::MAX);
        let mut end = CircularCursor::new(begin.clone(), begin, self.base.end_cursor(), windings);
        if self.connect && end.winding != 0 {
            end.increment();
        }
        end
    }
}

impl_range_traits!([R] CircularRange<R>);

fn make_circular<R>(range: R, windings: usize, connect: bool) -> CircularRange<R>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    if range.is_empty() && windings > 0 {
        trace!("circular: base range is empty, normalizing {windings} windings to 0");
    }
    CircularRange {
        base: range,
        windings,
        connect,
    }
}

/// `range` repeated `windings` times.
#[inline]
pub fn circular<R>(range: R, windings: usize) -> CircularRange<R>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    make_circular(range, windings, false)
}

/// `[first, last)` repeated `windings` times.
#[inline]
pub fn circular_between<C>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
    windings: usize,
) -> CircularRange<IteratorRange<C>>
where
    C: ForwardCursor,
{
    circular(IteratorRange::from_facades(first, last), windings)
}

/// One lap of `range` followed by its first element again: `x0, .., xn, x0`.
///
/// Handy for visiting the closed edges of a polygon. An empty base stays
/// empty.
#[inline]
pub fn circular_connect<R>(range: R) -> CircularRange<R>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    make_circular(range, 1, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use spindle_core::cursor::index::index_range;

    #[test]
    fn test_two_windings() {
        let data = [1, 2, 3, 4, 5];
        let twice = circular(&data, 2);
        let begin = twice.begin();
        let end = twice.end();

        assert_eq!(end - begin, 10);
        assert!(begin + 5 != begin);
        assert_eq!(*(begin + 5).get(), 1);
        assert!(begin + 5 + 5 == end);
        assert_eq!(
            twice.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_zero_windings_is_empty() {
        let none = circular(index_range(0_u8, 4), 0);
        assert!(none.is_empty());
        assert_eq!(none.size(), 0);
    }

    #[test]
    fn test_empty_base_normalizes_winding() {
        let empty: Vec<i32> = Vec::new();
        let laps = circular(&empty, 3);
        assert!(laps.is_empty());
        assert_eq!(laps.end().cursor().winding(), 0);
        assert_eq!(laps.windings(), 3);
    }

    #[test]
    fn test_reverse_over_laps() {
        let laps = circular(index_range(0_i32, 3), 2);
        assert_eq!(laps.iter().rev().collect::<Vec<_>>(), vec![2, 1, 0, 2, 1, 0]);
    }

    #[test]
    fn test_negative_positions_wrap_backwards() {
        let laps = circular(index_range(10_i32, 13), 1);
        let before = laps.begin() - 1;
        assert_eq!(before.get(), 12);
        assert_eq!(before.cursor().winding(), -1);
        assert_eq!(laps.begin() - before, 1);
    }

    #[test]
    fn test_connect() {
        let corners = ['a', 'b', 'c'];
        let closed = circular_connect(&corners);
        assert!(closed.is_connected());
        assert_eq!(closed.size(), 4);
        assert_eq!(closed.iter().copied().collect::<String>(), "abca");

        let single = ['z'];
        assert_eq!(circular_connect(&single).iter().count(), 2);

        let nothing: [char; 0] = [];
        assert!(circular_connect(&nothing).is_empty());
    }

    #[test]
    fn test_bidirectional_base() {
        let odds = filter(index_range(0_u8, 6), |x: &u8| x % 2 == 1);
        let laps = circular(odds, 2);
        assert_eq!(laps.iter().collect::<Vec<_>>(), vec![1, 3, 5, 1, 3, 5]);
        let mut it = laps.end();
        it.dec();
        assert_eq!(it.get(), 5);
    }

    #[test]
    fn test_between() {
        let data = [0, 1, 2, 3];
        let view = &data;
        let inner = circular_between(view.begin() + 1, view.end() - 1, 3);
        assert_eq!(inner.iter().copied().collect::<Vec<_>>(), vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_round_trip_on_random_offsets() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let data: Vec<u32> = (0..7).collect();
        let laps = circular(&data, 5);
        let begin = laps.begin();
        for _ in 0..200 {
            let start: isize = rng.random_range(-20i64..40) as isize;
            let n: isize = rng.random_range(-30i64..30) as isize;
            let it = begin + start;
            assert!((it + n) - n == it);
            assert_eq!((it + n) - it, n);
            assert_eq!(*(it + n).get(), data[(start + n).rem_euclid(7) as usize]);
        }
    }
}
