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

//! # Concatenation
//!
//! Two ranges back to back. The cursor is a tagged union of the two
//! sub-cursor types ([`Segment`]) plus the seam it needs to cross: the
//! bounds of the first range and the start of the second. More than two
//! ranges nest to the right, which is what [`concat_ranges!`] expands to.
//!
//! Both ranges must yield the same reference type. A cursor never rests at
//! the end of the first range; it moves on to the start of the second, so
//! empty sub-ranges are skipped and the position "between" two ranges has a
//! single representation.
//!
//! ```rust
//! use spindle_adaptors::concat_ranges;
//! use spindle_core::range::RangeFacade;
//!
//! let head = [1, 2];
//! let none: [i32; 0] = [];
//! let tail = vec![3, 4, 5];
//!
//! let all = concat_ranges!(&head, &none, &tail);
//! assert_eq!(all.size(), 5);
//! assert_eq!(*all.at(2), 3);
//! assert_eq!(all.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! ```

use log::trace;
use spindle_core::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use spindle_core::impl_range_traits;
use spindle_core::least_permissive;
use spindle_core::range::{Range, RangeFacade};

/// Which sub-range a [`ConcatCursor`] is in, with the cursor into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<A, B> {
    First(A),
    Second(B),
}

/// Cursor over two ranges in sequence.
#[derive(Debug, Clone, Copy)]
pub struct ConcatCursor<A, B> {
    segment: Segment<A, B>,
    first_begin: A,
    first_end: A,
    second_begin: B,
}

impl<A, B> ConcatCursor<A, B>
where
    A: Cursor + Clone,
    B: Cursor<Reference = A::Reference> + Clone,
{
    /// Creates a cursor at `segment`, given the bounds of the first range
    /// and the start of the second.
    #[inline]
    pub fn new(segment: Segment<A, B>, first_begin: A, first_end: A, second_begin: B) -> Self {
        let mut cursor = Self {
            segment,
            first_begin,
            first_end,
            second_begin,
        };
        cursor.normalize();
        cursor
    }

    /// The current segment.
    #[inline]
    pub fn segment(&self) -> &Segment<A, B> {
        &self.segment
    }

    #[inline]
    fn normalize(&mut self) {
        if let Segment::First(cursor) = &self.segment {
            if cursor.is_equal(&self.first_end) {
                self.segment = Segment::Second(self.second_begin.clone());
            }
        }
    }
}

impl<A, B> ConcatCursor<A, B>
where
    A: RandomAccessCursor + Clone,
    B: RandomAccessCursor<Reference = A::Reference> + Clone,
{
    #[inline]
    fn first_len(&self) -> isize {
        self.first_begin.distance_to(&self.first_end)
    }

    /// Position counted from the start of the first range.
    #[inline]
    fn index(&self) -> isize {
        match &self.segment {
            Segment::First(cursor) => self.first_begin.distance_to(cursor),
            Segment::Second(cursor) => self.first_len() + self.second_begin.distance_to(cursor),
        }
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor + Clone,
    B: Cursor<Reference = A::Reference> + Clone,
{
    type Reference = A::Reference;
    type Category = least_permissive!(A::Category, B::Category);

    #[inline]
    fn dereference(&self) -> A::Reference {
        match &self.segment {
            Segment::First(cursor) => cursor.dereference(),
            Segment::Second(cursor) => cursor.dereference(),
        }
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        match (&self.segment, &other.segment) {
            (Segment::First(lhs), Segment::First(rhs)) => lhs.is_equal(rhs),
            (Segment::Second(lhs), Segment::Second(rhs)) => lhs.is_equal(rhs),
            _ => false,
        }
    }

    #[inline]
    fn increment(&mut self) {
        match &mut self.segment {
            Segment::First(cursor) => cursor.increment(),
            Segment::Second(cursor) => cursor.increment(),
        }
        self.normalize();
    }

    #[inline]
    fn referent_address(reference: &A::Reference) -> Option<*const u8> {
        A::referent_address(reference).or_else(|| B::referent_address(reference))
    }
}

impl<A, B> BidirectionalCursor for ConcatCursor<A, B>
where
    A: BidirectionalCursor + Clone,
    B: BidirectionalCursor<Reference = A::Reference> + Clone,
{
    #[inline]
    fn decrement(&mut self) {
        match &mut self.segment {
            Segment::Second(cursor) if cursor.is_equal(&self.second_begin) => {
                let mut last = self.first_end.clone();
                last.decrement();
                self.segment = Segment::First(last);
            }
            Segment::Second(cursor) => cursor.decrement(),
            Segment::First(cursor) => cursor.decrement(),
        }
    }
}

impl<A, B> RandomAccessCursor for ConcatCursor<A, B>
where
    A: RandomAccessCursor + Clone,
    B: RandomAccessCursor<Reference = A::Reference> + Clone,
{
    fn advance(&mut self, n: isize) {
        let target = self.index() + n;
        let first_len = self.first_len();
        self.segment = if target < first_len {
            let mut cursor = self.first_begin.clone();
            cursor.advance(target);
            Segment::First(cursor)
        } else {
            let mut cursor = self.second_begin.clone();
            cursor.advance(target - first_len);
            Segment::Second(cursor)
        };
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.index() - self.index()
    }
}

/// Two ranges in sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatRange<A, B> {
    first: A,
    second: B,
}

impl<A, B> Range for ConcatRange<A, B>
where
    A: Range,
    B: Range,
    A::Cursor: Clone,
    B::Cursor: Cursor<Reference = <A::Cursor as Cursor>::Reference> + Clone,
{
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        let first_begin = self.first.begin_cursor();
        ConcatCursor::new(
            Segment::First(first_begin.clone()),
            first_begin,
            self.first.end_cursor(),
            self.second.begin_cursor(),
        )
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        ConcatCursor::new(
            Segment::Second(self.second.end_cursor()),
            self.first.begin_cursor(),
            self.first.end_cursor(),
            self.second.begin_cursor(),
        )
    }
}

impl_range_traits!([A, B] ConcatRange<A, B>);

/// `first` followed by `second`.
pub fn concat<A, B>(first: A, second: B) -> ConcatRange<A, B>
where
    A: Range,
    B: Range,
    A::Cursor: Clone,
    B::Cursor: Cursor<Reference = <A::Cursor as Cursor>::Reference> + Clone,
{
    if first.is_empty() {
        trace!("concat: first sub-range is empty and will be skipped");
    }
    if second.is_empty() {
        trace!("concat: second sub-range is empty");
    }
    ConcatRange { first, second }
}

/// Concatenates any number of ranges, nesting to the right.
///
/// `concat_ranges!(a, b, c)` is `concat(a, concat(b, c))`.
#[macro_export]
macro_rules! concat_ranges {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::concat::concat($first, $crate::concat_ranges!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::transform::transform;
    use spindle_core::category::Tier;
    use spindle_core::cursor::index::index_range;
    use spindle_core::facade::IteratorFacade;

    fn tier_of<C: Cursor>(_: &C) -> Tier {
        IteratorFacade::<C>::TIER
    }

    #[test]
    fn test_two_ranges() {
        let both = concat(index_range(0_u8, 3), index_range(10_u8, 12));
        assert_eq!(both.iter().collect::<Vec<_>>(), vec![0, 1, 2, 10, 11]);
        assert_eq!(both.iter().rev().collect::<Vec<_>>(), vec![11, 10, 2, 1, 0]);
    }

    #[test]
    fn test_empties_are_skipped() {
        let empty: Vec<i32> = Vec::new();
        let a = vec![1, 2, 3];
        let b = vec![4, 5, 6];
        let spaced = concat_ranges!(&empty, &a, &empty, &b, &empty);
        let packed = concat(&a, &b);

        assert!(spaced == packed);
        assert_eq!(spaced.size(), 6);
        assert_eq!(spaced.iter().count(), 6);
        assert_eq!(spaced.end() - spaced.begin(), packed.end() - packed.begin());
        for n in 0..6 {
            assert_eq!(spaced.at(n), packed.at(n));
            assert_eq!((spaced.begin() + n) - spaced.begin(), n);
        }
    }

    #[test]
    fn test_all_empty() {
        let empty: [u8; 0] = [];
        let nothing = concat_ranges!(&empty, &empty, &empty);
        assert!(nothing.is_empty());
        assert_eq!(nothing.size(), 0);
    }

    #[test]
    fn test_random_access_across_seam() {
        let a = [1, 2, 3];
        let b = [4, 5];
        let joined = concat(&a, &b);
        let mut it = joined.begin();
        it += 4;
        assert_eq!(*it.get(), 5);
        it -= 2;
        assert_eq!(*it.get(), 3);
        it.inc();
        assert_eq!(*it.get(), 4);
        it.dec();
        assert_eq!(*it.get(), 3);
        assert_eq!(joined.end() - it, 3);
        assert!(matches!(it.cursor().segment(), Segment::First(_)));
    }

    #[test]
    fn test_seam_has_one_representation() {
        let a = [1, 2];
        let b = [3];
        let joined = concat(&a, &b);
        let mut stepped = joined.begin();
        stepped.inc();
        stepped.inc();
        let jumped = joined.begin() + 2;
        assert!(stepped == jumped);
        assert!(matches!(stepped.cursor().segment(), Segment::Second(_)));
    }

    #[test]
    fn test_category_of_mixed_parts() {
        let data = [1, 2, 3, 4];
        let evens = filter(&data, |x: &&i32| **x % 2 == 0);
        let mixed = concat(&data, evens);
        assert_eq!(tier_of(&mixed.begin_cursor()), Tier::Bidirectional);
        assert_eq!(
            mixed.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 2, 4]
        );
    }

    #[test]
    fn test_concat_of_adaptors() {
        let squares = transform(index_range(1_i32, 4), |x| x * x);
        let cubes = transform(index_range(1_i32, 4), |x| x * x * x);
        let powers = concat(squares, cubes);
        assert_eq!(powers.iter().collect::<Vec<_>>(), vec![1, 4, 9, 1, 8, 27]);
        assert_eq!(powers.at(4), 8);
    }
}
