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

//! # Reversed
//!
//! A bidirectional range read back to front. The reverse cursor wraps a
//! base cursor positioned one past the element it denotes, so the reverse
//! begin is built from the base end and the reverse end from the base
//! begin, and no position before the base begin is ever formed.
//!
//! ```rust
//! use spindle_adaptors::reversed::reversed;
//! use spindle_core::range::RangeFacade;
//!
//! let countdown = [1, 2, 3];
//! let launch = reversed(&countdown);
//! assert_eq!(launch.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! assert_eq!(*launch.at(0), 3);
//! ```

use spindle_core::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};

/// Cursor moving backwards over its base.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseCursor<C> {
    base: C,
}

impl<C> ReverseCursor<C> {
    /// The reverse cursor denoting the element just before `base`.
    #[inline]
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    /// The base cursor, one past the denoted element.
    #[inline]
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C> Cursor for ReverseCursor<C>
where
    C: BidirectionalCursor + Clone,
{
    type Reference = C::Reference;
    type Category = C::Category;

    #[inline]
    fn dereference(&self) -> C::Reference {
        let mut previous = self.base.clone();
        previous.decrement();
        previous.dereference()
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    #[inline]
    fn increment(&mut self) {
        self.base.decrement();
    }

    #[inline]
    fn referent_address(reference: &C::Reference) -> Option<*const u8> {
        C::referent_address(reference)
    }
}

impl<C> BidirectionalCursor for ReverseCursor<C>
where
    C: BidirectionalCursor + Clone,
{
    #[inline]
    fn decrement(&mut self) {
        self.base.increment();
    }
}

impl<C> RandomAccessCursor for ReverseCursor<C>
where
    C: RandomAccessCursor + Clone,
{
    #[inline]
    fn advance(&mut self, n: isize) {
        self.base.advance(-n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}

/// The elements of a bidirectional range, last first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversedRange<R> {
    base: R,
}

impl<R> Range for ReversedRange<R>
where
    R: Range,
    R::Cursor: BidirectionalCursor + Clone,
{
    type Cursor = ReverseCursor<R::Cursor>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        ReverseCursor::new(self.base.end_cursor())
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        ReverseCursor::new(self.base.begin_cursor())
    }
}

impl_range_traits!([R] ReversedRange<R>);

/// `range` back to front.
#[inline]
pub fn reversed<R>(range: R) -> ReversedRange<R>
where
    R: Range,
    R::Cursor: BidirectionalCursor + Clone,
{
    ReversedRange { base: range }
}

/// `[first, last)` back to front.
#[inline]
pub fn reversed_between<C>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
) -> ReversedRange<IteratorRange<C>>
where
    C: BidirectionalCursor + Clone,
{
    reversed(IteratorRange::from_facades(first, last))
}
