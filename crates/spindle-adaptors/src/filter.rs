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

//! # Filter
//!
//! Yields only the elements satisfying a predicate. A filter cursor carries
//! the end of its base range so increments can skip forward without running
//! past it; moving backwards skips the same way, so the result is at most
//! bidirectional.
//!
//! The predicate receives the element by reference and is stored in every
//! cursor, so it must be `Clone`.
//!
//! ```rust
//! use spindle_adaptors::filter::filter;
//! use spindle_core::cursor::index::index_range;
//! use spindle_core::range::RangeFacade;
//!
//! let odd = filter(index_range(0_u32, 10), |x: &u32| x % 2 == 1);
//! assert_eq!(odd.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
//! assert_eq!(odd.iter().rev().next(), Some(9));
//! ```

use spindle_core::category::{Bidirectional, LeastPermissive};
use spindle_core::cursor::{BidirectionalCursor, Cursor, ReferenceOf};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};
use std::fmt;

/// Cursor that rests only on elements satisfying its predicate.
#[derive(Clone, Copy)]
pub struct FilterCursor<C, P> {
    base: C,
    end: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Reference) -> bool,
{
    /// Creates a cursor at the first match in `[base, end)`, or at `end`.
    #[inline]
    pub fn new(base: C, end: C, predicate: P) -> Self {
        let mut cursor = Self {
            base,
            end,
            predicate,
        };
        cursor.skip_forward();
        cursor
    }

    /// The underlying cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    #[inline]
    fn skip_forward(&mut self) {
        while !self.base.is_equal(&self.end) && !(self.predicate)(&self.base.dereference()) {
            self.base.increment();
        }
    }
}

impl<C, P> fmt::Debug for FilterCursor<C, P>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("base", &self.base)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Reference) -> bool,
{
    type Reference = C::Reference;
    type Category = LeastPermissive<C::Category, Bidirectional>;

    #[inline]
    fn dereference(&self) -> C::Reference {
        self.base.dereference()
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    #[inline]
    fn increment(&mut self) {
        self.base.increment();
        self.skip_forward();
    }

    #[inline]
    fn referent_address(reference: &C::Reference) -> Option<*const u8> {
        C::referent_address(reference)
    }
}

impl<C, P> BidirectionalCursor for FilterCursor<C, P>
where
    C: BidirectionalCursor,
    P: Fn(&C::Reference) -> bool,
{
    /// Moves to the previous match. There must be one.
    #[inline]
    fn decrement(&mut self) {
        loop {
            self.base.decrement();
            if (self.predicate)(&self.base.dereference()) {
                return;
            }
        }
    }
}

/// The elements of `base` satisfying `predicate`.
#[derive(Clone, Copy)]
pub struct FilteredRange<R, P> {
    base: R,
    predicate: P,
}

impl<R, P> fmt::Debug for FilteredRange<R, P>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredRange")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<R, P> Range for FilteredRange<R, P>
where
    R: Range,
    P: Fn(&ReferenceOf<R::Cursor>) -> bool + Clone,
{
    type Cursor = FilterCursor<R::Cursor, P>;

    /// Scans to the first match, so this is linear in the number of
    /// leading rejected elements.
    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        FilterCursor::new(
            self.base.begin_cursor(),
            self.base.end_cursor(),
            self.predicate.clone(),
        )
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        FilterCursor::new(
            self.base.end_cursor(),
            self.base.end_cursor(),
            self.predicate.clone(),
        )
    }
}

impl_range_traits!([R, P] FilteredRange<R, P>);

/// Keeps the elements of `range` for which `predicate` returns `true`.
#[inline]
pub fn filter<R, P>(range: R, predicate: P) -> FilteredRange<R, P>
where
    R: Range,
    P: Fn(&ReferenceOf<R::Cursor>) -> bool + Clone,
{
    FilteredRange {
        base: range,
        predicate,
    }
}

/// Keeps the elements of `[first, last)` for which `predicate` returns
/// `true`.
#[inline]
pub fn filter_between<C, P>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
    predicate: P,
) -> FilteredRange<IteratorRange<C>, P>
where
    C: Cursor + Clone,
    P: Fn(&C::Reference) -> bool + Clone,
{
    filter(IteratorRange::from_facades(first, last), predicate)
}
