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

//! # Range Iterator
//!
//! Bridges a begin/end cursor pair into a std [`Iterator`], so every range
//! works with `for` loops and the std adaptor chain. The bridge forwards
//! capability: it is a `DoubleEndedIterator` when the cursor is
//! bidirectional and an `ExactSizeIterator` when it is random-access.
//!
//! ## Usage
//!
//! ```rust
//! use spindle_core::range::RangeFacade;
//!
//! let data = [1, 2, 3, 4];
//! let range = &data;
//!
//! let mut iter = range.iter();
//! assert_eq!(iter.len(), 4);
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&4));
//! assert_eq!(iter.copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use std::iter::FusedIterator;

/// A std iterator over the positions `[front, back)`.
#[derive(Debug, Clone)]
pub struct RangeIter<C> {
    front: C,
    back: C,
}

impl<C> RangeIter<C>
where
    C: Cursor,
{
    /// Creates an iterator from `front` up to (excluding) `back`.
    #[inline]
    pub fn new(front: C, back: C) -> Self {
        Self { front, back }
    }

    /// The remaining cursor pair.
    #[inline]
    pub fn into_cursors(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C> Iterator for RangeIter<C>
where
    C: Cursor,
{
    type Item = C::Reference;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_equal(&self.back) {
            return None;
        }
        let item = self.front.dereference();
        self.front.increment();
        Some(item)
    }
}

impl<C> FusedIterator for RangeIter<C> where C: Cursor {}

impl<C> DoubleEndedIterator for RangeIter<C>
where
    C: BidirectionalCursor,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.is_equal(&self.back) {
            return None;
        }
        self.back.decrement();
        Some(self.back.dereference())
    }
}

impl<C> ExactSizeIterator for RangeIter<C>
where
    C: RandomAccessCursor,
{
    #[inline]
    fn len(&self) -> usize {
        self.front.distance_to(&self.back).max(0) as usize
    }
}
