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

//! # Index Cursor
//!
//! A virtual integer sequence: the cursor *is* its value, so there is no
//! storage behind it. Index ranges are the building block for enumeration,
//! bit-index ranges and any adaptor that needs positions rather than
//! elements.
//!
//! ```rust
//! use spindle_core::cursor::index::index_range;
//! use spindle_core::range::RangeFacade;
//!
//! let digits = index_range(0_u8, 10);
//! assert_eq!(digits.size(), 10);
//! assert_eq!(digits.iter().sum::<u8>(), 45);
//!
//! // A reversed pair is clamped to an empty range.
//! assert!(index_range(5_i32, 2).is_empty());
//! ```

use crate::category::RandomAccess;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::range::iterator_range::IteratorRange;
use num_traits::{NumCast, PrimInt};
use std::fmt;

/// Cursor over consecutive integers.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexCursor<T> {
    value: T,
}

impl<T> IndexCursor<T>
where
    T: PrimInt,
{
    /// Creates a cursor positioned at `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// The current value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for IndexCursor<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexCursor({:?})", self.value)
    }
}

impl<T> Cursor for IndexCursor<T>
where
    T: PrimInt,
{
    type Reference = T;
    type Category = RandomAccess;

    #[inline]
    fn dereference(&self) -> T {
        self.value
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.value == other.value
    }

    #[inline]
    fn increment(&mut self) {
        self.value = self.value + T::one();
    }
}

impl<T> BidirectionalCursor for IndexCursor<T>
where
    T: PrimInt,
{
    #[inline]
    fn decrement(&mut self) {
        self.value = self.value - T::one();
    }
}

impl<T> RandomAccessCursor for IndexCursor<T>
where
    T: PrimInt,
{
    #[inline]
    fn advance(&mut self, n: isize) {
        let step: Option<T> = <T as NumCast>::from(n.unsigned_abs());
        let moved = step.and_then(|step| {
            if n >= 0 {
                self.value.checked_add(&step)
            } else {
                self.value.checked_sub(&step)
            }
        });
        self.value = moved.expect("called `advance` past the range of the index type");
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        // Subtract the smaller from the larger so unsigned types never wrap.
        let (low, high) = if self.value <= other.value {
            (self.value, other.value)
        } else {
            (other.value, self.value)
        };
        let magnitude = high
            .checked_sub(&low)
            .and_then(|gap| gap.to_isize())
            .expect("index distance does not fit into `isize`");
        if self.value <= other.value { magnitude } else { -magnitude }
    }
}

/// The integers `[begin, end)`.
///
/// If `end < begin` the range is empty: `begin` is clamped to `end`.
#[inline]
pub fn index_range<T>(begin: T, end: T) -> IteratorRange<IndexCursor<T>>
where
    T: PrimInt,
{
    let begin = if begin < end { begin } else { end };
    IteratorRange::new(IndexCursor::new(begin), IndexCursor::new(end))
}
