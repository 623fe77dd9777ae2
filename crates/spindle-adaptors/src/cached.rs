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

//! # Cached
//!
//! Memoizes the most recent dereference. Useful on top of an expensive
//! [`transform`](crate::transform::transform): reading the same position
//! several times runs the function once. The cache is dropped on every
//! move, so it never serves a stale value.
//!
//! ```rust
//! use spindle_adaptors::cached::cached;
//! use spindle_adaptors::transform::transform;
//! use spindle_core::cursor::index::index_range;
//! use spindle_core::range::RangeFacade;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let slow_square = |x: u64| {
//!     calls.set(calls.get() + 1);
//!     x * x
//! };
//! let squares = cached(transform(index_range(0_u64, 4), slow_square));
//!
//! let it = squares.begin();
//! assert_eq!(it.get() + it.get() + it.get(), 0);
//! assert_eq!(calls.get(), 1);
//! ```

use spindle_core::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};
use std::cell::OnceCell;
use std::fmt;

/// Cursor remembering the value at its current position.
pub struct CachedCursor<C>
where
    C: Cursor,
{
    base: C,
    cache: OnceCell<C::Reference>,
}

impl<C> CachedCursor<C>
where
    C: Cursor,
    C::Reference: Clone,
{
    /// Wraps `base` with an empty cache.
    #[inline]
    pub fn new(base: C) -> Self {
        Self {
            base,
            cache: OnceCell::new(),
        }
    }

    /// The underlying cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Whether the current position has been read since the last move.
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Forgets the remembered value.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cache.take();
    }
}

impl<C> Clone for CachedCursor<C>
where
    C: Cursor + Clone,
    C::Reference: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<C> fmt::Debug for CachedCursor<C>
where
    C: Cursor + fmt::Debug,
    C::Reference: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedCursor")
            .field("base", &self.base)
            .field("cache", &self.cache.get())
            .finish()
    }
}

impl<C> Cursor for CachedCursor<C>
where
    C: Cursor,
    C::Reference: Clone,
{
    type Reference = C::Reference;
    type Category = C::Category;

    #[inline]
    fn dereference(&self) -> C::Reference {
        self.cache.get_or_init(|| self.base.dereference()).clone()
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    #[inline]
    fn increment(&mut self) {
        self.base.increment();
        self.invalidate();
    }

    #[inline]
    fn referent_address(reference: &C::Reference) -> Option<*const u8> {
        C::referent_address(reference)
    }
}

impl<C> BidirectionalCursor for CachedCursor<C>
where
    C: BidirectionalCursor,
    C::Reference: Clone,
{
    #[inline]
    fn decrement(&mut self) {
        self.base.decrement();
        self.invalidate();
    }
}

impl<C> RandomAccessCursor for CachedCursor<C>
where
    C: RandomAccessCursor,
    C::Reference: Clone,
{
    #[inline]
    fn advance(&mut self, n: isize) {
        self.base.advance(n);
        self.invalidate();
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// A range whose cursors memoize their last read.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedRange<R> {
    base: R,
}

impl<R> Range for CachedRange<R>
where
    R: Range,
    <R::Cursor as Cursor>::Reference: Clone,
{
    type Cursor = CachedCursor<R::Cursor>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        CachedCursor::new(self.base.begin_cursor())
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        CachedCursor::new(self.base.end_cursor())
    }
}

impl_range_traits!([R] CachedRange<R>);

/// Memoizes the last dereferenced value of each cursor over `range`.
#[inline]
pub fn cached<R>(range: R) -> CachedRange<R>
where
    R: Range,
    <R::Cursor as Cursor>::Reference: Clone,
{
    CachedRange { base: range }
}

/// Memoizes the last dereferenced value of each cursor over
/// `[first, last)`.
#[inline]
pub fn cached_between<C>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
) -> CachedRange<IteratorRange<C>>
where
    C: Cursor + Clone,
    C::Reference: Clone,
{
    cached(IteratorRange::from_facades(first, last))
}
