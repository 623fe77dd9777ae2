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

//! # Transform
//!
//! Applies a unary function to every element on dereference. The category
//! is passed through unchanged: transforming a random-access range yields a
//! random-access range.
//!
//! The function is stored by value in every cursor, so it must be `Clone`
//! (non-capturing closures, closures over references and function pointers
//! all are). It runs on every dereference; wrap the result in
//! [`cached`](crate::cached::cached) when that is expensive.
//!
//! ```rust
//! use spindle_adaptors::transform::transform;
//! use spindle_core::range::RangeFacade;
//!
//! let celsius = [0, 40, 100];
//! let fahrenheit = transform(&celsius, |c: &i32| c * 9 / 5 + 32);
//!
//! assert_eq!(fahrenheit.size(), 3);
//! assert_eq!(fahrenheit.at(2), 212);
//! assert_eq!(fahrenheit.iter().collect::<Vec<_>>(), vec![32, 104, 212]);
//! ```

use spindle_core::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, ReferenceOf};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};
use std::fmt;

/// Cursor yielding `function(*base)`.
#[derive(Clone, Copy)]
pub struct TransformCursor<C, F> {
    base: C,
    function: F,
}

impl<C, F> TransformCursor<C, F> {
    /// Wraps `base`, applying `function` on dereference.
    #[inline]
    pub const fn new(base: C, function: F) -> Self {
        Self { base, function }
    }

    /// The underlying cursor.
    #[inline]
    pub const fn base(&self) -> &C {
        &self.base
    }
}

impl<C, F> fmt::Debug for TransformCursor<C, F>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<C, F, O> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Reference) -> O,
{
    type Reference = O;
    type Category = C::Category;

    #[inline]
    fn dereference(&self) -> O {
        (self.function)(self.base.dereference())
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    #[inline]
    fn increment(&mut self) {
        self.base.increment();
    }
}

impl<C, F, O> BidirectionalCursor for TransformCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Reference) -> O,
{
    #[inline]
    fn decrement(&mut self) {
        self.base.decrement();
    }
}

impl<C, F, O> RandomAccessCursor for TransformCursor<C, F>
where
    C: RandomAccessCursor,
    F: Fn(C::Reference) -> O,
{
    #[inline]
    fn advance(&mut self, n: isize) {
        self.base.advance(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// A range whose elements are `function(x)` for every `x` in `base`.
#[derive(Clone, Copy)]
pub struct TransformedRange<R, F> {
    base: R,
    function: F,
}

impl<R, F> fmt::Debug for TransformedRange<R, F>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformedRange")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<R, F, O> Range for TransformedRange<R, F>
where
    R: Range,
    F: Fn(ReferenceOf<R::Cursor>) -> O + Clone,
{
    type Cursor = TransformCursor<R::Cursor, F>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        TransformCursor::new(self.base.begin_cursor(), self.function.clone())
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        TransformCursor::new(self.base.end_cursor(), self.function.clone())
    }
}

impl_range_traits!([R, F] TransformedRange<R, F>);

/// Maps every element of `range` through `function`.
#[inline]
pub fn transform<R, F, O>(range: R, function: F) -> TransformedRange<R, F>
where
    R: Range,
    F: Fn(ReferenceOf<R::Cursor>) -> O + Clone,
{
    TransformedRange {
        base: range,
        function,
    }
}

/// Maps every element of `[first, last)` through `function`.
#[inline]
pub fn transform_between<C, F, O>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
    function: F,
) -> TransformedRange<IteratorRange<C>, F>
where
    C: Cursor + Clone,
    F: Fn(C::Reference) -> O + Clone,
{
    transform(IteratorRange::from_facades(first, last), function)
}
