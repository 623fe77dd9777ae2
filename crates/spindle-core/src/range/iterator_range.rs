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

//! A range made of two cursors.

use crate::cursor::Cursor;
use crate::facade::IteratorFacade;
use crate::range::Range;

/// The range `[begin, end)` of an explicit cursor pair.
///
/// Owns its cursors; whether that aliases the underlying elements depends
/// on the cursors (slice cursors borrow, index cursors own nothing).
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorRange<C> {
    begin: C,
    end: C,
}

impl<C> IteratorRange<C>
where
    C: Cursor,
{
    /// Creates the range `[begin, end)`.
    #[inline]
    pub const fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Creates the range between two iterators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spindle_core::range::{IteratorRange, RangeFacade};
    /// let data = [5, 6, 7, 8];
    /// let all = &data;
    /// let middle = IteratorRange::from_facades(all.begin() + 1, all.end() - 1);
    /// assert_eq!(middle.iter().copied().collect::<Vec<_>>(), vec![6, 7]);
    /// ```
    #[inline]
    pub fn from_facades(begin: IteratorFacade<C>, end: IteratorFacade<C>) -> Self {
        Self::new(begin.into_cursor(), end.into_cursor())
    }

    /// Splits the range back into its cursors.
    #[inline]
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C> Range for IteratorRange<C>
where
    C: Cursor + Clone,
{
    type Cursor = C;

    #[inline]
    fn begin_cursor(&self) -> C {
        self.begin.clone()
    }

    #[inline]
    fn end_cursor(&self) -> C {
        self.end.clone()
    }
}

impl<C> From<(IteratorFacade<C>, IteratorFacade<C>)> for IteratorRange<C>
where
    C: Cursor,
{
    #[inline]
    fn from((begin, end): (IteratorFacade<C>, IteratorFacade<C>)) -> Self {
        Self::from_facades(begin, end)
    }
}

crate::impl_range_traits!([C] IteratorRange<C>);
