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

//! # Adjacent Windows
//!
//! Sliding windows of `N` consecutive elements. The cursor keeps `N`
//! synchronized base cursors in a ring: moving forward duplicates the
//! trailing cursor into the slot of the element that drops out, moving
//! backward duplicates the leading one. Dereferencing yields a [`Window`]
//! proxy holding the `N` element references in order.
//!
//! The base must be multi-pass. A base shorter than `N` yields no windows.
//! The [`circular`] submodule provides the wrapping variant.
//!
//! ```rust
//! use spindle_adaptors::adjacent::adjacent;
//! use spindle_core::range::RangeFacade;
//!
//! let readings = [3, 5, 4, 8, 6];
//! let rising = adjacent::<2, _>(&readings)
//!     .iter()
//!     .filter(|pair| pair.front() < pair.back())
//!     .count();
//! assert_eq!(rising, 2);
//! ```

pub mod circular;

use spindle_core::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};
use spindle_core::facade::IteratorFacade;
use spindle_core::impl_range_traits;
use spindle_core::range::{IteratorRange, Range};
use std::array;
use std::ops::Deref;

/// `N` neighbouring elements, first to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window<R, const N: usize> {
    items: [R; N],
}

impl<R, const N: usize> Window<R, N> {
    /// Wraps the element references of one window.
    #[inline]
    pub const fn new(items: [R; N]) -> Self {
        Self { items }
    }

    /// The first element.
    #[inline]
    pub fn front(&self) -> &R {
        &self.items[0]
    }

    /// The last element.
    #[inline]
    pub fn back(&self) -> &R {
        &self.items[N - 1]
    }

    /// Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Windows are never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// A copy of the references as an array.
    #[inline]
    pub fn to_array(&self) -> [R; N]
    where
        R: Clone,
    {
        self.items.clone()
    }

    /// The references as an array.
    #[inline]
    pub fn into_array(self) -> [R; N] {
        self.items
    }
}

impl<R, const N: usize> Deref for Window<R, N> {
    type Target = [R; N];

    #[inline]
    fn deref(&self) -> &[R; N] {
        &self.items
    }
}

impl<R, const N: usize> IntoIterator for Window<R, N> {
    type Item = R;
    type IntoIter = array::IntoIter<R, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Cursor over the windows of a base range.
///
/// The window starts at ring slot `offset`. The past-the-end cursor built
/// by a range has every slot at the base end and is flagged as a sentinel,
/// so stepping back from it rebuilds the ring from the back.
#[derive(Debug, Clone, Copy)]
pub struct AdjacentCursor<C, const N: usize> {
    cursors: [C; N],
    offset: usize,
    sentinel: bool,
}

impl<C, const N: usize> AdjacentCursor<C, N>
where
    C: ForwardCursor,
{
    /// The window starting at `first`.
    ///
    /// Never steps past `last`: a window that would run off the end rests
    /// with its trailing cursor at `last`, which compares equal to the end.
    pub fn new(first: C, last: &C) -> Self {
        let mut walker = first;
        let cursors = array::from_fn(|slot| {
            let current = walker.clone();
            if slot + 1 < N && !walker.is_equal(last) {
                walker.increment();
            }
            current
        });
        Self {
            cursors,
            offset: 0,
            sentinel: false,
        }
    }

    /// The past-the-end cursor for a base ending at `last`.
    pub fn end(last: C) -> Self {
        Self {
            cursors: array::from_fn(|_| last.clone()),
            offset: 0,
            sentinel: true,
        }
    }

    #[inline]
    fn slot(&self, k: usize) -> usize {
        (self.offset + k) % N
    }

    /// The base cursor at the last element of the window.
    #[inline]
    pub fn back(&self) -> &C {
        &self.cursors[self.slot(N - 1)]
    }

    /// The base cursor at the first element of the window.
    #[inline]
    pub fn front(&self) -> &C {
        &self.cursors[self.offset]
    }
}

impl<C, const N: usize> Cursor for AdjacentCursor<C, N>
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
        self.back().is_equal(other.back())
    }

    #[inline]
    fn increment(&mut self) {
        let mut next = self.back().clone();
        next.increment();
        self.cursors[self.offset] = next;
        self.offset = self.slot(1);
    }
}

impl<C, const N: usize> BidirectionalCursor for AdjacentCursor<C, N>
where
    C: ForwardCursor + BidirectionalCursor,
{
    fn decrement(&mut self) {
        if self.sentinel {
            let mut walker = self.back().clone();
            let mut cursors: [C; N] = array::from_fn(|_| walker.clone());
            for slot in cursors.iter_mut().rev() {
                walker.decrement();
                *slot = walker.clone();
            }
            self.cursors = cursors;
            self.offset = 0;
            self.sentinel = false;
            return;
        }
        let mut previous = self.front().clone();
        previous.decrement();
        let back = self.slot(N - 1);
        self.cursors[back] = previous;
        self.offset = back;
    }
}

impl<C, const N: usize> RandomAccessCursor for AdjacentCursor<C, N>
where
    C: ForwardCursor + RandomAccessCursor,
{
    fn advance(&mut self, n: isize) {
        let mut back = self.back().clone();
        back.advance(n);
        self.cursors = array::from_fn(|slot| {
            let mut cursor = back.clone();
            cursor.advance(slot as isize - (N as isize - 1));
            cursor
        });
        self.offset = 0;
        self.sentinel = false;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.back().distance_to(other.back())
    }
}

/// The `N`-element windows of a base range.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentRange<R, const N: usize> {
    base: R,
}

impl<R, const N: usize> Range for AdjacentRange<R, N>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    type Cursor = AdjacentCursor<R::Cursor, N>;

    #[inline]
    fn begin_cursor(&self) -> Self::Cursor {
        AdjacentCursor::new(self.base.begin_cursor(), &self.base.end_cursor())
    }

    #[inline]
    fn end_cursor(&self) -> Self::Cursor {
        AdjacentCursor::end(self.base.end_cursor())
    }
}

impl_range_traits!([R, const N: usize] AdjacentRange<R, N>);

/// The windows of `N` consecutive elements of `range`.
///
/// A window size of zero is rejected at compile time.
#[inline]
pub fn adjacent<const N: usize, R>(range: R) -> AdjacentRange<R, N>
where
    R: Range,
    R::Cursor: ForwardCursor,
{
    const { assert!(N > 0, "window size must be at least one") };
    AdjacentRange { base: range }
}

/// The windows of `N` consecutive elements of `[first, last)`.
#[inline]
pub fn adjacent_between<const N: usize, C>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
) -> AdjacentRange<IteratorRange<C>, N>
where
    C: ForwardCursor,
{
    adjacent(IteratorRange::from_facades(first, last))
}
