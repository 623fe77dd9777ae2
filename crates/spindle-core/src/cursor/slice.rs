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

//! Random-access cursors over borrowed std containers.
//!
//! Positions are plain indices into the borrowed container, so a cursor
//! may sit anywhere (including past the end) without unsafety; reading an
//! out-of-bounds position panics like ordinary indexing. For in-place
//! mutation iterate a `&[Cell<T>]` (see [`Cell::as_slice_of_cells`]).
//!
//! [`Cell::as_slice_of_cells`]: std::cell::Cell::as_slice_of_cells

use crate::category::RandomAccess;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::facade::IteratorFacade;
use std::collections::VecDeque;

/// Cursor over a borrowed slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

/// Cursor over a borrowed `VecDeque`.
#[derive(Debug)]
pub struct DequeCursor<'a, T> {
    items: &'a VecDeque<T>,
    index: usize,
}

macro_rules! impl_positional_cursor {
    ($name:ident, $container:ty) => {
        impl<'a, T> $name<'a, T> {
            /// Creates a cursor at `index` within `items`.
            #[inline]
            pub const fn new(items: &'a $container, index: usize) -> Self {
                Self { items, index }
            }

            /// The current position.
            #[inline]
            pub const fn index(&self) -> usize {
                self.index
            }
        }

        // Manual impls: deriving would require `T: Clone`.
        impl<T> Clone for $name<'_, T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<'a, T> Cursor for $name<'a, T> {
            type Reference = &'a T;
            type Category = RandomAccess;

            #[inline]
            fn dereference(&self) -> &'a T {
                &self.items[self.index]
            }

            #[inline]
            fn is_equal(&self, other: &Self) -> bool {
                debug_assert!(
                    std::ptr::eq(self.items, other.items),
                    "compared cursors over different containers"
                );
                self.index == other.index
            }

            #[inline]
            fn increment(&mut self) {
                self.index = self.index.wrapping_add(1);
            }

            #[inline]
            fn referent_address(reference: &&'a T) -> Option<*const u8> {
                Some((*reference as *const T).cast())
            }
        }

        impl<T> BidirectionalCursor for $name<'_, T> {
            #[inline]
            fn decrement(&mut self) {
                self.index = self.index.wrapping_sub(1);
            }
        }

        impl<T> RandomAccessCursor for $name<'_, T> {
            #[inline]
            fn advance(&mut self, n: isize) {
                self.index = self.index.wrapping_add_signed(n);
            }

            #[inline]
            fn distance_to(&self, other: &Self) -> isize {
                other.index.wrapping_sub(self.index) as isize
            }
        }

        impl<'a, T> std::ops::Index<isize> for IteratorFacade<$name<'a, T>> {
            type Output = T;

            #[inline]
            fn index(&self, n: isize) -> &T {
                self.at(n)
            }
        }
    };
}

impl_positional_cursor!(SliceCursor, [T]);
impl_positional_cursor!(DequeCursor, VecDeque<T>);
