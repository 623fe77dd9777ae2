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

//! # Range Facade
//!
//! A range is anything that can hand out a begin and an end cursor. Range
//! authors implement [`Range`] (two cheap, pure methods) and receive the
//! rest of the range surface through the blanket [`RangeFacade`] extension:
//! facades for both ends, emptiness, size, front access, indexing, std
//! iteration and element-wise comparison.
//!
//! ## Owning and aliasing
//!
//! Every adaptor factory takes its base range **by value**, and what that
//! value is decides ownership:
//!
//! - a container reference (`&vec`, `&slice[..]`, `&array`, `&deque`)
//!   aliases the container without copying elements;
//! - [`alias(&range)`](alias) aliases any other range through a pair of
//!   its cursors;
//! - an adaptor range or an [`IteratorRange`] passed by value is moved in
//!   and owned by the result.
//!
//! Aliasing ranges borrow what they alias, so the borrow checker rejects
//! mutating a container while a range over it is alive.
//!
//! ```rust
//! use spindle_core::range::{alias, RangeFacade};
//!
//! let values = vec![3, 1, 4, 1, 5];
//! let view = &values;
//! assert_eq!(view.size(), 5);
//! assert_eq!(*view.front(), 3);
//! assert_eq!(*view.at(2), 4);
//!
//! let again = alias(&view);
//! assert!(again.elements_eq(&view));
//! ```

pub mod iter;
pub mod iterator_range;

use crate::algorithm::Traversal;
use crate::cursor::slice::{DequeCursor, SliceCursor};
use crate::cursor::{CategoryOf, Cursor, RandomAccessCursor, ReferenceOf};
use crate::facade::IteratorFacade;
use std::collections::VecDeque;

pub use iter::RangeIter;
pub use iterator_range::IteratorRange;

/// Something with a begin and an end cursor.
///
/// Both methods are called afresh for every `begin()`/`end()`; they must be
/// cheap and return the same positions every time.
pub trait Range {
    type Cursor: Cursor;

    /// Cursor at the first element.
    fn begin_cursor(&self) -> Self::Cursor;

    /// Cursor one past the last element.
    fn end_cursor(&self) -> Self::Cursor;
}

/// The complete range surface, provided for every [`Range`].
pub trait RangeFacade: Range {
    /// Iterator at the first element.
    #[inline]
    fn begin(&self) -> IteratorFacade<Self::Cursor> {
        IteratorFacade::new(self.begin_cursor())
    }

    /// Iterator one past the last element.
    #[inline]
    fn end(&self) -> IteratorFacade<Self::Cursor> {
        IteratorFacade::new(self.end_cursor())
    }

    /// `begin() == end()`.
    #[inline]
    fn is_empty(&self) -> bool {
        self.begin_cursor().is_equal(&self.end_cursor())
    }

    /// The range's truth value: `true` when it has elements.
    #[inline]
    fn is_nonempty(&self) -> bool {
        !self.is_empty()
    }

    /// `end() - begin()`.
    #[inline]
    fn size(&self) -> isize
    where
        Self::Cursor: RandomAccessCursor,
    {
        self.begin_cursor().distance_to(&self.end_cursor())
    }

    /// The first element. The range must not be empty.
    #[inline]
    fn front(&self) -> ReferenceOf<Self::Cursor> {
        debug_assert!(self.is_nonempty(), "called `front` on an empty range");
        self.begin_cursor().dereference()
    }

    /// The element `n` positions after the first.
    ///
    /// Constant time for random-access ranges, `n` steps otherwise.
    #[inline]
    fn at(&self, n: isize) -> ReferenceOf<Self::Cursor>
    where
        CategoryOf<Self::Cursor>: Traversal<Self::Cursor>,
    {
        let mut cursor = self.begin_cursor();
        <CategoryOf<Self::Cursor> as Traversal<Self::Cursor>>::advance_by(&mut cursor, n);
        cursor.dereference()
    }

    /// A std iterator over the elements.
    #[inline]
    fn iter(&self) -> RangeIter<Self::Cursor> {
        RangeIter::new(self.begin_cursor(), self.end_cursor())
    }

    /// Element-wise equality with any other range.
    fn elements_eq<R>(&self, other: &R) -> bool
    where
        R: Range + ?Sized,
        ReferenceOf<Self::Cursor>: PartialEq<ReferenceOf<R::Cursor>>,
    {
        let mut lhs = self.begin_cursor();
        let lhs_end = self.end_cursor();
        let mut rhs = other.begin_cursor();
        let rhs_end = other.end_cursor();

        loop {
            match (lhs.is_equal(&lhs_end), rhs.is_equal(&rhs_end)) {
                (true, true) => return true,
                (false, false) => {
                    if lhs.dereference() != rhs.dereference() {
                        return false;
                    }
                    lhs.increment();
                    rhs.increment();
                }
                _ => return false,
            }
        }
    }
}

impl<R> RangeFacade for R where R: Range + ?Sized {}

/// A non-owning view of `range`: its current begin and end cursors.
#[inline]
pub fn alias<R>(range: &R) -> IteratorRange<R::Cursor>
where
    R: Range + ?Sized,
{
    IteratorRange::new(range.begin_cursor(), range.end_cursor())
}

impl<'a, T> Range for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn begin_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, 0)
    }

    #[inline]
    fn end_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, self.len())
    }
}

impl<'a, T> Range for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn begin_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), 0)
    }

    #[inline]
    fn end_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), self.len())
    }
}

impl<'a, T, const N: usize> Range for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn begin_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), 0)
    }

    #[inline]
    fn end_cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.as_slice(), N)
    }
}

impl<'a, T> Range for &'a VecDeque<T> {
    type Cursor = DequeCursor<'a, T>;

    #[inline]
    fn begin_cursor(&self) -> DequeCursor<'a, T> {
        DequeCursor::new(*self, 0)
    }

    #[inline]
    fn end_cursor(&self) -> DequeCursor<'a, T> {
        DequeCursor::new(*self, self.len())
    }
}

/// Implements element-wise `PartialEq` and by-value `IntoIterator` for a
/// range type.
///
/// Every range in the family gets both; use this for ranges defined
/// outside this crate.
#[macro_export]
macro_rules! impl_range_traits {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*, Rhs> ::core::cmp::PartialEq<Rhs> for $ty
        where
            $ty: $crate::range::Range,
            Rhs: $crate::range::Range,
            $crate::cursor::ReferenceOf<<$ty as $crate::range::Range>::Cursor>:
                ::core::cmp::PartialEq<$crate::cursor::ReferenceOf<<Rhs as $crate::range::Range>::Cursor>>,
        {
            #[inline]
            fn eq(&self, other: &Rhs) -> bool {
                $crate::range::RangeFacade::elements_eq(self, other)
            }
        }

        impl<$($generics)*> ::core::iter::IntoIterator for $ty
        where
            $ty: $crate::range::Range,
        {
            type Item = $crate::cursor::ReferenceOf<<$ty as $crate::range::Range>::Cursor>;
            type IntoIter = $crate::range::RangeIter<<$ty as $crate::range::Range>::Cursor>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::range::RangeFacade::iter(&self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::index::index_range;
    use std::cell::Cell;

    #[test]
    fn test_slice_range_surface() {
        let data = [2, 4, 6, 8];
        let range = &data[..];
        assert_eq!(range.size(), 4);
        assert!(range.is_nonempty());
        assert_eq!(*range.front(), 2);
        assert_eq!(*range.at(3), 8);
        assert_eq!(range.end() - range.begin(), 4);
    }

    #[test]
    fn test_empty_ranges() {
        let empty: Vec<u8> = Vec::new();
        assert!((&empty).is_empty());
        assert!(!(&empty).is_nonempty());
        assert_eq!((&empty).size(), 0);
        assert_eq!((&empty).iter().count(), 0);
    }

    #[test]
    fn test_array_and_vec_views_agree() {
        let array = [1, 2, 3];
        let vec = vec![1, 2, 3];
        assert!((&array).elements_eq(&&vec));
        assert!((&vec).elements_eq(&&array[..]));
        assert!(!(&vec).elements_eq(&&array[..2]));
    }

    #[test]
    fn test_elements_eq_across_cursor_kinds() {
        let indices = index_range(0_usize, 4);
        let labels = [0_usize, 1, 2, 3].map(|i| i.to_string());
        let parsed: Vec<usize> = (&labels).iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(parsed, indices.iter().collect::<Vec<_>>());
        assert!(indices.elements_eq(&index_range(0_usize, 4)));
        assert!(indices == alias(&indices));
        assert!(indices != index_range(0_usize, 3));
    }

    #[test]
    fn test_alias_does_not_copy_elements() {
        let data = vec![String::from("a"), String::from("b")];
        let view = &data;
        let aliased = alias(&view);
        assert_eq!(aliased.begin().arrow(), &data[0] as *const String);
    }

    #[test]
    fn test_deque_range() {
        let deque: VecDeque<char> = "xyz".chars().collect();
        let range = &deque;
        assert_eq!(range.size(), 3);
        assert_eq!(range.iter().rev().collect::<String>(), "zyx");
    }

    #[test]
    fn test_mutation_through_cell_range() {
        let mut data = [1, 2, 3, 4];
        let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
        for cell in cells.iter() {
            cell.set(cell.get() * 10);
        }
        let range = cells;
        range.at(0).set(5);
        assert_eq!(data, [5, 20, 30, 40]);
    }
}
