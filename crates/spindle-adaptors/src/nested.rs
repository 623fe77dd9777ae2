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

//! # Nested
//!
//! The Cartesian product of up to four ranges, in row-major order: the last
//! range varies fastest. Every range but the first is walked many times, so
//! those must be multi-pass ([`ForwardCursor`]). Moving the product
//! backwards borrows the way decimal subtraction does, so the product is
//! bidirectional at most.
//!
//! If any range is empty the product is empty.
//!
//! ```rust
//! use spindle_adaptors::nested::nest;
//! use spindle_core::cursor::index::index_range;
//!
//! let grid: Vec<(u8, char)> = nest((index_range(0_u8, 2), &['a', 'b', 'c']))
//!     .into_iter()
//!     .map(|(row, column)| (row, *column))
//!     .collect();
//!
//! assert_eq!(
//!     grid,
//!     vec![(0, 'a'), (0, 'b'), (0, 'c'), (1, 'a'), (1, 'b'), (1, 'c')]
//! );
//! ```

use spindle_core::category::Bidirectional;
use spindle_core::cursor::{BidirectionalCursor, Cursor, ForwardCursor};
use spindle_core::impl_range_traits;
use spindle_core::least_permissive;
use spindle_core::range::Range;

/// Cursor over the product of a tuple of ranges.
///
/// Holds the bounds of every component next to the current position. The
/// past-the-end position is the first component at its end and every other
/// component at its beginning.
#[derive(Debug, Clone, Copy)]
pub struct NestedCursor<T> {
    begins: T,
    ends: T,
    current: T,
}

impl<T> NestedCursor<T> {
    /// The component cursors at the current position.
    #[inline]
    pub const fn current(&self) -> &T {
        &self.current
    }
}

/// The product of a tuple of ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedRange<T> {
    ranges: T,
}

macro_rules! impl_nested {
    ($outer:ident $oidx:tt $(, $inner:ident $iidx:tt)* ; $($ridx:tt)*) => {
        impl<$outer $(, $inner)*> Cursor for NestedCursor<($outer, $($inner,)*)>
        where
            $outer: Cursor + Clone,
            $($inner: ForwardCursor,)*
        {
            type Reference = ($outer::Reference, $($inner::Reference,)*);
            type Category = least_permissive!(
                <$outer as Cursor>::Category,
                $(<$inner as Cursor>::Category,)*
                Bidirectional
            );

            #[inline]
            fn dereference(&self) -> Self::Reference {
                (
                    self.current.$oidx.dereference(),
                    $(self.current.$iidx.dereference(),)*
                )
            }

            #[inline]
            fn is_equal(&self, other: &Self) -> bool {
                self.current.$oidx.is_equal(&other.current.$oidx)
                    $(&& self.current.$iidx.is_equal(&other.current.$iidx))*
            }

            #[inline]
            fn increment(&mut self) {
                $(
                    self.current.$ridx.increment();
                    if !self.current.$ridx.is_equal(&self.ends.$ridx) {
                        return;
                    }
                    self.current.$ridx = self.begins.$ridx.clone();
                )*
                self.current.$oidx.increment();
            }
        }

        impl<$outer $(, $inner)*> BidirectionalCursor for NestedCursor<($outer, $($inner,)*)>
        where
            $outer: BidirectionalCursor + Clone,
            $($inner: ForwardCursor + BidirectionalCursor,)*
        {
            #[inline]
            fn decrement(&mut self) {
                $(
                    if !self.current.$ridx.is_equal(&self.begins.$ridx) {
                        self.current.$ridx.decrement();
                        return;
                    }
                    self.current.$ridx = self.ends.$ridx.clone();
                    self.current.$ridx.decrement();
                )*
                self.current.$oidx.decrement();
            }
        }

        impl<$outer $(, $inner)*> Range for NestedRange<($outer, $($inner,)*)>
        where
            $outer: Range,
            $outer::Cursor: Clone,
            $($inner: Range, $inner::Cursor: ForwardCursor,)*
        {
            type Cursor = NestedCursor<($outer::Cursor, $($inner::Cursor,)*)>;

            fn begin_cursor(&self) -> Self::Cursor {
                let begins = (
                    self.ranges.$oidx.begin_cursor(),
                    $(self.ranges.$iidx.begin_cursor(),)*
                );
                let ends = (
                    self.ranges.$oidx.end_cursor(),
                    $(self.ranges.$iidx.end_cursor(),)*
                );
                let any_empty = begins.$oidx.is_equal(&ends.$oidx)
                    $(|| begins.$iidx.is_equal(&ends.$iidx))*;
                if any_empty {
                    return self.end_cursor();
                }
                NestedCursor {
                    current: begins.clone(),
                    begins,
                    ends,
                }
            }

            fn end_cursor(&self) -> Self::Cursor {
                let begins = (
                    self.ranges.$oidx.begin_cursor(),
                    $(self.ranges.$iidx.begin_cursor(),)*
                );
                let ends = (
                    self.ranges.$oidx.end_cursor(),
                    $(self.ranges.$iidx.end_cursor(),)*
                );
                let current = (
                    ends.$oidx.clone(),
                    $(begins.$iidx.clone(),)*
                );
                NestedCursor {
                    begins,
                    ends,
                    current,
                }
            }
        }

        impl<$outer $(, $inner)*> From<($outer, $($inner,)*)> for NestedRange<($outer, $($inner,)*)>
        where
            $outer: Range,
            $($inner: Range,)*
        {
            #[inline]
            fn from(ranges: ($outer, $($inner,)*)) -> Self {
                Self { ranges }
            }
        }

        impl_range_traits!([$outer $(, $inner)*] NestedRange<($outer, $($inner,)*)>);
    };
}

impl_nested!(A 0;);
impl_nested!(A 0, B 1; 1);
impl_nested!(A 0, B 1, C 2; 2 1);
impl_nested!(A 0, B 1, C 2, D 3; 3 2 1);

/// The Cartesian product of a tuple of one to four ranges.
#[inline]
pub fn nest<T>(ranges: T) -> NestedRange<T>
where
    NestedRange<T>: Range + From<T>,
{
    NestedRange::from(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use spindle_core::category::{Forward, Tier};
    use spindle_core::cursor::index::index_range;
    use spindle_core::facade::IteratorFacade;
    use spindle_core::range::{IteratorRange, RangeFacade};

    fn tier_of<C: Cursor>(_: &C) -> Tier {
        IteratorFacade::<C>::TIER
    }

    #[test]
    fn test_row_major_order() {
        let product = nest((index_range(0_u8, 2), index_range(0_u8, 2), index_range(0_u8, 2)));
        let bits: Vec<u8> = product.iter().map(|(a, b, c)| a << 2 | b << 1 | c).collect();
        assert_eq!(bits, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_reverse_walk() {
        let rows = ['x', 'y'];
        let columns = [1, 2, 3];
        let backwards: Vec<(char, i32)> = nest((&rows, &columns))
            .iter()
            .rev()
            .map(|(r, c)| (*r, *c))
            .collect();
        assert_eq!(
            backwards,
            vec![('y', 3), ('y', 2), ('y', 1), ('x', 3), ('x', 2), ('x', 1)]
        );
    }

    #[test]
    fn test_any_empty_component_empties_product() {
        let empty: Vec<i32> = Vec::new();
        let some = vec![1, 2];
        assert!(nest((&empty, &some)).is_empty());
        assert!(nest((&some, &empty)).is_empty());
        assert!(nest((&some, &some, &empty, &some)).is_empty());
        assert_eq!(nest((&some, &empty)).iter().count(), 0);
    }

    #[test]
    fn test_category_is_capped() {
        let a = [1, 2];
        assert_eq!(tier_of(&nest((&a, &a)).begin_cursor()), Tier::Bidirectional);

        #[derive(Debug, Clone)]
        struct Up(u8);
        impl Cursor for Up {
            type Reference = u8;
            type Category = Forward;
            fn dereference(&self) -> u8 {
                self.0
            }
            fn is_equal(&self, other: &Self) -> bool {
                self.0 == other.0
            }
            fn increment(&mut self) {
                self.0 += 1;
            }
        }
        let forward = nest((&a, IteratorRange::new(Up(0), Up(2))));
        assert_eq!(tier_of(&forward.begin_cursor()), Tier::Forward);
        assert_eq!(forward.iter().count(), 4);
    }

    #[test]
    fn test_single_range_product() {
        let single = nest((index_range(5_i32, 8),));
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![(5,), (6,), (7,)]);
        assert_eq!(single.iter().rev().next(), Some((7,)));
    }

    #[test]
    fn test_inner_filter() {
        let evens = filter(index_range(0_u32, 6), |x: &u32| x % 2 == 0);
        let product = nest((index_range(0_u32, 2), evens));
        assert_eq!(
            product.iter().collect::<Vec<_>>(),
            vec![(0, 0), (0, 2), (0, 4), (1, 0), (1, 2), (1, 4)]
        );
    }

    #[test]
    fn test_increment_then_decrement() {
        let a = [1, 2, 3];
        let b = [4, 5];
        let product = nest((&a, &b));
        let mut it = product.begin();
        for _ in 0..3 {
            it.inc();
        }
        assert_eq!(it.get(), (&2, &5));
        it.inc();
        it.dec();
        assert_eq!(it.get(), (&2, &5));
        it.dec();
        assert_eq!(it.get(), (&2, &4));
        it.dec();
        assert_eq!(it.get(), (&1, &5));
    }
}
