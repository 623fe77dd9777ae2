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

//! # Zip
//!
//! Walks up to six ranges in lockstep. Dereferencing yields the tuple of the
//! component references, and the category is the least permissive among
//! the components.
//!
//! Two zip cursors compare equal as soon as *any* component pair does, so
//! iteration stops at the end of the shortest range. For the same reason
//! the distance between two zip cursors is the component distance of
//! smallest magnitude.
//!
//! The end cursor of a bidirectional zip is aligned: every component sits
//! at `begin + shortest length`, so walking back from `end()` visits the
//! same tuples as walking forward. Random-access zips align in constant
//! time; merely bidirectional zips find the aligned end by walking once
//! from the begin.
//!
//! ```rust
//! use spindle_adaptors::zip::zip;
//! use spindle_core::range::RangeFacade;
//!
//! let names = ["ada", "alan", "grace"];
//! let years = vec![1815, 1912, 1906, 2000];
//!
//! let pairs = zip((&names, &years));
//! assert_eq!(pairs.size(), 3);
//! assert_eq!(pairs.at(1), (&"alan", &1912));
//! ```

use spindle_core::algorithm::Traversal;
use spindle_core::category::{Bidirectional, Forward, Input, Output, RandomAccess};
use spindle_core::cursor::index::{IndexCursor, index_range};
use spindle_core::cursor::{BidirectionalCursor, CategoryOf, Cursor, RandomAccessCursor};
use spindle_core::impl_range_traits;
use spindle_core::least_permissive;
use spindle_core::range::{IteratorRange, Range};

/// Cursor over a tuple of component cursors.
///
/// `distance_to` reports the component distance closest to zero rather than
/// the plain minimum. Both agree whenever `other` is ahead of `self`; for
/// the opposite direction the nearest component keeps `a - b == -(b - a)`
/// and `a - b == 0` exactly when `a == b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T> ZipCursor<T> {
    /// Zips a tuple of cursors.
    #[inline]
    pub const fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// The component cursors.
    #[inline]
    pub const fn cursors(&self) -> &T {
        &self.cursors
    }

    /// Splits the cursor back into its components.
    #[inline]
    pub fn into_cursors(self) -> T {
        self.cursors
    }
}

/// Ranges walked in lockstep.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZippedRange<T> {
    ranges: T,
}

/// Placement of a zipped range's end cursor, chosen by the zip's category.
///
/// `ends` holds every component's own end. Single-direction zips keep it
/// as is, since any-component equality already stops at the shortest
/// range. Bidirectional zips move every component to the shortest length
/// so that decrementing from the end stays in lockstep.
pub trait LockstepEnd<C: Cursor> {
    fn lockstep_end(begin: C, ends: C) -> C;
}

impl<C: Cursor> LockstepEnd<C> for Input {
    #[inline]
    fn lockstep_end(_begin: C, ends: C) -> C {
        ends
    }
}

impl<C: Cursor> LockstepEnd<C> for Output {
    #[inline]
    fn lockstep_end(_begin: C, ends: C) -> C {
        ends
    }
}

impl<C: Cursor> LockstepEnd<C> for Forward {
    #[inline]
    fn lockstep_end(_begin: C, ends: C) -> C {
        ends
    }
}

impl<C: BidirectionalCursor> LockstepEnd<C> for Bidirectional {
    #[inline]
    fn lockstep_end(mut begin: C, ends: C) -> C {
        while !begin.is_equal(&ends) {
            begin.increment();
        }
        begin
    }
}

impl<C: RandomAccessCursor> LockstepEnd<C> for RandomAccess {
    #[inline]
    fn lockstep_end(mut begin: C, ends: C) -> C {
        let shortest = begin.distance_to(&ends);
        debug_assert!(shortest >= 0, "zipped component ends before its begin");
        begin.advance(shortest);
        begin
    }
}

macro_rules! impl_zip {
    ($($name:ident $idx:tt),+) => {
        impl<$($name),+> Cursor for ZipCursor<($($name,)+)>
        where
            $($name: Cursor,)+
        {
            type Reference = ($($name::Reference,)+);
            type Category = least_permissive!($(<$name as Cursor>::Category),+);

            #[inline]
            fn dereference(&self) -> Self::Reference {
                ($(self.cursors.$idx.dereference(),)+)
            }

            #[inline]
            fn is_equal(&self, other: &Self) -> bool {
                false $(|| self.cursors.$idx.is_equal(&other.cursors.$idx))+
            }

            #[inline]
            fn increment(&mut self) {
                $(self.cursors.$idx.increment();)+
            }
        }

        impl<$($name),+> BidirectionalCursor for ZipCursor<($($name,)+)>
        where
            $($name: BidirectionalCursor,)+
        {
            #[inline]
            fn decrement(&mut self) {
                $(self.cursors.$idx.decrement();)+
            }
        }

        impl<$($name),+> RandomAccessCursor for ZipCursor<($($name,)+)>
        where
            $($name: RandomAccessCursor,)+
        {
            #[inline]
            fn advance(&mut self, n: isize) {
                $(self.cursors.$idx.advance(n);)+
            }

            #[inline]
            fn distance_to(&self, other: &Self) -> isize {
                let mut nearest: Option<isize> = None;
                $(
                    let distance = self.cursors.$idx.distance_to(&other.cursors.$idx);
                    if nearest.is_none_or(|best| distance.unsigned_abs() < best.unsigned_abs()) {
                        nearest = Some(distance);
                    }
                )+
                nearest.unwrap_or(0)
            }
        }

        impl<$($name),+> Range for ZippedRange<($($name,)+)>
        where
            $($name: Range,)+
            CategoryOf<ZipCursor<($($name::Cursor,)+)>>: LockstepEnd<ZipCursor<($($name::Cursor,)+)>>,
        {
            type Cursor = ZipCursor<($($name::Cursor,)+)>;

            #[inline]
            fn begin_cursor(&self) -> Self::Cursor {
                ZipCursor::new(($(self.ranges.$idx.begin_cursor(),)+))
            }

            #[inline]
            fn end_cursor(&self) -> Self::Cursor {
                let ends = ZipCursor::new(($(self.ranges.$idx.end_cursor(),)+));
                <CategoryOf<Self::Cursor> as LockstepEnd<Self::Cursor>>::lockstep_end(
                    self.begin_cursor(),
                    ends,
                )
            }
        }

        impl<$($name),+> From<($($name,)+)> for ZippedRange<($($name,)+)>
        where
            $($name: Range,)+
        {
            #[inline]
            fn from(ranges: ($($name,)+)) -> Self {
                Self { ranges }
            }
        }

        impl_range_traits!([$($name),+] ZippedRange<($($name,)+)>);
    };
}

impl_zip!(A 0);
impl_zip!(A 0, B 1);
impl_zip!(A 0, B 1, C 2);
impl_zip!(A 0, B 1, C 2, D 3);
impl_zip!(A 0, B 1, C 2, D 3, E 4);
impl_zip!(A 0, B 1, C 2, D 3, E 4, F 5);

/// Zips a tuple of one to six ranges.
///
/// Each range is taken by value, so the tuple may mix borrowed container
/// views and owned adaptors.
#[inline]
pub fn zip<T>(ranges: T) -> ZippedRange<T>
where
    ZippedRange<T>: Range + From<T>,
{
    ZippedRange::from(ranges)
}

/// Pairs every element of `range` with its position, starting at 0.
///
/// The position range is as long as `range`, which is measured once on
/// construction (in constant time for random-access ranges).
///
/// ```rust
/// use spindle_adaptors::zip::enumerate;
///
/// let letters = ['x', 'y', 'z'];
/// let labelled: Vec<_> = enumerate(&letters).into_iter().collect();
/// assert_eq!(labelled, vec![(0, &'x'), (1, &'y'), (2, &'z')]);
/// ```
#[inline]
pub fn enumerate<R>(range: R) -> ZippedRange<(IteratorRange<IndexCursor<isize>>, R)>
where
    R: Range,
    CategoryOf<R::Cursor>: Traversal<R::Cursor>,
{
    let length = <CategoryOf<R::Cursor> as Traversal<R::Cursor>>::distance(
        &range.begin_cursor(),
        &range.end_cursor(),
    );
    ZippedRange::from((index_range(0, length), range))
}
