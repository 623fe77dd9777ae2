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

//! # Iterator Facade
//!
//! `IteratorFacade<C>` wraps a [`Cursor`] and synthesizes the complete
//! iterator surface from its primitives: dereference, arrow access, indexed
//! access, pre/post increment and decrement, offset arithmetic, distances
//! and comparisons. Each operation is only available when the cursor
//! implements the trait that supplies the primitive it needs.
//!
//! | Surface                                   | Requires                 |
//! |-------------------------------------------|--------------------------|
//! | `get`, `inc`, `==`                        | `Cursor`                 |
//! | `post_inc`                                | `Cursor + Clone`         |
//! | `arrow`                                   | `Reference: Referent`    |
//! | `dec`, `post_dec`                         | `BidirectionalCursor`    |
//! | `at`, `+`, `-`, `+=`, `-=`, `<`, `a - b`  | `RandomAccessCursor`     |
//!
//! ## Usage
//!
//! ```rust
//! use spindle_core::cursor::slice::SliceCursor;
//! use spindle_core::facade::IteratorFacade;
//!
//! let data = [10, 20, 30, 40];
//! let mut it = IteratorFacade::new(SliceCursor::new(&data, 0));
//! let end = IteratorFacade::new(SliceCursor::new(&data, 4));
//!
//! assert_eq!(*it.get(), 10);
//! assert_eq!(*it.post_inc().get(), 10);
//! assert_eq!(*it.get(), 20);
//! assert_eq!(it[2], 40);
//! assert_eq!(end - it, 3);
//! assert!(it < end);
//! it += 3;
//! assert!(it == end);
//! ```
//!
//! ## Rejected at compile time
//!
//! A forward-only cursor has no `decrement`, so its facade has no `dec`:
//!
//! ```compile_fail
//! use spindle_core::category::Forward;
//! use spindle_core::cursor::Cursor;
//! use spindle_core::facade::IteratorFacade;
//!
//! #[derive(Clone)]
//! struct Countdown(u32);
//!
//! impl Cursor for Countdown {
//!     type Reference = u32;
//!     type Category = Forward;
//!
//!     fn dereference(&self) -> u32 {
//!         self.0
//!     }
//!
//!     fn is_equal(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//!
//!     fn increment(&mut self) {
//!         self.0 -= 1;
//!     }
//! }
//!
//! let mut it = IteratorFacade::new(Countdown(3));
//! it.dec();
//! ```
//!
//! A bidirectional cursor steps one position at a time; offset arithmetic
//! needs `advance`:
//!
//! ```compile_fail
//! use spindle_core::category::Bidirectional;
//! use spindle_core::cursor::{BidirectionalCursor, Cursor};
//! use spindle_core::facade::IteratorFacade;
//!
//! #[derive(Clone)]
//! struct Walker(i32);
//!
//! impl Cursor for Walker {
//!     type Reference = i32;
//!     type Category = Bidirectional;
//!
//!     fn dereference(&self) -> i32 {
//!         self.0
//!     }
//!
//!     fn is_equal(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//!
//!     fn increment(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! impl BidirectionalCursor for Walker {
//!     fn decrement(&mut self) {
//!         self.0 -= 1;
//!     }
//! }
//!
//! let it = IteratorFacade::new(Walker(0));
//! let _ = it + 1;
//! ```
//!
//! A cursor that yields values has no element address for `arrow`:
//!
//! ```compile_fail
//! use spindle_core::cursor::index::IndexCursor;
//! use spindle_core::facade::IteratorFacade;
//!
//! let it = IteratorFacade::new(IndexCursor::new(7_u32));
//! let _ = it.arrow();
//! ```
//!
//! Cursors of unrelated types cannot be subtracted unless the pair is
//! declared with [`interoperable_cursors!`](crate::interoperable_cursors):
//!
//! ```compile_fail
//! use spindle_core::cursor::index::IndexCursor;
//! use spindle_core::cursor::slice::SliceCursor;
//! use spindle_core::facade::IteratorFacade;
//!
//! let data = [1, 2, 3];
//! let slot = IteratorFacade::new(SliceCursor::new(&data, 2));
//! let index = IteratorFacade::new(IndexCursor::new(0_usize));
//! let _ = slot - index;
//! ```

use crate::category::{Category, Tier};
use crate::cursor::{
    BidirectionalCursor, Cursor, CursorDistance, CursorEq, RandomAccessCursor, Referent,
};
use std::cmp::Ordering;

/// A complete iterator synthesized from a cursor.
///
/// Copying a facade copies its cursor; there is no hidden sharing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorFacade<C> {
    cursor: C,
}

impl<C> IteratorFacade<C> {
    /// Wraps a cursor.
    #[inline]
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// The wrapped cursor.
    #[inline]
    pub const fn cursor(&self) -> &C {
        &self.cursor
    }

    /// The wrapped cursor, mutably.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Unwraps the cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C> From<C> for IteratorFacade<C>
where
    C: Cursor,
{
    #[inline]
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}

impl<C> IteratorFacade<C>
where
    C: Cursor,
{
    /// The cursor's capability tier.
    pub const TIER: Tier = <C::Category as Category>::TIER;

    /// Dereferences the iterator.
    #[inline]
    pub fn get(&self) -> C::Reference {
        self.cursor.dereference()
    }

    /// Address of the referenced element.
    ///
    /// Only available when the cursor hands out true references; a cursor
    /// that yields values has no element address to give.
    #[inline]
    pub fn arrow(&self) -> *const <C::Reference as Referent>::Target
    where
        C::Reference: Referent,
    {
        self.cursor.dereference().as_ptr()
    }

    /// Pre-increment.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.cursor.increment();
        self
    }

    /// Post-increment: returns a copy of the iterator before it moved.
    #[inline]
    pub fn post_inc(&mut self) -> Self
    where
        C: Clone,
    {
        let previous = self.clone();
        self.cursor.increment();
        previous
    }
}

impl<C> IteratorFacade<C>
where
    C: BidirectionalCursor,
{
    /// Pre-decrement.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.cursor.decrement();
        self
    }

    /// Post-decrement: returns a copy of the iterator before it moved.
    #[inline]
    pub fn post_dec(&mut self) -> Self
    where
        C: Clone,
    {
        let previous = self.clone();
        self.cursor.decrement();
        previous
    }
}

impl<C> IteratorFacade<C>
where
    C: RandomAccessCursor,
{
    /// Indexed access: the element `n` positions away.
    ///
    /// Advances a temporary copy of the cursor and dereferences it.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cursor reports that the reference it
    /// returned points into the temporary copy itself. Such a reference
    /// would dangle as soon as the copy is dropped.
    #[inline]
    pub fn at(&self, n: isize) -> C::Reference
    where
        C: Clone,
    {
        let mut temporary = self.cursor.clone();
        temporary.advance(n);
        let reference = temporary.dereference();

        if cfg!(debug_assertions) {
            if let Some(address) = C::referent_address(&reference) {
                let start = (&temporary as *const C).cast::<u8>();
                let end = start.wrapping_add(std::mem::size_of::<C>());
                debug_assert!(
                    !(start <= address && address < end),
                    "called `at` on a cursor whose reference points into the cursor itself"
                );
            }
        }

        reference
    }

    /// Signed number of increments from `self` to `other`.
    #[inline]
    pub fn distance_to<D>(&self, other: &IteratorFacade<D>) -> isize
    where
        C: CursorDistance<D>,
    {
        self.cursor.cursor_distance(&other.cursor)
    }
}

macro_rules! impl_offset_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $n:ident => $offset:expr) => {
        impl<C> std::ops::$assign_trait<isize> for IteratorFacade<C>
        where
            C: RandomAccessCursor,
        {
            #[inline]
            fn $assign_method(&mut self, $n: isize) {
                self.cursor.advance($offset);
            }
        }

        impl<C> std::ops::$trait_name<isize> for IteratorFacade<C>
        where
            C: RandomAccessCursor,
        {
            type Output = Self;

            #[inline]
            fn $method(mut self, $n: isize) -> Self::Output {
                self.cursor.advance($offset);
                self
            }
        }

        impl<C> std::ops::$trait_name<isize> for &IteratorFacade<C>
        where
            C: RandomAccessCursor + Clone,
        {
            type Output = IteratorFacade<C>;

            #[inline]
            fn $method(self, $n: isize) -> Self::Output {
                let mut moved = self.clone();
                moved.cursor.advance($offset);
                moved
            }
        }
    };
}

impl_offset_op!(Add, add, AddAssign, add_assign, n => n);
impl_offset_op!(Sub, sub, SubAssign, sub_assign, n => -n);

impl<C> std::ops::Add<IteratorFacade<C>> for isize
where
    C: RandomAccessCursor,
{
    type Output = IteratorFacade<C>;

    #[inline]
    fn add(self, it: IteratorFacade<C>) -> Self::Output {
        it + self
    }
}

impl<C, D> std::ops::Sub<IteratorFacade<D>> for IteratorFacade<C>
where
    D: CursorDistance<C>,
{
    type Output = isize;

    #[inline]
    fn sub(self, rhs: IteratorFacade<D>) -> isize {
        rhs.cursor.cursor_distance(&self.cursor)
    }
}

impl<C, D> std::ops::Sub<&IteratorFacade<D>> for &IteratorFacade<C>
where
    D: CursorDistance<C>,
{
    type Output = isize;

    #[inline]
    fn sub(self, rhs: &IteratorFacade<D>) -> isize {
        rhs.cursor.cursor_distance(&self.cursor)
    }
}

impl<C, D> PartialEq<IteratorFacade<D>> for IteratorFacade<C>
where
    C: CursorEq<D>,
{
    #[inline]
    fn eq(&self, other: &IteratorFacade<D>) -> bool {
        self.cursor.cursor_eq(&other.cursor)
    }
}

impl<C> Eq for IteratorFacade<C> where C: Cursor {}

impl<C, D> PartialOrd<IteratorFacade<D>> for IteratorFacade<C>
where
    C: CursorEq<D>,
    D: CursorDistance<C>,
{
    #[inline]
    fn partial_cmp(&self, other: &IteratorFacade<D>) -> Option<Ordering> {
        Some((self - other).cmp(&0))
    }
}

impl<C> Ord for IteratorFacade<C>
where
    C: RandomAccessCursor,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self - other).cmp(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Forward, RandomAccess};
    use crate::cursor::slice::SliceCursor;
    use crate::interoperable_cursors;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Counter(i32);

    impl Cursor for Counter {
        type Reference = i32;
        type Category = RandomAccess;

        fn dereference(&self) -> i32 {
            self.0
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }

        fn increment(&mut self) {
            self.0 += 1;
        }
    }

    impl BidirectionalCursor for Counter {
        fn decrement(&mut self) {
            self.0 -= 1;
        }
    }

    impl RandomAccessCursor for Counter {
        fn advance(&mut self, n: isize) {
            self.0 += n as i32;
        }

        fn distance_to(&self, other: &Self) -> isize {
            (other.0 - self.0) as isize
        }
    }

    // Same positions as `Counter`, widened values.
    #[derive(Debug, Clone, Copy)]
    struct WideCounter(i32);

    impl Cursor for WideCounter {
        type Reference = i64;
        type Category = RandomAccess;

        fn dereference(&self) -> i64 {
            i64::from(self.0)
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }

        fn increment(&mut self) {
            self.0 += 1;
        }
    }

    impl BidirectionalCursor for WideCounter {
        fn decrement(&mut self) {
            self.0 -= 1;
        }
    }

    impl RandomAccessCursor for WideCounter {
        fn advance(&mut self, n: isize) {
            self.0 += n as i32;
        }

        fn distance_to(&self, other: &Self) -> isize {
            (other.0 - self.0) as isize
        }
    }

    impl From<Counter> for WideCounter {
        fn from(counter: Counter) -> Self {
            WideCounter(counter.0)
        }
    }

    interoperable_cursors!([] Counter => WideCounter, random_access);

    #[derive(Debug, Clone)]
    struct Countdown(u8);

    impl Cursor for Countdown {
        type Reference = u8;
        type Category = Forward;

        fn dereference(&self) -> u8 {
            self.0
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }

        fn increment(&mut self) {
            self.0 -= 1;
        }
    }

    // Hands out a reference into its own storage; only sound to read
    // while the cursor is alive, which `at` cannot guarantee.
    #[derive(Debug, Clone)]
    struct SelfReferencing {
        value: i32,
    }

    impl Cursor for SelfReferencing {
        type Reference = *const i32;
        type Category = RandomAccess;

        fn dereference(&self) -> *const i32 {
            &self.value
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.value == other.value
        }

        fn increment(&mut self) {
            self.value += 1;
        }

        fn referent_address(reference: &*const i32) -> Option<*const u8> {
            Some(reference.cast())
        }
    }

    impl BidirectionalCursor for SelfReferencing {
        fn decrement(&mut self) {
            self.value -= 1;
        }
    }

    impl RandomAccessCursor for SelfReferencing {
        fn advance(&mut self, n: isize) {
            self.value += n as i32;
        }

        fn distance_to(&self, other: &Self) -> isize {
            (other.value - self.value) as isize
        }
    }

    fn it(value: i32) -> IteratorFacade<Counter> {
        IteratorFacade::new(Counter(value))
    }

    #[test]
    fn test_dereference_and_increment() {
        let mut i = it(3);
        assert_eq!(i.get(), 3);
        i.inc();
        assert_eq!(i.get(), 4);
        i.inc().inc();
        assert_eq!(i.get(), 6);
    }

    #[test]
    fn test_post_increment_and_decrement_yield_previous_value() {
        let mut i = it(10);
        assert_eq!(i.post_inc().get(), 10);
        assert_eq!(i.get(), 11);
        assert_eq!(i.post_dec().get(), 11);
        assert_eq!(i.get(), 10);
    }

    #[test]
    fn test_increment_decrement_inverse() {
        let origin = it(5);
        let mut i = origin;
        i.inc().dec();
        assert_eq!(i, origin);
        i.dec().inc();
        assert_eq!(i, origin);
    }

    #[test]
    fn test_offset_arithmetic() {
        let begin = it(0);
        assert_eq!((begin + 4).get(), 4);
        assert_eq!((4_isize + begin).get(), 4);
        assert_eq!((begin - 2).get(), -2);
        assert_eq!((&begin + 7).get(), 7);

        let mut moved = begin;
        moved += 9;
        assert_eq!(moved - begin, 9);
        moved -= 9;
        assert_eq!(moved, begin);
        assert_eq!(begin.at(3), 3);
        assert_eq!(begin.at(-1), -1);
    }

    #[test]
    fn test_comparisons_follow_distance() {
        let a = it(1);
        let b = it(4);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert!(a <= it(1) && a >= it(1));
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.distance_to(&b), 3);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let start = rng.random_range(-10_000..10_000);
            let n: isize = rng.random_range(-5_000i64..5_000) as isize;
            let origin = it(start);

            assert_eq!((origin + n) - n, origin);
            assert_eq!((origin + n) - origin, n);
            assert_eq!(origin - (origin + n), -n);
            assert_eq!((origin + n).get(), origin.at(n));
        }
    }

    #[test]
    fn test_heterogeneous_comparison_and_distance() {
        let narrow = it(2);
        let wide = IteratorFacade::new(WideCounter(6));

        assert!(narrow != wide);
        assert!(wide != narrow);
        assert!(narrow < wide);
        assert!(wide > narrow);
        assert_eq!(wide - narrow, 4);
        assert_eq!(narrow - wide, -4);

        let same = IteratorFacade::new(WideCounter(2));
        assert!(narrow == same);
        assert!(same == narrow);
        assert_eq!(same - narrow, 0);
    }

    #[test]
    fn test_forward_only_cursor() {
        let mut i = IteratorFacade::new(Countdown(3));
        let end = IteratorFacade::new(Countdown(0));
        let mut seen = Vec::new();
        while i != end {
            seen.push(i.post_inc().get());
        }
        assert_eq!(seen, [3, 2, 1]);
        assert_eq!(IteratorFacade::<Countdown>::TIER, Tier::Forward);
    }

    #[test]
    fn test_arrow_points_at_element() {
        let data = [1.5_f64, 2.5, 3.5];
        let mut i = IteratorFacade::new(SliceCursor::new(&data, 0));
        assert_eq!(i.arrow(), &data[0] as *const f64);
        i.inc();
        assert_eq!(i.arrow(), &data[1] as *const f64);
    }

    #[test]
    fn test_at_accepts_references_into_the_sequence() {
        let data = [7, 8, 9];
        let i = IteratorFacade::new(SliceCursor::new(&data, 0));
        assert_eq!(*i.at(2), 9);
        assert_eq!(i[1], 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "points into the cursor itself")]
    fn test_at_rejects_self_reference() {
        let i = IteratorFacade::new(SelfReferencing { value: 0 });
        let _ = i.at(1);
    }
}
