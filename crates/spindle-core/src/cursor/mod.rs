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

//! # Cursors
//!
//! A cursor is the small, primitive half of an iterator: it knows how to
//! read the element under it, compare itself to another cursor of the same
//! sequence, and move. [`IteratorFacade`](crate::facade::IteratorFacade)
//! turns any cursor into a full iterator with operators.
//!
//! The primitive set grows with the tier:
//!
//! | Trait                   | Primitives                           |
//! |-------------------------|--------------------------------------|
//! | [`Cursor`]              | `dereference`, `is_equal`, `increment` |
//! | [`BidirectionalCursor`] | `decrement`                          |
//! | [`RandomAccessCursor`]  | `advance`, `distance_to`             |
//!
//! Operators that need a primitive are bounded on the trait that supplies
//! it, so asking a forward-only cursor to step back is a compile error.
//!
//! ## Interoperable cursors
//!
//! Two different cursor types over the same sequence (for example a cursor
//! handing out `&Cell<T>` and one handing out `&T`) can be compared and
//! subtracted when one converts into the other. Declare the pair with
//! [`interoperable_cursors!`](crate::interoperable_cursors).

pub mod index;
pub mod slice;

use crate::category::{Category, MultiPass};

/// The primitive operations every cursor supplies.
pub trait Cursor {
    /// What dereferencing yields. Either a true reference (`&'a T`) or a
    /// value.
    type Reference;

    /// The declared capability tier.
    type Category: Category;

    /// Reads the element under the cursor.
    fn dereference(&self) -> Self::Reference;

    /// Returns `true` if both cursors denote the same position.
    fn is_equal(&self, other: &Self) -> bool;

    /// Moves one position forward.
    fn increment(&mut self);

    /// Address of the storage `reference` points into, if it points
    /// anywhere.
    ///
    /// Cursors built with `unsafe` code that hand out references should
    /// report them here; indexed access uses it to catch references into
    /// the cursor itself in debug builds.
    #[inline]
    fn referent_address(reference: &Self::Reference) -> Option<*const u8> {
        let _ = reference;
        None
    }
}

/// Cursors that can move backwards.
pub trait BidirectionalCursor: Cursor {
    /// Moves one position backward.
    fn decrement(&mut self);
}

/// Cursors with constant-time jumps.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves `n` positions; negative values move backwards.
    fn advance(&mut self, n: isize);

    /// Signed number of increments needed to get from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// Cursors that can be saved and replayed: cloning a cursor and walking
/// both copies yields the same sequence twice.
pub trait ForwardCursor: Cursor<Category: MultiPass> + Clone {}

impl<C> ForwardCursor for C where C: Cursor<Category: MultiPass> + Clone {}

/// The reference type of a cursor.
pub type ReferenceOf<C> = <C as Cursor>::Reference;

/// The category of a cursor.
pub type CategoryOf<C> = <C as Cursor>::Category;

/// The element type of a cursor whose reference is a true reference.
pub type ValueOf<C> = <<C as Cursor>::Reference as Referent>::Target;

/// True references, as opposed to values.
///
/// Arrow-access on a facade is only available when the cursor's reference
/// implements this trait.
pub trait Referent {
    type Target: ?Sized;

    /// The address of the referenced value.
    fn as_ptr(&self) -> *const Self::Target;
}

impl<T: ?Sized> Referent for &T {
    type Target = T;

    #[inline]
    fn as_ptr(&self) -> *const T {
        *self
    }
}

impl<T: ?Sized> Referent for &mut T {
    type Target = T;

    #[inline]
    fn as_ptr(&self) -> *const T {
        &**self
    }
}

/// Equality between cursors of possibly different types.
///
/// Every cursor is comparable with itself; other pairs are declared with
/// [`interoperable_cursors!`](crate::interoperable_cursors).
pub trait CursorEq<Rhs = Self> {
    fn cursor_eq(&self, rhs: &Rhs) -> bool;
}

impl<C: Cursor> CursorEq<C> for C {
    #[inline]
    fn cursor_eq(&self, rhs: &C) -> bool {
        self.is_equal(rhs)
    }
}

/// Signed distance between cursors of possibly different types.
///
/// `a.cursor_distance(&b)` is the number of increments from `a` to `b`.
pub trait CursorDistance<Rhs = Self> {
    fn cursor_distance(&self, rhs: &Rhs) -> isize;
}

impl<C: RandomAccessCursor> CursorDistance<C> for C {
    #[inline]
    fn cursor_distance(&self, rhs: &C) -> isize {
        self.distance_to(rhs)
    }
}

/// Declares two cursor types interoperable.
///
/// `$from` must convert into `$to` (`From<$from> for $to`) and both must be
/// `Clone`; `$to` is the canonical side that performs the comparison.
/// Add `random_access` to also allow distances and ordering.
///
/// Only one direction may be declared for a pair; declaring both would make
/// every comparison ambiguous, which is a coherence error.
///
/// # Examples
///
/// ```rust
/// use spindle_core::category::Forward;
/// use spindle_core::cursor::Cursor;
/// use spindle_core::facade::IteratorFacade;
/// use spindle_core::interoperable_cursors;
///
/// #[derive(Clone)]
/// struct Loud(u8);
/// #[derive(Clone)]
/// struct Quiet(u8);
///
/// impl Cursor for Loud {
///     type Reference = u8;
///     type Category = Forward;
///     fn dereference(&self) -> u8 { self.0 }
///     fn is_equal(&self, other: &Self) -> bool { self.0 == other.0 }
///     fn increment(&mut self) { self.0 += 1; }
/// }
///
/// impl Cursor for Quiet {
///     type Reference = u8;
///     type Category = Forward;
///     fn dereference(&self) -> u8 { self.0 }
///     fn is_equal(&self, other: &Self) -> bool { self.0 == other.0 }
///     fn increment(&mut self) { self.0 += 1; }
/// }
///
/// impl From<Loud> for Quiet {
///     fn from(loud: Loud) -> Self { Quiet(loud.0) }
/// }
///
/// interoperable_cursors!([] Loud => Quiet);
///
/// assert!(IteratorFacade::new(Loud(3)) == IteratorFacade::new(Quiet(3)));
/// assert!(IteratorFacade::new(Quiet(4)) != IteratorFacade::new(Loud(3)));
/// ```
#[macro_export]
macro_rules! interoperable_cursors {
    ([$($generics:tt)*] $from:ty => $to:ty) => {
        impl<$($generics)*> $crate::cursor::CursorEq<$to> for $from {
            #[inline]
            fn cursor_eq(&self, rhs: &$to) -> bool {
                $crate::cursor::Cursor::is_equal(rhs, &<$to>::from(::core::clone::Clone::clone(self)))
            }
        }

        impl<$($generics)*> $crate::cursor::CursorEq<$from> for $to {
            #[inline]
            fn cursor_eq(&self, rhs: &$from) -> bool {
                $crate::cursor::Cursor::is_equal(self, &<$to>::from(::core::clone::Clone::clone(rhs)))
            }
        }
    };
    ([$($generics:tt)*] $from:ty => $to:ty, random_access) => {
        $crate::interoperable_cursors!([$($generics)*] $from => $to);

        impl<$($generics)*> $crate::cursor::CursorDistance<$to> for $from {
            #[inline]
            fn cursor_distance(&self, rhs: &$to) -> isize {
                // Dispatched to the canonical side, so the sign flips.
                -$crate::cursor::RandomAccessCursor::distance_to(
                    rhs,
                    &<$to>::from(::core::clone::Clone::clone(self)),
                )
            }
        }

        impl<$($generics)*> $crate::cursor::CursorDistance<$from> for $to {
            #[inline]
            fn cursor_distance(&self, rhs: &$from) -> isize {
                $crate::cursor::RandomAccessCursor::distance_to(
                    self,
                    &<$to>::from(::core::clone::Clone::clone(rhs)),
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::RandomAccess;

    #[derive(Debug, Clone, PartialEq)]
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

    #[derive(Debug, Clone)]
    struct Tally(i32);

    impl Cursor for Tally {
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

    impl BidirectionalCursor for Tally {
        fn decrement(&mut self) {
            self.0 -= 1;
        }
    }

    impl RandomAccessCursor for Tally {
        fn advance(&mut self, n: isize) {
            self.0 += n as i32;
        }

        fn distance_to(&self, other: &Self) -> isize {
            (other.0 - self.0) as isize
        }
    }

    impl From<Tally> for Counter {
        fn from(tally: Tally) -> Self {
            Counter(tally.0)
        }
    }

    interoperable_cursors!([] Tally => Counter, random_access);

    #[test]
    fn test_same_type_dispatch() {
        assert!(Counter(2).cursor_eq(&Counter(2)));
        assert!(!Counter(2).cursor_eq(&Counter(3)));
        assert_eq!(Counter(2).cursor_distance(&Counter(7)), 5);
    }

    #[test]
    fn test_heterogeneous_distance_is_antisymmetric() {
        // Both directions must agree up to sign.
        assert_eq!(Tally(2).cursor_distance(&Counter(7)), 5);
        assert_eq!(Counter(7).cursor_distance(&Tally(2)), -5);
        assert_eq!(Counter(4).cursor_distance(&Tally(4)), 0);
    }

    #[test]
    fn test_heterogeneous_equality_both_directions() {
        assert!(Tally(9).cursor_eq(&Counter(9)));
        assert!(Counter(9).cursor_eq(&Tally(9)));
        assert!(!Counter(1).cursor_eq(&Tally(9)));
    }

    #[test]
    fn test_referent_addresses() {
        let value = 17_u64;
        let reference = &value;
        assert_eq!(reference.as_ptr(), &value as *const u64);

        let mut other = 3_u8;
        let address = &other as *const u8;
        let exclusive = &mut other;
        assert_eq!(Referent::as_ptr(&exclusive), address);
    }

    #[test]
    fn test_default_referent_address_is_none() {
        assert!(Counter::referent_address(&5).is_none());
    }
}
